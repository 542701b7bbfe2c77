use super::*;

fn payload() -> CreateEmployeeDto {
    CreateEmployeeDto {
        name: Some("Lucia Vega".to_string()),
        email: Some("lucia@example.com".to_string()),
        phone: Some("555-0120".to_string()),
        position: Some("QA Lead".to_string()),
        department: Some("Quality".to_string()),
        hire_date: Some("2023-09-01".to_string()),
        salary: Some(3900.0),
        status: None,
    }
}

/// Tests creating an employee with default status.
///
/// Expected: Ok with status Active and the parsed hire date
#[tokio::test]
async fn creates_employee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = EmployeeService::new(db).create(payload()).await?;

    assert_eq!(employee.status, EmployeeStatus::Active);
    assert_eq!(employee.hire_date.to_rfc3339(), "2023-09-01T00:00:00+00:00");

    Ok(())
}

/// Tests rejecting a negative salary and an unknown status.
///
/// Expected: Err(ValidationFailed) for salary and status
#[tokio::test]
async fn rejects_negative_salary_and_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EmployeeService::new(db)
        .create(CreateEmployeeDto {
            salary: Some(-10.0),
            status: Some("Retired".to_string()),
            ..payload()
        })
        .await;

    let Err(AppError::ValidationFailed(errors)) = result else {
        panic!("expected validation failure");
    };
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["salary", "status"]);

    Ok(())
}
