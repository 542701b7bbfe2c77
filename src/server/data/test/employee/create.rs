use super::*;

fn params(email: &str) -> CreateEmployeeParams {
    CreateEmployeeParams {
        name: "Marta Ruiz".to_string(),
        email: email.to_string(),
        phone: "555-0110".to_string(),
        position: "Designer".to_string(),
        department: "Design".to_string(),
        hire_date: Utc::now(),
        salary: 2800.0,
        status: EmployeeStatus::default(),
    }
}

/// Tests creating an employee stores the status label.
///
/// Expected: Ok with status Active
#[tokio::test]
async fn creates_active_employee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = EmployeeRepository::new(db)
        .create(params("marta@example.com"))
        .await?;

    assert_eq!(employee.status, EmployeeStatus::Active);
    assert_eq!(employee.department, "Design");
    assert_eq!(employee.salary, 2800.0);

    Ok(())
}

/// Tests that employee emails are unique.
///
/// Expected: Err(AppError::DuplicateKey)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    repo.create(params("same@example.com")).await?;

    let result = repo.create(params("same@example.com")).await;

    assert!(matches!(result, Err(AppError::DuplicateKey(_))));

    Ok(())
}
