use super::*;

/// Tests that an update only changes supplied fields, including a zero salary.
///
/// Expected: Ok(Some) with salary 0 and the original name
#[tokio::test]
async fn merges_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = EmployeeFactory::new(db).name("Hugo").salary(2000.0).build().await?;

    let updated = EmployeeService::new(db)
        .update(
            created.id,
            UpdateEmployeeDto {
                salary: Some(0.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.salary, 0.0);
    assert_eq!(updated.name, "Hugo");

    Ok(())
}

/// Tests updating a missing employee.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_employee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EmployeeService::new(db)
        .update(7, UpdateEmployeeDto::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
