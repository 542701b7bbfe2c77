use super::*;

/// Tests that a zero salary and a status change are both persisted.
///
/// Expected: Ok with salary 0, status Inactive and other fields untouched
#[tokio::test]
async fn saves_zero_salary_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::employee::EmployeeFactory::new(db)
        .department("Sales")
        .salary(3100.0)
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let mut employee = repo.find_by_id(created.id).await?.unwrap();
    employee.apply(EmployeePatch {
        salary: Some(0.0),
        status: Some(EmployeeStatus::Inactive),
        ..Default::default()
    });
    repo.save(employee).await?;

    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(reloaded.salary, 0.0);
    assert_eq!(reloaded.status, EmployeeStatus::Inactive);
    assert_eq!(reloaded.department, "Sales");

    Ok(())
}

/// Tests saving an employee whose row was deleted after it was loaded.
///
/// Expected: Ok(None) and no row is recreated
#[tokio::test]
async fn returns_none_when_row_deleted_before_save() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::employee::EmployeeFactory::new(db).build().await?;

    let repo = EmployeeRepository::new(db);
    let mut employee = repo.find_by_id(created.id).await?.unwrap();
    assert!(repo.delete(created.id).await?);

    employee.apply(EmployeePatch {
        salary: Some(4200.0),
        ..Default::default()
    });
    let result = repo.save(employee).await?;

    assert!(result.is_none());
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
