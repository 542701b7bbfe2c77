use super::*;

/// Tests that employees are listed by name.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn lists_employees_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::employee::EmployeeFactory::new(db).name("Zoe").build().await?;
    factory::employee::EmployeeFactory::new(db).name("Adam").build().await?;

    let employees = EmployeeRepository::new(db).get_all().await?;

    let names: Vec<_> = employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Adam", "Zoe"]);

    Ok(())
}
