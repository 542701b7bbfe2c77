use super::*;

/// Tests employee statistics over stored records.
///
/// Expected: Ok with totals over active employees and the department breakdown
#[tokio::test]
async fn computes_employee_stats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    EmployeeFactory::new(db).department("Design").salary(3000.0).build().await?;
    EmployeeFactory::new(db).department("Sales").salary(2000.0).build().await?;
    EmployeeFactory::new(db).department("Sales").salary(4000.0).build().await?;
    EmployeeFactory::new(db)
        .department("Sales")
        .salary(9000.0)
        .status("Inactive")
        .build()
        .await?;

    let stats = EmployeeService::new(db).stats().await?;

    assert_eq!(stats.total_employees, 4);
    assert_eq!(stats.active_employees, 3);
    assert_eq!(stats.total_salaries, 9000.0);
    assert_eq!(stats.avg_salary, 3000.0);
    assert_eq!(
        stats.department_counts,
        vec![("Sales".to_string(), 2), ("Design".to_string(), 1)]
    );

    Ok(())
}

/// Tests statistics when every employee is inactive.
///
/// Expected: Ok with zero salary sum and average
#[tokio::test]
async fn zero_active_employees_give_zero_salaries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    EmployeeFactory::new(db).status("Inactive").build().await?;

    let stats = EmployeeService::new(db).stats().await?;

    assert_eq!(stats.total_employees, 1);
    assert_eq!(stats.total_salaries, 0.0);
    assert_eq!(stats.avg_salary, 0.0);

    Ok(())
}
