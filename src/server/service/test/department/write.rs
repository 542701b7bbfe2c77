use super::*;

/// Tests that the budget defaults to 0 on creation.
///
/// Expected: Ok with budget 0
#[tokio::test]
async fn creates_department_with_default_budget() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = DepartmentService::new(db)
        .create(CreateDepartmentDto {
            name: Some("Legal".to_string()),
            budget: None,
        })
        .await?;

    assert_eq!(department.budget, 0.0);

    Ok(())
}

/// Tests that renaming onto an existing name is rejected.
///
/// Expected: Err(AppError::DuplicateKey)
#[tokio::test]
async fn rejects_rename_to_existing_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_department(db, "Design", 1.0).await?;
    let sales = factory::create_department(db, "Sales", 1.0).await?;

    let result = DepartmentService::new(db)
        .update(
            sales.id,
            UpdateDepartmentDto {
                name: Some("Design".to_string()),
                budget: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::DuplicateKey(_))));

    Ok(())
}
