use super::*;

/// Tests creating a department.
///
/// Expected: Ok with the given name and budget
#[tokio::test]
async fn creates_department() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = DepartmentRepository::new(db)
        .create(CreateDepartmentParams {
            name: "Support".to_string(),
            budget: 120_000.0,
        })
        .await?;

    assert_eq!(department.name, "Support");
    assert_eq!(department.budget, 120_000.0);

    Ok(())
}

/// Tests that department names are unique.
///
/// Expected: Err(AppError::DuplicateKey)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_department(db, "Design", 1000.0).await?;

    let result = DepartmentRepository::new(db)
        .create(CreateDepartmentParams {
            name: "Design".to_string(),
            budget: 0.0,
        })
        .await;

    assert!(matches!(result, Err(AppError::DuplicateKey(_))));

    Ok(())
}
