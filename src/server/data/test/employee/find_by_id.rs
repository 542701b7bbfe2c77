use super::*;

/// Tests finding a missing employee.
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

    let employee = EmployeeRepository::new(db).find_by_id(42).await?;

    assert!(employee.is_none());

    Ok(())
}

/// Tests that an unknown stored status surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr(UnknownStoredStatus))
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::employee::EmployeeFactory::new(db)
        .status("On Leave")
        .build()
        .await?;

    let result = EmployeeRepository::new(db).find_by_id(stored.id).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::UnknownStoredStatus { .. }))
    ));

    Ok(())
}
