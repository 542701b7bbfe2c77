use super::*;

/// Tests rejecting a client payload with missing fields.
///
/// Expected: Err(ValidationFailed) for every missing field
#[tokio::test]
async fn rejects_missing_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClientService::new(db)
        .create(CreateClientDto {
            name: Some("Ana".to_string()),
            ..Default::default()
        })
        .await;

    let Err(AppError::ValidationFailed(errors)) = result else {
        panic!("expected validation failure");
    };
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["email", "phone", "company"]);

    Ok(())
}

/// Tests a partial update changing only the status.
///
/// Expected: Ok(Some) with the new status and the original email
#[tokio::test]
async fn updates_status_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_client(db).await?;

    let updated = ClientService::new(db)
        .update(
            created.id,
            UpdateClientDto {
                status: Some("Inactive".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, "Inactive");
    assert_eq!(updated.email, created.email);

    Ok(())
}
