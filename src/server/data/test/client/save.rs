use super::*;

/// Tests a load, merge and save cycle that changes only the supplied fields.
///
/// Expected: Ok with the new company, untouched name and refreshed updated_at
#[tokio::test]
async fn saves_merged_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::client::ClientFactory::new(db)
        .name("Bea")
        .company("Old Co")
        .build()
        .await?;

    let repo = ClientRepository::new(db);
    let mut client = repo.find_by_id(created.id).await?.unwrap();
    client.apply(ClientPatch {
        company: Some("New Co".to_string()),
        ..Default::default()
    });
    let saved = repo.save(client).await?.unwrap();

    assert_eq!(saved.company, "New Co");
    assert_eq!(saved.name, "Bea");
    assert!(saved.updated_at >= created.updated_at);

    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(reloaded.company, "New Co");

    Ok(())
}

/// Tests that changing the email to one already taken is rejected.
///
/// Expected: Err(AppError::DuplicateKey)
#[tokio::test]
async fn rejects_email_taken_by_another_client() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::ClientFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;
    let other = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let mut client = repo.find_by_id(other.id).await?.unwrap();
    client.apply(ClientPatch {
        email: Some("taken@example.com".to_string()),
        ..Default::default()
    });

    let result = repo.save(client).await;

    assert!(matches!(result, Err(AppError::DuplicateKey(_))));

    Ok(())
}
