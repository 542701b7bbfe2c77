use super::*;

fn params(email: &str) -> CreateClientParams {
    CreateClientParams {
        name: "Ana Torres".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        company: "Torres & Co".to_string(),
    }
}

/// Tests creating a client with the default status.
///
/// Expected: Ok with status "Active" and equal timestamps
#[tokio::test]
async fn creates_client_with_default_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let client = repo.create(params("ana@example.com")).await?;

    assert_eq!(client.name, "Ana Torres");
    assert_eq!(client.status, "Active");
    assert_eq!(client.created_at, client.updated_at);

    Ok(())
}

/// Tests that a second client with the same email is rejected.
///
/// Expected: Err(AppError::DuplicateKey)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    repo.create(params("dup@example.com")).await?;

    let result = repo.create(params("dup@example.com")).await;

    assert!(matches!(result, Err(AppError::DuplicateKey(_))));

    Ok(())
}
