use super::*;

/// Tests that clients are listed in insertion order.
///
/// Expected: Ok with clients ordered by id
#[tokio::test]
async fn lists_clients_in_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let zed = factory::client::ClientFactory::new(db).name("Zed").build().await?;
    let amy = factory::client::ClientFactory::new(db).name("Amy").build().await?;

    let repo = ClientRepository::new(db);
    let clients = repo.get_all().await?;

    let ids: Vec<_> = clients.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![zed.id, amy.id]);

    Ok(())
}

/// Tests listing with no clients stored.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_clients() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clients = ClientRepository::new(db).get_all().await?;

    assert!(clients.is_empty());

    Ok(())
}
