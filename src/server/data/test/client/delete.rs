use super::*;

/// Tests deleting an existing client leaves its invoices in place.
///
/// Expected: Ok(true), invoice still present
#[tokio::test]
async fn deletes_client_without_cascading() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .with_table(entity::prelude::Invoice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db)
        .client_id(client.id)
        .build()
        .await?;

    let repo = ClientRepository::new(db);
    let deleted = repo.delete(client.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(client.id).await?.is_none());

    let invoice_repo = crate::server::data::invoice::InvoiceRepository::new(db);
    let kept = invoice_repo.find_by_id(invoice.id).await?.unwrap();
    assert_eq!(kept.client_id, Some(client.id));

    Ok(())
}

/// Tests deleting a missing client.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_client() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ClientRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
