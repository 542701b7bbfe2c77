use super::*;

/// Tests marking an invoice as paid.
///
/// Expected: Ok with status Paid and the amount untouched
#[tokio::test]
async fn saves_status_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invoice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invoice::InvoiceFactory::new(db)
        .amount(980.0)
        .build()
        .await?;

    let repo = InvoiceRepository::new(db);
    let mut invoice = repo.find_by_id(created.id).await?.unwrap();
    invoice.apply(InvoicePatch {
        status: Some(InvoiceStatus::Paid),
        ..Default::default()
    });
    let saved = repo.save(invoice).await?.unwrap();

    assert_eq!(saved.status, InvoiceStatus::Paid);
    assert_eq!(saved.amount, 980.0);

    Ok(())
}

/// Tests deleting an invoice twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_invoice_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invoice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invoice = factory::create_invoice(db).await?;

    let repo = InvoiceRepository::new(db);
    assert!(repo.delete(invoice.id).await?);
    assert!(!repo.delete(invoice.id).await?);

    Ok(())
}
