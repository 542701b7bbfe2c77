use super::*;

/// Tests creating an invoice with a weak client reference.
///
/// Expected: Ok with the reference stored and no client table required
#[tokio::test]
async fn creates_invoice_with_weak_client_reference() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invoice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invoice = InvoiceRepository::new(db)
        .create(CreateInvoiceParams {
            client: "Globex".to_string(),
            amount: 450.0,
            date: utc_date(2024, 4, 1),
            due_date: utc_date(2024, 5, 1),
            status: InvoiceStatus::default(),
            service: "Design".to_string(),
            client_id: Some(77),
        })
        .await?;

    assert_eq!(invoice.status, InvoiceStatus::Pending);
    assert_eq!(invoice.client_id, Some(77));
    assert_eq!(invoice.due_date, utc_date(2024, 5, 1));

    Ok(())
}
