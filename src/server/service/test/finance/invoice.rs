use super::*;

/// Tests that the due date defaults to the invoice date.
///
/// Expected: Ok with due_date equal to date and status Pending
#[tokio::test]
async fn creates_invoice_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invoice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invoice = FinanceService::new(db)
        .create_invoice(CreateInvoiceDto {
            client: Some("Initech".to_string()),
            amount: Some(1250.0),
            date: Some("2024-07-15".to_string()),
            service: Some("Consulting".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(invoice.date, utc_date(2024, 7, 15));
    assert_eq!(invoice.due_date, invoice.date);
    assert_eq!(invoice.status, InvoiceStatus::Pending);

    Ok(())
}

/// Tests rejecting an unknown invoice status on update.
///
/// Expected: Err(ValidationFailed) and the stored status unchanged
#[tokio::test]
async fn rejects_unknown_status_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invoice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = InvoiceFactory::new(db).build().await?;

    let service = FinanceService::new(db);
    let result = service
        .update_invoice(
            created.id,
            UpdateInvoiceDto {
                status: Some("Refunded".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationFailed(_))));

    let invoices = service.get_invoices().await?;
    assert_eq!(invoices[0].status, InvoiceStatus::Pending);

    Ok(())
}
