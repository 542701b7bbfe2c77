use super::*;

/// Tests that invoices are listed newest date first.
///
/// Expected: Ok with dates in descending order
#[tokio::test]
async fn lists_invoices_by_date_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invoice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let january = factory::invoice::InvoiceFactory::new(db)
        .date(utc_date(2024, 1, 10))
        .build()
        .await?;
    let march = factory::invoice::InvoiceFactory::new(db)
        .date(utc_date(2024, 3, 10))
        .build()
        .await?;
    let february = factory::invoice::InvoiceFactory::new(db)
        .date(utc_date(2024, 2, 10))
        .build()
        .await?;

    let invoices = InvoiceRepository::new(db).get_all().await?;

    let ids: Vec<_> = invoices.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![march.id, february.id, january.id]);

    Ok(())
}
