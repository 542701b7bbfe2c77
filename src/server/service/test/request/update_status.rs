use super::*;

/// Tests a status update within the vocabulary.
///
/// Expected: Ok(Some) with status Contacted
#[tokio::test]
async fn updates_to_listed_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = RequestFactory::new(db).build().await?;

    let updated = RequestService::new(db)
        .update_status(
            created.id,
            UpdateRequestStatusDto {
                status: Some("Contacted".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, RequestStatus::Contacted);

    Ok(())
}

/// Tests that a terminal request can be reopened.
///
/// Expected: Ok(Some) with status New
#[tokio::test]
async fn reopens_completed_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = RequestFactory::new(db).status("Completed").build().await?;

    let updated = RequestService::new(db)
        .update_status(
            created.id,
            UpdateRequestStatusDto {
                status: Some("New".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, RequestStatus::New);

    Ok(())
}

/// Tests that an invalid target leaves the record unchanged.
///
/// Expected: Err(AppError::InvalidStatus), stored status and updated_at untouched
#[tokio::test]
async fn invalid_target_leaves_record_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = RequestFactory::new(db)
        .status("Contacted")
        .timestamps(utc_date(2024, 1, 1), utc_date(2024, 1, 2))
        .build()
        .await?;

    let service = RequestService::new(db);
    let result = service
        .update_status(
            created.id,
            UpdateRequestStatusDto {
                status: Some("Archived".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidStatus(_))));

    let stored = service.list(RequestFilter::default()).await?;
    assert_eq!(stored[0].status, RequestStatus::Contacted);
    assert_eq!(stored[0].updated_at, utc_date(2024, 1, 2));

    Ok(())
}

/// Tests a missing target status.
///
/// Expected: Err(AppError::InvalidStatus)
#[tokio::test]
async fn rejects_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = RequestFactory::new(db).build().await?;

    let result = RequestService::new(db)
        .update_status(created.id, UpdateRequestStatusDto { status: None })
        .await;

    assert!(matches!(result, Err(AppError::InvalidStatus(_))));

    Ok(())
}

/// Tests updating a request that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RequestService::new(db)
        .update_status(
            404,
            UpdateRequestStatusDto {
                status: Some("Completed".to_string()),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
