use super::*;

/// Tests that a valid submission starts as New.
///
/// Expected: Ok with status New
#[tokio::test]
async fn creates_request_as_new() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = RequestService::new(db).create(contact_form()).await?;

    assert_eq!(request.status, RequestStatus::New);
    assert_eq!(request.found_us.as_deref(), Some("Google"));

    Ok(())
}

/// Tests that an invalid submission is rejected without storing anything.
///
/// Expected: Err(ValidationFailed) listing email and phone, empty store
#[tokio::test]
async fn rejects_invalid_submission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RequestService::new(db);
    let result = service
        .create(CreateRequestDto {
            email: Some("nope".to_string()),
            phone: None,
            ..contact_form()
        })
        .await;

    let Err(AppError::ValidationFailed(errors)) = result else {
        panic!("expected validation failure");
    };
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["email", "phone"]);

    assert!(service.list(RequestFilter::default()).await?.is_empty());

    Ok(())
}

/// Tests that a supplied status outside the vocabulary is rejected.
///
/// Expected: Err(AppError::InvalidStatus)
#[tokio::test]
async fn rejects_unknown_initial_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RequestService::new(db)
        .create(CreateRequestDto {
            status: Some("Archived".to_string()),
            ..contact_form()
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidStatus(_))));

    Ok(())
}
