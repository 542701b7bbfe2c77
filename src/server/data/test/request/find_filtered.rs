use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    RequestFactory::new(db)
        .name("John Smith")
        .service("Consulting")
        .date(utc_date(2024, 1, 1))
        .build()
        .await?;
    RequestFactory::new(db)
        .name("Ana")
        .email("JOHNNY@example.com")
        .service("Consulting")
        .status("Contacted")
        .date(utc_date(2024, 1, 2))
        .build()
        .await?;
    RequestFactory::new(db)
        .name("John Doe")
        .service("Design")
        .date(utc_date(2024, 1, 3))
        .build()
        .await?;
    RequestFactory::new(db)
        .name("Maria")
        .service("Consulting")
        .date(utc_date(2024, 1, 4))
        .build()
        .await?;
    Ok(())
}

/// Tests service filter combined with a case-insensitive search across name and email.
///
/// Expected: Ok with both Consulting requests mentioning john, newest first
#[tokio::test]
async fn filters_by_service_and_search() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let filter = RequestFilter {
        status: None,
        service: Some("Consulting".to_string()),
        search: Some("JoHn".to_string()),
    };
    let requests = RequestRepository::new(db).find_filtered(&filter).await?;

    let names: Vec<_> = requests.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "John Smith"]);

    Ok(())
}

/// Tests the exact status filter.
///
/// Expected: Ok with only the Contacted request
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let filter = RequestFilter {
        status: Some("Contacted".to_string()),
        ..Default::default()
    };
    let requests = RequestRepository::new(db).find_filtered(&filter).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].status, RequestStatus::Contacted);

    Ok(())
}

/// Tests that an unrestricted filter returns everything sorted by date descending.
///
/// Expected: Ok with all four requests, newest first
#[tokio::test]
async fn returns_all_when_unrestricted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let requests = RequestRepository::new(db)
        .find_filtered(&RequestFilter::default())
        .await?;

    let names: Vec<_> = requests.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Maria", "John Doe", "Ana", "John Smith"]);

    Ok(())
}

/// Tests that wildcard characters in the search term are matched literally.
///
/// Expected: Ok with only the request whose name contains a literal percent sign
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RequestFactory::new(db).name("100% Organic").build().await?;
    RequestFactory::new(db).name("Plain Name").build().await?;

    let filter = RequestFilter {
        search: Some("%".to_string()),
        ..Default::default()
    };
    let requests = RequestRepository::new(db).find_filtered(&filter).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].name, "100% Organic");

    Ok(())
}

/// Tests that the search ignores case for accented letters too.
///
/// Expected: Ok with the upper-case accented name matched by a mixed-case term
#[tokio::test]
async fn search_ignores_case_of_accented_letters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RequestFactory::new(db)
        .name("JOSÉ NÚÑEZ")
        .service("Consulting")
        .build()
        .await?;
    RequestFactory::new(db)
        .name("Jose Nunez")
        .service("Consulting")
        .build()
        .await?;

    let filter = RequestFilter {
        service: Some("Consulting".to_string()),
        search: Some("José".to_string()),
        ..Default::default()
    };
    let requests = RequestRepository::new(db).find_filtered(&filter).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].name, "JOSÉ NÚÑEZ");

    Ok(())
}
