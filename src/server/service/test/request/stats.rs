use super::*;

/// Tests request statistics over stored records.
///
/// Expected: Ok with service and source groups, distinct emails and mean response time
#[tokio::test]
async fn computes_request_stats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = utc_date(2024, 6, 1);
    RequestFactory::new(db)
        .email("a@example.com")
        .status("Contacted")
        .found_us("Google")
        .timestamps(start, start + Duration::minutes(10))
        .build()
        .await?;
    RequestFactory::new(db)
        .email("a@example.com")
        .service("Design")
        .status("Contacted")
        .timestamps(start, start + Duration::minutes(20))
        .build()
        .await?;
    RequestFactory::new(db)
        .email("b@example.com")
        .timestamps(start, start + Duration::hours(5))
        .build()
        .await?;

    let service = RequestService::new(db);
    let stats = service.stats().await?;

    assert_eq!(stats.total_requests, 3);
    assert_eq!(
        stats.service_breakdown,
        vec![("Consulting".to_string(), 2), ("Design".to_string(), 1)]
    );
    assert_eq!(
        stats.source_breakdown,
        vec![(None, 2), (Some("Google".to_string()), 1)]
    );
    assert_eq!(stats.active_clients, 2);
    assert_eq!(stats.avg_response_time_ms, 15.0 * 60.0 * 1000.0);

    assert_eq!(service.stats().await?, stats);

    Ok(())
}

/// Tests statistics with no requests.
///
/// Expected: Ok with zero totals and empty breakdowns
#[tokio::test]
async fn stats_for_empty_store_are_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = RequestService::new(db).stats().await?;

    assert_eq!(stats.total_requests, 0);
    assert!(stats.service_breakdown.is_empty());
    assert!(stats.source_breakdown.is_empty());
    assert_eq!(stats.avg_response_time_ms, 0.0);

    Ok(())
}
