//! Tests for the fetch, parse and compare cycle

use super::*;

#[tokio::test]
async fn test_first_update_keeps_declared_order() {
    // The domestic source finishes last but is still merged first
    let domestic = MockSource::new("domestic", &[CONVECTIVE_SIGMET]).with_delay(50);
    let international = MockSource::new("international", &[FUKUOKA_SIGMET, CYCLONE_SIGMET]);
    let mut manager = create_test_manager(&[&domestic, &international]);

    assert!(manager.reports().is_none());
    assert!(manager.update().await.unwrap());

    let sources: Vec<&str> = manager
        .reports()
        .unwrap()
        .iter()
        .map(|report| report.source.as_str())
        .collect();
    assert_eq!(sources, vec!["domestic", "international", "international"]);
    assert_eq!(manager.last_stats().reports_parsed, 3);
    assert!(manager.last_updated().is_some());
}

#[tokio::test]
async fn test_unchanged_update_reports_no_change() {
    let domestic = MockSource::new("domestic", &[CONVECTIVE_SIGMET]);
    let mut manager = create_test_manager(&[&domestic]);

    assert!(manager.update().await.unwrap());
    let first_update = manager.last_updated();
    assert!(!manager.update().await.unwrap());
    assert_eq!(manager.last_updated(), first_update);

    domestic.set_bulletins(&[CONVECTIVE_SIGMET, FUKUOKA_SIGMET]);
    assert!(manager.update().await.unwrap());
    assert_eq!(manager.reports().unwrap().len(), 2);
}

#[tokio::test]
async fn test_fetch_failure_keeps_previous_snapshot() {
    let domestic = MockSource::new("domestic", &[CONVECTIVE_SIGMET]);
    let international = MockSource::new("international", &[FUKUOKA_SIGMET]);
    let mut manager = create_test_manager(&[&domestic, &international]);
    manager.update().await.unwrap();

    international.fail();
    domestic.set_bulletins(&[CYCLONE_SIGMET]);
    let result = manager.update().await;

    match result {
        Err(Error::BulletinFetch { source_name, .. }) => assert_eq!(source_name, "international"),
        other => panic!("unexpected result: {:?}", other),
    }
    let reports = manager.reports().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].data.area, "SIGC");
}

#[tokio::test]
async fn test_unparseable_reports_are_skipped() {
    let domestic = MockSource::new(
        "domestic",
        &["WSCN31 RJTD", FUKUOKA_SIGMET, "NOT A SIGMET AT ALL"],
    );
    let mut manager = create_test_manager(&[&domestic]);

    assert!(manager.update().await.unwrap());
    assert_eq!(manager.reports().unwrap().len(), 1);

    let stats = manager.last_stats();
    assert_eq!(stats.bulletins_fetched, 3);
    assert_eq!(stats.reports_parsed, 1);
    assert_eq!(stats.reports_skipped, 2);
}

#[tokio::test]
async fn test_empty_sources_give_empty_snapshot() {
    let domestic = MockSource::new("domestic", &[]);
    let mut manager = create_test_manager(&[&domestic]);

    assert!(manager.update().await.unwrap());
    assert_eq!(manager.reports().unwrap().len(), 0);
    assert_eq!(manager.source_names(), vec!["domestic"]);
}
