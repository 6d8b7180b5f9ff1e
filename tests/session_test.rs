use std::sync::Arc;
use std::time::Duration;

use exude::analysis::analyzer::AnalyzerKind;
use exude::analysis::messages::Locale;
use exude::config::ToolkitConfig;
use exude::session::{AnalysisSession, Delivery, SessionState};
use exude::toolkit::Toolkit;
use tokio::time::Instant;

fn session(latency: Duration) -> AnalysisSession {
    let config = ToolkitConfig::default()
        .with_locale(Locale::English)
        .with_simulated_latency(latency);
    AnalysisSession::new(config).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_default_latency_is_applied() {
    let session = AnalysisSession::new(ToolkitConfig::default()).unwrap();
    assert_eq!(session.latency(), Duration::from_millis(700));

    let start = Instant::now();
    let delivery = session.run(AnalyzerKind::Stemming, "running").await;

    assert!(delivery.is_delivered());
    assert!(start.elapsed() >= Duration::from_millis(700));
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_skips_latency() {
    let session = session(Duration::from_millis(700));

    let start = Instant::now();
    let delivery = session.run(AnalyzerKind::Profanity, "").await;

    assert!(delivery.result().unwrap().is_error());
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_resubmission_delivers_only_latest() {
    let session = session(Duration::from_millis(700));
    let mut states = session.subscribe();

    let texts = ["damn", "stupid idiot", "hell", "what the crap"];
    let pending: Vec<_> = texts
        .iter()
        .map(|text| session.begin(AnalyzerKind::Profanity, text))
        .collect();
    assert_eq!(session.latest_generation(), 4);
    assert!(session.is_busy());

    let deliveries = complete_in_order(pending).await;
    let delivered: Vec<_> = deliveries.iter().filter(|d| d.is_delivered()).collect();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].result().unwrap().terms, vec!["crap"]);

    for delivery in &deliveries[..3] {
        assert!(matches!(delivery, Delivery::Superseded { latest: 4, .. }));
    }

    let state = states.borrow_and_update().clone();
    assert!(matches!(state, SessionState::Ready { generation: 4, .. }));
}

#[tokio::test(start_paused = true)]
async fn test_newer_blank_input_supersedes_pending_analysis() {
    let session = session(Duration::from_millis(700));

    let slow = session.begin(AnalyzerKind::StopWords, "the fox");
    let blank = session.begin(AnalyzerKind::StopWords, "  ");

    assert!(blank.complete().await.is_delivered());
    assert!(!slow.complete().await.is_delivered());
    assert!(session.state().result().unwrap().is_error());
}

#[tokio::test(start_paused = true)]
async fn test_submitted_requests_run_on_runtime() {
    let session = session(Duration::from_millis(700));
    let mut states = session.subscribe();

    session.submit(AnalyzerKind::SummaryKeywords, "A report.");
    let last = session.submit(AnalyzerKind::SummaryKeywords, "Innovation and technology.");

    let state = states
        .wait_for(|state| matches!(state, SessionState::Ready { .. }))
        .await
        .unwrap()
        .clone();

    assert_eq!(state.generation(), Some(last));
    assert_eq!(
        state.result().unwrap().terms,
        vec!["innovation", "technology"]
    );
}

#[test]
fn test_shared_toolkit_session_outside_async_test() {
    let toolkit = Arc::new(Toolkit::new(ToolkitConfig::default()).unwrap());
    let session = AnalysisSession::with_toolkit(Arc::clone(&toolkit), Duration::ZERO);

    let delivery = tokio_test::block_on(session.run(AnalyzerKind::Profanity, "you idiot"));

    assert_eq!(
        delivery.result().map(|r| r.as_ref()),
        Some(&toolkit.analyze(AnalyzerKind::Profanity, "you idiot"))
    );
}

async fn complete_in_order(
    pending: Vec<exude::session::PendingAnalysis>,
) -> Vec<Delivery> {
    let mut deliveries = Vec::with_capacity(pending.len());
    for request in pending {
        deliveries.push(request.complete().await);
    }
    deliveries
}
