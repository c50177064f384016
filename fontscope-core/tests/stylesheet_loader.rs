#![cfg(feature = "fetch")]

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use fontscope_core::stylesheet::{LoadOutcome, Resolved, StylesheetLoader, SubmissionTracker};

const CSS: &str = "@font-face { font-family: 'Inter'; font-weight: 400; }";

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/css2", get(|| async { CSS }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                CSS
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn loader() -> StylesheetLoader {
    StylesheetLoader::new(Duration::from_millis(300)).expect("loader")
}

#[tokio::test]
async fn reachable_stylesheet_is_loaded() {
    let base = spawn_server().await;
    let outcome = loader().load(&format!("{base}/css2?family=Inter")).await;

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            status: 200,
            bytes: CSS.len()
        }
    );
}

#[tokio::test]
async fn http_error_is_a_failure() {
    let base = spawn_server().await;
    let outcome = loader().load(&format!("{base}/missing")).await;

    match outcome {
        LoadOutcome::Failed(msg) => assert!(msg.contains("404"), "{msg}"),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_stylesheet_times_out_but_proceeds() {
    let base = spawn_server().await;
    let outcome = loader().load(&format!("{base}/slow")).await;

    assert_eq!(outcome, LoadOutcome::TimedOut);
    assert!(outcome.proceed());
}

#[tokio::test]
async fn newer_submission_supersedes_older_one() {
    let base = spawn_server().await;
    let mut tracker = SubmissionTracker::new(
        StylesheetLoader::new(Duration::from_secs(10)).expect("loader"),
    );

    let stale = tracker.submit(&format!("{base}/slow"));
    let fresh = tracker.submit(&format!("{base}/css2"));
    assert_eq!(stale.generation() + 1, fresh.generation());
    assert!(!tracker.is_current(stale.generation()));

    assert_eq!(tracker.finish(stale).await, Resolved::Superseded);
    match tracker.finish(fresh).await {
        Resolved::Current(LoadOutcome::Loaded { status, .. }) => assert_eq!(status, 200),
        other => panic!("expected current load, got {other:?}"),
    }
}

#[tokio::test]
async fn finished_submission_is_current_until_replaced() {
    let base = spawn_server().await;
    let mut tracker = SubmissionTracker::new(loader());

    let first = tracker.submit(&format!("{base}/css2"));
    assert!(matches!(
        tracker.finish(first).await,
        Resolved::Current(LoadOutcome::Loaded { .. })
    ));
}
