//! Integration tests for the run completion poller.

use std::time::{Duration, Instant};

use pixigpt::{CancellationToken, Error, PollOptions, RunStatus};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_json(status: &str) -> serde_json::Value {
    json!({
        "id": "run_1",
        "object": "thread.run",
        "created_at": 1_700_000_000,
        "thread_id": "t_1",
        "assistant_id": "asst_1",
        "status": status,
        "model": "pixi-large",
    })
}

fn client_for(server: &MockServer) -> pixigpt::Client {
    pixigpt::Client::builder()
        .api_key("sk-test")
        .base_url(server.uri())
        .build()
        .unwrap()
}

/// Mount a status sequence: each entry answers a fixed number of polls, the
/// last entry answers from then on.
async fn mount_status_sequence(server: &MockServer, sequence: &[(&str, u64)]) {
    for (status, times) in sequence {
        let mock = Mock::given(method("GET"))
            .and(path("/threads/t_1/runs/run_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(run_json(status)));
        let mock = if *times > 0 { mock.up_to_n_times(*times) } else { mock };
        mock.mount(server).await;
    }
}

#[tokio::test]
async fn polls_until_completed() {
    let server = MockServer::start().await;
    mount_status_sequence(
        &server,
        &[("queued", 1), ("in_progress", 2), ("completed", 0)],
    )
    .await;

    let client = client_for(&server);
    let start = Instant::now();
    let run = client
        .wait_for_run("t_1", "run_1")
        .await
        .expect("run should complete");
    let elapsed = start.elapsed();

    assert_eq!(run.status, RunStatus::Completed);
    assert_eq!(server.received_requests().await.unwrap().len(), 4);
    // Four polls at 500ms spacing, first one after the initial interval.
    assert!(elapsed >= Duration::from_millis(1900), "elapsed {elapsed:?}");
}

#[tokio::test]
async fn failed_run_stops_polling_with_an_error() {
    let server = MockServer::start().await;
    mount_status_sequence(&server, &[("queued", 1), ("failed", 0)]).await;

    let client = client_for(&server);
    let err = client.wait_for_run("t_1", "run_1").await.unwrap_err();

    match err {
        Error::RunEnded { status, run } => {
            assert_eq!(status, RunStatus::Failed);
            assert_eq!(run.id, "run_1");
        }
        other => panic!("expected RunEnded, got {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn cancelled_run_reports_which_state_was_reached() {
    let server = MockServer::start().await;
    mount_status_sequence(&server, &[("cancelled", 0)]).await;

    let client = client_for(&server);
    let err = client.wait_for_run("t_1", "run_1").await.unwrap_err();
    assert!(
        matches!(err, Error::RunEnded { status: RunStatus::Cancelled, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn caller_cancellation_wins_over_the_next_tick() {
    let server = MockServer::start().await;
    mount_status_sequence(&server, &[("in_progress", 0)]).await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(1200)).await;
        canceller.cancel();
    });

    let start = Instant::now();
    let err = client
        .wait_for_run_opts(
            "t_1",
            "run_1",
            PollOptions {
                cancel: Some(cancel),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    let elapsed = start.elapsed();

    assert!(matches!(err, Error::Cancelled), "got {err:?}");
    // Two polls happened (500ms, 1000ms); cancellation fired mid third wait.
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
    assert!(elapsed < Duration::from_millis(1500), "elapsed {elapsed:?}");
}

#[tokio::test]
async fn deadline_elapsing_reports_cancellation() {
    let server = MockServer::start().await;
    mount_status_sequence(&server, &[("in_progress", 0)]).await;

    let client = client_for(&server);
    let start = Instant::now();
    let err = client
        .wait_for_run_opts(
            "t_1",
            "run_1",
            PollOptions {
                timeout: Some(Duration::from_millis(800)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    let elapsed = start.elapsed();

    assert!(matches!(err, Error::Cancelled), "got {err:?}");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
    assert!(elapsed >= Duration::from_millis(800), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(1300), "elapsed {elapsed:?}");
}

#[tokio::test]
async fn a_failing_status_call_aborts_the_wait() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/t_1/runs/run_1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = pixigpt::Client::builder()
        .api_key("sk-test")
        .base_url(server.uri())
        .retry_max(0)
        .build()
        .unwrap();

    let err = client.wait_for_run("t_1", "run_1").await.unwrap_err();
    assert!(
        matches!(err, Error::RetriesExhausted { attempts: 1, .. }),
        "got {err:?}"
    );
    // The poller delegated resilience to the executor and stopped.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
