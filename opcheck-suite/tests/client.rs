//! HTTP client and poller against the in-process stub service

mod common;

use std::time::Duration;

use common::{Outcome, StubConfig, closed_port_url, spawn_stub};
use opcheck_client::{ClientError, OperationPoller, OperationsClient, PollConfig, PollError};
use opcheck_core::domain::operation::TaskStatus;
use opcheck_core::domain::state::State;
use opcheck_core::fake::Fake;
use reqwest::StatusCode;

fn no_delay(max_retries: u32) -> PollConfig {
    PollConfig::new(max_retries, Duration::ZERO)
}

#[tokio::test]
async fn create_operation_via_http() {
    let stub = spawn_stub(StubConfig::default()).await;
    let client = OperationsClient::new(&stub.base_url);

    let request = Fake::seeded(5).operation_request(State::Kentucky).unwrap();
    let created = client.create_operation(&request).await.unwrap();

    assert!(created.success);
    assert!(!created.task_id.is_empty());

    let received = stub.state.requests.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0], request);
}

#[tokio::test]
async fn new_operation_reads_as_pending() {
    let stub = spawn_stub(StubConfig::default()).await;
    let client = OperationsClient::new(&stub.base_url);

    let created = client
        .create_operation(&Fake::seeded(1).operation_request(State::Florida).unwrap())
        .await
        .unwrap();
    let status = client.get_operation(&created.task_id).await.unwrap();

    assert_eq!(status.status, TaskStatus::Pending);
    assert_eq!(status.task_id.as_deref(), Some(created.task_id.as_str()));
}

#[tokio::test]
async fn raw_endpoints_expose_status_and_body() {
    let stub = spawn_stub(StubConfig {
        create_status: StatusCode::UNPROCESSABLE_ENTITY,
        ..StubConfig::default()
    })
    .await;
    let client = OperationsClient::new(&stub.base_url);

    let response = client
        .create_operation_api(&Fake::seeded(2).operation_request(State::Iowa).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.url.ends_with("/api/data"));
    assert_eq!(response.value().unwrap()["error"], "create rejected");
}

#[tokio::test]
async fn unknown_task_is_not_found() {
    let stub = spawn_stub(StubConfig::default()).await;
    let client = OperationsClient::new(&stub.base_url);

    let err = client.get_operation("does-not-exist").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let stub = spawn_stub(StubConfig::default()).await;
    let client = OperationsClient::new(&stub.base_url).with_auth_token("1234567890");

    let created = client
        .create_operation(&Fake::seeded(3).operation_request(State::Florida).unwrap())
        .await
        .unwrap();
    client.get_operation(&created.task_id).await.unwrap();

    let headers = stub.state.auth_headers.lock().unwrap();
    assert_eq!(headers.len(), 2);
    assert!(
        headers
            .iter()
            .all(|h| h.as_deref() == Some("Bearer 1234567890"))
    );
}

#[tokio::test]
async fn poll_settles_as_completed() {
    let stub = spawn_stub(StubConfig {
        settle_after: 2,
        outcome: Outcome::Complete,
        ..StubConfig::default()
    })
    .await;
    let client = OperationsClient::new(&stub.base_url);
    let created = client
        .create_operation(&Fake::seeded(4).operation_request(State::Florida).unwrap())
        .await
        .unwrap();

    let poller = OperationPoller::new(&client, no_delay(5));
    let settled = poller
        .poll(&created.task_id, &TaskStatus::Pending)
        .await
        .unwrap();

    assert_eq!(settled.status, TaskStatus::Completed);
    assert!(settled.result.is_some());
    assert_eq!(stub.state.reads(&created.task_id), 3);
}

#[tokio::test]
async fn poll_returns_failed_status_normally() {
    let stub = spawn_stub(StubConfig {
        settle_after: 0,
        outcome: Outcome::Fail,
        ..StubConfig::default()
    })
    .await;
    let client = OperationsClient::new(&stub.base_url);
    let created = client
        .create_operation(&Fake::seeded(6).operation_request(State::Oregon).unwrap())
        .await
        .unwrap();

    let poller = OperationPoller::new(&client, no_delay(5));
    let settled = poller
        .poll(&created.task_id, &TaskStatus::Pending)
        .await
        .unwrap();

    assert_eq!(settled.status, TaskStatus::Failed);
    assert_eq!(settled.error.as_deref(), Some("portal rejected filing"));
    assert_eq!(stub.state.reads(&created.task_id), 1);
}

#[tokio::test]
async fn poll_times_out_on_stuck_operation() {
    let stub = spawn_stub(StubConfig {
        outcome: Outcome::Never,
        ..StubConfig::default()
    })
    .await;
    let client = OperationsClient::new(&stub.base_url);
    let created = client
        .create_operation(&Fake::seeded(7).operation_request(State::Florida).unwrap())
        .await
        .unwrap();

    let poller = OperationPoller::new(&client, no_delay(3));
    let err = poller
        .poll(&created.task_id, &TaskStatus::Pending)
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::Timeout { attempts: 3, .. }));
    assert_eq!(stub.state.reads(&created.task_id), 3);
}

#[tokio::test]
async fn poll_propagates_not_found_without_retry() {
    let stub = spawn_stub(StubConfig::default()).await;
    let client = OperationsClient::new(&stub.base_url);

    let poller = OperationPoller::new(&client, no_delay(5));
    let err = poller
        .poll("does-not-exist", &TaskStatus::Pending)
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::Client(e) if e.is_not_found()));
}

#[tokio::test]
async fn poll_propagates_transport_failure() {
    let client = OperationsClient::new(closed_port_url().await);

    let poller = OperationPoller::new(&client, PollConfig::new(5, Duration::from_secs(60)));
    let err = poller.poll("task-1", &TaskStatus::Pending).await.unwrap_err();

    match err {
        PollError::Client(e @ ClientError::RequestFailed(_)) => assert!(e.is_transport()),
        other => panic!("expected transport failure, got {other:?}"),
    }
}
