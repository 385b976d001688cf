use std::sync::mpsc;
use std::time::Duration;

use prospector_client::{ClientEvent, ClientHandle, ClientSettings};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

fn running_body(job: &str) -> serde_json::Value {
    json!({"jobId": job, "status": "running", "progress": 10})
}

async fn mount_running_job(server: &MockServer, job: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/results/{job}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(running_body(job)))
        .mount(server)
        .await;
}

fn handle_for(server: &MockServer) -> (ClientHandle, mpsc::Receiver<ClientEvent>) {
    let settings = ClientSettings {
        base_url: Url::parse(&server.uri()).unwrap(),
        poll_interval: POLL_INTERVAL,
        ..ClientSettings::default()
    };
    ClientHandle::new(settings)
}

async fn next_event(rx: &mpsc::Receiver<ClientEvent>) -> ClientEvent {
    for _ in 0..200 {
        if let Ok(event) = rx.try_recv() {
            return event;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("no event within the deadline");
}

async fn next_snapshot_job(rx: &mpsc::Receiver<ClientEvent>) -> String {
    loop {
        if let ClientEvent::Snapshot { job_id, .. } = next_event(rx).await {
            return job_id;
        }
    }
}

#[tokio::test]
async fn start_polling_for_a_new_job_supersedes_the_previous_loop() {
    let server = MockServer::start().await;
    mount_running_job(&server, "job-1").await;
    mount_running_job(&server, "job-2").await;

    let (handle, events) = handle_for(&server);

    handle.start_polling("job-1");
    assert_eq!(next_snapshot_job(&events).await, "job-1");

    handle.start_polling("job-2");

    // Wait for the new loop to land, then let any fetch that was already in
    // flight at cancel time finish and drain its event.
    loop {
        if next_snapshot_job(&events).await == "job-2" {
            break;
        }
    }
    tokio::time::sleep(POLL_INTERVAL * 3).await;
    while events.try_recv().is_ok() {}

    // From here on only the new job may emit.
    for _ in 0..3 {
        assert_eq!(
            next_snapshot_job(&events).await,
            "job-2",
            "superseded poll loop kept fetching"
        );
    }
}

#[tokio::test]
async fn stop_polling_ends_snapshot_delivery() {
    let server = MockServer::start().await;
    mount_running_job(&server, "job-1").await;

    let (handle, events) = handle_for(&server);

    handle.start_polling("job-1");
    assert_eq!(next_snapshot_job(&events).await, "job-1");

    handle.stop_polling();

    tokio::time::sleep(POLL_INTERVAL * 3).await;
    while events.try_recv().is_ok() {}
    tokio::time::sleep(POLL_INTERVAL * 5).await;
    assert!(events.try_recv().is_err(), "stopped poll loop kept fetching");
}
