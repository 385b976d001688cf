use std::sync::mpsc;
use std::sync::Arc;

use client_logging::{client_debug, client_info, client_warn, set_poll_tick};
use tokio_util::sync::CancellationToken;

use crate::api::BackendApi;
use crate::events::ClientEvent;

/// Spawns the poll loop for one job id on the current tokio runtime and
/// returns the token that cancels it.
///
/// Fetches are strictly sequential: each one starts only after the previous
/// fetch finished and the fixed interval elapsed. Fetch failures are logged
/// and swallowed; the next tick self-heals. The loop ends on cancellation or
/// on the first terminal snapshot, whichever comes first.
pub fn spawn_poller(
    api: Arc<BackendApi>,
    job_id: String,
    event_tx: mpsc::Sender<ClientEvent>,
) -> CancellationToken {
    let token = CancellationToken::new();
    let task_token = token.clone();
    tokio::spawn(async move {
        run_poll_loop(api, job_id, event_tx, task_token).await;
    });
    token
}

async fn run_poll_loop(
    api: Arc<BackendApi>,
    job_id: String,
    event_tx: mpsc::Sender<ClientEvent>,
    token: CancellationToken,
) {
    let interval = api.settings().poll_interval;
    let preview = api.settings().preview_size;
    let mut tick: u64 = 0;

    client_info!("Polling started for job {job_id}");
    loop {
        tokio::select! {
            _ = token.cancelled() => {
                client_info!("Polling cancelled for job {job_id}");
                return;
            }
            _ = tokio::time::sleep(interval) => {}
        }

        tick += 1;
        set_poll_tick(tick);

        match api.fetch_snapshot(&job_id, preview).await {
            Ok(payload) => {
                let terminal = payload.status.is_terminal();
                let delivered = event_tx
                    .send(ClientEvent::Snapshot {
                        job_id: job_id.clone(),
                        payload,
                    })
                    .is_ok();
                if !delivered {
                    // Receiver gone; the app is shutting down.
                    return;
                }
                if terminal {
                    client_info!("Polling settled for job {job_id}");
                    return;
                }
            }
            Err(err) => {
                // Transient poll failures are expected noise; never surfaced.
                client_warn!("Poll fetch failed for job {job_id}: {err}");
            }
        }

        client_debug!("Poll tick done for job {job_id}");
    }
}
