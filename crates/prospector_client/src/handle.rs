use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_error, client_info};
use tokio_util::sync::CancellationToken;

use crate::api::BackendApi;
use crate::events::{ClientCommand, ClientEvent};
use crate::poller::spawn_poller;
use crate::settings::ClientSettings;
use crate::wire::SearchPayload;

/// Handle to the client worker thread. Commands go in over a channel; the
/// worker owns the tokio runtime, the HTTP client, and the single active
/// poll loop.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    /// Starts the worker and returns the handle plus the event receiver for
    /// the app loop to drain.
    pub fn new(settings: ClientSettings) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || worker_loop(settings, cmd_rx, event_tx));

        (Self { cmd_tx }, event_rx)
    }

    pub fn probe_health(&self) {
        self.send(ClientCommand::ProbeHealth);
    }

    pub fn start_search(&self, payload: SearchPayload) {
        self.send(ClientCommand::StartSearch(payload));
    }

    pub fn start_polling(&self, job_id: impl Into<String>) {
        self.send(ClientCommand::StartPolling {
            job_id: job_id.into(),
        });
    }

    pub fn stop_polling(&self) {
        self.send(ClientCommand::StopPolling);
    }

    pub fn download_csv(
        &self,
        job_id: impl Into<String>,
        dest_dir: PathBuf,
        fallback_filename: impl Into<String>,
    ) {
        self.send(ClientCommand::DownloadCsv {
            job_id: job_id.into(),
            dest_dir,
            fallback_filename: fallback_filename.into(),
        });
    }

    fn send(&self, command: ClientCommand) {
        // A closed channel means the worker is gone during shutdown.
        let _ = self.cmd_tx.send(command);
    }
}

fn worker_loop(
    settings: ClientSettings,
    cmd_rx: mpsc::Receiver<ClientCommand>,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            client_error!("Could not start client runtime: {err}");
            return;
        }
    };
    let api = match BackendApi::new(settings) {
        Ok(api) => Arc::new(api),
        Err(err) => {
            client_error!("Could not build HTTP client: {err}");
            return;
        }
    };

    // The one live poll loop; replaced atomically on StartPolling.
    let mut poll_token: Option<CancellationToken> = None;

    while let Ok(command) = cmd_rx.recv() {
        match command {
            ClientCommand::ProbeHealth => {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let probe = api.probe_health().await;
                    let _ = event_tx.send(ClientEvent::HealthChecked(probe));
                });
            }
            ClientCommand::StartSearch(payload) => {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = match api.start_search(&payload).await {
                        Ok(accepted) => {
                            client_info!("Search accepted, job {}", accepted.job_id);
                            ClientEvent::SearchStarted {
                                job_id: accepted.job_id,
                            }
                        }
                        Err(err) => ClientEvent::SearchFailed {
                            message: err.to_string(),
                        },
                    };
                    let _ = event_tx.send(event);
                });
            }
            ClientCommand::StartPolling { job_id } => {
                if let Some(token) = poll_token.take() {
                    token.cancel();
                }
                let _guard = runtime.enter();
                poll_token = Some(spawn_poller(api.clone(), job_id, event_tx.clone()));
            }
            ClientCommand::StopPolling => {
                if let Some(token) = poll_token.take() {
                    token.cancel();
                }
            }
            ClientCommand::DownloadCsv {
                job_id,
                dest_dir,
                fallback_filename,
            } => {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = match api
                        .download_csv(&job_id, &dest_dir, &fallback_filename)
                        .await
                    {
                        Ok(path) => ClientEvent::CsvSaved { path },
                        Err(err) => ClientEvent::CsvFailed {
                            message: err.to_string(),
                        },
                    };
                    let _ = event_tx.send(event);
                });
            }
        }
    }

    // Handle dropped; tear the poll loop down with it.
    if let Some(token) = poll_token {
        token.cancel();
    }
}
