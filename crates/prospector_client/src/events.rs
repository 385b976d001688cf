use std::path::PathBuf;

use crate::api::HealthProbe;
use crate::wire::{SearchPayload, SnapshotPayload};

/// Commands the app sends into the client worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Run the one-shot health probe.
    ProbeHealth,
    /// Submit a search and report the issued job id.
    StartSearch(SearchPayload),
    /// Bind the poll loop to this job id, cancelling any previous loop.
    StartPolling { job_id: String },
    /// Cancel the poll loop, if any.
    StopPolling,
    /// Stream the finished job's CSV into `dest_dir`.
    DownloadCsv {
        job_id: String,
        dest_dir: PathBuf,
        fallback_filename: String,
    },
}

/// Events the client worker reports back to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    HealthChecked(HealthProbe),
    SearchStarted { job_id: String },
    SearchFailed { message: String },
    /// One poll fetch resolved. Tagged with the job id the fetch was issued
    /// for so stale responses can be discarded downstream.
    Snapshot {
        job_id: String,
        payload: SnapshotPayload,
    },
    CsvSaved { path: PathBuf },
    CsvFailed { message: String },
}
