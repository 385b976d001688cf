use crate::snapshot::JobId;
use crate::state::FormState;
use crate::validate::SearchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Probe GET /api/health once.
    ProbeHealth,
    /// POST the validated request to /api/search.
    SubmitSearch(SearchRequest),
    /// Start the 2 s poll loop bound to this job id, cancelling any
    /// previous loop.
    StartPolling { job_id: JobId },
    /// Cancel the poll loop; emitted on the first terminal snapshot.
    StopPolling,
    /// Stream GET /api/results/{job_id}/csv to disk.
    DownloadCsv { job_id: JobId },
    /// Save the form fields for the next session.
    PersistForm(FormState),
}
