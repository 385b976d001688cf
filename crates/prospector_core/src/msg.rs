use crate::snapshot::{JobId, Snapshot};
use crate::state::FormState;
use crate::validate::GeographyMode;

/// Raw outcome of the one-shot health probe, before mapping to a
/// `BackendStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthOutcome {
    /// 2xx response; flag mirrors the backend's `apiKeyConfigured` field.
    Reachable { api_key_configured: bool },
    /// Reachable but non-2xx.
    HttpError { status: u16 },
    /// No response at all.
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App mounted; triggers the single health probe.
    Started,
    /// User edited the keywords field.
    KeywordsChanged(String),
    /// User picked a two-letter state code.
    StateSelected(String),
    /// User toggled between state-wide and per-city search.
    GeographyModeChanged(GeographyMode),
    /// User edited the cities field.
    CitiesChanged(String),
    /// User edited the minimum-results field.
    MinResultsChanged(String),
    /// Persisted form settings restored at startup.
    RestoreForm(FormState),
    /// User clicked Submit.
    SubmitClicked,
    /// Health probe resolved.
    HealthChecked(HealthOutcome),
    /// Submission succeeded; backend issued a job id.
    SearchStarted { job_id: JobId },
    /// Submission failed with a displayable message.
    SearchFailed { message: String },
    /// A poll fetch resolved for the given job id.
    SnapshotArrived { job_id: JobId, snapshot: Snapshot },
    /// User clicked the CSV download button.
    DownloadCsvClicked,
    /// User dismissed the submission-error banner.
    ErrorDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
