use crate::snapshot::{JobId, JobStatus, Snapshot};
use crate::validate::GeographyMode;
use crate::view_model::DashboardViewModel;

/// Backend reachability as established by the one-shot health probe.
/// Only `Msg::HealthChecked` moves this; polling never touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Checking,
    Ready,
    NoApiKey,
    Offline,
    Error,
}

/// Raw form fields as the user typed them. Normalization happens in the
/// validator, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub keywords_input: String,
    pub state_code: String,
    pub geography_mode: GeographyMode,
    pub cities_input: String,
    pub min_results_input: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            keywords_input: String::new(),
            state_code: String::new(),
            geography_mode: GeographyMode::State,
            cities_input: String::new(),
            min_results_input: String::new(),
        }
    }
}

/// The single active job. At most one exists; a new submission supersedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveJob {
    pub id: JobId,
    pub status: JobStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub(crate) form: FormState,
    pub(crate) backend: BackendStatus,
    pub(crate) validation_error: Option<crate::ValidationError>,
    pub(crate) submit_error: Option<String>,
    pub(crate) submitting: bool,
    pub(crate) active: Option<ActiveJob>,
    pub(crate) snapshot: Option<Snapshot>,
    dirty: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DashboardViewModel {
        crate::view_model::build(self)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn backend(&self) -> BackendStatus {
        self.backend
    }

    pub fn active_job(&self) -> Option<&ActiveJob> {
        self.active.as_ref()
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
