//! Prospector core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod snapshot;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::{HealthOutcome, Msg};
pub use snapshot::{Business, Counts, JobId, JobStatus, LowResultWarning, Snapshot};
pub use state::{ActiveJob, BackendStatus, DashboardState, FormState};
pub use update::update;
pub use validate::{
    validate, GeographyMode, SearchRequest, ValidationError, DEFAULT_MIN_RESULTS,
};
pub use view_model::{
    BusinessRow, DashboardViewModel, QualityStats, SummaryStats, FIELD_PLACEHOLDER,
};
