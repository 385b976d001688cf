//! Prospector client: HTTP collaborator access and the poll loop.
mod api;
mod error;
mod events;
mod handle;
mod persist;
mod poller;
mod settings;
mod wire;

pub use api::{BackendApi, HealthProbe};
pub use error::ClientError;
pub use events::{ClientCommand, ClientEvent};
pub use handle::ClientHandle;
pub use persist::{write_atomic, PersistError};
pub use poller::spawn_poller;
pub use settings::{
    ClientSettings, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL, DEFAULT_PREVIEW_SIZE,
};
pub use wire::{
    BusinessPayload, CountsPayload, ErrorBody, HealthPayload, LowResultWarningPayload,
    SearchAccepted, SearchPayload, SnapshotPayload, WireStatus,
};
