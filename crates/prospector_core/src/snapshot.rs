use std::fmt;

/// Opaque backend-issued job identifier. Never parsed or interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(pub String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    /// Completed and Failed are terminal; no further transitions occur.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Pending
    }
}

/// The most recent payload fetched for a job. Replaced wholesale on every
/// successful poll; never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub status: JobStatus,
    /// Percent 0..=100 as reported; interpreted as 100 at terminal status.
    pub progress: u8,
    pub total_valid: u64,
    pub preview_count: u64,
    pub preview: Vec<Business>,
    pub counts: Option<Counts>,
    pub stop_reason: Option<String>,
    pub stop_reason_detail: Option<String>,
    pub low_result_warning: Option<LowResultWarning>,
    pub current_keyword: Option<String>,
    pub current_city: Option<String>,
}

/// Named counters reported by the backend alongside results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub with_phone: u64,
    pub with_email: u64,
    pub with_website: u64,
    pub states_covered: u64,
    pub total_searched: u64,
    pub duplicates_removed: u64,
    pub fake_phones_filtered: u64,
    pub fake_emails_filtered: u64,
    pub validation_failed: u64,
    pub emails_scraped: u64,
}

/// Read-only display record for one discovered business.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Business {
    pub business_name: String,
    pub phone_number: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub search_keyword: String,
    pub google_place_id: String,
    pub email_source: String,
    /// How many of phone/email/website/address are filled, 0..=4.
    pub data_completeness_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowResultWarning {
    pub message: String,
    pub suggestions: Vec<String>,
}
