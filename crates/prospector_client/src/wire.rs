//! Serde mirrors of the backend's JSON payloads.
//!
//! Top-level keys are camelCase; preview business records arrive in
//! snake_case. Everything defaults so a sparse payload still parses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPayload {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub api_key_configured: bool,
    #[serde(default)]
    pub version: Option<String>,
}

/// Body of POST /api/search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub keywords: Vec<String>,
    pub geography_mode: String,
    pub state: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cities: Vec<String>,
    pub min_results: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAccepted {
    pub job_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error bodies carry a human-readable `detail` field when the backend
/// rejected the request deliberately.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPayload {
    #[serde(default)]
    pub job_id: Option<String>,
    pub status: WireStatus,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub total_valid: u64,
    #[serde(default)]
    pub preview_count: u64,
    #[serde(default)]
    pub preview: Vec<BusinessPayload>,
    #[serde(default)]
    pub counts: Option<CountsPayload>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub stop_reason_detail: Option<String>,
    #[serde(default)]
    pub low_result_warning: Option<LowResultWarningPayload>,
    #[serde(default)]
    pub current_keyword: Option<String>,
    #[serde(default)]
    pub current_city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BusinessPayload {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub search_keyword: String,
    #[serde(default)]
    pub google_place_id: String,
    #[serde(default)]
    pub email_source: String,
    #[serde(default)]
    pub data_completeness_score: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsPayload {
    #[serde(default)]
    pub with_phone: u64,
    #[serde(default)]
    pub with_email: u64,
    #[serde(default)]
    pub with_website: u64,
    #[serde(default)]
    pub states_covered: u64,
    #[serde(default)]
    pub total_searched: u64,
    #[serde(default)]
    pub duplicates_removed: u64,
    #[serde(default)]
    pub fake_phones_filtered: u64,
    #[serde(default)]
    pub fake_emails_filtered: u64,
    #[serde(default)]
    pub validation_failed: u64,
    #[serde(default)]
    pub emails_scraped: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LowResultWarningPayload {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl WireStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, WireStatus::Completed | WireStatus::Failed)
    }
}
