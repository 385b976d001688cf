use crate::snapshot::{Counts, JobStatus, LowResultWarning, Snapshot};
use crate::state::{BackendStatus, DashboardState, FormState};

/// Placeholder for string fields the backend left empty or absent.
pub const FIELD_PLACEHOLDER: &str = "—";

/// Everything the renderer needs, derived from the latest snapshot with no
/// further requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardViewModel {
    pub backend: BackendStatus,
    /// Current form fields, echoed raw so the renderer can show them.
    pub form: FormState,
    /// Persistent configuration banner; `None` once the backend is ready.
    pub backend_banner: Option<String>,
    pub validation_error: Option<String>,
    pub submit_error: Option<String>,
    pub submit_enabled: bool,
    pub show_progress: bool,
    pub progress_percent: u8,
    /// "keyword in city" line while the backend reports where it is.
    pub progress_detail: Option<String>,
    /// Six summary counters; present only once the job completed.
    pub stats: Option<SummaryStats>,
    /// Filtering breakdown; present only when completed with counts.
    pub quality: Option<QualityStats>,
    pub preview: Vec<BusinessRow>,
    pub csv_enabled: bool,
    pub low_result_warning: Option<LowResultWarning>,
    /// Stop reason line at terminal status.
    pub stop_line: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryStats {
    pub total_valid: u64,
    pub with_phone: u64,
    pub with_email: u64,
    pub with_website: u64,
    pub states_covered: u64,
    pub emails_scraped: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualityStats {
    pub total_searched: u64,
    pub duplicates_removed: u64,
    pub fake_phones_filtered: u64,
    pub fake_emails_filtered: u64,
    pub validation_failed: u64,
}

/// One preview table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessRow {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub location: String,
    pub score: u8,
}

pub(crate) fn build(state: &DashboardState) -> DashboardViewModel {
    let snapshot = state.snapshot.as_ref();
    let status = snapshot.map(|snap| snap.status);
    let completed = status == Some(JobStatus::Completed);
    let terminal = status.is_some_and(JobStatus::is_terminal);

    DashboardViewModel {
        backend: state.backend,
        form: state.form.clone(),
        backend_banner: backend_banner(state.backend),
        validation_error: state.validation_error.map(|err| err.to_string()),
        submit_error: state.submit_error.clone(),
        submit_enabled: state.backend == BackendStatus::Ready
            && !state.submitting
            && !state
                .active
                .as_ref()
                .is_some_and(|job| !job.status.is_terminal()),
        show_progress: state.submitting || status == Some(JobStatus::Running),
        progress_percent: snapshot
            .map(|snap| if terminal { 100 } else { snap.progress.min(100) })
            .unwrap_or(0),
        progress_detail: snapshot.and_then(progress_detail),
        stats: completed.then(|| summary_stats(snapshot)),
        quality: snapshot
            .filter(|_| completed)
            .and_then(|snap| snap.counts.as_ref())
            .map(quality_stats),
        preview: snapshot
            .map(|snap| snap.preview.iter().map(business_row).collect())
            .unwrap_or_default(),
        csv_enabled: completed,
        low_result_warning: snapshot.and_then(|snap| snap.low_result_warning.clone()),
        stop_line: snapshot.filter(|_| terminal).and_then(stop_line),
    }
}

fn backend_banner(backend: BackendStatus) -> Option<String> {
    match backend {
        BackendStatus::Ready => None,
        BackendStatus::Checking => Some("Checking backend availability...".to_string()),
        BackendStatus::NoApiKey => Some(
            "Backend is reachable but no Places API key is configured; searches are disabled."
                .to_string(),
        ),
        BackendStatus::Offline => {
            Some("Backend is offline; start it and relaunch the dashboard.".to_string())
        }
        BackendStatus::Error => {
            Some("Backend responded with an error during the health check.".to_string())
        }
    }
}

fn summary_stats(snapshot: Option<&Snapshot>) -> SummaryStats {
    let Some(snap) = snapshot else {
        return SummaryStats::default();
    };
    // Absent counts render as zeros rather than hiding the panel.
    let counts = snap.counts.unwrap_or_default();
    SummaryStats {
        total_valid: snap.total_valid,
        with_phone: counts.with_phone,
        with_email: counts.with_email,
        with_website: counts.with_website,
        states_covered: counts.states_covered,
        emails_scraped: counts.emails_scraped,
    }
}

fn quality_stats(counts: &Counts) -> QualityStats {
    QualityStats {
        total_searched: counts.total_searched,
        duplicates_removed: counts.duplicates_removed,
        fake_phones_filtered: counts.fake_phones_filtered,
        fake_emails_filtered: counts.fake_emails_filtered,
        validation_failed: counts.validation_failed,
    }
}

fn business_row(business: &crate::Business) -> BusinessRow {
    let location = match (business.city.trim(), business.state.trim()) {
        ("", "") => FIELD_PLACEHOLDER.to_string(),
        (city, "") => city.to_string(),
        ("", state) => state.to_string(),
        (city, state) => format!("{city}, {state}"),
    };
    BusinessRow {
        name: display_or_placeholder(&business.business_name),
        phone: display_or_placeholder(&business.phone_number),
        email: display_or_placeholder(&business.email),
        website: display_or_placeholder(&business.website),
        location,
        score: business.data_completeness_score,
    }
}

fn progress_detail(snapshot: &Snapshot) -> Option<String> {
    match (
        snapshot.current_keyword.as_deref(),
        snapshot.current_city.as_deref(),
    ) {
        (Some(keyword), Some(city)) => Some(format!("Searching \"{keyword}\" in {city}")),
        (Some(keyword), None) => Some(format!("Searching \"{keyword}\"")),
        _ => None,
    }
}

fn stop_line(snapshot: &Snapshot) -> Option<String> {
    match (
        snapshot.stop_reason.as_deref(),
        snapshot.stop_reason_detail.as_deref(),
    ) {
        (Some(reason), Some(detail)) => Some(format!("{reason}: {detail}")),
        (Some(reason), None) => Some(reason.to_string()),
        (None, Some(detail)) => Some(detail.to_string()),
        (None, None) => None,
    }
}

fn display_or_placeholder(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        FIELD_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}
