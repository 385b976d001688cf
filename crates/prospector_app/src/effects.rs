use std::path::PathBuf;

use chrono::Local;
use client_logging::{client_info, client_warn};
use prospector_client::{
    BusinessPayload, ClientEvent, ClientHandle, CountsPayload, HealthProbe, SearchPayload,
    SnapshotPayload, WireStatus,
};
use prospector_core::{
    Business, Counts, Effect, GeographyMode, HealthOutcome, JobId, JobStatus, LowResultWarning,
    Msg, SearchRequest, Snapshot,
};

use crate::persistence;

/// Executes core effects against the client handle and the filesystem.
pub struct EffectRunner {
    client: ClientHandle,
    work_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(client: ClientHandle, work_dir: PathBuf) -> Self {
        Self { client, work_dir }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ProbeHealth => self.client.probe_health(),
                Effect::SubmitSearch(request) => {
                    client_info!(
                        "Submitting search: {} keyword(s) in {}",
                        request.keywords.len(),
                        request.state
                    );
                    self.client.start_search(map_request(&request));
                }
                Effect::StartPolling { job_id } => self.client.start_polling(job_id.as_str()),
                Effect::StopPolling => self.client.stop_polling(),
                Effect::DownloadCsv { job_id } => {
                    self.client.download_csv(
                        job_id.as_str(),
                        self.work_dir.clone(),
                        fallback_csv_filename(),
                    );
                }
                Effect::PersistForm(form) => persistence::save_form(&self.work_dir, &form),
            }
        }
    }
}

/// Translates a client event into the next core message.
pub fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::HealthChecked(probe) => Msg::HealthChecked(map_probe(probe)),
        ClientEvent::SearchStarted { job_id } => Msg::SearchStarted {
            job_id: JobId(job_id),
        },
        ClientEvent::SearchFailed { message } => Msg::SearchFailed { message },
        ClientEvent::Snapshot { job_id, payload } => Msg::SnapshotArrived {
            job_id: JobId(job_id),
            snapshot: map_snapshot(payload),
        },
        ClientEvent::CsvSaved { path } => {
            client_info!("CSV saved to {:?}", path);
            Msg::NoOp
        }
        ClientEvent::CsvFailed { message } => {
            client_warn!("CSV download failed: {message}");
            Msg::NoOp
        }
    }
}

fn map_request(request: &SearchRequest) -> SearchPayload {
    SearchPayload {
        keywords: request.keywords.clone(),
        geography_mode: match request.geography_mode {
            GeographyMode::State => "state".to_string(),
            GeographyMode::City => "city".to_string(),
        },
        state: request.state.clone(),
        cities: request.cities.clone(),
        min_results: request.min_results,
    }
}

fn map_probe(probe: HealthProbe) -> HealthOutcome {
    match probe {
        HealthProbe::Reachable { api_key_configured } => {
            HealthOutcome::Reachable { api_key_configured }
        }
        HealthProbe::HttpError { status } => HealthOutcome::HttpError { status },
        HealthProbe::Unreachable => HealthOutcome::Unreachable,
    }
}

fn map_status(status: WireStatus) -> JobStatus {
    match status {
        WireStatus::Pending => JobStatus::Pending,
        WireStatus::Running => JobStatus::Running,
        WireStatus::Completed => JobStatus::Completed,
        WireStatus::Failed => JobStatus::Failed,
    }
}

pub(crate) fn map_snapshot(payload: SnapshotPayload) -> Snapshot {
    Snapshot {
        status: map_status(payload.status),
        progress: payload.progress.min(100) as u8,
        total_valid: payload.total_valid,
        preview_count: payload.preview_count,
        preview: payload.preview.into_iter().map(map_business).collect(),
        counts: payload.counts.map(map_counts),
        stop_reason: non_empty(payload.stop_reason),
        stop_reason_detail: non_empty(payload.stop_reason_detail),
        low_result_warning: payload.low_result_warning.map(|warning| LowResultWarning {
            message: warning.message,
            suggestions: warning.suggestions,
        }),
        current_keyword: non_empty(payload.current_keyword),
        current_city: non_empty(payload.current_city),
    }
}

fn map_business(payload: BusinessPayload) -> Business {
    Business {
        business_name: payload.business_name,
        phone_number: payload.phone_number,
        email: payload.email,
        website: payload.website,
        address: payload.address,
        city: payload.city,
        state: payload.state,
        search_keyword: payload.search_keyword,
        google_place_id: payload.google_place_id,
        email_source: payload.email_source,
        data_completeness_score: payload.data_completeness_score.min(4),
    }
}

fn map_counts(payload: CountsPayload) -> Counts {
    Counts {
        with_phone: payload.with_phone,
        with_email: payload.with_email,
        with_website: payload.with_website,
        states_covered: payload.states_covered,
        total_searched: payload.total_searched,
        duplicates_removed: payload.duplicates_removed,
        fake_phones_filtered: payload.fake_phones_filtered,
        fake_emails_filtered: payload.fake_emails_filtered,
        validation_failed: payload.validation_failed,
        emails_scraped: payload.emails_scraped,
    }
}

/// The backend sends "" for unset string fields; the view model wants a real
/// absence so placeholders render.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn fallback_csv_filename() -> String {
    format!(
        "business_discovery_{}.csv",
        Local::now().format("%Y-%m-%d_%H-%M")
    )
}
