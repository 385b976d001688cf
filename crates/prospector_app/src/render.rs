use std::fmt::Write as _;

use prospector_core::{BackendStatus, DashboardViewModel, GeographyMode};

/// Renders the whole dashboard as text. Pure: every panel is derived from
/// the view model alone.
pub fn render(view: &DashboardViewModel) -> String {
    let mut out = String::new();

    writeln!(out, "== Business Discovery ==").ok();
    writeln!(out, "Backend: {}", backend_label(view.backend)).ok();

    let form = &view.form;
    writeln!(
        out,
        "Search: keywords [{}] state [{}] mode [{}]",
        form.keywords_input,
        form.state_code,
        mode_label(form.geography_mode)
    )
    .ok();
    if form.geography_mode == GeographyMode::City {
        writeln!(out, "        cities [{}]", form.cities_input).ok();
    }
    if !form.min_results_input.trim().is_empty() {
        writeln!(out, "        min results [{}]", form.min_results_input).ok();
    }

    if let Some(banner) = &view.backend_banner {
        writeln!(out, "! {banner}").ok();
    }
    if let Some(error) = &view.validation_error {
        writeln!(out, "! {error}").ok();
    }
    if let Some(error) = &view.submit_error {
        writeln!(out, "! Submission failed: {error} (type 'dismiss' to clear)").ok();
    }

    if view.show_progress {
        writeln!(out, "Progress: {}% {}", view.progress_percent, bar(view.progress_percent)).ok();
        if let Some(detail) = &view.progress_detail {
            writeln!(out, "  {detail}").ok();
        }
    }

    if let Some(stats) = &view.stats {
        writeln!(out, "-- Results --").ok();
        writeln!(out, "  Total Valid:    {}", stats.total_valid).ok();
        writeln!(out, "  With Phone:     {}", stats.with_phone).ok();
        writeln!(out, "  With Email:     {}", stats.with_email).ok();
        writeln!(out, "  With Website:   {}", stats.with_website).ok();
        writeln!(out, "  States Covered: {}", stats.states_covered).ok();
        writeln!(out, "  Emails Scraped: {}", stats.emails_scraped).ok();
    }

    if let Some(quality) = &view.quality {
        writeln!(out, "-- Data Quality --").ok();
        writeln!(out, "  Total Searched:       {}", quality.total_searched).ok();
        writeln!(out, "  Duplicates Removed:   {}", quality.duplicates_removed).ok();
        writeln!(out, "  Fake Phones Filtered: {}", quality.fake_phones_filtered).ok();
        writeln!(out, "  Fake Emails Filtered: {}", quality.fake_emails_filtered).ok();
        writeln!(out, "  Validation Failed:    {}", quality.validation_failed).ok();
    }

    if !view.preview.is_empty() {
        writeln!(out, "-- Preview ({} rows) --", view.preview.len()).ok();
        for row in &view.preview {
            writeln!(
                out,
                "  [{}] {} | {} | {} | {} | {}",
                row.score, row.name, row.phone, row.email, row.website, row.location
            )
            .ok();
        }
    }

    if let Some(warning) = &view.low_result_warning {
        writeln!(out, "! {}", warning.message).ok();
        for (i, suggestion) in warning.suggestions.iter().enumerate() {
            writeln!(out, "  {}. {suggestion}", i + 1).ok();
        }
    }

    if let Some(stop_line) = &view.stop_line {
        writeln!(out, "Stopped: {stop_line}").ok();
    }
    if view.csv_enabled {
        writeln!(out, "CSV ready: type 'csv' to download.").ok();
    }

    out
}

fn backend_label(backend: BackendStatus) -> &'static str {
    match backend {
        BackendStatus::Checking => "checking",
        BackendStatus::Ready => "ready",
        BackendStatus::NoApiKey => "no API key",
        BackendStatus::Offline => "offline",
        BackendStatus::Error => "error",
    }
}

fn mode_label(mode: GeographyMode) -> &'static str {
    match mode {
        GeographyMode::State => "state",
        GeographyMode::City => "city",
    }
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) / 5;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}
