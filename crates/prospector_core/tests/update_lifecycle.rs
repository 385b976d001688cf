use std::sync::Once;

use prospector_core::{
    update, Business, Counts, DashboardState, Effect, HealthOutcome, JobId, JobStatus, Msg,
    Snapshot,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn submitted_state() -> (DashboardState, Vec<Effect>) {
    let (state, _) = update(DashboardState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::HealthChecked(HealthOutcome::Reachable {
            api_key_configured: true,
        }),
    );
    let (state, _) = update(state, Msg::KeywordsChanged("bounce house".to_string()));
    let (state, _) = update(state, Msg::StateSelected("TX".to_string()));
    update(state, Msg::SubmitClicked)
}

fn running_snapshot(progress: u8) -> Snapshot {
    Snapshot {
        status: JobStatus::Running,
        progress,
        ..Snapshot::default()
    }
}

fn completed_snapshot(total_valid: u64, preview_rows: usize) -> Snapshot {
    Snapshot {
        status: JobStatus::Completed,
        progress: 100,
        total_valid,
        preview_count: preview_rows as u64,
        preview: (0..preview_rows)
            .map(|i| Business {
                business_name: format!("Bounce Co {i}"),
                phone_number: "(512) 200-1000".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                data_completeness_score: 3,
                ..Business::default()
            })
            .collect(),
        counts: Some(Counts {
            with_phone: total_valid,
            with_email: 40,
            with_website: 90,
            states_covered: 1,
            total_searched: 1200,
            duplicates_removed: 80,
            fake_phones_filtered: 3,
            fake_emails_filtered: 2,
            validation_failed: 60,
            emails_scraped: 40,
        }),
        stop_reason: Some("Target reached".to_string()),
        stop_reason_detail: Some("Found enough valid businesses.".to_string()),
        ..Snapshot::default()
    }
}

#[test]
fn submission_starts_exactly_one_job_and_poller() {
    init_logging();
    let (state, effects) = submitted_state();
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::SubmitSearch(_))));

    let job_id = JobId("a1b2c3d4".to_string());
    let (state, effects) = update(
        state,
        Msg::SearchStarted {
            job_id: job_id.clone(),
        },
    );

    assert_eq!(state.active_job().map(|job| job.id.clone()), Some(job_id.clone()));
    assert_eq!(effects, vec![Effect::StartPolling { job_id }]);
}

#[test]
fn submit_while_job_is_live_is_rejected() {
    init_logging();
    let (state, _) = submitted_state();
    let (state, _) = update(
        state,
        Msg::SearchStarted {
            job_id: JobId("job-1".to_string()),
        },
    );

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.active_job().map(|job| job.id.as_str().to_string()),
        Some("job-1".to_string())
    );
}

#[test]
fn terminal_snapshot_stops_polling_once() {
    init_logging();
    let (state, _) = submitted_state();
    let job_id = JobId("job-1".to_string());
    let (state, _) = update(
        state,
        Msg::SearchStarted {
            job_id: job_id.clone(),
        },
    );

    let (state, effects) = update(
        state,
        Msg::SnapshotArrived {
            job_id: job_id.clone(),
            snapshot: running_snapshot(40),
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().show_progress);
    assert_eq!(state.view().progress_percent, 40);

    let (state, effects) = update(
        state,
        Msg::SnapshotArrived {
            job_id: job_id.clone(),
            snapshot: completed_snapshot(523, 10),
        },
    );
    assert_eq!(effects, vec![Effect::StopPolling]);
    assert_eq!(state.active_job().map(|job| job.status), Some(JobStatus::Completed));

    // A late duplicate for the settled job must not re-emit StopPolling.
    let (state, effects) = update(
        state,
        Msg::SnapshotArrived {
            job_id,
            snapshot: completed_snapshot(523, 10),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().progress_percent, 100);
}

#[test]
fn stale_snapshot_for_superseded_job_is_discarded() {
    init_logging();
    let (state, _) = submitted_state();
    let (state, _) = update(
        state,
        Msg::SearchStarted {
            job_id: JobId("old-job".to_string()),
        },
    );
    let (state, _) = update(
        state,
        Msg::SnapshotArrived {
            job_id: JobId("old-job".to_string()),
            snapshot: running_snapshot(80),
        },
    );

    // New submission supersedes the old job.
    let (state, effects) = update(
        state,
        Msg::SearchStarted {
            job_id: JobId("new-job".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::StartPolling {
            job_id: JobId("new-job".to_string())
        }]
    );
    assert!(state.view().preview.is_empty());

    // A racing response for the old id arrives after the switch.
    let before = state.view();
    let (state, effects) = update(
        state,
        Msg::SnapshotArrived {
            job_id: JobId("old-job".to_string()),
            snapshot: completed_snapshot(99, 5),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
}

#[test]
fn applying_the_same_snapshot_twice_is_idempotent() {
    init_logging();
    let (state, _) = submitted_state();
    let job_id = JobId("job-1".to_string());
    let (state, _) = update(
        state,
        Msg::SearchStarted {
            job_id: job_id.clone(),
        },
    );

    let (state, _) = update(
        state,
        Msg::SnapshotArrived {
            job_id: job_id.clone(),
            snapshot: running_snapshot(55),
        },
    );
    let first = state.view();

    let (state, _) = update(
        state,
        Msg::SnapshotArrived {
            job_id,
            snapshot: running_snapshot(55),
        },
    );
    assert_eq!(state.view(), first);
}

#[test]
fn completed_snapshot_populates_stats_preview_and_csv() {
    init_logging();
    let (state, _) = submitted_state();
    let job_id = JobId("job-1".to_string());
    let (state, _) = update(
        state,
        Msg::SearchStarted {
            job_id: job_id.clone(),
        },
    );
    let (state, _) = update(
        state,
        Msg::SnapshotArrived {
            job_id: job_id.clone(),
            snapshot: completed_snapshot(523, 10),
        },
    );

    let view = state.view();
    let stats = view.stats.expect("stats panel");
    assert_eq!(stats.total_valid, 523);
    assert_eq!(view.preview.len(), 10);
    assert!(view.csv_enabled);
    assert!(!view.show_progress);
    let quality = view.quality.expect("quality panel");
    assert_eq!(quality.total_searched, 1200);
    assert_eq!(
        view.stop_line.as_deref(),
        Some("Target reached: Found enough valid businesses.")
    );

    // CSV download is permitted now and routed to the completed job.
    let (_state, effects) = update(state, Msg::DownloadCsvClicked);
    assert_eq!(effects, vec![Effect::DownloadCsv { job_id }]);
}

#[test]
fn csv_download_is_ignored_before_completion() {
    init_logging();
    let (state, _) = submitted_state();
    let job_id = JobId("job-1".to_string());
    let (state, _) = update(
        state,
        Msg::SearchStarted {
            job_id: job_id.clone(),
        },
    );
    let (state, _) = update(
        state,
        Msg::SnapshotArrived {
            job_id,
            snapshot: running_snapshot(10),
        },
    );

    let view = state.view();
    assert!(!view.csv_enabled);
    let (_state, effects) = update(state, Msg::DownloadCsvClicked);
    assert!(effects.is_empty());
}

#[test]
fn search_failure_resets_submitting_and_surfaces_banner() {
    init_logging();
    let (state, _) = submitted_state();
    let (state, _) = update(
        state,
        Msg::SearchFailed {
            message: "HTTP 502".to_string(),
        },
    );

    let view = state.view();
    assert_eq!(view.submit_error.as_deref(), Some("HTTP 502"));
    assert!(view.submit_enabled, "user may retry immediately");

    let (state, _) = update(state, Msg::ErrorDismissed);
    assert!(state.view().submit_error.is_none());
}

#[test]
fn low_result_warning_passes_through_unguarded() {
    init_logging();
    let (state, _) = submitted_state();
    let job_id = JobId("job-1".to_string());
    let (state, _) = update(
        state,
        Msg::SearchStarted {
            job_id: job_id.clone(),
        },
    );

    let mut snapshot = completed_snapshot(52300, 10);
    snapshot.low_result_warning = Some(prospector_core::LowResultWarning {
        message: "Fewer than 10 valid businesses found.".to_string(),
        suggestions: vec!["Try broader keywords".to_string()],
    });
    let (state, _) = update(state, Msg::SnapshotArrived { job_id, snapshot });

    // Presence of the field alone controls visibility, even at high totals.
    let warning = state.view().low_result_warning.expect("warning banner");
    assert_eq!(warning.suggestions.len(), 1);
}
