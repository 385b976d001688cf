use crate::msg::HealthOutcome;
use crate::state::ActiveJob;
use crate::{BackendStatus, DashboardState, Effect, JobStatus, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// This is the only place view state mutates. The five lifecycle transitions
/// (probe, submit, start, poll, settle) all flow through here, which keeps
/// the ordering and staleness rules auditable in one match.
pub fn update(mut state: DashboardState, msg: Msg) -> (DashboardState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            state.backend = BackendStatus::Checking;
            state.mark_dirty();
            vec![Effect::ProbeHealth]
        }
        Msg::KeywordsChanged(text) => {
            state.form.keywords_input = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::StateSelected(code) => {
            state.form.state_code = code;
            state.mark_dirty();
            Vec::new()
        }
        Msg::GeographyModeChanged(mode) => {
            state.form.geography_mode = mode;
            state.mark_dirty();
            Vec::new()
        }
        Msg::CitiesChanged(text) => {
            state.form.cities_input = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::MinResultsChanged(text) => {
            state.form.min_results_input = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::RestoreForm(form) => {
            state.form = form;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => {
            // At most one non-terminal job: a click while one is live is
            // rejected rather than superseding it.
            let job_live = state
                .active
                .as_ref()
                .is_some_and(|job| !job.status.is_terminal());
            if job_live || state.submitting {
                return (state, Vec::new());
            }
            match crate::validate(&state.form, state.backend) {
                Ok(request) => {
                    state.validation_error = None;
                    state.submit_error = None;
                    state.submitting = true;
                    state.mark_dirty();
                    vec![
                        Effect::PersistForm(state.form.clone()),
                        Effect::SubmitSearch(request),
                    ]
                }
                Err(err) => {
                    state.validation_error = Some(err);
                    state.mark_dirty();
                    Vec::new()
                }
            }
        }
        Msg::HealthChecked(outcome) => {
            state.backend = match outcome {
                HealthOutcome::Reachable {
                    api_key_configured: true,
                } => BackendStatus::Ready,
                HealthOutcome::Reachable {
                    api_key_configured: false,
                } => BackendStatus::NoApiKey,
                HealthOutcome::HttpError { .. } => BackendStatus::Error,
                HealthOutcome::Unreachable => BackendStatus::Offline,
            };
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchStarted { job_id } => {
            // Supersedes any previous job; its poller is rebound to the new
            // id and late snapshots for the old id fail the staleness check.
            state.active = Some(ActiveJob {
                id: job_id.clone(),
                status: JobStatus::Running,
            });
            state.snapshot = None;
            state.mark_dirty();
            vec![Effect::StartPolling { job_id }]
        }
        Msg::SearchFailed { message } => {
            state.submitting = false;
            state.submit_error = Some(message);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SnapshotArrived { job_id, snapshot } => {
            let Some(active) = state.active.as_mut() else {
                return (state, Vec::new());
            };
            if active.id != job_id {
                // Stale response from a superseded job id.
                return (state, Vec::new());
            }
            if active.status.is_terminal() {
                // Already settled; a late duplicate must not re-emit
                // StopPolling or reopen the job.
                return (state, Vec::new());
            }
            active.status = snapshot.status;
            let settled = snapshot.status.is_terminal();
            state.snapshot = Some(snapshot);
            state.mark_dirty();
            if settled {
                state.submitting = false;
                vec![Effect::StopPolling]
            } else {
                Vec::new()
            }
        }
        Msg::DownloadCsvClicked => match (&state.active, &state.snapshot) {
            (Some(job), Some(snapshot)) if snapshot.status == JobStatus::Completed => {
                vec![Effect::DownloadCsv {
                    job_id: job.id.clone(),
                }]
            }
            _ => Vec::new(),
        },
        Msg::ErrorDismissed => {
            state.submit_error = None;
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
