use std::fmt;

use crate::state::FormState;
use crate::BackendStatus;

pub const DEFAULT_MIN_RESULTS: u32 = 500;
pub const MIN_RESULTS_RANGE: std::ops::RangeInclusive<u32> = 1..=5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeographyMode {
    State,
    City,
}

/// Validated, normalized submission payload. Created on submit, discarded
/// once a job id comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keywords: Vec<String>,
    pub geography_mode: GeographyMode,
    pub state: String,
    /// Only populated in City mode.
    pub cities: Vec<String>,
    pub min_results: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyKeywords,
    NoStateSelected,
    EmptyCities,
    BackendNotReady,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyKeywords => {
                write!(f, "Enter at least one search keyword")
            }
            ValidationError::NoStateSelected => write!(f, "Select a state"),
            ValidationError::EmptyCities => {
                write!(f, "Enter at least one city, or switch to state mode")
            }
            ValidationError::BackendNotReady => {
                write!(f, "Backend is not ready; check its configuration")
            }
        }
    }
}

/// Pure validator: form state in, normalized request or first failing rule
/// out. Rules are checked in a fixed order and short-circuit. No network
/// calls happen here.
pub fn validate(form: &FormState, backend: BackendStatus) -> Result<SearchRequest, ValidationError> {
    let keywords = split_csv(&form.keywords_input);
    if keywords.is_empty() {
        return Err(ValidationError::EmptyKeywords);
    }

    let state = form.state_code.trim().to_ascii_uppercase();
    if state.is_empty() {
        return Err(ValidationError::NoStateSelected);
    }

    let cities = match form.geography_mode {
        GeographyMode::City => {
            let cities = split_csv(&form.cities_input);
            if cities.is_empty() {
                return Err(ValidationError::EmptyCities);
            }
            cities
        }
        GeographyMode::State => Vec::new(),
    };

    if backend != BackendStatus::Ready {
        return Err(ValidationError::BackendNotReady);
    }

    Ok(SearchRequest {
        keywords,
        geography_mode: form.geography_mode,
        state,
        cities,
        min_results: parse_min_results(&form.min_results_input),
    })
}

/// Split on commas, trim each segment, drop empties. Order preserved and
/// duplicates kept.
fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Non-numeric or non-positive input silently falls back to the default;
/// in-range values pass through, out-of-range values clamp.
fn parse_min_results(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n.clamp(*MIN_RESULTS_RANGE.start(), *MIN_RESULTS_RANGE.end()),
        _ => DEFAULT_MIN_RESULTS,
    }
}
