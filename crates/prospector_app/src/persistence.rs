use std::fs;
use std::path::Path;

use client_logging::{client_error, client_info, client_warn};
use prospector_client::write_atomic;
use prospector_core::{FormState, GeographyMode};
use serde::{Deserialize, Serialize};

const FORM_FILENAME: &str = ".prospector_form.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedForm {
    keywords: String,
    state: String,
    city_mode: bool,
    cities: String,
    min_results: String,
}

pub(crate) fn load_form(dir: &Path) -> Option<FormState> {
    let path = dir.join(FORM_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            client_warn!("Failed to read persisted form from {:?}: {}", path, err);
            return None;
        }
    };

    let form: PersistedForm = match ron::from_str(&content) {
        Ok(form) => form,
        Err(err) => {
            client_warn!("Failed to parse persisted form from {:?}: {}", path, err);
            return None;
        }
    };

    client_info!("Loaded persisted form from {:?}", path);
    Some(FormState {
        keywords_input: form.keywords,
        state_code: form.state,
        geography_mode: if form.city_mode {
            GeographyMode::City
        } else {
            GeographyMode::State
        },
        cities_input: form.cities,
        min_results_input: form.min_results,
    })
}

pub(crate) fn save_form(dir: &Path, form: &FormState) {
    let persisted = PersistedForm {
        keywords: form.keywords_input.clone(),
        state: form.state_code.clone(),
        city_mode: form.geography_mode == GeographyMode::City,
        cities: form.cities_input.clone(),
        min_results: form.min_results_input.clone(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            client_error!("Failed to serialize persisted form: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomic(dir, FORM_FILENAME, content.as_bytes()) {
        client_error!("Failed to write persisted form to {:?}: {}", dir, err);
    }
}
