use std::path::{Path, PathBuf};

use client_logging::client_warn;
use futures_util::StreamExt;
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION};
use url::Url;

use crate::error::{map_reqwest_error, ClientError};
use crate::persist::write_atomic;
use crate::settings::ClientSettings;
use crate::wire::{ErrorBody, HealthPayload, SearchAccepted, SearchPayload, SnapshotPayload};

/// Raw outcome of the one-shot health probe, before any status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthProbe {
    /// 2xx response; the flag mirrors the backend's `apiKeyConfigured`
    /// field and is false when the field is absent.
    Reachable { api_key_configured: bool },
    /// Reachable but non-2xx.
    HttpError { status: u16 },
    /// No response at all.
    Unreachable,
}

/// Thin typed wrapper around the backend's four endpoints.
#[derive(Debug, Clone)]
pub struct BackendApi {
    client: reqwest::Client,
    settings: ClientSettings,
}

impl BackendApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::Network(err.to_string()))?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> Url {
        self.settings
            .base_url
            .join(path)
            .expect("api paths are valid relative urls")
    }

    /// GET /api/health. Never fails: every outcome maps to a probe variant.
    pub async fn probe_health(&self) -> HealthProbe {
        let response = match self.client.get(self.endpoint("/api/health")).send().await {
            Ok(response) => response,
            Err(err) => {
                client_warn!("Health probe got no response: {err}");
                return HealthProbe::Unreachable;
            }
        };
        let status = response.status();
        if !status.is_success() {
            return HealthProbe::HttpError {
                status: status.as_u16(),
            };
        }
        // A body without the flag means the key is not configured.
        let api_key_configured = response
            .json::<HealthPayload>()
            .await
            .map(|payload| payload.api_key_configured)
            .unwrap_or(false);
        HealthProbe::Reachable { api_key_configured }
    }

    /// POST /api/search. On non-2xx, prefers the structured `detail` field
    /// from the error body over a generic HTTP-status message.
    pub async fn start_search(&self, payload: &SearchPayload) -> Result<SearchAccepted, ClientError> {
        let response = self
            .client
            .post(self.endpoint("/api/search"))
            .json(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(rejection(status.as_u16(), response).await);
        }
        response
            .json()
            .await
            .map_err(|err| ClientError::BadBody(err.to_string()))
    }

    /// GET /api/results/{job_id}?preview=N.
    pub async fn fetch_snapshot(
        &self,
        job_id: &str,
        preview: u32,
    ) -> Result<SnapshotPayload, ClientError> {
        let response = self
            .client
            .get(self.endpoint(&format!("/api/results/{job_id}")))
            .query(&[("preview", preview)])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|err| ClientError::BadBody(err.to_string()))
    }

    /// GET /api/results/{job_id}/csv, streamed to `dest_dir`. The server
    /// filename from Content-Disposition wins; otherwise the caller's
    /// fallback is used. The body is opaque to the client.
    pub async fn download_csv(
        &self,
        job_id: &str,
        dest_dir: &Path,
        fallback_filename: &str,
    ) -> Result<PathBuf, ClientError> {
        let response = self
            .client
            .get(self.endpoint(&format!("/api/results/{job_id}/csv")))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(rejection(status.as_u16(), response).await);
        }

        let filename = content_disposition_filename(response.headers())
            .unwrap_or_else(|| fallback_filename.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            bytes.extend_from_slice(&chunk);
        }

        write_atomic(dest_dir, &filename, &bytes).map_err(|err| ClientError::Save(err.to_string()))
    }
}

async fn rejection(status: u16, response: reqwest::Response) -> ClientError {
    if let Ok(body) = response.json::<ErrorBody>().await {
        if let Some(detail) = body.detail.filter(|detail| !detail.trim().is_empty()) {
            return ClientError::Rejected(detail);
        }
    }
    ClientError::HttpStatus(status)
}

/// Extracts `filename="..."` from a Content-Disposition header, dropping any
/// path components so the file always lands inside the destination dir.
fn content_disposition_filename(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(CONTENT_DISPOSITION)?.to_str().ok()?;
    let marker = "filename=";
    let start = raw.find(marker)? + marker.len();
    let value = raw[start..].trim().trim_matches('"');
    let name = value.rsplit(['/', '\\']).next()?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
