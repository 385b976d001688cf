use prospector_client::{BackendApi, ClientError, ClientSettings};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CSV_BODY: &str = "Business Name,Phone Number,Email,Website,Address,City,State,Search Keyword,Google Place ID,Email Source,Data Completeness Score\nJump Around ATX,(512) 200-1000,,,100 Congress Ave,Austin,TX,bounce house,ChIJx,,3\n";

fn api_for(server: &MockServer) -> BackendApi {
    let settings = ClientSettings {
        base_url: Url::parse(&server.uri()).unwrap(),
        ..ClientSettings::default()
    };
    BackendApi::new(settings).expect("client builds")
}

#[tokio::test]
async fn csv_download_honors_server_filename_and_writes_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/results/a1b2c3d4/csv"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/csv; charset=utf-8")
                .insert_header(
                    "Content-Disposition",
                    "attachment; filename=\"business_discovery_1rows.csv\"",
                )
                .set_body_string(CSV_BODY),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let saved = api_for(&server)
        .download_csv("a1b2c3d4", dir.path(), "fallback.csv")
        .await
        .expect("download saves");

    assert_eq!(
        saved.file_name().unwrap().to_str(),
        Some("business_discovery_1rows.csv")
    );
    assert_eq!(std::fs::read_to_string(&saved).unwrap(), CSV_BODY);
}

#[tokio::test]
async fn csv_download_uses_fallback_name_without_disposition_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/results/a1b2c3d4/csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CSV_BODY))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let saved = api_for(&server)
        .download_csv("a1b2c3d4", dir.path(), "fallback.csv")
        .await
        .expect("download saves");

    assert_eq!(saved.file_name().unwrap().to_str(), Some("fallback.csv"));
}

#[tokio::test]
async fn csv_download_before_completion_reports_backend_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/results/a1b2c3d4/csv"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Job not completed (running)"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = api_for(&server)
        .download_csv("a1b2c3d4", dir.path(), "fallback.csv")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClientError::Rejected("Job not completed (running)".to_string())
    );
}
