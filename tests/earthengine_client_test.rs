//! Integration tests for the Earth Engine REST client against a mock server

use mockito::{Matcher, Server};
use plantclip::adapters::earthengine::{EarthEngineClient, Geometry, ImageryService};
use plantclip::config::{secret_string, EarthEngineConfig};
use plantclip::core::export::{ExportOptions, ExportTask};
use plantclip::core::mosaic::build_mosaic;
use plantclip::domain::{BoundingBox, EarthEngineError, ImageSource, PlantClipError};
use serde_json::json;

fn client_for(server: &Server) -> EarthEngineClient {
    EarthEngineClient::initialize(EarthEngineConfig {
        base_url: server.url(),
        project: "ee-plants".to_string(),
        access_token: Some(secret_string("ya29.test".to_string())),
        timeout_seconds: 5,
    })
    .unwrap()
}

fn naip_task() -> ExportTask {
    let region = Geometry::rectangle(&BoundingBox::centered(35.0, -80.0, 0.005));
    let image = build_mosaic(ImageSource::Naip).clip(&region);
    ExportTask::image(
        image,
        region,
        "300",
        ExportOptions {
            scale: 1.0,
            skip_empty_tiles: true,
            max_pixels: 1_000_000_000,
            folder: "PowerPlants_naip".to_string(),
        },
    )
}

#[tokio::test]
async fn test_start_export_posts_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/projects/ee-plants/image:export")
        .match_header("authorization", "Bearer ya29.test")
        .match_body(Matcher::PartialJson(json!({
            "description": "300",
            "maxPixels": "1000000000",
            "fileExportOptions": {
                "fileFormat": "GEO_TIFF",
                "driveDestination": {
                    "folder": "PowerPlants_naip",
                    "filenamePrefix": "300"
                },
                "geoTiffOptions": {"skipEmptyFiles": true}
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "name": "projects/ee-plants/operations/OP300",
                "metadata": {"state": "PENDING", "description": "300", "type": "EXPORT_IMAGE"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let operation = naip_task().start(&client).await.unwrap();

    mock.assert_async().await;
    assert_eq!(operation.name, "projects/ee-plants/operations/OP300");
    assert!(!operation.done);
    assert_eq!(operation.state(), "PENDING");
}

#[tokio::test]
async fn test_get_operation_by_name() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/projects/ee-plants/operations/OP300")
        .match_header("authorization", "Bearer ya29.test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "name": "projects/ee-plants/operations/OP300",
                "done": true,
                "metadata": {
                    "state": "SUCCEEDED",
                    "destinationUris": ["https://drive.google.com/folder/abc"]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let operation = client
        .get_operation("projects/ee-plants/operations/OP300")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(operation.succeeded());
    assert_eq!(operation.state(), "SUCCEEDED");
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/projects/ee-plants/image:export")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"error": {"code": 401, "message": "Request had invalid authentication credentials."}})
                .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let err = naip_task().start(&client).await.unwrap_err();

    match err {
        PlantClipError::EarthEngine(EarthEngineError::AuthenticationFailed(message)) => {
            assert!(message.contains("invalid authentication credentials"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_maps_to_quota_exceeded() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/projects/ee-plants/image:export")
        .with_status(429)
        .with_body("Too many concurrent tasks")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = naip_task().start(&client).await.unwrap_err();

    assert!(matches!(
        err,
        PlantClipError::EarthEngine(EarthEngineError::QuotaExceeded(ref m)) if m == "Too many concurrent tasks"
    ));
}

#[tokio::test]
async fn test_server_error_and_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/projects/ee-plants/image:export")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;
    server
        .mock("GET", "/v1/projects/ee-plants/operations/MISSING")
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);

    let err = naip_task().start(&client).await.unwrap_err();
    assert!(matches!(
        err,
        PlantClipError::EarthEngine(EarthEngineError::ServerError { status: 503, .. })
    ));

    let err = client.get_operation("MISSING").await.unwrap_err();
    assert!(matches!(
        err,
        PlantClipError::EarthEngine(EarthEngineError::OperationNotFound(_))
    ));
}

#[tokio::test]
async fn test_undecodable_body_is_invalid_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/projects/ee-plants/image:export")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = naip_task().start(&client).await.unwrap_err();

    assert!(matches!(
        err,
        PlantClipError::EarthEngine(EarthEngineError::InvalidResponse(_))
    ));
}
