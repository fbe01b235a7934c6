//! Earth Engine REST client
//!
//! Submits image exports to `earthengine.googleapis.com/v1` and reads back
//! operation status. Authentication is a caller-supplied OAuth2 access token.

use super::models::{ErrorEnvelope, ExportImageRequest, Operation};
use super::service::ImageryService;
use crate::config::EarthEngineConfig;
use crate::domain::{EarthEngineError, PlantClipError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// HTTP client for the Earth Engine REST API
///
/// Construct it with [`EarthEngineClient::initialize`]; there is no global
/// session state.
pub struct EarthEngineClient {
    /// API root including the `/v1` segment
    api_root: String,

    /// Cloud project
    project: String,

    /// Bearer token
    access_token: crate::config::SecretString,

    /// HTTP client for making requests
    client: Client,
}

impl EarthEngineClient {
    /// Explicitly initialize a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is malformed, the
    /// project is empty or no access token is configured.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use plantclip::adapters::earthengine::EarthEngineClient;
    /// use plantclip::config::{secret_string, EarthEngineConfig};
    ///
    /// let config = EarthEngineConfig {
    ///     project: "ee-plants".to_string(),
    ///     access_token: Some(secret_string("ya29.token".to_string())),
    ///     ..Default::default()
    /// };
    /// let client = EarthEngineClient::initialize(config).expect("client");
    /// ```
    pub fn initialize(config: EarthEngineConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            PlantClipError::Configuration(format!(
                "Invalid earthengine.base_url '{}': {e}",
                config.base_url
            ))
        })?;

        if config.project.trim().is_empty() {
            return Err(PlantClipError::Configuration(
                "earthengine.project cannot be empty".to_string(),
            ));
        }

        let access_token = match config.access_token {
            Some(token) if !token.expose_secret().is_blank() => token,
            _ => {
                return Err(PlantClipError::Configuration(
                    "earthengine.access_token is required to submit exports \
                     (set EE_ACCESS_TOKEN or use --dry-run)"
                        .to_string(),
                ))
            }
        };

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                PlantClipError::EarthEngine(EarthEngineError::ConnectionFailed(format!(
                    "Failed to build HTTP client: {e}"
                )))
            })?;

        let api_root = format!("{}/v1", base.as_str().trim_end_matches('/'));

        tracing::info!(
            api_root = %api_root,
            project = %config.project,
            "Earth Engine client initialized"
        );

        Ok(Self {
            api_root,
            project: config.project,
            access_token,
            client,
        })
    }

    fn export_url(&self) -> String {
        format!("{}/projects/{}/image:export", self.api_root, self.project)
    }

    /// Accepts either a full resource name or a bare operation ID
    fn operation_url(&self, name: &str) -> String {
        let name = name.trim_start_matches('/');
        if name.starts_with("projects/") {
            format!("{}/{}", self.api_root, name)
        } else {
            format!(
                "{}/projects/{}/operations/{}",
                self.api_root, self.project, name
            )
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let token: &str = self.access_token.expose_secret().as_ref();
        request.bearer_auth(token)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| EarthEngineError::ConnectionFailed(e.to_string()))?;

        decode_response(response).await
    }
}

/// Maps an HTTP response to a decoded body or a domain error
async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| EarthEngineError::InvalidResponse(e.to_string()).into());
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body);

    Err(status_error(status, message).into())
}

fn status_error(status: StatusCode, message: String) -> EarthEngineError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            EarthEngineError::AuthenticationFailed(message)
        }
        StatusCode::NOT_FOUND => EarthEngineError::OperationNotFound(message),
        StatusCode::TOO_MANY_REQUESTS => EarthEngineError::QuotaExceeded(message),
        s if s.is_server_error() => EarthEngineError::ServerError {
            status: s.as_u16(),
            message,
        },
        s => EarthEngineError::ClientError {
            status: s.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl ImageryService for EarthEngineClient {
    async fn start_export(&self, request: &ExportImageRequest) -> Result<Operation> {
        let url = self.export_url();

        tracing::debug!(
            url = %url,
            description = %request.description,
            folder = %request.file_export_options.drive_destination.folder,
            "Submitting image export"
        );

        self.send(self.client.post(&url).json(request)).await
    }

    async fn get_operation(&self, name: &str) -> Result<Operation> {
        let url = self.operation_url(name);
        tracing::debug!(url = %url, "Fetching operation");
        self.send(self.client.get(&url)).await
    }

    fn project(&self) -> &str {
        &self.project
    }
}
