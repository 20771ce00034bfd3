//! Platform API client
//!
//! Provides authenticated access to the platform catalog endpoints that list
//! organizations, regions and VM sizes.

use super::error::{PlatformApiError, Result};
use super::types::{
    ApiErrorResponse, GenericResponse, Organization, PlatformRegions, VmSize,
};
use crate::platform::catalog::PlatformCatalog;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Production API URL
pub const PLATFORM_API_URL_PROD: &str = "https://api.syncable.dev";
/// Development API URL
pub const PLATFORM_API_URL_DEV: &str = "http://localhost:4000";

/// User agent for API requests
const USER_AGENT: &str = concat!("select-ctl/", env!("CARGO_PKG_VERSION"));

/// Client for the platform catalog API
pub struct PlatformApiClient {
    /// HTTP client with configured timeout and headers
    http_client: Client,
    /// Base API URL
    api_url: String,
    /// Bearer token, if one is configured
    access_token: Option<String>,
}

impl PlatformApiClient {
    /// Create a client for the default API URL
    ///
    /// Uses `SELECT_CTL_ENV=development` to switch to local development server.
    pub fn new(access_token: Option<String>) -> Result<Self> {
        Self::with_url(default_api_url(), access_token)
    }

    /// Create a client with a custom API URL
    pub fn with_url(api_url: impl Into<String>, access_token: Option<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(PlatformApiError::HttpError)?;

        Ok(Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// Get the configured API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn auth_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(PlatformApiError::Unauthorized)
    }

    /// Make an authenticated GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let token = self.auth_token()?;
        let url = format!("{}{}", self.api_url, path);
        log::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle the HTTP response, converting errors appropriately
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| PlatformApiError::ParseError(e.to_string()));
        }

        let status_code = status.as_u16();
        let error_body = response.text().await.unwrap_or_default();
        Err(status_error(status_code, &error_body))
    }
}

/// Map a non-success status and body to a [`PlatformApiError`]
fn status_error(status_code: u16, error_body: &str) -> PlatformApiError {
    let error_message = serde_json::from_str::<ApiErrorResponse>(error_body)
        .map(|e| e.get_message())
        .unwrap_or_else(|_| error_body.to_string());

    match status_code {
        401 => PlatformApiError::Unauthorized,
        403 => PlatformApiError::PermissionDenied(error_message),
        404 => PlatformApiError::NotFound(error_message),
        429 => PlatformApiError::RateLimited,
        500..=599 => PlatformApiError::ServerError {
            status: status_code,
            message: error_message,
        },
        _ => PlatformApiError::ApiError {
            status: status_code,
            message: error_message,
        },
    }
}

impl PlatformCatalog for PlatformApiClient {
    /// Endpoint: GET /api/organizations/attended-by-user
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        let response: GenericResponse<Vec<Organization>> =
            self.get("/api/organizations/attended-by-user").await?;
        Ok(response.data)
    }

    /// Endpoint: GET /api/platform/regions
    async fn platform_regions(&self) -> Result<PlatformRegions> {
        let response: GenericResponse<PlatformRegions> =
            self.get("/api/platform/regions").await?;
        Ok(response.data)
    }

    /// Endpoint: GET /api/platform/vm-sizes
    async fn platform_vm_sizes(&self) -> Result<Vec<VmSize>> {
        let response: GenericResponse<Vec<VmSize>> = self.get("/api/platform/vm-sizes").await?;
        Ok(response.data)
    }
}

/// Get the API URL based on environment
pub fn default_api_url() -> &'static str {
    if std::env::var("SELECT_CTL_ENV").as_deref() == Ok("development") {
        PLATFORM_API_URL_DEV
    } else {
        PLATFORM_API_URL_PROD
    }
}
