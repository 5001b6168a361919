//! Dashboard API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::rate_limit::RequestPacer;
use super::{
    DeviceRecord, FleetApi, ManagementInterface, NetworkRecord, OrganizationRecord, VlanRecord,
};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Dashboard API client
pub struct FleetClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    pacer: RequestPacer,
}

impl FleetClient {
    /// Create a client against a custom base URL
    pub fn with_host(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
        pacer: RequestPacer,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(concat!("fleetip/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            pacer,
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate_auth()?;
        let api_key = config.api_key.clone().unwrap_or_default();

        let pacer = RequestPacer::new(config.preferences.request_interval());
        if pacer.is_enabled() {
            debug!("Pacing requests every {:?}", pacer.interval());
        }

        Self::with_host(
            api_key,
            &config.api_base_url(),
            config.preferences.timeout(),
            pacer,
        )
    }

    /// Base URL requests are sent to
    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests so far that had to wait for their pacing slot
    pub fn paced_requests(&self) -> u64 {
        self.pacer.waits()
    }

    /// Make an authenticated GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.pacer.wait().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string()).into()),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl FleetApi for FleetClient {
    async fn list_organizations(&self) -> Result<Vec<OrganizationRecord>> {
        self.get("/organizations").await
    }

    async fn list_networks(&self, org_id: &str) -> Result<Vec<NetworkRecord>> {
        self.get(&format!("/organizations/{}/networks", org_id))
            .await
    }

    async fn list_devices(&self, network_id: &str) -> Result<Vec<DeviceRecord>> {
        self.get(&format!("/networks/{}/devices", network_id)).await
    }

    async fn get_management_interface(
        &self,
        _network_id: &str,
        serial: &str,
    ) -> Result<ManagementInterface> {
        self.get(&format!("/devices/{}/managementInterface", serial))
            .await
    }

    async fn list_vlans(&self, network_id: &str) -> Result<Vec<VlanRecord>> {
        self.get(&format!("/networks/{}/appliance/vlans", network_id))
            .await
    }
}
