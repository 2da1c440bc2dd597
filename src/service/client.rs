use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::SERVICE;
use crate::domain::{AnalysisRequestParams, AnalysisResult, Mode};

use super::error::ServiceError;

/// The remote analysis backend.
///
/// One call per user action; implementations never retry.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AnalysisService {
    /// Fetch the price series and anomaly verdicts for `params`.
    async fn analyze(&self, params: &AnalysisRequestParams) -> Result<AnalysisResult, ServiceError>;

    /// Fetch the narrative for `params`. `Ok(None)` means the backend had nothing to say.
    async fn explain(&self, params: &AnalysisRequestParams) -> Result<Option<String>, ServiceError>;

    /// A unique identifier for this implementation.
    fn signature(&self) -> &'static str;
}

#[cfg(not(target_arch = "wasm32"))]
pub type SharedService = Arc<dyn AnalysisService + Send + Sync>;

#[cfg(target_arch = "wasm32")]
pub type SharedService = Arc<dyn AnalysisService>;

/// Which backend route a call goes to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Endpoint {
    Analyze(Mode),
    Explain,
}

impl Endpoint {
    fn path(&self) -> &'static str {
        match self {
            Endpoint::Analyze(Mode::Live) => SERVICE.endpoints.live,
            Endpoint::Analyze(Mode::DeepScan) => SERVICE.endpoints.deep_scan,
            Endpoint::Explain => SERVICE.endpoints.explain,
        }
    }
}

/// JSON-over-HTTP client for the forensic backend.
pub struct HttpAnalysisService {
    client: Client,
    base: Url,
}

impl HttpAnalysisService {
    pub fn new(api_base: &str) -> Result<Self, ServiceError> {
        Self::with_client(build_client()?, api_base)
    }

    /// Uses a caller-built client instead of the default one.
    pub fn with_client(client: Client, api_base: &str) -> Result<Self, ServiceError> {
        Ok(Self {
            client,
            base: normalize_base(api_base)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/{route}?ticker=..&sensitivity=..`
    pub fn endpoint_url(
        &self,
        endpoint: Endpoint,
        params: &AnalysisRequestParams,
    ) -> Result<Url, ServiceError> {
        let mut url = self
            .base
            .join(endpoint.path())
            .map_err(|e| ServiceError::InvalidBaseUrl(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("ticker", params.ticker.as_str())
            .append_pair("sensitivity", &params.sensitivity.value().to_string());

        Ok(url)
    }

    async fn fetch(
        &self,
        endpoint: Endpoint,
        params: &AnalysisRequestParams,
    ) -> Result<AnalysisResult, ServiceError> {
        let url = self.endpoint_url(endpoint, params)?;
        log::info!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, params: &AnalysisRequestParams) -> Result<AnalysisResult, ServiceError> {
        self.fetch(Endpoint::Analyze(params.mode), params).await
    }

    async fn explain(&self, params: &AnalysisRequestParams) -> Result<Option<String>, ServiceError> {
        let result = self.fetch(Endpoint::Explain, params).await?;
        Ok(result.explanation.filter(|text| !text.trim().is_empty()))
    }

    fn signature(&self) -> &'static str {
        "HTTP Backend"
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Result<Client, ServiceError> {
    Client::builder()
        .user_agent(SERVICE.user_agent)
        .timeout(SERVICE.request_timeout)
        .build()
        .map_err(|e| ServiceError::Transport(e.to_string()))
}

// Browser fetch: the user agent and timeout belong to the browser
#[cfg(target_arch = "wasm32")]
fn build_client() -> Result<Client, ServiceError> {
    Client::builder()
        .build()
        .map_err(|e| ServiceError::Transport(e.to_string()))
}

// Url::join replaces the last path segment unless the base ends with '/'
fn normalize_base(api_base: &str) -> Result<Url, ServiceError> {
    let trimmed = api_base.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash).map_err(|e| ServiceError::InvalidBaseUrl(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ServiceError::InvalidBaseUrl(api_base.to_string()));
    }
    Ok(url)
}
