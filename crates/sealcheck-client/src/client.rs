//! crt.sh lookup client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use sealcheck_core::{Certificate, CertificateResolver, ResolveError};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::RetryConfig;
use crate::entry::{select_candidates, CrtShEntry};
use crate::parse::parse_pem;

/// The crt.sh base URL
pub const DEFAULT_BASE_URL: &str = "https://crt.sh/";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of logged entries fetched before giving up
pub const DEFAULT_MAX_CANDIDATES: usize = 16;

type Result<T> = std::result::Result<T, ResolveError>;

/// Certificate resolver backed by crt.sh
#[derive(Clone)]
pub struct CrtShClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
    timeout: Duration,
    retry_config: RetryConfig,
    max_candidates: usize,
}

impl CrtShClient {
    /// Create a client for the public crt.sh service using default settings
    pub fn new() -> Result<Self> {
        CrtShClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> CrtShClientBuilder {
        CrtShClientBuilder::new()
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// List logged entries whose identities match `domain`
    #[instrument(skip(self))]
    pub async fn search(&self, domain: &str) -> Result<Vec<CrtShEntry>> {
        let body = self
            .get_text(domain, &[("q", domain), ("output", "json")])
            .await?;
        let entries: Vec<CrtShEntry> = serde_json::from_str(&body)?;
        debug!(count = entries.len(), "crt.sh search results");
        Ok(entries)
    }

    /// Download and parse the certificate with crt.sh id `id`
    ///
    /// A 404 yields `NotFound` naming the id.
    #[instrument(skip(self))]
    pub async fn download(&self, id: u64) -> Result<Certificate> {
        let id_param = id.to_string();
        let body = self.get_text(&id_param, &[("d", id_param.as_str())]).await?;
        parse_pem(&body, id)
    }

    /// GET the base URL with `params`, retrying transient failures.
    ///
    /// `subject` is what a 404 reports as not found.
    async fn get_text(&self, subject: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = Url::parse_with_params(self.inner.base_url.as_str(), params)
            .map_err(|e| ResolveError::Http(format!("invalid URL: {e}")))?;

        let mut attempt = 0;
        loop {
            match self.send(subject, &url).await {
                Ok(body) => return Ok(body),
                Err(e) if self.inner.retry_config.should_retry(&e, attempt) => {
                    let wait = self.inner.retry_config.backoff_for(attempt);
                    warn!(url = %url, error = %e, attempt, ?wait, "retrying crt.sh request");
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send(&self, subject: &str, url: &Url) -> Result<String> {
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if status.is_success() {
            return response.text().await.map_err(|e| self.transport_error(&e));
        }

        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        let message = response.text().await.unwrap_or_default();

        match status.as_u16() {
            404 => Err(ResolveError::NotFound {
                domain: subject.to_string(),
            }),
            429 => {
                warn!("Rate limited by crt.sh");
                Err(ResolveError::RateLimited { retry_after })
            }
            code => Err(ResolveError::Api { code, message }),
        }
    }

    fn transport_error(&self, e: &reqwest::Error) -> ResolveError {
        if e.is_timeout() {
            ResolveError::Timeout(self.inner.timeout.as_secs())
        } else {
            ResolveError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl CertificateResolver for CrtShClient {
    #[instrument(skip(self), fields(provider = "crt.sh"))]
    async fn resolve(&self, domain: &str) -> Result<Certificate> {
        let entries = self.search(domain).await?;
        let candidates = select_candidates(entries, domain, self.inner.max_candidates);

        for entry in candidates {
            let cert = self.download(entry.id).await.map_err(|e| match e {
                ResolveError::NotFound { .. } => ResolveError::NotFound {
                    domain: domain.to_string(),
                },
                e => e,
            })?;
            if cert.precertificate {
                debug!(id = entry.id, "skipping precertificate");
                continue;
            }
            debug!(id = entry.id, fingerprint = %cert.fingerprint, "resolved certificate");
            return Ok(cert);
        }

        Err(ResolveError::NotFound {
            domain: domain.to_string(),
        })
    }
}

/// Builder for configuring a [`CrtShClient`]
pub struct CrtShClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    retry_config: RetryConfig,
    max_candidates: usize,
}

impl Default for CrtShClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CrtShClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("sealcheck/{}", env!("CARGO_PKG_VERSION")),
            retry_config: RetryConfig::default(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set retry configuration
    #[must_use]
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Set how many matching entries are downloaded before giving up
    #[must_use]
    pub fn max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<CrtShClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| ResolveError::Http(format!("invalid base URL {}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ResolveError::Http(e.to_string()))?;

        Ok(CrtShClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                retry_config: self.retry_config,
                max_candidates: self.max_candidates,
            }),
        })
    }
}
