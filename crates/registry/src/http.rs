use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET transport used by every network stage.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Perform a single GET. Non-2xx statuses are returned, not raised.
    async fn get_text(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse>;
}

/// GET `url` and return the body, treating any non-2xx status as an error.
pub async fn get_ok_text(
    http: &dyn HttpFetch,
    url: &str,
    headers: &[(&str, &str)],
) -> Result<String> {
    let response = http.get_text(url, headers).await?;
    if !response.is_success() {
        return Err(RegistryError::Status {
            url: url.to_string(),
            status: response.status,
        });
    }
    Ok(response.body)
}

/// Production transport over a shared `reqwest` client.
#[derive(Clone)]
pub struct ReqwestFetch {
    client: Client,
}

impl ReqwestFetch {
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetch {
    async fn get_text(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("GET {url} -> {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }
}
