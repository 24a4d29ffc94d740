//! Offline [`HttpFetch`] double for tests in this crate and its dependents.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{RegistryError, Result};
use crate::http::{HttpFetch, HttpResponse};

/// A canned reply for [`CannedFetch`].
#[derive(Debug, Clone)]
pub enum CannedResponse {
    Reply(HttpResponse),
    NetworkError(String),
}

impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Reply(HttpResponse {
            status: 200,
            body: body.into(),
        })
    }

    pub fn status(status: u16) -> Self {
        Self::Reply(HttpResponse {
            status,
            body: String::new(),
        })
    }
}

/// Offline transport that serves fixed responses keyed by exact URL and
/// records every request it sees. Unknown URLs answer 404.
#[derive(Debug, Default)]
pub struct CannedFetch {
    responses: HashMap<String, CannedResponse>,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl CannedFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, response: CannedResponse) -> Self {
        self.responses.insert(url.into(), response);
        self
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.lock_requests()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Headers sent with the first request to `url`.
    pub fn headers_for(&self, url: &str) -> Option<Vec<(String, String)>> {
        self.lock_requests()
            .iter()
            .find(|(seen, _)| seen == url)
            .map(|(_, headers)| headers.clone())
    }

    fn lock_requests(&self) -> MutexGuard<'_, Vec<(String, Vec<(String, String)>)>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl HttpFetch for CannedFetch {
    async fn get_text(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        self.lock_requests().push((
            url.to_string(),
            headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ));
        match self.responses.get(url) {
            Some(CannedResponse::Reply(response)) => Ok(response.clone()),
            Some(CannedResponse::NetworkError(message)) => {
                Err(RegistryError::Other(message.clone()))
            }
            None => Ok(HttpResponse {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn canned_fetch_records_requests_and_headers() {
        let http = CannedFetch::new().with("http://x/a", CannedResponse::NetworkError("down".into()));
        assert!(http.get_text("http://x/a", &[("Accept", "text/plain")]).await.is_err());
        assert_eq!(http.requested_urls(), vec!["http://x/a".to_string()]);
        assert_eq!(
            http.headers_for("http://x/a"),
            Some(vec![("Accept".to_string(), "text/plain".to_string())])
        );
    }

    #[tokio::test]
    async fn unknown_url_answers_not_found() {
        let http = CannedFetch::new();
        let response = http.get_text("http://x/none", &[]).await.expect("reply");
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }
}
