use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::http::{get_ok_text, HttpFetch};

static GITHUB_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^/]+/[^/]+)").expect("github path regex is valid"));

static GITLAB_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"gitlab\.com/([^/]+/[^/]+)").expect("gitlab path regex is valid"));

/// Raw README text plus the provider that served it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeDocument {
    pub provider: &'static str,
    pub text: String,
}

/// The HTTP request a provider wants issued for a repository's README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeRequest {
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
}

/// A source hosting service that can serve raw README text.
pub trait ReadmeProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this provider owns `repository_url`.
    fn matches(&self, repository_url: &str) -> bool;

    /// Build the README request, or `None` when no project path can be extracted.
    fn readme_request(&self, repository_url: &str) -> Option<ReadmeRequest>;
}

fn capture_project_path<'a>(re: &Regex, repository_url: &'a str) -> Option<&'a str> {
    re.captures(repository_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `https://github.com/<owner>/<repo>` via the contents API in raw mode.
pub struct GitHub {
    api_base_url: String,
}

impl GitHub {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn public_instance() -> Self {
        Self::new(&RegistryConfig::default().github_api_url)
    }
}

impl ReadmeProvider for GitHub {
    fn name(&self) -> &'static str {
        "GitHub"
    }

    fn matches(&self, repository_url: &str) -> bool {
        repository_url.contains("github.com")
    }

    fn readme_request(&self, repository_url: &str) -> Option<ReadmeRequest> {
        let repo = capture_project_path(&GITHUB_PATH_RE, repository_url)?;
        Some(ReadmeRequest {
            url: format!("{}/repos/{repo}/readme", self.api_base_url),
            headers: vec![("Accept", "application/vnd.github.v3.raw")],
        })
    }
}

/// `https://gitlab.com/<namespace>/<project>` via the repository files API.
pub struct GitLab {
    base_url: String,
}

impl GitLab {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn public_instance() -> Self {
        Self::new(&RegistryConfig::default().gitlab_url)
    }
}

impl ReadmeProvider for GitLab {
    fn name(&self) -> &'static str {
        "GitLab"
    }

    fn matches(&self, repository_url: &str) -> bool {
        repository_url.contains("gitlab.com")
    }

    fn readme_request(&self, repository_url: &str) -> Option<ReadmeRequest> {
        let project = capture_project_path(&GITLAB_PATH_RE, repository_url)?;
        Some(ReadmeRequest {
            url: format!(
                "{}/api/v4/projects/{}/repository/files/README.md/raw",
                self.base_url,
                urlencoding::encode(project)
            ),
            headers: Vec::new(),
        })
    }
}

/// Routes a repository URL to the first matching provider and downloads its README.
pub struct ReadmeFetcher {
    http: Arc<dyn HttpFetch>,
    providers: Vec<Box<dyn ReadmeProvider>>,
}

impl ReadmeFetcher {
    /// GitHub and GitLab, in that order, at the configured endpoints.
    pub fn new(http: Arc<dyn HttpFetch>, config: &RegistryConfig) -> Self {
        let providers: Vec<Box<dyn ReadmeProvider>> = vec![
            Box::new(GitHub::new(&config.github_api_url)),
            Box::new(GitLab::new(&config.gitlab_url)),
        ];
        Self::with_providers(http, providers)
    }

    pub fn with_providers(http: Arc<dyn HttpFetch>, providers: Vec<Box<dyn ReadmeProvider>>) -> Self {
        Self { http, providers }
    }

    pub fn provider_for(&self, repository_url: &str) -> Option<&dyn ReadmeProvider> {
        self.providers
            .iter()
            .find(|provider| provider.matches(repository_url))
            .map(|provider| provider.as_ref())
    }

    /// Best-effort fetch. Unknown hosts return `None` without touching the network.
    pub async fn fetch_readme(&self, repository_url: &str) -> Option<ReadmeDocument> {
        match self.try_fetch_readme(repository_url).await {
            Ok(document) => Some(document),
            Err(RegistryError::UnsupportedHost(url)) => {
                log::debug!("No README provider for {url}");
                None
            }
            Err(err) => {
                log::warn!("README fetch for {repository_url} failed: {err}");
                None
            }
        }
    }

    pub async fn try_fetch_readme(&self, repository_url: &str) -> Result<ReadmeDocument> {
        let provider = self
            .provider_for(repository_url)
            .ok_or_else(|| RegistryError::UnsupportedHost(repository_url.to_string()))?;
        let request = provider
            .readme_request(repository_url)
            .ok_or_else(|| RegistryError::InvalidRepositoryUrl(repository_url.to_string()))?;
        let text = get_ok_text(self.http.as_ref(), &request.url, &request.headers).await?;
        Ok(ReadmeDocument {
            provider: provider.name(),
            text,
        })
    }
}
