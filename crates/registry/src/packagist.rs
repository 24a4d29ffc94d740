use serde::Deserialize;
use std::sync::Arc;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::http::{get_ok_text, HttpFetch};

/// What the registry knows about a package, for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMetadata {
    pub name: String,
    pub description: Option<String>,
    pub repository_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PackagistEnvelope {
    package: Option<PackagistPackage>,
}

#[derive(Debug, Deserialize)]
struct PackagistPackage {
    name: Option<String>,
    description: Option<String>,
    repository: Option<String>,
}

/// Reads `GET <packagist>/packages/<identifier>.json`.
#[derive(Clone)]
pub struct PackagistClient {
    http: Arc<dyn HttpFetch>,
    base_url: String,
}

impl PackagistClient {
    pub fn new(http: Arc<dyn HttpFetch>, config: &RegistryConfig) -> Self {
        Self {
            http,
            base_url: config.packagist_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn package_url(&self, identifier: &str) -> String {
        format!("{}/packages/{identifier}.json", self.base_url)
    }

    /// Best-effort lookup. Any failure is logged and reported as `None`.
    pub async fn lookup(&self, identifier: &str) -> Option<RegistryMetadata> {
        match self.try_lookup(identifier).await {
            Ok(metadata) => Some(metadata),
            Err(err) => {
                log::warn!("Packagist lookup for {identifier} failed: {err}");
                None
            }
        }
    }

    pub async fn try_lookup(&self, identifier: &str) -> Result<RegistryMetadata> {
        if identifier.trim().is_empty() {
            return Err(RegistryError::EmptyIdentifier);
        }
        let url = self.package_url(identifier);
        let body = get_ok_text(self.http.as_ref(), &url, &[]).await?;
        let envelope: PackagistEnvelope =
            serde_json::from_str(&body).map_err(|source| RegistryError::Json {
                url: url.clone(),
                source,
            })?;
        let package = envelope
            .package
            .ok_or_else(|| RegistryError::MissingPackage(identifier.to_string()))?;

        Ok(RegistryMetadata {
            name: package.name.unwrap_or_else(|| identifier.to_string()),
            description: package.description.filter(|d| !d.trim().is_empty()),
            repository_url: package
                .repository
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        })
    }
}
