//! Setup-step determination: registry → README → sections → miner → fallback table.

use composer_registry::{
    HttpFetch, PackagistClient, ReadmeDocument, ReadmeFetcher, RegistryConfig, ReqwestFetch,
};
use composer_setup_miner::{extract_setup_steps, FallbackTable, SetupStep};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Stateless across calls; every invocation allocates its own intermediates.
pub struct SetupPipeline {
    packagist: PackagistClient,
    readmes: ReadmeFetcher,
    fallback: &'static FallbackTable,
}

impl SetupPipeline {
    pub fn new(http: Arc<dyn HttpFetch>, config: &RegistryConfig) -> Self {
        Self {
            packagist: PackagistClient::new(http.clone(), config),
            readmes: ReadmeFetcher::new(http, config),
            fallback: FallbackTable::builtin(),
        }
    }

    /// Pipeline over a real HTTP client.
    pub fn from_config(config: &RegistryConfig) -> anyhow::Result<Self> {
        let http = ReqwestFetch::new(config)?;
        Ok(Self::new(Arc::new(http), config))
    }

    /// Steps mined from the package README, or the static table when mining
    /// is unavailable or comes back empty.
    pub async fn determine_setup_steps(&self, package: &str) -> Vec<SetupStep> {
        match self.mine_readme_steps(package).await {
            Some(steps) if !steps.is_empty() => steps,
            _ => {
                let steps = self.fallback.steps_for(package);
                log::debug!("{package}: using {} fallback steps", steps.len());
                steps
            }
        }
    }

    async fn mine_readme_steps(&self, package: &str) -> Option<Vec<SetupStep>> {
        let metadata = self.packagist.lookup(package).await?;
        let Some(repository_url) = metadata.repository_url else {
            log::debug!("{package}: no repository URL on Packagist");
            return None;
        };
        let readme = self.readmes.fetch_readme(&repository_url).await?;
        mine_guarded(package, &readme)
    }
}

// Mining is pure string work; a panic there is downgraded like a failed fetch.
fn mine_guarded(package: &str, readme: &ReadmeDocument) -> Option<Vec<SetupStep>> {
    match catch_unwind(AssertUnwindSafe(|| extract_setup_steps(&readme.text))) {
        Ok(steps) => {
            log::debug!(
                "{package}: mined {} steps from {} README",
                steps.len(),
                readme.provider
            );
            Some(steps)
        }
        Err(_) => {
            log::error!("{package}: README mining panicked; using fallback table");
            None
        }
    }
}
