//! MCP tool surface for Composer MCP.

use anyhow::Result;
use composer_registry::RegistryConfig;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use std::sync::Arc;

use crate::compose::compose;
use crate::pipeline::SetupPipeline;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InstallPackageRequest {
    /// Package identifier in `vendor/name` form
    #[schemars(description = "The package name to install")]
    pub package: String,

    /// Version constraint, passed through to the command verbatim
    #[schemars(description = "The version of the package to install")]
    pub version: Option<String>,
}

/// Composer MCP Service
#[derive(Clone)]
pub struct ComposerService {
    pipeline: Arc<SetupPipeline>,
    tool_router: ToolRouter<Self>,
}

impl ComposerService {
    pub fn new(pipeline: SetupPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        Ok(Self::new(SetupPipeline::from_config(config)?))
    }

    /// Advisory text for one request. Errors here become `Error: <message>` text.
    pub async fn install_instructions(&self, request: &InstallPackageRequest) -> Result<String> {
        let package = request.package.as_str();
        if package.trim().is_empty() {
            anyhow::bail!("package name must not be empty");
        }
        let version = request.version.as_deref();
        let steps = self.pipeline.determine_setup_steps(package).await;
        Ok(compose(package, version, &steps))
    }
}

#[tool_handler]
impl ServerHandler for ComposerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Composer MCP returns install instructions for PHP packages. Call 'install_package' with a vendor/name package (and optional version) to get the composer command plus any post-install setup steps inferred from the package README. Nothing is executed.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[tool_router]
impl ComposerService {
    /// Install instructions plus post-install setup steps
    #[tool(description = "Get the composer command to install a package and the additional setup steps to run afterwards (publishing config, migrations, asset builds). Advisory only: nothing is executed.")]
    pub async fn install_package(
        &self,
        Parameters(request): Parameters<InstallPackageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = match self.install_instructions(&request).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("install_package failed: {e:#}");
                format!("Error: {e}")
            }
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
