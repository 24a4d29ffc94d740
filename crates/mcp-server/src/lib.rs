//! Composer MCP Server
//!
//! Tells AI agents how to install a Composer package and what to do afterwards.
//!
//! ## Tools
//!
//! - `install_package` - `composer require` command plus post-install setup steps
//!   mined from the package README (Packagist → GitHub/GitLab), or taken from a
//!   built-in table for well-known packages
//!
//! Nothing is executed; the output is advisory text.
//!
//! ## Usage
//!
//! Add to your MCP client configuration (or run `composer-mcp --print-config`):
//! ```json
//! {
//!   "mcpServers": {
//!     "composer-ai": {
//!       "command": "composer-mcp",
//!       "args": []
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use composer_registry::RegistryConfig;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

pub mod client_config;
pub mod compose;
pub mod pipeline;
pub mod tools;

pub use compose::{compose, install_command};
pub use pipeline::SetupPipeline;
pub use tools::{ComposerService, InstallPackageRequest};

pub async fn main_entry() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--print-config") {
        println!("{}", client_config::render_client_config()?);
        return Ok(());
    }

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = RegistryConfig::from_env();
    log::info!(
        "Starting Composer MCP server (packagist: {})",
        config.packagist_url
    );

    let service = ComposerService::from_config(&config)?;
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Composer MCP server stopped");
    Ok(())
}
