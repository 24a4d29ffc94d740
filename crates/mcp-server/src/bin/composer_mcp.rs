use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    composer_mcp::main_entry().await
}
