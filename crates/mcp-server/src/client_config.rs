use serde_json::{json, Value};

/// `mcpServers` snippet registering this server with an MCP client.
pub fn client_config() -> Value {
    json!({
        "mcpServers": {
            "composer-ai": {
                "command": "composer-mcp",
                "args": [],
            }
        }
    })
}

pub fn render_client_config() -> anyhow::Result<String> {
    let snippet = serde_json::to_string_pretty(&client_config())?;
    Ok(format!("Copy/Paste into your MCP client:\n{snippet}"))
}
