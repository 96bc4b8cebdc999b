//! `serve` and `render` commands.

use std::net::SocketAddr;

use radassist_core::{render_text, ConfigManager, FormRenderer, Interaction, RadassistConfig};
use radassist_web::Server;

/// Load the config and apply a `--listen` override.
pub fn serve_config(
    config_path: Option<&str>,
    listen: Option<SocketAddr>,
) -> radassist_core::Result<RadassistConfig> {
    let mut config = RadassistConfig::load(config_path)?;
    if let Some(addr) = listen {
        config.server.host = addr.ip().to_string();
        config.server.port = addr.port();
    }
    Ok(config)
}

/// Run the web host until Ctrl-C.
pub async fn cmd_serve(
    config_path: Option<&str>,
    listen: Option<SocketAddr>,
) -> radassist_web::Result<()> {
    let config = serve_config(config_path, listen)?;
    tracing::debug!(address = %config.server.address(), "starting web host");
    Server::bind(&config).await?.serve().await
}

/// Run one render pass and return it as plain text.
pub fn cmd_render(
    config_path: Option<&str>,
    name: Option<String>,
    click: bool,
) -> radassist_core::Result<String> {
    let config = RadassistConfig::load(config_path)?;
    let interaction = Interaction {
        user_name: name,
        activated: click,
    };
    let page = FormRenderer::new(config.page).render(&interaction);
    Ok(render_text(&page))
}
