use std::sync::OnceLock;

use shared_types::ClientConfig;

/// `config.toml` at the workspace root, embedded so the wasm build needs no
/// filesystem.
const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Parse the bundled file and apply the `TICKETS_API_URL` build-time override.
///
/// A malformed file logs a warning and falls back to defaults.
pub fn parse_config(contents: &str, base_url_override: Option<&str>) -> ClientConfig {
    let config = match ClientConfig::from_toml_str(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid config.toml, using defaults");
            ClientConfig::default()
        }
    };
    config.with_base_url(base_url_override)
}

/// Load configuration once. Later calls return the cached value.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(BUNDLED_CONFIG, option_env!("TICKETS_API_URL"));
        tracing::info!(
            base_url = %config.api.base_url,
            page_size = config.ui.page_size,
            "client configuration loaded"
        );
        config
    })
}

/// The loaded configuration, loading it on first use.
pub fn client_config() -> ClientConfig {
    load_config().clone()
}
