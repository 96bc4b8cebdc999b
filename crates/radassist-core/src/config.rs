//! Configuration for radassist.
//!
//! Loaded from `<config_dir>/radassist/config.toml` (see
//! [`ConfigManager`](crate::ConfigManager)). Every field has a default, so a
//! missing file or a partial file is fine.

use serde::{Deserialize, Serialize};

use crate::traits::ConfigManager;
use crate::user_name::DEFAULT_USER_NAME;

/// Top-level radassist configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadassistConfig {
    /// HTTP host settings.
    pub server: ServerSettings,
    /// Labels and defaults for the rendered page.
    pub page: PageSettings,
}

impl ConfigManager for RadassistConfig {
    fn project_name() -> &'static str {
        "radassist"
    }
}

/// Where the web host listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// TCP port. `0` picks an ephemeral port.
    pub port: u16,
}

impl ServerSettings {
    /// `host:port` form, for logs and binding.
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

/// Text and defaults shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Document title shown in the browser tab.
    pub page_title: String,
    /// In-page heading.
    pub title: String,
    /// Static line under the heading.
    pub description: String,
    /// Label of the name input.
    pub input_label: String,
    /// Value the name input starts with.
    pub default_name: String,
    /// Caption of the button.
    pub button_label: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            page_title: "Radiology Assistant".to_string(),
            title: "Radiology Assistant".to_string(),
            description: "Welcome to your reporting workspace.".to_string(),
            input_label: "Your name".to_string(),
            default_name: DEFAULT_USER_NAME.to_string(),
            button_label: "Say Hello".to_string(),
        }
    }
}
