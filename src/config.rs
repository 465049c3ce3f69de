use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dirs;
use crate::error::Result;

/// User-configurable settings for the relay server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Host address for the HTTP server (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the HTTP server (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// The managed router this relay talks to.
    #[serde(default)]
    pub router: RouterConfig,
}

/// Admin credentials and management endpoints of the downstream router.
///
/// The login/config paths and the activation form fields are firmware
/// specific; the defaults match a Huawei HG8145V6 and can be overridden
/// per deployment without touching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Router management interface address (default: 192.168.100.1)
    #[serde(default = "default_router_host")]
    pub host: String,

    /// Router management interface port (default: 80)
    #[serde(default = "default_router_port")]
    pub port: u16,

    /// Admin username (default: root)
    #[serde(default = "default_username")]
    pub username: String,

    /// Admin password, hashed before it goes on the wire
    #[serde(default)]
    pub password: String,

    /// Login endpoint path
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Privileged configuration endpoint path
    #[serde(default = "default_config_path")]
    pub config_path: String,

    /// Form fields sent to the configuration endpoint to enable guest access
    #[serde(default = "default_activation_params")]
    pub activation_params: BTreeMap<String, String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_router_host() -> String {
    "192.168.100.1".to_string()
}

fn default_router_port() -> u16 {
    80
}

fn default_username() -> String {
    "root".to_string()
}

fn default_login_path() -> String {
    "/asp/GetRandCount.asp".to_string()
}

fn default_config_path() -> String {
    "/html/wlan/wlanconfig.asp".to_string()
}

fn default_activation_params() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("wlan_enable".to_string(), "1".to_string()),
        ("guest_access".to_string(), "1".to_string()),
    ])
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            router: RouterConfig::default(),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            host: default_router_host(),
            port: default_router_port(),
            username: default_username(),
            password: String::new(),
            login_path: default_login_path(),
            config_path: default_config_path(),
            activation_params: default_activation_params(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from the default config file path.
    /// Returns default config if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = dirs::config_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                crate::error::RelayError::Config(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let config: RelayConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the current configuration to the default config file path.
    pub fn save(&self) -> Result<()> {
        let path = dirs::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Returns the server bind address string (e.g., "127.0.0.1:3000").
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl RouterConfig {
    /// Base URL of the router's management interface.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
