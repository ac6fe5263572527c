
use serde::Deserialize;

pub const DEFAULT_CLI_PATH: &str = "juju";

/// Settings for the local controller configuration provider
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Name or path of the Juju CLI executable, resolved through PATH when not absolute
    pub cli_path: String,

    /// Writes the controller password in plain text to the debug log when enabled
    pub log_credentials: bool,

    /// Treats an empty controller list as a successful, all-empty configuration
    pub allow_empty_controller_list: bool,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        ProviderSettings {
            cli_path: DEFAULT_CLI_PATH.to_string(),
            log_credentials: false,
            allow_empty_controller_list: false,
        }
    }
}
