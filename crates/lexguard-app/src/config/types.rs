//! Configuration types for LexGuard

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub export: ExportSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Analysis service connection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds; 0 waits indefinitely
    #[serde(default)]
    pub request_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: 0,
        }
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Where the bearer token is read from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Defaults to `<data_local_dir>/lexguard/token`
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
            token_file: None,
        }
    }
}

impl AuthSettings {
    pub fn token_file(&self) -> Option<PathBuf> {
        self.token_file
            .clone()
            .or_else(lexguard_client::default_token_file)
    }
}

fn default_token_env() -> String {
    "LEXGUARD_TOKEN".to_string()
}

/// Export settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Target directory for `edited-document.txt`; current directory if unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl ExportSettings {
    pub fn directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting with unsaved edits
    #[serde(default = "default_true")]
    pub confirm_quit_unsaved: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_quit_unsaved: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the character count under the text input
    #[serde(default = "default_true")]
    pub show_char_count: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_char_count: true,
        }
    }
}

fn default_true() -> bool {
    true
}
