//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use lexguard_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "lexguard";

/// `<config_dir>/lexguard/config.toml`, or `./config.toml` without a config dir
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config to `config_path` if none exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))
                .context("Creating config directory")?;
        }
    }

    let default_content = r#"# LexGuard Configuration

[server]
base_url = "http://localhost:8000"
request_timeout_secs = 0    # 0 = wait indefinitely

[auth]
token_env = "LEXGUARD_TOKEN"
# token_file = "/path/to/token"   # Defaults to the lexguard data directory

[export]
# directory = "/path/to/exports"  # Defaults to the current directory

[behavior]
confirm_quit_unsaved = true  # Ask before quitting with unsaved edits

[ui]
show_char_count = true
"#;
    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))
        .with_context(|| format!("Writing {}", config_path.display()))?;
    info!("Created default config at {:?}", config_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings.server.base_url, "http://localhost:8000");
        assert!(settings.behavior.confirm_quit_unsaved);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "https://legal.example.com"

[behavior]
confirm_quit_unsaved = false
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.server.base_url, "https://legal.example.com");
        assert!(!settings.behavior.confirm_quit_unsaved);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.server.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        let _: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://custom:9000\"\n").unwrap();

        init_config_file(&path).unwrap();
        assert_eq!(load_settings(&path).server.base_url, "http://custom:9000");
    }

    #[test]
    fn test_init_config_file_reports_config_error() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let err = init_config_file(&blocker.join("config.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_default_config_path_file_name() {
        assert!(default_config_path().ends_with("config.toml"));
    }
}
