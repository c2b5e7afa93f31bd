//! Application configuration module / Lietotnes konfigurācija
//!
//! Manages application configuration loaded from config.json
//! Creates default config file on first run / Pirmajā palaišanā izveido noklusēto failu

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::backend::DEFAULT_TOP_K;

/// Environment override for the backend base URL
pub const BACKEND_URL_ENV: &str = "SEARCH_BACKEND_URL";

/// Application configuration / Lietotnes konfigurācija
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration / Servera konfigurācija
    #[serde(default)]
    pub server: ServerConfig,
    /// Search backend configuration / Meklēšanas servera konfigurācija
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Server configuration / Servera konfigurācija
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address / Klausīšanās adrese
    pub host: String,
    /// Listen port / Ports
    pub port: u16,
}

/// Search backend configuration / Meklēšanas servera konfigurācija
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend exposing /api/search and /api/categories
    pub base_url: String,
    /// Request timeout in seconds / Pieprasījuma noildze
    pub timeout_secs: u64,
    /// Results requested per search / Rezultātu skaits
    pub top_k: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 30,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl AppConfig {
    /// Get the server bind address / Servera adrese
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Apply environment overrides / Vides mainīgo ignorēšana
    pub fn apply_env(&mut self) {
        self.override_backend_url(std::env::var(BACKEND_URL_ENV).ok());
    }

    /// Replace the backend URL unless the override is missing or blank
    fn override_backend_url(&mut self, url: Option<String>) {
        if let Some(url) = url {
            let url = url.trim();
            if !url.is_empty() {
                self.backend.base_url = url.to_string();
            }
        }
    }
}

/// Get the config file path / Konfigurācijas faila ceļš
fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / Ielādē konfigurāciju
pub fn load_config() -> Result<AppConfig, String> {
    load_config_from(&get_config_path())
}

/// Load configuration from a specific path, creating it with defaults if missing
pub fn load_config_from(config_path: &Path) -> Result<AppConfig, String> {
    if config_path.exists() {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        let config = AppConfig::default();
        save_config_to(&config, config_path)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

fn save_config_to(config: &AppConfig, config_path: &Path) -> Result<(), String> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}

/// Load configuration and apply environment overrides / Ielādē galīgo konfigurāciju
pub fn init_config() -> Result<AppConfig, String> {
    let mut config = load_config()?;
    config.apply_env();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load_config_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.top_k, DEFAULT_TOP_K);

        let reloaded = load_config_from(&path).unwrap();
        assert_eq!(reloaded.backend.base_url, config.backend.base_url);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"server":{"host":"127.0.0.1","port":9000}}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.get_bind_address(), "127.0.0.1:9000");
        assert_eq!(config.backend.timeout_secs, 30);
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"backend":{"base_url":"http://10.0.0.1:8000"},"server":{"port":9100}}"#)
            .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.backend.base_url, "http://10.0.0.1:8000");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.backend.top_k, DEFAULT_TOP_K);
        assert_eq!(config.get_bind_address(), "0.0.0.0:9100");
    }

    #[test]
    fn test_backend_url_override() {
        let mut config = AppConfig::default();

        config.override_backend_url(None);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");

        config.override_backend_url(Some("   ".to_string()));
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");

        config.override_backend_url(Some(" http://search.local:9000 ".to_string()));
        assert_eq!(config.backend.base_url, "http://search.local:9000");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"));
    }
}
