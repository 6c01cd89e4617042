use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// Backend used when no build-time or stored override exists
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

const STORAGE_KEY: &str = "menteeboard_settings";

/// Runtime configuration, persisted in localStorage
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub api_base_url: String,
    /// Fraction of a card that must be visible before it fades in
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    /// CSS margin applied to the viewport when testing card visibility
    #[serde(default = "default_reveal_root_margin")]
    pub reveal_root_margin: String,
}

fn default_reveal_threshold() -> f64 {
    DEFAULT_REVEAL_THRESHOLD
}

fn default_reveal_root_margin() -> String {
    DEFAULT_REVEAL_ROOT_MARGIN.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("MENTEEBOARD_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

impl AppSettings {
    /// Clamp and trim values loaded from storage or typed by the user
    pub fn normalized(mut self) -> Result<Self, String> {
        let base = self.api_base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }
        if !(base.starts_with("http://") || base.starts_with("https://") || base.starts_with('/')) {
            return Err(format!("API base URL must be http(s) or a path: {}", base));
        }
        self.api_base_url = base.to_string();

        if !self.reveal_threshold.is_finite() {
            self.reveal_threshold = DEFAULT_REVEAL_THRESHOLD;
        }
        self.reveal_threshold = self.reveal_threshold.clamp(0.0, 1.0);

        if self.reveal_root_margin.trim().is_empty() {
            self.reveal_root_margin = DEFAULT_REVEAL_ROOT_MARGIN.to_string();
        }
        Ok(self)
    }
}

/// Global settings state
pub static SETTINGS: GlobalSignal<AppSettings> = Signal::global(AppSettings::default);

/// Load settings from localStorage, keeping defaults for anything invalid
pub fn init_settings() {
    match LocalStorage::get::<AppSettings>(STORAGE_KEY) {
        Ok(stored) => match stored.normalized() {
            Ok(settings) => {
                log::info!("Loaded settings from storage (api: {})", settings.api_base_url);
                *SETTINGS.write() = settings;
            }
            Err(e) => log::warn!("Ignoring stored settings: {}", e),
        },
        Err(_) => {
            log::info!("Using default settings (api: {})", SETTINGS.read().api_base_url);
        }
    }
}

/// Validate, apply and persist new settings
pub fn update_settings(settings: AppSettings) -> Result<(), String> {
    let settings = settings.normalized()?;
    if *SETTINGS.read() == settings {
        return Ok(());
    }

    if let Err(e) = LocalStorage::set(STORAGE_KEY, &settings) {
        log::warn!("Failed to persist settings: {}", e);
    }
    *SETTINGS.write() = settings;
    log::info!("Settings updated");
    Ok(())
}

/// Current settings without subscribing the caller
pub fn peek_settings() -> AppSettings {
    SETTINGS.peek().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: &str, threshold: f64, margin: &str) -> AppSettings {
        AppSettings {
            api_base_url: url.to_string(),
            reveal_threshold: threshold,
            reveal_root_margin: margin.to_string(),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let defaults = AppSettings::default();
        assert_eq!(defaults.reveal_threshold, 0.1);
        assert_eq!(defaults.reveal_root_margin, "0px 0px -10% 0px");
        assert_eq!(defaults.clone().normalized(), Ok(defaults));
    }

    #[test]
    fn test_normalize_trims_and_clamps() {
        let normalized = settings(" https://api.example.org/ ", 3.5, "").normalized().unwrap();
        assert_eq!(normalized.api_base_url, "https://api.example.org");
        assert_eq!(normalized.reveal_threshold, 1.0);
        assert_eq!(normalized.reveal_root_margin, "0px 0px -10% 0px");

        let normalized = settings("/api", f64::NAN, "10px").normalized().unwrap();
        assert_eq!(normalized.reveal_threshold, 0.1);
        assert_eq!(normalized.reveal_root_margin, "10px");
    }

    #[test]
    fn test_normalize_rejects_bad_urls() {
        assert!(settings("  ", 0.1, "0px").normalized().is_err());
        assert!(settings("ftp://files", 0.1, "0px").normalized().is_err());
    }

    #[test]
    fn test_missing_reveal_fields_use_defaults() {
        let parsed: AppSettings = serde_json::from_str(r#"{"api_base_url":"/api"}"#).unwrap();
        assert_eq!(parsed.reveal_threshold, 0.1);
        assert_eq!(parsed.reveal_root_margin, "0px 0px -10% 0px");
    }
}
