//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Terminal view limits
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.api.analytics_page_size == 0 {
            return Err(AppError::validation(
                "api.analytics_page_size must be > 0",
            ));
        }
        Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if self.display.timeline_days == 0 {
            return Err(AppError::validation("display.timeline_days must be > 0"));
        }
        if self.display.top_chart_size == 0 {
            return Err(AppError::validation("display.top_chart_size must be > 0"));
        }
        if self.display.recent_limit == 0 {
            return Err(AppError::validation("display.recent_limit must be > 0"));
        }
        Ok(())
    }
}

/// Backend API connection settings.
///
/// The base URL is fixed configuration. It is never derived at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the jobs REST API, including the /api prefix
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// page_size sent when fetching the full listing pool for analytics
    #[serde(default = "defaults::analytics_page_size")]
    pub analytics_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            analytics_page_size: defaults::analytics_page_size(),
        }
    }
}

/// Terminal view limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Trailing window of the posting timeline, in days
    #[serde(default = "defaults::timeline_days")]
    pub timeline_days: usize,

    /// How many entries top-skill / top-company charts show
    #[serde(default = "defaults::top_chart_size")]
    pub top_chart_size: usize,

    /// How many recent listings the overview shows
    #[serde(default = "defaults::recent_limit")]
    pub recent_limit: usize,

    /// Maximum listing title width before truncation
    #[serde(default = "defaults::max_title_width")]
    pub max_title_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timeline_days: defaults::timeline_days(),
            top_chart_size: defaults::top_chart_size(),
            recent_limit: defaults::recent_limit(),
            max_title_width: defaults::max_title_width(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "http://127.0.0.1:8000/api".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; jobpulse/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn analytics_page_size() -> u32 {
        1000
    }

    // Display defaults
    pub fn timeline_days() -> usize {
        30
    }
    pub fn top_chart_size() -> usize {
        10
    }
    pub fn recent_limit() -> usize {
        6
    }
    pub fn max_title_width() -> usize {
        60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.api.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeline() {
        let mut config = Config::default();
        config.display.timeline_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_partial_toml() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "[api]\nbase_url = \"https://jobs.example.com/api\"\n\n[display]\ntop_chart_size = 5\n"
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.base_url, "https://jobs.example.com/api");
        assert_eq!(config.api.timeout_secs, 30); // untouched default
        assert_eq!(config.display.top_chart_size, 5);
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
    }
}
