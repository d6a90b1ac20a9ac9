//! Configuration management for portfolio-tui.
//!
//! Supports layered configuration: defaults → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl PortfolioConfig {
    /// Load configuration with hierarchy: defaults → user → env
    pub fn load() -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with embedded defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. User config (~/.config/portfolio-tui/config.toml)
        if let Some(config_dir) =
            directories::ProjectDirs::from("com", "portfolio-tui", "portfolio-tui")
        {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 3. Environment variables (PORTFOLIO_TUI_*)
        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO_TUI")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration with default settings only
    pub fn load_defaults() -> Self {
        Self::default()
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI refresh rate in milliseconds (the animation tick)
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
    /// Suppress entrance stagger and backdrop drift
    #[serde(default)]
    pub reduced_motion: bool,
    /// Enable vim-style navigation (j/k/h/l)
    #[serde(default = "default_vim_navigation")]
    pub vim_navigation: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
            reduced_motion: false,
            vim_navigation: default_vim_navigation(),
        }
    }
}

fn default_refresh_rate_ms() -> u64 {
    33
}

fn default_vim_navigation() -> bool {
    true
}

/// Profile facts that are deployment data rather than page content:
/// the contact address, outbound links, and avatar location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Two-letter badge shown when the avatar image cannot be loaded
    #[serde(default = "default_initials")]
    pub initials: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_github_url")]
    pub github_url: String,
    #[serde(default = "default_linkedin_url")]
    pub linkedin_url: String,
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
    #[serde(default = "default_avatar_path")]
    pub avatar_path: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            initials: default_initials(),
            tagline: default_tagline(),
            email: default_email(),
            github_url: default_github_url(),
            linkedin_url: default_linkedin_url(),
            resume_url: default_resume_url(),
            avatar_path: default_avatar_path(),
        }
    }
}

fn default_name() -> String {
    "William Acosta".to_string()
}

fn default_initials() -> String {
    "WA".to_string()
}

fn default_tagline() -> String {
    "Full-Stack Developer & Creative Problem Solver — I build fast, clean, human-friendly products."
        .to_string()
}

fn default_email() -> String {
    "wacostal@macalester.edu".to_string()
}

fn default_github_url() -> String {
    "https://github.com/williamacostalora".to_string()
}

fn default_linkedin_url() -> String {
    "https://www.linkedin.com/in/william-acosta-lora-2a288829a/".to_string()
}

fn default_resume_url() -> String {
    "../resume.pdf".to_string()
}

fn default_avatar_path() -> String {
    "avatar.jpeg".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortfolioConfig::default();
        assert_eq!(config.ui.refresh_rate_ms, 33);
        assert!(!config.ui.reduced_motion);
        assert!(config.ui.vim_navigation);
        assert_eq!(config.profile.initials, "WA");
        assert_eq!(config.profile.email, "wacostal@macalester.edu");
    }
}
