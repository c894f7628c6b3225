//! Site configuration.
//!
//! Loaded once at startup from `config/site.json`, which is embedded into the
//! binary. Missing fields fall back to their defaults, so the file only needs
//! to carry what differs from a stock build.

use serde::Deserialize;

const EMBEDDED: &str = include_str!("../config/site.json");

/// Which page the `/` route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeView {
    #[default]
    Landing,
    Dashboard,
}

/// Timing of the simulated document analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Milliseconds between progress ticks.
    pub tick_ms: u32,
    /// Percentage points added per tick.
    pub step: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tick_ms: 300,
            step: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner_name: String,
    pub initials: String,
    pub tagline: String,
    pub email: String,
    pub whatsapp_url: String,
    pub home_view: HomeView,
    pub show_contact_form: bool,
    pub log_level: String,
    pub analysis: AnalysisConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Sanjay Bhoiya".to_string(),
            initials: "SB".to_string(),
            tagline: "Web Developer \u{2022} Digital Marketer \u{2022} Business Consultant"
                .to_string(),
            email: "sanjaybhoiya.1@gmail.com".to_string(),
            whatsapp_url: "https://wa.me/".to_string(),
            home_view: HomeView::Landing,
            show_contact_form: true,
            log_level: "info".to_string(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse the embedded config, falling back to defaults if it is malformed.
    ///
    /// Runs before the logger is initialised, so a parse failure is returned
    /// alongside the config for the caller to log once logging is up.
    pub fn load() -> (Self, Option<String>) {
        match Self::from_json(EMBEDDED) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(format!("Invalid site config: {}", e))),
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Log level name mapped onto `log::Level`. Unknown names mean `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_json(EMBEDDED).unwrap();
        assert_eq!(config.initials, "SB");
        assert_eq!(config.analysis.tick_ms, 300);
        assert_eq!(config.analysis.step, 10);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::from_json(r#"{ "home_view": "dashboard", "analysis": { "step": 25 } }"#).unwrap();
        assert_eq!(config.home_view, HomeView::Dashboard);
        assert_eq!(config.analysis.step, 25);
        assert_eq!(config.analysis.tick_ms, 300);
        assert_eq!(config.email, SiteConfig::default().email);
        assert!(config.show_contact_form);
    }

    #[test]
    fn test_unknown_home_view_is_rejected() {
        assert!(SiteConfig::from_json(r#"{ "home_view": "settings" }"#).is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let mut config = SiteConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "WARN".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_mailto_link() {
        let config = SiteConfig::default();
        assert_eq!(config.mailto(), "mailto:sanjaybhoiya.1@gmail.com");
    }
}
