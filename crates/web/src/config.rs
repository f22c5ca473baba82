// =============================================================================
// Aarohan Web - Site Configuration
// =============================================================================
// Table of Contents:
// 1. Environment
// 2. Theme
// 3. Site Config
// 4. Loading
// =============================================================================

use serde::Deserialize;

use crate::error::ConfigError;

/// Site configuration compiled into the bundle.
const EMBEDDED_CONFIG: &str = include_str!("../site.json");

// -----------------------------------------------------------------------------
// 1. Environment
// -----------------------------------------------------------------------------

/// Build environment, read from `ENVIRONMENT` at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Environment this bundle was compiled for.
    pub fn current() -> Self {
        Self::from_name(option_env!("ENVIRONMENT").unwrap_or("production"))
    }

    fn from_name(name: &str) -> Self {
        if name == "development" {
            Environment::Development
        } else {
            // Production and staging share the same settings
            Environment::Production
        }
    }

    /// Console log level for this environment.
    pub fn log_level(self) -> log::Level {
        match self {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Theme
// -----------------------------------------------------------------------------

/// Color theme applied to the root `<html>` element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Site Config
// -----------------------------------------------------------------------------

/// Static site settings passed into the root composition.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub tagline: String,
    pub description: String,
    pub contact_email: String,
    pub theme: Theme,
    /// How long the loading screen stays up on first load.
    pub loading_delay_ms: u32,
    /// Simulated contact form round trip.
    pub form_delay_ms: u32,
    pub toast_duration_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Aarohan Group".to_string(),
            tagline: "Building what endures.".to_string(),
            description: "A multi-vertical enterprise group.".to_string(),
            contact_email: "hello@aarohan.group".to_string(),
            theme: Theme::Dark,
            loading_delay_ms: 800,
            form_delay_ms: 1500,
            toast_duration_ms: 4000,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "site_name",
                reason: "must not be empty",
            });
        }
        if self.form_delay_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "form_delay_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// 4. Loading
// -----------------------------------------------------------------------------

/// Load the embedded config, falling back to defaults when it is unusable.
pub fn load() -> SiteConfig {
    match SiteConfig::from_json(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Ignoring embedded site config: {}", err);
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let config = SiteConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.site_name, "Aarohan Group");
        assert_eq!(config.form_delay_ms, 1500);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = SiteConfig::from_json(r#"{ "theme": "light" }"#).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.loading_delay_ms, 800);
        assert_eq!(config.toast_duration_ms, 4000);
    }

    #[test]
    fn zero_form_delay_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "form_delay_ms": 0 }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                field: "form_delay_ms",
                reason: "must be greater than zero",
            }
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn environment_names() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("staging"), Environment::Production);
        assert_eq!(Environment::Development.log_level(), log::Level::Debug);
    }
}
