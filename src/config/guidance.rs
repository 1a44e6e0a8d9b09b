//! Guidance provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the external guidance provider.
#[derive(Debug, Clone, Deserialize)]
pub struct GuidanceConfig {
    /// Gemini API key
    pub api_key: Option<String>,

    /// Model used for symptom suggestion
    #[serde(default = "default_suggestion_model")]
    pub suggestion_model: String,

    /// Model used for medication guidance
    #[serde(default = "default_guidance_model")]
    pub guidance_model: String,

    /// Base URL for the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GuidanceConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate guidance configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("GUIDANCE_API_KEY"));
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }

        if self.suggestion_model.is_empty() || self.guidance_model.is_empty() {
            return Err(ValidationError::EmptyModelName);
        }

        Ok(())
    }
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            suggestion_model: default_suggestion_model(),
            guidance_model: default_guidance_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_suggestion_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_guidance_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidance_config_defaults() {
        let config = GuidanceConfig::default();
        assert_eq!(config.suggestion_model, "gemini-3-flash-preview");
        assert_eq!(config.guidance_model, "gemini-3-pro-preview");
        assert_eq!(config.timeout_secs, 60);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_timeout_duration() {
        let config = GuidanceConfig {
            timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = GuidanceConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("GUIDANCE_API_KEY"))
        ));
    }

    #[test]
    fn test_validation_empty_api_key() {
        let config = GuidanceConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = GuidanceConfig {
            api_key: Some("key".to_string()),
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validation_bad_base_url() {
        let config = GuidanceConfig {
            api_key: Some("key".to_string()),
            base_url: "generativelanguage.googleapis.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = GuidanceConfig {
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
