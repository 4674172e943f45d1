//! Required-setting checks run before the configuration is trusted

use tracing::debug;

use crate::defaults::{COHERE_API_KEY, GROQ_API_KEY};
use crate::errors::{ConfigError, ConfigResult};
use crate::settings::Settings;

impl Settings {
    /// Every problem with the required settings. Empty means valid.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.groq_api_key.is_none() {
            errors.push(format!("{GROQ_API_KEY} is required. Please set it in your .env file."));
        }

        if self.cohere_api_key.is_none() {
            errors.push(format!(
                "{COHERE_API_KEY} is required for embeddings. Please set it in your .env file."
            ));
        }

        errors
    }

    /// Fail with all missing-setting messages at once, or succeed silently.
    pub fn validate(&self) -> ConfigResult<()> {
        let messages = self.validation_errors();
        if messages.is_empty() {
            debug!("Configuration validated");
            Ok(())
        } else {
            debug!("Configuration invalid: {} problem(s)", messages.len());
            Err(ConfigError::MissingRequired { messages })
        }
    }
}
