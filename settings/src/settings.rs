//! Typed application settings resolved from the environment
//!
//! ## Configuration Sources
//! Values are read from:
//! 1. System environment variables
//! 2. A `.env` file in the current directory or a parent directory (if present)
//!
//! Environment variables take precedence over `.env` file values. Every field
//! ends up with a value: either the one supplied or the default listed in
//! [`crate::defaults`]. Numeric values are parsed exactly once, here.

use serde::Serialize;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::defaults::*;
use crate::errors::{ConfigError, ConfigResult};
use crate::secret::Secret;

/// Resolved configuration for the chatbot and its providers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    // Groq (LLM)
    pub groq_api_key: Option<Secret>,
    pub groq_base_url: Option<String>,

    // Cohere (embeddings)
    pub cohere_api_key: Option<Secret>,

    // Models
    pub llm_model: String,
    pub embedding_model: String,

    // Processing parameters
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub max_tokens: u32,
    pub temperature: f64,

    // Paths
    pub db_path: PathBuf,
    pub vector_store_path: PathBuf,

    // Provider selection
    pub llm_provider: String,
    pub embedding_provider: String,
}

impl Settings {
    /// Resolve settings through an arbitrary key lookup.
    ///
    /// `lookup` returns `None` for unset keys. Secrets and the base URL treat
    /// an empty value as unset; all other strings are taken verbatim.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            groq_api_key: lookup(GROQ_API_KEY).and_then(Secret::new),
            groq_base_url: lookup(GROQ_BASE_URL).filter(|url| !url.is_empty()),
            cohere_api_key: lookup(COHERE_API_KEY).and_then(Secret::new),
            llm_model: text(LLM_MODEL, DEFAULT_LLM_MODEL),
            embedding_model: text(EMBEDDING_MODEL, DEFAULT_EMBEDDING_MODEL),
            chunk_size: parse_number(CHUNK_SIZE, &text(CHUNK_SIZE, DEFAULT_CHUNK_SIZE))?,
            chunk_overlap: parse_number(CHUNK_OVERLAP, &text(CHUNK_OVERLAP, DEFAULT_CHUNK_OVERLAP))?,
            max_tokens: parse_number(MAX_TOKENS, &text(MAX_TOKENS, DEFAULT_MAX_TOKENS))?,
            temperature: parse_number(TEMPERATURE, &text(TEMPERATURE, DEFAULT_TEMPERATURE))?,
            db_path: PathBuf::from(text(DB_PATH, DEFAULT_DB_PATH)),
            vector_store_path: PathBuf::from(text(VECTOR_STORE_PATH, DEFAULT_VECTOR_STORE_PATH)),
            llm_provider: text(LLM_PROVIDER, DEFAULT_LLM_PROVIDER),
            embedding_provider: text(EMBEDDING_PROVIDER, DEFAULT_EMBEDDING_PROVIDER),
        })
    }

    /// Resolve settings from the process environment only. A recognized
    /// variable holding non-UTF-8 bytes is an error, not "unset".
    pub fn from_env() -> ConfigResult<Self> {
        let env = read_process_env()?;
        Self::from_lookup(|key| env.get(key).cloned())
    }

    /// Resolve settings from a specific dotenv file overlaid by the process
    /// environment. The process environment is not modified.
    pub fn from_env_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let env = read_process_env()?;
        Self::from_env_file_with(path, |key| env.get(key).cloned())
    }

    /// Resolve settings from a dotenv file, with `overlay` taking precedence
    /// over the file for every key it returns a value for.
    pub fn from_env_file_with<F>(path: impl AsRef<Path>, overlay: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let file_values = read_env_file(path)?;
        debug!("Read {} entries from {}", file_values.len(), path.display());

        Self::from_lookup(|key| overlay(key).or_else(|| file_values.get(key).cloned()))
    }

    /// Load `.env` from the current or a parent directory when one exists,
    /// then resolve from the environment.
    pub fn load() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
            Err(e) => {
                return Err(ConfigError::EnvFile {
                    path: ".env".to_string(),
                    message: e.to_string(),
                });
            }
        }
        Self::from_env()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_unset<T: fmt::Display>(value: &Option<T>) -> String {
            value.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "<unset>".to_string())
        }

        writeln!(f, "{GROQ_API_KEY}={}", or_unset(&self.groq_api_key))?;
        writeln!(f, "{GROQ_BASE_URL}={}", or_unset(&self.groq_base_url))?;
        writeln!(f, "{COHERE_API_KEY}={}", or_unset(&self.cohere_api_key))?;
        writeln!(f, "{LLM_MODEL}={}", self.llm_model)?;
        writeln!(f, "{EMBEDDING_MODEL}={}", self.embedding_model)?;
        writeln!(f, "{CHUNK_SIZE}={}", self.chunk_size)?;
        writeln!(f, "{CHUNK_OVERLAP}={}", self.chunk_overlap)?;
        writeln!(f, "{MAX_TOKENS}={}", self.max_tokens)?;
        writeln!(f, "{TEMPERATURE}={}", self.temperature)?;
        writeln!(f, "{DB_PATH}={}", self.db_path.display())?;
        writeln!(f, "{VECTOR_STORE_PATH}={}", self.vector_store_path.display())?;
        writeln!(f, "{LLM_PROVIDER}={}", self.llm_provider)?;
        write!(f, "{EMBEDDING_PROVIDER}={}", self.embedding_provider)
    }
}

/// Parse a numeric setting. Surrounding whitespace is ignored; anything else
/// that does not parse is rejected rather than replaced by the default.
fn parse_number<T>(key: &str, raw: &str) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Snapshot the recognized variables from the process environment.
fn read_process_env() -> ConfigResult<HashMap<&'static str, String>> {
    let mut values = HashMap::new();
    for &key in RECOGNIZED_KEYS {
        if let Some(value) = decode_env_value(key, std::env::var_os(key))? {
            values.insert(key, value);
        }
    }
    Ok(values)
}

fn decode_env_value(key: &str, raw: Option<OsString>) -> ConfigResult<Option<String>> {
    raw.map(|value| {
        value.into_string().map_err(|raw| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string_lossy().into_owned(),
            reason: "not valid UTF-8".to_string(),
        })
    })
    .transpose()
}

fn read_env_file(path: &Path) -> ConfigResult<HashMap<String, String>> {
    let env_file_error = |message: String| ConfigError::EnvFile {
        path: path.display().to_string(),
        message,
    };

    dotenvy::from_path_iter(path)
        .map_err(|e| env_file_error(e.to_string()))?
        .map(|item| item.map_err(|e| env_file_error(e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(pairs: &[(&str, &str)]) -> ConfigResult<Settings> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = resolve(&[]).unwrap();

        assert_eq!(settings.groq_api_key, None);
        assert_eq!(settings.groq_base_url, None);
        assert_eq!(settings.cohere_api_key, None);
        assert_eq!(settings.llm_model, "llama-3.3-70b-versatile");
        assert_eq!(settings.embedding_model, "embed-multilingual-v3.0");
        assert_eq!(settings.chunk_size, 1000);
        assert_eq!(settings.chunk_overlap, 200);
        assert_eq!(settings.max_tokens, 4000);
        assert_eq!(settings.temperature, 0.7_f64);
        assert_eq!(settings.db_path, PathBuf::from("chatbot.db"));
        assert_eq!(settings.vector_store_path, PathBuf::from("vector_store"));
        assert_eq!(settings.llm_provider, "groq");
        assert_eq!(settings.embedding_provider, "cohere");
    }

    #[test]
    fn test_set_values_are_reflected() {
        let settings = resolve(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_BASE_URL", "http://localhost:9000/v1"),
            ("COHERE_API_KEY", "co_test"),
            ("LLM_MODEL", "llama-3.1-8b-instant"),
            ("EMBEDDING_MODEL", "embed-english-v3.0"),
            ("CHUNK_SIZE", "500"),
            ("CHUNK_OVERLAP", "50"),
            ("MAX_TOKENS", "1024"),
            ("TEMPERATURE", "0.2"),
            ("DB_PATH", "/var/lib/chatbot/state.db"),
            ("VECTOR_STORE_PATH", "/var/lib/chatbot/vectors"),
            ("LLM_PROVIDER", "custom-llm"),
            ("EMBEDDING_PROVIDER", "custom-embed"),
        ])
        .unwrap();

        assert_eq!(settings.groq_api_key.as_ref().map(Secret::expose), Some("gsk_test"));
        assert_eq!(settings.groq_base_url.as_deref(), Some("http://localhost:9000/v1"));
        assert_eq!(settings.cohere_api_key.as_ref().map(Secret::expose), Some("co_test"));
        assert_eq!(settings.llm_model, "llama-3.1-8b-instant");
        assert_eq!(settings.embedding_model, "embed-english-v3.0");
        assert_eq!(settings.chunk_size, 500);
        assert_eq!(settings.chunk_overlap, 50);
        assert_eq!(settings.max_tokens, 1024);
        assert_eq!(settings.temperature, 0.2_f64);
        assert_eq!(settings.db_path, PathBuf::from("/var/lib/chatbot/state.db"));
        assert_eq!(settings.vector_store_path, PathBuf::from("/var/lib/chatbot/vectors"));
        assert_eq!(settings.llm_provider, "custom-llm");
        assert_eq!(settings.embedding_provider, "custom-embed");
    }

    #[test]
    fn test_empty_secrets_and_base_url_are_absent() {
        let settings = resolve(&[("GROQ_API_KEY", ""), ("COHERE_API_KEY", ""), ("GROQ_BASE_URL", "")]).unwrap();

        assert!(settings.groq_api_key.is_none());
        assert!(settings.cohere_api_key.is_none());
        assert!(settings.groq_base_url.is_none());
    }

    #[test]
    fn test_empty_model_is_kept_verbatim() {
        let settings = resolve(&[("LLM_MODEL", "")]).unwrap();
        assert_eq!(settings.llm_model, "");
    }

    #[test]
    fn test_numeric_whitespace_is_trimmed() {
        let settings = resolve(&[("CHUNK_SIZE", " 750 "), ("TEMPERATURE", "1\n")]).unwrap();
        assert_eq!(settings.chunk_size, 750);
        assert_eq!(settings.temperature, 1.0);
    }

    #[test]
    fn test_malformed_integer_is_fatal() {
        let err = resolve(&[("CHUNK_SIZE", "lots")]).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "CHUNK_SIZE");
                assert_eq!(value, "lots");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_float_is_fatal() {
        let err = resolve(&[("TEMPERATURE", "warm")]).unwrap_err();
        assert!(err.to_string().contains("TEMPERATURE"));
        assert!(err.to_string().contains("warm"));
    }

    #[test]
    fn test_negative_chunk_size_rejected() {
        assert!(resolve(&[("CHUNK_OVERLAP", "-1")]).is_err());
    }

    #[test]
    fn test_empty_numeric_is_fatal() {
        assert!(resolve(&[("MAX_TOKENS", "")]).is_err());
    }

    #[test]
    fn test_decode_env_value_passes_text_through() {
        assert_eq!(decode_env_value(CHUNK_SIZE, None).unwrap(), None);
        assert_eq!(
            decode_env_value(CHUNK_SIZE, Some(OsString::from("500"))).unwrap(),
            Some("500".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_is_invalid_not_unset() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"5\xff0".to_vec());
        let err = decode_env_value(CHUNK_SIZE, Some(raw)).unwrap_err();

        match err {
            ConfigError::InvalidValue { key, value, reason } => {
                assert_eq!(key, "CHUNK_SIZE");
                assert_eq!(value, "5\u{FFFD}0");
                assert_eq!(reason, "not valid UTF-8");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let pairs = [("GROQ_API_KEY", "k1"), ("CHUNK_SIZE", "500")];
        assert_eq!(resolve(&pairs).unwrap(), resolve(&pairs).unwrap());
    }

    #[test]
    fn test_display_masks_secrets() {
        let settings = resolve(&[("GROQ_API_KEY", "gsk_supersecretvalue1234")]).unwrap();
        let rendered = settings.to_string();

        assert!(rendered.contains("GROQ_API_KEY=gsk_...1234"));
        assert!(rendered.contains("COHERE_API_KEY=<unset>"));
        assert!(!rendered.contains("supersecret"));
        assert_eq!(rendered.lines().count(), RECOGNIZED_KEYS.len());
    }

    #[test]
    fn test_debug_masks_secrets() {
        let settings = resolve(&[("COHERE_API_KEY", "co_supersecretvalue5678")]).unwrap();
        assert!(!format!("{settings:?}").contains("supersecret"));
    }
}
