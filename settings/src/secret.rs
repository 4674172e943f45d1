//! Credential wrapper that never prints its contents

use serde::{Serialize, Serializer};
use std::fmt;

/// Credentials this short or shorter are never partially shown
const MIN_PREVIEW_CHARS: usize = 16;

/// An API key or other credential.
///
/// `Debug`, `Display` and `Serialize` all emit the masked preview, so a
/// `Secret` can sit inside structs that get logged without leaking.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a credential. Empty strings count as "not configured".
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() { None } else { Some(Self(value)) }
    }

    /// Raw credential, for building request headers only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short preview safe for logs: the first and last four characters, or
    /// `***` when that would reveal half the credential or more.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() > MIN_PREVIEW_CHARS {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{head}...{tail}")
        } else {
            "***".to_string()
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", self.masked())
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.masked())
    }
}
