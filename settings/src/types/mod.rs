//! Core types shared between the settings layer and the prober

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// External providers the chatbot knows how to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    Groq,
    Cohere,
}

impl ProviderId {
    /// Human-facing name used in probe messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::Groq => "Groq",
            ProviderId::Cohere => "Cohere",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Groq => write!(f, "groq"),
            ProviderId::Cohere => write!(f, "cohere"),
        }
    }
}

impl std::str::FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(ProviderId::Groq),
            "cohere" => Ok(ProviderId::Cohere),
            _ => Err(format!("Unknown provider: {s}")),
        }
    }
}

/// The job a provider does for the chatbot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderRole {
    Llm,
    Embedding,
}

impl fmt::Display for ProviderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderRole::Llm => write!(f, "llm"),
            ProviderRole::Embedding => write!(f, "embedding"),
        }
    }
}

/// Result of one connectivity check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    pub success: bool,
    pub message: String,
}

impl ProbeOutcome {
    pub fn passed(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// Outcome of a full probe run, one entry per provider role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReportFields", into = "ReportFields")]
pub struct ProbeReport {
    entries: BTreeMap<ProviderRole, ProbeOutcome>,
}

/// Wire shape of a [`ProbeReport`]; both roles are required fields.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportFields {
    llm: ProbeOutcome,
    embedding: ProbeOutcome,
}

impl From<ReportFields> for ProbeReport {
    fn from(fields: ReportFields) -> Self {
        ProbeReport::new(fields.llm, fields.embedding)
    }
}

impl From<ProbeReport> for ReportFields {
    fn from(report: ProbeReport) -> Self {
        ReportFields {
            llm: report.llm().clone(),
            embedding: report.embedding().clone(),
        }
    }
}

impl ProbeReport {
    /// Build a report; both roles are always present.
    pub fn new(llm: ProbeOutcome, embedding: ProbeOutcome) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(ProviderRole::Llm, llm);
        entries.insert(ProviderRole::Embedding, embedding);
        Self { entries }
    }

    pub fn get(&self, role: ProviderRole) -> &ProbeOutcome {
        &self.entries[&role]
    }

    pub fn llm(&self) -> &ProbeOutcome {
        self.get(ProviderRole::Llm)
    }

    pub fn embedding(&self) -> &ProbeOutcome {
        self.get(ProviderRole::Embedding)
    }

    pub fn all_passed(&self) -> bool {
        self.entries.values().all(|outcome| outcome.success)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProviderRole, &ProbeOutcome)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (role, outcome)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mark = if outcome.success { "✅" } else { "❌" };
            write!(f, "{mark} {role}: {}", outcome.message)?;
        }
        Ok(())
    }
}
