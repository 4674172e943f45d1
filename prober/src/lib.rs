//! Provider connectivity prober for the chatbot
//!
//! Builds Groq (LLM) and Cohere (embedding) clients from resolved
//! [`settings::Settings`] and checks each with a single trivial call.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export main types
pub use crate::core::{Command, probe, run_command};
pub use error::{ProberError, ProberResult, ProviderError};
pub use services::{CohereEmbeddings, GroqClient, RealClientFactory};
pub use traits::*;
