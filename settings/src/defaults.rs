//! Environment variable names and their fallback values.
//!
//! Numeric defaults are kept as strings and go through the same parser as
//! values read from the environment, so a default can never disagree with
//! what an operator would get by setting the variable explicitly.

// --- Provider secrets (no default) ---
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const GROQ_BASE_URL: &str = "GROQ_BASE_URL";
pub const COHERE_API_KEY: &str = "COHERE_API_KEY";

// --- Models ---
pub const LLM_MODEL: &str = "LLM_MODEL";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";
pub const EMBEDDING_MODEL: &str = "EMBEDDING_MODEL";
pub const DEFAULT_EMBEDDING_MODEL: &str = "embed-multilingual-v3.0";

// --- Processing ---
pub const CHUNK_SIZE: &str = "CHUNK_SIZE";
pub const DEFAULT_CHUNK_SIZE: &str = "1000";
pub const CHUNK_OVERLAP: &str = "CHUNK_OVERLAP";
pub const DEFAULT_CHUNK_OVERLAP: &str = "200";
pub const MAX_TOKENS: &str = "MAX_TOKENS";
pub const DEFAULT_MAX_TOKENS: &str = "4000";
pub const TEMPERATURE: &str = "TEMPERATURE";
pub const DEFAULT_TEMPERATURE: &str = "0.7";

// --- Paths ---
pub const DB_PATH: &str = "DB_PATH";
pub const DEFAULT_DB_PATH: &str = "chatbot.db";
pub const VECTOR_STORE_PATH: &str = "VECTOR_STORE_PATH";
pub const DEFAULT_VECTOR_STORE_PATH: &str = "vector_store";

// --- Provider selection ---
pub const LLM_PROVIDER: &str = "LLM_PROVIDER";
pub const DEFAULT_LLM_PROVIDER: &str = "groq";
pub const EMBEDDING_PROVIDER: &str = "EMBEDDING_PROVIDER";
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "cohere";

/// Every variable the resolver reads, in declaration order.
pub const RECOGNIZED_KEYS: &[&str] = &[
    GROQ_API_KEY,
    GROQ_BASE_URL,
    COHERE_API_KEY,
    LLM_MODEL,
    EMBEDDING_MODEL,
    CHUNK_SIZE,
    CHUNK_OVERLAP,
    MAX_TOKENS,
    TEMPERATURE,
    DB_PATH,
    VECTOR_STORE_PATH,
    LLM_PROVIDER,
    EMBEDDING_PROVIDER,
];
