//! Prober core logic

pub mod cli;
pub mod probe;

pub use cli::{Command, run_command};
pub use probe::{PROBE_INPUT, probe, probe_embedding, probe_llm};
