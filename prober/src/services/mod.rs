//! Provider client implementations

pub mod client_factory;
pub mod cohere_client;
pub mod groq_client;
pub mod http;

#[cfg(test)]
pub mod tests;

pub use client_factory::*;
pub use cohere_client::*;
pub use groq_client::*;
