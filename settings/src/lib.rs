//! Settings for the chatbot and its providers
//!
//! Resolves the environment (plus an optional `.env` file) into a typed
//! [`Settings`] value, checks the required secrets, and holds the types the
//! prober reports with. Consumers receive `Settings` explicitly; nothing here
//! is global.

pub mod defaults;
pub mod errors;
pub mod logging;
pub mod secret;
pub mod settings;
pub mod types;
pub mod validation;

pub use errors::*;
pub use secret::Secret;
pub use settings::Settings;
pub use types::*;
