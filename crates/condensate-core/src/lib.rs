//! Shared types, vocabulary and configuration for the Condensate L3 condenser.

pub mod config;
pub mod error;
pub mod types;
pub mod vocabulary;

pub use config::{CondensateConfig, EngineConfig, ServerConfig, VocabularyConfig};
pub use error::{CondensateError, Result};
pub use types::*;
pub use vocabulary::Vocabulary;

#[cfg(test)]
mod tests;
