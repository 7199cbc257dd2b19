//! Deterministic L3 condenser: four single-pass stages, no learned models.
//!
//! Stages:
//! 1. Tokenizer: whitespace tokens and non-empty lines
//! 2. Entities: version/time/capitalized patterns plus technical vocabulary
//! 3. Salience: keep action-relevant lines, strip speaker labels
//! 4. Metrics: character savings and the ordered trace log

pub mod engine;
pub mod entities;
pub mod metrics;
pub mod salience;
pub mod tokenizer;
pub mod trace;

pub use engine::Condenser;
pub use entities::EntitySet;
pub use metrics::CompressionStats;
pub use trace::{Clock, SteppingClock, SystemClock, TraceLog};
