//! Condenser: runs the four stages in order and packages the result.

use crate::metrics::CompressionStats;
use crate::trace::{Clock, SystemClock, TraceLog, LABEL_COMPRESSED, LABEL_INIT, LABEL_SCAN, LABEL_SCORE};
use crate::{entities, salience, tokenizer};
use condensate_core::{
    CondensedResult, EngineConfig, EntityBounds, Result, TypedEntity, Vocabulary, FALLBACK_SUMMARY, LAYER_TAG,
};
use std::sync::Arc;
use std::time::Duration;

/// The L3 condenser. Holds only immutable configuration, so one instance
/// can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Condenser {
    vocabulary: Vocabulary,
    bounds: EntityBounds,
    scan_delay: Duration,
    clock: Arc<dyn Clock>,
}

impl Condenser {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            bounds: EntityBounds::default(),
            scan_delay: Duration::ZERO,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Ok(Self::new(config.vocabulary()?)
            .with_bounds(config.bounds.clone())
            .with_scan_delay(config.scan_delay()))
    }

    /// Pause before the entity scan. Only trace timestamps are affected.
    pub fn with_scan_delay(mut self, delay: Duration) -> Self {
        self.scan_delay = delay;
        self
    }

    pub fn with_bounds(mut self, bounds: EntityBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn scan_delay(&self) -> Duration {
        self.scan_delay
    }

    /// Condense one block of conversational text.
    pub fn condense(&self, text: &str) -> CondensedResult {
        let started = self.clock.now();
        let mut trace = TraceLog::new(self.clock.as_ref());
        trace.info(LABEL_INIT);

        if text.trim().is_empty() {
            tracing::debug!("blank input, returning fallback");
            return CondensedResult {
                condensed: FALLBACK_SUMMARY.to_string(),
                entities: Vec::new(),
                savings: 0,
                trace: trace.into_events(),
                layer: LAYER_TAG.to_string(),
            };
        }

        let token_stats = tokenizer::stats(text);
        tracing::debug!(tokens = token_stats.tokens, lines = token_stats.lines, chars = token_stats.chars, "condensing");

        if !self.scan_delay.is_zero() {
            std::thread::sleep(self.scan_delay);
        }

        trace.info(LABEL_SCAN);
        let entities = entities::extract_traced(text, &self.vocabulary, &self.bounds, &mut trace);

        trace.info(LABEL_SCORE);
        let salient = salience::filter(text, &self.vocabulary);
        let condensed = salience::join(&salient);
        let stats = CompressionStats::measure(text, &condensed);
        trace.success(LABEL_COMPRESSED);

        let elapsed = (self.clock.now() - started).num_milliseconds().max(0);
        trace.info(format!("Total processing time: {elapsed}ms"));

        tracing::info!(
            entities = entities.len(),
            salient_lines = salient.len(),
            savings = stats.savings,
            elapsed_ms = elapsed,
            "condensation complete"
        );

        CondensedResult {
            condensed,
            entities,
            savings: stats.savings,
            trace: trace.into_events(),
            layer: LAYER_TAG.to_string(),
        }
    }

    /// Entity set alone, bounded per configuration, without a trace.
    pub fn extract_entities(&self, text: &str) -> Vec<String> {
        let mut set = entities::extract(text, &self.vocabulary);
        entities::bound(&mut set, &self.bounds, &self.vocabulary);
        set.into_vec()
    }

    /// Entities with a heuristic kind, for downstream canonicalization.
    pub fn typed_entities(&self, text: &str) -> Vec<TypedEntity> {
        entities::annotate(&self.extract_entities(text), &self.vocabulary)
    }
}

impl Default for Condenser {
    fn default() -> Self {
        Self::new(Vocabulary::builtin())
    }
}
