use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tier tag attached to every condensation result.
pub const LAYER_TAG: &str = "Condensed Memory (L3)";

/// Condensed text used when no salient line survives, or the input is blank.
pub const FALLBACK_SUMMARY: &str = "No critical state changes detected in ephemeral context.";

/// Identifier of the deterministic algorithm.
pub const ENGINE_ID: &str = "ALG-DET-V1";

/// Status of a single trace event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceStatus {
    Info,
    Success,
    Error,
}

/// One processing-stage record. Timestamps serialize as epoch millis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceEvent {
    pub label: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub status: TraceStatus,
}

impl TraceEvent {
    pub fn new(label: impl Into<String>, timestamp: DateTime<Utc>, status: TraceStatus) -> Self {
        Self { label: label.into(), timestamp, status }
    }
}

/// Output of one `condense` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CondensedResult {
    pub condensed: String,
    pub entities: Vec<String>,
    /// Percentage of characters saved, 0..=100.
    pub savings: u8,
    pub trace: Vec<TraceEvent>,
    pub layer: String,
}

impl CondensedResult {
    /// True when the condensed text is the fallback sentence.
    pub fn is_fallback(&self) -> bool {
        self.condensed == FALLBACK_SUMMARY
    }

    /// The batch-summary fact stored alongside extracted entities.
    pub fn summary_assertion(&self) -> Option<SummaryAssertion> {
        if self.is_fallback() || self.condensed.is_empty() {
            return None;
        }
        Some(SummaryAssertion {
            subject: "Conversation Batch".into(),
            predicate: "summarized_as".into(),
            object: self.condensed.clone(),
            confidence: 1.0,
        })
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Subject/predicate/object fact derived from a condensed summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryAssertion {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    pub confidence: f64,
}

/// Coarse entity classification handed to downstream canonicalization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Artifact,
    Tool,
    Concept,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artifact => "artifact",
            Self::Tool => "tool",
            Self::Concept => "concept",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypedEntity {
    pub name: String,
    pub kind: EntityKind,
    pub confidence: f64,
}

/// Optional post-extraction bounding. The default keeps every entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityBounds {
    /// Entities shorter than this (in chars) are dropped, vocabulary terms excepted.
    #[serde(default)]
    pub min_length: usize,
    /// Drop entities containing code punctuation such as braces or `=`.
    #[serde(default)]
    pub reject_code_noise: bool,
}

impl EntityBounds {
    pub fn is_unbounded(&self) -> bool {
        self.min_length == 0 && !self.reject_code_noise
    }
}
