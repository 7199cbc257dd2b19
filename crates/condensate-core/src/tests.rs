use crate::*;
use chrono::{TimeZone, Utc};

// ========== Vocabulary ==========

#[test]
fn test_builtin_stop_words() {
    let v = Vocabulary::builtin();
    assert!(v.is_stop_word("the"));
    assert!(v.is_stop_word("The"));
    assert!(v.is_stop_word("OKAY"));
    assert!(!v.is_stop_word("friday"));
}

#[test]
fn test_builtin_tech_terms_order() {
    let v = Vocabulary::builtin();
    assert_eq!(v.tech_terms()[0], "v2.0");
    assert_eq!(v.tech_terms().last().map(String::as_str), Some("latency"));
    assert!(v.is_tech_term("api"));
    assert!(!v.is_tech_term("API"));
}

#[test]
fn test_builtin_markers() {
    let v = Vocabulary::builtin();
    assert_eq!(
        v.salience_markers(),
        &["need to", "prioritize", "focus on", "meeting", "bottleneck"]
    );
}

#[test]
fn test_builtin_validates() {
    assert!(Vocabulary::builtin().validate().is_ok());
}

#[test]
fn test_extra_terms_appended_once() {
    let v = Vocabulary::builtin().with_tech_terms(vec!["kafka".to_string(), "api".to_string()]);
    assert_eq!(v.tech_terms().last().map(String::as_str), Some("kafka"));
    assert_eq!(v.tech_terms().iter().filter(|t| *t == "api").count(), 1);
}

#[test]
fn test_extra_stop_words_lowercased() {
    let v = Vocabulary::builtin().with_stop_words(vec!["  Um ".to_string()]);
    assert!(v.is_stop_word("um"));
    assert!(v.is_stop_word("Um"));
}

#[test]
fn test_extra_terms_and_markers_trimmed() {
    let v = Vocabulary::builtin()
        .with_tech_terms(vec![" kafka ".to_string(), "api\t".to_string()])
        .with_salience_markers(vec![" deadline ".to_string()]);
    assert!(v.validate().is_ok());
    assert!(v.is_tech_term("kafka"));
    assert_eq!(v.tech_terms().iter().filter(|t| *t == "api").count(), 1);
    assert_eq!(v.salience_markers().last().map(String::as_str), Some("deadline"));
}

#[test]
fn test_uppercase_term_rejected() {
    let v = Vocabulary::builtin().with_tech_terms(vec!["Kafka".to_string()]);
    assert!(matches!(v.validate(), Err(CondensateError::InvalidVocabulary(_))));
}

#[test]
fn test_blank_marker_rejected() {
    let v = Vocabulary::builtin().with_salience_markers(vec!["   ".to_string()]);
    assert!(v.validate().is_err());
}

#[test]
fn test_blank_stop_word_rejected() {
    let v = Vocabulary::builtin().with_stop_words(vec![" ".to_string()]);
    assert!(v.validate().is_err());
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let c = CondensateConfig::default();
    assert_eq!(c.engine.scan_delay_ms, 0);
    assert!(c.engine.bounds.is_unbounded());
    assert_eq!(c.server.bind_addr(), "127.0.0.1:8088");
}

#[test]
fn test_config_empty_toml() {
    let c = CondensateConfig::from_toml_str("").unwrap();
    assert_eq!(c.server.port, 8088);
    assert_eq!(c.engine.vocabulary().unwrap(), Vocabulary::builtin());
}

#[test]
fn test_config_full_toml() {
    let toml = r#"
[engine]
scan_delay_ms = 600

[engine.vocabulary]
extra_stop_words = ["um"]
extra_tech_terms = ["kafka"]
extra_salience_markers = ["deadline"]

[engine.bounds]
min_length = 3
reject_code_noise = true

[server]
host = "0.0.0.0"
port = 9000
"#;
    let c = CondensateConfig::from_toml_str(toml).unwrap();
    assert_eq!(c.engine.scan_delay().as_millis(), 600);
    assert_eq!(c.engine.bounds.min_length, 3);
    assert!(c.engine.bounds.reject_code_noise);
    assert_eq!(c.server.bind_addr(), "0.0.0.0:9000");
    let v = c.engine.vocabulary().unwrap();
    assert!(v.is_stop_word("um"));
    assert!(v.is_tech_term("kafka"));
    assert!(v.salience_markers().contains(&"deadline".to_string()));
}

#[test]
fn test_config_invalid_vocabulary() {
    let toml = "[engine.vocabulary]\nextra_salience_markers = [\"Deadline\"]\n";
    let err = CondensateConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, CondensateError::InvalidVocabulary(_)));
}

#[test]
fn test_config_bad_toml() {
    let err = CondensateConfig::from_toml_str("[engine\nscan_delay_ms = ").unwrap_err();
    assert!(matches!(err, CondensateError::Toml(_)));
}

#[test]
fn test_config_load_missing_file() {
    let err = CondensateConfig::load("/nonexistent/condensate/config.toml").unwrap_err();
    assert!(matches!(err, CondensateError::Config(_)));
}

#[test]
fn test_config_load_file() {
    let path = std::env::temp_dir().join(format!("condensate-test-{}.toml", std::process::id()));
    std::fs::write(&path, "[server]\nport = 7001\n").unwrap();
    let c = CondensateConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(c.server.port, 7001);
}

#[test]
fn test_default_paths_end_with_local_file() {
    let paths = CondensateConfig::default_paths();
    assert_eq!(paths.last().unwrap(), &std::path::PathBuf::from("condensate.toml"));
}

// ========== Result types ==========

fn sample_result(condensed: &str) -> CondensedResult {
    CondensedResult {
        condensed: condensed.into(),
        entities: vec!["v2.0".into(), "api".into()],
        savings: 42,
        trace: vec![TraceEvent::new(
            "Initializing Memory Tiers...",
            Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
            TraceStatus::Info,
        )],
        layer: LAYER_TAG.into(),
    }
}

#[test]
fn test_result_json_shape() {
    let json = serde_json::to_value(sample_result("We need to ship.")).unwrap();
    assert_eq!(json["condensed"], "We need to ship.");
    assert_eq!(json["savings"], 42);
    assert_eq!(json["layer"], "Condensed Memory (L3)");
    assert_eq!(json["entities"][1], "api");
    assert_eq!(json["trace"][0]["status"], "info");
    assert_eq!(json["trace"][0]["timestamp"], 1_700_000_000_123i64);
}

#[test]
fn test_trace_event_deserialize() {
    let ev: TraceEvent = serde_json::from_str(
        r#"{"label":"Delta compression complete","timestamp":1700000000000,"status":"success"}"#,
    )
    .unwrap();
    assert_eq!(ev.status, TraceStatus::Success);
    assert_eq!(ev.timestamp.timestamp_millis(), 1_700_000_000_000);
}

#[test]
fn test_summary_assertion() {
    let a = sample_result("We need to ship.").summary_assertion().unwrap();
    assert_eq!(a.subject, "Conversation Batch");
    assert_eq!(a.predicate, "summarized_as");
    assert_eq!(a.object, "We need to ship.");
    assert_eq!(a.confidence, 1.0);
}

#[test]
fn test_summary_assertion_fallback() {
    let r = sample_result(FALLBACK_SUMMARY);
    assert!(r.is_fallback());
    assert!(r.summary_assertion().is_none());
}

#[test]
fn test_entity_kind_serde() {
    assert_eq!(serde_json::to_value(EntityKind::Artifact).unwrap(), "artifact");
    assert_eq!(EntityKind::Tool.as_str(), "tool");
}

#[test]
fn test_to_json_pretty() {
    let s = sample_result("x").to_json_pretty().unwrap();
    assert!(s.contains("\"layer\": \"Condensed Memory (L3)\""));
}
