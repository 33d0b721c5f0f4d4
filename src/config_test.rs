#![allow(clippy::float_cmp)]

use super::*;
use crate::tabs::Lang;

#[test]
fn defaults_match_shipped_page() {
    let config = SiteConfig::default();
    assert_eq!(config.namespace, "shenwenAI");
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.theme.transition_ms, 300);
    assert_eq!(config.markup.theme_toggle_id, "themeToggle");
    assert_eq!(config.markup.anchor_selector, r##"a[href^="#"]"##);
    assert_eq!(config.scroll.header_offset, 80.0);
    assert_eq!(config.scroll.shadow_threshold, 10.0);
    assert_eq!(config.effects.copy_feedback_ms, 2000);
    assert_eq!(config.typewriter.phrases.len(), 5);
    assert_eq!(config.typewriter.start_delay_ms, 500);
}

#[test]
fn config_script_id_is_fixed() {
    assert_eq!(crate::consts::CONFIG_SCRIPT_ID, "site-config");
    let config = SiteConfig::from_json(r#"{"markup": {"config_script_id": "other"}}"#).unwrap();
    assert_eq!(config.markup, Markup::default());
}

#[test]
fn empty_json_yields_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"scroll": {"header_offset": 64}, "namespace": "site"}"#).unwrap();
    assert_eq!(config.scroll.header_offset, 64.0);
    assert_eq!(config.scroll.shadow_threshold, 10.0);
    assert_eq!(config.namespace, "site");
    assert_eq!(config.markup, Markup::default());
}

#[test]
fn phrases_and_samples_can_be_overridden() {
    let config = SiteConfig::from_json(
        r#"{"typewriter": {"phrases": ["A", "BB"]}, "code_samples": {"curl": "curl example.com"}}"#,
    )
    .unwrap();
    assert_eq!(config.typewriter.phrases, vec!["A".to_owned(), "BB".to_owned()]);
    assert_eq!(config.typewriter.type_ms, 100);
    assert_eq!(config.code_samples.get("curl"), Some("curl example.com"));
    let defaults = CodeSamples::default();
    assert_eq!(config.code_samples.get("python"), defaults.get("python"));
    assert_eq!(config.code_samples.lang(Lang::Js), defaults.lang(Lang::Js));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = SiteConfig::from_json("{\"scroll\": 3").unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    let err = SiteConfig::from_json(r#"{"theme": {"transition_ms": "slow"}}"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn log_level_parses_known_names() {
    let mut config = SiteConfig::default();
    assert_eq!(config.log_level(), log::Level::Info);
    config.log_level = "debug".into();
    assert_eq!(config.log_level(), log::Level::Debug);
    config.log_level = "chatty".into();
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn typewriter_timing_converts_millis() {
    let timing = TypewriterConfig::default().timing();
    assert_eq!(timing.type_delay, Duration::from_millis(100));
    assert_eq!(timing.delete_delay, Duration::from_millis(50));
    assert_eq!(timing.pause, Duration::from_millis(2000));
}
