use super::*;

#[test]
fn unknown_theme_names_the_value() {
    let err = SiteError::UnknownTheme("sepia".into());
    assert_eq!(err.to_string(), "unknown theme: sepia");
}

#[test]
fn config_error_wraps_serde_json() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SiteError::from(parse);
    assert!(matches!(err, SiteError::Config(_)));
    assert!(err.to_string().starts_with("invalid site config:"));
}

#[test]
fn unit_variants_have_messages() {
    assert_eq!(SiteError::NoWindow.to_string(), "browser window is unavailable");
    assert_eq!(SiteError::NoDocument.to_string(), "document is unavailable");
    assert_eq!(SiteError::EmptyPhrases.to_string(), "typewriter needs at least one phrase");
    assert_eq!(SiteError::ClipboardUnavailable.to_string(), "clipboard api unavailable");
}
