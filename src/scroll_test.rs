#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Anchors
// =============================================================

#[test]
fn fragment_links_resolve_to_selector() {
    assert_eq!(anchor_selector("#pricing"), Some("#pricing"));
    assert_eq!(anchor_selector("#faq-3"), Some("#faq-3"));
}

#[test]
fn bare_hash_passes_through() {
    assert_eq!(anchor_selector("#"), None);
}

#[test]
fn non_fragment_links_pass_through() {
    assert_eq!(anchor_selector(""), None);
    assert_eq!(anchor_selector("/docs#intro"), None);
    assert_eq!(anchor_selector("https://example.com/#top"), None);
}

#[test]
fn existing_target_is_intercepted() {
    assert_eq!(AnchorAction::for_click("#pricing", true), AnchorAction::Intercept);
}

#[test]
fn missing_target_keeps_default_navigation() {
    assert_eq!(AnchorAction::for_click("#pricing", false), AnchorAction::PassThrough);
}

#[test]
fn bare_hash_is_never_intercepted() {
    assert_eq!(AnchorAction::for_click("#", true), AnchorAction::PassThrough);
    assert_eq!(AnchorAction::for_click("#", false), AnchorAction::PassThrough);
}

#[test]
fn non_fragment_href_is_never_intercepted() {
    assert_eq!(AnchorAction::for_click("/docs#intro", true), AnchorAction::PassThrough);
}

#[test]
fn scroll_target_subtracts_header_offset() {
    assert_eq!(scroll_target(400.0, 1200.0, 80.0), 1520.0);
    assert_eq!(scroll_target(-300.0, 1000.0, 80.0), 620.0);
    assert_eq!(scroll_target(0.0, 0.0, 80.0), -80.0);
}

// =============================================================
// Header shadow
// =============================================================

#[test]
fn shadow_only_past_threshold() {
    assert_eq!(header_shadow(0.0, 10.0), "none");
    assert_eq!(header_shadow(10.0, 10.0), "none");
    assert_eq!(header_shadow(10.5, 10.0), "0 4px 6px -1px rgb(0 0 0 / 0.1)");
    assert_eq!(header_shadow(900.0, 10.0), "0 4px 6px -1px rgb(0 0 0 / 0.1)");
}

#[test]
fn frame_gate_coalesces_requests() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.request());
    assert!(gate.is_pending());
    gate.complete();
    assert!(!gate.is_pending());
    assert!(gate.request());
}

#[test]
fn burst_of_scrolls_schedules_one_frame() {
    let mut gate = FrameGate::default();
    let scheduled = (0..50).filter(|_| gate.request()).count();
    assert_eq!(scheduled, 1);
}
