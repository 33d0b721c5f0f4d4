use super::*;

#[test]
fn loading_has_reached_nothing() {
    assert!(!ReadyState::Loading.has_reached(Phase::Ready));
    assert!(!ReadyState::Loading.has_reached(Phase::Load));
}

#[test]
fn interactive_has_reached_ready_only() {
    assert!(ReadyState::Interactive.has_reached(Phase::Ready));
    assert!(!ReadyState::Interactive.has_reached(Phase::Load));
}

#[test]
fn complete_has_reached_both() {
    assert!(ReadyState::Complete.has_reached(Phase::Ready));
    assert!(ReadyState::Complete.has_reached(Phase::Load));
}

#[test]
fn phase_event_names() {
    assert_eq!(Phase::Ready.event_name(), "DOMContentLoaded");
    assert_eq!(Phase::Load.event_name(), "load");
}
