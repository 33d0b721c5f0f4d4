use super::*;

fn opened() -> MenuState {
    let mut menu = MenuState::default();
    menu.toggle();
    menu
}

#[test]
fn starts_closed() {
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
    assert!(menu.toggle());
}

#[test]
fn link_activation_closes() {
    let mut menu = opened();
    assert!(!menu.close());
    assert!(!menu.close());
}

#[test]
fn outside_pointer_always_closes() {
    let mut menu = opened();
    assert!(!menu.pointer(false, false));

    let mut closed = MenuState::default();
    assert!(!closed.pointer(false, false));
}

#[test]
fn pointer_inside_menu_keeps_state() {
    let mut menu = opened();
    assert!(menu.pointer(true, false));
    assert!(menu.is_open());
}

#[test]
fn pointer_on_toggle_keeps_state() {
    let mut menu = opened();
    assert!(menu.pointer(false, true));

    let mut closed = MenuState::default();
    assert!(!closed.pointer(false, true));
}

#[test]
fn toggle_click_then_bubbled_document_click_stays_open() {
    // The toggle's own click bubbles to the document listener.
    let mut menu = MenuState::default();
    menu.toggle();
    menu.pointer(false, true);
    assert!(menu.is_open());
}
