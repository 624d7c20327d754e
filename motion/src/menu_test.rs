use super::*;

#[test]
fn toggle_opens_and_locks_scroll() {
    let mut m = MobileMenu::default();
    let v = m.toggle();
    assert!(v.open);
    assert_eq!(v.body_overflow, "hidden");
    let v = m.toggle();
    assert!(!v.open);
    assert_eq!(v.body_overflow, "");
}

#[test]
fn link_click_always_closes() {
    let mut m = MobileMenu::default();
    assert!(!m.close().open);
    m.toggle();
    assert!(m.is_open());
    assert_eq!(m.close(), MenuView { open: false, body_overflow: "" });
}
