use super::*;

#[test]
fn absent_block_uses_defaults() {
    assert_eq!(resolve(None), MotionConfig::default());
    assert_eq!(resolve(Some("  \n ")), MotionConfig::default());
}

#[test]
fn block_overrides_named_fields() {
    let cfg = resolve(Some(r#" {"loaderHoldMs": 800, "anchorOffsetPx": 120} "#));
    assert_eq!(cfg.loader_hold_ms, 800);
    assert!((cfg.anchor_offset_px - 120.0).abs() < f64::EPSILON);
    assert_eq!(cfg.form_revert_ms, MotionConfig::default().form_revert_ms);
}

#[test]
fn malformed_block_falls_back() {
    assert_eq!(resolve(Some("{loaderHoldMs: 800")), MotionConfig::default());
}

#[test]
fn invalid_value_falls_back_whole() {
    let cfg = resolve(Some(r#"{"loaderHoldMs": 800, "cursorDamping": 2.5}"#));
    assert_eq!(cfg, MotionConfig::default());
}

#[test]
fn negative_reveal_margin_falls_back() {
    let cfg = resolve(Some(r#"{"revealBottomMarginPx": -20}"#));
    assert_eq!(cfg.reveal_root_margin(), "0px 0px -60px 0px");
}
