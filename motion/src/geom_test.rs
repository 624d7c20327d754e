#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn rect_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(r.center(), Point::new(60.0, 40.0));
}

#[test]
fn normalized_corners_span_half_range() {
    let r = Rect::new(0.0, 0.0, 200.0, 100.0);
    let tl = r.normalized(Point::new(0.0, 0.0));
    let br = r.normalized(Point::new(200.0, 100.0));
    assert!(approx_eq(tl.x, -0.5) && approx_eq(tl.y, -0.5));
    assert!(approx_eq(br.x, 0.5) && approx_eq(br.y, 0.5));
}

#[test]
fn normalized_center_is_zero() {
    let r = Rect::new(50.0, 50.0, 80.0, 60.0);
    let p = r.normalized(r.center());
    assert!(approx_eq(p.x, 0.0));
    assert!(approx_eq(p.y, 0.0));
}

#[test]
fn normalized_degenerate_rect_is_zero() {
    let r = Rect::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(r.normalized(Point::new(99.0, -4.0)), Point::new(0.0, 0.0));
}

#[test]
fn offset_from_center_in_pixels() {
    let r = Rect::new(100.0, 100.0, 40.0, 20.0);
    assert_eq!(r.offset_from_center(Point::new(130.0, 100.0)), Point::new(10.0, -10.0));
}

#[test]
fn css_px_formats_pixels() {
    assert_eq!(css_px(12.5), "12.5px");
    assert_eq!(css_px(0.0), "0px");
}
