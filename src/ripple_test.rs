use super::*;

fn button() -> Rect {
    Rect { left: 100.0, top: 40.0, width: 120.0, height: 48.0 }
}

#[test]
fn ripple_size_is_longer_side() {
    let geo = RippleGeometry::compute(button(), 160.0, 64.0);
    assert!((geo.size - 120.0).abs() < f64::EPSILON);

    let tall = Rect { height: 200.0, ..button() };
    assert!((RippleGeometry::compute(tall, 0.0, 0.0).size - 200.0).abs() < f64::EPSILON);
}

#[test]
fn ripple_is_centered_on_click_point() {
    let geo = RippleGeometry::compute(button(), 160.0, 64.0);
    // 160 - 100 - 60
    assert!(geo.left.abs() < f64::EPSILON);
    // 64 - 40 - 60
    assert!((geo.top + 36.0).abs() < f64::EPSILON);
}

#[test]
fn styles_are_pixel_values() {
    let geo = RippleGeometry::compute(button(), 160.0, 64.0);
    let styles = geo.styles();
    assert_eq!(styles[0], ("width", "120px".to_owned()));
    assert_eq!(styles[1], ("height", "120px".to_owned()));
    assert_eq!(styles[2], ("left", "0px".to_owned()));
    assert_eq!(styles[3], ("top", "-36px".to_owned()));
}

#[test]
fn fractional_sizes_keep_their_fraction() {
    let geo = RippleGeometry::compute(Rect { width: 50.5, ..Rect::default() }, 0.0, 0.0);
    assert_eq!(geo.styles()[0].1, "50.5px");
}
