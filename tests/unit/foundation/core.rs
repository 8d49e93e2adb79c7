use super::*;

#[test]
fn square_canvas_rejects_zero_and_oversize() {
    assert!(Canvas::square(0).is_err());
    assert!(Canvas::square(70_000).is_err());

    let c = Canvas::square(800).unwrap();
    assert_eq!((c.width, c.height), (800, 800));
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 800.0, 800.0));
}

#[test]
fn black_with_opacity_rounds_like_css() {
    assert_eq!(Rgba8::black_with_opacity(0.5).a, 128);
    assert_eq!(Rgba8::black_with_opacity(0.8).a, 204);
    assert_eq!(Rgba8::black_with_opacity(2.0).a, 255);
    assert_eq!(Rgba8::black_with_opacity(-1.0).a, 0);
}
