use super::*;

#[test]
fn glyph_color_follows_theme() {
    assert_eq!(glyph_color(false), "rgba(33, 128, 141, 0.3)");
    assert_eq!(glyph_color(true), "rgba(50, 184, 198, 0.5)");
}

#[test]
fn glyph_colors_are_translucent() {
    for color in [GLYPH_COLOR_LIGHT, GLYPH_COLOR_DARK] {
        let alpha = color
            .trim_end_matches(')')
            .rsplit(',')
            .next()
            .and_then(|a| a.trim().parse::<f64>().ok())
            .unwrap();
        assert!(alpha > 0.0 && alpha < 1.0, "{color} should be translucent");
    }
}
