#![allow(clippy::float_cmp)]

use super::*;
use crate::util::capabilities::Fixed;

fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

// =============================================================
// Particles
// =============================================================

#[test]
fn injects_six_particles() {
    let specs = particles(&Fixed::default(), &mut sequence(vec![0.5]));
    assert_eq!(specs.len(), PARTICLE_COUNT);
}

#[test]
fn reduced_motion_injects_nothing() {
    let caps = Fixed { reduced_motion: true, ..Fixed::default() };
    assert!(particles(&caps, &mut sequence(vec![0.5])).is_empty());
}

#[test]
fn particle_values_map_samples_into_ranges() {
    let specs = particles(&Fixed::default(), &mut sequence(vec![0.25, 0.75, 0.5, 1.0]));
    let first = specs[0];
    assert_eq!(first.left_pct, 25.0);
    assert_eq!(first.top_pct, 75.0);
    assert_eq!(first.duration_s, 5.0);
    assert_eq!(first.delay_s, 2.0);
}

#[test]
fn particle_style_lists_every_property() {
    let particle = ParticleSpec { left_pct: 10.0, top_pct: 20.0, duration_s: 4.0, delay_s: 0.5 };
    let style = particle.style();
    assert!(style.contains("left: 10.00%"));
    assert!(style.contains("top: 20.00%"));
    assert!(style.contains("animation-duration: 4.00s"));
    assert!(style.contains("animation-delay: 0.50s"));
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn centered_pointer_has_no_offset() {
    assert_eq!(parallax_offset((500.0, 300.0), (1000.0, 600.0), 3), (0.0, 0.0));
}

#[test]
fn intensity_grows_with_index() {
    let near = parallax_offset((1000.0, 600.0), (1000.0, 600.0), 0);
    let far = parallax_offset((1000.0, 600.0), (1000.0, 600.0), 2);
    assert_eq!(near, (5.0, 5.0));
    assert_eq!(far, (15.0, 15.0));
}

#[test]
fn pointer_left_of_center_moves_left() {
    let (dx, _) = parallax_offset((0.0, 300.0), (1000.0, 600.0), 0);
    assert!(dx < 0.0);
}

#[test]
fn empty_viewport_has_no_offset() {
    assert_eq!(parallax_offset((10.0, 10.0), (0.0, 0.0), 1), (0.0, 0.0));
}

// =============================================================
// Decor style
// =============================================================

#[test]
fn decor_is_paused_until_started() {
    assert!(decor_style(6.0, false, false, (0.0, 0.0)).contains("paused"));
    assert!(decor_style(6.0, true, false, (0.0, 0.0)).contains("running"));
}

#[test]
fn hover_speeds_up_and_scales() {
    let style = decor_style(6.0, true, true, (0.0, 0.0));
    assert!(style.contains("animation-duration: 3.00s"));
    assert!(style.contains("scale(1.1)"));
    let style = decor_style(6.0, true, false, (0.0, 0.0));
    assert!(style.contains("animation-duration: 6.00s"));
    assert!(style.contains("scale(1)"));
}

// =============================================================
// FrameCoalescer
// =============================================================

#[test]
fn burst_requests_one_frame_and_keeps_latest() {
    let mut frames = FrameCoalescer::default();
    assert!(frames.push((1.0, 1.0)));
    assert!(!frames.push((2.0, 2.0)));
    assert!(!frames.push((3.0, 3.0)));
    assert_eq!(frames.take(), Some((3.0, 3.0)));
    assert_eq!(frames.take(), None);
}

#[test]
fn next_event_after_frame_requests_again() {
    let mut frames = FrameCoalescer::default();
    frames.push(1);
    frames.take();
    assert!(frames.push(2));
}


// =============================================================
// Typewriter
// =============================================================

#[test]
fn typewriter_starts_empty_with_cursor() {
    let tw = Typewriter::new("Hi");
    assert_eq!(tw.visible_text(), "");
    assert!(tw.cursor_visible());
    assert!(!tw.is_typed());
}

#[test]
fn typewriter_types_one_character_per_step() {
    let mut tw = Typewriter::new("Rust");
    let mut shown = Vec::new();
    loop {
        let done = tw.step();
        shown.push(tw.visible_text());
        if done {
            break;
        }
    }
    assert_eq!(shown, vec!["R", "Ru", "Rus", "Rust"]);
    assert!(tw.cursor_visible());

    assert!(tw.step());
    assert_eq!(tw.visible_text(), "Rust");
}

#[test]
fn typewriter_cursor_hides_after_typing() {
    let mut tw = Typewriter::new("a");
    tw.step();
    tw.hide_cursor();
    assert!(!tw.cursor_visible());
    assert_eq!(tw.visible_text(), "a");
}

#[test]
fn typewriter_counts_characters_not_bytes() {
    let mut tw = Typewriter::new("héllo ∞");
    tw.step();
    tw.step();
    assert_eq!(tw.visible_text(), "hé");
    while !tw.step() {}
    assert_eq!(tw.visible_text(), "héllo ∞");
}

#[test]
fn finished_typewriter_shows_everything_without_cursor() {
    let tw = Typewriter::finished("Building things");
    assert!(tw.is_typed());
    assert!(!tw.cursor_visible());
    assert_eq!(tw.visible_text(), "Building things");
}

#[test]
fn empty_tagline_is_typed_immediately() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_typed());
    assert!(tw.step());
    assert_eq!(tw.visible_text(), "");
}
