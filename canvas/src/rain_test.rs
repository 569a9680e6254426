#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Returns the same sample forever.
fn constant(value: f64) -> impl FnMut() -> f64 {
    move || value
}

/// Cycles through a fixed list of samples.
fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

/// A field whose drops all start on the top row.
fn at_top(width: f64, height: f64) -> RainField {
    RainField::new(width, height, &mut constant(0.0))
}

// =============================================================
// Construction
// =============================================================

#[test]
fn column_count_is_floor_of_width_over_twenty() {
    assert_eq!(at_top(1000.0, 600.0).columns(), 50);
    assert_eq!(at_top(1019.0, 600.0).columns(), 50);
    assert_eq!(at_top(19.0, 600.0).columns(), 0);
}

#[test]
fn negative_size_yields_empty_field() {
    let field = at_top(-40.0, -10.0);
    assert_eq!(field.columns(), 0);
    assert_eq!(field.size(), (0.0, 0.0));
}

#[test]
fn drops_are_seeded_across_the_height() {
    let field = RainField::new(80.0, 400.0, &mut sequence(vec![0.0, 0.25, 0.5, 0.75]));
    assert_eq!(field.drops(), &[0.0, 100.0, 200.0, 300.0]);
    assert!(field.drops().iter().all(|y| (0.0..400.0).contains(y)));
}

#[test]
fn seeded_drops_do_not_share_one_row() {
    let mut rng = sequence(vec![0.13, 0.71, 0.42, 0.05, 0.88]);
    let mut field = RainField::new(100.0, 600.0, &mut rng);
    let frame = field.tick(&mut constant(0.9));
    let first = frame.glyphs[0].y;
    assert!(frame.glyphs.iter().any(|g| g.y != first));
}

// =============================================================
// Ticking
// =============================================================

#[test]
fn tick_emits_one_glyph_per_column_at_column_x() {
    let mut field = at_top(60.0, 200.0);
    let frame = field.tick(&mut constant(0.9));
    assert_eq!(frame.glyphs.len(), 3);
    let xs = frame.glyphs.iter().map(|g| g.x).collect::<Vec<_>>();
    assert_eq!(xs, vec![0.0, 20.0, 40.0]);
    assert_eq!((frame.width, frame.height), (60.0, 200.0));
}

#[test]
fn tick_picks_glyph_from_sample() {
    let mut field = at_top(40.0, 200.0);
    let frame = field.tick(&mut sequence(vec![0.1, 0.7]));
    assert_eq!(frame.glyphs[0].glyph, Glyph::Zero);
    assert_eq!(frame.glyphs[1].glyph, Glyph::One);
}

#[test]
fn tick_advances_by_one_row() {
    let mut field = at_top(20.0, 200.0);
    field.tick(&mut constant(0.9));
    field.tick(&mut constant(0.9));
    assert_eq!(field.drops(), &[40.0]);
}

#[test]
fn frame_reports_position_before_advance() {
    let mut field = at_top(20.0, 200.0);
    field.tick(&mut constant(0.9));
    let frame = field.tick(&mut constant(0.9));
    assert_eq!(frame.glyphs[0].y, 20.0);
}

#[test]
fn drop_parks_below_bottom_until_reset_roll_succeeds() {
    let mut field = at_top(20.0, 40.0);
    for _ in 0..10 {
        field.tick(&mut constant(0.9));
    }
    assert_eq!(field.drops(), &[field.floor_y()]);

    field.tick(&mut constant(0.01));
    assert_eq!(field.drops(), &[0.0]);
}

#[test]
fn drop_at_bottom_edge_is_not_yet_past_it() {
    let mut field = at_top(20.0, 40.0);
    field.tick(&mut constant(0.01));
    field.tick(&mut constant(0.01));
    assert_eq!(field.drops(), &[40.0]);
    field.tick(&mut constant(0.01));
    assert_eq!(field.drops(), &[60.0]);
}

#[test]
fn positions_stay_within_bounds_over_many_ticks() {
    let mut field = at_top(200.0, 90.0);
    let mut rng = sequence(vec![0.3, 0.99, 0.02, 0.5, 0.8, 0.01, 0.6]);
    for _ in 0..500 {
        field.tick(&mut rng);
        assert!(field.drops().iter().all(|y| (0.0..=field.floor_y()).contains(y)));
    }
}

#[test]
fn resets_are_staggered_across_columns() {
    let mut field = at_top(40.0, 20.0);
    for _ in 0..3 {
        field.tick(&mut constant(0.9));
    }
    // Column 0 rolls a reset, column 1 does not.
    field.tick(&mut sequence(vec![0.9, 0.01, 0.9, 0.9]));
    assert_eq!(field.drops(), &[0.0, field.floor_y()]);
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_keeps_column_count() {
    let mut field = at_top(100.0, 100.0);
    field.resize(400.0, 300.0);
    assert_eq!(field.columns(), 5);
    assert_eq!(field.size(), (400.0, 300.0));
}

#[test]
fn resize_clamps_drops_to_new_floor() {
    let mut field = at_top(20.0, 400.0);
    for _ in 0..15 {
        field.tick(&mut constant(0.9));
    }
    field.resize(20.0, 100.0);
    assert_eq!(field.drops(), &[120.0]);
}
