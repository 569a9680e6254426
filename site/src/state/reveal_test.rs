use super::*;

// =============================================================
// OneShot
// =============================================================

#[test]
fn one_shot_fires_once() {
    let mut shot = OneShot::default();
    assert!(!shot.fired());
    assert!(shot.fire());
    assert!(!shot.fire());
    assert!(shot.fired());
}

// =============================================================
// Section trigger
// =============================================================

#[test]
fn section_triggers_two_hundred_px_above_bottom() {
    assert!(!section_triggered(600.0, 800.0));
    assert!(section_triggered(599.0, 800.0));
    assert!(section_triggered(-300.0, 800.0));
}

#[test]
fn skill_delays_stagger_by_fifty_ms() {
    let delays = (0..4).map(skill_tag_delay_ms).collect::<Vec<_>>();
    assert_eq!(delays, vec![0, 50, 100, 150]);
}

// =============================================================
// RevealState
// =============================================================

#[test]
fn below_threshold_does_not_reveal() {
    let mut state = RevealState::default();
    assert!(!state.observe("projects", 0.05));
    assert!(!state.is_revealed("projects"));
}

#[test]
fn threshold_reveals_once() {
    let mut state = RevealState::default();
    assert!(state.observe("projects", 0.1));
    assert!(!state.observe("projects", 0.9));
    assert!(state.is_revealed("projects"));
}

#[test]
fn reveal_is_monotonic() {
    let mut state = RevealState::default();
    state.observe("about", 0.5);
    state.observe("about", 0.0);
    assert!(state.is_revealed("about"));
}

#[test]
fn blocks_reveal_independently() {
    let mut state = RevealState::default();
    state.observe("about", 0.5);
    assert!(!state.is_revealed("contact"));
}

// =============================================================
// SkillsState
// =============================================================

#[test]
fn skills_hidden_until_trigger() {
    let mut skills = SkillsState::default();
    assert!(!skills.on_scroll(900.0, 800.0));
    assert!(!skills.visible());
}

#[test]
fn skills_reveal_once_and_stay() {
    let mut skills = SkillsState::default();
    assert!(skills.on_scroll(100.0, 800.0));
    assert!(!skills.on_scroll(50.0, 800.0));
    assert!(!skills.on_scroll(2000.0, 800.0));
    assert!(skills.visible());
}
