use super::*;

// =============================================================
// StatCounter
// =============================================================

#[test]
fn parse_keeps_plus_suffix() {
    let counter = StatCounter::parse("50+").unwrap();
    assert_eq!(counter.target, 50);
    assert_eq!(counter.suffix, "+");
    assert_eq!(counter.text(), "0+");
}

#[test]
fn parse_plain_number() {
    let counter = StatCounter::parse("12").unwrap();
    assert_eq!(counter.suffix, "");
    assert_eq!(counter.step(), 1);
}

#[test]
fn parse_rejects_non_numeric() {
    assert!(StatCounter::parse("many").is_none());
    assert!(StatCounter::parse("+").is_none());
}

#[test]
fn step_is_ceil_of_target_over_thirty() {
    assert_eq!(StatCounter::parse("50+").unwrap().step(), 2);
    assert_eq!(StatCounter::parse("90").unwrap().step(), 3);
    assert_eq!(StatCounter::parse("1000").unwrap().step(), 34);
}

#[test]
fn zero_target_is_already_done() {
    let counter = StatCounter::parse("0").unwrap();
    assert!(counter.done());
    assert_eq!(counter.text(), "0");
}

#[test]
fn fifty_plus_counts_monotonically_to_exact_target() {
    let mut counter = StatCounter::parse("50+").unwrap();
    let mut seen = vec![counter.current];
    while !counter.done() {
        counter.advance();
        assert!(counter.text().ends_with('+'));
        seen.push(counter.current);
    }
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(counter.text(), "50+");
    assert_eq!(seen.len(), 26);
}

#[test]
fn advance_clamps_at_target() {
    let mut counter = StatCounter::parse("31").unwrap();
    for _ in 0..100 {
        counter.advance();
    }
    assert_eq!(counter.current, 31);
}

// =============================================================
// StatsState
// =============================================================

#[test]
fn non_numeric_stats_stay_fixed() {
    let state = StatsState::new(&["24/7"]);
    assert_eq!(state.texts(), vec!["24/7".to_owned()]);
}

#[test]
fn start_is_one_shot() {
    let mut state = StatsState::new(&["50+"]);
    assert!(!state.on_scroll(900.0, 800.0));
    assert!(state.on_scroll(100.0, 800.0));
    assert!(!state.on_scroll(100.0, 800.0));
    assert!(state.started());
}

#[test]
fn labels_show_until_started_then_counters() {
    let mut state = StatsState::new(&["50+", "n/a"]);
    assert_eq!(state.texts(), vec!["50+".to_owned(), "n/a".to_owned()]);
    state.on_scroll(0.0, 800.0);
    assert_eq!(state.texts(), vec!["50+".to_owned(), "n/a".to_owned()]);
    state.tick();
    assert_eq!(state.text(0), "2+");
}

#[test]
fn started_counter_keeps_label_until_first_step() {
    let mut state = StatsState::new(&["8+", "0"]);
    assert!(state.on_scroll(0.0, 800.0));
    assert!(state.texts().iter().all(|t| !t.starts_with("0+")));
    assert_eq!(state.text(0), "8+");
    assert_eq!(state.text(1), "0");
    state.tick();
    assert_eq!(state.text(0), "1+");
}

#[test]
fn text_out_of_range_is_empty() {
    assert_eq!(StatsState::new(&["1"]).text(5), "");
}

#[test]
fn tick_runs_until_every_counter_finishes() {
    let mut state = StatsState::new(&["50+", "5", "n/a"]);
    state.on_scroll(0.0, 800.0);
    let mut ticks = 0;
    while !state.tick() {
        ticks += 1;
        assert!(ticks < 100, "counters never finished");
    }
    assert_eq!(state.texts(), vec!["50+".to_owned(), "5".to_owned(), "n/a".to_owned()]);
}
