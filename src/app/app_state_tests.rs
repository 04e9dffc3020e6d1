//! Tests for app_state

use super::*;
use crate::test_utils::test_helpers::{test_app, type_text};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_app_initialization() {
    let app = test_app();

    assert_eq!(app.focus, Focus::InputField);
    assert!(app.combobox.is_open);
    assert_eq!(app.query(), "");
    assert!(app.combobox.suggestions.is_empty());
    assert!(!app.should_quit());
    assert_eq!(app.output, None);
    assert!(!app.debouncer.is_pending());
}

#[test]
fn test_rapid_typing_coalesces_into_one_evaluation() {
    let mut app = test_app();
    let start = Instant::now();

    app.dispatch(ComboEvent::TextChanged("a".to_string()), start);
    app.dispatch(ComboEvent::TextChanged("ab".to_string()), start + ms(200));
    app.dispatch(ComboEvent::TextChanged("abc".to_string()), start + ms(400));

    // 800ms after the first keystroke, but not after the last one
    assert!(!app.tick(start + ms(800)));
    assert_eq!(app.filter_runs, 0);

    assert!(app.tick(start + ms(1200)));
    assert_eq!(app.filter_runs, 1);
    assert_eq!(app.query(), "abc");

    // Nothing left to fire
    assert!(!app.tick(start + ms(5000)));
    assert_eq!(app.filter_runs, 1);
}

#[test]
fn test_debounced_filter_populates_suggestions() {
    let mut app = test_app();
    let start = Instant::now();

    app.dispatch(ComboEvent::TextChanged("ap".to_string()), start);
    assert!(app.combobox.suggestions.is_empty());

    app.tick(start + ms(800));
    assert_eq!(
        app.combobox.suggestions,
        vec!["Apple", "Apricot", "Grape", "Grapefruit", "Papaya", "Pineapple"]
    );
    assert!(app.combobox.shows_panel());
}

#[test]
fn test_no_match_shows_notice_after_delay() {
    let mut app = test_app();
    let start = Instant::now();

    app.dispatch(ComboEvent::TextChanged("zzz".to_string()), start);
    app.tick(start + ms(800));

    assert!(app.combobox.shows_no_result());
    assert!(!app.combobox.shows_panel());
}

#[test]
fn test_closed_panel_suppresses_filtering() {
    let mut app = test_app();
    let start = Instant::now();
    app.dispatch(ComboEvent::Escape, start);
    assert!(!app.combobox.is_open);

    app.dispatch(ComboEvent::TextChanged("ap".to_string()), start);
    assert!(!app.debouncer.is_pending());
    assert!(!app.tick(start + ms(5000)));
    assert_eq!(app.filter_runs, 0);
}

#[test]
fn test_closing_cancels_pending_timer() {
    let mut app = test_app();
    let start = Instant::now();

    app.dispatch(ComboEvent::TextChanged("ap".to_string()), start);
    assert!(app.debouncer.is_pending());

    app.dispatch(ComboEvent::Escape, start + ms(100));
    assert!(!app.debouncer.is_pending());
    assert_eq!(app.focus, Focus::Outside);
}

#[test]
fn test_enter_commit_updates_text_field() {
    let mut app = test_app();
    type_text(&mut app, "apr");
    let start = Instant::now();
    app.tick(start + ms(10_000));

    app.dispatch(ComboEvent::Enter, start);

    assert_eq!(app.query(), "Apricot");
    assert_eq!(app.input.text(), "Apricot");
    assert!(!app.combobox.is_open);
    assert_eq!(app.focus, Focus::Outside);
}

#[test]
fn test_focus_reopens_panel() {
    let mut app = test_app();
    let now = Instant::now();
    app.dispatch(ComboEvent::Escape, now);
    assert!(!app.combobox.is_open);

    app.focus_input(now);
    assert_eq!(app.focus, Focus::InputField);
    assert!(app.combobox.is_open);
}

#[test]
fn test_blur_input_keeps_panel_state() {
    let mut app = test_app();
    let now = Instant::now();
    app.blur_input(now);
    assert_eq!(app.focus, Focus::Outside);
    assert!(app.combobox.is_open);
}

#[test]
fn test_poll_timeout_idle() {
    let app = test_app();
    assert_eq!(app.poll_timeout(Instant::now()), IDLE_POLL_INTERVAL);
}

#[test]
fn test_poll_timeout_tracks_pending_deadline() {
    let mut app = test_app();
    let start = Instant::now();
    app.debouncer = Debouncer::new(100);
    app.dispatch(ComboEvent::TextChanged("a".to_string()), start);

    assert_eq!(app.poll_timeout(start + ms(40)), ms(60));
    assert_eq!(app.poll_timeout(start + ms(500)), Duration::ZERO);
}

#[test]
fn test_teardown_releases_timer() {
    let mut app = test_app();
    let start = Instant::now();
    app.dispatch(ComboEvent::TextChanged("a".to_string()), start);

    app.teardown();
    assert!(!app.debouncer.is_pending());
    assert!(!app.tick(start + ms(5000)));
}

#[test]
fn test_committing_multi_line_item_keeps_field_in_step() {
    let mut app = App::new(
        Candidates::new(vec!["red\napple".to_string()]),
        &ComboboxConfig::default(),
    );
    let start = Instant::now();
    app.dispatch(ComboEvent::TextChanged("red".to_string()), start);
    assert!(app.tick(start + ms(800)));

    app.dispatch(ComboEvent::Enter, start + ms(900));
    app.focus_input(start + ms(1000));
    app.focus_input(start + ms(1100));

    assert_eq!(app.query(), "red apple");
    assert_eq!(app.input.text(), app.query());
    assert_eq!(app.input.textarea.lines().len(), 1);
}
