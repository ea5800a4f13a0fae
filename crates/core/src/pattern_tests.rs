// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::callback::callback;
use crate::queue::EventQueue;
use yare::parameterized;

fn matcher(pattern: &[&str]) -> PatternMatcher {
    PatternMatcher::new(pattern.iter().copied(), callback(|_| {}))
}

fn fire_count(pattern: &[&str], events: &[&str]) -> usize {
    let mut matcher = matcher(pattern);
    events.iter().filter(|e| matcher.advance(e)).count()
}

#[parameterized(
    a_x_b_fires = { &["A", "X", "B"], 1 },
    a_b_stops_at_wildcard = { &["A", "B"], 0 },
    repeated_a_fills_wildcard = { &["A", "A", "B"], 1 },
    mismatch_after_wildcard_resets = { &["A", "A", "X", "B"], 0 },
    restart_on_current_event = { &["A", "Y", "Z", "A", "Q", "B"], 1 },
    two_back_to_back = { &["A", "1", "B", "A", "2", "B"], 2 },
    no_overlap_search = { &["A", "A", "A", "B"], 0 },
)]
fn pattern_a_any_b(events: &[&str], expected: usize) {
    assert_eq!(fire_count(&["A", "*", "B"], events), expected);
}

#[test]
fn single_token_pattern_fires_on_every_match() {
    assert_eq!(fire_count(&["A"], &["A", "B", "A", "A"]), 3);
}

#[test]
fn single_token_pattern_fires_through_restart_path() {
    let mut matcher = matcher(&["A", "B"]);
    // "A" at position 1 mismatches, restarts and lands on position 1
    assert!(!matcher.advance("A"));
    assert!(!matcher.advance("A"));
    assert_eq!(matcher.position(), 1);
    assert!(matcher.advance("B"));
    assert_eq!(matcher.position(), 0);
}

#[test]
fn leading_wildcard_restarts_on_any_event() {
    let mut matcher = matcher(&["*", "B"]);
    assert!(!matcher.advance("X"));
    assert!(!matcher.advance("Y"));
    assert_eq!(matcher.position(), 1);
    assert!(matcher.advance("B"));
}

#[test]
fn reset_abandons_partial_match() {
    let mut m = matcher(&["A", "*", "B"]);
    assert!(!m.advance("A"));
    assert!(!m.advance("X"));
    assert_eq!(m.position(), 2);

    m.reset();
    assert_eq!(m.position(), 0);
    assert!(!m.advance("B"));

    assert!(!m.advance("A"));
    assert!(!m.advance("Y"));
    assert!(m.advance("B"));
    assert_eq!(m.position(), 0);
}

#[test]
fn empty_pattern_never_fires() {
    assert_eq!(fire_count(&[], &["A", "*", ""]), 0);
}

#[test]
fn on_event_runs_callback_with_emitter() {
    let mut matcher = PatternMatcher::new(
        ["A", "*", "D"],
        callback(|emit| {
            emit.publish("E").unwrap();
        }),
    );
    let mut queue = EventQueue::new(4);

    for event in ["A", "B", "D"] {
        matcher.on_event(event, &mut queue);
    }

    assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["E"]);
}

use proptest::prelude::*;

proptest! {
    #[test]
    fn position_stays_below_pattern_length(
        pattern in proptest::collection::vec("[AB*]", 1..5),
        events in proptest::collection::vec("[ABC]", 0..50),
    ) {
        let mut matcher = PatternMatcher::new(pattern.clone(), callback(|_| {}));
        for event in &events {
            matcher.advance(event);
            prop_assert!(matcher.position() < pattern.len());
        }
    }

    #[test]
    fn all_wildcards_fire_every_len_events(
        len in 1usize..5,
        events in proptest::collection::vec("[ABC]", 0..40),
    ) {
        let mut matcher = PatternMatcher::new(vec![WILDCARD; len], callback(|_| {}));
        let fired = events.iter().filter(|e| matcher.advance(e)).count();
        prop_assert_eq!(fired, events.len() / len);
    }
}
