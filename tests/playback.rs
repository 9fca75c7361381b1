//! Host-level tests driving the engine and selector together, one iteration
//! per tick, the way the beacon loop does.

use morse_beacon::{LedPattern, MessageSet, Selector, SignalEngine, MESSAGES};

const PRESET: MessageSet = MessageSet::new(&["ss", "oo", "sos"]);

/// One beacon-loop iteration: a phase step, then a commit attempt.
fn tick(engine: &mut SignalEngine, selector: &Selector) -> Option<LedPattern> {
    let pattern = engine.step();
    if let Some(next_index) = selector.try_apply(engine.message_index(), engine.ended()) {
        engine.switch_to(next_index);
    }
    pattern
}

#[test]
fn a_press_mid_playback_waits_for_the_message_boundary() {
    let mut engine = SignalEngine::new(PRESET);
    let selector = Selector::new(PRESET.len());

    // a few ticks into "ss", then the press arrives
    for _ in 0..4 {
        let _ = tick(&mut engine, &selector);
    }
    selector.request_next();

    let mut switched_at = None;
    for index in 0..100 {
        let _ = tick(&mut engine, &selector);
        if engine.message_index() == 1 {
            switched_at = Some(index);
            break;
        }
    }
    // "ss" runs 32 ticks start to finish and 4 were spent before the press,
    // so the switch lands on the traversal's final tick and no earlier
    assert_eq!(switched_at, Some(27));
    assert!(!engine.ended());
}

#[test]
fn the_switched_to_message_plays_its_own_patterns() {
    let mut engine = SignalEngine::new(PRESET);
    let selector = Selector::new(PRESET.len());

    selector.request_next();
    while engine.message_index() != 1 {
        let _ = tick(&mut engine, &selector);
    }

    // "oo" is dashes only: green and off, never red
    let mut lit = Vec::new();
    while !engine.ended() {
        if let Some(pattern) = tick(&mut engine, &selector) {
            lit.push(pattern);
        }
    }
    assert!(lit.contains(&LedPattern::Green));
    assert!(!lit.contains(&LedPattern::Red));
}

#[test]
fn next_cycles_forward_through_the_preset_and_wraps() {
    let mut engine = SignalEngine::new(MESSAGES);
    let selector = Selector::new(MESSAGES.len());

    for expected_index in [1, 2, 0] {
        selector.request_next();
        let mut guard = 0;
        while engine.message_index() != expected_index {
            let _ = tick(&mut engine, &selector);
            guard += 1;
            assert!(guard < 1_000, "switch to {expected_index} never landed");
        }
    }
}

#[test]
fn prev_from_the_first_message_plays_the_last() {
    let mut engine = SignalEngine::new(PRESET);
    let selector = Selector::new(PRESET.len());

    selector.request_prev();
    let mut guard = 0;
    while engine.message_index() != 2 {
        let _ = tick(&mut engine, &selector);
        guard += 1;
        assert!(guard < 1_000, "switch to the last message never landed");
    }

    // "sos" mixes dots and dashes
    let mut lit = Vec::new();
    while !engine.ended() {
        if let Some(pattern) = tick(&mut engine, &selector) {
            lit.push(pattern);
        }
    }
    assert!(lit.contains(&LedPattern::Red));
    assert!(lit.contains(&LedPattern::Green));
}
