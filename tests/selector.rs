//! Host-level tests for the press latch and selection counter.

use morse_beacon::Selector;

#[test]
fn a_second_press_before_the_apply_is_ignored() {
    let selector = Selector::new(3);
    selector.request_next();
    selector.request_next();
    // the latch suppressed the second press
    assert_eq!(selector.try_apply(0, true), Some(1));
}

#[test]
fn apply_waits_for_the_message_to_end() {
    let selector = Selector::new(3);
    selector.request_next();
    assert_eq!(selector.try_apply(0, false), None);
    assert_eq!(selector.try_apply(0, true), Some(1));
}

#[test]
fn no_pending_request_means_no_switch() {
    let selector = Selector::new(3);
    assert_eq!(selector.try_apply(0, true), None);
    assert_eq!(selector.try_apply(0, false), None);
}

#[test]
fn prev_from_the_first_message_wraps_to_the_last() {
    let selector = Selector::new(3);
    selector.request_prev();
    assert_eq!(selector.try_apply(0, true), Some(2));
}

#[test]
fn a_full_cycle_of_next_returns_to_the_start() {
    let selector = Selector::new(3);
    let mut current = 0;
    for _ in 0..3 {
        selector.request_next();
        current = selector.try_apply(current, true).expect("switch expected");
    }
    assert_eq!(current, 0);
}

#[test]
fn presses_count_again_once_the_latch_window_reopens() {
    let selector = Selector::new(3);
    selector.request_next();
    assert_eq!(selector.try_apply(0, true), Some(1));
    // the apply cleared the latch, so this press counts too
    selector.request_next();
    assert_eq!(selector.try_apply(1, true), Some(2));
}

#[test]
fn opposite_presses_while_latched_count_once() {
    let selector = Selector::new(3);
    selector.request_next();
    selector.request_prev();
    // only the first press made it past the shared latch
    assert_eq!(selector.try_apply(0, true), Some(1));
}

#[test]
fn racing_presses_cannot_both_take_the_latch() {
    let selector = Selector::new(5);
    std::thread::scope(|scope| {
        scope.spawn(|| selector.request_next());
        scope.spawn(|| selector.request_next());
    });
    // exactly one of the two presses won the compare-and-set
    assert_eq!(selector.try_apply(0, true), Some(1));
}

#[test]
fn a_single_message_list_never_switches() {
    let selector = Selector::new(1);
    selector.request_next();
    assert_eq!(selector.try_apply(0, true), None);
    selector.request_prev();
    assert_eq!(selector.try_apply(0, true), None);
}
