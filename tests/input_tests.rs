// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn first_touch_is_tracked_and_extra_fingers_ignored() {
    let mut t = TouchTracker::default();
    assert!(t.begin(7));
    assert!(!t.begin(8), "second finger must not steal the drag");
    assert_eq!(t.active(), Some(7));
}

#[test]
fn position_follows_tracked_touch_not_first_in_list() {
    let mut t = TouchTracker::default();
    t.begin(3);
    // another finger landed earlier in the list
    assert_eq!(t.position_in([9, 3]), Some(1));
    assert_eq!(t.position_in([9]), None);
}

#[test]
fn lifting_other_fingers_keeps_the_drag() {
    let mut t = TouchTracker::default();
    t.begin(1);
    assert!(!t.end([2]));
    assert_eq!(t.active(), Some(1));
    assert!(t.end([2, 1]));
    assert_eq!(t.active(), None);
    assert!(!t.end([1]), "already released");
}

#[test]
fn new_drag_after_release_or_cancel() {
    let mut t = TouchTracker::default();
    t.begin(1);
    t.cancel();
    assert!(t.begin(2));
    assert!(t.end([2]));
    assert!(t.begin(5));
}

#[test]
fn untracked_session_has_no_position() {
    let t = TouchTracker::default();
    assert_eq!(t.position_in([0, 1, 2]), None);
}

#[test]
fn px_formats_css_lengths() {
    assert_eq!(px(0.0), "0px");
    assert_eq!(px(200.0), "200px");
    assert_eq!(px(12.5), "12.5px");
}
