// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_unique_and_non_empty() {
    let mut seen = HashSet::new();
    for id in ALL_IDS {
        assert!(!id.is_empty());
        assert!(!id.contains(' '), "id {id:?} has whitespace");
        assert!(seen.insert(*id), "duplicate id {id:?}");
    }
}

#[test]
fn revealed_elements_are_known_ids() {
    for id in REVEAL_ON_START {
        assert!(ALL_IDS.contains(id));
    }
    assert!(!REVEAL_ON_START.contains(&START_OVERLAY_ID));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn volume_slider_range_is_sane() {
    assert_eq!(VOLUME_MIN, 0.0);
    assert_eq!(VOLUME_MAX, 1.0);
    assert!(VOLUME_STEP > 0.0 && VOLUME_STEP < VOLUME_MAX - VOLUME_MIN);
}

#[test]
fn image_hints_differ() {
    assert_ne!(IMAGE_RETRY_HINT, IMAGE_SAVE_HINT);
    assert!(!IMAGE_SAVE_HINT.is_empty());
}
