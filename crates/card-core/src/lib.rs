//! Pure logic for the card-case toy: drag clamping, edge-triggered taps,
//! volume mapping and persisted settings.
//!
//! Nothing in this crate touches platform APIs; the web front-end adapts DOM
//! events and WebAudio into the types exposed here.

pub mod case;
pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod image;
pub mod lifecycle;
pub mod player;
pub mod settings;
pub mod trigger;
pub mod volume;

pub use case::*;
pub use config::*;
pub use drag::*;
pub use error::*;
pub use geometry::*;
pub use highlight::*;
pub use image::*;
pub use lifecycle::*;
pub use player::*;
pub use settings::*;
pub use trigger::*;
pub use volume::*;
