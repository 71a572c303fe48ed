pub mod controls;
pub mod lifecycle;
pub mod pointer;

pub use controls::wire_volume_slider;
pub use lifecycle::{wire_device_change, wire_page_lifecycle};
pub use pointer::{wire_input_handlers, CaseWiring};
