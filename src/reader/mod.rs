//! The reader view-state machine.
//!
//! Stateless, pure functions over a `GalleryState`:
//! - `engine` - filtered-sequence derivation, slot resolution, labels
//! - `navigation` - next/previous stepping under each layout mode

pub mod engine;
pub mod navigation;

pub use engine::{filtered, label, resolve_slots, Slots};
pub use navigation::{step_next, step_prev};
