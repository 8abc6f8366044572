//! Controller layer: UI events, keyboard translation, and command orchestration.

pub mod events;
pub mod input;
pub mod orchestration;
