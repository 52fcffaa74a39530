//! The event layer: input events and the machine that applies them.
//!
//! This is the imperative shell around the pure `core` types: the engine
//! owns one `EngineState` plus the history, handles each event to
//! completion, and emits a render directive for the presentation layer.

mod event;
mod machine;

pub use event::Event;
pub use machine::{Engine, Render};
