//! Deskcalc: a pure functional scientific calculator engine
//!
//! Deskcalc is built on the "pure core, imperative shell" philosophy.
//! The calculator logic is a single synchronous state machine: the
//! presentation layer forwards discrete user actions (digit pressed,
//! operator pressed, equals pressed, ...) and renders the display string
//! and history list the engine hands back. No widget state, no threads,
//! no persistence.
//!
//! # Core Concepts
//!
//! - **Events**: one [`Event`](engine::Event) per user action, mappable
//!   from raw button captions
//! - **State**: the accumulator/operator machine in [`core::EngineState`],
//!   a plain serializable value
//! - **History**: the last five resolved operations, rendered as
//!   `"a OP b = c"` lines
//! - **Errors**: divide-by-zero, domain, and parse faults become a local
//!   error display, never a panic or a propagated fault
//!
//! # Example
//!
//! ```rust
//! use deskcalc::core::BinaryOp;
//! use deskcalc::{Engine, Event};
//!
//! let mut engine = Engine::new();
//! engine.apply(Event::Digit(3));
//! engine.apply(Event::Operator(BinaryOp::Add));
//! engine.apply(Event::Digit(4));
//! let render = engine.apply(Event::Equals);
//!
//! assert_eq!(render.display, "7");
//! assert_eq!(render.history, vec!["3 + 4 = 7".to_string()]);
//! ```

pub mod core;
pub mod engine;
pub mod layout;

// Re-export commonly used types
pub use core::{BinaryOp, CalcError, EngineState, History, Phase, UnaryFn};
pub use engine::{Engine, Event, Render};
pub use layout::Layout;
