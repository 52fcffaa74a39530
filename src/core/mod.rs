//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the engine:
//! - Engine state and its derived phase
//! - The pending entry with its typing/resolved sub-states
//! - Typed binary operators and unary scientific functions
//! - The bounded operation history
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod entry;
mod error;
mod format;
mod history;
mod ops;
mod state;

pub use entry::Entry;
pub use error::CalcError;
pub use format::format_number;
pub use history::{History, HistoryRecord, HISTORY_CAPACITY};
pub use ops::{BinaryOp, UnaryFn};
pub use state::{EngineState, Phase};
