//! Calculator engine state.
//!
//! `EngineState` is a plain serializable value, fully decoupled from any
//! rendering concern: the display string is derived from it, never stored
//! by a widget. All mutation happens through the engine's event handlers.

use super::entry::Entry;
use super::error::CalcError;
use super::ops::BinaryOp;
use serde::{Deserialize, Serialize};

/// Summary of where the machine currently sits.
///
/// Derived from [`EngineState`], in order of precedence: a standing fault,
/// a just-produced result, an entry being typed, an armed operator, or the
/// initial wait for a first keystroke.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    AwaitingEntry,
    TypingEntry,
    OperatorArmed,
    ResultDisplayed,
    ErrorDisplayed,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitingEntry => "AwaitingEntry",
            Self::TypingEntry => "TypingEntry",
            Self::OperatorArmed => "OperatorArmed",
            Self::ResultDisplayed => "ResultDisplayed",
            Self::ErrorDisplayed => "ErrorDisplayed",
        }
    }

    /// Check if this is the error phase.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::ErrorDisplayed)
    }
}

/// Complete state of the calculator engine.
///
/// The accumulator and the pending operator together fully determine what
/// `=` or a following operator computes; an armed operator is never
/// forgotten until it resolves or is cleared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Running total carried across chained operations.
    pub(crate) accumulator: f64,
    /// The value being typed or just computed.
    pub(crate) entry: Entry,
    /// Armed binary operator awaiting its second operand, if any.
    pub(crate) pending_op: Option<BinaryOp>,
    /// Next digit keystroke starts a fresh entry.
    pub(crate) awaiting_entry: bool,
    /// Set immediately after `=` resolves.
    pub(crate) just_resolved: bool,
    /// Present while the display shows an error string.
    pub(crate) fault: Option<CalcError>,
}

impl EngineState {
    /// Initial state: accumulator 0, entry `"0"`, nothing armed.
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            entry: Entry::zero(),
            pending_op: None,
            awaiting_entry: true,
            just_resolved: false,
            fault: None,
        }
    }

    /// The running total.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// The pending entry.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// The armed operator, if any.
    pub fn pending_op(&self) -> Option<BinaryOp> {
        self.pending_op
    }

    /// The fault currently on display, if any.
    pub fn fault(&self) -> Option<&CalcError> {
        self.fault.as_ref()
    }

    /// String to show on the display right now.
    pub fn display_text(&self) -> String {
        match &self.fault {
            Some(fault) => fault.display_text().to_string(),
            None => self.entry.text(),
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        if self.fault.is_some() {
            Phase::ErrorDisplayed
        } else if self.just_resolved {
            Phase::ResultDisplayed
        } else if !self.awaiting_entry {
            Phase::TypingEntry
        } else if self.pending_op.is_some() {
            Phase::OperatorArmed
        } else {
            Phase::AwaitingEntry
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}
