//! The calculator machine: applies events and emits render directives.

use crate::core::{BinaryOp, CalcError, Entry, EngineState, History, HistoryRecord, UnaryFn};

use super::event::Event;

/// Render directive handed to the presentation layer after every event.
#[derive(Clone, Debug, PartialEq)]
pub struct Render {
    /// String to show on the display: the raw in-progress entry, a
    /// formatted number, or an error string.
    pub display: String,
    /// Rendered history lines, oldest first.
    pub history: Vec<String>,
}

/// The calculator engine.
///
/// Owns the [`EngineState`] and the bounded [`History`]. Every call to
/// [`Engine::apply`] handles one user action to completion and returns the
/// render directive for it; no event ever panics or escapes an error to the
/// caller.
pub struct Engine {
    state: EngineState,
    history: History,
}

impl Engine {
    /// Create an engine in the initial state.
    pub fn new() -> Self {
        Self {
            state: EngineState::new(),
            history: History::new(),
        }
    }

    /// Current state (pure).
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Operation history (pure).
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Handle one user action and produce the render directive for it.
    pub fn apply(&mut self, event: Event) -> Render {
        // A fault is local to the entry it interrupted; the next event
        // starts from a clean display.
        self.state.fault = None;

        match event {
            Event::Digit(digit) if digit <= 9 => self.enter(char::from(b'0' + digit)),
            Event::Digit(_) => {}
            Event::Dot => self.enter('.'),
            Event::Operator(op) => self.choose_operator(op),
            Event::Equals => self.resolve(),
            Event::ClearEntry => self.clear_entry(),
            Event::AllClear => self.all_clear(),
            Event::Negate => self.negate(),
            Event::Function(function) => self.apply_function(function),
        }

        let render = self.render();
        tracing::debug!(
            ?event,
            phase = self.state.phase().name(),
            display = %render.display,
            "applied event"
        );
        render
    }

    fn render(&self) -> Render {
        Render {
            display: self.state.display_text(),
            history: self.history.rendered_lines(),
        }
    }

    fn enter(&mut self, token: char) {
        self.state.just_resolved = false;
        if self.state.awaiting_entry {
            self.state.entry = Entry::starting_with(token);
            self.state.awaiting_entry = false;
        } else {
            self.state.entry.push(token);
        }
    }

    fn choose_operator(&mut self, op: BinaryOp) {
        let operand = match self.state.entry.value() {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };
        if let Some(armed) = self.state.pending_op {
            // Chained operators: "3 + 4 +" resolves the 7 first.
            if let Err(err) = self.resolve_armed(armed, operand) {
                return self.fail(err);
            }
        } else if !self.state.just_resolved {
            self.state.accumulator = operand;
            self.state.awaiting_entry = true;
        }
        self.state.pending_op = Some(op);
        self.state.just_resolved = false;
    }

    fn resolve(&mut self) {
        match self.state.pending_op {
            None => {
                // `=` with nothing pending re-displays the accumulator.
                self.state.entry = Entry::Resolved(self.state.accumulator);
                self.state.awaiting_entry = true;
                self.state.just_resolved = true;
            }
            Some(armed) => {
                let operand = match self.state.entry.value() {
                    Ok(value) => value,
                    Err(err) => return self.fail(err),
                };
                if let Err(err) = self.resolve_armed(armed, operand) {
                    self.fail(err);
                }
            }
        }
    }

    /// Apply the armed operator and record the history line.
    ///
    /// On error nothing has been mutated yet: accumulator and history stay
    /// at their pre-operation values.
    fn resolve_armed(&mut self, op: BinaryOp, operand: f64) -> Result<(), CalcError> {
        let lhs = self.state.accumulator;
        let result = op.apply(lhs, operand)?;
        self.history = self
            .history
            .record(HistoryRecord::new(lhs, op, operand, result));
        self.state.accumulator = result;
        self.state.entry = Entry::Resolved(result);
        self.state.pending_op = None;
        self.state.awaiting_entry = true;
        self.state.just_resolved = true;
        Ok(())
    }

    fn clear_entry(&mut self) {
        self.state.entry = Entry::zero();
        self.state.awaiting_entry = true;
        self.state.just_resolved = false;
    }

    fn all_clear(&mut self) {
        self.clear_entry();
        self.state.accumulator = 0.0;
        self.state.pending_op = None;
    }

    fn negate(&mut self) {
        // The one parse that falls back silently: an unreadable display
        // negates to zero.
        let value = self.state.entry.value().unwrap_or(0.0);
        self.state.entry = Entry::Resolved(-value);
        self.state.just_resolved = false;
    }

    fn apply_function(&mut self, function: UnaryFn) {
        let input = if function.is_constant() {
            0.0
        } else {
            match self.state.entry.value() {
                Ok(value) => value,
                Err(err) => return self.fail(err),
            }
        };
        match function.apply(input) {
            Ok(value) => {
                self.state.entry = Entry::Resolved(value);
                self.state.just_resolved = false;
            }
            Err(err) => self.fail(err),
        }
    }

    /// The error transition: show the error, drop the entry and the armed
    /// operator, leave accumulator and history untouched.
    fn fail(&mut self, err: CalcError) {
        tracing::warn!(error = %err, "math fault");
        self.state.entry = Entry::Typing(String::new());
        self.state.awaiting_entry = true;
        self.state.pending_op = None;
        self.state.just_resolved = false;
        self.state.fault = Some(err);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
