//! The pending entry: the value being typed or just computed.

use super::error::CalcError;
use super::format::format_number;
use serde::{Deserialize, Serialize};

/// The pending entry, in one of two sub-states.
///
/// `Typing` holds text built one keystroke at a time and is displayed
/// verbatim. `Resolved` holds a number produced by `=`, a unary function, a
/// constant, or negate. Typing a digit onto a resolved value resumes typing
/// on its formatted text.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::Entry;
///
/// let mut entry = Entry::starting_with('1');
/// entry.push('2');
/// entry.push('.');
/// entry.push('5');
/// entry.push('.'); // duplicate dot, silently dropped
/// assert_eq!(entry.text(), "12.5");
/// assert_eq!(entry.value(), Ok(12.5));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    Typing(String),
    Resolved(f64),
}

impl Entry {
    /// Fresh entry showing `"0"`.
    pub fn zero() -> Self {
        Self::Typing("0".to_string())
    }

    /// Entry holding exactly one keystroke.
    ///
    /// A lone `'.'` stays a lone dot; it only becomes an error if consumed
    /// before any digit arrives.
    pub fn starting_with(token: char) -> Self {
        Self::Typing(token.to_string())
    }

    /// Append a digit or dot keystroke.
    ///
    /// A `'.'` is silently dropped when the text already contains one.
    pub fn push(&mut self, token: char) {
        let mut text = match self {
            Self::Typing(text) => std::mem::take(text),
            Self::Resolved(value) => format_number(*value),
        };
        if token != '.' || !text.contains('.') {
            text.push(token);
        }
        *self = Self::Typing(text);
    }

    /// Text shown on the display.
    pub fn text(&self) -> String {
        match self {
            Self::Typing(text) => text.clone(),
            Self::Resolved(value) => format_number(*value),
        }
    }

    /// Parse the entry for a consuming operation.
    ///
    /// A `Resolved` entry never fails. A `Typing` string must parse as a
    /// finite decimal; an empty or malformed entry is a [`CalcError::Parse`],
    /// never a silent default.
    pub fn value(&self) -> Result<f64, CalcError> {
        match self {
            Self::Resolved(value) => Ok(*value),
            Self::Typing(text) => match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(CalcError::Parse {
                    entry: text.clone(),
                }),
            },
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystrokes_concatenate() {
        let mut entry = Entry::starting_with('4');
        entry.push('2');
        assert_eq!(entry.text(), "42");
        assert_eq!(entry.value(), Ok(42.0));
    }

    #[test]
    fn duplicate_dot_is_dropped() {
        let mut entry = Entry::starting_with('1');
        entry.push('.');
        entry.push('5');
        entry.push('.');
        entry.push('5');
        assert_eq!(entry.text(), "1.55");
    }

    #[test]
    fn lone_dot_fails_to_parse() {
        let entry = Entry::starting_with('.');
        assert_eq!(entry.text(), ".");
        assert_eq!(
            entry.value(),
            Err(CalcError::Parse {
                entry: ".".to_string()
            })
        );
    }

    #[test]
    fn empty_entry_fails_to_parse() {
        let entry = Entry::Typing(String::new());
        assert!(entry.value().is_err());
    }

    #[test]
    fn trailing_dot_still_parses() {
        let mut entry = Entry::starting_with('3');
        entry.push('.');
        assert_eq!(entry.value(), Ok(3.0));
    }

    #[test]
    fn resolved_value_never_fails() {
        let entry = Entry::Resolved(-2.5);
        assert_eq!(entry.value(), Ok(-2.5));
        assert_eq!(entry.text(), "-2.5");
    }

    #[test]
    fn digits_append_to_formatted_resolved_text() {
        let mut entry = Entry::Resolved(7.0);
        entry.push('5');
        assert_eq!(entry.text(), "75");
    }

    #[test]
    fn dot_dedup_sees_the_resolved_fraction() {
        let mut entry = Entry::Resolved(0.5);
        entry.push('.');
        assert_eq!(entry.text(), "0.5");
    }

    #[test]
    fn entry_serializes_correctly() {
        let entry = Entry::Typing("12.5".to_string());
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
