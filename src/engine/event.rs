//! Input events and the button-caption mapping.

use crate::core::{BinaryOp, UnaryFn};
use serde::{Deserialize, Serialize};

/// One discrete user action forwarded by the presentation layer.
///
/// Digits carry their value 0..=9; anything above is ignored by the engine.
/// The layout toggle is presentation-only and has no event here.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Event {
    Digit(u8),
    Dot,
    Operator(BinaryOp),
    Equals,
    ClearEntry,
    AllClear,
    Negate,
    Function(UnaryFn),
}

impl Event {
    /// Map a button caption to its event.
    ///
    /// Captions are the literal face-plate labels, mixed case included, so
    /// a front end (or a test) can drive the engine with raw button text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deskcalc::engine::Event;
    /// use deskcalc::core::{BinaryOp, UnaryFn};
    ///
    /// assert_eq!(Event::from_label("7"), Some(Event::Digit(7)));
    /// assert_eq!(Event::from_label("x"), Some(Event::Operator(BinaryOp::Mul)));
    /// assert_eq!(Event::from_label("Cos"), Some(Event::Function(UnaryFn::Cos)));
    /// assert_eq!(Event::from_label("quit"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        if let [digit @ b'0'..=b'9'] = label.as_bytes() {
            return Some(Self::Digit(digit - b'0'));
        }
        let event = match label {
            "." => Self::Dot,
            "+" => Self::Operator(BinaryOp::Add),
            "-" => Self::Operator(BinaryOp::Sub),
            "x" => Self::Operator(BinaryOp::Mul),
            "/" => Self::Operator(BinaryOp::Div),
            "Mod" => Self::Operator(BinaryOp::Mod),
            "=" => Self::Equals,
            "C" => Self::ClearEntry,
            "CE" => Self::AllClear,
            "±" => Self::Negate,
            "√" => Self::Function(UnaryFn::Sqrt),
            "pi" => Self::Function(UnaryFn::Pi),
            "2pi" => Self::Function(UnaryFn::Tau),
            "e" => Self::Function(UnaryFn::E),
            "sin" => Self::Function(UnaryFn::Sin),
            "Cos" => Self::Function(UnaryFn::Cos),
            "tan" => Self::Function(UnaryFn::Tan),
            "Sinh" => Self::Function(UnaryFn::Sinh),
            "Cosh" => Self::Function(UnaryFn::Cosh),
            "Tanh" => Self::Function(UnaryFn::Tanh),
            "log" => Self::Function(UnaryFn::Log),
            "log10" => Self::Function(UnaryFn::Log10),
            "log2" => Self::Function(UnaryFn::Log2),
            "log1p" => Self::Function(UnaryFn::Log1p),
            "exp" => Self::Function(UnaryFn::Exp),
            "expm1" => Self::Function(UnaryFn::Expm1),
            "gamma" => Self::Function(UnaryFn::Lgamma),
            "acosh" => Self::Function(UnaryFn::Acosh),
            "asinh" => Self::Function(UnaryFn::Asinh),
            "deg" => Self::Function(UnaryFn::Degrees),
            _ => return None,
        };
        Some(event)
    }
}
