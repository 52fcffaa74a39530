//! Binary operators and unary scientific functions with typed math.
//!
//! Every application returns a `Result` so zero divisors, domain
//! violations, and overflow to non-finite values feed the engine's error
//! transition instead of putting NaN or infinity on the display.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::f64::consts;

/// The five binary operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Symbol used in rendered history records.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "x",
            Self::Div => "÷",
            Self::Mod => "mod",
        }
    }

    /// Apply the operator.
    ///
    /// Division and modulo by zero are reported as errors rather than
    /// producing infinity or NaN. Modulo is floored: the result carries the
    /// sign of the divisor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deskcalc::core::BinaryOp;
    ///
    /// assert_eq!(BinaryOp::Add.apply(3.0, 4.0), Ok(7.0));
    /// assert_eq!(BinaryOp::Mod.apply(-7.0, 3.0), Ok(2.0));
    /// assert!(BinaryOp::Div.apply(10.0, 0.0).is_err());
    /// ```
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div => {
                if rhs == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Self::Mod => {
                if rhs == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(lhs - rhs * (lhs / rhs).floor())
                }
            }
        }
    }
}

/// Unary scientific functions and constants.
///
/// The circular and hyperbolic trig functions both convert their argument
/// from degrees to radians first: this engine treats every trig-style input
/// as degrees, hyperbolics included.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum UnaryFn {
    Pi,
    Tau,
    E,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Log,
    Log10,
    Log2,
    Log1p,
    Exp,
    Expm1,
    Lgamma,
    Acosh,
    Asinh,
    Degrees,
    Sqrt,
}

impl UnaryFn {
    /// True for the constants, which consume no input.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Pi | Self::Tau | Self::E)
    }

    /// Function name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::Tau => "tau",
            Self::E => "e",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Log1p => "log1p",
            Self::Exp => "exp",
            Self::Expm1 => "expm1",
            Self::Lgamma => "lgamma",
            Self::Acosh => "acosh",
            Self::Asinh => "asinh",
            Self::Degrees => "degrees",
            Self::Sqrt => "sqrt",
        }
    }

    /// Apply the function to the displayed value.
    ///
    /// Constants ignore their input. Any result that is not a finite number
    /// (log of a non-positive value, acosh below 1, exp overflow, ...) is a
    /// domain error.
    pub fn apply(&self, x: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Pi => consts::PI,
            Self::Tau => consts::TAU,
            Self::E => consts::E,
            Self::Sin => x.to_radians().sin(),
            Self::Cos => x.to_radians().cos(),
            Self::Tan => x.to_radians().tan(),
            Self::Sinh => x.to_radians().sinh(),
            Self::Cosh => x.to_radians().cosh(),
            Self::Tanh => x.to_radians().tanh(),
            Self::Log => {
                if x <= 0.0 {
                    return Err(self.domain_error());
                }
                x.ln()
            }
            Self::Log10 => {
                if x <= 0.0 {
                    return Err(self.domain_error());
                }
                x.log10()
            }
            Self::Log2 => {
                if x <= 0.0 {
                    return Err(self.domain_error());
                }
                x.log2()
            }
            Self::Log1p => {
                if x <= -1.0 {
                    return Err(self.domain_error());
                }
                x.ln_1p()
            }
            Self::Exp => x.exp(),
            Self::Expm1 => x.exp_m1(),
            // std has no log-gamma
            Self::Lgamma => {
                if x <= 0.0 && x.fract() == 0.0 {
                    return Err(self.domain_error());
                }
                libm::lgamma(x)
            }
            Self::Acosh => {
                if x < 1.0 {
                    return Err(self.domain_error());
                }
                x.acosh()
            }
            Self::Asinh => x.asinh(),
            Self::Degrees => x.to_degrees(),
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(self.domain_error());
                }
                x.sqrt()
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.domain_error())
        }
    }

    fn domain_error(&self) -> CalcError {
        CalcError::Domain {
            function: self.name().to_string(),
        }
    }
}
