/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Numeric kinds and checked arithmetic.
//!
//! A [`Domain`](crate::Domain) fixes one [`NumericKind`] at creation; every
//! candidate keeps that kind. During formula evaluation the three kinds mix
//! freely, promoting integer to real to complex, and failures (division by
//! zero, unsupported complex operations) surface as [`EvalError`] which the
//! combination search absorbs as "this point does not satisfy".

use num_complex::Complex64;
use std::cmp::Ordering;
use std::fmt;

/// Numeric kind of a domain, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// Signed integers (`i64`).
    Integer,
    /// Reals (`f64`).
    Real,
    /// Complex numbers (`num_complex::Complex64`).
    Complex,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => write!(f, "integer"),
            NumericKind::Real => write!(f, "real"),
            NumericKind::Complex => write!(f, "complex"),
        }
    }
}

/// Evaluation failure during formula arithmetic.
///
/// Never surfaced through a resolve call: the search treats a failing
/// candidate point as unsatisfying and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Division or modulo by zero.
    DivisionByZero,
    /// Operation with no definition for the operand kinds (complex modulo).
    Unsupported,
    /// A variable letter had no bound value.
    UnboundVariable(char),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::Unsupported => write!(f, "operation not defined for operand kinds"),
            EvalError::UnboundVariable(c) => write!(f, "variable '{c}' is not bound"),
        }
    }
}

impl std::error::Error for EvalError {}

/// A single numeric value of one of the three kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer value.
    Int(i64),
    /// Real value.
    Real(f64),
    /// Complex value.
    Complex(Complex64),
}

impl Number {
    /// Returns the kind of this value.
    pub fn kind(&self) -> NumericKind {
        match self {
            Number::Int(_) => NumericKind::Integer,
            Number::Real(_) => NumericKind::Real,
            Number::Complex(_) => NumericKind::Complex,
        }
    }

    /// Checked addition with promotion. Integer overflow widens to real.
    pub fn try_add(self, rhs: Number) -> Result<Number, EvalError> {
        Ok(match promote(self, rhs) {
            Pair::Int(a, b) => match a.checked_add(b) {
                Some(v) => Number::Int(v),
                None => Number::Real(a as f64 + b as f64),
            },
            Pair::Real(a, b) => Number::Real(a + b),
            Pair::Complex(a, b) => Number::Complex(a + b),
        })
    }

    /// Checked subtraction with promotion. Integer overflow widens to real.
    pub fn try_sub(self, rhs: Number) -> Result<Number, EvalError> {
        Ok(match promote(self, rhs) {
            Pair::Int(a, b) => match a.checked_sub(b) {
                Some(v) => Number::Int(v),
                None => Number::Real(a as f64 - b as f64),
            },
            Pair::Real(a, b) => Number::Real(a - b),
            Pair::Complex(a, b) => Number::Complex(a - b),
        })
    }

    /// Checked multiplication with promotion. Integer overflow widens to real.
    pub fn try_mul(self, rhs: Number) -> Result<Number, EvalError> {
        Ok(match promote(self, rhs) {
            Pair::Int(a, b) => match a.checked_mul(b) {
                Some(v) => Number::Int(v),
                None => Number::Real(a as f64 * b as f64),
            },
            Pair::Real(a, b) => Number::Real(a * b),
            Pair::Complex(a, b) => Number::Complex(a * b),
        })
    }

    /// True division with promotion.
    ///
    /// Integer operands produce a real quotient (`10/4` is `2.5`), so an
    /// integer domain rejects in-place division with `KindChanged` unless
    /// the quotient is re-admitted as a real elsewhere.
    pub fn try_div(self, rhs: Number) -> Result<Number, EvalError> {
        match promote(self, rhs) {
            Pair::Int(a, b) => {
                if b == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(Number::Real(a as f64 / b as f64))
                }
            }
            Pair::Real(a, b) => {
                if b == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(Number::Real(a / b))
                }
            }
            Pair::Complex(a, b) => {
                if b.norm_sqr() == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(Number::Complex(a / b))
                }
            }
        }
    }

    /// Modulo with promotion; the result carries the divisor's sign.
    ///
    /// Undefined for complex operands.
    pub fn try_rem(self, rhs: Number) -> Result<Number, EvalError> {
        match promote(self, rhs) {
            Pair::Int(a, b) => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                let r = a % b;
                let r = if r != 0 && (r < 0) != (b < 0) { r + b } else { r };
                Ok(Number::Int(r))
            }
            Pair::Real(a, b) => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                let r = a % b;
                let r = if r != 0.0 && (r < 0.0) != (b < 0.0) {
                    r + b
                } else {
                    r
                };
                Ok(Number::Real(r))
            }
            Pair::Complex(..) => Err(EvalError::Unsupported),
        }
    }

    /// Exponentiation with promotion.
    ///
    /// A negative integer exponent produces a real result; zero raised to a
    /// negative power is division by zero.
    pub fn try_pow(self, rhs: Number) -> Result<Number, EvalError> {
        match promote(self, rhs) {
            Pair::Int(a, b) => {
                if a == 0 && b < 0 {
                    return Err(EvalError::DivisionByZero);
                }
                if b >= 0 {
                    if let Ok(exp) = u32::try_from(b) {
                        if let Some(v) = a.checked_pow(exp) {
                            return Ok(Number::Int(v));
                        }
                    }
                }
                Ok(Number::Real((a as f64).powf(b as f64)))
            }
            Pair::Real(a, b) => {
                if a == 0.0 && b < 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(Number::Real(a.powf(b)))
            }
            Pair::Complex(a, b) => Ok(Number::Complex(a.powc(b))),
        }
    }

    /// Negation. `i64::MIN` widens to real instead of overflowing.
    pub fn negate(self) -> Number {
        match self {
            Number::Int(v) => match v.checked_neg() {
                Some(n) => Number::Int(n),
                None => Number::Real(-(v as f64)),
            },
            Number::Real(v) => Number::Real(-v),
            Number::Complex(v) => Number::Complex(-v),
        }
    }

    /// Cross-kind equality: `3`, `3.0`, and `3+0i` are all equal.
    pub fn loose_eq(self, other: Number) -> bool {
        match promote(self, other) {
            Pair::Int(a, b) => a == b,
            Pair::Real(a, b) => a == b,
            Pair::Complex(a, b) => a == b,
        }
    }

    /// Cross-kind ordering. Complex values are unordered.
    pub fn partial_cmp_value(self, other: Number) -> Option<Ordering> {
        match promote(self, other) {
            Pair::Int(a, b) => Some(a.cmp(&b)),
            Pair::Real(a, b) => a.partial_cmp(&b),
            Pair::Complex(..) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Real(v) => write!(f, "{v}"),
            Number::Complex(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl From<Complex64> for Number {
    fn from(value: Complex64) -> Self {
        Number::Complex(value)
    }
}

/// A pair of operands lifted to their common kind.
enum Pair {
    Int(i64, i64),
    Real(f64, f64),
    Complex(Complex64, Complex64),
}

/// Lifts two values to their widest common kind (integer < real < complex).
fn promote(a: Number, b: Number) -> Pair {
    use Number::{Complex, Int, Real};
    match (a, b) {
        (Int(x), Int(y)) => Pair::Int(x, y),
        (Int(x), Real(y)) => Pair::Real(x as f64, y),
        (Real(x), Int(y)) => Pair::Real(x, y as f64),
        (Real(x), Real(y)) => Pair::Real(x, y),
        (Complex(x), Complex(y)) => Pair::Complex(x, y),
        (Complex(x), Int(y)) => Pair::Complex(x, Complex64::new(y as f64, 0.0)),
        (Complex(x), Real(y)) => Pair::Complex(x, Complex64::new(y, 0.0)),
        (Int(x), Complex(y)) => Pair::Complex(Complex64::new(x as f64, 0.0), y),
        (Real(x), Complex(y)) => Pair::Complex(Complex64::new(x, 0.0), y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_division_is_true_division() {
        let v = Number::Int(10).try_div(Number::Int(4)).expect("div");
        assert_eq!(v, Number::Real(2.5));
        assert_eq!(v.kind(), NumericKind::Real);
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            Number::Int(1).try_div(Number::Int(0)),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Number::Real(1.0).try_rem(Number::Real(0.0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn modulo_follows_divisor_sign() {
        assert_eq!(
            Number::Int(-7).try_rem(Number::Int(3)),
            Ok(Number::Int(2))
        );
        assert_eq!(
            Number::Int(7).try_rem(Number::Int(-3)),
            Ok(Number::Int(-2))
        );
    }

    #[test]
    fn complex_modulo_is_unsupported() {
        let c = Number::Complex(Complex64::new(1.0, 2.0));
        assert_eq!(c.try_rem(Number::Int(2)), Err(EvalError::Unsupported));
    }

    #[test]
    fn negative_exponent_widens_to_real() {
        assert_eq!(
            Number::Int(2).try_pow(Number::Int(-1)),
            Ok(Number::Real(0.5))
        );
        assert_eq!(
            Number::Int(0).try_pow(Number::Int(-1)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn integer_overflow_widens_to_real() {
        let v = Number::Int(i64::MAX)
            .try_add(Number::Int(1))
            .expect("add");
        assert_eq!(v.kind(), NumericKind::Real);
    }

    #[test]
    fn loose_equality_crosses_kinds() {
        assert!(Number::Int(3).loose_eq(Number::Real(3.0)));
        assert!(Number::Real(3.0).loose_eq(Number::Complex(Complex64::new(3.0, 0.0))));
        assert!(!Number::Int(3).loose_eq(Number::Complex(Complex64::new(3.0, 1.0))));
    }

    #[test]
    fn complex_values_are_unordered() {
        let c = Number::Complex(Complex64::new(1.0, 0.0));
        assert_eq!(c.partial_cmp_value(Number::Int(2)), None);
        assert_eq!(
            Number::Int(1).partial_cmp_value(Number::Int(2)),
            Some(Ordering::Less)
        );
    }
}
