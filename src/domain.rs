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

//! Candidate-value domains.
//!
//! A [`Domain`] holds an ordered set of distinct values of one
//! [`NumericKind`] plus an index marking the current value. Constraint
//! resolution moves the current index; it never edits the candidate list.
//! Invariants upheld by every operation:
//!
//! - candidate values are unique;
//! - the current index always addresses a candidate;
//! - the domain holds at least one candidate (the current slot cannot be
//!   removed or overwritten).

use crate::errors::{ConfigError, DomainError};
use crate::number::{EvalError, Number, NumericKind};
use std::cmp::Ordering;
use std::fmt;

/// Integer range specification for generated candidates.
///
/// `Count(n)` generates `0..n`; `Bounds(start, stop)` generates
/// `start..stop`; `Stepped(start, stop, step)` additionally strides by
/// `step`. Stop must exceed start and step must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSpec {
    /// `0, 1, ..., n-1`.
    Count(i64),
    /// `start, start+1, ..., stop-1`.
    Bounds(i64, i64),
    /// `start, start+step, ... < stop`.
    Stepped(i64, i64, i64),
}

impl RangeSpec {
    /// Expands the spec into candidate values.
    fn expand(self) -> Result<Vec<Number>, ConfigError> {
        let (start, stop, step) = match self {
            RangeSpec::Count(n) => {
                if n < 1 {
                    return Err(ConfigError::RangeCount(n));
                }
                (0, n, 1)
            }
            RangeSpec::Bounds(start, stop) => (start, stop, 1),
            RangeSpec::Stepped(start, stop, step) => (start, stop, step),
        };
        if stop <= start {
            return Err(ConfigError::RangeOrder { start, stop });
        }
        if step < 1 {
            return Err(ConfigError::RangeStep(step));
        }

        Ok((start..stop)
            .step_by(step as usize)
            .map(Number::Int)
            .collect())
    }
}

/// An ordered set of distinct same-kind values with one marked current.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    values: Vec<Number>,
    current: usize,
    kind: NumericKind,
}

impl Domain {
    /// Creates a domain from explicit values; the first value is current.
    pub fn new(values: Vec<Number>) -> Result<Self, ConfigError> {
        Self::from_parts(values, None, 0)
    }

    /// Creates a domain from explicit values with an initial current index.
    pub fn with_current(values: Vec<Number>, current: usize) -> Result<Self, ConfigError> {
        Self::from_parts(values, None, current)
    }

    /// Creates an integer domain from a range spec alone.
    pub fn from_range(spec: RangeSpec) -> Result<Self, ConfigError> {
        Self::from_parts(Vec::new(), Some(spec), 0)
    }

    /// Full constructor: explicit values and/or a generated range, plus the
    /// initial current index.
    ///
    /// Generated values precede explicit values; a generated value equal to
    /// an explicit one is dropped (explicit values take precedence). The
    /// current index addresses the merged list.
    pub fn from_parts(
        values: Vec<Number>,
        range: Option<RangeSpec>,
        current: usize,
    ) -> Result<Self, ConfigError> {
        for (i, v) in values.iter().enumerate() {
            if values[..i].contains(v) {
                return Err(ConfigError::DuplicateValue(*v));
            }
        }

        let mut merged = Vec::new();
        if let Some(spec) = range {
            for v in spec.expand()? {
                if !values.contains(&v) {
                    merged.push(v);
                }
            }
        }
        merged.extend(values);

        let Some(first) = merged.first() else {
            return Err(ConfigError::Empty);
        };
        let kind = first.kind();
        for v in &merged {
            if v.kind() != kind {
                return Err(ConfigError::MixedKinds {
                    expected: kind,
                    found: v.kind(),
                });
            }
        }

        if current >= merged.len() {
            return Err(ConfigError::CurrentOutOfRange {
                index: current,
                len: merged.len(),
            });
        }

        Ok(Self {
            values: merged,
            current,
            kind,
        })
    }

    /// Returns the candidate count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a domain holds at least one candidate.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the domain's fixed numeric kind.
    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    /// Returns the current value.
    pub fn current_value(&self) -> Number {
        self.values[self.current]
    }

    /// Returns the current index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the candidate list in index order.
    pub fn values(&self) -> &[Number] {
        &self.values
    }

    /// Returns the candidate at `index`.
    pub fn value_at(&self, index: usize) -> Result<Number, DomainError> {
        self.values
            .get(index)
            .copied()
            .ok_or(DomainError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Returns the index holding `value`.
    pub fn index_of(&self, value: Number) -> Result<usize, DomainError> {
        self.values
            .iter()
            .position(|v| *v == value)
            .ok_or(DomainError::ValueNotFound(value))
    }

    /// Returns whether `value` is among the candidates.
    pub fn contains(&self, value: Number) -> bool {
        self.values.contains(&value)
    }

    /// Appends a new distinct candidate of the domain's kind.
    pub fn append(&mut self, value: Number) -> Result<(), DomainError> {
        if value.kind() != self.kind {
            return Err(DomainError::KindMismatch {
                expected: self.kind,
                found: value.kind(),
            });
        }
        if self.values.contains(&value) {
            return Err(DomainError::DuplicateValue(value));
        }
        self.values.push(value);
        Ok(())
    }

    /// Removes a non-current candidate by value.
    pub fn remove(&mut self, value: Number) -> Result<(), DomainError> {
        let index = self.index_of(value)?;
        if index == self.current {
            return Err(DomainError::ProtectedCurrent { index });
        }
        self.values.remove(index);
        // Keep the current index pointing at the same value.
        if index < self.current {
            self.current -= 1;
        }
        Ok(())
    }

    /// Replaces the candidate in a non-current slot.
    pub fn set_at(&mut self, index: usize, value: Number) -> Result<(), DomainError> {
        if index >= self.values.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        if index == self.current {
            return Err(DomainError::ProtectedCurrent { index });
        }
        if value.kind() != self.kind {
            return Err(DomainError::KindMismatch {
                expected: self.kind,
                found: value.kind(),
            });
        }
        if let Some(existing) = self.values.iter().position(|v| *v == value) {
            if existing != index {
                return Err(DomainError::DuplicateValue(value));
            }
        }
        self.values[index] = value;
        Ok(())
    }

    /// Moves the current index. Engine-internal: resolution commits results
    /// through this, the constraint writer never calls it directly.
    pub(crate) fn set_current(&mut self, index: usize) {
        debug_assert!(index < self.values.len());
        self.current = index;
    }

    /// In-place addition on the current value.
    pub fn checked_add_assign(&mut self, rhs: Number) -> Result<(), DomainError> {
        self.apply_in_place(rhs, Number::try_add)
    }

    /// In-place subtraction on the current value.
    pub fn checked_sub_assign(&mut self, rhs: Number) -> Result<(), DomainError> {
        self.apply_in_place(rhs, Number::try_sub)
    }

    /// In-place multiplication on the current value.
    pub fn checked_mul_assign(&mut self, rhs: Number) -> Result<(), DomainError> {
        self.apply_in_place(rhs, Number::try_mul)
    }

    /// In-place division on the current value.
    ///
    /// Division is true division, so an integer domain rejects this with
    /// `KindChanged` (the quotient is real).
    pub fn checked_div_assign(&mut self, rhs: Number) -> Result<(), DomainError> {
        self.apply_in_place(rhs, Number::try_div)
    }

    /// In-place modulo on the current value.
    pub fn checked_rem_assign(&mut self, rhs: Number) -> Result<(), DomainError> {
        self.apply_in_place(rhs, Number::try_rem)
    }

    /// In-place exponentiation on the current value.
    pub fn checked_pow_assign(&mut self, rhs: Number) -> Result<(), DomainError> {
        self.apply_in_place(rhs, Number::try_pow)
    }

    /// Recomputes the current value through `op`, rejecting results that
    /// change the domain's kind or collide with another candidate.
    fn apply_in_place(
        &mut self,
        rhs: Number,
        op: fn(Number, Number) -> Result<Number, EvalError>,
    ) -> Result<(), DomainError> {
        let result = op(self.current_value(), rhs)?;
        if result.kind() != self.kind {
            return Err(DomainError::KindChanged {
                expected: self.kind,
                found: result.kind(),
            });
        }
        if let Some(existing) = self.values.iter().position(|v| *v == result) {
            if existing != self.current {
                return Err(DomainError::DuplicateValue(result));
            }
        }
        self.values[self.current] = result;
        Ok(())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_value())
    }
}

impl PartialEq<Number> for Domain {
    fn eq(&self, other: &Number) -> bool {
        self.current_value().loose_eq(*other)
    }
}

impl PartialOrd<Number> for Domain {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        self.current_value().partial_cmp_value(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Number> {
        values.iter().copied().map(Number::Int).collect()
    }

    #[test]
    fn construction_validates_inputs() {
        assert_eq!(Domain::new(Vec::new()), Err(ConfigError::Empty));
        assert_eq!(
            Domain::new(vec![Number::Int(1), Number::Real(2.0)]),
            Err(ConfigError::MixedKinds {
                expected: NumericKind::Integer,
                found: NumericKind::Real,
            })
        );
        assert_eq!(
            Domain::new(ints(&[1, 2, 1])),
            Err(ConfigError::DuplicateValue(Number::Int(1)))
        );
        assert_eq!(
            Domain::with_current(ints(&[1, 2]), 2),
            Err(ConfigError::CurrentOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn range_construction() {
        let d = Domain::from_range(RangeSpec::Count(3)).expect("range");
        assert_eq!(d.values(), &ints(&[0, 1, 2])[..]);
        assert_eq!(d.kind(), NumericKind::Integer);

        let d = Domain::from_range(RangeSpec::Stepped(1, 8, 3)).expect("range");
        assert_eq!(d.values(), &ints(&[1, 4, 7])[..]);

        assert_eq!(
            Domain::from_range(RangeSpec::Bounds(5, 5)),
            Err(ConfigError::RangeOrder { start: 5, stop: 5 })
        );
        assert_eq!(
            Domain::from_range(RangeSpec::Stepped(0, 5, 0)),
            Err(ConfigError::RangeStep(0))
        );
    }

    #[test]
    fn explicit_values_take_precedence_over_range() {
        let d = Domain::from_parts(ints(&[2, 9]), Some(RangeSpec::Count(4)), 0).expect("domain");
        // Generated 2 is dropped; explicit values follow the range.
        assert_eq!(d.values(), &ints(&[0, 1, 3, 2, 9])[..]);
        assert_eq!(d.current_value(), Number::Int(0));
    }

    #[test]
    fn append_and_index_round_trip() {
        let mut d = Domain::new(ints(&[1, 2, 3])).expect("domain");
        d.append(Number::Int(7)).expect("append");
        assert_eq!(d.index_of(Number::Int(7)), Ok(3));
        assert_eq!(
            d.append(Number::Int(7)),
            Err(DomainError::DuplicateValue(Number::Int(7)))
        );
        assert_eq!(
            d.append(Number::Real(8.0)),
            Err(DomainError::KindMismatch {
                expected: NumericKind::Integer,
                found: NumericKind::Real,
            })
        );
    }

    #[test]
    fn remove_protects_current_and_tracks_index() {
        let mut d = Domain::with_current(ints(&[1, 2, 3]), 1).expect("domain");
        assert_eq!(
            d.remove(Number::Int(2)),
            Err(DomainError::ProtectedCurrent { index: 1 })
        );
        d.remove(Number::Int(1)).expect("remove");
        // Current still addresses the value 2 after the shift.
        assert_eq!(d.current_value(), Number::Int(2));
        assert_eq!(d.current_index(), 0);
        assert_eq!(
            d.remove(Number::Int(1)),
            Err(DomainError::ValueNotFound(Number::Int(1)))
        );
    }

    #[test]
    fn set_at_protects_current_and_uniqueness() {
        let mut d = Domain::new(ints(&[1, 2, 3])).expect("domain");
        assert_eq!(
            d.set_at(0, Number::Int(9)),
            Err(DomainError::ProtectedCurrent { index: 0 })
        );
        assert_eq!(
            d.set_at(1, Number::Int(3)),
            Err(DomainError::DuplicateValue(Number::Int(3)))
        );
        assert_eq!(
            d.set_at(5, Number::Int(9)),
            Err(DomainError::IndexOutOfRange { index: 5, len: 3 })
        );
        d.set_at(1, Number::Int(9)).expect("set_at");
        assert_eq!(d.values(), &ints(&[1, 9, 3])[..]);
    }

    #[test]
    fn in_place_ops_guard_kind_and_uniqueness() {
        let mut d = Domain::new(ints(&[4, 5])).expect("domain");
        d.checked_add_assign(Number::Int(3)).expect("add");
        assert_eq!(d.current_value(), Number::Int(7));

        // True division would turn the current value real.
        assert_eq!(
            d.checked_div_assign(Number::Int(2)),
            Err(DomainError::KindChanged {
                expected: NumericKind::Integer,
                found: NumericKind::Real,
            })
        );
        assert_eq!(d.current_value(), Number::Int(7));

        // 7 - 2 collides with the other candidate 5.
        assert_eq!(
            d.checked_sub_assign(Number::Int(2)),
            Err(DomainError::DuplicateValue(Number::Int(5)))
        );

        assert_eq!(
            d.checked_div_assign(Number::Int(0)),
            Err(DomainError::Arithmetic(EvalError::DivisionByZero))
        );
    }

    #[test]
    fn comparison_veneer_reads_current_value() {
        let d = Domain::with_current(ints(&[1, 2, 3]), 2).expect("domain");
        assert!(d == Number::Int(3));
        assert!(d > Number::Int(2));
        assert!(d < Number::Real(3.5));
    }
}
