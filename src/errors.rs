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

//! Error types surfaced by construction, mutation, and resolve APIs.
//!
//! Failure to find a satisfying assignment is NOT an error: resolve reports
//! it as `Ok(false)`. The enums here cover exceptional inputs only.

use crate::diagnostics::CompileError;
use crate::number::{EvalError, Number, NumericKind};
use crate::solver::net::DomainId;
use std::fmt;

/// Errors produced by domain constructors.
///
/// No partial domain is created: constructors validate fully before
/// allocating the final candidate list.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Neither explicit values nor a range spec produced any candidate.
    Empty,
    /// A candidate's kind differs from the first candidate's kind.
    MixedKinds {
        /// Kind established by the first candidate.
        expected: NumericKind,
        /// Offending kind.
        found: NumericKind,
    },
    /// The same value was given twice.
    DuplicateValue(Number),
    /// The initial current index does not address a candidate.
    CurrentOutOfRange {
        /// Requested index.
        index: usize,
        /// Candidate count.
        len: usize,
    },
    /// Range stop does not exceed range start.
    RangeOrder {
        /// Range start.
        start: i64,
        /// Range stop.
        stop: i64,
    },
    /// Range step is below 1.
    RangeStep(i64),
    /// Range count is below 1.
    RangeCount(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Empty => write!(f, "domain needs at least one candidate value"),
            ConfigError::MixedKinds { expected, found } => {
                write!(f, "candidate values must all be {expected}, found {found}")
            }
            ConfigError::DuplicateValue(v) => {
                write!(f, "domain cannot hold duplicate value {v}")
            }
            ConfigError::CurrentOutOfRange { index, len } => {
                write!(f, "current index {index} out of range for {len} candidates")
            }
            ConfigError::RangeOrder { start, stop } => {
                write!(f, "range stop {stop} must exceed start {start}")
            }
            ConfigError::RangeStep(step) => write!(f, "range step {step} must be at least 1"),
            ConfigError::RangeCount(count) => write!(f, "range count {count} must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors produced by per-call domain mutators.
///
/// The domain is left unchanged on every failure.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Value kind differs from the domain's fixed kind.
    KindMismatch {
        /// The domain's kind.
        expected: NumericKind,
        /// The value's kind.
        found: NumericKind,
    },
    /// Value already present among the candidates.
    DuplicateValue(Number),
    /// The current slot cannot be removed or overwritten.
    ProtectedCurrent {
        /// The current index.
        index: usize,
    },
    /// Index does not address a candidate.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Candidate count.
        len: usize,
    },
    /// Value absent from the candidates.
    ValueNotFound(Number),
    /// An in-place operation would change the current value's kind.
    KindChanged {
        /// The domain's fixed kind.
        expected: NumericKind,
        /// Kind of the rejected result.
        found: NumericKind,
    },
    /// An in-place operation failed arithmetically (division by zero).
    Arithmetic(EvalError),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::KindMismatch { expected, found } => {
                write!(f, "domain holds {expected} values, value given was {found}")
            }
            DomainError::DuplicateValue(v) => write!(f, "value {v} already in domain"),
            DomainError::ProtectedCurrent { index } => {
                write!(f, "current candidate (index {index}) cannot be removed or overwritten")
            }
            DomainError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} candidates")
            }
            DomainError::ValueNotFound(v) => write!(f, "value {v} not in domain"),
            DomainError::KindChanged { expected, found } => {
                write!(f, "operation result is {found}, domain kind stays {expected}")
            }
            DomainError::Arithmetic(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<EvalError> for DomainError {
    fn from(value: EvalError) -> Self {
        DomainError::Arithmetic(value)
    }
}

/// Errors produced by resolve calls for exceptional inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The expression failed to compile.
    Compile(CompileError),
    /// Distinct variable letter count differs from the domain count.
    ArityMismatch {
        /// Distinct letters in the expression.
        variables: usize,
        /// Domains passed by the caller.
        domains: usize,
    },
    /// No target number was given.
    MissingTarget,
    /// More than one target with an operator other than `!=`.
    SurplusTargets {
        /// Number of targets given.
        count: usize,
    },
    /// The domains passed in one call hold differing numeric kinds.
    MixedKinds {
        /// Kind of the first domain.
        expected: NumericKind,
        /// Offending kind.
        found: NumericKind,
    },
    /// A domain handle was not issued by this constraint net.
    UnknownDomain(DomainId),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Compile(err) => write!(f, "{err}"),
            ResolveError::ArityMismatch { variables, domains } => write!(
                f,
                "expression has {variables} variable(s), but {domains} domain(s) were passed"
            ),
            ResolveError::MissingTarget => write!(f, "at least one target number is required"),
            ResolveError::SurplusTargets { count } => {
                write!(f, "{count} targets given, only '!=' accepts more than one")
            }
            ResolveError::MixedKinds { expected, found } => write!(
                f,
                "domains in one constraint must share a kind: {expected} vs {found}"
            ),
            ResolveError::UnknownDomain(id) => {
                write!(f, "domain handle {id} was not issued by this net")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<CompileError> for ResolveError {
    fn from(value: CompileError) -> Self {
        ResolveError::Compile(value)
    }
}
