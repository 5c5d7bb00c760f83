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

//! Exhaustive constraint resolution over finite candidate-value domains.
//!
//! This crate provides:
//! - [`Domain`]: an ordered list of homogeneous numeric candidates with one
//!   designated current value.
//! - A single-character expression compiler (`compile`) with implicit
//!   multiplication and caret diagnostics.
//! - [`require`]: brute-force resolution binding expression variables to
//!   domains and committing the first satisfying assignment atomically.
//! - [`ConstraintNet`]: linked domains whose satisfied constraints are
//!   remembered and re-imposed on every later resolution.
//!
//! # Pipeline
//!
//! 1. Sanitize and parse an expression into a [`Formula`] with source spans.
//! 2. Bind each variable letter (first-occurrence order) to a domain.
//! 3. Enumerate the candidate cross-product, first-bound variable outermost.
//! 4. Commit the satisfying assignment, or leave every domain untouched.
//!
//! # Numeric Tower
//!
//! Candidates are [`Number`] values over three kinds: `i64` integers, `f64`
//! reals, and `num_complex::Complex64`. A domain holds one kind only, and
//! mixed-kind resolution is rejected up front. Division is always true
//! division; integer overflow widens to real.

mod ast;
mod diagnostics;
mod domain;
mod errors;
mod number;
mod parser;
mod solver;

pub use ast::{BinOp, Expr, ExprKind, Formula, SourceSpan};
pub use diagnostics::CompileError;
pub use domain::{Domain, RangeSpec};
pub use errors::{ConfigError, DomainError, ResolveError};
pub use number::{EvalError, Number, NumericKind};
pub use parser::compile;
pub use solver::net::{ConstraintNet, DomainId};
pub use solver::resolve::require;
pub use solver::{Cmp, UnknownOperator};

#[cfg(test)]
mod tests;
