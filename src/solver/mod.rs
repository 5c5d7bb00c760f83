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

//! Constraint resolution: comparison operators, the exhaustive combination
//! search, the plain-domain resolver, and the linked constraint net.

pub mod net;
pub mod resolve;
pub(crate) mod search;

use crate::number::Number;
use std::fmt;
use std::str::FromStr;

/// Comparison operator of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    /// `=` — equal to the single target.
    Eq,
    /// `!=` — unequal to every target simultaneously.
    Ne,
    /// `<` — less than the single target.
    Lt,
    /// `<=` — at most the single target.
    Le,
    /// `>` — greater than the single target.
    Gt,
    /// `>=` — at least the single target.
    Ge,
}

impl Cmp {
    /// Returns the operator's written symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Cmp::Eq => "=",
            Cmp::Ne => "!=",
            Cmp::Lt => "<",
            Cmp::Le => "<=",
            Cmp::Gt => ">",
            Cmp::Ge => ">=",
        }
    }
}

impl fmt::Display for Cmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error for a comparison symbol outside the six accepted ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown comparison operator '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl FromStr for Cmp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Cmp::Eq),
            "!=" => Ok(Cmp::Ne),
            "<" => Ok(Cmp::Lt),
            "<=" => Ok(Cmp::Le),
            ">" => Ok(Cmp::Gt),
            ">=" => Ok(Cmp::Ge),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

/// Search termination mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchMode {
    /// Stop at the first satisfying assignment in enumeration order.
    First,
    /// Collect every satisfying assignment.
    All,
}

/// Tests a formula result against the constraint targets.
///
/// `!=` demands inequality against every target at once; the other
/// operators compare against the single target (validated upstream).
/// Ordered comparison involving a complex value is unsatisfied.
pub(crate) fn satisfies(cmp: Cmp, value: Number, targets: &[Number]) -> bool {
    use std::cmp::Ordering;

    match cmp {
        Cmp::Ne => targets.iter().all(|t| !value.loose_eq(*t)),
        Cmp::Eq => value.loose_eq(targets[0]),
        Cmp::Lt => value.partial_cmp_value(targets[0]) == Some(Ordering::Less),
        Cmp::Gt => value.partial_cmp_value(targets[0]) == Some(Ordering::Greater),
        Cmp::Le => matches!(
            value.partial_cmp_value(targets[0]),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Cmp::Ge => matches!(
            value.partial_cmp_value(targets[0]),
            Some(Ordering::Greater | Ordering::Equal)
        ),
    }
}
