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

//! Formula evaluation and the exhaustive combination search.
//!
//! The search enumerates the Cartesian product of candidate indices across
//! the bound domains, outermost loop first-declared variable, and tests the
//! formula at every fully-bound point. Worst case is the product of all
//! domain lengths; no pruning is performed.

use crate::ast::{BinOp, Expr, ExprKind, Formula};
use crate::domain::Domain;
use crate::number::{EvalError, Number};
use std::collections::{BTreeMap, BTreeSet};

use super::{Cmp, SearchMode, satisfies};

/// One distinct variable letter bound to a domain under an identity key.
///
/// Plain resolves key by argument position, linked resolves by
/// [`DomainId`](super::net::DomainId); the search is agnostic.
pub(crate) struct Binding<'a, K> {
    /// Identity key under which the chosen index is reported.
    pub key: K,
    /// Variable letter this domain stands in for.
    pub letter: char,
    /// The bound domain.
    pub domain: &'a Domain,
}

/// Evaluates an expression tree under a letter-to-value binding.
pub(crate) fn eval_expr(
    expr: &Expr,
    bindings: &BTreeMap<char, Number>,
) -> Result<Number, EvalError> {
    match &expr.kind {
        ExprKind::Number(n) => Ok(Number::Int(*n)),
        ExprKind::Variable(c) => bindings
            .get(c)
            .copied()
            .ok_or(EvalError::UnboundVariable(*c)),
        ExprKind::UnaryNeg(inner) => Ok(eval_expr(inner, bindings)?.negate()),
        ExprKind::Binary { op, left, right } => {
            let l = eval_expr(left, bindings)?;
            let r = eval_expr(right, bindings)?;
            match op {
                BinOp::Add => l.try_add(r),
                BinOp::Sub => l.try_sub(r),
                BinOp::Mul => l.try_mul(r),
                BinOp::Div => l.try_div(r),
                BinOp::Rem => l.try_rem(r),
                BinOp::Pow => l.try_pow(r),
            }
        }
    }
}

/// Enumerates candidate combinations and reports satisfying assignments.
///
/// An assignment maps each identity key to a chosen candidate index. In
/// [`SearchMode::First`] the result holds at most one assignment (the first
/// in enumeration order); in [`SearchMode::All`] it holds every satisfying
/// assignment, deduplicated by the chosen index tuple. An evaluation error
/// at a point (division by zero, unsupported complex operation) marks that
/// point unsatisfying; it is never propagated.
pub(crate) fn search<K: Copy + Ord>(
    formula: &Formula,
    bindings: &[Binding<'_, K>],
    cmp: Cmp,
    targets: &[Number],
    mode: SearchMode,
) -> Vec<BTreeMap<K, usize>> {
    let mut results = Vec::new();
    let mut seen = BTreeSet::new();
    let mut counters = vec![0usize; bindings.len()];

    'points: loop {
        let mut values = BTreeMap::new();
        let mut indices = BTreeMap::new();
        for (slot, binding) in bindings.iter().enumerate() {
            let index = counters[slot];
            values.insert(binding.letter, binding.domain.values()[index]);
            // Two letters bound to the same domain leave the last write.
            indices.insert(binding.key, index);
        }

        if let Ok(value) = eval_expr(&formula.root, &values) {
            if satisfies(cmp, value, targets) {
                if mode == SearchMode::First {
                    return vec![indices];
                }
                if seen.insert(indices.clone()) {
                    results.push(indices);
                }
            }
        }

        // Odometer step: innermost loop is the last-declared variable.
        let mut slot = bindings.len();
        while slot > 0 {
            slot -= 1;
            counters[slot] += 1;
            if counters[slot] < bindings[slot].domain.len() {
                continue 'points;
            }
            counters[slot] = 0;
        }
        break;
    }

    results
}
