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

//! Plain-domain constraint resolution.

use crate::domain::Domain;
use crate::errors::ResolveError;
use crate::number::Number;
use crate::parser::compile;

use super::search::{Binding, search};
use super::{Cmp, SearchMode};

/// Imposes a constraint on plain domains, moving their current values.
///
/// Each distinct variable letter of `expression` (in first-occurrence
/// order) binds to the domain at the same position. On success every
/// domain's current index is moved to the first satisfying combination in
/// enumeration order and `Ok(true)` is returned; when no combination
/// satisfies, every domain is left untouched and the result is
/// `Ok(false)`. Compile failures and malformed requests are `Err`.
///
/// Linked domains live inside a [`ConstraintNet`](super::net::ConstraintNet)
/// and resolve through [`ConstraintNet::require`](super::net::ConstraintNet::require);
/// the two variants cannot meet in one call.
pub fn require(
    expression: &str,
    domains: &mut [&mut Domain],
    cmp: Cmp,
    targets: &[Number],
) -> Result<bool, ResolveError> {
    validate_targets(cmp, targets)?;
    let formula = compile(expression)?;
    if formula.variables().len() != domains.len() {
        return Err(ResolveError::ArityMismatch {
            variables: formula.variables().len(),
            domains: domains.len(),
        });
    }
    validate_kinds(domains.iter().map(|d| &**d))?;

    let bindings: Vec<Binding<'_, usize>> = formula
        .variables()
        .iter()
        .enumerate()
        .map(|(position, &letter)| Binding {
            key: position,
            letter,
            domain: &*domains[position],
        })
        .collect();

    let rows = search(&formula, &bindings, cmp, targets, SearchMode::First);
    drop(bindings);

    let Some(assignment) = rows.into_iter().next() else {
        return Ok(false);
    };
    for (position, index) in assignment {
        domains[position].set_current(index);
    }
    Ok(true)
}

/// Validates target arity: at least one, and several only with `!=`.
pub(crate) fn validate_targets(cmp: Cmp, targets: &[Number]) -> Result<(), ResolveError> {
    if targets.is_empty() {
        return Err(ResolveError::MissingTarget);
    }
    if targets.len() > 1 && cmp != Cmp::Ne {
        return Err(ResolveError::SurplusTargets {
            count: targets.len(),
        });
    }
    Ok(())
}

/// Validates that every domain in one call shares a numeric kind.
pub(crate) fn validate_kinds<'a>(
    domains: impl IntoIterator<Item = &'a Domain>,
) -> Result<(), ResolveError> {
    let mut expected = None;
    for domain in domains {
        let kind = domain.kind();
        match expected {
            None => expected = Some(kind),
            Some(first) if first != kind => {
                return Err(ResolveError::MixedKinds {
                    expected: first,
                    found: kind,
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
