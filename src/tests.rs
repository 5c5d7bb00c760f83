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

//! Crate unit tests.

use super::*;
use num_complex::Complex64;

fn ints(values: &[i64]) -> Domain {
    Domain::new(values.iter().copied().map(Number::Int).collect()).expect("integer domain")
}

fn reals(values: &[f64]) -> Domain {
    Domain::new(values.iter().copied().map(Number::Real).collect()).expect("real domain")
}

fn first_caret_column(pointer: &str) -> Option<usize> {
    pointer.chars().position(|ch| ch == '^').map(|idx| idx + 1)
}

#[test]
fn resolves_first_assignment_in_declaration_order() {
    let mut a = ints(&[1, 2, 3, 4, 5]);
    let mut b = ints(&[1, 2, 3, 4, 5]);

    let ok = require("x + y", &mut [&mut a, &mut b], Cmp::Eq, &[Number::Int(7)])
        .expect("resolve should succeed");
    assert!(ok);
    // With the first-bound variable outermost, x=2/y=5 precedes x=3/y=4.
    assert_eq!(a.current_value(), Number::Int(2));
    assert_eq!(b.current_value(), Number::Int(5));
}

#[test]
fn failed_resolve_leaves_domains_untouched() {
    let mut a = Domain::with_current(
        vec![Number::Int(1), Number::Int(2), Number::Int(3)],
        2,
    )
    .expect("domain");
    let mut b = ints(&[1, 2, 3]);

    let ok = require("x + y", &mut [&mut a, &mut b], Cmp::Eq, &[Number::Int(100)])
        .expect("resolve should not error");
    assert!(!ok);
    assert_eq!(a.current_index(), 2);
    assert_eq!(b.current_index(), 0);
}

#[test]
fn division_by_zero_candidates_are_skipped() {
    let mut x = ints(&[0, 1, 2, 3]);

    let ok = require("10 / x", &mut [&mut x], Cmp::Eq, &[Number::Int(5)])
        .expect("resolve should succeed");
    assert!(ok);
    assert_eq!(x.current_value(), Number::Int(2));
}

#[test]
fn integer_division_is_true_division() {
    // 7 / 2 is 3.5, not 3, so equality against 3 never holds.
    let mut x = ints(&[7]);
    let ok = require("x / 2", &mut [&mut x], Cmp::Eq, &[Number::Int(3)])
        .expect("resolve should not error");
    assert!(!ok);

    let ok = require("x / 2", &mut [&mut x], Cmp::Eq, &[Number::Real(3.5)])
        .expect("resolve should succeed");
    assert!(ok);
}

#[test]
fn unequal_demands_distance_from_every_target() {
    let mut x = ints(&[1, 2, 3, 4, 5]);

    let targets = [Number::Int(1), Number::Int(2), Number::Int(3)];
    let ok = require("x", &mut [&mut x], Cmp::Ne, &targets).expect("resolve should succeed");
    assert!(ok);
    assert_eq!(x.current_value(), Number::Int(4));
}

#[test]
fn multiple_targets_require_unequal() {
    let mut x = ints(&[1, 2]);
    let err = require(
        "x",
        &mut [&mut x],
        Cmp::Eq,
        &[Number::Int(1), Number::Int(2)],
    )
    .expect_err("surplus targets");
    assert_eq!(err, ResolveError::SurplusTargets { count: 2 });

    let err = require("x", &mut [&mut x], Cmp::Lt, &[]).expect_err("missing target");
    assert_eq!(err, ResolveError::MissingTarget);
}

#[test]
fn arity_mismatch_is_rejected() {
    let mut x = ints(&[1, 2]);
    let err = require("x + y", &mut [&mut x], Cmp::Eq, &[Number::Int(3)])
        .expect_err("one domain for two variables");
    assert_eq!(
        err,
        ResolveError::ArityMismatch {
            variables: 2,
            domains: 1
        }
    );
}

#[test]
fn mixed_kind_resolution_is_rejected() {
    let mut a = ints(&[1, 2]);
    let mut b = reals(&[1.0, 2.0]);
    let err = require("x + y", &mut [&mut a, &mut b], Cmp::Eq, &[Number::Int(3)])
        .expect_err("mixed kinds");
    assert_eq!(
        err,
        ResolveError::MixedKinds {
            expected: NumericKind::Integer,
            found: NumericKind::Real,
        }
    );
}

#[test]
fn implicit_multiplication_resolves_end_to_end() {
    let mut x = ints(&[1, 2, 3, 4]);
    let ok = require("2x + 1", &mut [&mut x], Cmp::Eq, &[Number::Int(7)])
        .expect("resolve should succeed");
    assert!(ok);
    assert_eq!(x.current_value(), Number::Int(3));
}

#[test]
fn negated_power_binds_tighter_than_negation() {
    // -x^2 parses as -(x^2).
    let mut x = ints(&[1, 2, 3]);
    let ok = require("-x^2", &mut [&mut x], Cmp::Eq, &[Number::Int(-9)])
        .expect("resolve should succeed");
    assert!(ok);
    assert_eq!(x.current_value(), Number::Int(3));
}

#[test]
fn repeated_letter_is_one_variable() {
    let mut x = ints(&[1, 2, 3, 4]);
    let ok = require("x * x", &mut [&mut x], Cmp::Eq, &[Number::Int(9)])
        .expect("resolve should succeed");
    assert!(ok);
    assert_eq!(x.current_value(), Number::Int(3));
}

#[test]
fn ordered_comparisons_move_the_current_value() {
    let mut x = Domain::from_range(RangeSpec::Bounds(0, 10)).expect("range domain");
    assert_eq!(x.current_value(), Number::Int(0));

    assert!(require("x", &mut [&mut x], Cmp::Ge, &[Number::Int(7)]).expect("resolve"));
    assert_eq!(x.current_value(), Number::Int(7));

    assert!(require("x", &mut [&mut x], Cmp::Lt, &[Number::Int(3)]).expect("resolve"));
    assert_eq!(x.current_value(), Number::Int(0));
}

#[test]
fn complex_domains_support_equality_only() {
    let c = |re: f64, im: f64| Number::Complex(Complex64::new(re, im));
    let mut z = Domain::new(vec![c(1.0, 1.0), c(2.0, -1.0)]).expect("complex domain");

    let ok = require("z * z", &mut [&mut z], Cmp::Eq, &[c(3.0, -4.0)]).expect("resolve");
    assert!(ok);
    assert_eq!(z.current_value(), c(2.0, -1.0));

    // Complex values have no ordering; the search simply finds nothing.
    let ok = require("z", &mut [&mut z], Cmp::Lt, &[c(10.0, 0.0)]).expect("resolve");
    assert!(!ok);
    assert_eq!(z.current_value(), c(2.0, -1.0));
}

#[test]
fn real_domains_resolve_with_loose_integer_targets() {
    let mut x = reals(&[0.5, 1.5, 2.0]);
    let ok = require("2x", &mut [&mut x], Cmp::Eq, &[Number::Int(3)]).expect("resolve");
    assert!(ok);
    assert_eq!(x.current_value(), Number::Real(1.5));
}

#[test]
fn range_and_explicit_values_merge_without_duplicates() {
    let domain = Domain::from_parts(
        vec![Number::Int(2), Number::Int(9)],
        Some(RangeSpec::Stepped(0, 5, 2)),
        0,
    )
    .expect("merged domain");
    // Generated 0, 2, 4 with the duplicate 2 deferred to the explicit list.
    assert_eq!(
        domain.values(),
        &[
            Number::Int(0),
            Number::Int(4),
            Number::Int(2),
            Number::Int(9)
        ]
    );
}

#[test]
fn in_place_arithmetic_rewrites_the_current_slot() {
    let mut d = Domain::with_current(
        vec![Number::Int(10), Number::Int(20), Number::Int(30)],
        1,
    )
    .expect("domain");

    d.checked_add_assign(Number::Int(5)).expect("shift");
    assert_eq!(d.values(), &[Number::Int(10), Number::Int(25), Number::Int(30)]);
    assert_eq!(d.current_value(), Number::Int(25));

    // True division takes the integer candidate to a real, changing the kind.
    let err = d.checked_div_assign(Number::Int(2)).expect_err("kind change");
    assert_eq!(
        err,
        DomainError::KindChanged {
            expected: NumericKind::Integer,
            found: NumericKind::Real,
        }
    );
    // Nothing was written.
    assert_eq!(d.current_value(), Number::Int(25));
}

#[test]
fn compile_reports_caret_for_invalid_character() {
    let err = compile("x + &y").expect_err("invalid character");
    assert_eq!(err.column, 5);
    assert_eq!(err.snippet, "x + &y");
    assert_eq!(first_caret_column(&err.pointer), Some(5));
    assert!(err.to_string().contains("column 5"));
}

#[test]
fn compile_rejects_space_separated_operands() {
    // Implicit multiplication never crosses whitespace.
    assert!(compile("2 x").is_err());
    assert!(compile("x y").is_err());
    assert!(compile("2x").is_ok());
}

#[test]
fn compile_error_from_resolver_carries_diagnostics() {
    let mut x = ints(&[1]);
    let err = require("x +", &mut [&mut x], Cmp::Eq, &[Number::Int(1)])
        .expect_err("malformed expression");
    let ResolveError::Compile(compile_err) = err else {
        panic!("expected compile error, got {err:?}");
    };
    assert!(compile_err.pointer.contains('^'));
}

#[test]
fn variables_bind_in_first_occurrence_order() {
    let mut a = ints(&[10]);
    let mut b = ints(&[1, 2, 3]);
    let mut c = ints(&[5]);

    // "b*a + c - a" declares b first, so the first slice binds to 'b'.
    let ok = require(
        "b*a + c - a",
        &mut [&mut b, &mut a, &mut c],
        Cmp::Eq,
        &[Number::Int(25)],
    )
    .expect("resolve should succeed");
    assert!(ok);
    assert_eq!(b.current_value(), Number::Int(3));
}

#[test]
fn linked_domains_honor_recorded_constraints() {
    let mut net = ConstraintNet::new();
    let a = net.insert_named("alpha", ints(&[1, 2, 3, 4, 5]));
    let b = net.insert_named("beta", ints(&[1, 2, 3, 4, 5]));

    assert!(net
        .require("x - y", &[a, b], Cmp::Eq, &[Number::Int(0)])
        .expect("resolve"));
    assert!(net
        .require("x", &[a], Cmp::Gt, &[Number::Int(3)])
        .expect("resolve"));
    // The equality record dragged beta along.
    assert_eq!(net.domain(a).current_value(), Number::Int(4));
    assert_eq!(net.domain(b).current_value(), Number::Int(4));

    // A request incompatible with the ledger fails without mutation.
    assert!(!net
        .require("y", &[b], Cmp::Gt, &[Number::Int(5)])
        .expect("resolve"));
    assert_eq!(net.domain(a).current_value(), Number::Int(4));
    assert_eq!(net.domain(b).current_value(), Number::Int(4));
}

#[test]
fn shrinking_a_linked_domain_can_break_its_ledger() {
    let mut net = ConstraintNet::new();
    let a = net.insert(ints(&[1, 2, 3]));
    let b = net.insert(ints(&[1, 2, 3]));

    assert!(net
        .require("x - y", &[a, b], Cmp::Eq, &[Number::Int(0)])
        .expect("resolve"));

    // Remove every pairing partner except 1 from beta, then demand alpha > 1.
    net.domain_mut(b).remove(Number::Int(2)).expect("remove");
    net.domain_mut(b).remove(Number::Int(3)).expect("remove");
    assert!(!net
        .require("x", &[a], Cmp::Gt, &[Number::Int(1)])
        .expect("resolve"));
}

#[test]
fn clearing_one_participant_clears_the_shared_record() {
    let mut net = ConstraintNet::new();
    let a = net.insert_named("a", ints(&[1, 2, 3]));
    let b = net.insert_named("b", ints(&[1, 2, 3]));

    assert!(net
        .require("x + y", &[a, b], Cmp::Eq, &[Number::Int(4)])
        .expect("resolve"));
    assert_eq!(net.constraints(a), vec!["a + b = 4".to_string()]);

    net.clear_constraints(a);
    assert!(net.constraints(b).is_empty());
    assert!(net
        .require("y", &[b], Cmp::Eq, &[Number::Int(3)])
        .expect("resolve"));
}
