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

//! `nom` parser for constraint expressions.
//!
//! Accepted characters are single letters (variables), digits, the
//! operators `+ - * / % ^`, parentheses, and spaces. Compilation runs in
//! two stages:
//!
//! 1. A sanitize pass screens the character set, strips spaces, and inserts
//!    implicit multiplication: a digit or `)` immediately followed by a
//!    letter or `(`, or a letter immediately followed by a letter, digit,
//!    or `(`, gains a `*`. Adjacency is judged on the raw text, so `2 x`
//!    stays unmultiplied and fails to parse.
//! 2. The grammar parses the sanitized text with precedence
//!    `+ -` < `* / %` < unary `-` < `^` (right-associative).

mod expr;
mod utils;

use crate::ast::{Expr, ExprKind, Formula, SourceSpan, Span};
use crate::diagnostics::CompileError;
use nom::{
    IResult,
    combinator::all_consuming,
    error::{VerboseError, VerboseErrorKind},
};

type PResult<'a, O> = IResult<Span<'a>, O, VerboseError<Span<'a>>>;

/// Compiles expression text into an evaluable [`Formula`].
pub fn compile(text: &str) -> Result<Formula, CompileError> {
    let sanitized = sanitize(text)?;
    if sanitized.is_empty() {
        return Err(CompileError::message_only("Empty expression"));
    }

    let input = Span::new(&sanitized);
    // `all_consuming` ensures trailing garbage is treated as a syntax error.
    let (_, root) = match all_consuming(expr::expr)(input) {
        Ok(v) => v,
        Err(err) => return Err(parse_error_to_compile_error(err, &sanitized)),
    };

    let mut variables = Vec::new();
    collect_variables(&root, &mut variables);

    Ok(Formula {
        text: text.to_string(),
        sanitized,
        root,
        variables,
    })
}

/// Returns whether a character may appear in raw expression text.
fn is_accepted(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')' | ' ')
}

/// Screens the character set, strips spaces, and inserts implicit `*`.
fn sanitize(text: &str) -> Result<String, CompileError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if !is_accepted(c) {
            let span = SourceSpan {
                start: i,
                end: i + 1,
            };
            return Err(CompileError::from_span(
                format!("Invalid character '{c}' in expression"),
                text,
                &span,
            ));
        }

        if c != ' ' {
            out.push(c);
        }

        let Some(&next) = chars.get(i + 1) else {
            continue;
        };
        // Adjacency implies multiplication: `2x(y+1)` means `2*x*(y+1)`.
        let closes_value = c.is_ascii_digit() || c == ')';
        let opens_value = next.is_ascii_alphabetic() || next == '(';
        let letter_run = c.is_ascii_alphabetic() && (next.is_ascii_alphanumeric() || next == '(');
        if (closes_value && opens_value) || letter_run {
            out.push('*');
        }
    }

    Ok(out)
}

/// Collects distinct variable letters in first-occurrence order.
fn collect_variables(expr: &Expr, out: &mut Vec<char>) {
    match &expr.kind {
        ExprKind::Number(_) => {}
        ExprKind::Variable(c) => {
            if !out.contains(c) {
                out.push(*c);
            }
        }
        ExprKind::UnaryNeg(inner) => collect_variables(inner, out),
        ExprKind::Binary { left, right, .. } => {
            collect_variables(left, out);
            collect_variables(right, out);
        }
    }
}

/// Converts a `nom` verbose error to crate-level compile diagnostics.
fn parse_error_to_compile_error(
    err: nom::Err<VerboseError<Span<'_>>>,
    sanitized: &str,
) -> CompileError {
    match err {
        nom::Err::Incomplete(_) => CompileError::message_only("Incomplete expression"),
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            // Use the deepest recorded parser error as the diagnostic anchor.
            if let Some((span, kind)) = e.errors.last() {
                let span = SourceSpan::from_bounds(*span, *span);
                let detail = match kind {
                    VerboseErrorKind::Context(ctx) => format!("Invalid expression: expected {ctx}"),
                    VerboseErrorKind::Char(c) => format!("Invalid expression: expected '{c}'"),
                    VerboseErrorKind::Nom(kind) => format!("Invalid expression near {kind:?}"),
                };
                CompileError::from_span(detail, sanitized, &span)
            } else {
                CompileError::message_only("Invalid expression")
            }
        }
    }
}
