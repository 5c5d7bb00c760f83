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

//! Lexical helpers for the expression grammar.
//!
//! The grammar runs over sanitized text (spaces already stripped), so there
//! are no whitespace/trivia combinators here.

use crate::ast::Span;
use nom::Parser;
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, satisfy},
    combinator::map_res,
    error::context,
};

use super::PResult;

/// Parses a specific operator character.
pub(super) fn op(c: char) -> impl Fn(Span<'_>) -> PResult<'_, char> {
    move |input| char(c)(input)
}

/// Parses an unsigned integer literal (`[0-9]+`).
pub(super) fn integer(input: Span<'_>) -> PResult<'_, i64> {
    context(
        "number",
        map_res(take_while1(|c: char| c.is_ascii_digit()), |s: Span<'_>| {
            s.fragment().parse::<i64>()
        }),
    )
    .parse(input)
}

/// Parses a single-letter variable name.
pub(super) fn letter(input: Span<'_>) -> PResult<'_, char> {
    context("variable", satisfy(|c| c.is_ascii_alphabetic())).parse(input)
}
