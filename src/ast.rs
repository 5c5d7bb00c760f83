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

//! Expression AST with source spans.
//!
//! The parser produces this AST from sanitized expression text. A compiled
//! [`Formula`] pairs the AST root with the distinct variable letters it
//! references, ready for repeated evaluation inside the combination search.

use nom_locate::LocatedSpan;

/// Parser input span type carrying byte offsets into the sanitized text.
pub type Span<'a> = LocatedSpan<&'a str>;

/// Source range within a (single-line) expression string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl SourceSpan {
    /// Creates a source span from parser start/end positions.
    pub fn from_bounds(start: Span<'_>, end: Span<'_>) -> Self {
        Self {
            start: start.location_offset(),
            end: end.location_offset(),
        }
    }

    /// Returns span length in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns whether the span covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns a span that starts at `self` and ends at `other`.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`, including implicit adjacency).
    Mul,
    /// True division (`/`).
    Div,
    /// Modulo (`%`).
    Rem,
    /// Exponentiation (`^`).
    Pow,
}

/// Expression node variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Integer literal (the grammar admits digit runs only).
    Number(i64),
    /// Single-letter variable reference.
    Variable(char),
    /// Unary negation.
    UnaryNeg(Box<Expr>),
    /// Binary operation.
    Binary {
        /// Operator kind.
        op: BinOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
}

/// Spanned expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// Expression payload.
    pub kind: ExprKind,
    /// Source location for diagnostics.
    pub span: SourceSpan,
}

/// A compiled expression ready for repeated evaluation.
///
/// Immutable once built: the original text, its sanitized form (spaces
/// stripped, implicit multiplication inserted), the AST root, and the
/// distinct variable letters in first-occurrence order.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    pub(crate) text: String,
    pub(crate) sanitized: String,
    pub(crate) root: Expr,
    pub(crate) variables: Vec<char>,
}

impl Formula {
    /// Returns the original expression text as written by the caller.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the sanitized expression the grammar actually parsed.
    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    /// Returns the distinct variable letters in first-occurrence order.
    ///
    /// This order determines how positional domain arguments bind to
    /// letters, and which loop of the combination search is outermost.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }
}
