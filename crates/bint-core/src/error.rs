// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Error Families
//!
//! Two orthogonal kinds of failure exist for bounded integers:
//!
//! - [`IntervalError`]: representability failures. An interval could not be
//!   constructed, or an interval-algebra result does not fit the chosen
//!   representable range. These indicate a usage error in the caller and are
//!   usually treated as defects rather than handled dynamically.
//! - [`ValueError`]: value failures. They only arise when a classification is
//!   `MayFail` and the concrete runtime values land in the failing region.

/// A representability failure produced by interval construction or interval algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IntervalError {
    /// The requested lower bound is greater than the requested upper bound.
    #[error("invalid interval: lower bound is greater than upper bound")]
    InvalidInterval,
    /// A requested bound lies outside the representable range.
    #[error("interval bound lies outside the representable range")]
    OutOfRepresentableRange,
    /// A computed bound exceeds the upper end of the representable range.
    #[error("interval arithmetic overflowed the representable range")]
    Overflow,
    /// A computed bound falls below the lower end of the representable range.
    #[error("interval arithmetic underflowed the representable range")]
    Underflow,
}

impl IntervalError {
    /// Returns the failure for a result that could not be represented, given
    /// whether its true value is positive.
    #[inline]
    pub(crate) const fn out_of_range(positive: bool) -> Self {
        if positive {
            Self::Overflow
        } else {
            Self::Underflow
        }
    }
}

/// A value failure detected when the concrete operands are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValueError {
    /// The divisor of a division or remainder was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The value fell outside the narrowed interval of a floor, ceil or clamp.
    #[error("value is out of bounds")]
    OutOfBounds,
}
