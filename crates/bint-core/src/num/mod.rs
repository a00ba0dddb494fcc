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

//! # Numeric Foundations
//!
//! Integer-centric building blocks for the interval engine.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`MinusOne`, `Zero`, `PlusOne`)
//!   for the signed primitives.
//! - `ops`: By-value checked arithmetic, including floored and truncating
//!   division and remainder.
//! - `limits`: The representable-range policy (`Limits`, `Native`,
//!   `Symmetric`) that every interval carries in its type.
//!
//! The [`BoundInt`] trait bundles everything the engine needs from its
//! integer representation. Pick `i128` for headroom; narrower widths behave
//! identically and simply report overflow sooner.

pub mod constants;
pub mod limits;
pub mod ops;

use constants::{MinusOne, PlusOne, Zero};
use num_traits::{PrimInt, Signed};
use ops::checked_arithmetic::{
    CheckedAbsVal, CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedNegVal, CheckedRemVal,
    CheckedSubVal,
};

/// A signed primitive integer usable as the bound and value type of intervals.
///
/// Blanket-implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
pub trait BoundInt:
    PrimInt
    + Signed
    + MinusOne
    + PlusOne
    + Zero
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
    + CheckedNegVal
    + CheckedAbsVal
    + CheckedDivVal
    + CheckedRemVal
    + std::hash::Hash
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
}

impl<T> BoundInt for T where
    T: PrimInt
        + Signed
        + MinusOne
        + PlusOne
        + Zero
        + CheckedAddVal
        + CheckedSubVal
        + CheckedMulVal
        + CheckedNegVal
        + CheckedAbsVal
        + CheckedDivVal
        + CheckedRemVal
        + std::hash::Hash
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + 'static
{
}
