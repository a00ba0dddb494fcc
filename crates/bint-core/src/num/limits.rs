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

//! Representable-range policies.
//!
//! Every interval carries a zero-sized policy type `L: Limits<T>` that fixes
//! the absolute range its bounds may occupy. Construction rejects bounds
//! outside the policy, and every interval-algebra result is validated against
//! it, so the choice of policy is made once, explicitly, at the type level.
//!
//! Two policies ship with the crate:
//!
//! - [`Native`]: the full range `[T::MIN, T::MAX]` of the primitive. Negating
//!   an interval that contains `T::MIN` overflows.
//! - [`Symmetric`]: `[-T::MAX, T::MAX]`, so negation and absolute value can
//!   never fail.
//!
//! Narrower domains are one trait impl away:
//!
//! ```rust
//! # use bint_core::num::limits::Limits;
//! #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
//! struct Percent;
//!
//! impl Limits<i32> for Percent {
//!     fn lowest() -> i32 { -100 }
//!     fn highest() -> i32 { 100 }
//! }
//!
//! assert!(Percent::check(100).is_ok());
//! assert!(Percent::check(101).is_err());
//! ```

use crate::error::IntervalError;
use num_traits::Bounded;
use std::{fmt::Debug, hash::Hash};

/// The absolute range that interval bounds of type `T` may occupy.
///
/// # Invariants
///
/// `lowest() <= highest()`, and both are constant for the lifetime of the program.
pub trait Limits<T>: Copy + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static
where
    T: PartialOrd + Copy,
{
    /// The smallest representable bound.
    fn lowest() -> T;

    /// The largest representable bound.
    fn highest() -> T;

    /// Returns `true` if `value` lies within `[lowest(), highest()]`.
    #[inline]
    fn contains(value: T) -> bool {
        Self::lowest() <= value && value <= Self::highest()
    }

    /// Validates a computed bound.
    ///
    /// Returns `Underflow` below `lowest()` and `Overflow` above `highest()`.
    #[inline]
    fn check(value: T) -> Result<T, IntervalError> {
        if value < Self::lowest() {
            Err(IntervalError::Underflow)
        } else if value > Self::highest() {
            Err(IntervalError::Overflow)
        } else {
            Ok(value)
        }
    }
}

/// The full native range of the primitive, `[T::MIN, T::MAX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Native;

impl<T> Limits<T> for Native
where
    T: Bounded + PartialOrd + Copy,
{
    #[inline(always)]
    fn lowest() -> T {
        T::min_value()
    }

    #[inline(always)]
    fn highest() -> T {
        T::max_value()
    }
}

/// The sign-symmetric range `[-T::MAX, T::MAX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symmetric;

impl<T> Limits<T> for Symmetric
where
    T: Bounded + PartialOrd + Copy + std::ops::Neg<Output = T>,
{
    #[inline(always)]
    fn lowest() -> T {
        -T::max_value()
    }

    #[inline(always)]
    fn highest() -> T {
        T::max_value()
    }
}
