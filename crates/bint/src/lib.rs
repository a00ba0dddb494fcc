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

//! # Bint
//!
//! Bounded integers: values statically known to lie in a closed interval
//! `[lower, upper]`, whose operations compute the interval of their result
//! from the intervals of their operands.
//!
//! ## Architecture
//!
//! * **`value`**: The [`Bint`] runtime type. Each operation delegates its
//!   interval computation to `bint_core` and then performs the arithmetic on
//!   the stored value, running a runtime check only when the interval
//!   classification is `MayFail`.
//! * **`error`**: [`BintError`], which folds the representability and value
//!   failure families of `bint_core` into one type.
//!
//! ## Logging
//!
//! Runtime failures are reported through `tracing`: `debug` when an
//! operation is invoked on ranges for which it can never succeed, and
//! `trace` when a runtime check fails. Install a subscriber to see them.
//!
//! ## Example
//!
//! ```rust
//! # use bint::{Bint, BintError, Interval};
//! # use bint_core::{error::ValueError, math::classify::Rounding};
//!
//! let n: Bint<i32> = Bint::new(-7, Interval::new(-16, 16));
//! let d: Bint<i32> = Bint::new(0, Interval::new(-1, 2));
//! assert_eq!(
//!     n.div(&d, Rounding::Floor),
//!     Err(BintError::Value(ValueError::DivisionByZero))
//! );
//! ```

pub mod error;
pub mod value;

pub use bint_core::math::interval::Interval;
pub use error::BintError;
pub use value::Bint;
