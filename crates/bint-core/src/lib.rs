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

//! # Bint Core
//!
//! The interval engine behind bounded integers. Every integer is described by
//! a closed interval `[lower, upper]`, and every operation computes the
//! tightest interval of its result from the intervals of its operands, so no
//! overflow, underflow or out-of-range value can be produced undetected.
//!
//! ## Modules
//!
//! - `math`: The `Interval` type and its algebra, the fallible-operation
//!   classifier (`floor`, `ceil`, `clamp`, `divide`, `remainder`) and the
//!   furthest/ordering queries.
//! - `num`: The `BoundInt` integer abstraction, sign constants, by-value
//!   checked arithmetic, and the representable-range policies (`Native`,
//!   `Symmetric`).
//! - `error`: The representability (`IntervalError`) and value
//!   (`ValueError`) failure families.
//!
//! ## Example
//!
//! ```rust
//! # use bint_core::math::{classify::{Classified, Rounding}, interval::Interval};
//!
//! let a: Interval<i64> = Interval::new(10, 20);
//! let b: Interval<i64> = Interval::new(-1, 2);
//! assert_eq!(a.add(&b), Ok(Interval::new(9, 22)));
//!
//! // Division by an interval containing zero can only be decided at runtime.
//! let q = a.divide(&b, Rounding::Floor).unwrap();
//! assert!(q.is_may_fail());
//! ```
//!
//! All functions are pure and all types are immutable values, so everything
//! here is safe to share across threads.

pub mod error;
pub mod math;
pub mod num;
