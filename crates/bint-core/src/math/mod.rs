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

//! # Interval Arithmetic
//!
//! The range reasoning behind bounded integers: given the intervals of the
//! operands, compute the interval of the result, and decide whether an
//! operation can fail.
//!
//! ## Submodules
//!
//! - `interval`: The closed interval `[lower, upper]` with validated
//!   construction, containment, union/intersection, and overflow-checked
//!   negate/add/sub/mul/abs, plus min/max/closest and the middle point.
//! - `classify`: Tri-state classification (`MustFail`, `MustPass`,
//!   `MayFail`) of floor, ceil, clamp, division and remainder.
//! - `query`: Furthest-point and ordering classifications together with
//!   their runtime resolution.

pub mod classify;
pub mod interval;
pub mod query;
