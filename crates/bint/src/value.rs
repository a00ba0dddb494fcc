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

//! The bounded-value runtime type.
//!
//! A [`Bint`] pairs a concrete integer with the interval it is statically
//! known to lie in. Every operation first asks the interval engine for the
//! result interval (and, for fallible operations, for the classification),
//! then performs the arithmetic on the stored value. Runtime checks are only
//! executed when the classification is `MayFail`.

use crate::error::BintError;
use bint_core::{
    error::{IntervalError, ValueError},
    math::{
        classify::{Classified, Rounding},
        interval::Interval,
        query::FurthestPoint,
    },
    num::{
        BoundInt,
        limits::{Limits, Native},
    },
};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
};
use tracing::{debug, trace};

/// An integer value together with the interval it is known to lie in.
///
/// # Invariants
///
/// `range.contains(value)` holds for every `Bint` that can be observed.
///
/// # Examples
///
/// ```rust
/// # use bint::{Bint, Interval};
///
/// let a: Bint<i64> = Bint::new(15, Interval::new(10, 20));
/// let b: Bint<i64> = Bint::new(-1, Interval::new(-1, 2));
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum.get(), 14);
/// assert_eq!(sum.range(), Interval::new(9, 22));
/// ```
#[derive(Clone, Copy)]
pub struct Bint<T, L = Native>
where
    T: BoundInt,
    L: Limits<T>,
{
    value: T,
    range: Interval<T, L>,
}

impl<T, L> Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    /// Creates a new `Bint`.
    ///
    /// # Panics
    ///
    /// Panics if `value` does not lie in `range`.
    #[inline]
    pub fn new(value: T, range: Interval<T, L>) -> Self {
        assert!(
            range.contains(value),
            "called `Bint::new` with value {value} outside of {range}"
        );
        Self { value, range }
    }

    /// Creates a new `Bint`, failing with `OutOfBounds` if `value` does not lie in `range`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint::{Bint, BintError, Interval};
    /// # use bint_core::error::ValueError;
    ///
    /// let range: Interval<i32> = Interval::new(0, 9);
    /// assert!(Bint::try_new(3, range).is_ok());
    /// assert_eq!(
    ///     Bint::try_new(10, range).unwrap_err(),
    ///     BintError::Value(ValueError::OutOfBounds)
    /// );
    /// ```
    #[inline]
    pub fn try_new(value: T, range: Interval<T, L>) -> Result<Self, BintError> {
        if range.contains(value) {
            Ok(Self { value, range })
        } else {
            Err(ValueError::OutOfBounds.into())
        }
    }

    /// Creates a `Bint` whose interval is the single point `value`.
    ///
    /// Fails with `OutOfRepresentableRange` if `value` lies outside `L`.
    #[inline]
    pub fn constant(value: T) -> Result<Self, BintError> {
        Ok(Self {
            value,
            range: Interval::point(value)?,
        })
    }

    /// Wraps the result of a value computation whose interval is already known.
    #[inline]
    fn derived(value: Option<T>, range: Interval<T, L>) -> Result<Self, BintError> {
        // The interval engine has already proven the result representable.
        let value = value.ok_or(IntervalError::Overflow)?;
        debug_assert!(
            range.contains(value),
            "derived value {value} escaped its computed interval {range}"
        );
        Ok(Self { value, range })
    }

    /// Returns the stored value.
    #[inline]
    pub const fn get(&self) -> T {
        self.value
    }

    /// Returns the interval the value is known to lie in.
    #[inline]
    pub const fn range(&self) -> Interval<T, L> {
        self.range
    }

    /// Re-homes the value into `target`.
    ///
    /// No runtime check is executed when `target` contains the current
    /// interval. Fails with `OutOfBounds` if the value lies outside `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint::{Bint, Interval};
    ///
    /// let a: Bint<i32> = Bint::new(5, Interval::new(0, 9));
    /// let wide = a.cast(Interval::new(-100, 100)).unwrap();
    /// assert_eq!(wide.range(), Interval::new(-100, 100));
    /// assert!(a.cast(Interval::new(6, 9)).is_err());
    /// ```
    pub fn cast(&self, target: Interval<T, L>) -> Result<Self, BintError> {
        let lower = Interval::new_unchecked(target.lower(), target.lower());
        let upper = Interval::new_unchecked(target.upper(), target.upper());
        let classified = self.range.clamp(&lower, &upper);
        resolve("cast", classified, ValueError::OutOfBounds, || {
            target.contains(self.value)
        })?;
        Ok(Self {
            value: self.value,
            range: target,
        })
    }

    /// Negates the value.
    pub fn negate(&self) -> Result<Self, BintError> {
        let range = self.range.negate()?;
        Self::derived(self.value.checked_neg_val(), range)
    }

    /// Adds two values.
    pub fn add(&self, other: &Self) -> Result<Self, BintError> {
        let range = self.range.add(&other.range)?;
        Self::derived(self.value.checked_add_val(other.value), range)
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&self, other: &Self) -> Result<Self, BintError> {
        let range = self.range.sub(&other.range)?;
        Self::derived(self.value.checked_sub_val(other.value), range)
    }

    /// Multiplies two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint::{Bint, Interval};
    ///
    /// let a: Bint<i32> = Bint::new(200, Interval::new(0, 255));
    /// let b: Bint<i32> = Bint::new(100, Interval::new(0, 255));
    /// let p = a.mul(&b).unwrap();
    /// assert_eq!(p.get(), 20_000);
    /// assert_eq!(p.range(), Interval::new(0, 65_025));
    /// ```
    pub fn mul(&self, other: &Self) -> Result<Self, BintError> {
        let range = self.range.mul(&other.range)?;
        Self::derived(self.value.checked_mul_val(other.value), range)
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Result<Self, BintError> {
        let range = self.range.abs()?;
        Self::derived(self.value.checked_abs_val(), range)
    }

    /// Returns the smaller of two values.
    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Self {
            value: std::cmp::min(self.value, other.value),
            range: self.range.min(&other.range),
        }
    }

    /// Returns the larger of two values.
    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Self {
            value: std::cmp::max(self.value, other.value),
            range: self.range.max(&other.range),
        }
    }

    /// Divides `self` by `other` with the given rounding rule.
    ///
    /// Fails with `DivisionByZero` if `other` is zero. The check is skipped
    /// when the interval of `other` excludes zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint::{Bint, Interval};
    /// # use bint_core::math::classify::Rounding;
    ///
    /// let n: Bint<i32> = Bint::new(-7, Interval::new(-16, 16));
    /// let d: Bint<i32> = Bint::new(2, Interval::new(2, 2));
    /// assert_eq!(n.div(&d, Rounding::Floor).unwrap().get(), -4);
    /// assert_eq!(n.div(&d, Rounding::Truncate).unwrap().get(), -3);
    /// ```
    pub fn div(&self, other: &Self, rounding: Rounding) -> Result<Self, BintError> {
        let classified = self.range.divide(&other.range, rounding)?;
        let range = resolve("div", classified, ValueError::DivisionByZero, || {
            other.value != T::ZERO
        })?;
        Self::derived(rounding.div(self.value, other.value), range)
    }

    /// Computes the remainder of dividing `self` by `other` with the given
    /// rounding rule.
    ///
    /// Fails with `DivisionByZero` if `other` is zero.
    pub fn rem(&self, other: &Self, rounding: Rounding) -> Result<Self, BintError> {
        let classified = self.range.remainder(&other.range, rounding)?;
        let range = resolve("rem", classified, ValueError::DivisionByZero, || {
            other.value != T::ZERO
        })?;
        Self::derived(rounding.rem(self.value, other.value), range)
    }

    /// Requires the value to be at least `bound`.
    ///
    /// Fails with `OutOfBounds` if `self < bound`. On success the value is
    /// unchanged and its interval is narrowed from below.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint::{Bint, Interval};
    ///
    /// let zero: Bint<i32> = Bint::constant(0).unwrap();
    /// let a: Bint<i32> = Bint::new(2, Interval::new(-3, 4));
    /// let floored = a.floor(&zero).unwrap();
    /// assert_eq!(floored.get(), 2);
    /// assert_eq!(floored.range(), Interval::new(0, 4));
    ///
    /// let b: Bint<i32> = Bint::new(-2, Interval::new(-3, 4));
    /// assert!(b.floor(&zero).is_err());
    /// ```
    pub fn floor(&self, bound: &Self) -> Result<Self, BintError> {
        let classified = self.range.floor(&bound.range);
        let range = resolve("floor", classified, ValueError::OutOfBounds, || {
            self.value >= bound.value
        })?;
        Ok(Self {
            value: self.value,
            range,
        })
    }

    /// Requires the value to be at most `bound`.
    ///
    /// Fails with `OutOfBounds` if `self > bound`. On success the value is
    /// unchanged and its interval is narrowed from above.
    pub fn ceil(&self, bound: &Self) -> Result<Self, BintError> {
        let classified = self.range.ceil(&bound.range);
        let range = resolve("ceil", classified, ValueError::OutOfBounds, || {
            self.value <= bound.value
        })?;
        Ok(Self {
            value: self.value,
            range,
        })
    }

    /// Requires the value to lie between `lower` and `upper`.
    ///
    /// Fails with `OutOfBounds` otherwise.
    pub fn clamp(&self, lower: &Self, upper: &Self) -> Result<Self, BintError> {
        let classified = self.range.clamp(&lower.range, &upper.range);
        let range = resolve("clamp", classified, ValueError::OutOfBounds, || {
            lower.value <= self.value && self.value <= upper.value
        })?;
        Ok(Self {
            value: self.value,
            range,
        })
    }

    /// Returns the value of `target` closest to `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint::{Bint, Interval};
    ///
    /// let p: Bint<i32> = Bint::new(-4, Interval::new(-9, -1));
    /// let c = p.closest_in(&Interval::new(0, 10));
    /// assert_eq!(c.get(), 0);
    /// assert_eq!(c.range(), Interval::new(0, 0));
    /// ```
    pub fn closest_in(&self, target: &Interval<T, L>) -> Self {
        Self {
            value: target.closest_point(self.value),
            range: target.closest(&self.range),
        }
    }

    /// Returns the bound of `target` furthest from `self`.
    pub fn furthest_in(&self, target: &Interval<T, L>) -> FurthestPoint<T> {
        let point = target.furthest_point(self.value);
        debug_assert!(
            target.furthest(&self.range).admits(&point),
            "furthest point {point:?} not admitted by its classification"
        );
        point
    }

    /// Compares two values, skipping the comparison when the intervals
    /// already decide it.
    pub fn order(&self, other: &Self) -> Ordering {
        self.range.order(&other.range).resolve(self.value, other.value)
    }
}

/// Resolves a classified operation against the concrete values, logging the
/// failures.
fn resolve<I, F>(
    op: &'static str,
    classified: Classified<I>,
    failure: ValueError,
    passes: F,
) -> Result<I, ValueError>
where
    F: FnOnce() -> bool,
{
    if classified.is_must_fail() {
        debug!(op, %failure, "operation can never succeed for these ranges");
    }
    classified.resolve(passes, failure).inspect_err(|failure| {
        trace!(op, %failure, "runtime check failed");
    })
}

impl<T, L> Add for &Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Output = Result<Bint<T, L>, BintError>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Bint::add(self, rhs)
    }
}

impl<T, L> Sub for &Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Output = Result<Bint<T, L>, BintError>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Bint::sub(self, rhs)
    }
}

impl<T, L> Mul for &Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Output = Result<Bint<T, L>, BintError>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Bint::mul(self, rhs)
    }
}

impl<T, L> Neg for Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Output = Result<Self, BintError>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T, L> PartialEq for Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.order(other) == Ordering::Equal
    }
}

impl<T, L> Eq for Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
}

impl<T, L> PartialOrd for Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.order(other))
    }
}

impl<T, L> Hash for Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, L> std::fmt::Debug for Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bint")
            .field("value", &self.value)
            .field("range", &self.range)
            .finish()
    }
}

impl<T, L> std::fmt::Display for Bint<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
