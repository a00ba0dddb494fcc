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

use crate::{
    error::IntervalError,
    num::{
        BoundInt,
        limits::{Limits, Native},
    },
};
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Add, BitOr, Mul, Neg, RangeInclusive, Sub},
};

/// A closed interval `[lower, upper]` of integers.
///
/// The interval is the unit of analysis of the engine: every arithmetic
/// operation computes the tightest interval that contains all results of the
/// operation applied to values drawn from the operand intervals. Operations
/// never wrap; a bound that cannot be represented is reported as an
/// [`IntervalError`].
///
/// The policy `L` fixes the absolute range the bounds may occupy, see
/// [`crate::num::limits`].
///
/// # Invariants
///
/// - `lower <= upper`
/// - `L::lowest() <= lower` and `upper <= L::highest()`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T, L = Native>
where
    T: BoundInt,
    L: Limits<T>,
{
    lower: T,
    upper: T,
    limits: PhantomData<L>,
}

/// An iterator over the integer points contained within an `Interval`.
///
/// # Examples
///
/// ```rust
/// # use bint_core::math::interval::Interval;
///
/// let iv: Interval<i32> = Interval::new(1, 4);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalIterator<T>
where
    T: BoundInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for IntervalIterator<T>
where
    T: BoundInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::PLUS_ONE;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self
            .back
            .checked_sub_val(self.front)
            .and_then(|d| d.to_usize())
            .and_then(|d| d.checked_add(1))
        {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for IntervalIterator<T>
where
    T: BoundInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::PLUS_ONE;
        }
        Some(result)
    }
}

impl<T> FusedIterator for IntervalIterator<T> where T: BoundInt {}

impl<T, L> Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper` or if either bound lies outside the
    /// representable range of `L`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// let iv: Interval<i64> = Interval::new(-3, 4);
    /// assert_eq!(iv.lower(), -3);
    /// assert_eq!(iv.upper(), 4);
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T) -> Self {
        match Self::try_new(lower, upper) {
            Ok(iv) => iv,
            Err(e) => panic!("called `Interval::new` with [{lower}, {upper}]: {e}"),
        }
    }

    /// Creates a new `Interval` if the bounds are valid.
    ///
    /// Returns `InvalidInterval` if `lower > upper` and
    /// `OutOfRepresentableRange` if either bound lies outside `L`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::{error::IntervalError, math::interval::Interval, num::limits::Symmetric};
    ///
    /// assert!(Interval::<i32>::try_new(0, 10).is_ok());
    /// assert_eq!(
    ///     Interval::<i32>::try_new(10, 0),
    ///     Err(IntervalError::InvalidInterval)
    /// );
    /// assert_eq!(
    ///     Interval::<i8, Symmetric>::try_new(-128, 0),
    ///     Err(IntervalError::OutOfRepresentableRange)
    /// );
    /// ```
    #[inline]
    pub fn try_new(lower: T, upper: T) -> Result<Self, IntervalError> {
        if lower > upper {
            return Err(IntervalError::InvalidInterval);
        }
        if !L::contains(lower) || !L::contains(upper) {
            return Err(IntervalError::OutOfRepresentableRange);
        }
        Ok(Self::new_unchecked(lower, upper))
    }

    /// Creates a new `Interval` without checking invariants in release builds.
    ///
    /// The caller must ensure `lower <= upper`. The representable range of `L`
    /// is not consulted, which makes this suitable for transient sentinel
    /// intervals that are only ever compared against.
    #[inline]
    pub fn new_unchecked(lower: T, upper: T) -> Self {
        debug_assert!(
            lower <= upper,
            "called `Interval::new_unchecked` with lower bound {lower} greater than upper bound {upper}"
        );
        Self {
            lower,
            upper,
            limits: PhantomData,
        }
    }

    /// Creates the single-point interval `[value, value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// let p = Interval::<i32>::point(7).unwrap();
    /// assert_eq!(p.point_value(), Some(7));
    /// ```
    #[inline]
    pub fn point(value: T) -> Result<Self, IntervalError> {
        Self::try_new(value, value)
    }

    /// Returns the interval spanning the whole representable range of `L`.
    #[inline]
    pub fn full() -> Self {
        Self::new_unchecked(L::lowest(), L::highest())
    }

    /// Builds the interval of a computed result, validating both bounds against `L`.
    #[inline]
    pub(crate) fn from_computed(lower: T, upper: T) -> Result<Self, IntervalError> {
        let lower = L::check(lower)?;
        let upper = L::check(upper)?;
        Ok(Self::new_unchecked(lower, upper))
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Returns `true` if the interval holds exactly one value.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.lower == self.upper
    }

    /// Returns the single value of a point interval, or `None` otherwise.
    #[inline]
    pub fn point_value(&self) -> Option<T> {
        if self.is_point() {
            Some(self.lower)
        } else {
            None
        }
    }

    /// Returns `true` if `value` lies within `[lower, upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// let iv: Interval<i32> = Interval::new(0, 10);
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(10));
    /// assert!(!iv.contains(11));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns `true` if `inner` is entirely contained within `self`.
    #[inline]
    pub fn contains_interval(&self, inner: &Self) -> bool {
        self.lower <= inner.lower && inner.upper <= self.upper
    }

    /// Returns the number of values in the interval, or `None` if the count
    /// is not representable in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::<i32>::new(-2, 2).len(), Some(5));
    /// assert_eq!(Interval::<i8>::new(-128, 127).len(), None);
    /// ```
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Option<T> {
        self.upper
            .checked_sub_val(self.lower)?
            .checked_add_val(T::PLUS_ONE)
    }

    /// Returns the smallest interval containing both `self` and `other`.
    ///
    /// Always succeeds, and the result is at least as wide as either operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// let a: Interval<i32> = Interval::new(0, 2);
    /// let b: Interval<i32> = Interval::new(8, 9);
    /// assert_eq!(a.union(&b), Interval::new(0, 9));
    /// assert_eq!(a | b, Interval::new(0, 9));
    /// ```
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new_unchecked(min(self.lower, other.lower), max(self.upper, other.upper))
    }

    /// Returns the values shared by both intervals, or `None` if they are disjoint.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let lower = max(self.lower, other.lower);
        let upper = min(self.upper, other.upper);
        if lower <= upper {
            Some(Self::new_unchecked(lower, upper))
        } else {
            None
        }
    }

    /// Computes `[-upper, -lower]`.
    ///
    /// Fails with `Overflow` when `-lower` is not representable, which
    /// happens for the most negative value of an asymmetric range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::{error::IntervalError, math::interval::Interval};
    ///
    /// let iv: Interval<i8> = Interval::new(-5, 10);
    /// assert_eq!(iv.negate(), Ok(Interval::new(-10, 5)));
    ///
    /// let min: Interval<i8> = Interval::new(-128, 0);
    /// assert_eq!(min.negate(), Err(IntervalError::Overflow));
    /// ```
    pub fn negate(&self) -> Result<Self, IntervalError> {
        let lower = negated(self.upper)?;
        let upper = negated(self.lower)?;
        Self::from_computed(lower, upper)
    }

    /// Computes `[a.lower + b.lower, a.upper + b.upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// let a: Interval<i32> = Interval::new(10, 20);
    /// let b: Interval<i32> = Interval::new(-1, 2);
    /// assert_eq!(a.add(&b), Ok(Interval::new(9, 22)));
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self, IntervalError> {
        let lower = sum(self.lower, other.lower)?;
        let upper = sum(self.upper, other.upper)?;
        Self::from_computed(lower, upper)
    }

    /// Computes `[a.lower - b.upper, a.upper - b.lower]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// let a: Interval<i32> = Interval::new(10, 20);
    /// let b: Interval<i32> = Interval::new(-1, 2);
    /// assert_eq!(a.sub(&b), Ok(Interval::new(8, 21)));
    /// ```
    pub fn sub(&self, other: &Self) -> Result<Self, IntervalError> {
        let lower = difference(self.lower, other.upper)?;
        let upper = difference(self.upper, other.lower)?;
        Self::from_computed(lower, upper)
    }

    /// Computes the hull of the four cross products of the bounds.
    ///
    /// If any cross product is not representable the operation fails, with
    /// the sign of the offending product selecting `Overflow` or `Underflow`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// let a: Interval<i32> = Interval::new(-8, 0);
    /// let b: Interval<i32> = Interval::new(2, 10);
    /// assert_eq!(a.mul(&b), Ok(Interval::new(-80, 0)));
    /// ```
    pub fn mul(&self, other: &Self) -> Result<Self, IntervalError> {
        let corners = [
            product(self.lower, other.lower)?,
            product(self.lower, other.upper)?,
            product(self.upper, other.lower)?,
            product(self.upper, other.upper)?,
        ];
        let (lower, upper) = hull(&corners);
        Self::from_computed(lower, upper)
    }

    /// Computes the interval of absolute values.
    ///
    /// The lower bound is `0` when the interval straddles zero, otherwise the
    /// smaller magnitude of the two bounds; the upper bound is the larger
    /// magnitude. Fails with `Overflow` if a magnitude is not representable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::<i32>::new(-7, 3).abs(), Ok(Interval::new(0, 7)));
    /// assert_eq!(Interval::<i32>::new(-7, -3).abs(), Ok(Interval::new(3, 7)));
    /// ```
    pub fn abs(&self) -> Result<Self, IntervalError> {
        let lower_magnitude = magnitude(self.lower)?;
        let upper_magnitude = magnitude(self.upper)?;
        let lower = if self.lower <= T::ZERO && T::ZERO <= self.upper {
            T::ZERO
        } else {
            min(lower_magnitude, upper_magnitude)
        };
        Self::from_computed(lower, max(lower_magnitude, upper_magnitude))
    }

    /// Computes the interval of `min(a, b)` for `a` in `self` and `b` in `other`.
    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Self::new_unchecked(min(self.lower, other.lower), min(self.upper, other.upper))
    }

    /// Computes the interval of `max(a, b)` for `a` in `self` and `b` in `other`.
    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Self::new_unchecked(max(self.lower, other.lower), max(self.upper, other.upper))
    }

    /// Returns the part of `self` nearest to `other`.
    ///
    /// If `other` lies entirely below `self` the result is the point
    /// `{self.lower}`, if it lies entirely above the result is
    /// `{self.upper}`, otherwise it is the overlap of both intervals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// let a: Interval<i32> = Interval::new(0, 10);
    /// assert_eq!(a.closest(&Interval::new(-9, -5)), Interval::new(0, 0));
    /// assert_eq!(a.closest(&Interval::new(20, 30)), Interval::new(10, 10));
    /// assert_eq!(a.closest(&Interval::new(5, 30)), Interval::new(5, 10));
    /// ```
    pub fn closest(&self, other: &Self) -> Self {
        if other.upper < self.lower {
            Self::new_unchecked(self.lower, self.lower)
        } else if self.upper < other.lower {
            Self::new_unchecked(self.upper, self.upper)
        } else {
            Self::new_unchecked(max(self.lower, other.lower), min(self.upper, other.upper))
        }
    }

    /// Returns the value of `self` nearest to `value`.
    #[inline]
    pub fn closest_point(&self, value: T) -> T {
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }

    /// Returns `floor((lower + upper) / 2)` without intermediate overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::<i32>::new(0, 4).middle(), 2);
    /// assert_eq!(Interval::<i32>::new(-3, 0).middle(), -2);
    /// assert_eq!(Interval::<i8>::new(120, 127).middle(), 123);
    /// ```
    #[inline]
    pub fn middle(&self) -> T {
        // Arithmetic shifts floor toward negative infinity.
        let carry = self.lower & self.upper & T::PLUS_ONE;
        (self.lower >> 1) + (self.upper >> 1) + carry
    }

    /// Returns `true` if `upper - middle == middle - lower`.
    ///
    /// This holds exactly when `lower + upper` is even.
    #[inline]
    pub fn is_middle_exact(&self) -> bool {
        (self.lower & T::PLUS_ONE) == (self.upper & T::PLUS_ONE)
    }

    /// Creates an iterator over the values in the interval, in ascending order.
    #[inline]
    pub fn iter(&self) -> IntervalIterator<T> {
        IntervalIterator {
            front: self.lower,
            back: self.upper,
            exhausted: false,
        }
    }
}

#[inline]
fn negated<T: BoundInt>(value: T) -> Result<T, IntervalError> {
    value
        .checked_neg_val()
        .ok_or(IntervalError::out_of_range(value < T::ZERO))
}

#[inline]
fn magnitude<T: BoundInt>(value: T) -> Result<T, IntervalError> {
    value.checked_abs_val().ok_or(IntervalError::Overflow)
}

#[inline]
fn sum<T: BoundInt>(a: T, b: T) -> Result<T, IntervalError> {
    a.checked_add_val(b)
        .ok_or(IntervalError::out_of_range(b > T::ZERO))
}

#[inline]
fn difference<T: BoundInt>(a: T, b: T) -> Result<T, IntervalError> {
    a.checked_sub_val(b)
        .ok_or(IntervalError::out_of_range(b < T::ZERO))
}

#[inline]
fn product<T: BoundInt>(a: T, b: T) -> Result<T, IntervalError> {
    a.checked_mul_val(b)
        .ok_or(IntervalError::out_of_range((a < T::ZERO) == (b < T::ZERO)))
}

/// Returns the smallest and largest of a non-empty set of candidate bounds.
#[inline]
pub(crate) fn hull<T: BoundInt>(values: &[T]) -> (T, T) {
    debug_assert!(!values.is_empty(), "called `hull` with no values");
    values[1..]
        .iter()
        .fold((values[0], values[0]), |(lo, hi), &v| (min(lo, v), max(hi, v)))
}

impl<T, L> BitOr for Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T, L> Add for &Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Output = Result<Interval<T, L>, IntervalError>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Interval::add(self, rhs)
    }
}

impl<T, L> Sub for &Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Output = Result<Interval<T, L>, IntervalError>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Interval::sub(self, rhs)
    }
}

impl<T, L> Mul for &Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Output = Result<Interval<T, L>, IntervalError>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Interval::mul(self, rhs)
    }
}

impl<T, L> Neg for Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Output = Result<Self, IntervalError>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T, L> std::fmt::Debug for Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T, L> std::fmt::Display for Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl<T, L> std::ops::RangeBounds<T> for Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.upper)
    }
}

impl<T, L> IntoIterator for Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Item = T;
    type IntoIter = IntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, L> IntoIterator for &Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Item = T;
    type IntoIter = IntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, L> TryFrom<RangeInclusive<T>> for Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    type Error = IntervalError;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (lower, upper) = range.into_inner();
        Self::try_new(lower, upper)
    }
}

impl<T, L> From<Interval<T, L>> for RangeInclusive<T>
where
    T: BoundInt,
    L: Limits<T>,
{
    #[inline]
    fn from(iv: Interval<T, L>) -> Self {
        iv.lower..=iv.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::limits::Symmetric;
    use proptest::prelude::*;
    use std::ops::{Bound, RangeBounds};

    type IntegerType = i32;

    fn iv(lower: IntegerType, upper: IntegerType) -> Interval<IntegerType> {
        Interval::new(lower, upper)
    }

    fn arb_interval() -> impl Strategy<Value = Interval<IntegerType>> {
        (-40..40, 0..12).prop_map(|(lower, width)| iv(lower, lower + width))
    }

    #[test]
    fn test_construction_valid() {
        let a = iv(10, 20);
        assert_eq!(a.lower(), 10);
        assert_eq!(a.upper(), 20);
        assert_eq!(a.len(), Some(11));
        assert!(!a.is_point());
        assert_eq!(a.point_value(), None);
    }

    #[test]
    fn test_try_new() {
        assert!(Interval::<IntegerType>::try_new(5, 10).is_ok());
        assert!(Interval::<IntegerType>::try_new(5, 5).is_ok());
        assert_eq!(
            Interval::<IntegerType>::try_new(10, 5),
            Err(IntervalError::InvalidInterval)
        );
        assert_eq!(
            Interval::<i8, Symmetric>::try_new(-128, -1),
            Err(IntervalError::OutOfRepresentableRange)
        );
    }

    #[test]
    #[should_panic(expected = "invalid interval")]
    fn test_new_panic() {
        iv(10, 5);
    }

    #[test]
    fn test_point() {
        let p = Interval::<IntegerType>::point(3).unwrap();
        assert!(p.is_point());
        assert_eq!(p.point_value(), Some(3));
        assert_eq!(
            Interval::<i8, Symmetric>::point(i8::MIN),
            Err(IntervalError::OutOfRepresentableRange)
        );
    }

    #[test]
    fn test_full() {
        assert_eq!(Interval::<i8>::full(), Interval::new(-128, 127));
        assert_eq!(Interval::<i8, Symmetric>::full(), Interval::new(-127, 127));
    }

    #[test]
    fn test_contains() {
        let a = iv(0, 10);
        assert!(a.contains(0));
        assert!(a.contains(10));
        assert!(!a.contains(-1));
        assert!(!a.contains(11));
    }

    #[test]
    fn test_contains_interval() {
        let main = iv(0, 10);
        assert!(main.contains_interval(&iv(0, 10)));
        assert!(main.contains_interval(&iv(2, 8)));
        assert!(!main.contains_interval(&iv(-1, 5)));
        assert!(!main.contains_interval(&iv(5, 11)));
        assert!(!main.contains_interval(&iv(20, 30)));
    }

    #[test]
    fn test_union() {
        let a = iv(0, 10);
        assert_eq!(a.union(&iv(5, 15)), iv(0, 15));
        assert_eq!(a.union(&iv(20, 30)), iv(0, 30));
        assert_eq!(a.union(&iv(2, 8)), a);
        assert_eq!(a | iv(-4, -2), iv(-4, 10));
    }

    #[test]
    fn test_intersection() {
        let a = iv(0, 10);
        assert_eq!(a.intersection(&iv(5, 15)), Some(iv(5, 10)));
        assert_eq!(a.intersection(&iv(10, 15)), Some(iv(10, 10)));
        assert_eq!(a.intersection(&iv(11, 15)), None);
    }

    #[test]
    fn test_negate() {
        assert_eq!(iv(-5, 10).negate(), Ok(iv(-10, 5)));
        assert_eq!(iv(3, 3).negate(), Ok(iv(-3, -3)));
        assert_eq!(
            Interval::<i8>::new(-128, 5).negate(),
            Err(IntervalError::Overflow)
        );
        assert_eq!(
            Interval::<i8, Symmetric>::new(-127, 5).negate(),
            Ok(Interval::new(-5, 127))
        );
        assert_eq!(-iv(1, 2), Ok(iv(-2, -1)));
    }

    #[test]
    fn test_add() {
        assert_eq!(iv(10, 20).add(&iv(-1, 2)), Ok(iv(9, 22)));
        assert_eq!(&iv(10, 20) + &iv(-1, 2), Ok(iv(9, 22)));
    }

    #[test]
    fn test_add_out_of_range() {
        let a: Interval<i8> = Interval::new(100, 120);
        assert_eq!(a.add(&Interval::new(0, 10)), Err(IntervalError::Overflow));
        let b: Interval<i8> = Interval::new(-120, -100);
        assert_eq!(b.add(&Interval::new(-10, 0)), Err(IntervalError::Underflow));
        let c: Interval<i8, Symmetric> = Interval::new(-127, 0);
        assert_eq!(c.add(&Interval::new(-1, 0)), Err(IntervalError::Underflow));
    }

    #[test]
    fn test_sub() {
        assert_eq!(iv(10, 20).sub(&iv(-1, 2)), Ok(iv(8, 21)));
        let a: Interval<i8> = Interval::new(0, 100);
        assert_eq!(a.sub(&Interval::new(-100, 0)), Err(IntervalError::Overflow));
        assert_eq!(a.sub(&Interval::new(0, 127)), Ok(Interval::new(-127, 100)));
        assert_eq!(
            Interval::<i8>::new(-10, 0).sub(&Interval::new(0, 127)),
            Err(IntervalError::Underflow)
        );
    }

    #[test]
    fn test_mul() {
        assert_eq!(iv(0, 255).mul(&iv(0, 255)), Ok(iv(0, 65025)));
        assert_eq!(iv(-8, 0).mul(&iv(2, 10)), Ok(iv(-80, 0)));
        assert_eq!(iv(-3, 4).mul(&iv(-5, 2)), Ok(iv(-20, 15)));
        assert_eq!(&iv(-3, 4) * &iv(0, 0), Ok(iv(0, 0)));
        assert_eq!(&iv(5, 6) - &iv(1, 2), Ok(iv(3, 5)));
    }

    #[test]
    fn test_mul_out_of_range() {
        let a: Interval<i16> = Interval::new(0, 255);
        assert_eq!(a.mul(&Interval::new(0, 255)), Err(IntervalError::Overflow));
        assert_eq!(
            a.mul(&Interval::new(-255, 0)),
            Err(IntervalError::Underflow)
        );
        let b: Interval<i8, Symmetric> = Interval::new(-127, 1);
        assert_eq!(b.mul(&Interval::new(-1, 1)), Ok(Interval::new(-127, 127)));
    }

    #[test]
    fn test_abs() {
        assert_eq!(iv(-7, 3).abs(), Ok(iv(0, 7)));
        assert_eq!(iv(-3, 7).abs(), Ok(iv(0, 7)));
        assert_eq!(iv(-7, -3).abs(), Ok(iv(3, 7)));
        assert_eq!(iv(3, 7).abs(), Ok(iv(3, 7)));
        assert_eq!(iv(0, 0).abs(), Ok(iv(0, 0)));
        assert_eq!(
            Interval::<i8>::new(-128, 0).abs(),
            Err(IntervalError::Overflow)
        );
    }

    #[test]
    fn test_min_max() {
        let a = iv(0, 10);
        let b = iv(-5, 5);
        assert_eq!(a.min(&b), iv(-5, 5));
        assert_eq!(a.max(&b), iv(0, 10));
        let c = iv(3, 20);
        assert_eq!(a.min(&c), iv(0, 10));
        assert_eq!(a.max(&c), iv(3, 20));
    }

    #[test]
    fn test_closest() {
        let a = iv(0, 10);
        assert_eq!(a.closest(&iv(-9, -1)), iv(0, 0));
        assert_eq!(a.closest(&iv(11, 30)), iv(10, 10));
        assert_eq!(a.closest(&iv(-5, 5)), iv(0, 5));
        assert_eq!(a.closest(&iv(2, 3)), iv(2, 3));
        assert_eq!(a.closest_point(-4), 0);
        assert_eq!(a.closest_point(14), 10);
        assert_eq!(a.closest_point(4), 4);
    }

    #[test]
    fn test_middle() {
        assert_eq!(iv(0, 10).middle(), 5);
        assert_eq!(iv(0, 3).middle(), 1);
        assert_eq!(iv(-10, -4).middle(), -7);
        assert_eq!(iv(-3, 0).middle(), -2);
        assert_eq!(iv(-3, 4).middle(), 0);
        assert_eq!(iv(-5, -5).middle(), -5);
        assert_eq!(Interval::<i8>::new(-128, 127).middle(), -1);
        assert_eq!(Interval::<i8>::new(125, 127).middle(), 126);
        assert_eq!(Interval::<i8>::new(-128, -126).middle(), -127);
    }

    #[test]
    fn test_middle_exact() {
        assert!(iv(0, 4).is_middle_exact());
        assert!(iv(-3, 1).is_middle_exact());
        assert!(iv(2, 2).is_middle_exact());
        assert!(!iv(0, 3).is_middle_exact());
        assert!(!iv(-4, 1).is_middle_exact());
        for lower in -12..12 {
            for upper in lower..14 {
                let a = iv(lower, upper);
                let m = a.middle();
                assert_eq!(a.is_middle_exact(), upper - m == m - lower);
                assert_eq!(m, (lower + upper).div_euclid(2));
            }
        }
    }

    #[test]
    fn test_iterator() {
        assert_eq!(iv(1, 4).iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(iv(5, 5).iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_iterator_at_type_edges() {
        let edge: Interval<i8> = Interval::new(125, 127);
        assert_eq!(edge.iter().collect::<Vec<_>>(), vec![125, 126, 127]);
        let low: Interval<i8> = Interval::new(-128, -127);
        assert_eq!(low.iter().rev().collect::<Vec<_>>(), vec![-127, -128]);
        assert_eq!(Interval::<i8>::full().iter().count(), 256);
    }

    #[test]
    fn test_double_ended_iterator() {
        let mut iter = iv(1, 4).iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.size_hint(), (2, Some(2)));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_into_iterator_ref_trait() {
        let a = iv(0, 2);
        let mut count = 0;
        for i in &a {
            assert_eq!(i, count);
            count += 1;
        }
        assert_eq!(count, 3);
        assert_eq!(a.len(), Some(3));
    }

    #[test]
    fn test_traits_display_debug() {
        let a = iv(-10, 20);
        assert_eq!(format!("{}", a), "[-10, 20]");
        assert_eq!(format!("{:?}", a), "Interval { lower: -10, upper: 20 }");
    }

    #[test]
    fn test_range_conversions() {
        let a = Interval::<IntegerType>::try_from(-2..=7).unwrap();
        assert_eq!(a, iv(-2, 7));
        let r: RangeInclusive<IntegerType> = a.into();
        assert_eq!(r, -2..=7);
        assert!(Interval::<IntegerType>::try_from(3..=1).is_err());

        match a.start_bound() {
            Bound::Included(&x) => assert_eq!(x, -2),
            _ => panic!("Wrong start bound"),
        }
        match a.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 7),
            _ => panic!("Wrong end bound"),
        }
    }

    proptest! {
        #[test]
        fn proptest_union_contains_operands(a in arb_interval(), b in arb_interval()) {
            let u = a.union(&b);
            prop_assert!(u.contains_interval(&a));
            prop_assert!(u.contains_interval(&b));
        }

        #[test]
        fn proptest_arithmetic_is_sound(a in arb_interval(), b in arb_interval()) {
            let sum = a.add(&b).unwrap();
            let diff = a.sub(&b).unwrap();
            let prod = a.mul(&b).unwrap();
            let lo = a.min(&b);
            let hi = a.max(&b);
            for x in &a {
                for y in &b {
                    prop_assert!(sum.contains(x + y));
                    prop_assert!(diff.contains(x - y));
                    prop_assert!(prod.contains(x * y));
                    prop_assert!(lo.contains(x.min(y)));
                    prop_assert!(hi.contains(x.max(y)));
                }
            }
        }

        #[test]
        fn proptest_arithmetic_is_tight(a in arb_interval(), b in arb_interval()) {
            let prod = a.mul(&b).unwrap();
            let products: Vec<_> = a.iter().flat_map(|x| b.iter().map(move |y| x * y)).collect();
            prop_assert_eq!(products.iter().min().copied(), Some(prod.lower()));
            prop_assert_eq!(products.iter().max().copied(), Some(prod.upper()));
        }

        #[test]
        fn proptest_unary_is_sound(a in arb_interval()) {
            let neg = a.negate().unwrap();
            let abs = a.abs().unwrap();
            for x in &a {
                prop_assert!(neg.contains(-x));
                prop_assert!(abs.contains(x.abs()));
            }
            prop_assert!(a.iter().any(|x| x.abs() == abs.lower()));
            prop_assert!(a.iter().any(|x| x.abs() == abs.upper()));
        }

        #[test]
        fn proptest_min_max_laws(a in arb_interval(), b in arb_interval()) {
            prop_assert_eq!(a.min(&a), a);
            prop_assert_eq!(a.max(&a), a);
            prop_assert_eq!(a.min(&b), b.min(&a));
            prop_assert_eq!(a.max(&b), b.max(&a));
        }

        #[test]
        fn proptest_closest_is_within_self(a in arb_interval(), b in arb_interval()) {
            let c = a.closest(&b);
            prop_assert!(a.contains_interval(&c));
            for y in &b {
                prop_assert!(c.contains(a.closest_point(y)));
            }
        }
    }
}
