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

//! Classification of operations whose success depends on concrete values.
//!
//! Floor, ceil, clamp, division and remainder cannot be answered from the
//! operand intervals alone: whether `value >= bound` holds, or whether a
//! divisor is zero, depends on the actual values. Each operation here
//! therefore returns a [`Classified`] outcome:
//!
//! - `MustFail`: no pair of operand values succeeds.
//! - `MustPass(interval)`: every pair of operand values succeeds; callers can
//!   skip the runtime check entirely.
//! - `MayFail(interval)`: success depends on the concrete values, which must
//!   be checked at the point of use.
//!
//! The carried interval bounds every successful result.

use crate::{
    error::{IntervalError, ValueError},
    math::interval::{Interval, hull},
    num::{BoundInt, limits::Limits},
};
use smallvec::SmallVec;
use std::cmp::{max, min};

/// The rounding rule of an integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rounding {
    /// Round the quotient toward negative infinity.
    Floor,
    /// Round the quotient toward zero.
    Truncate,
}

impl Rounding {
    /// Divides `numerator` by `denominator` with this rounding rule.
    ///
    /// Returns `None` on a zero divisor or overflow.
    #[inline]
    pub fn div<T: BoundInt>(self, numerator: T, denominator: T) -> Option<T> {
        match self {
            Self::Floor => numerator.checked_div_floor_val(denominator),
            Self::Truncate => numerator.checked_div_trunc_val(denominator),
        }
    }

    /// The remainder matching [`Rounding::div`].
    ///
    /// Returns `None` on a zero divisor or overflow.
    #[inline]
    pub fn rem<T: BoundInt>(self, numerator: T, denominator: T) -> Option<T> {
        match self {
            Self::Floor => numerator.checked_rem_floor_val(denominator),
            Self::Truncate => numerator.checked_rem_trunc_val(denominator),
        }
    }
}

impl std::fmt::Display for Rounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Floor => write!(f, "floor"),
            Self::Truncate => write!(f, "truncate"),
        }
    }
}

/// The outcome of classifying a fallible operation from operand intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classified<I> {
    /// The operation fails for every combination of operand values.
    MustFail,
    /// The operation succeeds for every combination of operand values.
    MustPass(I),
    /// The operation succeeds or fails depending on the concrete values.
    MayFail(I),
}

impl<I> Classified<I> {
    /// Returns the result interval, or `None` for `MustFail`.
    #[inline]
    pub fn interval(&self) -> Option<&I> {
        match self {
            Self::MustFail => None,
            Self::MustPass(i) | Self::MayFail(i) => Some(i),
        }
    }

    /// Consumes the classification and returns the result interval, if any.
    #[inline]
    pub fn into_interval(self) -> Option<I> {
        match self {
            Self::MustFail => None,
            Self::MustPass(i) | Self::MayFail(i) => Some(i),
        }
    }

    #[inline]
    pub fn is_must_fail(&self) -> bool {
        matches!(self, Self::MustFail)
    }

    #[inline]
    pub fn is_must_pass(&self) -> bool {
        matches!(self, Self::MustPass(_))
    }

    #[inline]
    pub fn is_may_fail(&self) -> bool {
        matches!(self, Self::MayFail(_))
    }

    /// Maps the carried interval, keeping the classification.
    #[inline]
    pub fn map<J, F>(self, f: F) -> Classified<J>
    where
        F: FnOnce(I) -> J,
    {
        match self {
            Self::MustFail => Classified::MustFail,
            Self::MustPass(i) => Classified::MustPass(f(i)),
            Self::MayFail(i) => Classified::MayFail(f(i)),
        }
    }

    /// Chains a second classified stage onto this one.
    ///
    /// The chain fails if either stage must fail, passes only if both stages
    /// must pass, and may fail otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::classify::Classified;
    ///
    /// let first: Classified<i32> = Classified::MayFail(1);
    /// assert_eq!(first.and_then(|i| Classified::MustPass(i + 1)), Classified::MayFail(2));
    /// assert_eq!(first.and_then(|_| Classified::<i32>::MustFail), Classified::MustFail);
    /// ```
    #[inline]
    pub fn and_then<J, F>(self, f: F) -> Classified<J>
    where
        F: FnOnce(I) -> Classified<J>,
    {
        match self {
            Self::MustFail => Classified::MustFail,
            Self::MustPass(i) => f(i),
            Self::MayFail(i) => match f(i) {
                Classified::MustFail => Classified::MustFail,
                Classified::MustPass(j) | Classified::MayFail(j) => Classified::MayFail(j),
            },
        }
    }

    /// Resolves the classification once the concrete values are known.
    ///
    /// `MustPass` succeeds without evaluating `passes`, `MustFail` fails with
    /// `failure` without evaluating it, and `MayFail` consults `passes`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::{error::ValueError, math::classify::Classified};
    ///
    /// let c: Classified<i32> = Classified::MayFail(4);
    /// assert_eq!(c.resolve(|| true, ValueError::OutOfBounds), Ok(4));
    /// assert_eq!(c.resolve(|| false, ValueError::OutOfBounds), Err(ValueError::OutOfBounds));
    /// ```
    #[inline]
    pub fn resolve<F>(self, passes: F, failure: ValueError) -> Result<I, ValueError>
    where
        F: FnOnce() -> bool,
    {
        match self {
            Self::MustFail => Err(failure),
            Self::MustPass(i) => Ok(i),
            Self::MayFail(i) => {
                if passes() {
                    Ok(i)
                } else {
                    Err(failure)
                }
            }
        }
    }
}

impl<T, L> Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    /// Classifies raising the lower bound of `self` to a value drawn from `bound`.
    ///
    /// The operation fails at runtime when the concrete value is below the
    /// concrete bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::{classify::Classified, interval::Interval};
    ///
    /// let a: Interval<i32> = Interval::new(-3, 4);
    /// let zero: Interval<i32> = Interval::new(0, 0);
    /// assert_eq!(a.floor(&zero), Classified::MayFail(Interval::new(0, 4)));
    /// assert_eq!(a.floor(&Interval::new(5, 9)), Classified::MustFail);
    /// assert_eq!(a.floor(&Interval::new(-9, -3)), Classified::MustPass(a));
    /// ```
    pub fn floor(&self, bound: &Self) -> Classified<Self> {
        if self.upper() < bound.lower() {
            return Classified::MustFail;
        }
        let narrowed = Self::new_unchecked(max(self.lower(), bound.lower()), self.upper());
        if bound.upper() <= self.lower() {
            Classified::MustPass(narrowed)
        } else {
            Classified::MayFail(narrowed)
        }
    }

    /// Classifies lowering the upper bound of `self` to a value drawn from `bound`.
    ///
    /// The operation fails at runtime when the concrete value is above the
    /// concrete bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::{classify::Classified, interval::Interval};
    ///
    /// let a: Interval<i32> = Interval::new(-3, 4);
    /// assert_eq!(a.ceil(&Interval::new(0, 2)), Classified::MayFail(Interval::new(-3, 2)));
    /// assert_eq!(a.ceil(&Interval::new(-9, -4)), Classified::MustFail);
    /// ```
    pub fn ceil(&self, bound: &Self) -> Classified<Self> {
        if bound.upper() < self.lower() {
            return Classified::MustFail;
        }
        let narrowed = Self::new_unchecked(self.lower(), min(self.upper(), bound.upper()));
        if self.upper() <= bound.lower() {
            Classified::MustPass(narrowed)
        } else {
            Classified::MayFail(narrowed)
        }
    }

    /// Classifies narrowing `self` to lie between values drawn from
    /// `floor_bound` and `ceil_bound`.
    ///
    /// Equivalent to [`Interval::ceil`] followed by [`Interval::floor`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::{classify::Classified, interval::Interval};
    ///
    /// let a: Interval<i32> = Interval::new(0, 100);
    /// let lo: Interval<i32> = Interval::new(10, 10);
    /// let hi: Interval<i32> = Interval::new(20, 30);
    /// assert_eq!(a.clamp(&lo, &hi), Classified::MayFail(Interval::new(10, 30)));
    /// ```
    pub fn clamp(&self, floor_bound: &Self, ceil_bound: &Self) -> Classified<Self> {
        self.ceil(ceil_bound)
            .and_then(|narrowed| narrowed.floor(floor_bound))
    }

    /// Classifies dividing a value of `self` by a value of `denominator`.
    ///
    /// The division must fail if the denominator is the point `{0}`, may fail
    /// if it merely contains `0`, and must pass otherwise. The result interval
    /// is computed by sign-partitioned corner analysis: both operands are
    /// split into their negative and non-negative parts, the extreme
    /// quotients of every non-empty sign combination are taken at its
    /// corners, and the union of those intervals is returned.
    ///
    /// Fails with an [`IntervalError`] if a corner quotient is not
    /// representable, e.g. `T::MIN / -1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::{classify::{Classified, Rounding}, interval::Interval};
    ///
    /// let n: Interval<i32> = Interval::new(-16, 16);
    /// let d: Interval<i32> = Interval::new(2, 2);
    /// assert_eq!(
    ///     n.divide(&d, Rounding::Floor),
    ///     Ok(Classified::MustPass(Interval::new(-8, 8)))
    /// );
    /// assert_eq!(
    ///     n.divide(&Interval::new(0, 0), Rounding::Floor),
    ///     Ok(Classified::MustFail)
    /// );
    /// ```
    pub fn divide(
        &self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Classified<Self>, IntervalError> {
        if denominator.point_value() == Some(T::ZERO) {
            return Ok(Classified::MustFail);
        }

        let numerators = self.split_by_sign(T::ZERO);
        let denominators = denominator.split_by_sign(T::PLUS_ONE);

        let mut result: Option<(T, T)> = None;
        for n in &numerators {
            for d in &denominators {
                let corners = [
                    quotient(n.lower(), d.lower(), rounding)?,
                    quotient(n.lower(), d.upper(), rounding)?,
                    quotient(n.upper(), d.lower(), rounding)?,
                    quotient(n.upper(), d.upper(), rounding)?,
                ];
                let (lo, hi) = hull(&corners);
                result = Some(match result {
                    Some((acc_lo, acc_hi)) => (min(acc_lo, lo), max(acc_hi, hi)),
                    None => (lo, hi),
                });
            }
        }

        // A non-zero denominator always has at least one signed part.
        let Some((lower, upper)) = result else {
            return Ok(Classified::MustFail);
        };
        let interval = Self::from_computed(lower, upper)?;

        if denominator.contains(T::ZERO) {
            Ok(Classified::MayFail(interval))
        } else {
            Ok(Classified::MustPass(interval))
        }
    }

    /// Classifies the remainder of dividing a value of `self` by a value of
    /// `denominator`.
    ///
    /// The classification matches [`Interval::divide`]. The result interval is
    /// the loose `[-m, m]`, where `m` is the largest magnitude in
    /// `denominator`, for either rounding rule; it may become narrower in the
    /// future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::{classify::{Classified, Rounding}, interval::Interval};
    ///
    /// let n: Interval<i32> = Interval::new(0, 100);
    /// let d: Interval<i32> = Interval::new(-7, 3);
    /// assert_eq!(
    ///     n.remainder(&d, Rounding::Truncate),
    ///     Ok(Classified::MayFail(Interval::new(-7, 7)))
    /// );
    /// ```
    pub fn remainder(
        &self,
        denominator: &Self,
        _rounding: Rounding,
    ) -> Result<Classified<Self>, IntervalError> {
        if denominator.point_value() == Some(T::ZERO) {
            return Ok(Classified::MustFail);
        }

        let lower_magnitude = denominator
            .lower()
            .checked_abs_val()
            .ok_or(IntervalError::Overflow)?;
        let upper_magnitude = denominator
            .upper()
            .checked_abs_val()
            .ok_or(IntervalError::Overflow)?;
        let m = max(lower_magnitude, upper_magnitude);
        // `m` is a magnitude, so `-m` is always representable.
        let interval = Self::from_computed(-m, m)?;

        if denominator.contains(T::ZERO) {
            Ok(Classified::MayFail(interval))
        } else {
            Ok(Classified::MustPass(interval))
        }
    }

    /// Splits `self` into its negative part (`<= -1`) and its part at or
    /// above `positive_from`, dropping whichever is empty.
    fn split_by_sign(&self, positive_from: T) -> SmallVec<[Self; 2]> {
        let minus_one = Self::new_unchecked(T::MINUS_ONE, T::MINUS_ONE);
        let start = Self::new_unchecked(positive_from, positive_from);

        let mut parts = SmallVec::new();
        if let Some(negative) = self.ceil(&minus_one).into_interval() {
            parts.push(negative);
        }
        if let Some(positive) = self.floor(&start).into_interval() {
            parts.push(positive);
        }
        parts
    }
}

#[inline]
fn quotient<T: BoundInt>(n: T, d: T, rounding: Rounding) -> Result<T, IntervalError> {
    // Divisors are never zero here, so `None` means `T::MIN / -1`.
    rounding.div(n, d).ok_or(IntervalError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::limits::Symmetric;
    use proptest::prelude::*;
    use rstest::rstest;

    type IntegerType = i32;

    fn iv(lower: IntegerType, upper: IntegerType) -> Interval<IntegerType> {
        Interval::new(lower, upper)
    }

    fn arb_interval() -> impl Strategy<Value = Interval<IntegerType>> {
        (-30..30, 0..10).prop_map(|(lower, width)| iv(lower, lower + width))
    }

    #[test]
    fn test_floor_scenario() {
        let c = iv(-3, 4).floor(&iv(0, 0));
        assert_eq!(c, Classified::MayFail(iv(0, 4)));
        assert_eq!(c.resolve(|| 2 >= 0, ValueError::OutOfBounds), Ok(iv(0, 4)));
        assert_eq!(
            c.resolve(|| -2 >= 0, ValueError::OutOfBounds),
            Err(ValueError::OutOfBounds)
        );
    }

    #[rstest]
    #[case::below(iv(0, 4), iv(5, 6), Classified::MustFail)]
    #[case::touching_upper(iv(0, 4), iv(4, 6), Classified::MayFail(iv(4, 4)))]
    #[case::overlap(iv(0, 4), iv(2, 6), Classified::MayFail(iv(2, 4)))]
    #[case::touching_lower(iv(0, 4), iv(-2, 0), Classified::MustPass(iv(0, 4)))]
    #[case::above(iv(0, 4), iv(-5, -1), Classified::MustPass(iv(0, 4)))]
    fn test_floor_cases(
        #[case] a: Interval<IntegerType>,
        #[case] bound: Interval<IntegerType>,
        #[case] expected: Classified<Interval<IntegerType>>,
    ) {
        assert_eq!(a.floor(&bound), expected);
    }

    #[rstest]
    #[case::above(iv(0, 4), iv(-3, -1), Classified::MustFail)]
    #[case::touching_lower(iv(0, 4), iv(-3, 0), Classified::MayFail(iv(0, 0)))]
    #[case::overlap(iv(0, 4), iv(1, 2), Classified::MayFail(iv(0, 2)))]
    #[case::touching_upper(iv(0, 4), iv(4, 9), Classified::MustPass(iv(0, 4)))]
    #[case::below(iv(0, 4), iv(7, 9), Classified::MustPass(iv(0, 4)))]
    fn test_ceil_cases(
        #[case] a: Interval<IntegerType>,
        #[case] bound: Interval<IntegerType>,
        #[case] expected: Classified<Interval<IntegerType>>,
    ) {
        assert_eq!(a.ceil(&bound), expected);
    }

    #[test]
    fn test_clamp() {
        let a = iv(0, 100);
        assert_eq!(
            a.clamp(&iv(-5, 0), &iv(100, 200)),
            Classified::MustPass(iv(0, 100))
        );
        assert_eq!(
            a.clamp(&iv(10, 20), &iv(50, 60)),
            Classified::MayFail(iv(10, 60))
        );
        assert_eq!(a.clamp(&iv(10, 20), &iv(-9, -1)), Classified::MustFail);
        assert_eq!(a.clamp(&iv(101, 120), &iv(200, 300)), Classified::MustFail);
        // The ceiling narrows the interval below every possible floor.
        assert_eq!(a.clamp(&iv(40, 50), &iv(20, 30)), Classified::MustFail);
    }

    #[test]
    fn test_divide_scenario() {
        let n = iv(-16, 16);
        let d = iv(2, 2);
        let floor = n.divide(&d, Rounding::Floor).unwrap();
        let trunc = n.divide(&d, Rounding::Truncate).unwrap();
        assert_eq!(floor, Classified::MustPass(iv(-8, 8)));
        assert_eq!(trunc, Classified::MustPass(iv(-8, 8)));
        assert_eq!(Rounding::Floor.div(-7, 2), Some(-4));
        assert_eq!(Rounding::Truncate.div(-7, 2), Some(-3));
    }

    #[rstest]
    #[case::zero_point(iv(0, 0), false, true)]
    #[case::contains_zero(iv(-1, 3), true, false)]
    #[case::zero_lower(iv(0, 3), true, false)]
    #[case::zero_upper(iv(-3, 0), true, false)]
    #[case::positive(iv(1, 3), false, false)]
    #[case::negative(iv(-3, -1), false, false)]
    fn test_divide_classification(
        #[case] d: Interval<IntegerType>,
        #[case] may_fail: bool,
        #[case] must_fail: bool,
        #[values(Rounding::Floor, Rounding::Truncate)] rounding: Rounding,
    ) {
        let c = iv(-10, 10).divide(&d, rounding).unwrap();
        assert_eq!(c.is_may_fail(), may_fail);
        assert_eq!(c.is_must_fail(), must_fail);
        assert_eq!(c.is_must_pass(), !may_fail && !must_fail);

        let r = iv(-10, 10).remainder(&d, rounding).unwrap();
        assert_eq!(r.is_may_fail(), may_fail);
        assert_eq!(r.is_must_fail(), must_fail);
    }

    #[test]
    fn test_divide_mixed_signs() {
        // A naive corner analysis of [-10, 10] / [-2, 3] would miss +-10.
        assert_eq!(
            iv(-10, 10).divide(&iv(-2, 3), Rounding::Truncate),
            Ok(Classified::MayFail(iv(-10, 10)))
        );
        assert_eq!(
            iv(1, 10).divide(&iv(-2, 3), Rounding::Floor),
            Ok(Classified::MayFail(iv(-10, 10)))
        );
        assert_eq!(
            iv(7, 7).divide(&iv(-2, -2), Rounding::Floor),
            Ok(Classified::MustPass(iv(-4, -4)))
        );
        assert_eq!(
            iv(7, 7).divide(&iv(-2, -2), Rounding::Truncate),
            Ok(Classified::MustPass(iv(-3, -3)))
        );
    }

    #[test]
    fn test_divide_overflow() {
        let n: Interval<i8> = Interval::new(-128, 0);
        let d: Interval<i8> = Interval::new(-1, -1);
        assert_eq!(n.divide(&d, Rounding::Floor), Err(IntervalError::Overflow));

        let n: Interval<i8, Symmetric> = Interval::new(-127, 0);
        let d: Interval<i8, Symmetric> = Interval::new(-1, -1);
        assert_eq!(
            n.divide(&d, Rounding::Floor),
            Ok(Classified::MustPass(Interval::new(0, 127)))
        );
    }

    #[test]
    fn test_remainder_bound() {
        assert_eq!(
            iv(-100, 100).remainder(&iv(3, 5), Rounding::Floor),
            Ok(Classified::MustPass(iv(-5, 5)))
        );
        assert_eq!(
            iv(-100, 100).remainder(&iv(-9, -2), Rounding::Truncate),
            Ok(Classified::MustPass(iv(-9, 9)))
        );
        assert_eq!(
            Interval::<i8>::new(0, 1).remainder(&Interval::new(-128, -1), Rounding::Floor),
            Err(IntervalError::Overflow)
        );
    }

    #[test]
    fn test_classified_combinators() {
        let c: Classified<IntegerType> = Classified::MustPass(3);
        assert_eq!(c.map(|x| x * 2), Classified::MustPass(6));
        assert_eq!(c.interval(), Some(&3));
        assert_eq!(Classified::<IntegerType>::MustFail.into_interval(), None);
        assert_eq!(
            c.and_then(|x| Classified::MayFail(x + 1)),
            Classified::MayFail(4)
        );
        assert_eq!(
            Classified::<IntegerType>::MustFail.resolve(|| true, ValueError::DivisionByZero),
            Err(ValueError::DivisionByZero)
        );
    }

    proptest! {
        #[test]
        fn proptest_divide_is_sound(a in arb_interval(), d in arb_interval()) {
            for rounding in [Rounding::Floor, Rounding::Truncate] {
                let c = a.divide(&d, rounding).unwrap();
                prop_assert_eq!(c.is_must_fail(), d.point_value() == Some(0));
                prop_assert_eq!(c.is_must_pass(), !d.contains(0));
                if let Some(result) = c.interval() {
                    let mut seen = Vec::new();
                    for x in &a {
                        for y in d.iter().filter(|y| *y != 0) {
                            let q = rounding.div(x, y).unwrap();
                            prop_assert!(result.contains(q));
                            seen.push(q);
                        }
                    }
                    prop_assert_eq!(seen.iter().min().copied(), Some(result.lower()));
                    prop_assert_eq!(seen.iter().max().copied(), Some(result.upper()));
                }
            }
        }

        #[test]
        fn proptest_remainder_is_sound(a in arb_interval(), d in arb_interval()) {
            for rounding in [Rounding::Floor, Rounding::Truncate] {
                if let Some(result) = a.remainder(&d, rounding).unwrap().interval() {
                    for x in &a {
                        for y in d.iter().filter(|y| *y != 0) {
                            prop_assert!(result.contains(rounding.rem(x, y).unwrap()));
                        }
                    }
                }
            }
        }

        #[test]
        fn proptest_floor_ceil_are_exact(a in arb_interval(), b in arb_interval()) {
            let floor = a.floor(&b);
            let ceil = a.ceil(&b);
            let pairs: Vec<_> = a.iter().flat_map(|x| b.iter().map(move |y| (x, y))).collect();

            let floor_passes = pairs.iter().filter(|(x, y)| x >= y).count();
            prop_assert_eq!(floor.is_must_fail(), floor_passes == 0);
            prop_assert_eq!(floor.is_must_pass(), floor_passes == pairs.len());
            if let Some(result) = floor.interval() {
                for (x, _) in pairs.iter().filter(|(x, y)| x >= y) {
                    prop_assert!(result.contains(*x));
                }
            }

            let ceil_passes = pairs.iter().filter(|(x, y)| x <= y).count();
            prop_assert_eq!(ceil.is_must_fail(), ceil_passes == 0);
            prop_assert_eq!(ceil.is_must_pass(), ceil_passes == pairs.len());
            if let Some(result) = ceil.interval() {
                for (x, _) in pairs.iter().filter(|(x, y)| x <= y) {
                    prop_assert!(result.contains(*x));
                }
            }
        }
    }
}
