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

//! Furthest-point and ordering queries between intervals.
//!
//! Both queries answer a question about concrete values using only their
//! intervals, by enumerating which answers are possible. The caller resolves
//! the final answer once the concrete values are known, and can skip that
//! work whenever only one answer is possible.

use crate::{
    math::interval::Interval,
    num::{BoundInt, limits::Limits},
};
use std::cmp::Ordering;

const LOWER: u8 = 0b001;
const UPPER: u8 = 0b010;
const EQUIDISTANT: u8 = 0b100;

/// Which bound of an interval `A` can be furthest from a value drawn from `B`.
///
/// A bitset of {lower possible, upper possible, equidistant possible}. The
/// empty set is reserved for a point interval `A`, whose bounds coincide.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FurthestClassification {
    /// `A` is a single point; both bounds are the same value.
    BothEqual = 0,
    LowerOnly = LOWER,
    UpperOnly = UPPER,
    LowerOrUpper = LOWER | UPPER,
    Equidistant = EQUIDISTANT,
    LowerOrEquidistant = LOWER | EQUIDISTANT,
    UpperOrEquidistant = UPPER | EQUIDISTANT,
    /// Every outcome is possible.
    Any = LOWER | UPPER | EQUIDISTANT,
}

impl FurthestClassification {
    #[inline]
    const fn from_bits(bits: u8) -> Self {
        match bits & (LOWER | UPPER | EQUIDISTANT) {
            LOWER => Self::LowerOnly,
            UPPER => Self::UpperOnly,
            0b011 => Self::LowerOrUpper,
            EQUIDISTANT => Self::Equidistant,
            0b101 => Self::LowerOrEquidistant,
            0b110 => Self::UpperOrEquidistant,
            0b111 => Self::Any,
            _ => Self::BothEqual,
        }
    }

    /// Returns the raw bitset.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns `true` if the lower bound can be the furthest point.
    #[inline]
    pub const fn admits_lower(self) -> bool {
        self.bits() & LOWER != 0
    }

    /// Returns `true` if the upper bound can be the furthest point.
    #[inline]
    pub const fn admits_upper(self) -> bool {
        self.bits() & UPPER != 0
    }

    /// Returns `true` if both bounds can be equally far away.
    #[inline]
    pub const fn admits_equidistant(self) -> bool {
        self.bits() & EQUIDISTANT != 0
    }

    /// Returns `true` if `point` is one of the outcomes this classification allows.
    pub fn admits<T>(self, point: &FurthestPoint<T>) -> bool {
        match point {
            FurthestPoint::Both(_) => self == Self::BothEqual,
            FurthestPoint::Lower(_) => self.admits_lower(),
            FurthestPoint::Upper(_) => self.admits_upper(),
            FurthestPoint::Equidistant { .. } => self.admits_equidistant(),
        }
    }
}

/// The resolved furthest point of an interval from a concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FurthestPoint<T> {
    /// The interval is a single point.
    Both(T),
    /// The lower bound is strictly furthest.
    Lower(T),
    /// The upper bound is strictly furthest.
    Upper(T),
    /// Both bounds are equally far from the value.
    Equidistant { lower: T, upper: T },
}

impl<T: Copy> FurthestPoint<T> {
    /// Returns the unique furthest value, or `None` on a tie.
    #[inline]
    pub fn value(&self) -> Option<T> {
        match *self {
            Self::Both(v) | Self::Lower(v) | Self::Upper(v) => Some(v),
            Self::Equidistant { .. } => None,
        }
    }
}

const LESS: u8 = 0b001;
const SAME: u8 = 0b010;
const MORE: u8 = 0b100;

/// Which orderings between a value of `A` and a value of `B` are possible.
///
/// `Less` and `More` without `Same` can never be produced: two intervals that
/// admit both orderings overlap and therefore also admit equality.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderClassification {
    Less = LESS,
    Same = SAME,
    More = MORE,
    LessOrSame = LESS | SAME,
    SameOrMore = SAME | MORE,
    Any = LESS | SAME | MORE,
}

impl OrderClassification {
    /// Returns `true` if `ordering` is possible.
    #[inline]
    pub const fn admits(self, ordering: Ordering) -> bool {
        let bit = match ordering {
            Ordering::Less => LESS,
            Ordering::Equal => SAME,
            Ordering::Greater => MORE,
        };
        (self as u8) & bit != 0
    }

    /// Returns the ordering if only one is possible.
    #[inline]
    pub const fn definite(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Same => Some(Ordering::Equal),
            Self::More => Some(Ordering::Greater),
            _ => None,
        }
    }

    /// Resolves the ordering of the concrete values `a` and `b`.
    ///
    /// Definite classifications are answered without comparing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::{interval::Interval, query::OrderClassification};
    /// # use std::cmp::Ordering;
    ///
    /// let a: Interval<i32> = Interval::new(0, 12);
    /// let b: Interval<i32> = Interval::new(-10, 4);
    /// let order = a.order(&b);
    /// assert_eq!(order, OrderClassification::Any);
    /// assert_eq!(order.resolve(1, 3), Ordering::Less);
    /// ```
    #[inline]
    pub fn resolve<T: Ord>(self, a: T, b: T) -> Ordering {
        match self.definite() {
            Some(ordering) => ordering,
            None => a.cmp(&b),
        }
    }
}

impl<T, L> Interval<T, L>
where
    T: BoundInt,
    L: Limits<T>,
{
    /// Classifies which bound of `self` can be furthest from a value of `from`.
    ///
    /// The concrete answer for a value `p` is given by
    /// [`Interval::furthest_point`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::{interval::Interval, query::FurthestClassification};
    ///
    /// let a: Interval<i32> = Interval::new(0, 4);
    /// assert_eq!(a.furthest(&Interval::new(2, 2)), FurthestClassification::Equidistant);
    /// assert_eq!(a.furthest(&Interval::new(-9, 0)), FurthestClassification::UpperOnly);
    /// assert_eq!(a.furthest(&Interval::new(0, 9)), FurthestClassification::Any);
    /// ```
    pub fn furthest(&self, from: &Self) -> FurthestClassification {
        if self.is_point() {
            return FurthestClassification::BothEqual;
        }

        let m = self.middle();
        let exact = self.is_middle_exact();
        let mut bits = 0;
        if m < from.upper() {
            bits |= LOWER;
        }
        if exact {
            if from.contains(m) {
                bits |= EQUIDISTANT;
            }
            if from.lower() < m {
                bits |= UPPER;
            }
        } else if from.lower() <= m {
            bits |= UPPER;
        }
        FurthestClassification::from_bits(bits)
    }

    /// Returns the bound of `self` furthest from the concrete value `point`.
    ///
    /// Ties only occur at the exact middle of an interval with an even
    /// `lower + upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::{interval::Interval, query::FurthestPoint};
    ///
    /// let a: Interval<i32> = Interval::new(0, 4);
    /// assert_eq!(a.furthest_point(1), FurthestPoint::Upper(4));
    /// assert_eq!(a.furthest_point(2), FurthestPoint::Equidistant { lower: 0, upper: 4 });
    /// assert_eq!(a.furthest_point(3), FurthestPoint::Lower(0));
    /// ```
    pub fn furthest_point(&self, point: T) -> FurthestPoint<T> {
        if self.is_point() {
            return FurthestPoint::Both(self.lower());
        }

        let m = self.middle();
        if point == m && self.is_middle_exact() {
            FurthestPoint::Equidistant {
                lower: self.lower(),
                upper: self.upper(),
            }
        } else if point <= m {
            FurthestPoint::Upper(self.upper())
        } else {
            FurthestPoint::Lower(self.lower())
        }
    }

    /// Classifies which orderings of a value of `self` against a value of
    /// `other` are possible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bint_core::math::{interval::Interval, query::OrderClassification};
    ///
    /// let a: Interval<i32> = Interval::new(0, 5);
    /// assert_eq!(a.order(&Interval::new(5, 5)), OrderClassification::LessOrSame);
    /// assert_eq!(a.order(&Interval::new(6, 9)), OrderClassification::Less);
    /// ```
    pub fn order(&self, other: &Self) -> OrderClassification {
        let less = self.lower() < other.upper();
        let more = self.upper() > other.lower();
        let same = self.lower() <= other.upper() && other.lower() <= self.upper();
        match (less, same, more) {
            (true, false, false) => OrderClassification::Less,
            (false, true, false) => OrderClassification::Same,
            (false, false, true) => OrderClassification::More,
            (true, true, false) => OrderClassification::LessOrSame,
            (false, true, true) => OrderClassification::SameOrMore,
            (true, true, true) => OrderClassification::Any,
            (_, false, _) => unreachable!("overlapping intervals always admit equality"),
        }
    }
}
