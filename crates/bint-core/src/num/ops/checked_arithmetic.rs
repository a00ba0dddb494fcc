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

use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A trait for types that support checked addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use bint_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: i8 = 100;
/// assert_eq!(a.checked_add_val(27), Some(127));
/// assert_eq!(a.checked_add_val(28), None); // Overflow occurs
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use bint_core::num::ops::checked_arithmetic::CheckedSubVal;
/// let a: i8 = -100;
/// assert_eq!(a.checked_sub_val(28), Some(-128));
/// assert_eq!(a.checked_sub_val(29), None); // Underflow occurs
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use bint_core::num::ops::checked_arithmetic::CheckedMulVal;
/// let a: i16 = 255;
/// assert_eq!(a.checked_mul_val(128), Some(32640));
/// assert_eq!(a.checked_mul_val(-255), None); // -65025 does not fit an i16
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked negation by value (no references).
///
/// # Examples
///
/// ```rust
/// # use bint_core::num::ops::checked_arithmetic::CheckedNegVal;
/// assert_eq!((-128i8).checked_neg_val(), None); // Overflow occurs
/// assert_eq!(100i8.checked_neg_val(), Some(-100));
/// ```
pub trait CheckedNegVal: Sized + Neg<Output = Self> {
    /// Performs checked negation by value, returning `None` if overflow occurs.
    fn checked_neg_val(self) -> Option<Self>;
}

/// A trait for types that support a checked absolute value by value.
///
/// # Examples
///
/// ```rust
/// # use bint_core::num::ops::checked_arithmetic::CheckedAbsVal;
/// assert_eq!((-128i8).checked_abs_val(), None); // Overflow occurs
/// assert_eq!((-127i8).checked_abs_val(), Some(127));
/// ```
pub trait CheckedAbsVal: Sized {
    /// Computes the absolute value, returning `None` if overflow occurs.
    fn checked_abs_val(self) -> Option<Self>;
}

/// A trait for types that support checked division by value, with a choice
/// of rounding direction.
///
/// # Examples
///
/// ```rust
/// # use bint_core::num::ops::checked_arithmetic::CheckedDivVal;
/// assert_eq!((-7i32).checked_div_floor_val(2), Some(-4));
/// assert_eq!((-7i32).checked_div_trunc_val(2), Some(-3));
/// assert_eq!(7i32.checked_div_floor_val(0), None); // Division by zero
/// assert_eq!(i32::MIN.checked_div_trunc_val(-1), None); // Overflow occurs
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Divides, rounding the quotient toward negative infinity.
    ///
    /// Returns `None` on division by zero or overflow.
    fn checked_div_floor_val(self, v: Self) -> Option<Self>;

    /// Divides, rounding the quotient toward zero.
    ///
    /// Returns `None` on division by zero or overflow.
    fn checked_div_trunc_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support a checked remainder by value, matching the
/// two rounding directions of [`CheckedDivVal`].
///
/// The floored remainder takes the sign of the divisor, the truncated
/// remainder takes the sign of the dividend.
///
/// # Examples
///
/// ```rust
/// # use bint_core::num::ops::checked_arithmetic::CheckedRemVal;
/// assert_eq!((-7i32).checked_rem_floor_val(2), Some(1));
/// assert_eq!((-7i32).checked_rem_trunc_val(2), Some(-1));
/// assert_eq!(7i32.checked_rem_floor_val(-2), Some(-1));
/// assert_eq!(7i32.checked_rem_trunc_val(0), None); // Division by zero
/// ```
pub trait CheckedRemVal: Sized + Rem<Self, Output = Self> {
    /// Remainder of [`CheckedDivVal::checked_div_floor_val`].
    fn checked_rem_floor_val(self, v: Self) -> Option<Self>;

    /// Remainder of [`CheckedDivVal::checked_div_trunc_val`].
    fn checked_rem_trunc_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_mul(self, v)
                }
            }

            impl CheckedNegVal for $t {
                #[inline(always)]
                fn checked_neg_val(self) -> Option<$t> {
                    <$t>::checked_neg(self)
                }
            }

            impl CheckedAbsVal for $t {
                #[inline(always)]
                fn checked_abs_val(self) -> Option<$t> {
                    <$t>::checked_abs(self)
                }
            }

            impl CheckedDivVal for $t {
                #[inline]
                fn checked_div_floor_val(self, v: $t) -> Option<$t> {
                    let q = <$t>::checked_div(self, v)?;
                    // `checked_div` succeeded, so neither the zero divisor nor
                    // `MIN / -1` can reach the remainder.
                    let r = self % v;
                    if r != 0 && ((r < 0) != (v < 0)) {
                        Some(q - 1)
                    } else {
                        Some(q)
                    }
                }

                #[inline(always)]
                fn checked_div_trunc_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_div(self, v)
                }
            }

            impl CheckedRemVal for $t {
                #[inline]
                fn checked_rem_floor_val(self, v: $t) -> Option<$t> {
                    let r = <$t>::checked_rem(self, v)?;
                    if r != 0 && ((r < 0) != (v < 0)) {
                        Some(r + v)
                    } else {
                        Some(r)
                    }
                }

                #[inline(always)]
                fn checked_rem_trunc_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_rem(self, v)
                }
            }
        )*
    };
}

checked_impl_val!(i8, i16, i32, i64, i128, isize);
