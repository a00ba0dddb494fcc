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

//! Associated constants for the signed integers the interval engine works on.
//!
//! The classifier partitions intervals by sign against the point intervals
//! `{-1}`, `{0}` and `{1}`; these traits make the sentinels available in
//! generic code without going through `num_traits::{Zero, One}` and their
//! by-reference helpers.

/// A trait for signed integer types that have a constant representing -1.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for signed integer types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for signed integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_sign_constants {
    ($($t:ty),* $(,)?) => {
        $(
            impl MinusOne for $t {
                const MINUS_ONE: Self = -1;
            }

            impl PlusOne for $t {
                const PLUS_ONE: Self = 1;
            }

            impl Zero for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_sign_constants!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn sentinels<T: MinusOne + PlusOne + Zero>() -> (T, T, T) {
        (T::MINUS_ONE, T::ZERO, T::PLUS_ONE)
    }

    #[test]
    fn test_sentinels_i8() {
        assert_eq!(sentinels::<i8>(), (-1, 0, 1));
    }

    #[test]
    fn test_sentinels_i128() {
        assert_eq!(sentinels::<i128>(), (-1, 0, 1));
    }
}
