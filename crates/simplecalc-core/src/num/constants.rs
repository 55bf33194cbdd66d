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


//! # Float Constants
//!
//! Associated-constant traits for the floating-point types the calculator
//! works with. Generic code reaches for `T::ZERO` instead of literals, which
//! keeps `f32` and `f64` paths identical.

/// A trait for float types that have a constant representing -1.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for float types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for float types that have a constant representing positive zero.
///
/// # Examples
///
/// ```rust
/// # use simplecalc_core::num::constants::Zero;
/// assert_eq!(<f64 as Zero>::ZERO, 0.0);
/// assert!(<f64 as Zero>::ZERO.is_sign_positive());
/// ```
pub trait Zero {
    /// The constant representing +0.0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_float_constants_for {
    ($t:ty) => {
        impl MinusOne for $t {
            const MINUS_ONE: Self = -1.0;
        }

        impl PlusOne for $t {
            const PLUS_ONE: Self = 1.0;
        }

        impl Zero for $t {
            const ZERO: Self = 0.0;
        }
    };
}

impl_float_constants_for!(f32);
impl_float_constants_for!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of_constants<T>() -> T
    where
        T: MinusOne + PlusOne + Zero + core::ops::Add<Output = T>,
    {
        T::MINUS_ONE + T::PLUS_ONE + T::ZERO
    }

    #[test]
    fn test_f64_constants() {
        assert_eq!(<f64 as MinusOne>::MINUS_ONE, -1.0);
        assert_eq!(<f64 as PlusOne>::PLUS_ONE, 1.0);
        assert_eq!(<f64 as Zero>::ZERO, 0.0);
    }

    #[test]
    fn test_f32_constants() {
        assert_eq!(<f32 as MinusOne>::MINUS_ONE, -1.0_f32);
        assert_eq!(<f32 as PlusOne>::PLUS_ONE, 1.0_f32);
        assert_eq!(<f32 as Zero>::ZERO, 0.0_f32);
    }

    #[test]
    fn test_zero_is_positive_zero() {
        // -0.0 == 0.0, so check the sign bit explicitly.
        assert!(<f64 as Zero>::ZERO.is_sign_positive());
        assert!(<f32 as Zero>::ZERO.is_sign_positive());
    }

    #[test]
    fn test_constants_usable_generically() {
        assert_eq!(sum_of_constants::<f64>(), 0.0);
        assert_eq!(sum_of_constants::<f32>(), 0.0);
    }
}
