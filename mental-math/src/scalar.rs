use std::fmt::Debug;

/// A numeric type usable as the component of a [`Vector3`](crate::Vector3) or
/// [`Matrix3`](crate::Matrix3).
///
/// Integer implementations wrap on overflow instead of panicking, floating point
/// implementations follow IEEE-754. Division is only ever called with a divisor
/// that is not [`Scalar::ZERO`].
pub trait Scalar: Copy + PartialEq + Debug + Default + 'static {
    const ZERO: Self;
    const ONE: Self;

    fn sum(self, rhs: Self) -> Self;

    fn difference(self, rhs: Self) -> Self;

    fn product(self, rhs: Self) -> Self;

    fn quotient(self, rhs: Self) -> Self;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_integer_scalar {
    ($($t: ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn sum(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn difference(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn product(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn quotient(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t: ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn sum(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn difference(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn product(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn quotient(self, rhs: Self) -> Self {
                    self / rhs
                }
            }
        )*
    };
}

impl_integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_scalar!(f32, f64);
