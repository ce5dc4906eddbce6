use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::errors::{MathError, Result};
use crate::scalar::Scalar;

/// A three component vector of any [`Scalar`] type.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    pub const fn one() -> Self {
        Self::splat(T::ONE)
    }

    pub const fn splat(value: T) -> Self {
        Vector3 {
            x: value,
            y: value,
            z: value,
        }
    }

    pub fn set_zero(&mut self) {
        self.fill(T::ZERO);
    }

    pub fn set_one(&mut self) {
        self.fill(T::ONE);
    }

    pub fn fill(&mut self, value: T) {
        self.x = value;
        self.y = value;
        self.z = value;
    }

    /// Componentwise `self + rhs`.
    pub fn sum(&self, rhs: &Self) -> Self {
        Vector3 {
            x: self.x.sum(rhs.x),
            y: self.y.sum(rhs.y),
            z: self.z.sum(rhs.z),
        }
    }

    /// Componentwise `self - rhs`.
    pub fn difference(&self, rhs: &Self) -> Self {
        Vector3 {
            x: self.x.difference(rhs.x),
            y: self.y.difference(rhs.y),
            z: self.z.difference(rhs.z),
        }
    }

    pub fn scale(&self, scalar: T) -> Self {
        Vector3 {
            x: self.x.product(scalar),
            y: self.y.product(scalar),
            z: self.z.product(scalar),
        }
    }

    /// Divides every component by `scalar`.
    ///
    /// Dividing by the zero value of `T` is rejected for every scalar type,
    /// floating point included, instead of producing infinities or NaNs.
    pub fn checked_div(&self, scalar: T) -> Result<Self> {
        if scalar.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        Ok(Vector3 {
            x: self.x.quotient(scalar),
            y: self.y.quotient(scalar),
            z: self.z.quotient(scalar),
        })
    }

    /// In-place [`Vector3::checked_div`]. `self` is left untouched on error.
    pub fn checked_div_assign(&mut self, scalar: T) -> Result<()> {
        *self = self.checked_div(scalar)?;
        Ok(())
    }

    pub fn dot(&self, rhs: &Self) -> T {
        self.x
            .product(rhs.x)
            .sum(self.y.product(rhs.y))
            .sum(self.z.product(rhs.z))
    }

    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.to_array().to_vec()
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Vector3 { x, y, z }
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        value.to_array()
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(&rhs)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.sum(&rhs);
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(&rhs)
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(&rhs);
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(rhs);
    }
}

#[cfg(feature = "glam")]
mod glam_interop {
    use super::Vector3;

    impl From<Vector3<f32>> for glam::Vec3 {
        fn from(value: Vector3<f32>) -> Self {
            glam::Vec3::from_array(value.to_array())
        }
    }

    impl From<glam::Vec3> for Vector3<f32> {
        fn from(value: glam::Vec3) -> Self {
            value.to_array().into()
        }
    }

    impl From<Vector3<f64>> for glam::DVec3 {
        fn from(value: Vector3<f64>) -> Self {
            glam::DVec3::from_array(value.to_array())
        }
    }

    impl From<Vector3<i32>> for glam::IVec3 {
        fn from(value: Vector3<i32>) -> Self {
            glam::IVec3::from_array(value.to_array())
        }
    }
}
