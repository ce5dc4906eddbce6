use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::errors::Result;
use crate::scalar::Scalar;
use crate::vector::Vector3;

/// A row-major 3x3 matrix made out of three [`Vector3`] rows.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Matrix3<T> {
    pub row0: Vector3<T>,
    pub row1: Vector3<T>,
    pub row2: Vector3<T>,
}

impl<T: Scalar> Matrix3<T> {
    pub const fn from_rows(row0: Vector3<T>, row1: Vector3<T>, row2: Vector3<T>) -> Self {
        Matrix3 { row0, row1, row2 }
    }

    pub const fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    pub const fn one() -> Self {
        Self::splat(T::ONE)
    }

    pub const fn identity() -> Self {
        Matrix3 {
            row0: Vector3::new(T::ONE, T::ZERO, T::ZERO),
            row1: Vector3::new(T::ZERO, T::ONE, T::ZERO),
            row2: Vector3::new(T::ZERO, T::ZERO, T::ONE),
        }
    }

    pub const fn splat(value: T) -> Self {
        Matrix3 {
            row0: Vector3::splat(value),
            row1: Vector3::splat(value),
            row2: Vector3::splat(value),
        }
    }

    /// Builds a matrix from nine values given row by row.
    pub const fn from_values(values: [T; 9]) -> Self {
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = values;

        Matrix3 {
            row0: Vector3::new(m00, m01, m02),
            row1: Vector3::new(m10, m11, m12),
            row2: Vector3::new(m20, m21, m22),
        }
    }

    pub fn set_zero(&mut self) {
        self.fill(T::ZERO);
    }

    pub fn set_one(&mut self) {
        self.fill(T::ONE);
    }

    pub fn set_identity(&mut self) {
        self.set_zero();
        self.row0.x = T::ONE;
        self.row1.y = T::ONE;
        self.row2.z = T::ONE;
    }

    pub fn fill(&mut self, value: T) {
        self.row0.fill(value);
        self.row1.fill(value);
        self.row2.fill(value);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_custom(
        &mut self,
        m00: T,
        m01: T,
        m02: T,
        m10: T,
        m11: T,
        m12: T,
        m20: T,
        m21: T,
        m22: T,
    ) {
        *self = Self::from_values([m00, m01, m02, m10, m11, m12, m20, m21, m22]);
    }

    pub fn rows(&self) -> [Vector3<T>; 3] {
        [self.row0, self.row1, self.row2]
    }

    pub fn column(&self, index: usize) -> Option<Vector3<T>> {
        let pick = |row: &Vector3<T>| match index {
            0 => Some(row.x),
            1 => Some(row.y),
            2 => Some(row.z),
            _ => None,
        };

        Some(Vector3::new(
            pick(&self.row0)?,
            pick(&self.row1)?,
            pick(&self.row2)?,
        ))
    }

    pub fn transpose(&self) -> Self {
        Matrix3 {
            row0: Vector3::new(self.row0.x, self.row1.x, self.row2.x),
            row1: Vector3::new(self.row0.y, self.row1.y, self.row2.y),
            row2: Vector3::new(self.row0.z, self.row1.z, self.row2.z),
        }
    }

    fn map_rows(&self, f: impl Fn(&Vector3<T>) -> Vector3<T>) -> Self {
        Matrix3 {
            row0: f(&self.row0),
            row1: f(&self.row1),
            row2: f(&self.row2),
        }
    }

    pub fn sum(&self, rhs: &Self) -> Self {
        Matrix3 {
            row0: self.row0.sum(&rhs.row0),
            row1: self.row1.sum(&rhs.row1),
            row2: self.row2.sum(&rhs.row2),
        }
    }

    pub fn difference(&self, rhs: &Self) -> Self {
        Matrix3 {
            row0: self.row0.difference(&rhs.row0),
            row1: self.row1.difference(&rhs.row1),
            row2: self.row2.difference(&rhs.row2),
        }
    }

    pub fn scale(&self, scalar: T) -> Self {
        self.map_rows(|row| row.scale(scalar))
    }

    /// Divides every element by `scalar`, rejecting the zero value of `T`.
    pub fn checked_div(&self, scalar: T) -> Result<Self> {
        Ok(Matrix3 {
            row0: self.row0.checked_div(scalar)?,
            row1: self.row1.checked_div(scalar)?,
            row2: self.row2.checked_div(scalar)?,
        })
    }

    pub fn checked_div_assign(&mut self, scalar: T) -> Result<()> {
        *self = self.checked_div(scalar)?;
        Ok(())
    }

    /// Matrix product `self * rhs`. Not commutative.
    pub fn product(&self, rhs: &Self) -> Self {
        let columns = rhs.transpose();

        self.map_rows(|row| {
            Vector3::new(
                row.dot(&columns.row0),
                row.dot(&columns.row1),
                row.dot(&columns.row2),
            )
        })
    }

    pub fn transform(&self, vector: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.row0.dot(vector),
            self.row1.dot(vector),
            self.row2.dot(vector),
        )
    }

    /// Row-major flattening of the matrix.
    #[rustfmt::skip]
    pub fn to_array(&self) -> [T; 9] {
        [
            self.row0.x, self.row0.y, self.row0.z,
            self.row1.x, self.row1.y, self.row1.z,
            self.row2.x, self.row2.y, self.row2.z,
        ]
    }
}

impl<T: Scalar> From<[T; 9]> for Matrix3<T> {
    fn from(values: [T; 9]) -> Self {
        Self::from_values(values)
    }
}

impl<T: Scalar> Add for Matrix3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(&rhs)
    }
}

impl<T: Scalar> AddAssign for Matrix3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.sum(&rhs);
    }
}

impl<T: Scalar> Sub for Matrix3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(&rhs)
    }
}

impl<T: Scalar> SubAssign for Matrix3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(&rhs);
    }
}

impl<T: Scalar> Mul for Matrix3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.product(&rhs)
    }
}

impl<T: Scalar> MulAssign for Matrix3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.product(&rhs);
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        self.transform(&rhs)
    }
}

#[cfg(feature = "glam")]
mod glam_interop {
    use super::Matrix3;

    impl From<Matrix3<f32>> for glam::Mat3 {
        // glam stores columns, we store rows.
        fn from(value: Matrix3<f32>) -> Self {
            glam::Mat3::from_cols_array(&value.to_array()).transpose()
        }
    }

    impl From<Matrix3<f64>> for glam::DMat3 {
        fn from(value: Matrix3<f64>) -> Self {
            glam::DMat3::from_cols_array(&value.to_array()).transpose()
        }
    }
}
