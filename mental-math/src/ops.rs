//! Out-parameter forms of the vector and matrix operations.
//!
//! Every operand is optional so callers bridging from nullable handles can hand
//! them over as-is. All arguments are checked before anything is written: a
//! missing argument yields [`MathError::NullArgument`] naming it, and a zero
//! divisor yields [`MathError::DivisionByZero`], in both cases leaving the
//! output untouched.

use crate::errors::{MathError, Result};
use crate::matrix::Matrix3;
use crate::scalar::Scalar;
use crate::vector::Vector3;

macro_rules! required {
    ($arg: ident) => {
        $arg.ok_or(MathError::NullArgument(stringify!($arg)))?
    };
}

macro_rules! fill_ops {
    ($prefix: ident, $type: ident) => {
        paste::paste! {
            pub fn [<$prefix _zero>]<T: Scalar>(target: Option<&mut $type<T>>) -> Result<()> {
                required!(target).set_zero();
                Ok(())
            }

            pub fn [<$prefix _one>]<T: Scalar>(target: Option<&mut $type<T>>) -> Result<()> {
                required!(target).set_one();
                Ok(())
            }

            pub fn [<$prefix _fill>]<T: Scalar>(target: Option<&mut $type<T>>, value: T) -> Result<()> {
                required!(target).fill(value);
                Ok(())
            }
        }
    };
}

macro_rules! binary_ops {
    ($prefix: ident, $type: ident: $($name: ident => $method: ident),*) => {
        paste::paste! {
            $(
                pub fn [<$prefix _ $name>]<T: Scalar>(
                    a: Option<&$type<T>>,
                    b: Option<&$type<T>>,
                    out: Option<&mut $type<T>>,
                ) -> Result<()> {
                    let (a, b, out) = (required!(a), required!(b), required!(out));

                    *out = a.$method(b);
                    Ok(())
                }

                /// In-place form, `target` is both the left operand and the output.
                pub fn [<$prefix _ $name _assign>]<T: Scalar>(
                    target: Option<&mut $type<T>>,
                    rhs: Option<&$type<T>>,
                ) -> Result<()> {
                    let (target, rhs) = (required!(target), required!(rhs));

                    *target = target.$method(rhs);
                    Ok(())
                }
            )*
        }
    };
}

macro_rules! scalar_ops {
    ($prefix: ident, $type: ident) => {
        paste::paste! {
            pub fn [<$prefix _scale>]<T: Scalar>(
                source: Option<&$type<T>>,
                scalar: T,
                out: Option<&mut $type<T>>,
            ) -> Result<()> {
                let (source, out) = (required!(source), required!(out));

                *out = source.scale(scalar);
                Ok(())
            }

            pub fn [<$prefix _scale_assign>]<T: Scalar>(target: Option<&mut $type<T>>, scalar: T) -> Result<()> {
                let target = required!(target);

                *target = target.scale(scalar);
                Ok(())
            }

            pub fn [<$prefix _div>]<T: Scalar>(
                source: Option<&$type<T>>,
                scalar: T,
                out: Option<&mut $type<T>>,
            ) -> Result<()> {
                let (source, out) = (required!(source), required!(out));

                *out = source.checked_div(scalar)?;
                Ok(())
            }

            pub fn [<$prefix _div_assign>]<T: Scalar>(target: Option<&mut $type<T>>, scalar: T) -> Result<()> {
                required!(target).checked_div_assign(scalar)
            }
        }
    };
}

fill_ops!(vec3, Vector3);
binary_ops!(vec3, Vector3: add => sum, sub => difference);
scalar_ops!(vec3, Vector3);

fill_ops!(mat3, Matrix3);
binary_ops!(mat3, Matrix3: add => sum, sub => difference, mul => product);
scalar_ops!(mat3, Matrix3);

pub fn vec3_to_array<T: Scalar>(source: Option<&Vector3<T>>, out: Option<&mut [T; 3]>) -> Result<()> {
    let (source, out) = (required!(source), required!(out));

    *out = source.to_array();
    Ok(())
}

pub fn mat3_identity<T: Scalar>(target: Option<&mut Matrix3<T>>) -> Result<()> {
    required!(target).set_identity();
    Ok(())
}

/// Sets all nine elements, given row by row.
pub fn mat3_fill_custom<T: Scalar>(target: Option<&mut Matrix3<T>>, values: [T; 9]) -> Result<()> {
    *required!(target) = Matrix3::from_values(values);
    Ok(())
}

pub fn mat3_to_array<T: Scalar>(source: Option<&Matrix3<T>>, out: Option<&mut [T; 9]>) -> Result<()> {
    let (source, out) = (required!(source), required!(out));

    *out = source.to_array();
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    const SENTINEL: Vector3<f32> = Vector3::new(42.0, 42.0, 42.0);

    #[test]
    fn vector_operations_write_the_output() {
        let a = Vector3::new(1.0f32, 2.0, 3.0);
        let b = Vector3::new(0.5f32, 0.5, 0.5);
        let mut out = Vector3::zero();

        vec3_add(Some(&a), Some(&b), Some(&mut out)).unwrap();
        assert_eq!(out, Vector3::new(1.5, 2.5, 3.5));

        vec3_sub(Some(&a), Some(&b), Some(&mut out)).unwrap();
        assert_eq!(out, Vector3::new(0.5, 1.5, 2.5));

        vec3_scale(Some(&a), 2.0, Some(&mut out)).unwrap();
        assert_eq!(out, Vector3::new(2.0, 4.0, 6.0));

        vec3_div(Some(&a), 2.0, Some(&mut out)).unwrap();
        assert_eq!(out, Vector3::new(0.5, 1.0, 1.5));

        let mut array = [0.0; 3];
        vec3_to_array(Some(&a), Some(&mut array)).unwrap();
        assert_eq!(array, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn in_place_forms_alias_the_left_operand() {
        let mut v = Vector3::new(2, 4, 6);

        vec3_add_assign(Some(&mut v), Some(&Vector3::one())).unwrap();
        assert_eq!(v, Vector3::new(3, 5, 7));

        vec3_scale_assign(Some(&mut v), 2).unwrap();
        assert_eq!(v, Vector3::new(6, 10, 14));

        vec3_div_assign(Some(&mut v), 2).unwrap();
        assert_eq!(v, Vector3::new(3, 5, 7));

        let mut m = Matrix3::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        mat3_mul_assign(Some(&mut m), Some(&Matrix3::identity())).unwrap();
        assert_eq!(m.to_array(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn missing_arguments_are_reported_without_writes() {
        let a = Vector3::new(1.0f32, 2.0, 3.0);
        let mut out = SENTINEL;

        assert_eq!(
            vec3_add(None, Some(&a), Some(&mut out)),
            Err(MathError::NullArgument("a"))
        );
        assert_eq!(
            vec3_sub(Some(&a), None, Some(&mut out)),
            Err(MathError::NullArgument("b"))
        );
        assert_eq!(
            vec3_scale(None, 3.0, Some(&mut out)),
            Err(MathError::NullArgument("source"))
        );
        assert_eq!(
            vec3_div(None, 0.0, Some(&mut out)),
            Err(MathError::NullArgument("source")),
            "argument checks come before the divisor check"
        );
        assert_eq!(out, SENTINEL);

        assert_eq!(vec3_add(Some(&a), Some(&a), None), Err(MathError::NullArgument("out")));
        assert_eq!(vec3_zero::<f32>(None), Err(MathError::NullArgument("target")));
        assert_eq!(vec3_fill::<i32>(None, 3), Err(MathError::NullArgument("target")));
        assert_eq!(vec3_to_array::<f64>(None, Some(&mut [0.0; 3])), Err(MathError::NullArgument("source")));

        let mut m = Matrix3::<i32>::splat(42);
        let copy = m;
        assert_eq!(mat3_identity::<i32>(None), Err(MathError::NullArgument("target")));
        assert_eq!(mat3_fill_custom::<i32>(None, [0; 9]), Err(MathError::NullArgument("target")));
        assert_eq!(
            mat3_mul(Some(&copy), None, Some(&mut m)),
            Err(MathError::NullArgument("b"))
        );
        assert_eq!(mat3_div(None, 1, Some(&mut m)), Err(MathError::NullArgument("source")));
        assert_eq!(m, Matrix3::splat(42));
    }

    #[test]
    fn division_by_zero_never_writes() {
        let mut out = SENTINEL;
        assert_eq!(
            vec3_div(Some(&Vector3::one()), 0.0, Some(&mut out)),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(out, SENTINEL);

        let mut m = Matrix3::<f64>::splat(42.0);
        assert_eq!(
            mat3_div(Some(&Matrix3::identity()), 0.0, Some(&mut m)),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(mat3_div_assign(Some(&mut m), 0.0), Err(MathError::DivisionByZero));
        assert_eq!(m, Matrix3::splat(42.0));

        let mut ints = Matrix3::<i32>::splat(7);
        assert_eq!(mat3_div_assign(Some(&mut ints), 0), Err(MathError::DivisionByZero));
        assert_eq!(ints, Matrix3::splat(7));
    }

    #[test]
    fn matrix_fills() {
        let mut m = Matrix3::<f32>::zero();

        mat3_one(Some(&mut m)).unwrap();
        assert_eq!(m, Matrix3::one());

        mat3_identity(Some(&mut m)).unwrap();
        assert_eq!(m, Matrix3::identity());

        mat3_fill(Some(&mut m), 0.25).unwrap();
        assert_eq!(m, Matrix3::splat(0.25));

        mat3_fill_custom(Some(&mut m), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        let mut array = [0.0; 9];
        mat3_to_array(Some(&m), Some(&mut array)).unwrap();
        assert_eq!(array, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);

        mat3_zero(Some(&mut m)).unwrap();
        assert_eq!(m, Matrix3::zero());
    }
}
