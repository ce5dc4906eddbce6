pub mod errors;
pub mod linked_list;
#[macro_use]
mod macros;
pub mod matrix;
pub mod ops;
pub mod scalar;
pub mod vector;

pub use errors::{MathError, Result};
pub use linked_list::LinkedList;
pub use matrix::Matrix3;
pub use scalar::Scalar;
pub use vector::Vector3;

#[doc(hidden)]
pub use paste;

define_math_types!(f => f32, i => i32, d => f64);
