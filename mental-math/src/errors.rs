use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Required argument `{0}` was not provided")]
    NullArgument(&'static str),
    #[error("Attempted to divide by the zero value of the scalar type")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, MathError>;
