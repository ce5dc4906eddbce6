/// Declares concrete aliases for a scalar type, e.g. `define_math_types!(f => f32)`
/// declares `Vector3f`, `Matrix3f` and `LinkedListf`.
///
/// The generic types work for any [`Scalar`](crate::Scalar) already, this only
/// gives an instantiation a short name.
#[macro_export]
macro_rules! define_math_types {
    ($($suffix: ident => $scalar: ty),* $(,)?) => {
        $crate::paste::paste! {
            $(
                #[allow(non_camel_case_types)]
                pub type [<Vector3 $suffix>] = $crate::Vector3<$scalar>;
                #[allow(non_camel_case_types)]
                pub type [<Matrix3 $suffix>] = $crate::Matrix3<$scalar>;
                #[allow(non_camel_case_types)]
                pub type [<LinkedList $suffix>] = $crate::LinkedList<$scalar>;
            )*
        }
    };
}
