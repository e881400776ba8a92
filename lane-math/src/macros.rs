//! Macros used in the lane-math

/// Call macro for all float element types.
///
/// Tuple: {element type, bits type, signed bits type, element type variant,
/// explicit mantissa bits, exponent bias, libm sincos, libm frexp, libm ldexp}
macro_rules! for_all_float_types {
    ($macro:ident) => {
        $macro! {
            {f32, u32, i32, Float32, 23, 127, sincosf, frexpf, ldexpf},
            {f64, u64, i64, Float64, 52, 1023, sincos, frexp, ldexp}
        }
    };
}

pub(crate) use for_all_float_types;

/// Call macro for all exponent element types.
///
/// Tuple: {element type, element type variant}
macro_rules! for_all_exponent_types {
    ($macro:ident) => {
        $macro! {
            {i32, Int32},
            {i16, Int16}
        }
    };
}

pub(crate) use for_all_exponent_types;

/// Generate a test for each float element type. The body sees the element type as `T`
#[cfg(test)]
macro_rules! float_tests {
    ($(fn $name:ident() $body:block)+) => {
        paste::paste! {
            $(
                #[test]
                fn [<$name _f32>]() {
                    #[allow(dead_code)]
                    type T = f32;
                    $body
                }

                #[test]
                fn [<$name _f64>]() {
                    #[allow(dead_code)]
                    type T = f64;
                    $body
                }
            )+
        }
    };
}

#[cfg(test)]
pub(crate) use float_tests;
