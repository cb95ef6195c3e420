use num_traits::{One, Zero};

/// Scalars that may hold a not-a-number or infinite value.
///
/// Floating point types forward to their own predicates, integer types never
/// hold a NaN and are always finite.
pub trait MaybeNan {
    /// Returns true if the value is not-a-number.
    fn is_nan(&self) -> bool;

    /// Returns true if the value is neither infinite nor NaN.
    fn is_finite(&self) -> bool;
}

macro_rules! impl_maybe_nan_float {
    ($($t:ty),*) => {
        $(
            impl MaybeNan for $t {
                #[inline]
                fn is_nan(&self) -> bool {
                    <$t>::is_nan(*self)
                }

                #[inline]
                fn is_finite(&self) -> bool {
                    <$t>::is_finite(*self)
                }
            }
        )*
    };
}

macro_rules! impl_maybe_nan_int {
    ($($t:ty),*) => {
        $(
            impl MaybeNan for $t {
                #[inline]
                fn is_nan(&self) -> bool {
                    false
                }

                #[inline]
                fn is_finite(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_maybe_nan_float!(f32, f64);
impl_maybe_nan_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// The element type of a [`crate::Matrix`].
///
/// Requires the zero and one values plus the ring operations used by the
/// arithmetic and cofactor machinery. Sign alternation is expressed with
/// subtraction, so `Neg` is not needed. Division is only required by the
/// operations that divide (see [`crate::Matrix::div_scalar`] and
/// [`crate::Matrix::inverse`]).
pub trait Scalar:
    Copy
    + PartialEq
    + Zero
    + One
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + MaybeNan
{
}

impl<T> Scalar for T where
    T: Copy
        + PartialEq
            + Zero
        + One
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + MaybeNan
{
}
