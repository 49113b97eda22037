use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Deref, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use log::trace;

use crate::{error::NormalizeError, scalar::Scalar, Matrix, Vector};

/// A [`Vector`] of unit length.
///
/// A `Normal` can only be made by normalizing a vector (which fails for the
/// zero vector or non-finite components) or through the basis constructors, and nothing can
/// mutate it afterwards. All read-only vector operations are available
/// through `Deref`, and arithmetic that would leave the unit sphere returns a
/// plain `Vector`.
/// ```rust
/// # use fixgebra::{Normal, Vector};
/// let n = Normal::<f64, 3>::new([0.0, 3.0, 4.0]).unwrap();
/// assert!((n.length() - 1.0).abs() < 1e-12);
///
/// let doubled: Vector<f64, 3> = n * 2.0;
/// assert!((doubled.length() - 2.0).abs() < 1e-12);
/// ```
///
/// In-place arithmetic is not implemented:
/// ```compile_fail
/// # use fixgebra::{Normal, Vector};
/// let mut n = Normal::<f64, 3>::i();
/// n += Vector::new([0.0, 1.0, 0.0]);
/// ```
/// ```compile_fail
/// # use fixgebra::Normal;
/// let mut n = Normal::<f64, 3>::i();
/// n *= 2.0;
/// ```
/// Neither is writing a component:
/// ```compile_fail
/// # use fixgebra::Normal;
/// let mut n = Normal::<f64, 3>::i();
/// n[0] = 0.5;
/// ```
/// ```compile_fail
/// # use fixgebra::Normal;
/// let mut n = Normal::<f64, 2>::j();
/// n.set_x(1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Normal<T, const N: usize>(Vector<T, N>);

impl<T: Scalar, const N: usize> Normal<T, N> {
    /// Normalize the vector with the given components.
    pub fn new(elements: [T; N]) -> Result<Self, NormalizeError> {
        Self::from_vector(Vector::new(elements))
    }

    /// Divide `v` by its length.
    ///
    /// `v` is first divided by its largest component magnitude, so the length
    /// that is computed lies in `1..=sqrt(N)` whatever the scale of `v`. Fails
    /// with [`NormalizeError::ZeroLength`] when every component is zero and
    /// with [`NormalizeError::NonFinite`] when any component is NaN or
    /// infinite.
    /// ```rust
    /// # use fixgebra::{Normal, NormalizeError, Vector};
    /// assert_eq!(Err(NormalizeError::ZeroLength), Normal::from_vector(Vector::<f32, 2>::zero()));
    ///
    /// let n = Normal::from_vector(Vector::new([1.0e100, 0.0])).unwrap();
    /// assert_eq!(Normal::<f64, 2>::i(), n);
    /// ```
    pub fn from_vector(v: Vector<T, N>) -> Result<Self, NormalizeError> {
        let mut largest = T::ZERO;
        for &e in v.iter() {
            let magnitude = if e < T::ZERO { -e } else { e };
            if !magnitude.is_finite() {
                trace!("cannot normalize {v}: component {e} is not finite");
                return Err(NormalizeError::NonFinite);
            }
            if magnitude > largest {
                largest = magnitude;
            }
        }
        if largest == T::ZERO {
            trace!("cannot normalize {v}: zero length");
            return Err(NormalizeError::ZeroLength);
        }

        // every component in -1..=1, at least one of magnitude 1
        let scaled = Vector::from_fn(|i| v[i] / largest);
        Ok(Normal(scaled / scaled.length()))
    }

    /// Normalize a single-row matrix.
    pub fn from_row(row: Matrix<T, N, 1>) -> Result<Self, NormalizeError> {
        Self::from_vector(Vector::from_row(row))
    }

    /// Normalize a single-column matrix.
    pub fn from_column(column: Matrix<T, 1, N>) -> Result<Self, NormalizeError> {
        Self::from_vector(Vector::from_column(column))
    }

    pub const fn as_vector(&self) -> &Vector<T, N> {
        &self.0
    }

    pub const fn into_vector(self) -> Vector<T, N> {
        self.0
    }
}

macro_rules! basis {
    ($dim:literal => $($name:ident: [$($e:ident),+]);+) => {
        impl<T: Scalar> Normal<T, $dim> {
            $(
                #[doc = concat!("Unit vector along axis `", stringify!($name), "`.")]
                pub const fn $name() -> Self {
                    Normal(Vector::new([$(T::$e),+]))
                }
            )+
        }
    };
}

basis!(1 => i: [ONE]);
basis!(2 => i: [ONE, ZERO]; j: [ZERO, ONE]);
basis!(3 => i: [ONE, ZERO, ZERO]; j: [ZERO, ONE, ZERO]; k: [ZERO, ZERO, ONE]);
basis!(4 =>
    i: [ONE, ZERO, ZERO, ZERO];
    j: [ZERO, ONE, ZERO, ZERO];
    k: [ZERO, ZERO, ONE, ZERO];
    l: [ZERO, ZERO, ZERO, ONE]
);

impl<T, const N: usize> Deref for Normal<T, N> {
    type Target = Vector<T, N>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Scalar, const N: usize> From<Normal<T, N>> for Vector<T, N> {
    fn from(n: Normal<T, N>) -> Self {
        n.0
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vector<T, N>> for Normal<T, N> {
    type Error = NormalizeError;

    fn try_from(v: Vector<T, N>) -> Result<Self, Self::Error> {
        Normal::from_vector(v)
    }
}

impl<T: Scalar, const N: usize> PartialEq<Vector<T, N>> for Normal<T, N> {
    fn eq(&self, other: &Vector<T, N>) -> bool {
        self.0 == *other
    }
}

impl<T: Scalar, const N: usize> PartialEq<Normal<T, N>> for Vector<T, N> {
    fn eq(&self, other: &Normal<T, N>) -> bool {
        *self == other.0
    }
}

impl<T: Scalar, const N: usize> PartialOrd<Vector<T, N>> for Normal<T, N> {
    fn partial_cmp(&self, other: &Vector<T, N>) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl<T: Scalar, const N: usize> PartialOrd<Normal<T, N>> for Vector<T, N> {
    fn partial_cmp(&self, other: &Normal<T, N>) -> Option<Ordering> {
        self.partial_cmp(&other.0)
    }
}

/// Flipping the direction keeps the length.
impl<T: Scalar, const N: usize> Neg for Normal<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Normal(-self.0)
    }
}

impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Normal<T, N> {
    type Output = Vector<T, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.0 + rhs
    }
}

impl<T: Scalar, const N: usize> Add for Normal<T, N> {
    type Output = Vector<T, N>;

    fn add(self, rhs: Self) -> Self::Output {
        self.0 + rhs.0
    }
}

impl<T: Scalar, const N: usize> Add<Normal<T, N>> for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Normal<T, N>) -> Self::Output {
        self + rhs.0
    }
}

impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for Normal<T, N> {
    type Output = Vector<T, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        self.0 - rhs
    }
}

impl<T: Scalar, const N: usize> Sub for Normal<T, N> {
    type Output = Vector<T, N>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl<T: Scalar, const N: usize> Sub<Normal<T, N>> for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Normal<T, N>) -> Self::Output {
        self - rhs.0
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Normal<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.0 * rhs
    }
}

impl<T: Scalar, const N: usize> Div<T> for Normal<T, N> {
    type Output = Vector<T, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.0 / rhs
    }
}

/// Dot product.
impl<T: Scalar, const N: usize> Mul for Normal<T, N> {
    type Output = T;

    fn mul(self, rhs: Self) -> Self::Output {
        self.0.dot(&rhs.0)
    }
}

/// Dot product.
impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Normal<T, N> {
    type Output = T;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        self.0.dot(&rhs)
    }
}

/// Dot product.
impl<T: Scalar, const N: usize> Mul<Normal<T, N>> for Vector<T, N> {
    type Output = T;

    fn mul(self, rhs: Normal<T, N>) -> Self::Output {
        self.dot(&rhs.0)
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Normal<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Normal<$t, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64);

impl<T: fmt::Display, const N: usize> fmt::Display for Normal<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T, const N: usize> AbsDiffEq for Normal<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<T, const N: usize> RelativeEq for Normal<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl<T, const N: usize> UlpsEq for Normal<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cross, perpendicular};
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_created_and_accessed() {
        let n = Normal::new([0.0_f32, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(6, n.size());
        assert_eq!(&[0.0, 1.0, 0.0, 0.0, 0.0, 0.0], n.as_array());
        assert_eq!(1.0, n[1]);
        assert!(n.iter().eq([0.0, 1.0, 0.0, 0.0, 0.0, 0.0].iter()));
    }

    #[test]
    fn test_normalizes_input() {
        let n = Normal::<f64, 3>::new([0.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(Vector::new([0.0, 0.6, 0.8]), n.into_vector(), epsilon = 1e-12);
        assert_relative_eq!(1.0, n.length(), epsilon = 1e-12);

        let m = Normal::from_vector(Vector::new([0.0, -2.0])).unwrap();
        assert_eq!(Normal::<f64, 2>::j(), -m);
    }

    #[test]
    fn test_from_matrices() {
        let row = Normal::from_row(Matrix::new([[0.0, 0.0, 5.0]])).unwrap();
        let column = Normal::from_column(Matrix::new([[0.0], [0.0], [5.0]])).unwrap();
        assert_eq!(Normal::<f64, 3>::k(), row);
        assert_eq!(row, column);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert_eq!(Err(NormalizeError::ZeroLength), Normal::<f64, 3>::new([0.0; 3]));
        assert_eq!(Err(NormalizeError::ZeroLength), Normal::new([-0.0_f32, 0.0]));
        assert_eq!(Err(NormalizeError::NonFinite), Normal::new([f64::NAN, 1.0]));
        assert_eq!(Err(NormalizeError::NonFinite), Normal::new([1.0, f64::NEG_INFINITY]));
        assert_eq!(Err(NormalizeError::NonFinite), Normal::new([f32::INFINITY, 1.0]));
        assert_eq!(
            Err(NormalizeError::ZeroLength),
            Normal::try_from(Vector::<f32, 4>::zero())
        );
    }

    #[test]
    fn test_normalizes_any_scale() {
        assert_eq!(Normal::<f64, 2>::i(), Normal::new([1.0e100, 0.0]).unwrap());
        assert_eq!(Normal::<f64, 2>::i(), Normal::new([1.0e-35, 0.0]).unwrap());
        assert_eq!(Normal::<f64, 2>::i(), Normal::new([1.0e-200, 0.0]).unwrap());
        assert_eq!(Normal::<f64, 2>::j(), Normal::new([0.0, 5.0e-324]).unwrap());
        assert_eq!(Normal::<f32, 2>::j(), -Normal::new([0.0_f32, -1.0e-40]).unwrap());

        let n = Normal::<f64, 2>::new([3.0e40, 4.0e40]).unwrap();
        assert_relative_eq!(Vector::new([0.6, 0.8]), n.into_vector(), epsilon = 1e-12);
        assert_relative_eq!(1.0, n.length(), epsilon = 1e-12);

        let n = Normal::<f64, 2>::new([1.0e200, 1.0e200]).unwrap();
        assert_relative_eq!(0.5_f64.sqrt(), n.x(), epsilon = 1e-12);
        assert_relative_eq!(1.0, n.length(), epsilon = 1e-12);

        let n = Normal::<f32, 3>::new([f32::MAX, f32::MAX, 0.0]).unwrap();
        assert_relative_eq!(1.0, n.length(), epsilon = 1e-6);
    }

    #[test]
    fn test_comparison() {
        let n1 = Normal::new([0.0, 0.0, 1.0, 0.0]).unwrap();
        let n2 = Normal::new([0.0, 0.0, 1.0, 0.0]).unwrap();
        let n3 = Normal::new([1.0, 0.0, 0.0, 0.0]).unwrap();

        assert!(n1 == n2);
        assert!(n1 != n3);
        assert!(!(n1 < n2));
        assert!(n1 < n3);
        assert!(n1 <= n3);
        assert!(!(n3 <= n1));
        assert!(n3 > n1);
        assert!(n1 >= n2);
        assert_eq!(Some(Ordering::Equal), n1.partial_cmp(&n2));
        assert_eq!(Ordering::Less, n1.total_cmp(&n3));

        let v = Vector::new([0.0, 0.0, 1.0, 0.0]);
        assert!(n1 == v);
        assert!(v == n1);
        assert!(v < n3);
        assert!(n3 > v);
    }

    #[test]
    fn test_linear_space() {
        let i = Normal::<f64, 3>::i();
        let j = Normal::<f64, 3>::j();
        let k = Normal::<f64, 3>::k();

        assert_eq!(Normal::new([-1.0, 0.0, 0.0]).unwrap(), -i);
        assert_eq!(Vector::new([1.0, 1.0, 0.0]), i + j);
        assert_eq!(Vector::new([0.0, 1.0, -1.0]), j - k);
        assert_eq!(Vector::new([1.0, 2.0, 3.0]), i + Vector::new([0.0, 2.0, 3.0]));
        assert_eq!(Vector::new([0.0, 2.0, 3.0]), Vector::new([1.0, 2.0, 3.0]) - i);
        assert_eq!(Vector::new([3.0, 0.0, 0.0]), i * 3.0);
        assert_eq!(Vector::new([3.0, 0.0, 0.0]), 3.0 * i);
        assert_eq!(Vector::new([1.0 / 3.0, 0.0, 0.0]), i / 3.0);
    }

    #[test]
    fn test_dot_and_length() {
        let n1 = Normal::new([0.0_f32, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let n2 = Normal::new([0.0_f32, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
        assert_eq!(1.0, n1 * n1);
        assert_eq!(0.0, n1 * n2);
        assert_eq!(1.0, n1.length_squared());
        assert_eq!(1.0, n2.length());

        let v = Vector::new([0.0, 7.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(7.0, n1 * v);
        assert_eq!(7.0, v * n1);
    }

    #[test]
    fn test_named_accessors() {
        let n1 = Normal::<f64, 1>::i();
        assert_eq!(1.0, n1.x());

        let n2 = Normal::new([0.0, 1.0]).unwrap();
        assert_eq!((0.0, 1.0), (n2.x(), n2.y()));

        let n3 = Normal::<f32, 3>::k();
        assert_eq!((0.0, 0.0, 1.0), (n3.x(), n3.y(), n3.z()));

        let n4 = Normal::<f64, 4>::l();
        assert_eq!((0.0, 0.0, 0.0, 1.0), (n4.x(), n4.y(), n4.z(), n4.w()));
    }

    #[test]
    fn test_basis() {
        const I1: Normal<f64, 1> = Normal::<f64, 1>::i();
        assert_eq!(Vector::new([1.0]), I1);

        assert_eq!(Vector::new([1.0, 0.0]), Normal::<f64, 2>::i());
        assert_eq!(Vector::new([0.0, 1.0]), Normal::<f64, 2>::j());

        assert_eq!(Normal::new([1.0, 0.0, 0.0]).unwrap(), Normal::<f64, 3>::i());
        assert_eq!(Normal::new([0.0, 1.0, 0.0]).unwrap(), Normal::<f64, 3>::j());
        assert_eq!(Normal::new([0.0, 0.0, 1.0]).unwrap(), Normal::<f64, 3>::k());

        const BASIS4: [Normal<f32, 4>; 4] = [
            Normal::<f32, 4>::i(),
            Normal::<f32, 4>::j(),
            Normal::<f32, 4>::k(),
            Normal::<f32, 4>::l(),
        ];
        for (axis, n) in BASIS4.iter().enumerate() {
            let expected = Vector::<f32, 4>::from_fn(|i| if i == axis { 1.0 } else { 0.0 });
            assert_eq!(expected, *n);
        }
    }

    #[test]
    fn test_cross_of_basis() {
        let i = Normal::<f64, 3>::i();
        let j = Normal::<f64, 3>::j();
        let k = Normal::<f64, 3>::k();

        assert_eq!(k, cross(&i, &j));
        assert_eq!(i, cross(&j, &k));
        assert_eq!(j, cross(&k, &i));
        assert_eq!(-k, cross(&j, &i));
        assert_eq!(-i, cross(&k, &j));
        assert_eq!(-j, cross(&i, &k));
    }

    #[test]
    fn test_perpendicular() {
        let n = Normal::<f64, 2>::new([3.0, 4.0]).unwrap();
        let p = perpendicular(&n);
        assert_relative_eq!(1.0, p.length(), epsilon = 1e-12);
        assert_relative_eq!(0.0, n * p, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!("(0, 1)", Normal::<f64, 2>::j().to_string());
    }

    proptest! {
        #[test]
        fn normalized_has_unit_length(
            mantissas in prop::array::uniform3(-1.0..1.0_f64),
            exponent in -150i32..150,
        ) {
            let v = Vector::new(mantissas) * 10.0_f64.powi(exponent);
            prop_assume!(v.iter().any(|&e| e != 0.0));

            let n = Normal::from_vector(v).unwrap();
            prop_assert!((n.length() - 1.0).abs() < 1.0e-12);
            prop_assert!(n * v > 0.0);
        }

        #[test]
        fn negation_stays_normal(elements in prop::array::uniform4(-1.0e3..1.0e3_f32)) {
            let v = Vector::new(elements);
            prop_assume!(v.length_squared() > 1.0e-3);

            let n = Normal::from_vector(v).unwrap();
            prop_assert_eq!(Vector::from(-n), -n.into_vector());
        }
    }
}
