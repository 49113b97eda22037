use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{error::ShapeError, scalar::Scalar, sqrt};

/// A vector of `N` scalars, with its dimension checked at compile time
/// for all operations.
///
/// Vectors are plain values: they are `Copy`, never allocate, and compare
/// lexicographically by index. The named accessors `x`, `y`, `z` and `w` only
/// exist on the dimensions where they make sense.
/// ```rust
/// # use fixgebra::Vector;
/// const LEFT: Vector<f64, 3> = Vector::new([1.0, 3.0, -5.0]);
/// const RIGHT: Vector<f64, 3> = Vector::new([4.0, -2.0, -1.0]);
///
/// assert_eq!(3.0, LEFT.dot(&RIGHT));
/// assert_eq!(3.0, LEFT * RIGHT);
/// assert_eq!(Vector::new([5.0, 1.0, -6.0]), LEFT + RIGHT);
/// ```
///
/// Components past the dimension do not exist:
/// ```compile_fail
/// # use fixgebra::Vector;
/// let v = Vector::new([1.0, 2.0]);
/// let _ = v.z();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a `Vector` from its components.
    pub const fn new(elements: [T; N]) -> Self {
        Vector(elements)
    }

    /// Create a `Vector` filled with zeroes.
    pub const fn zero() -> Self {
        Vector([T::ZERO; N])
    }

    /// Create a `Vector` by calling `f` with the index of each component.
    /// ```rust
    /// # use fixgebra::Vector;
    /// let v = Vector::<f32, 3>::from_fn(|i| i as f32 * 2.0);
    /// assert_eq!(Vector::new([0.0, 2.0, 4.0]), v);
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Vector(core::array::from_fn(f))
    }

    /// Number of components, always `N`.
    pub const fn size(&self) -> usize {
        N
    }

    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    pub const fn into_array(self) -> [T; N] {
        self.0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Like indexing, but returns `None` when `index >= N`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Sum of the component-wise products.
    pub fn dot(&self, other: &Self) -> T {
        let mut acc = T::ZERO;
        for i in 0..N {
            acc += self.0[i] * other.0[i];
        }
        acc
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length, computed with the Newton-Raphson [`sqrt`].
    pub fn length(&self) -> T {
        sqrt(self.length_squared())
    }

    /// Lexicographic comparison using the IEEE total order of each component,
    /// so it is defined for NaN as well.
    /// ```rust
    /// # use fixgebra::Vector;
    /// # use core::cmp::Ordering;
    /// let a = Vector::new([1.0, f64::NAN]);
    /// let b = Vector::new([1.0, 2.0]);
    /// assert_eq!(None, a.partial_cmp(&b));
    /// assert_eq!(Ordering::Greater, a.total_cmp(&b));
    /// ```
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        for i in 0..N {
            match self.0[i].total_cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

macro_rules! component_accessors {
    ($dim:literal => $($get:ident, $set:ident, $idx:literal);+) => {
        impl<T: Scalar> Vector<T, $dim> {
            $(
                #[doc = concat!("Component ", stringify!($idx), " of the vector.")]
                #[inline]
                pub const fn $get(&self) -> T {
                    self.0[$idx]
                }

                #[doc = concat!("Overwrite component ", stringify!($idx), ", returning `self` for chaining.")]
                #[inline]
                pub fn $set(&mut self, value: T) -> &mut Self {
                    self.0[$idx] = value;
                    self
                }
            )+
        }
    };
}

component_accessors!(1 => x, set_x, 0);
component_accessors!(2 => x, set_x, 0; y, set_y, 1);
component_accessors!(3 => x, set_x, 0; y, set_y, 1; z, set_z, 2);
component_accessors!(4 => x, set_x, 0; y, set_y, 1; z, set_z, 2; w, set_w, 3);

/// The 2D vector rotated a quarter turn clockwise, `(y, -x)`.
/// ```rust
/// # use fixgebra::{perpendicular, Vector};
/// let v = Vector::new([3.0, 4.0]);
/// assert_eq!(Vector::new([4.0, -3.0]), perpendicular(&v));
/// ```
pub fn perpendicular<T: Scalar>(v: &Vector<T, 2>) -> Vector<T, 2> {
    Vector([v.y(), -v.x()])
}

/// Cross product of two 3D vectors.
/// ```rust
/// # use fixgebra::{cross, Vector};
/// let i = Vector::new([1.0, 0.0, 0.0]);
/// let j = Vector::new([0.0, 1.0, 0.0]);
/// assert_eq!(Vector::new([0.0, 0.0, 1.0]), cross(&i, &j));
/// ```
pub fn cross<T: Scalar>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> {
    Vector([
        a.y() * b.z() - a.z() * b.y(),
        -(a.x() * b.z() - a.z() * b.x()),
        a.x() * b.y() - a.y() * b.x(),
    ])
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * -T::ONE
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for e in self.0.iter_mut() {
            *e *= rhs;
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

/// Division is multiplication by the reciprocal, dividing by zero gives infinities.
impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        *self *= T::ONE / rhs;
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self * (T::ONE / rhs)
    }
}

/// Dot product.
impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = T;

    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(&rhs)
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64);

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(elements: [T; N]) -> Self {
        Vector(elements)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// Fails with a [`ShapeError`] unless the slice holds exactly `N` elements.
impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = ShapeError;

    fn try_from(elements: &[T]) -> Result<Self, Self::Error> {
        ShapeError::check(N, elements.len())?;
        Ok(Vector::from_fn(|i| elements[i]))
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
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
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}
