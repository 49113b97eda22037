#![allow(clippy::needless_range_loop)]

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{error::ShapeError, scalar::Scalar};

/// An `N`×`M` matrix, with dimensions checked at compile time for all
/// operations.
///
/// Elements are addressed by `(n, m)` with `n < N` and `m < M`. Storage is
/// `M` rows of `N` elements each, so the first index varies fastest when the
/// matrix is walked in storage order. Equality and ordering follow that order.
/// ```rust
/// # use fixgebra::Matrix;
/// const M: Matrix<f64, 3, 2> = Matrix::new([
///     [1.0, 2.0, 3.0],
///     [4.0, 5.0, 6.0],
/// ]);
///
/// assert_eq!(3, M.x_size());
/// assert_eq!(2, M.y_size());
/// assert_eq!(2.0, M[(1, 0)]);
/// assert_eq!(4.0, M[(0, 1)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize, const M: usize>(pub(crate) [[T; N]; M]);

impl<T: Scalar, const N: usize, const M: usize> Default for Matrix<T, N, M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Create a `Matrix` from `M` rows of `N` elements.
    pub const fn new(rows: [[T; N]; M]) -> Self {
        Matrix(rows)
    }

    /// Create a `Matrix` filled with zeroes.
    pub const fn zero() -> Self {
        Matrix([[T::ZERO; N]; M])
    }

    /// Create a `Matrix` with ones on the main diagonal. Non-square matrices
    /// get ones up to the shorter dimension.
    /// ```rust
    /// # use fixgebra::Matrix;
    /// const LEFT: Matrix<f64, 3, 4> = Matrix::new([
    ///     [1.0, 0.0, 1.0],
    ///     [2.0, 1.0, 1.0],
    ///     [0.0, 1.0, 1.0],
    ///     [1.0, 1.0, 2.0],
    /// ]);
    ///
    /// assert_eq!(LEFT, LEFT * Matrix::<f64, 3, 3>::identity());
    /// ```
    pub const fn identity() -> Self {
        let mut ret = Self::zero();
        let diag_max = if N < M { N } else { M };

        let mut idx = 0;
        while idx < diag_max {
            ret.0[idx][idx] = T::ONE;
            idx += 1;
        }
        ret
    }

    /// Create a `Matrix` by calling `f` with each `(n, m)` index.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Matrix(core::array::from_fn(|m| core::array::from_fn(|n| f(n, m))))
    }

    /// Total number of elements, `N * M`.
    pub const fn size(&self) -> usize {
        N * M
    }

    /// Extent of the first index.
    pub const fn x_size(&self) -> usize {
        N
    }

    /// Extent of the second index.
    pub const fn y_size(&self) -> usize {
        M
    }

    pub const fn as_rows(&self) -> &[[T; N]; M] {
        &self.0
    }

    pub const fn into_rows(self) -> [[T; N]; M] {
        self.0
    }

    /// All elements in storage order.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    pub fn get(&self, (n, m): (usize, usize)) -> Option<&T> {
        self.0.get(m).and_then(|row| row.get(n))
    }

    pub fn get_mut(&mut self, (n, m): (usize, usize)) -> Option<&mut T> {
        self.0.get_mut(m).and_then(|row| row.get_mut(n))
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.as_flattened().iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.as_flattened_mut().iter_mut()
    }

    /// Return the transpose of a `Matrix`, swapping the two index components.
    /// ```rust
    /// # use fixgebra::Matrix;
    /// const START: Matrix<f64, 3, 2> = Matrix::new([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    /// ]);
    ///
    /// const EXPECTED: Matrix<f64, 2, 3> = Matrix::new([
    ///     [1.0, 4.0],
    ///     [2.0, 5.0],
    ///     [3.0, 6.0],
    /// ]);
    ///
    /// const RESULT: Matrix<f64, 2, 3> = START.transpose();
    ///
    /// assert_eq!(EXPECTED, RESULT);
    /// ```
    pub const fn transpose(self) -> Matrix<T, M, N> {
        let mut ret = [[T::ZERO; M]; N];

        let mut m = 0;
        while m < M {
            let mut n = 0;
            while n < N {
                ret[n][m] = self.0[m][n];
                n += 1;
            }
            m += 1;
        }
        Matrix(ret)
    }

    /// Lexicographic comparison in storage order using the IEEE total order
    /// of each element.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other.iter()) {
            match a.total_cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

/// Free-function form of [`Matrix::transpose`].
pub const fn transpose<T: Scalar, const N: usize, const M: usize>(
    mat: Matrix<T, N, M>,
) -> Matrix<T, M, N> {
    mat.transpose()
}

impl<T, const N: usize, const M: usize> Index<(usize, usize)> for Matrix<T, N, M> {
    type Output = T;

    #[inline]
    fn index(&self, (n, m): (usize, usize)) -> &Self::Output {
        &self.0[m][n]
    }
}

impl<T, const N: usize, const M: usize> IndexMut<(usize, usize)> for Matrix<T, N, M> {
    #[inline]
    fn index_mut(&mut self, (n, m): (usize, usize)) -> &mut Self::Output {
        &mut self.0[m][n]
    }
}

impl<T: Scalar, const N: usize, const M: usize> Neg for Matrix<T, N, M> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * -T::ONE
    }
}

impl<T: Scalar, const N: usize, const M: usize> AddAssign for Matrix<T, N, M> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs += *rhs;
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add for Matrix<T, N, M> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize, const M: usize> SubAssign for Matrix<T, N, M> {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl<T: Scalar, const N: usize, const M: usize> Sub for Matrix<T, N, M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl<T: Scalar, const N: usize, const M: usize> MulAssign<T> for Matrix<T, N, M> {
    fn mul_assign(&mut self, rhs: T) {
        for e in self.iter_mut() {
            *e *= rhs;
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for Matrix<T, N, M> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const N: usize, const M: usize> DivAssign<T> for Matrix<T, N, M> {
    fn div_assign(&mut self, rhs: T) {
        *self *= T::ONE / rhs;
    }
}

impl<T: Scalar, const N: usize, const M: usize> Div<T> for Matrix<T, N, M> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self * (T::ONE / rhs)
    }
}

/// Matrix product. The inner dimension `N` must agree, so a mismatch does
/// not compile.
/// ```rust
/// # use fixgebra::Matrix;
/// const LEFT: Matrix<f64, 3, 2> = Matrix::new([
///     [1.0, 2.0, 3.0],
///     [4.0, 5.0, 6.0],
/// ]);
///
/// const RIGHT: Matrix<f64, 4, 3> = Matrix::new([
///     [1.0, 2.0, 3.0, 4.0],
///     [5.0, 6.0, 7.0, 8.0],
///     [9.0, 10.0, 11.0, 12.0],
/// ]);
///
/// let expected = Matrix::new([
///     [38.0, 44.0, 50.0, 56.0],
///     [83.0, 98.0, 113.0, 128.0],
/// ]);
///
/// assert_eq!(expected, LEFT * RIGHT);
/// ```
///
/// ```compile_fail
/// # use fixgebra::Matrix;
/// let left = Matrix::<f64, 3, 2>::zero();
/// let right = Matrix::<f64, 4, 2>::zero();
/// let _ = left * right;
/// ```
impl<T: Scalar, const N: usize, const M: usize, const K: usize> Mul<Matrix<T, K, N>>
    for Matrix<T, N, M>
{
    type Output = Matrix<T, K, M>;

    fn mul(self, rhs: Matrix<T, K, N>) -> Self::Output {
        let mut ret = Matrix::<T, K, M>::zero();
        for m in 0..M {
            for k in 0..K {
                for n in 0..N {
                    ret.0[m][k] += self.0[m][n] * rhs.0[n][k];
                }
            }
        }
        ret
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const N: usize, const M: usize> Mul<Matrix<$t, N, M>> for $t {
                type Output = Matrix<$t, N, M>;

                fn mul(self, rhs: Matrix<$t, N, M>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64);

impl<T: Scalar, const N: usize, const M: usize> From<[[T; N]; M]> for Matrix<T, N, M> {
    fn from(rows: [[T; N]; M]) -> Self {
        Matrix(rows)
    }
}

/// Reads the slice in storage order. Fails with a [`ShapeError`] unless it
/// holds exactly `N * M` elements.
impl<T: Scalar, const N: usize, const M: usize> TryFrom<&[T]> for Matrix<T, N, M> {
    type Error = ShapeError;

    fn try_from(elements: &[T]) -> Result<Self, Self::Error> {
        ShapeError::check(N * M, elements.len())?;
        Ok(Matrix::from_fn(|n, m| elements[n + N * m]))
    }
}

impl<T: fmt::Display, const N: usize, const M: usize> fmt::Display for Matrix<T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in self.0.iter() {
            write!(f, "\t")?;
            for (n, e) in row.iter().enumerate() {
                if n > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{e}")?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

impl<T, const N: usize, const M: usize> AbsDiffEq for Matrix<T, N, M>
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
            .as_flattened()
            .iter()
            .zip(other.0.as_flattened())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize, const M: usize> RelativeEq for Matrix<T, N, M>
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
            .as_flattened()
            .iter()
            .zip(other.0.as_flattened())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize, const M: usize> UlpsEq for Matrix<T, N, M>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .as_flattened()
            .iter()
            .zip(other.0.as_flattened())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize, const M: usize> bytemuck::Zeroable
    for Matrix<T, N, M>
{
}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize, const M: usize> bytemuck::Pod for Matrix<T, N, M> {}
