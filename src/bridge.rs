//! Conversions between vectors and single-row or single-column matrices, and
//! the mixed products built on them. Everything here goes through the public
//! `Vector`/`Matrix` API and the matrix product.

use core::ops::Mul;

use crate::{Matrix, Normal, Scalar, Vector};

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The vector as a matrix with a single row, `Matrix<T, N, 1>`.
    /// ```rust
    /// # use fixgebra::{Matrix, Vector};
    /// const V: Vector<f64, 3> = Vector::new([1.0, 2.0, 3.0]);
    /// const ROW: Matrix<f64, 3, 1> = V.to_row();
    /// assert_eq!(Matrix::new([[1.0, 2.0, 3.0]]), ROW);
    /// ```
    pub const fn to_row(self) -> Matrix<T, N, 1> {
        Matrix::new([self.0])
    }

    /// The vector as a matrix with a single column, `Matrix<T, 1, N>`.
    pub const fn to_column(self) -> Matrix<T, 1, N> {
        let mut ret = [[T::ZERO; 1]; N];

        let mut i = 0;
        while i < N {
            ret[i][0] = self.0[i];
            i += 1;
        }
        Matrix::new(ret)
    }

    pub const fn from_row(row: Matrix<T, N, 1>) -> Self {
        Vector::new(row.0[0])
    }

    /// Read a single-column matrix top to bottom.
    /// ```rust
    /// # use fixgebra::{Matrix, Vector};
    /// const COLUMN: Matrix<f64, 1, 3> = Matrix::new([[1.0], [2.0], [3.0]]);
    /// const V: Vector<f64, 3> = Vector::from_column(COLUMN);
    /// assert_eq!(Vector::new([1.0, 2.0, 3.0]), V);
    /// ```
    pub const fn from_column(column: Matrix<T, 1, N>) -> Self {
        let mut ret = [T::ZERO; N];

        let mut i = 0;
        while i < N {
            ret[i] = column.0[i][0];
            i += 1;
        }
        Vector::new(ret)
    }
}

/// Matrix times column vector.
/// ```rust
/// # use fixgebra::{Matrix, Vector};
/// let m = Matrix::new([
///     [10.0, 20.0, 30.0],
///     [100.0, 200.0, 300.0],
///     [1000.0, 2000.0, 3000.0],
/// ]);
/// let v = Vector::new([1.0, 2.0, 3.0]);
///
/// assert_eq!(Vector::new([140.0, 1400.0, 14000.0]), m * v);
/// ```
impl<T: Scalar, const N: usize, const M: usize> Mul<Vector<T, N>> for Matrix<T, N, M> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::from_column(self * rhs.to_column())
    }
}

/// Row vector times matrix.
/// ```rust
/// # use fixgebra::{Matrix, Vector};
/// let m = Matrix::new([
///     [10.0, 20.0, 30.0],
///     [100.0, 200.0, 300.0],
///     [1000.0, 2000.0, 3000.0],
/// ]);
/// let v = Vector::new([1.0, 2.0, 3.0]);
///
/// assert_eq!(Vector::new([3210.0, 6420.0, 9630.0]), v * m);
/// ```
impl<T: Scalar, const N: usize, const M: usize> Mul<Matrix<T, M, N>> for Vector<T, N> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: Matrix<T, M, N>) -> Self::Output {
        Vector::from_row(self.to_row() * rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<Normal<T, N>> for Matrix<T, N, M> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: Normal<T, N>) -> Self::Output {
        self * rhs.into_vector()
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<Matrix<T, M, N>> for Normal<T, N> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: Matrix<T, M, N>) -> Self::Output {
        self.into_vector() * rhs
    }
}
