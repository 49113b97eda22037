//! Heap-backed, row-major matrix with its shape carried at runtime. Only
//! built for tests, where it serves as an independent reference for the
//! fixed-size [`Matrix`](crate::Matrix) product and transpose.

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Matrix {
    vals: Vec<f64>,
    rows: usize,
    columns: usize,
}

impl Matrix {
    pub fn new(vals: Vec<f64>, columns: usize) -> Matrix {
        assert_eq!(vals.len() % columns, 0, "ragged matrix");
        Matrix {
            rows: vals.len() / columns,
            vals,
            columns,
        }
    }

    pub fn from_fixed<const N: usize, const M: usize>(mat: &crate::Matrix<f64, N, M>) -> Matrix {
        Matrix {
            vals: mat.as_slice().to_vec(),
            rows: M,
            columns: N,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.vals
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        assert!(row < self.rows && column < self.columns);
        self.vals[self.columns * row + column]
    }

    pub fn mul(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.columns, rhs.rows, "inner dimensions differ");
        let mut ret = Vec::with_capacity(self.rows * rhs.columns);
        for i in 0..self.rows {
            for j in 0..rhs.columns {
                let acc = (0..self.columns)
                    .fold(0.0, |acc, k| acc + self.get(i, k) * rhs.get(k, j));
                ret.push(acc);
            }
        }
        Matrix {
            vals: ret,
            rows: self.rows,
            columns: rhs.columns,
        }
    }

    pub fn transpose(&mut self) {
        let mut ret = Vec::with_capacity(self.vals.len());
        for i in 0..self.columns {
            for j in 0..self.rows {
                ret.push(self.vals[j * self.columns + i])
            }
        }

        std::mem::swap(&mut self.rows, &mut self.columns);
        self.vals = ret;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_square_mul() {
        let left = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3);
        let right = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2);
        let result = left.mul(&right);
        assert_eq!((2, 2), result.shape());
        assert_eq!(&[22.0, 28.0, 49.0, 64.0], result.as_slice());
    }

    #[test]
    fn non_square_transpose() {
        let mut mat = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3);
        mat.transpose();
        assert_eq!((3, 2), mat.shape());
        assert_eq!(&[1.0, 4.0, 2.0, 5.0, 3.0, 6.0], mat.as_slice());
    }

    #[test]
    fn from_fixed_keeps_storage_order() {
        let fixed = crate::Matrix::<f64, 3, 2>::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(
            Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3),
            Matrix::from_fixed(&fixed)
        );
    }
}
