//! Dense `f64` matrices with scalar broadcasting.
//!
//! A 1×1 matrix doubles as a scalar: it combines element-wise with a matrix
//! of any shape. Two non-scalar operands must have the same shape.

use std::fmt;

use arith_ir::BinaryOp;

use super::{apply_f64, Value};

/// Shape error for matrix arithmetic and construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("cannot apply `{op}` to a {}x{} and a {}x{} matrix", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        op: BinaryOp,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("a matrix needs at least one element")]
    Empty,
}

/// Row-major matrix of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// A 1×1 matrix.
    pub fn scalar(value: f64) -> Self {
        Matrix {
            rows: 1,
            cols: 1,
            data: vec![value],
        }
    }

    /// Build from rows, which must be non-empty and equally long.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[f64]>,
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(MatrixError::Empty);
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_scalar(&self) -> bool {
        self.data.len() == 1
    }

    /// Element at `(row, col)`, if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }
}

impl Value for Matrix {
    type Error = MatrixError;

    fn from_int(n: i64) -> Self {
        Matrix::scalar(f64::from_int(n))
    }

    fn binary(&self, op: BinaryOp, rhs: &Self) -> Result<Self, MatrixError> {
        if self.shape() == rhs.shape() {
            return Ok(Matrix {
                rows: self.rows,
                cols: self.cols,
                data: self
                    .data
                    .iter()
                    .zip(&rhs.data)
                    .map(|(&a, &b)| apply_f64(a, op, b))
                    .collect(),
            });
        }
        if self.is_scalar() {
            let a = self.data[0];
            return Ok(rhs.map(|b| apply_f64(a, op, b)));
        }
        if rhs.is_scalar() {
            let b = rhs.data[0];
            return Ok(self.map(|a| apply_f64(a, op, b)));
        }
        Err(MatrixError::ShapeMismatch {
            op,
            left: self.shape(),
            right: rhs.shape(),
        })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_scalar() {
            return write!(f, "{}", self.data[0]);
        }
        f.write_str("[")?;
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{x}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
