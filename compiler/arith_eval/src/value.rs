//! The value interface the evaluator is generic over.
//!
//! The evaluator never inspects values: it builds them from integer literals
//! and combines them with [`Value::binary`]. Whatever a type's own
//! arithmetic does (truncating or real division, broadcasting, failing) is
//! what a program gets.

use std::convert::Infallible;
use std::fmt;

use arith_ir::BinaryOp;

mod matrix;

pub use matrix::{Matrix, MatrixError};

/// A runtime value of the DSL.
pub trait Value: Clone + fmt::Debug {
    /// Failure reported by this type's arithmetic.
    type Error: std::error::Error + 'static;

    /// Value of an integer literal.
    fn from_int(n: i64) -> Self;

    /// Apply `self op rhs`.
    fn binary(&self, op: BinaryOp, rhs: &Self) -> Result<Self, Self::Error>;
}

/// Arithmetic failure for integer values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {}", .op.noun())]
    Overflow { op: BinaryOp },
}

/// Checked 64-bit integers. Division truncates toward zero.
impl Value for i64 {
    type Error = ArithError;

    #[inline]
    fn from_int(n: i64) -> Self {
        n
    }

    fn binary(&self, op: BinaryOp, rhs: &Self) -> Result<Self, ArithError> {
        let (a, b) = (*self, *rhs);
        let result = match op {
            BinaryOp::Add => a.checked_add(b),
            BinaryOp::Sub => a.checked_sub(b),
            BinaryOp::Mul => a.checked_mul(b),
            BinaryOp::Div => {
                if b == 0 {
                    return Err(ArithError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        result.ok_or(ArithError::Overflow { op })
    }
}

/// IEEE-754 doubles. Never fails; `1 / 0` is infinity.
impl Value for f64 {
    type Error = Infallible;

    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "literals beyond 2^53 round like any other f64 conversion"
    )]
    fn from_int(n: i64) -> Self {
        n as f64
    }

    #[inline]
    fn binary(&self, op: BinaryOp, rhs: &Self) -> Result<Self, Infallible> {
        Ok(apply_f64(*self, op, *rhs))
    }
}

#[inline]
pub(crate) fn apply_f64(a: f64, op: BinaryOp, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
    }
}
