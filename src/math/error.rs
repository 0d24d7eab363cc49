// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("{method} のステップ数 n は {min} 以上が必要です (n = {n})。")]
    InvalidStepCount {
        method: &'static str,
        n: usize,
        min: usize,
    },
    #[error("系列の長さが一致しません (期待値 {expected}, 実際 {actual})。")]
    LengthMismatch { expected: usize, actual: usize },
}
