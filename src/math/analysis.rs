// src/math/analysis.rs

use crate::math::error::MathError;

/// 数値解と解析解の各点での絶対誤差
///
/// # 引数
/// - `numerical`: 数値解
/// - `analytical`: 同じ格子上の解析解
///
/// # 戻り値
/// - |numerical[i] - analytical[i]| の列
pub fn absolute_error(numerical: &[f64], analytical: &[f64]) -> Result<Vec<f64>, MathError> {
    if numerical.len() != analytical.len() {
        return Err(MathError::LengthMismatch {
            expected: analytical.len(),
            actual: numerical.len(),
        });
    }
    Ok(numerical
        .iter()
        .zip(analytical)
        .map(|(y, exact)| (y - exact).abs())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_error() {
        let error = absolute_error(&[1.0, 2.5, -1.0], &[1.0, 2.0, 1.0]).unwrap();
        assert_eq!(error, vec![0.0, 0.5, 2.0]);
    }

    #[test]
    fn test_absolute_error_length_mismatch() {
        let err = absolute_error(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            MathError::LengthMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_absolute_error_propagates_nan() {
        let error = absolute_error(&[f64::NAN, 1.0], &[0.0, 0.0]).unwrap();
        assert!(error[0].is_nan());
        assert_eq!(error[1], 1.0);
    }
}
