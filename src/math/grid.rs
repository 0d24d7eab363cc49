// src/math/grid.rs

use crate::math::error::MathError;

/// 区間 [t0, tn] を n 等分した n+1 点の格子
///
/// # 引数
/// - `t0`: 始点
/// - `tn`: 終点（t0 より小さくてもよい）
/// - `n`: 分割数
///
/// # 戻り値
/// - 格子点の列。両端は t0, tn と厳密に一致する。
pub fn linspace(t0: f64, tn: f64, n: usize) -> Result<Vec<f64>, MathError> {
    if n == 0 {
        return Err(MathError::InvalidStepCount {
            method: "linspace",
            n,
            min: 1,
        });
    }
    let delta = (tn - t0) / n as f64;
    let mut t: Vec<f64> = (0..=n).map(|i| t0 + i as f64 * delta).collect();
    t[n] = tn;
    Ok(t)
}

/// 刻み幅 h = |tn - t0| / n
pub fn step_size(t0: f64, tn: f64, n: usize) -> f64 {
    (tn - t0).abs() / n as f64
}
