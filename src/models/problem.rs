// src/models/problem.rs

use serde::Deserialize;

/// 実験で積分するスカラー常微分方程式 y' = f(t, y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    /// y' = y
    Growth,
    /// y' = 0
    Constant,
}

impl Problem {
    /// 右辺関数 f(t, y)
    pub fn rhs(&self, _t: f64, y: f64) -> f64 {
        match self {
            Problem::Growth => y,
            Problem::Constant => 0.0,
        }
    }

    /// y(t0) = y0 を満たす解析解の時刻 t での値
    pub fn exact(&self, t: f64, t0: f64, y0: f64) -> f64 {
        match self {
            Problem::Growth => y0 * (t - t0).exp(),
            Problem::Constant => y0,
        }
    }

    /// 格子上の解析解
    pub fn exact_on(&self, t: &[f64], t0: f64, y0: f64) -> Vec<f64> {
        t.iter().map(|&ti| self.exact(ti, t0, y0)).collect()
    }
}
