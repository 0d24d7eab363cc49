// src/math/integrator.rs

use serde::Deserialize;

use crate::math::error::MathError;
use crate::math::grid::{linspace, step_size};
use crate::math::starter::Starter;

/// 2点目の初期値に加える摂動の既定値
pub const SEED_PERTURBATION: f64 = 1e-15;

/// 固定刻みの線形多段法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// y_{n+2} + 4y_{n+1} - 5y_n = h(4f_{n+1} + 2f_n)。特性根 -5 を持ち零不安定
    Lmm3Unstable,
    /// y_{n+3} + y_{n+2} - y_{n+1} - y_n = h(8/3 f_{n+2} + 2/3 f_{n+1} + 2/3 f_n)。
    /// 単位円上に重根 -1 を持つ。
    ///
    /// 重根を 1 に置くと ρ'(1) = 0 より σ(1) = 0 となり公式が適合しないため、
    /// 重根は -1 に置いている。凡例も "Multiple root at 1" ではなく
    /// "Multiple root on unit circle" とする。
    Lmm3MultipleRoots,
    /// 3段アダムス・バッシュフォース法
    #[serde(rename = "adams_bashforth_3")]
    AdamsBashforth3,
}

impl Method {
    /// 必要な最小ステップ数
    pub fn min_steps(&self) -> usize {
        match self {
            Method::Lmm3Unstable => 2,
            Method::Lmm3MultipleRoots | Method::AdamsBashforth3 => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Method::Lmm3Unstable => "LMM3",
            Method::Lmm3MultipleRoots => "Multiple root on unit circle",
            Method::AdamsBashforth3 => "Adams-Bashforth",
        }
    }

    /// 区間 [t0, tn] を n ステップで積分する
    pub fn integrate<F>(
        &self,
        t0: f64,
        tn: f64,
        n: usize,
        y0: f64,
        starter: Starter,
        f: F,
    ) -> Result<Vec<f64>, MathError>
    where
        F: Fn(f64, f64) -> f64,
    {
        match self {
            Method::Lmm3Unstable => lmm3_unstable(t0, tn, n, y0, starter, f),
            Method::Lmm3MultipleRoots => lmm3_multiple_roots(t0, tn, n, y0, starter, f),
            Method::AdamsBashforth3 => adams_bashforth_3(t0, tn, n, y0, starter, f),
        }
    }
}

fn check_step_count(method: &'static str, n: usize, min: usize) -> Result<(), MathError> {
    if n < min {
        return Err(MathError::InvalidStepCount { method, n, min });
    }
    Ok(())
}

/// 2段の漸化式 y[i+1] = h(4K1 + 2K2) - 4y[i] + 5y[i-1] を y[2] 以降について解く
///
/// y[0], y[1] は呼び出し側で設定済みであること。
fn lmm3_sweep<F>(t: &[f64], h: f64, y: &mut [f64], f: &F)
where
    F: Fn(f64, f64) -> f64,
{
    let n = y.len() - 1;
    let mut k1 = f(t[0], y[0]);
    for i in 1..n {
        let k2 = k1;
        k1 = f(t[i], y[i]);
        y[i + 1] = h * (4.0 * k1 + 2.0 * k2) - 4.0 * y[i] + 5.0 * y[i - 1];
    }
}

/// 初期値を摂動させた零不安定な2段法
///
/// y[1] = y0 + perturbation として漸化式を進める。摂動は1ステップごとに
/// 約 -5 倍されるので、f = 0 でも解は定数から離れていく。
///
/// # 引数
/// - `t0`, `tn`: 積分区間
/// - `n`: ステップ数（2以上）
/// - `y0`: 初期値
/// - `perturbation`: 2点目に加える摂動（既定は [`SEED_PERTURBATION`]）
/// - `f`: 右辺関数 f(t, y)
///
/// # 戻り値
/// - 格子点上の近似解（長さ n+1）
pub fn lmm3_zero<F>(
    t0: f64,
    tn: f64,
    n: usize,
    y0: f64,
    perturbation: f64,
    f: F,
) -> Result<Vec<f64>, MathError>
where
    F: Fn(f64, f64) -> f64,
{
    check_step_count("lmm3_zero", n, 2)?;
    let h = step_size(t0, tn, n);
    let t = linspace(t0, tn, n)?;
    let mut y = vec![0.0; n + 1];
    y[0] = y0;
    y[1] = y0 + perturbation;
    lmm3_sweep(&t, h, &mut y, &f);
    Ok(y)
}

/// 零不安定な2段法。y[1] は1段法で求める
pub fn lmm3_unstable<F>(
    t0: f64,
    tn: f64,
    n: usize,
    y0: f64,
    starter: Starter,
    f: F,
) -> Result<Vec<f64>, MathError>
where
    F: Fn(f64, f64) -> f64,
{
    check_step_count("lmm3_unstable", n, Method::Lmm3Unstable.min_steps())?;
    let h = step_size(t0, tn, n);
    let t = linspace(t0, tn, n)?;
    let mut y = vec![0.0; n + 1];
    y[0] = y0;
    y[1] = starter.step(&f, t[0], y[0], h);
    lmm3_sweep(&t, h, &mut y, &f);
    Ok(y)
}

/// 3段法のための格子と最初の3点を用意する
fn seed_three_step<F>(
    t0: f64,
    tn: f64,
    n: usize,
    y0: f64,
    starter: Starter,
    f: &F,
) -> Result<(f64, Vec<f64>, Vec<f64>), MathError>
where
    F: Fn(f64, f64) -> f64,
{
    let h = step_size(t0, tn, n);
    let t = linspace(t0, tn, n)?;
    let mut y = vec![0.0; n + 1];
    y[0] = y0;
    y[1] = starter.step(f, t[0], y[0], h);
    y[2] = starter.step(f, t[1], y[1], h);
    Ok((h, t, y))
}

/// 第1特性多項式 ρ(ζ) = (ζ - 1)(ζ + 1)^2 を持つ3段3次の陽的公式
///
/// 単位円上の重根のため寄生解が線形に成長する（弱い不安定性）。
pub fn lmm3_multiple_roots<F>(
    t0: f64,
    tn: f64,
    n: usize,
    y0: f64,
    starter: Starter,
    f: F,
) -> Result<Vec<f64>, MathError>
where
    F: Fn(f64, f64) -> f64,
{
    check_step_count("lmm3_multiple_roots", n, Method::Lmm3MultipleRoots.min_steps())?;
    let (h, t, mut y) = seed_three_step(t0, tn, n, y0, starter, &f)?;
    let mut k2 = f(t[0], y[0]);
    let mut k1 = f(t[1], y[1]);
    for i in 2..n {
        let k3 = k2;
        k2 = k1;
        k1 = f(t[i], y[i]);
        y[i + 1] = -y[i]
            + y[i - 1]
            + y[i - 2]
            + h * (8.0 / 3.0 * k1 + 2.0 / 3.0 * k2 + 2.0 / 3.0 * k3);
    }
    Ok(y)
}

/// 3段アダムス・バッシュフォース法
///
/// y[i+1] = y[i] + h/12 (23 f_i - 16 f_{i-1} + 5 f_{i-2})
pub fn adams_bashforth_3<F>(
    t0: f64,
    tn: f64,
    n: usize,
    y0: f64,
    starter: Starter,
    f: F,
) -> Result<Vec<f64>, MathError>
where
    F: Fn(f64, f64) -> f64,
{
    check_step_count("adams_bashforth_3", n, Method::AdamsBashforth3.min_steps())?;
    let (h, t, mut y) = seed_three_step(t0, tn, n, y0, starter, &f)?;
    let mut k2 = f(t[0], y[0]);
    let mut k1 = f(t[1], y[1]);
    for i in 2..n {
        let k3 = k2;
        k2 = k1;
        k1 = f(t[i], y[i]);
        y[i + 1] = y[i] + h / 12.0 * (23.0 * k1 - 16.0 * k2 + 5.0 * k3);
    }
    Ok(y)
}
