// src/math/starter.rs

use serde::Deserialize;

/// 多段法の追加の初期値を作る1段法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Starter {
    /// 前進オイラー法（局所誤差 O(h^2)）
    Euler,
    /// 古典的4段ルンゲ・クッタ法（局所誤差 O(h^5)）
    #[default]
    Rk4,
}

impl Starter {
    /// 時刻 t の値 y から t + h の値を1ステップで求める
    pub fn step<F>(&self, f: &F, t: f64, y: f64, h: f64) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        match self {
            Starter::Euler => euler_step(f, t, y, h),
            Starter::Rk4 => rk4_step(f, t, y, h),
        }
    }
}

/// 前進オイラー法による1ステップ
pub fn euler_step<F>(f: &F, t: f64, y: f64, h: f64) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    y + h * f(t, y)
}

/// 古典的4段ルンゲ・クッタ法による1ステップ
///
/// # 引数
/// - `f`: 右辺関数 f(t, y)
/// - `t`: 現在の時刻
/// - `y`: 現在の値
/// - `h`: 刻み幅
///
/// # 戻り値
/// - 時刻 t + h における近似値
pub fn rk4_step<F>(f: &F, t: f64, y: f64, h: f64) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let k1 = f(t, y);
    let k2 = f(t + 0.5 * h, y + 0.5 * h * k1);
    let k3 = f(t + 0.5 * h, y + 0.5 * h * k2);
    let k4 = f(t + h, y + h * k3);
    y + h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}
