// src/config/parameters.rs

use serde::Deserialize;

use crate::math::SEED_PERTURBATION;

/// 全実験に共通する初期値問題のパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IntegrationParameters {
    pub t0: f64,           // 区間の始点
    pub tn: f64,           // 区間の終点
    pub y0: f64,           // 初期値 y(t0)
    pub perturbation: f64, // 零不安定性の実験で2点目に加える摂動
}

impl Default for IntegrationParameters {
    fn default() -> Self {
        IntegrationParameters {
            t0: 0.0,
            tn: 1.0,
            y0: 1.0,
            perturbation: SEED_PERTURBATION,
        }
    }
}
