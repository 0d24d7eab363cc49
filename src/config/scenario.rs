// src/config/scenario.rs

use serde::Deserialize;

use crate::math::{Method, Starter};
use crate::models::Problem;

/// 出力する図の一覧
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Scenario {
    pub output_dir: String,
    pub instability: InstabilityExperiment,
    pub zero_instability: ZeroInstabilityExperiment,
    pub multiple_root: MultipleRootExperiment,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            output_dir: "plots".to_string(),
            instability: InstabilityExperiment::default(),
            zero_instability: ZeroInstabilityExperiment::default(),
            multiple_root: MultipleRootExperiment::default(),
        }
    }
}

/// 刻み幅を変えて不安定性を見る図（ステップ数ごとに1パネル）
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InstabilityExperiment {
    pub name: String,
    pub method: Method,
    pub problem: Problem,
    pub starter: Starter,
    pub step_counts: Vec<usize>,
    pub analytical_samples: usize, // 解析解の描画点数
    pub y_range: Option<[f64; 2]>,
    pub image_size: [u32; 2],
}

impl Default for InstabilityExperiment {
    fn default() -> Self {
        InstabilityExperiment {
            name: "instability_LMM3".to_string(),
            method: Method::Lmm3Unstable,
            problem: Problem::Growth,
            starter: Starter::Rk4,
            step_counts: vec![10, 20, 40],
            analytical_samples: 1000,
            y_range: Some([0.8, 3.1]),
            image_size: [1200, 400],
        }
    }
}

/// 初期値の摂動による零不安定性の図
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ZeroInstabilityExperiment {
    pub name: String,
    pub problem: Problem,
    pub steps: usize,
    pub tail: usize, // 末尾から描画する点数
    pub image_size: [u32; 2],
}

impl Default for ZeroInstabilityExperiment {
    fn default() -> Self {
        ZeroInstabilityExperiment {
            name: "zero_instability_LMM3".to_string(),
            problem: Problem::Constant,
            steps: 36,
            tail: 5,
            image_size: [640, 480],
        }
    }
}

/// 特性多項式の重根による誤差の図
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MultipleRootExperiment {
    pub name: String,
    pub problem: Problem,
    pub starter: Starter,
    pub steps: usize,
    pub methods: Vec<Method>,
    pub image_size: [u32; 2],
}

impl Default for MultipleRootExperiment {
    fn default() -> Self {
        MultipleRootExperiment {
            name: "multiple_root_LMM3".to_string(),
            problem: Problem::Growth,
            // 寄生解を励起するため精度の低い始動法を使う
            starter: Starter::Euler,
            steps: 100,
            methods: vec![Method::AdamsBashforth3, Method::Lmm3MultipleRoots],
            image_size: [640, 480],
        }
    }
}
