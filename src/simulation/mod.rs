// src/simulation/mod.rs

pub mod csv;
pub mod framework;
pub mod load_parameters;
pub mod plot;

/// 線の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Reference, // 解析解
    Computed,  // 数値解や誤差
}

/// 1本の折れ線
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub kind: LineKind,
    pub t: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.y.iter().copied())
    }
}

/// 1つの座標軸に描く折れ線の集まり
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: Option<String>,
    pub y_range: Option<[f64; 2]>, // 固定する縦軸の範囲
    pub series: Vec<Series>,
}

/// 横一列に並べたパネルからなる図。name はファイル名（拡張子なし）
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub name: String,
    pub size: (u32, u32),
    pub panels: Vec<Panel>,
}
