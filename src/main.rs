// src/main.rs

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use log::info;

use simulation::csv::save_figure_csv;
use simulation::framework::build_figures;
use simulation::load_parameters::{load_integration_parameters, load_scenario};
use simulation::plot::render_figure;

mod config;
mod math;
mod models;
mod simulation;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 設定ディレクトリ（第1引数、既定は config）
    let config_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config"));

    // パラメータとシナリオの読み込み
    let params = load_integration_parameters(&config_dir.join("parameters.yaml"))?;
    let scenario = load_scenario(&config_dir.join("scenario.yaml"))?;
    info!(
        "区間 [{}, {}], y0 = {}, 摂動 = {:e}",
        params.t0, params.tn, params.y0, params.perturbation
    );

    // 図の作成
    let figures = build_figures(&params, &scenario)?;

    // 画像とCSVの出力
    let output_dir = PathBuf::from(&scenario.output_dir);
    fs::create_dir_all(&output_dir)?;
    for figure in &figures {
        render_figure(&output_dir, figure)?;
        save_figure_csv(&output_dir, figure)?;
    }

    info!("{} 個の図を {} に出力しました", figures.len(), output_dir.display());
    Ok(())
}
