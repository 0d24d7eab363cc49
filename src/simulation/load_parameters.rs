// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use std::path::Path;

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_yaml::from_reader;

use crate::config::{IntegrationParameters, Scenario};

/// YAMLファイルの読み込み
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let file = File::open(path)?;
    let value: T = from_reader(file)?;
    Ok(value)
}

/// ファイルがなければ既定値を使う
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, Box<dyn Error>> {
    if !path.exists() {
        warn!("{} が見つからないため既定値を使います", path.display());
        return Ok(T::default());
    }
    info!("{} を読み込みます", path.display());
    load_yaml(path)
}

/// 積分パラメータの読み込み
pub fn load_integration_parameters(path: &Path) -> Result<IntegrationParameters, Box<dyn Error>> {
    load_or_default(path)
}

/// シナリオの読み込み
pub fn load_scenario(path: &Path) -> Result<Scenario, Box<dyn Error>> {
    load_or_default(path)
}
