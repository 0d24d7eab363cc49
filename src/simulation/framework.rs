// src/simulation/framework.rs

use log::{debug, info, warn};

use crate::config::{
    IntegrationParameters, InstabilityExperiment, MultipleRootExperiment, Scenario,
    ZeroInstabilityExperiment,
};
use crate::math::grid::step_size;
use crate::math::{absolute_error, linspace, lmm3_zero, MathError};
use crate::simulation::{Figure, LineKind, Panel, Series};

/// ログ用の誤差の最大値（有限値のみ）。有限値がなければ None
fn finite_max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// 刻み幅をパネルの題名用に整形する（末尾の0を落とす）
fn format_step(h: f64) -> String {
    let text = format!("{:.6}", h);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// 刻み幅ごとの数値解と解析解を並べた図
pub fn build_instability_figure(
    params: &IntegrationParameters,
    experiment: &InstabilityExperiment,
) -> Result<Figure, MathError> {
    let problem = experiment.problem;
    let rhs = move |t: f64, y: f64| problem.rhs(t, y);

    let samples = experiment.analytical_samples.max(2);
    let analytical_t = linspace(params.t0, params.tn, samples - 1)?;
    let analytical = Series {
        label: None,
        kind: LineKind::Reference,
        y: problem.exact_on(&analytical_t, params.t0, params.y0),
        t: analytical_t,
    };

    let panels = experiment
        .step_counts
        .iter()
        .map(|&n| -> Result<Panel, MathError> {
            let y = experiment
                .method
                .integrate(params.t0, params.tn, n, params.y0, experiment.starter, rhs)?;
            let t = linspace(params.t0, params.tn, n)?;
            let h = step_size(params.t0, params.tn, n);
            let error = absolute_error(&y, &problem.exact_on(&t, params.t0, params.y0))?;
            debug!(
                "{}: n = {}, h = {}, 最大誤差 = {:?}",
                experiment.method.label(),
                n,
                h,
                finite_max(&error)
            );
            Ok(Panel {
                title: Some(format!("h = {}", format_step(h))),
                y_range: experiment.y_range,
                series: vec![
                    analytical.clone(),
                    Series {
                        label: None,
                        kind: LineKind::Computed,
                        t,
                        y,
                    },
                ],
            })
        })
        .collect::<Result<Vec<Panel>, MathError>>()?;

    info!(
        "{}: {} 個のパネルを作成しました",
        experiment.name,
        panels.len()
    );
    Ok(Figure {
        name: experiment.name.clone(),
        size: (experiment.image_size[0], experiment.image_size[1]),
        panels,
    })
}

/// 摂動を加えた初期値による零不安定性の図（末尾の点のみ）
pub fn build_zero_instability_figure(
    params: &IntegrationParameters,
    experiment: &ZeroInstabilityExperiment,
) -> Result<Figure, MathError> {
    let problem = experiment.problem;
    let n = experiment.steps;
    let y = lmm3_zero(
        params.t0,
        params.tn,
        n,
        params.y0,
        params.perturbation,
        move |t, y| problem.rhs(t, y),
    )?;
    let t = linspace(params.t0, params.tn, n)?;
    let exact = problem.exact_on(&t, params.t0, params.y0);

    let tail = experiment.tail.clamp(1, n + 1);
    if tail != experiment.tail {
        warn!(
            "tail = {} は範囲外のため {} に補正しました",
            experiment.tail, tail
        );
    }
    let start = n + 1 - tail;
    info!(
        "{}: 摂動 {:e}, 最終値 y[{}] = {:e}",
        experiment.name, params.perturbation, n, y[n]
    );

    Ok(Figure {
        name: experiment.name.clone(),
        size: (experiment.image_size[0], experiment.image_size[1]),
        panels: vec![Panel {
            title: None,
            y_range: None,
            series: vec![
                Series {
                    label: Some("Analytical solution".to_string()),
                    kind: LineKind::Reference,
                    t: t[start..].to_vec(),
                    y: exact[start..].to_vec(),
                },
                Series {
                    label: Some("Numerical solution".to_string()),
                    kind: LineKind::Computed,
                    t: t[start..].to_vec(),
                    y: y[start..].to_vec(),
                },
            ],
        }],
    })
}

/// 各手法の解析解に対する絶対誤差の図
pub fn build_multiple_root_figure(
    params: &IntegrationParameters,
    experiment: &MultipleRootExperiment,
) -> Result<Figure, MathError> {
    let problem = experiment.problem;
    let n = experiment.steps;
    let t = linspace(params.t0, params.tn, n)?;
    let exact = problem.exact_on(&t, params.t0, params.y0);

    let series = experiment
        .methods
        .iter()
        .map(|method| -> Result<Series, MathError> {
            let y = method.integrate(
                params.t0,
                params.tn,
                n,
                params.y0,
                experiment.starter,
                move |t, y| problem.rhs(t, y),
            )?;
            let error = absolute_error(&y, &exact)?;
            info!(
                "{}: {} の最大誤差 = {:?}",
                experiment.name,
                method.label(),
                finite_max(&error)
            );
            Ok(Series {
                label: Some(method.label().to_string()),
                kind: LineKind::Computed,
                t: t.clone(),
                y: error,
            })
        })
        .collect::<Result<Vec<Series>, MathError>>()?;

    Ok(Figure {
        name: experiment.name.clone(),
        size: (experiment.image_size[0], experiment.image_size[1]),
        panels: vec![Panel {
            title: None,
            y_range: None,
            series,
        }],
    })
}

/// シナリオに含まれる全ての図を作成する
pub fn build_figures(
    params: &IntegrationParameters,
    scenario: &Scenario,
) -> Result<Vec<Figure>, MathError> {
    Ok(vec![
        build_instability_figure(params, &scenario.instability)?,
        build_zero_instability_figure(params, &scenario.zero_instability)?,
        build_multiple_root_figure(params, &scenario.multiple_root)?,
    ])
}
