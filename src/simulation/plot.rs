// src/simulation/plot.rs

use std::error::Error;
use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::simulation::{Figure, LineKind, Panel};

/// 解析解の色
const REFERENCE_COLOR: RGBColor = RGBColor(255, 165, 0);

/// 数値解の色（順番に使う）
const PALETTE: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(214, 39, 40),
    RGBColor(44, 160, 44),
    RGBColor(148, 103, 189),
];

/// 有限値の範囲に余白を付けた軸の範囲
///
/// # 引数
/// - `values`: 軸方向の値
/// - `padding`: 幅に対する余白の割合
///
/// # 戻り値
/// - (最小値, 最大値)。有限値がなければ (0, 1)
pub fn axis_range<I>(values: I, padding: f64) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return (0.0, 1.0);
    }
    let span = max - min;
    let pad = if span > 0.0 {
        padding * span
    } else if min != 0.0 {
        0.05 * min.abs()
    } else {
        1.0
    };
    (min - pad, max + pad)
}

/// 縦軸の範囲 [lo, hi] に収まる区間ごとに折れ線を分割する
///
/// 範囲を出入りする線分は境界との交点で切る。両端が範囲の上下に分かれて
/// 範囲を横切る線分は、2つの交点を結ぶ線分として残す。非有限の点は捨てる。
pub fn clip_to_range(points: &[(f64, f64)], lo: f64, hi: f64) -> Vec<Vec<(f64, f64)>> {
    let inside = |y: f64| y >= lo && y <= hi;
    // 範囲外の値に最も近い境界
    let nearest_bound = |y: f64| if y > hi { hi } else { lo };
    let cross_at = |(t0, y0): (f64, f64), (t1, y1): (f64, f64), bound: f64| {
        let s = (bound - y0) / (y1 - y0);
        (t0 + s * (t1 - t0), bound)
    };

    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut previous: Option<(f64, f64)> = None;
    for &point in points {
        if !(point.0.is_finite() && point.1.is_finite()) {
            if current.len() > 1 {
                segments.push(std::mem::take(&mut current));
            }
            current.clear();
            previous = None;
            continue;
        }
        match (previous, inside(point.1)) {
            (Some(prev), true) if !inside(prev.1) => {
                current.push(cross_at(prev, point, nearest_bound(prev.1)));
                current.push(point);
            }
            (_, true) => current.push(point),
            (Some(prev), false) if inside(prev.1) => {
                current.push(cross_at(prev, point, nearest_bound(point.1)));
                segments.push(std::mem::take(&mut current));
            }
            (Some(prev), false) if nearest_bound(prev.1) != nearest_bound(point.1) => {
                segments.push(vec![
                    cross_at(prev, point, nearest_bound(prev.1)),
                    cross_at(prev, point, nearest_bound(point.1)),
                ]);
            }
            (_, false) => {}
        }
        previous = Some(point);
    }
    if current.len() > 1 {
        segments.push(current);
    }
    segments
}

fn draw_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: &Panel) -> Result<(), Box<dyn Error>> {
    let (x_lo, x_hi) = axis_range(panel.series.iter().flat_map(|s| s.t.iter().copied()), 0.0);
    let (y_lo, y_hi) = match panel.y_range {
        Some([lo, hi]) => (lo, hi),
        None => axis_range(panel.series.iter().flat_map(|s| s.y.iter().copied()), 0.05),
    };

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(70);
    if let Some(title) = &panel.title {
        builder.caption(title, ("sans-serif", 20));
    }
    let mut chart = builder.build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
    chart.configure_mesh().x_labels(6).y_labels(8).draw()?;

    let mut computed = 0;
    for series in &panel.series {
        let style = match series.kind {
            LineKind::Reference => REFERENCE_COLOR.mix(0.8).stroke_width(2),
            LineKind::Computed => {
                let color = PALETTE[computed % PALETTE.len()];
                computed += 1;
                color.stroke_width(2)
            }
        };
        let points: Vec<(f64, f64)> = series.points().collect();
        for (index, segment) in clip_to_range(&points, y_lo, y_hi).into_iter().enumerate() {
            let drawn = chart.draw_series(LineSeries::new(segment, style))?;
            if index == 0 {
                if let Some(label) = &series.label {
                    drawn
                        .label(label.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
                }
            }
        }
    }

    if panel.series.iter().any(|s| s.label.is_some()) {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }
    Ok(())
}

/// 図を <dir>/<name>.svg に描画する
pub fn render_figure(dir: &Path, figure: &Figure) -> Result<(), Box<dyn Error>> {
    let path = dir.join(format!("{}.svg", figure.name));
    {
        let root = SVGBackend::new(&path, figure.size).into_drawing_area();
        root.fill(&WHITE)?;
        let areas = root.split_evenly((1, figure.panels.len().max(1)));
        for (area, panel) in areas.iter().zip(&figure.panels) {
            draw_panel(area, panel)?;
        }
        root.present()?;
    }
    info!("{} を書き出しました", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Series;
    use tempfile::TempDir;

    fn two_panel_figure() -> Figure {
        let t: Vec<f64> = (0..=10).map(|i| i as f64 * 0.1).collect();
        let exact: Vec<f64> = t.iter().map(|t| t.exp()).collect();
        let oscillating: Vec<f64> = (0..=10).map(|i| 1.0 + (-5.0f64).powi(i)).collect();
        Figure {
            name: "two_panels".to_string(),
            size: (800, 300),
            panels: vec![
                Panel {
                    title: Some("h = 0.1".to_string()),
                    y_range: Some([0.8, 3.1]),
                    series: vec![
                        Series {
                            label: None,
                            kind: LineKind::Reference,
                            t: t.clone(),
                            y: exact.clone(),
                        },
                        Series {
                            label: None,
                            kind: LineKind::Computed,
                            t: t.clone(),
                            y: oscillating,
                        },
                    ],
                },
                Panel {
                    title: None,
                    y_range: None,
                    series: vec![Series {
                        label: Some("Numerical solution".to_string()),
                        kind: LineKind::Computed,
                        t,
                        y: exact,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_render_figure_writes_svg() {
        let temp_dir = TempDir::new().unwrap();
        render_figure(temp_dir.path(), &two_panel_figure()).unwrap();

        let svg = std::fs::read_to_string(temp_dir.path().join("two_panels.svg")).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Numerical solution"));
        assert!(svg.contains("h = 0.1"));
    }

    #[test]
    fn test_axis_range_padding() {
        assert_eq!(axis_range(vec![0.0, 10.0], 0.1), (-1.0, 11.0));
        assert_eq!(axis_range(vec![0.0, 1.0], 0.0), (0.0, 1.0));
    }

    #[test]
    fn test_axis_range_ignores_non_finite() {
        assert_eq!(axis_range(vec![f64::NAN, 2.0, f64::INFINITY, 4.0], 0.0), (2.0, 4.0));
        assert_eq!(axis_range(vec![f64::NAN], 0.05), (0.0, 1.0));
    }

    #[test]
    fn test_axis_range_constant_values() {
        let (lo, hi) = axis_range(vec![2.0, 2.0], 0.05);
        assert!(lo < 2.0 && hi > 2.0);
        assert_eq!(axis_range(vec![0.0], 0.05), (-1.0, 1.0));
    }

    #[test]
    fn test_clip_inside_range_is_unchanged() {
        let points = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 1.5)];
        assert_eq!(clip_to_range(&points, 0.0, 3.0), vec![points]);
    }

    #[test]
    fn test_clip_cuts_at_upper_bound() {
        let points = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 4.0), (3.0, 100.0)];
        let segments = clip_to_range(&points, 0.0, 3.0);
        assert_eq!(segments, vec![vec![(0.0, 1.0), (1.0, 2.0), (1.5, 3.0)]]);
    }

    #[test]
    fn test_clip_reentering_starts_new_segment() {
        let points = vec![(0.0, 1.0), (1.0, -1.0), (2.0, 1.0), (3.0, 2.0)];
        let segments = clip_to_range(&points, 0.0, 3.0);
        assert_eq!(
            segments,
            vec![
                vec![(0.0, 1.0), (0.5, 0.0)],
                vec![(1.5, 0.0), (2.0, 1.0), (3.0, 2.0)],
            ]
        );
    }

    #[test]
    fn test_clip_keeps_segment_passing_through_range() {
        let segments = clip_to_range(&[(0.0, 100.0), (1.0, -100.0)], -10.0, 10.0);
        assert_eq!(segments, vec![vec![(0.45, 10.0), (0.55, -10.0)]]);

        let segments = clip_to_range(&[(0.0, -1.0), (1.0, 3.0)], 0.0, 2.0);
        assert_eq!(segments, vec![vec![(0.25, 0.0), (0.75, 2.0)]]);
    }

    #[test]
    fn test_clip_oscillating_solution_draws_every_crossing() {
        // 符号を変えながら発散する解は範囲を毎回横切る
        let points: Vec<(f64, f64)> = (0..6)
            .map(|i| (i as f64, 1.0 + (-5.0f64).powi(i + 2)))
            .collect();
        let segments = clip_to_range(&points, 0.8, 3.1);
        assert_eq!(segments.len(), 5);
        for segment in &segments {
            assert_eq!(segment.len(), 2);
            assert!(segment.iter().all(|&(_, y)| y == 0.8 || y == 3.1));
        }
    }

    #[test]
    fn test_clip_drops_segment_outside_on_one_side() {
        assert!(clip_to_range(&[(0.0, 10.0), (1.0, 20.0)], 0.0, 3.0).is_empty());
    }

    #[test]
    fn test_clip_skips_non_finite_points() {
        let points = vec![(0.0, 1.0), (1.0, f64::NAN), (2.0, 1.0), (3.0, 2.0)];
        let segments = clip_to_range(&points, 0.0, 3.0);
        assert_eq!(segments, vec![vec![(2.0, 1.0), (3.0, 2.0)]]);
    }
}
