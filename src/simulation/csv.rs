// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::simulation::{Figure, LineKind, Series};

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(path: &Path) -> Result<BufWriter<File>, Box<dyn Error>> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(writer)
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(b"panel,series,t,y\n")
}

/// 系列の名前。ラベルがなければ線の種類から付ける
fn series_name(series: &Series) -> String {
    match (&series.label, series.kind) {
        (Some(label), _) => escape_field(label),
        (None, LineKind::Reference) => "analytical".to_string(),
        (None, LineKind::Computed) => "numerical".to_string(),
    }
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// 1系列分のCSV行の作成
pub fn create_csv_rows(panel: usize, series: &Series) -> String {
    let name = series_name(series);
    let mut rows = String::new();
    for (t, y) in series.points() {
        rows.push_str(&format!("{},{},{},{}\n", panel, name, t, y));
    }
    rows
}

/// 図に含まれる全ての系列の書き込み
pub fn write_figure_rows<W: Write>(writer: &mut W, figure: &Figure) -> Result<(), std::io::Error> {
    for (index, panel) in figure.panels.iter().enumerate() {
        for series in &panel.series {
            writer.write_all(create_csv_rows(index, series).as_bytes())?;
        }
    }
    Ok(())
}

/// 図のデータを <dir>/<name>.csv に保存する
pub fn save_figure_csv(dir: &Path, figure: &Figure) -> Result<(), Box<dyn Error>> {
    let path = dir.join(format!("{}.csv", figure.name));
    let mut writer = setup_csv_output(&path)?;
    write_figure_rows(&mut writer, figure)?;
    writer.flush()?;
    info!("{} を書き出しました", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Panel;
    use tempfile::TempDir;

    fn sample_figure() -> Figure {
        Figure {
            name: "sample".to_string(),
            size: (640, 480),
            panels: vec![
                Panel {
                    title: Some("h = 0.5".to_string()),
                    y_range: None,
                    series: vec![
                        Series {
                            label: None,
                            kind: LineKind::Reference,
                            t: vec![0.0, 1.0],
                            y: vec![1.0, 2.5],
                        },
                        Series {
                            label: None,
                            kind: LineKind::Computed,
                            t: vec![0.0, 0.5, 1.0],
                            y: vec![1.0, 1.5, 2.25],
                        },
                    ],
                },
                Panel {
                    title: None,
                    y_range: None,
                    series: vec![Series {
                        label: Some("Adams-Bashforth".to_string()),
                        kind: LineKind::Computed,
                        t: vec![0.0],
                        y: vec![f64::NAN],
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_write_csv_header() {
        let mut buffer = Vec::new();
        write_csv_header(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "panel,series,t,y\n");
    }

    #[test]
    fn test_write_figure_rows() {
        let mut buffer = Vec::new();
        write_figure_rows(&mut buffer, &sample_figure()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "0,analytical,0,1");
        assert_eq!(lines[3], "0,numerical,0.5,1.5");
        assert_eq!(lines[5], "1,Adams-Bashforth,0,NaN");
    }

    #[test]
    fn test_label_with_comma_is_quoted() {
        let series = Series {
            label: Some("a, \"b\"".to_string()),
            kind: LineKind::Computed,
            t: vec![1.0],
            y: vec![2.0],
        };
        assert_eq!(create_csv_rows(2, &series), "2,\"a, \"\"b\"\"\",1,2\n");
    }

    #[test]
    fn test_save_figure_csv() {
        let temp_dir = TempDir::new().unwrap();
        save_figure_csv(temp_dir.path(), &sample_figure()).unwrap();
        let text = std::fs::read_to_string(temp_dir.path().join("sample.csv")).unwrap();
        assert!(text.starts_with("panel,series,t,y\n"));
        assert_eq!(text.lines().count(), 7);
    }
}
