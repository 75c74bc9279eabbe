use crate::container::GlimpseInput;
use crate::error::GlimpseError;
use crate::summary::GlimpseReport;
use crate::utils::{any_value_text, clip_line, value_list};
use polars::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Fixed display width of the dtype label.
pub const DTYPE_LABEL_WIDTH: usize = 15;

/// Leading values collapsed into each preview cell by the columnar engine.
pub const PREVIEW_VALUES: usize = 15;

/// Selectable rendering strategy for the glimpse report.
#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Plain,
    Columnar,
}

impl Engine {
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Plain => "plain",
            Engine::Columnar => "columnar",
        }
    }

    pub fn strategy(&self) -> &'static dyn RenderStrategy {
        match self {
            Engine::Plain => &PlainEngine,
            Engine::Columnar => &ColumnarEngine,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = GlimpseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Engine::Plain),
            "columnar" => Ok(Engine::Columnar),
            other => Err(GlimpseError::UnsupportedEngine(other.to_string())),
        }
    }
}

pub trait RenderStrategy {
    fn render(&self, input: &GlimpseInput<'_>, max_width: usize) -> GlimpseReport;
}

/// Builds each column line as a single padded string: name, dtype label and
/// a bracketed preview of the leading values.
pub struct PlainEngine;

impl RenderStrategy for PlainEngine {
    fn render(&self, input: &GlimpseInput<'_>, max_width: usize) -> GlimpseReport {
        let df = input.frame();
        let name_width = longest_name(df);
        let mut lines = Vec::with_capacity(df.width());
        for series in df.get_columns() {
            let name_field = format!("{:<width$}", format!("{}:", series.name()), width = name_width + 1);
            let dtype_field = format!(
                "{:<width$}",
                format!(" {}", series.dtype()),
                width = DTYPE_LABEL_WIDTH + 3
            );
            let values = value_list(series, max_width);
            let line = format!("{} {} {}", name_field, dtype_field, values);
            lines.push(clip_line(line, max_width));
        }
        GlimpseReport::new(input.header_line(), lines)
    }
}

/// Collects the summary into an intermediate three-column frame and renders
/// it as a left-aligned block. Suited to wide frames where the per-line
/// preview would be assembled column by column anyway.
pub struct ColumnarEngine;

impl RenderStrategy for ColumnarEngine {
    fn render(&self, input: &GlimpseInput<'_>, max_width: usize) -> GlimpseReport {
        let df = input.frame();
        let name_width = longest_name(df);
        // Preview budget saturates at zero when max_width is too narrow for
        // the name and dtype columns.
        let budget = max_width.saturating_sub(name_width + DTYPE_LABEL_WIDTH);
        let names = df.get_column_names();
        let dtypes: Vec<String> = df
            .get_columns()
            .iter()
            .map(|series| series.dtype().to_string())
            .collect();
        let previews: Vec<String> = df
            .get_columns()
            .iter()
            .map(|series| {
                let mut cell: String = value_list(series, PREVIEW_VALUES)
                    .chars()
                    .take(budget)
                    .collect();
                cell.push_str("...");
                cell
            })
            .collect();
        let block = df!(
            "column" => &names,
            "dtype" => &dtypes,
            "preview" => &previews
        )
        .unwrap_or_default();
        GlimpseReport::new(input.header_line(), render_block(&block, max_width))
    }
}

fn longest_name(df: &DataFrame) -> usize {
    df.get_column_names()
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
}

/// One line per row of `block`, cells left-aligned to the widest value of
/// their column. The last cell is left unpadded.
fn render_block(block: &DataFrame, max_width: usize) -> Vec<String> {
    let columns = block.get_columns();
    let widths: Vec<usize> = columns
        .iter()
        .map(|series| {
            (0..series.len())
                .map(|i| series.get(i).map_or(0, |v| any_value_text(&v).chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(block.height());
    for row in 0..block.height() {
        let mut line = String::new();
        for (idx, series) in columns.iter().enumerate() {
            let text = match series.get(row) {
                Ok(value) => any_value_text(&value),
                Err(_) => String::new(),
            };
            if idx + 1 == columns.len() {
                line.push_str(&text);
            } else {
                line.push_str(&format!("{:<width$} ", text, width = widths[idx]));
            }
        }
        lines.push(clip_line(line, max_width));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_names_parse() {
        assert_eq!("plain".parse::<Engine>().unwrap(), Engine::Plain);
        assert_eq!("columnar".parse::<Engine>().unwrap(), Engine::Columnar);
    }

    #[test]
    fn unknown_engine_is_rejected_by_name() {
        let err = "bogus".parse::<Engine>().unwrap_err();
        assert_eq!(err, GlimpseError::UnsupportedEngine(String::from("bogus")));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn columnar_emits_one_line_per_column() {
        let df = df!(
            "name" => &["Alice", "Bob", "Cara"],
            "age" => &[30, 25, 40]
        )
        .unwrap();
        let report = ColumnarEngine.render(&GlimpseInput::from(&df), 76);
        assert_eq!(report.column_lines().len(), 2);
        assert_eq!(report.header(), "DataFrame: 3 rows of 2 columns");
    }

    #[test]
    fn columnar_lines_stay_within_max_width() {
        let values: Vec<i32> = (0..50).collect();
        let df = df!(
            "an_unreasonably_long_column_name" => &values,
            "short" => &values
        )
        .unwrap();
        let report = ColumnarEngine.render(&GlimpseInput::from(&df), 60);
        for line in report.column_lines() {
            assert!(line.chars().count() <= 60);
        }
    }

    #[test]
    fn columnar_survives_widths_narrower_than_the_name_column() {
        let df = df!("an_unreasonably_long_column_name" => &[1, 2, 3]).unwrap();
        let report = ColumnarEngine.render(&GlimpseInput::from(&df), 10);
        assert_eq!(report.column_lines().len(), 1);
        for line in report.column_lines() {
            assert!(line.chars().count() <= 10);
        }
    }

    #[test]
    fn columnar_preview_cells_carry_an_ellipsis() {
        let df = df!("a" => &[1, 2, 3]).unwrap();
        let report = ColumnarEngine.render(&GlimpseInput::from(&df), 76);
        assert!(report.column_lines()[0].contains("[1, 2, 3]..."));
    }
}
