use crate::container::{GlimpseInput, GroupedFrame};
use crate::engine::Engine;
use crate::error::GlimpseError;
use polars::prelude::*;
use std::any::Any;
use std::fmt;

/// Rendering options for a glimpse report.
#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GlimpseOptions {
    pub max_width: usize,
    pub engine: Engine,
}

impl Default for GlimpseOptions {
    fn default() -> Self {
        Self {
            max_width: 76,
            engine: Engine::Plain,
        }
    }
}

/// A rendered summary: one header line with the frame's shape, then one
/// line per column. Printing is left to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlimpseReport {
    header: String,
    columns: Vec<String>,
}

impl GlimpseReport {
    pub(crate) fn new(header: String, columns: Vec<String>) -> Self {
        Self { header, columns }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn column_lines(&self) -> &[String] {
        &self.columns
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str()).chain(self.columns.iter().map(String::as_str))
    }

    pub fn line_count(&self) -> usize {
        1 + self.columns.len()
    }

    /// Writes the report to standard output, one line at a time.
    pub fn print(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}

impl fmt::Display for GlimpseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Renders a width-bounded summary of the frame's shape and columns.
pub fn summarize<'a>(data: impl Into<GlimpseInput<'a>>, options: &GlimpseOptions) -> GlimpseReport {
    let input = data.into();
    log::debug!(
        "rendering glimpse of a {} ({} columns) with the {} engine",
        input.kind(),
        input.frame().width(),
        options.engine
    );
    options.engine.strategy().render(&input, options.max_width)
}

/// Loosely-typed entry point: accepts any value, rejecting everything that
/// is not a frame or a grouped view, and selects the engine by name. Both
/// checks run before anything is rendered.
pub fn summarize_any(
    data: &dyn Any,
    max_width: usize,
    engine: &str,
) -> Result<GlimpseReport, GlimpseError> {
    let input = GlimpseInput::try_from_any(data)?;
    let engine = engine.parse::<Engine>()?;
    Ok(engine.strategy().render(&input, max_width))
}

/// Glimpse as a method on the frame types themselves.
pub trait GlimpseExt {
    fn glimpse_with(&self, options: &GlimpseOptions) -> GlimpseReport;

    fn glimpse(&self) -> GlimpseReport {
        self.glimpse_with(&GlimpseOptions::default())
    }
}

impl GlimpseExt for DataFrame {
    fn glimpse_with(&self, options: &GlimpseOptions) -> GlimpseReport {
        summarize(self, options)
    }
}

impl GlimpseExt for GroupedFrame {
    fn glimpse_with(&self, options: &GlimpseOptions) -> GlimpseReport {
        summarize(self, options)
    }
}
