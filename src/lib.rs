#![warn(clippy::all, rust_2018_idioms)]

mod container;
mod engine;
mod error;
mod flatten;
mod summary;
mod utils;

pub use container::{GlimpseInput, GroupedFrame};
pub use engine::{
    ColumnarEngine, Engine, PlainEngine, RenderStrategy, DTYPE_LABEL_WIDTH, PREVIEW_VALUES,
};
pub use error::GlimpseError;
pub use flatten::{flatten_columns, flatten_labels, ColumnLabel, DEFAULT_SEPARATOR};
pub use summary::{summarize, summarize_any, GlimpseExt, GlimpseOptions, GlimpseReport};
pub use utils::update_matching_keys;

use polars::prelude::*;

/// Summary of a frame with the default options.
pub fn glimpse(df: &DataFrame) -> GlimpseReport {
    summarize(df, &GlimpseOptions::default())
}
