use crate::error::GlimpseError;
use polars::prelude::*;
use std::any::Any;

/// A grouped view over a frame: the frame itself plus the grouping key
/// columns. Summaries of a grouped view report on the underlying frame.
#[derive(Clone, Debug)]
pub struct GroupedFrame {
    data: DataFrame,
    keys: Vec<String>,
}

impl GroupedFrame {
    pub fn new(data: DataFrame, keys: Vec<String>) -> Self {
        Self { data, keys }
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// The two input shapes a glimpse can be taken of.
#[derive(Clone, Copy, Debug)]
pub enum GlimpseInput<'a> {
    Frame(&'a DataFrame),
    Grouped(&'a GroupedFrame),
}

impl<'a> GlimpseInput<'a> {
    /// Input check for the loosely-typed entry point: anything that is not
    /// a frame or a grouped view is rejected.
    pub fn try_from_any(data: &'a dyn Any) -> Result<Self, GlimpseError> {
        if let Some(frame) = data.downcast_ref::<DataFrame>() {
            Ok(GlimpseInput::Frame(frame))
        } else if let Some(grouped) = data.downcast_ref::<GroupedFrame>() {
            Ok(GlimpseInput::Grouped(grouped))
        } else {
            Err(GlimpseError::InvalidInput)
        }
    }

    pub fn frame(&self) -> &'a DataFrame {
        match self {
            GlimpseInput::Frame(frame) => frame,
            GlimpseInput::Grouped(grouped) => grouped.data(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GlimpseInput::Frame(_) => "DataFrame",
            GlimpseInput::Grouped(_) => "GroupBy",
        }
    }

    pub fn header_line(&self) -> String {
        let (rows, cols) = self.frame().shape();
        format!("{}: {} rows of {} columns", self.kind(), rows, cols)
    }
}

impl<'a> From<&'a DataFrame> for GlimpseInput<'a> {
    fn from(frame: &'a DataFrame) -> Self {
        GlimpseInput::Frame(frame)
    }
}

impl<'a> From<&'a GroupedFrame> for GlimpseInput<'a> {
    fn from(grouped: &'a GroupedFrame) -> Self {
        GlimpseInput::Grouped(grouped)
    }
}
