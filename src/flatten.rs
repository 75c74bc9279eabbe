use polars::prelude::*;

/// Default separator used to join nested column name parts.
pub const DEFAULT_SEPARATOR: &str = "_";

/// A column identifier that may carry a hierarchical (multi-part) name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnLabel {
    Flat(String),
    Nested(Vec<String>),
}

impl ColumnLabel {
    pub fn flat(name: impl Into<String>) -> Self {
        ColumnLabel::Flat(name.into())
    }

    pub fn nested<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnLabel::Nested(parts.into_iter().map(Into::into).collect())
    }

    /// Flat names pass through untouched; nested names are joined with the
    /// separator and trimmed.
    pub fn flatten(&self, separator: &str) -> String {
        match self {
            ColumnLabel::Flat(name) => name.clone(),
            ColumnLabel::Nested(parts) => parts.join(separator).trim().to_string(),
        }
    }
}

impl From<&str> for ColumnLabel {
    fn from(name: &str) -> Self {
        ColumnLabel::Flat(name.to_string())
    }
}

pub fn flatten_labels(labels: &[ColumnLabel], separator: &str) -> Vec<String> {
    labels.iter().map(|label| label.flatten(separator)).collect()
}

/// Returns a frame whose columns carry the flattened labels. The label
/// count must match the frame width.
pub fn flatten_columns(
    df: &DataFrame,
    labels: &[ColumnLabel],
    separator: &str,
) -> PolarsResult<DataFrame> {
    let mut out = df.clone();
    out.set_column_names(&flatten_labels(labels, separator))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_labels_are_a_noop() {
        let df = df!("date" => &[1, 2, 3], "value" => &[4, 5, 6]).unwrap();
        let labels = [ColumnLabel::flat("date"), ColumnLabel::flat("value")];
        let flattened = flatten_columns(&df, &labels, DEFAULT_SEPARATOR).unwrap();
        assert!(flattened.equals(&df));
    }

    #[test]
    fn nested_labels_join_with_the_separator() {
        let labels = [
            ColumnLabel::nested(["values", "value1"]),
            ColumnLabel::nested(["values", "value2"]),
        ];
        let flattened = flatten_labels(&labels, "_");
        assert_eq!(flattened, ["values_value1", "values_value2"]);
    }

    #[test]
    fn mixed_labels_only_touch_nested_names() {
        let df = df!("date" => &[1], "v1" => &[2]).unwrap();
        let labels = [
            ColumnLabel::flat("date"),
            ColumnLabel::nested(["values", "value1"]),
        ];
        let flattened = flatten_columns(&df, &labels, DEFAULT_SEPARATOR).unwrap();
        assert_eq!(flattened.get_column_names(), ["date", "values_value1"]);
    }

    #[test]
    fn label_count_must_match_the_frame_width() {
        let df = df!("a" => &[1], "b" => &[2]).unwrap();
        let labels = [ColumnLabel::flat("a")];
        assert!(flatten_columns(&df, &labels, DEFAULT_SEPARATOR).is_err());
    }
}
