use polars::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

/// Display text for a single cell value. `AnyValue` renders strings with
/// double quotes, so the string variants are unwrapped by hand.
pub(crate) fn any_value_text(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => format!("{}", other),
    }
}

/// Preview text for a single value: strings are single-quoted, everything
/// else keeps its display form (nulls render as `null`).
pub(crate) fn quoted_value_text(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::String(s) => format!("'{}'", s),
        AnyValue::StringOwned(s) => format!("'{}'", s),
        other => format!("{}", other),
    }
}

/// Renders the first `limit` values of a series as a bracketed,
/// comma-separated list.
pub(crate) fn value_list(series: &Series, limit: usize) -> String {
    let head = series.head(Some(limit));
    let mut out = String::from("[");
    for i in 0..head.len() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Ok(value) = head.get(i) {
            out.push_str(&quoted_value_text(&value));
        }
    }
    out.push(']');
    out
}

/// Clips a line to `max_width` characters. Over-long lines keep their
/// first `max_width - 4` characters and end with `" ..."`.
pub(crate) fn clip_line(line: String, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        return line;
    }
    let mut clipped: String = line.chars().take(max_width.saturating_sub(4)).collect();
    clipped.push_str(" ...");
    clipped
}

/// Updates values in `target` for keys that already exist in it. Keys
/// present in `updates` but not in `target` are ignored.
pub fn update_matching_keys<K, V>(target: &mut HashMap<K, V>, updates: &HashMap<K, V>)
where
    K: Eq + Hash,
    V: Clone,
{
    for (key, value) in updates {
        if let Some(slot) = target.get_mut(key) {
            *slot = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_list_quotes_strings() {
        let series = Series::new("name", &["Alice", "Bob", "Cara"]);
        assert_eq!(value_list(&series, 76), "['Alice', 'Bob', 'Cara']");
    }

    #[test]
    fn value_list_renders_numbers_and_nulls() {
        let series = Series::new("age", &[Some(30), None, Some(40)]);
        assert_eq!(value_list(&series, 76), "[30, null, 40]");
    }

    #[test]
    fn value_list_respects_limit() {
        let series = Series::new("n", &[1, 2, 3, 4, 5]);
        assert_eq!(value_list(&series, 2), "[1, 2]");
    }

    #[test]
    fn clip_line_keeps_short_lines() {
        assert_eq!(clip_line(String::from("short"), 10), "short");
    }

    #[test]
    fn clip_line_truncates_to_exact_width() {
        let clipped = clip_line("x".repeat(40), 20);
        assert_eq!(clipped.chars().count(), 20);
        assert!(clipped.ends_with(" ..."));
    }

    #[test]
    fn update_matching_keys_ignores_new_keys() {
        let mut target = HashMap::from([("a", 1), ("b", 2)]);
        let updates = HashMap::from([("b", 20), ("c", 30)]);
        update_matching_keys(&mut target, &updates);
        assert_eq!(target, HashMap::from([("a", 1), ("b", 20)]));
    }
}
