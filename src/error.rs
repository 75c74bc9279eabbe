use thiserror::Error;

/// Errors surfaced by the loosely-typed glimpse entry points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GlimpseError {
    #[error("expected a DataFrame or a grouped DataFrame")]
    InvalidInput,
    #[error("unsupported engine '{0}', expected 'plain' or 'columnar'")]
    UnsupportedEngine(String),
}
