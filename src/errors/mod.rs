use anyhow::Context as _;
use std::path::Path;

/// Add context to file errors
pub fn file_context(operation: &str, path: &Path) -> String {
    format!("Failed to {} file: {}", operation, path.display())
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to errors tied to a specific archive row
pub fn row_context(source: &str, row: usize) -> String {
    format!("Malformed row {} in {}", row, source)
}

/// Wrap result with file context
pub fn with_file_context<T, E>(result: Result<T, E>, operation: &str, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| file_context(operation, path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
