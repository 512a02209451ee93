//! Error types for dataset decoding and body lookup

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Errors raised while loading or decoding an icon dataset
///
/// `Clone` so a failed decode can be memoized and handed to every later caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("failed to read icon dataset from {source_name}: {message}")]
    Unreadable { source_name: String, message: String },

    #[error("failed to parse icon dataset: {message} (line {line}, column {column})")]
    Malformed {
        message: String,
        line: usize,
        column: usize,
    },
}

impl DatasetError {
    /// Build a `Malformed` error from a serde_json decode failure
    pub fn malformed(err: &serde_json::Error) -> Self {
        DatasetError::Malformed {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    /// Format the error with dataset context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (message, offset) = match self {
            DatasetError::Unreadable { .. } => return self.to_string(),
            DatasetError::Malformed {
                message,
                line,
                column,
            } => (message, byte_offset(source, *line, *column)),
        };

        let end = (offset + 1).min(source.len()).max(offset);
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, offset)
            .with_message("malformed icon dataset")
            .with_label(
                Label::new((filename, offset..end))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match (written, String::from_utf8(buf)) {
            (Ok(()), Ok(report)) => report,
            _ => self.to_string(),
        }
    }
}

/// Translate a 1-based line/column pair into a byte offset
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let column = column.saturating_sub(1).min(text.len());
            return offset + column;
        }
        offset += text.len();
    }
    source.len()
}

/// Errors returned when resolving an icon body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Empty name, or a name absent from the dataset
    #[error("icon '{name}' not found")]
    NotFound { name: String },

    /// The dataset itself could not be decoded
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl CacheError {
    pub fn not_found(name: impl Into<String>) -> Self {
        CacheError::NotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CacheError::not_found("nonexistent");
        assert_eq!(err.to_string(), "icon 'nonexistent' not found");
    }

    #[test]
    fn test_dataset_error_is_transparent() {
        let err = CacheError::from(DatasetError::Unreadable {
            source_name: "data.json".to_string(),
            message: "permission denied".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "failed to read icon dataset from data.json: permission denied"
        );
    }

    #[test]
    fn test_byte_offset() {
        let source = "{\n  \"icons\": x\n}";
        assert_eq!(byte_offset(source, 1, 1), 0);
        assert_eq!(byte_offset(source, 2, 12), 13);
        assert_eq!(byte_offset(source, 9, 1), source.len());
    }

    #[test]
    fn test_format_points_at_offending_line() {
        let source = "{\n  \"icons\": \"invalid\"\n}";
        let err = DatasetError::Malformed {
            message: "invalid type: string \"invalid\", expected a map".to_string(),
            line: 2,
            column: 12,
        };
        let report = err.format(source, "heroicons.json");
        assert!(report.contains("malformed icon dataset"));
        assert!(report.contains("heroicons.json"));
    }
}
