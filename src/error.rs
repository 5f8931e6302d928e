use thiserror::Error;

/// Errors that can occur while parsing a recipe document
#[derive(Error, Debug)]
pub enum ParseError {
    /// A `key: value` metadata line whose key is not recognized
    #[error("invalid metadata key")]
    InvalidMetadataKey { key: String },

    /// An ingredient line with no name left after the amount and unit
    #[error("ingredient line has no name")]
    MissingIngredientName,

    /// A sub-parser failure positioned at the physical line that caused it.
    /// `line` is the raw, untrimmed input line; `line_number` is 1-based.
    #[error("parse error at line {line_number}: {line:?}")]
    AtLine {
        line: String,
        line_number: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Wraps a sub-parser failure with the offending line and its 1-based
    /// position. Positioning happens exactly once, at the document level.
    pub(crate) fn at_line(self, line: &str, line_number: usize) -> ParseError {
        ParseError::AtLine {
            line: line.to_string(),
            line_number,
            source: Box::new(self),
        }
    }
}
