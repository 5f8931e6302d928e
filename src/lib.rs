pub mod error;
pub mod model;
pub mod parser;

pub use crate::error::ParseError;
pub use crate::model::{Ingredient, Phase, PhaseEntry, Recipe, Step, WaitPhase};
pub use crate::parser::{parse_ingredient, parse_lines};

/// Parses a whole recipe document into the ordered list of recipes it
/// contains. Character decoding and line-ending normalization are the
/// caller's concern; this splits on `\n` and hands the lines to
/// [`parser::parse_lines`].
pub fn parse_document(input: &str) -> Result<Vec<Recipe>, ParseError> {
    parser::parse_lines(input.lines())
}
