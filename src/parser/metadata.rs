use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::model::Recipe;

/// `key: value` shape with an optional leading `!` sigil. The key is a run
/// of word characters; everything after the colon is the value.
static META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!?\s*(\w+)\s*:\s*(.*)$").expect("metadata pattern is valid"));

/// What the metadata parser did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaOutcome {
    /// The line matched `key: value` and the recipe was updated.
    Applied,
    /// The line is not metadata; the caller treats it as description text.
    NotMetadata,
}

/// Applies a metadata line to the recipe currently being accumulated.
///
/// A line that does not have the `key: value` shape leaves the recipe
/// untouched and reports [`MetaOutcome::NotMetadata`]. A line that has the
/// shape but uses an unrecognized key is a real failure, not a fallback to
/// description text. Keys are matched case-sensitively, as written.
///
/// The bare `!` recipe boundary is handled by the document assembler and
/// never reaches this parser.
pub fn apply_metadata(content: &str, recipe: &mut Recipe) -> Result<MetaOutcome, ParseError> {
    let content = content.trim();

    let Some(caps) = META_RE.captures(content) else {
        return Ok(MetaOutcome::NotMetadata);
    };
    let key = &caps[1];
    let value = caps[2].trim();

    match key {
        "title" => recipe.title = Some(value.to_string()),
        "size" => recipe.size = Some(value.to_string()),
        "lang" => recipe.lang = Some(value.to_string()),
        "source" => recipe.source = Some(value.to_string()),
        "author" => recipe.author = Some(value.to_string()),
        "desc" => recipe.push_description(value),
        "keywords" => recipe.push_keywords(value),
        _ => {
            return Err(ParseError::InvalidMetadataKey {
                key: key.to_string(),
            })
        }
    }

    Ok(MetaOutcome::Applied)
}
