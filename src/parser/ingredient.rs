use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::model::Ingredient;

/// Amount token at the start of an ingredient line, with an optional unit
/// glued directly to the digits. Alternatives are ordered longest-first so
/// "1 1/2" is not cut down to "1". The trailing group forces either
/// whitespace before the name or end of input, which is what keeps "4 eggs"
/// from picking up "eggs" as a unit.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+ \d+/\d+|\d+/\d+|\d+\.\d+|\d+)([^\s\d]+)?(?:\s+|$)")
        .expect("amount pattern is valid")
});

/// Parses the content of an ingredient line (after the `#` sigil has been
/// stripped) into an [`Ingredient`].
///
/// The amount stays a raw textual token; nothing is evaluated numerically.
/// A line without a leading amount is all name.
pub fn parse_ingredient(content: &str) -> Result<Ingredient, ParseError> {
    let content = content.trim();

    let (name, amount, unit) = match AMOUNT_RE.captures(content) {
        Some(caps) => {
            let amount = caps.get(1).map(|m| m.as_str().to_string());
            let unit = caps.get(2).map(|m| m.as_str().to_string());
            let name = content[caps[0].len()..].trim();
            (name, amount, unit)
        }
        None => (content, None, None),
    };

    if name.is_empty() {
        return Err(ParseError::MissingIngredientName);
    }

    Ok(Ingredient::new(name, amount, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_and_unit() {
        let i = parse_ingredient("25g butter").unwrap();
        assert_eq!(i, Ingredient::new("butter", Some("25".into()), Some("g".into())));
    }

    #[test]
    fn surrounding_whitespace() {
        let i = parse_ingredient("\t 25g butter   ").unwrap();
        assert_eq!(i, Ingredient::new("butter", Some("25".into()), Some("g".into())));
    }

    #[test]
    fn fraction() {
        let i = parse_ingredient("1/2g butter").unwrap();
        assert_eq!(i, Ingredient::new("butter", Some("1/2".into()), Some("g".into())));
    }

    #[test]
    fn mixed_number() {
        let i = parse_ingredient("1 1/2g butter").unwrap();
        assert_eq!(i, Ingredient::new("butter", Some("1 1/2".into()), Some("g".into())));
    }

    #[test]
    fn decimal() {
        let i = parse_ingredient("0.5g butter").unwrap();
        assert_eq!(i, Ingredient::new("butter", Some("0.5".into()), Some("g".into())));
    }

    #[test]
    fn amount_without_unit() {
        // The space after "4" means "eggs" is the name, not a unit.
        let i = parse_ingredient("4 eggs").unwrap();
        assert_eq!(i, Ingredient::new("eggs", Some("4".into()), None));
    }

    #[test]
    fn no_amount() {
        let i = parse_ingredient("diced onion").unwrap();
        assert_eq!(i, Ingredient::new("diced onion", None, None));
    }

    #[test]
    fn dashed_range_is_all_name() {
        // "2-3" is not a recognized amount token, so nothing is split off.
        let i = parse_ingredient("2-3 eggs").unwrap();
        assert_eq!(i, Ingredient::new("2-3 eggs", None, None));
    }

    #[test]
    fn missing_name_fails() {
        assert!(matches!(
            parse_ingredient("25g"),
            Err(ParseError::MissingIngredientName)
        ));
        assert!(matches!(
            parse_ingredient("   "),
            Err(ParseError::MissingIngredientName)
        ));
    }
}
