use std::mem;

use log::{debug, trace};

use crate::error::ParseError;
use crate::model::{Phase, PhaseEntry, Recipe, Step, WaitPhase};

mod ingredient;
mod metadata;

pub use self::ingredient::parse_ingredient;
pub use self::metadata::{apply_metadata, MetaOutcome};

/// Accumulator state for one document parse. Owned exclusively by
/// [`parse_lines`]; nothing outlives the call.
struct Assembler {
    recipes: Vec<Recipe>,
    current_recipe: Recipe,
    current_phase: Option<Phase>,
}

/// Parses an ordered sequence of raw lines into the recipes they describe.
///
/// Lines are consumed strictly in order, one pass, no lookahead. The first
/// failing line aborts the parse; the error carries the raw line text and
/// its 1-based number, with the underlying cause attached as `source`.
pub fn parse_lines<I>(lines: I) -> Result<Vec<Recipe>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut assembler = Assembler {
        recipes: Vec::new(),
        current_recipe: Recipe::default(),
        current_phase: None,
    };

    for (index, line) in lines.into_iter().enumerate() {
        let raw = line.as_ref();
        assembler
            .route(raw)
            .map_err(|cause| cause.at_line(raw, index + 1))?;
    }

    assembler.finish();
    Ok(assembler.recipes)
}

impl Assembler {
    /// Classifies one line by its leading sigil and updates the accumulator.
    fn route(&mut self, raw: &str) -> Result<(), ParseError> {
        let line = raw.trim();

        if line.is_empty() {
            return Ok(());
        }
        if line == "!" {
            self.start_new_recipe();
            return Ok(());
        }
        if let Some(rest) = line.strip_prefix('\'') {
            trace!("skipping comment: {}", rest.trim());
            return Ok(());
        }
        if let Some(rest) = line.strip_prefix('#') {
            let ingredient = parse_ingredient(rest)?;
            let phase = self.current_phase.get_or_insert_with(|| Phase {
                ingredients: Some(Vec::new()),
                steps: Vec::new(),
            });
            phase.ingredients.get_or_insert_with(Vec::new).push(ingredient);
            return Ok(());
        }
        if let Some(rest) = line.strip_prefix('*') {
            let phase = self.current_phase.get_or_insert_with(|| Phase {
                ingredients: None,
                steps: Vec::new(),
            });
            phase.steps.push(Step::new(rest.trim()));
            return Ok(());
        }
        if let Some(rest) = line.strip_prefix('+') {
            // A wait phase always terminates the running phase; the two are
            // never merged.
            self.close_phase();
            self.current_recipe.phases.push(PhaseEntry::Wait(WaitPhase {
                description: rest.trim().to_string(),
            }));
            return Ok(());
        }

        match apply_metadata(line, &mut self.current_recipe)? {
            MetaOutcome::Applied => {}
            MetaOutcome::NotMetadata => self.current_recipe.push_description(line),
        }
        Ok(())
    }

    /// Handles the bare `!` boundary: the current recipe is finalized even
    /// when it accumulated nothing, and an open phase is discarded rather
    /// than attached to either recipe.
    fn start_new_recipe(&mut self) {
        self.current_phase = None;
        debug!("recipe boundary, finalizing {:?}", self.current_recipe.title);
        self.recipes.push(mem::take(&mut self.current_recipe));
    }

    fn close_phase(&mut self) {
        if let Some(phase) = self.current_phase.take() {
            self.current_recipe.phases.push(PhaseEntry::Phase(phase));
        }
    }

    /// End of input: the open phase closes into the current recipe, which is
    /// finalized unconditionally.
    fn finish(&mut self) {
        self.close_phase();
        debug!("end of input, finalizing {:?}", self.current_recipe.title);
        self.recipes.push(mem::take(&mut self.current_recipe));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    #[test]
    fn ingredient_after_step_joins_the_open_phase() {
        let recipes = parse_lines(["* soften", "# 25g butter"]).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(
            recipes[0].phases,
            vec![PhaseEntry::Phase(Phase {
                ingredients: Some(vec![Ingredient::new(
                    "butter",
                    Some("25".into()),
                    Some("g".into())
                )]),
                steps: vec![Step::new("soften")],
            })]
        );
    }

    #[test]
    fn comments_and_blank_lines_produce_nothing() {
        let recipes = parse_lines(["", "   ", "' a comment"]).unwrap();
        assert_eq!(recipes, vec![Recipe::default()]);
    }

    #[test]
    fn boundary_discards_the_open_phase() {
        let recipes = parse_lines(["# something", "!", "* stir"]).unwrap();
        assert_eq!(recipes.len(), 2);
        assert!(recipes[0].phases.is_empty());
        assert_eq!(
            recipes[1].phases,
            vec![PhaseEntry::Phase(Phase {
                ingredients: None,
                steps: vec![Step::new("stir")],
            })]
        );
    }
}
