use serde::Serialize;

/// A single ingredient as written in the source document.
///
/// `amount` is kept as the raw token ("25", "1/2", "1 1/2", "0.5") and is
/// never evaluated numerically. `unit` is only present when unit characters
/// followed the amount digits directly, with no whitespace in between.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: Option<String>,
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        amount: Option<String>,
        unit: Option<String>,
    ) -> Ingredient {
        Ingredient {
            name: name.into(),
            amount,
            unit,
        }
    }
}

/// One instruction line of a phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub text: String,
}

impl Step {
    pub fn new(text: impl Into<String>) -> Step {
        Step { text: text.into() }
    }
}

/// One cooking stage: the ingredients it introduces and the steps acting on
/// them. `ingredients` is `None` when the phase was opened by a step line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phase {
    pub ingredients: Option<Vec<Ingredient>>,
    pub steps: Vec<Step>,
}

/// A standalone waiting/resting instruction. Not a `Phase`: it carries no
/// ingredients or steps and always terminates the phase running before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitPhase {
    pub description: String,
}

/// An entry in a recipe's ordered phase list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PhaseEntry {
    Phase(Phase),
    Wait(WaitPhase),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub title: Option<String>,
    pub size: Option<String>,
    pub lang: Option<String>,
    pub source: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub phases: Vec<PhaseEntry>,
    pub keywords: Vec<String>,
}

impl Recipe {
    /// Appends a description contribution, joining successive contributions
    /// with a single space.
    pub fn push_description(&mut self, text: &str) {
        match &mut self.description {
            Some(description) => {
                description.push(' ');
                description.push_str(text);
            }
            None => self.description = Some(text.to_string()),
        }
    }

    /// Splits a keyword metadata value on commas and appends each trimmed
    /// term. Terms are kept in encounter order and never deduplicated.
    pub fn push_keywords(&mut self, value: &str) {
        self.keywords
            .extend(value.split(',').map(|term| term.trim().to_string()));
    }
}
