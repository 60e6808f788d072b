use crate::model::{FoundIngredient, Ingredient, Status};
use crate::parsing::normalize::strip_parentheticals;
use crate::terms::TermIndex;

/// Screens ingredients for Malassezia (fungal acne) triggers.
///
/// Matching is exact on the normalized name only: parenthetical common names
/// are dropped and whitespace collapsed first, so "Helianthus Annuus
/// (Sunflower) Seed Oil" matches "helianthus annuus seed oil" but "Sunflower
/// Oil" does not.
#[derive(Debug, Clone)]
pub struct FungalAcneAnalyzer {
    index: TermIndex,
}

impl FungalAcneAnalyzer {
    pub fn new(index: TermIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    pub fn analyze(&self, ingredients: &[Ingredient]) -> Vec<FoundIngredient> {
        ingredients
            .iter()
            .filter_map(|ingredient| {
                let normalized = strip_parentheticals(&ingredient.name);
                let reason = self.index.reason(&normalized)?;
                tracing::debug!(ingredient = %ingredient.raw, term = %normalized, "fungal acne trigger");
                Some(FoundIngredient {
                    name: ingredient.raw.clone(),
                    reason: reason.to_string(),
                    status: Status::Unsafe,
                })
            })
            .collect()
    }
}
