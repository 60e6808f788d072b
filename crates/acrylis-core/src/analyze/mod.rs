pub mod acrylates;
pub mod fungal_acne;

pub use acrylates::{AcrylateRule, AcrylatesAnalyzer};
pub use fungal_acne::FungalAcneAnalyzer;

use crate::model::{Concern, FoundIngredient, IndividualAnalysis};
use std::collections::HashSet;

const ACRYLATES_SAFE: &str = "Based on our analysis database, no ingredients known to be acrylates or common cross-reactors were detected.";
const ACRYLATES_UNSAFE: &str =
    "One or more ingredients that could be problematic for an acrylates allergy were found in the list.";
const FUNGAL_ACNE_SAFE: &str =
    "Based on our analysis database, no ingredients known to be fungal acne triggers were detected.";
const FUNGAL_ACNE_UNSAFE: &str =
    "One or more ingredients that could be problematic for fungal acne were found in the list.";

/// Fixed summary sentence for a concern's verdict.
pub fn explanation(concern: Concern, is_safe: bool) -> &'static str {
    match (concern, is_safe) {
        (Concern::Acrylates, true) => ACRYLATES_SAFE,
        (Concern::Acrylates, false) => ACRYLATES_UNSAFE,
        (Concern::FungalAcne, true) => FUNGAL_ACNE_SAFE,
        (Concern::FungalAcne, false) => FUNGAL_ACNE_UNSAFE,
    }
}

/// Build the verdict for one concern from its raw findings.
///
/// Findings that repeat an ingredient already reported (case-insensitive) are
/// dropped; the first occurrence is kept.
pub fn assemble(concern: Concern, found: Vec<FoundIngredient>) -> IndividualAnalysis {
    let mut seen = HashSet::new();
    let found_ingredients: Vec<FoundIngredient> = found
        .into_iter()
        .filter(|f| seen.insert(f.name.to_lowercase()))
        .collect();

    let is_safe = found_ingredients.is_empty();
    IndividualAnalysis {
        is_safe,
        found_ingredients,
        explanation: explanation(concern, is_safe).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn finding(name: &str) -> FoundIngredient {
        FoundIngredient {
            name: name.into(),
            reason: "r".into(),
            status: Status::Unsafe,
        }
    }

    #[test]
    fn test_empty_is_safe() {
        let analysis = assemble(Concern::Acrylates, vec![]);
        assert!(analysis.is_safe);
        assert!(analysis.found_ingredients.is_empty());
        assert_eq!(analysis.explanation, ACRYLATES_SAFE);
    }

    #[test]
    fn test_findings_make_unsafe() {
        let analysis = assemble(Concern::FungalAcne, vec![finding("Lanolin")]);
        assert!(!analysis.is_safe);
        assert_eq!(analysis.explanation, FUNGAL_ACNE_UNSAFE);
    }

    #[test]
    fn test_dedup_by_name_keeps_first() {
        let analysis = assemble(
            Concern::Acrylates,
            vec![finding("Carbomer"), finding("Styrene"), finding("CARBOMER")],
        );
        let names: Vec<_> = analysis
            .found_ingredients
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Carbomer", "Styrene"]);
    }

    #[test]
    fn test_explanations_differ_per_concern() {
        assert_ne!(
            explanation(Concern::Acrylates, false),
            explanation(Concern::FungalAcne, false)
        );
        assert_eq!(explanation(Concern::FungalAcne, true), FUNGAL_ACNE_SAFE);
    }
}
