use crate::analyze::{self, AcrylatesAnalyzer, FungalAcneAnalyzer};
use crate::error::AcrylisError;
use crate::model::{AnalysisResult, Concern, Ingredient};
use crate::parsing::tokenize;
use crate::terms::schema::TermListDef;
use crate::terms::{builtin, TermIndex};

/// Options for a classification run.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    /// Also screen for fungal acne triggers.
    pub check_fungal_acne: bool,
}

/// Trait for ingredient classification backends.
pub trait IngredientClassifier: Send + Sync {
    /// Classify a raw, pasted ingredient list.
    fn classify(&self, text: &str, options: &ClassifyOptions)
        -> Result<AnalysisResult, AcrylisError>;

    /// Name of this classification backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Dictionary-backed classifier. Immutable once built.
#[derive(Debug, Clone)]
pub struct LocalClassifier {
    acrylates: AcrylatesAnalyzer,
    fungal_acne: FungalAcneAnalyzer,
}

impl LocalClassifier {
    /// Build from the term lists embedded in the crate.
    pub fn builtin() -> Result<Self, AcrylisError> {
        let acrylates = builtin::load_for(Concern::Acrylates)?;
        let fungal_acne = builtin::load_for(Concern::FungalAcne)?;
        Self::from_term_lists(&acrylates, &fungal_acne)
    }

    /// Build from explicit term lists, one per concern.
    pub fn from_term_lists(
        acrylates: &TermListDef,
        fungal_acne: &TermListDef,
    ) -> Result<Self, AcrylisError> {
        expect_concern(acrylates, Concern::Acrylates)?;
        expect_concern(fungal_acne, Concern::FungalAcne)?;

        let classifier = Self {
            acrylates: AcrylatesAnalyzer::new(TermIndex::build(acrylates))?,
            fungal_acne: FungalAcneAnalyzer::new(TermIndex::build(fungal_acne)),
        };
        tracing::debug!(
            acrylate_terms = classifier.acrylates.index().len(),
            fungal_acne_terms = classifier.fungal_acne.index().len(),
            "term lists loaded"
        );
        Ok(classifier)
    }

    /// Classify an already tokenized list.
    pub fn classify_ingredients(
        &self,
        ingredients: &[Ingredient],
        options: &ClassifyOptions,
    ) -> AnalysisResult {
        let acrylates = analyze::assemble(Concern::Acrylates, self.acrylates.analyze(ingredients));

        let fungal_acne = options.check_fungal_acne.then(|| {
            analyze::assemble(Concern::FungalAcne, self.fungal_acne.analyze(ingredients))
        });

        tracing::info!(
            ingredients = ingredients.len(),
            acrylates_found = acrylates.found_ingredients.len(),
            fungal_acne_found = fungal_acne.as_ref().map(|a| a.found_ingredients.len()),
            "ingredient list classified"
        );

        AnalysisResult {
            acrylates,
            fungal_acne,
        }
    }
}

impl IngredientClassifier for LocalClassifier {
    fn classify(
        &self,
        text: &str,
        options: &ClassifyOptions,
    ) -> Result<AnalysisResult, AcrylisError> {
        let ingredients = tokenize(text);
        Ok(self.classify_ingredients(&ingredients, options))
    }

    fn backend_name(&self) -> &str {
        "local"
    }
}

fn expect_concern(list: &TermListDef, concern: Concern) -> Result<(), AcrylisError> {
    if list.concern != concern {
        return Err(AcrylisError::TermListInvalid(format!(
            "term list '{}' is for {}, expected {}",
            list.name, list.concern, concern
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_classifier() {
        let classifier = LocalClassifier::builtin().unwrap();
        assert_eq!(classifier.backend_name(), "local");
        let result = classifier
            .classify("Water, Carbomer", &ClassifyOptions::default())
            .unwrap();
        assert!(!result.acrylates.is_safe);
        assert!(result.fungal_acne.is_none());
    }

    #[test]
    fn test_fungal_acne_only_when_requested() {
        let classifier = LocalClassifier::builtin().unwrap();
        let options = ClassifyOptions {
            check_fungal_acne: true,
        };
        let result = classifier.classify("Water, Lanolin", &options).unwrap();
        assert!(result.acrylates.is_safe);
        let fa = result.fungal_acne.unwrap();
        assert!(!fa.is_safe);
        assert_eq!(fa.found_ingredients[0].name, "Lanolin");
    }

    #[test]
    fn test_swapped_term_lists_rejected() {
        let acrylates = builtin::load_for(Concern::Acrylates).unwrap();
        let fungal_acne = builtin::load_for(Concern::FungalAcne).unwrap();
        assert!(matches!(
            LocalClassifier::from_term_lists(&fungal_acne, &acrylates),
            Err(AcrylisError::TermListInvalid(_))
        ));
    }

    #[test]
    fn test_custom_term_lists() {
        let acrylates = crate::terms::parse_term_list_str(
            r#"{ "name": "Mini", "concern": "acrylates", "version": "1",
                 "terms": [ { "term": "nail glue", "reason": "cyanoacrylate adhesive" } ] }"#,
        )
        .unwrap();
        let fungal_acne = builtin::load_for(Concern::FungalAcne).unwrap();
        let classifier = LocalClassifier::from_term_lists(&acrylates, &fungal_acne).unwrap();

        let result = classifier
            .classify("Nail Glue, Carbomer", &ClassifyOptions::default())
            .unwrap();
        // Without substring triggers only the listed term is caught.
        assert_eq!(result.acrylates.found_ingredients.len(), 1);
        assert_eq!(
            result.acrylates.found_ingredients[0].reason,
            "cyanoacrylate adhesive"
        );
    }
}
