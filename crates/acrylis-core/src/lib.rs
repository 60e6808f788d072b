pub mod analyze;
pub mod classifier;
pub mod error;
pub mod grade;
pub mod model;
pub mod parsing;
pub mod terms;

pub use classifier::{ClassifyOptions, IngredientClassifier, LocalClassifier};

use error::AcrylisError;
use grade::Assessment;
use model::AnalysisResult;
use std::sync::LazyLock;

/// Classifier over the embedded term lists, built on first use.
static SHARED: LazyLock<Result<LocalClassifier, String>> =
    LazyLock::new(|| LocalClassifier::builtin().map_err(|e| e.to_string()));

/// Main API entry point: screen a pasted ingredient list.
///
/// Always screens for acrylates; screens for fungal acne triggers only when
/// `check_fungal_acne` is set. Empty input is a valid, safe list. The only
/// failure is the built-in term lists failing to load, reported as
/// `AcrylisError::Classification`.
pub fn classify(text: &str, check_fungal_acne: bool) -> Result<AnalysisResult, AcrylisError> {
    shared()?.classify(text, &ClassifyOptions { check_fungal_acne })
}

/// Screen a list and grade it in one pass.
pub fn classify_and_assess(
    text: &str,
    check_fungal_acne: bool,
) -> Result<(AnalysisResult, Assessment), AcrylisError> {
    let ingredients = parsing::tokenize(text);
    let result =
        shared()?.classify_ingredients(&ingredients, &ClassifyOptions { check_fungal_acne });
    let assessment = grade::assess(&result, &ingredients);
    Ok((result, assessment))
}

/// The shared built-in classifier.
pub fn shared() -> Result<&'static LocalClassifier, AcrylisError> {
    SHARED
        .as_ref()
        .map_err(|reason| AcrylisError::Classification(reason.clone()))
}
