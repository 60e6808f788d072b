use crate::error::AcrylisError;
use crate::model::{FoundIngredient, Ingredient, Status};
use crate::terms::TermIndex;
use regex::Regex;

/// Rosin derivatives share naming with acrylates but are a different chemistry.
const ROSIN_MARKERS: &[&str] = &["colophonium", "rosin", "colophane"];

const POLYQUATERNIUM_UNKNOWN: &str = "Unknown polyquaternium number. Chemistry is unclear and requires external verification to check for acrylate/methacrylate components.";
const RESIN_UV_CURABLE: &str = "Potentially a UV-curable resin containing acrylates. Requires external verification of specific chemistry.";
const RESIN_UNDISCLOSED: &str =
    "Generic/unspecified resin, chemistry not disclosed. Cannot rule out acrylates.";

/// Which step of the acrylates rule chain decided an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcrylateRule {
    FalsePositive,
    Rosin,
    ExactTerm,
    SubstringTrigger,
    Polyurethane,
    Polyquaternium,
    Resin,
}

/// Screens ingredients for acrylates and their common cross-reactors.
///
/// Each ingredient runs through an ordered chain and the first rule that
/// applies decides it. Exclusions sit ahead of the broad substring and
/// pattern rules, and exact terms win over substring triggers so the reason
/// is as specific as possible.
#[derive(Debug, Clone)]
pub struct AcrylatesAnalyzer {
    index: TermIndex,
    polyquaternium: Regex,
    resin: Regex,
    modifier: Regex,
    initiator: Regex,
}

impl AcrylatesAnalyzer {
    pub fn new(index: TermIndex) -> Result<Self, AcrylisError> {
        Ok(Self {
            index,
            polyquaternium: compile(r"^polyquaternium-(\d+)$")?,
            resin: compile(r"(?i)\bresin\b")?,
            modifier: compile(r"(?i)\b(epoxy|urethane|polyester|alkyd|silicone)\b")?,
            initiator: compile(r"(?i)\b(uv|led|photo|irgacure|benzophenone|tpo|bapo)\b")?,
        })
    }

    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    /// Screen every ingredient, in list order.
    pub fn analyze(&self, ingredients: &[Ingredient]) -> Vec<FoundIngredient> {
        ingredients
            .iter()
            .filter_map(|ingredient| {
                let (rule, finding) = self.screen(ingredient)?;
                tracing::debug!(
                    ingredient = %ingredient.raw,
                    rule = ?rule,
                    flagged = finding.is_some(),
                    "acrylates rule applied"
                );
                finding
            })
            .collect()
    }

    /// Run one ingredient through the rule chain.
    ///
    /// Returns `None` when no rule applies, otherwise the deciding rule and
    /// the finding it produced (exclusions produce none).
    pub fn screen(&self, ingredient: &Ingredient) -> Option<(AcrylateRule, Option<FoundIngredient>)> {
        let name = ingredient.name.as_str();
        let has_acryl = name.contains("acryl");
        let found = |reason: String, status: Status| FoundIngredient {
            name: ingredient.raw.clone(),
            reason,
            status,
        };

        if self.index.is_false_positive(name) {
            return Some((AcrylateRule::FalsePositive, None));
        }

        if !has_acryl && ROSIN_MARKERS.iter().any(|m| name.contains(m)) {
            return Some((AcrylateRule::Rosin, None));
        }

        if let Some(reason) = self.index.reason(name) {
            return Some((
                AcrylateRule::ExactTerm,
                Some(found(reason.to_string(), Status::Unsafe)),
            ));
        }

        if let Some(trigger) = self.index.first_trigger(name) {
            let reason = format!(
                "Includes the term “{trigger}”, which typically signals an acrylate-based ingredient."
            );
            return Some((
                AcrylateRule::SubstringTrigger,
                Some(found(reason, Status::Unsafe)),
            ));
        }

        // Plain polyurethanes are not acrylates; the acrylate-modified ones are listed terms.
        if name.starts_with("polyurethane-") && !has_acryl {
            return Some((AcrylateRule::Polyurethane, None));
        }

        if self.polyquaternium.is_match(name) {
            return Some((
                AcrylateRule::Polyquaternium,
                Some(found(POLYQUATERNIUM_UNKNOWN.to_string(), Status::Unknown)),
            ));
        }

        if self.resin.is_match(name) {
            let reason = if self.modifier.is_match(name) && self.initiator.is_match(name) {
                RESIN_UV_CURABLE
            } else {
                RESIN_UNDISCLOSED
            };
            return Some((
                AcrylateRule::Resin,
                Some(found(reason.to_string(), Status::Unknown)),
            ));
        }

        None
    }
}

fn compile(pattern: &str) -> Result<Regex, AcrylisError> {
    Regex::new(pattern).map_err(|e| {
        AcrylisError::Classification(format!("failed to compile pattern '{pattern}': {e}"))
    })
}
