use crate::model::{AnalysisResult, Ingredient};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Ingredients in the first five positions carry the highest concentration.
pub const HIGH_IMPACT_POSITIONS: usize = 5;

const HIGH_IMPACT_SCORE: u32 = 3;
const LOW_IMPACT_SCORE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    B,
    C,
    D,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Grade::APlus => "Excellent!",
            Grade::B => "Good",
            Grade::C => "Use with Caution",
            Grade::D => "High Risk",
        }
    }

    /// Grade for a risk score, given at least one problematic ingredient.
    pub fn from_score(risk_score: u32) -> Grade {
        match risk_score {
            0..=3 => Grade::B,
            4..=6 => Grade::C,
            _ => Grade::D,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Overall risk grade of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub grade: Grade,
    pub risk_score: u32,
    /// Distinct problematic ingredients across all concerns.
    pub problematic_count: usize,
}

/// Grade a classified list by where its problematic ingredients sit.
///
/// Every distinct finding (across both concerns, case-insensitive) scores 3
/// when it first appears in the top five positions and 1 otherwise. A finding
/// that cannot be located in the list scores 1.
pub fn assess(result: &AnalysisResult, ingredients: &[Ingredient]) -> Assessment {
    let mut seen = HashSet::new();
    let problematic: Vec<String> = result
        .analyses()
        .into_iter()
        .flat_map(|(_, analysis)| analysis.found_ingredients.iter())
        .map(|f| f.name.to_lowercase())
        .filter(|name| seen.insert(name.clone()))
        .collect();

    if problematic.is_empty() {
        return Assessment {
            grade: Grade::APlus,
            risk_score: 0,
            problematic_count: 0,
        };
    }

    let risk_score = problematic
        .iter()
        .map(|name| match ingredients.iter().find(|i| &i.name == name) {
            Some(i) if i.position < HIGH_IMPACT_POSITIONS => HIGH_IMPACT_SCORE,
            _ => LOW_IMPACT_SCORE,
        })
        .sum();

    Assessment {
        grade: Grade::from_score(risk_score),
        risk_score,
        problematic_count: problematic.len(),
    }
}
