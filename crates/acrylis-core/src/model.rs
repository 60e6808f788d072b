use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a pasted ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Trimmed text as the user wrote it.
    pub raw: String,
    /// Lowercased form used for matching.
    pub name: String,
    /// Zero-based position in the list (earlier means more concentrated).
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    Acrylates,
    FungalAcne,
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concern::Acrylates => write!(f, "Acrylates"),
            Concern::FungalAcne => write!(f, "Fungal acne"),
        }
    }
}

impl Concern {
    pub fn from_str_loose(s: &str) -> Option<Concern> {
        let lower = s.trim().to_lowercase().replace(['-', ' '], "_");
        match lower.as_str() {
            "acrylates" | "acrylate" | "acryl" => Some(Concern::Acrylates),
            "fungal_acne" | "fungalacne" | "fa" | "malassezia" => Some(Concern::FungalAcne),
            _ => None,
        }
    }

    /// Name of the built-in term list for this concern.
    pub fn preset_name(&self) -> &'static str {
        match self {
            Concern::Acrylates => "acrylates",
            Concern::FungalAcne => "fungal-acne",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Known trigger.
    Unsafe,
    /// Ambiguous match that needs an outside lookup to settle.
    Unknown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unsafe => write!(f, "Unsafe"),
            Status::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundIngredient {
    /// Ingredient as it appeared in the input.
    pub name: String,
    pub reason: String,
    pub status: Status,
}

/// Verdict for one concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualAnalysis {
    pub is_safe: bool,
    pub found_ingredients: Vec<FoundIngredient>,
    pub explanation: String,
}

/// Aggregate verdict. `fungal_acne` is present only when it was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub acrylates: IndividualAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fungal_acne: Option<IndividualAnalysis>,
}

impl AnalysisResult {
    /// Analyses that were run, in display order.
    pub fn analyses(&self) -> Vec<(Concern, &IndividualAnalysis)> {
        let mut out = vec![(Concern::Acrylates, &self.acrylates)];
        if let Some(ref fa) = self.fungal_acne {
            out.push((Concern::FungalAcne, fa));
        }
        out
    }

    pub fn is_safe(&self) -> bool {
        self.analyses().iter().all(|(_, a)| a.is_safe)
    }
}
