use crate::model::Concern;
use serde::{Deserialize, Serialize};

/// A curated list of trigger ingredients for one concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermListDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub concern: Concern,
    pub version: String,
    pub terms: Vec<TermDef>,
    /// Names that look like triggers but are chemically unrelated. Exact match.
    #[serde(default)]
    pub false_positives: Vec<String>,
    /// Fragments that signal a trigger when no exact term matched. Checked in order.
    #[serde(default)]
    pub substring_triggers: Vec<String>,
}

/// A single trigger ingredient within a term list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDef {
    /// Canonical lowercase ingredient name.
    pub term: String,
    /// Short explanation shown next to a match.
    pub reason: String,
    /// Display grouping, e.g. "Polyquaterniums".
    #[serde(default)]
    pub group: Option<String>,
}
