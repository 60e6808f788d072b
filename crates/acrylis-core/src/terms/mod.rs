pub mod builtin;
pub mod schema;

use crate::error::AcrylisError;
use crate::model::Concern;
use schema::TermListDef;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Load a term list from a JSON file.
pub fn load_term_list(path: &Path) -> Result<TermListDef, AcrylisError> {
    let content = std::fs::read_to_string(path).map_err(|e| AcrylisError::TermListLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_term_list(&content, path)
}

/// Parse a term list from a JSON string.
pub fn parse_term_list(json: &str, source: &Path) -> Result<TermListDef, AcrylisError> {
    let list: TermListDef = serde_json::from_str(json).map_err(|e| AcrylisError::TermListLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_term_list(&list)?;
    Ok(list)
}

/// Parse a term list from a JSON string (no file path context).
pub fn parse_term_list_str(json: &str) -> Result<TermListDef, AcrylisError> {
    let list: TermListDef = serde_json::from_str(json).map_err(AcrylisError::Json)?;
    validate_term_list(&list)?;
    Ok(list)
}

/// Validate that a term list is well-formed.
pub fn validate_term_list(list: &TermListDef) -> Result<(), AcrylisError> {
    if list.terms.is_empty() {
        return Err(AcrylisError::TermListInvalid("terms must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for def in &list.terms {
        check_key(&def.term, "term")?;
        if def.reason.trim().is_empty() {
            return Err(AcrylisError::TermListInvalid(format!(
                "term '{}' has no reason",
                def.term
            )));
        }
        if !seen.insert(def.term.as_str()) {
            return Err(AcrylisError::TermListInvalid(format!(
                "term '{}' is listed more than once",
                def.term
            )));
        }
    }

    for fp in &list.false_positives {
        check_key(fp, "false positive")?;
    }
    for trigger in &list.substring_triggers {
        check_key(trigger, "substring trigger")?;
    }

    // Fungal acne matching is exact-only.
    if list.concern == Concern::FungalAcne
        && (!list.false_positives.is_empty() || !list.substring_triggers.is_empty())
    {
        return Err(AcrylisError::TermListInvalid(
            "fungal acne lists match exactly and cannot carry false_positives or substring_triggers"
                .into(),
        ));
    }

    Ok(())
}

fn check_key(key: &str, kind: &str) -> Result<(), AcrylisError> {
    if key.trim().is_empty() {
        return Err(AcrylisError::TermListInvalid(format!(
            "{kind} must not be empty"
        )));
    }
    if key != key.trim() {
        return Err(AcrylisError::TermListInvalid(format!(
            "{kind} '{key}' has leading or trailing whitespace"
        )));
    }
    if key != key.to_lowercase() {
        return Err(AcrylisError::TermListInvalid(format!(
            "{kind} '{key}' must be lowercase"
        )));
    }
    Ok(())
}

/// Report entries of a valid list that can never take effect.
///
/// Returns human-readable warnings, not errors.
pub fn lint_term_list(list: &TermListDef) -> Vec<String> {
    let mut warnings = Vec::new();

    let false_positives: HashSet<&str> = list.false_positives.iter().map(String::as_str).collect();
    for def in &list.terms {
        if false_positives.contains(def.term.as_str()) {
            warnings.push(format!(
                "term '{}' is also a false positive and will never match",
                def.term
            ));
        }
    }

    for (i, trigger) in list.substring_triggers.iter().enumerate() {
        if let Some(earlier) = list.substring_triggers[..i]
            .iter()
            .find(|t| trigger.contains(t.as_str()))
        {
            warnings.push(format!(
                "substring trigger '{}' is shadowed by earlier trigger '{}'",
                trigger, earlier
            ));
        }
    }

    warnings
}

/// Read-only lookup tables compiled from a term list.
#[derive(Debug, Clone)]
pub struct TermIndex {
    concern: Concern,
    name: String,
    reasons: HashMap<String, String>,
    false_positives: HashSet<String>,
    substring_triggers: Vec<String>,
}

impl TermIndex {
    pub fn build(list: &TermListDef) -> Self {
        Self {
            concern: list.concern,
            name: list.name.clone(),
            reasons: list
                .terms
                .iter()
                .map(|d| (d.term.clone(), d.reason.clone()))
                .collect(),
            false_positives: list.false_positives.iter().cloned().collect(),
            substring_triggers: list.substring_triggers.clone(),
        }
    }

    pub fn concern(&self) -> Concern {
        self.concern
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explanation for an exact term hit.
    pub fn reason(&self, name: &str) -> Option<&str> {
        self.reasons.get(name).map(String::as_str)
    }

    pub fn is_false_positive(&self, name: &str) -> bool {
        self.false_positives.contains(name)
    }

    /// First substring trigger contained in `name`, in list order.
    pub fn first_trigger(&self, name: &str) -> Option<&str> {
        self.substring_triggers
            .iter()
            .map(String::as_str)
            .find(|t| name.contains(t))
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_term_list() {
        let json = r#"{
            "name": "Test",
            "concern": "acrylates",
            "version": "1.0",
            "terms": [
                { "term": "carbomer", "reason": "crosslinked acrylic acid" }
            ],
            "substring_triggers": ["acryl"]
        }"#;
        let list = parse_term_list_str(json).unwrap();
        assert_eq!(list.name, "Test");
        assert_eq!(list.terms.len(), 1);
        assert!(list.false_positives.is_empty());
        assert_eq!(list.substring_triggers, vec!["acryl"]);
    }

    #[test]
    fn test_empty_terms_rejected() {
        let json = r#"{ "name": "Bad", "concern": "acrylates", "version": "1.0", "terms": [] }"#;
        assert!(parse_term_list_str(json).is_err());
    }

    #[test]
    fn test_uppercase_term_rejected() {
        let json = r#"{
            "name": "Bad", "concern": "acrylates", "version": "1.0",
            "terms": [ { "term": "Carbomer", "reason": "x" } ]
        }"#;
        assert!(matches!(
            parse_term_list_str(json),
            Err(AcrylisError::TermListInvalid(_))
        ));
    }

    #[test]
    fn test_duplicate_term_rejected() {
        let json = r#"{
            "name": "Bad", "concern": "fungal_acne", "version": "1.0",
            "terms": [
                { "term": "lanolin", "reason": "x" },
                { "term": "lanolin", "reason": "y" }
            ]
        }"#;
        assert!(parse_term_list_str(json).is_err());
    }

    #[test]
    fn test_missing_reason_rejected() {
        let json = r#"{
            "name": "Bad", "concern": "fungal_acne", "version": "1.0",
            "terms": [ { "term": "lanolin", "reason": "  " } ]
        }"#;
        assert!(parse_term_list_str(json).is_err());
    }

    #[test]
    fn test_fungal_acne_triggers_rejected() {
        let json = r#"{
            "name": "Bad", "concern": "fungal_acne", "version": "1.0",
            "terms": [ { "term": "lanolin", "reason": "x" } ],
            "substring_triggers": ["oil"]
        }"#;
        assert!(parse_term_list_str(json).is_err());
    }

    #[test]
    fn test_load_term_list_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "name": "File", "concern": "fungal_acne", "version": "1",
                 "terms": [ {{ "term": "lanolin", "reason": "wax" }} ] }}"#
        )
        .unwrap();
        let list = load_term_list(file.path()).unwrap();
        assert_eq!(list.name, "File");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_term_list(Path::new("/nonexistent/terms.json")).unwrap_err();
        assert!(matches!(err, AcrylisError::TermListLoad { .. }));
        assert!(err.to_string().contains("/nonexistent/terms.json"));
    }

    #[test]
    fn test_lint_reports_shadowing() {
        let json = r#"{
            "name": "Lint", "concern": "acrylates", "version": "1.0",
            "terms": [ { "term": "styrene copolymer", "reason": "x" } ],
            "false_positives": ["styrene copolymer"],
            "substring_triggers": ["acryl", "methacrylate"]
        }"#;
        let list = parse_term_list_str(json).unwrap();
        let warnings = lint_term_list(&list);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("styrene copolymer"));
        assert!(warnings[1].contains("methacrylate"));
    }

    #[test]
    fn test_index_lookups() {
        let list = builtin::load_for(Concern::Acrylates).unwrap();
        let index = TermIndex::build(&list);
        assert_eq!(index.concern(), Concern::Acrylates);
        assert_eq!(index.len(), list.terms.len());
        assert!(index.reason("carbomer").is_some());
        assert!(index.reason("water").is_none());
        assert!(index.is_false_positive("styrene/butadiene copolymer"));
        assert_eq!(index.first_trigger("cetyl methacrylate"), Some("acryl"));
        assert_eq!(index.first_trigger("octocrylene"), Some("cryl"));
        assert_eq!(index.first_trigger("glycerin"), None);
    }
}
