use crate::error::AcrylisError;
use crate::model::Concern;
use crate::terms::parse_term_list_str;
use crate::terms::schema::TermListDef;

const ACRYLATES_JSON: &str = include_str!("../../../../terms/acrylates.json");
const FUNGAL_ACNE_JSON: &str = include_str!("../../../../terms/fungal-acne.json");

/// Available built-in term lists.
pub const PRESETS: &[&str] = &["acrylates", "fungal-acne"];

/// Load a built-in term list by name.
pub fn load_preset(name: &str) -> Result<TermListDef, AcrylisError> {
    match Concern::from_str_loose(name) {
        Some(concern) => load_for(concern),
        None => Err(AcrylisError::UnknownPreset(name.to_string())),
    }
}

/// Load the built-in term list for a concern.
pub fn load_for(concern: Concern) -> Result<TermListDef, AcrylisError> {
    let json = match concern {
        Concern::Acrylates => ACRYLATES_JSON,
        Concern::FungalAcne => FUNGAL_ACNE_JSON,
    };
    parse_term_list_str(json)
}
