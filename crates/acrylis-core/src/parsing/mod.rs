pub mod normalize;

use crate::model::Ingredient;

/// Characters that separate entries in a pasted ingredient list.
const DELIMITERS: &[char] = &[',', '.', ';', '\n'];

/// Split a pasted ingredient list into ordered ingredients.
///
/// Entries are separated by commas, periods, semicolons or newlines, in any
/// mix. Each entry is trimmed and lowercased for matching; the trimmed
/// original is kept for display. Empty entries are dropped, duplicates are
/// kept. Order is preserved since list position approximates concentration.
pub fn tokenize(text: &str) -> Vec<Ingredient> {
    text.split(DELIMITERS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(position, raw)| Ingredient {
            raw: raw.to_string(),
            name: raw.to_lowercase(),
            position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|i| i.name).collect()
    }

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            names("Water, Glycerin, Cetyl Acrylate"),
            vec!["water", "glycerin", "cetyl acrylate"]
        );
    }

    #[test]
    fn test_mixed_delimiters() {
        assert_eq!(
            names("Aqua; Glycerin. Carbomer\nLanolin,Tocopherol"),
            vec!["aqua", "glycerin", "carbomer", "lanolin", "tocopherol"]
        );
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(names("Aqua\r\nGlycerin\r\n"), vec!["aqua", "glycerin"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n  ,, ; . ").is_empty());
    }

    #[test]
    fn test_keeps_original_casing_and_positions() {
        let tokens = tokenize("  Water ,  Cetyl Acrylate  ");
        assert_eq!(tokens[0].raw, "Water");
        assert_eq!(tokens[1].raw, "Cetyl Acrylate");
        assert_eq!(tokens[1].name, "cetyl acrylate");
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_duplicates_kept() {
        assert_eq!(names("Water, water, WATER").len(), 3);
    }

    #[test]
    fn test_position_skips_empty_entries() {
        let tokens = tokenize("Water,, ,Carbomer");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].position, 1);
    }
}
