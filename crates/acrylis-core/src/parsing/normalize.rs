/// Normalize an ingredient name for exact dictionary lookup.
///
/// Steps:
/// 1. Remove each parenthetical group, e.g. "helianthus annuus (sunflower) seed oil"
/// 2. Collapse runs of whitespace to a single space
/// 3. Trim
///
/// An opening parenthesis without a matching close is left in place.
pub fn strip_parentheticals(name: &str) -> String {
    let mut stripped = String::with_capacity(name.len());
    let mut rest = name;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        stripped.push_str(&rest[..open]);
        stripped.push(' ');
        rest = &rest[open + close + 1..];
    }
    stripped.push_str(rest);

    collapse_whitespace(&stripped)
}

/// Collapse whitespace runs into single spaces and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_common_name() {
        assert_eq!(
            strip_parentheticals("helianthus annuus (sunflower) seed oil"),
            "helianthus annuus seed oil"
        );
    }

    #[test]
    fn test_strips_trailing_group() {
        assert_eq!(
            strip_parentheticals("cocos nucifera oil (coconut)"),
            "cocos nucifera oil"
        );
    }

    #[test]
    fn test_strips_multiple_groups() {
        assert_eq!(
            strip_parentheticals("rosa canina (rosehip)  fruit (cold pressed) oil"),
            "rosa canina fruit oil"
        );
    }

    #[test]
    fn test_unclosed_parenthesis_kept() {
        assert_eq!(strip_parentheticals("lanolin (anhydrous"), "lanolin (anhydrous");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(strip_parentheticals("  castor   oil "), "castor oil");
    }

    #[test]
    fn test_no_parentheses_passthrough() {
        assert_eq!(strip_parentheticals("lauric acid"), "lauric acid");
    }
}
