//! URL-safe code generation from display names
//!
//! Company and industry codes are derived from their display names:
//! lowercase, non-alphanumeric characters stripped, word boundaries joined
//! with single hyphens. The mapping is deterministic and carries no
//! uniqueness guarantee by itself.

/// Utility for deriving URL-safe identifiers from display names
pub struct Slugifier;

impl Slugifier {
    /// Derive a code from a display name
    ///
    /// # Examples
    ///
    /// ```
    /// use biztime::core::slug::Slugifier;
    ///
    /// assert_eq!(Slugifier::slugify("Test Company"), "test-company");
    /// assert_eq!(Slugifier::slugify("AT&T Inc."), "att-inc");
    /// ```
    pub fn slugify(name: &str) -> String {
        let mut code = String::with_capacity(name.len());

        for ch in name.chars() {
            if ch.is_ascii_alphanumeric() {
                code.push(ch.to_ascii_lowercase());
            } else if ch.is_whitespace() || ch == '-' || ch == '_' {
                // Word boundary; runs collapse to a single hyphen
                if !code.is_empty() && !code.ends_with('-') {
                    code.push('-');
                }
            }
            // Any other character is stripped
        }

        code.trim_end_matches('-').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(Slugifier::slugify("Apple"), "apple");
        assert_eq!(Slugifier::slugify("IBM"), "ibm");
    }

    #[test]
    fn test_slugify_spaces_become_hyphens() {
        assert_eq!(Slugifier::slugify("Test Company"), "test-company");
        assert_eq!(Slugifier::slugify("Accounting Services"), "accounting-services");
    }

    #[test]
    fn test_slugify_strips_special_characters() {
        assert_eq!(Slugifier::slugify("AT&T Inc."), "att-inc");
        assert_eq!(Slugifier::slugify("O'Reilly"), "oreilly");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(Slugifier::slugify("Big   Corp"), "big-corp");
        assert_eq!(Slugifier::slugify("a - b"), "a-b");
        assert_eq!(Slugifier::slugify("snake_case name"), "snake-case-name");
    }

    #[test]
    fn test_slugify_trims_boundary_separators() {
        assert_eq!(Slugifier::slugify("  padded  "), "padded");
        assert_eq!(Slugifier::slugify("-leading-"), "leading");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(Slugifier::slugify("Studio 54"), "studio-54");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(Slugifier::slugify(""), "");
        assert_eq!(Slugifier::slugify("!!!"), "");
    }
}
