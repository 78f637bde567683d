//! Unicode metadata lookups and invisible-character cleaning.
//!
//! General categories come from ICU property data, names from the Unicode
//! name tables. Both are compiled into the binary; no lookup touches the
//! filesystem.

use crate::config::Exclusion;
use crate::errors::CurationError;
use icu_properties::maps;
use icu_properties::GeneralCategory;
use serde::Serialize;

/// `U+XXXX` label: uppercase hex, at least four digits.
pub fn codepoint_label(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// One label per scalar value of `s`.
pub fn codepoints(s: &str) -> Vec<String> {
    s.chars().map(codepoint_label).collect()
}

/// Canonical Unicode character name.
///
/// # Errors
///
/// Returns `NoUnicodeName` for characters without a name (unassigned,
/// controls, private use).
pub fn char_name(c: char) -> Result<String, CurationError> {
    unicode_names2::name(c)
        .map(|name| name.to_string())
        .ok_or_else(|| CurationError::NoUnicodeName {
            codepoint: codepoint_label(c),
        })
}

/// Two-letter general category code (`Lu`, `Po`, `Cf`, ...).
pub fn category_code(c: char) -> &'static str {
    #[allow(unreachable_patterns)]
    match maps::general_category().get(c) {
        GeneralCategory::UppercaseLetter => "Lu",
        GeneralCategory::LowercaseLetter => "Ll",
        GeneralCategory::TitlecaseLetter => "Lt",
        GeneralCategory::ModifierLetter => "Lm",
        GeneralCategory::OtherLetter => "Lo",
        GeneralCategory::NonspacingMark => "Mn",
        GeneralCategory::SpacingMark => "Mc",
        GeneralCategory::EnclosingMark => "Me",
        GeneralCategory::DecimalNumber => "Nd",
        GeneralCategory::LetterNumber => "Nl",
        GeneralCategory::OtherNumber => "No",
        GeneralCategory::SpaceSeparator => "Zs",
        GeneralCategory::LineSeparator => "Zl",
        GeneralCategory::ParagraphSeparator => "Zp",
        GeneralCategory::Control => "Cc",
        GeneralCategory::Format => "Cf",
        GeneralCategory::PrivateUse => "Co",
        GeneralCategory::Surrogate => "Cs",
        GeneralCategory::DashPunctuation => "Pd",
        GeneralCategory::OpenPunctuation => "Ps",
        GeneralCategory::ClosePunctuation => "Pe",
        GeneralCategory::ConnectorPunctuation => "Pc",
        GeneralCategory::InitialPunctuation => "Pi",
        GeneralCategory::FinalPunctuation => "Pf",
        GeneralCategory::OtherPunctuation => "Po",
        GeneralCategory::MathSymbol => "Sm",
        GeneralCategory::CurrencySymbol => "Sc",
        GeneralCategory::ModifierSymbol => "Sk",
        GeneralCategory::OtherSymbol => "So",
        GeneralCategory::Unassigned => "Cn",
        _ => "Cn",
    }
}

/// Remove every character whose category is excluded, then trim
/// surrounding whitespace.
///
/// # Examples
///
/// ```
/// use clipdata_core::config::Exclusion;
/// use clipdata_core::unicode::clean_invisible;
///
/// let exclusion = Exclusion::default();
/// assert_eq!(clean_invisible("(>_<)\u{200b}", &exclusion), "(>_<)");
/// assert_eq!(clean_invisible("(-_-;)", &exclusion), "(-_-;)");
/// ```
pub fn clean_invisible(s: &str, exclusion: &Exclusion) -> String {
    let kept: String = s
        .chars()
        .filter(|c| !exclusion.contains(category_code(*c)))
        .collect();
    kept.trim().to_string()
}

/// Metadata record of a single-character symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolInfo {
    pub symbol: String,
    pub name: String,
    pub codepoint: String,
    pub category_code: String,
}

/// Look up the metadata of a one-scalar symbol.
///
/// # Errors
///
/// - `NotSingleChar` if `symbol` is empty or has more than one scalar
/// - `NoUnicodeName` if the character has no name
pub fn annotate_symbol(symbol: &str) -> Result<SymbolInfo, CurationError> {
    let mut chars = symbol.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(CurationError::NotSingleChar {
            symbol: symbol.to_string(),
        });
    };
    Ok(SymbolInfo {
        symbol: symbol.to_string(),
        name: char_name(c)?,
        codepoint: codepoint_label(c),
        category_code: category_code(c).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_label_padding() {
        assert_eq!(codepoint_label('a'), "U+0061");
        assert_eq!(codepoint_label('😀'), "U+1F600");
        assert_eq!(codepoints("👍🏽"), vec!["U+1F44D", "U+1F3FD"]);
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(category_code('\u{200b}'), "Cf");
        assert_eq!(category_code('\u{0007}'), "Cc");
        assert_eq!(category_code(';'), "Po");
        assert_eq!(category_code('€'), "Sc");
        assert_eq!(category_code('+'), "Sm");
        assert_eq!(category_code('\u{0301}'), "Mn");
        assert_eq!(category_code('7'), "Nd");
    }

    #[test]
    fn test_char_name() {
        assert_eq!(char_name('€').unwrap(), "EURO SIGN");
        assert!(matches!(
            char_name('\u{E000}'),
            Err(CurationError::NoUnicodeName { .. })
        ));
    }

    #[test]
    fn test_clean_keeps_marks_and_punctuation() {
        let exclusion = Exclusion::default();
        assert_eq!(clean_invisible("  (´・ω・`)\u{feff} ", &exclusion), "(´・ω・`)");
        assert_eq!(clean_invisible("e\u{0301}", &exclusion), "e\u{0301}");
    }

    #[test]
    fn test_annotate_symbol() {
        let info = annotate_symbol("§").unwrap();
        assert_eq!(info.name, "SECTION SIGN");
        assert_eq!(info.codepoint, "U+00A7");
        assert_eq!(info.category_code, "Po");

        assert!(matches!(
            annotate_symbol("ab"),
            Err(CurationError::NotSingleChar { .. })
        ));
    }
}
