//! Code catalog for document metadata
//!
//! Read-only vocabularies (class, type, facility and practice-setting codes)
//! and the matrix of type codes allowed per class code. The tables are
//! `'static`; a per-vocabulary index keyed by code is built on first use and
//! never changes afterwards, so lookups are safe from any number of tasks.
//!
//! # Examples
//!
//! ```
//! use epd_gateway::catalog::{self, Language};
//!
//! assert_eq!(catalog::type_code_display("419891008", Language::De), "Nicht näher bezeichnetes Dokument");
//! assert_eq!(catalog::class_code_display("0", Language::En), "?");
//! assert!(catalog::is_valid_class_type_combination("419891008", "419891008"));
//! ```

mod tables;

use crate::fhir::datatypes::Coding;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Code system of every catalog entry
pub const SNOMED_CT: &str = "http://snomed.info/sct";

/// Code of the "unspecified document" class and type
pub const UNSPECIFIED_DOCUMENT: &str = "419891008";

/// Display returned for codes not present in a vocabulary
const UNKNOWN_DISPLAY: &str = "?";

/// Display languages of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Fr,
    It,
    Rm,
}

impl Language {
    /// Two-letter language code
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Rm => "rm",
        }
    }

    fn index(self) -> usize {
        match self {
            Language::En => 0,
            Language::De => 1,
            Language::Fr => 2,
            Language::It => 3,
            Language::Rm => 4,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "fr" => Ok(Language::Fr),
            "it" => Ok(Language::It),
            "rm" => Ok(Language::Rm),
            _ => Err(format!(
                "Unsupported language '{s}'. Must be one of: en, de, fr, it, rm"
            )),
        }
    }
}

/// All languages the catalog has displays for
pub fn supported_languages() -> &'static [Language] {
    &[
        Language::En,
        Language::De,
        Language::Fr,
        Language::It,
        Language::Rm,
    ]
}

/// One code of a vocabulary with its default and localized displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    code: &'static str,
    display: &'static str,
    displays: [&'static str; 5],
}

impl CodeEntry {
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Default (English) display of the SNOMED CT concept
    pub fn display(&self) -> &'static str {
        self.display
    }

    pub fn display_in(&self, language: Language) -> &'static str {
        self.displays[language.index()]
    }

    /// Wire coding with the default display
    pub fn coding(&self) -> Coding {
        Coding::new(SNOMED_CT, self.code, self.display)
    }
}

/// The catalog's vocabularies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    Class,
    Type,
    Facility,
    PracticeSetting,
}

impl Vocabulary {
    /// Entries in catalog order
    pub fn entries(self) -> &'static [CodeEntry] {
        match self {
            Vocabulary::Class => tables::CLASS_CODES,
            Vocabulary::Type => tables::TYPE_CODES,
            Vocabulary::Facility => tables::FACILITY_CODES,
            Vocabulary::PracticeSetting => tables::PRACTICE_SETTING_CODES,
        }
    }

    /// Looks up a code in this vocabulary
    pub fn lookup(self, code: &str) -> Option<&'static CodeEntry> {
        index().get(&(self, code)).copied()
    }
}

type CatalogIndex = HashMap<(Vocabulary, &'static str), &'static CodeEntry>;

fn index() -> &'static CatalogIndex {
    static INDEX: OnceLock<CatalogIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::new();
        for vocabulary in [
            Vocabulary::Class,
            Vocabulary::Type,
            Vocabulary::Facility,
            Vocabulary::PracticeSetting,
        ] {
            for entry in vocabulary.entries() {
                map.insert((vocabulary, entry.code), entry);
            }
        }
        map
    })
}

pub fn class_code(code: &str) -> Option<&'static CodeEntry> {
    Vocabulary::Class.lookup(code)
}

pub fn type_code(code: &str) -> Option<&'static CodeEntry> {
    Vocabulary::Type.lookup(code)
}

pub fn facility_code(code: &str) -> Option<&'static CodeEntry> {
    Vocabulary::Facility.lookup(code)
}

pub fn practice_setting_code(code: &str) -> Option<&'static CodeEntry> {
    Vocabulary::PracticeSetting.lookup(code)
}

fn display_or_unknown(entry: Option<&'static CodeEntry>, language: Language) -> &'static str {
    entry.map_or(UNKNOWN_DISPLAY, |e| e.display_in(language))
}

/// Localized display of a class code, `"?"` if unknown
pub fn class_code_display(code: &str, language: Language) -> &'static str {
    display_or_unknown(class_code(code), language)
}

/// Localized display of a type code, `"?"` if unknown
pub fn type_code_display(code: &str, language: Language) -> &'static str {
    display_or_unknown(type_code(code), language)
}

/// Localized display of a facility code, `"?"` if unknown
pub fn facility_code_display(code: &str, language: Language) -> &'static str {
    display_or_unknown(facility_code(code), language)
}

/// Localized display of a practice-setting code, `"?"` if unknown
pub fn practice_setting_display(code: &str, language: Language) -> &'static str {
    display_or_unknown(practice_setting_code(code), language)
}

/// Allowed type codes of a class code, or `None` if the class code has no
/// row in the combination matrix
fn allowed_type_codes(class_code: &str) -> Option<&'static [&'static str]> {
    tables::CLASS_TYPE_COMBINATIONS
        .iter()
        .find(|(class, _)| *class == class_code)
        .map(|(_, types)| *types)
}

/// Whether the class code has a row in the combination matrix
pub fn has_class_type_combination(class_code: &str) -> bool {
    allowed_type_codes(class_code).is_some()
}

/// Type codes allowed for a class code, in type catalog order
///
/// Returns an empty list for class codes outside the matrix.
pub fn find_class_type_combination(class_code: &str) -> Vec<&'static CodeEntry> {
    let Some(allowed) = allowed_type_codes(class_code) else {
        return Vec::new();
    };
    tables::TYPE_CODES
        .iter()
        .filter(|entry| allowed.contains(&entry.code))
        .collect()
}

/// Whether `type_code` is allowed for `class_code`
pub fn is_valid_class_type_combination(class_code: &str, type_code: &str) -> bool {
    allowed_type_codes(class_code).is_some_and(|allowed| allowed.contains(&type_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(Vocabulary::Class.entries().len(), 17);
        assert_eq!(Vocabulary::Type.entries().len(), 25);
        assert_eq!(Vocabulary::Facility.entries().len(), 15);
        assert_eq!(Vocabulary::PracticeSetting.entries().len(), 61);
    }

    #[test]
    fn test_codes_unique_per_vocabulary() {
        for vocabulary in [
            Vocabulary::Class,
            Vocabulary::Type,
            Vocabulary::Facility,
            Vocabulary::PracticeSetting,
        ] {
            let mut codes: Vec<_> = vocabulary.entries().iter().map(|e| e.code).collect();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), vocabulary.entries().len(), "{vocabulary:?}");
        }
    }

    #[test]
    fn test_every_matrix_code_is_in_catalog() {
        for (class, types) in tables::CLASS_TYPE_COMBINATIONS {
            assert!(class_code(class).is_some(), "class {class}");
            for t in *types {
                assert!(type_code(t).is_some(), "type {t}");
            }
        }
    }

    #[test_case("419891008", "419891008", true ; "unspecified pair")]
    #[test_case("419891008", "371529009", false ; "unspecified class needs unspecified type")]
    #[test_case("371531000", "371529009", true ; "encounter report")]
    #[test_case("405624007", "772786005", true ; "administrative document")]
    #[test_case("405624007", "371529009", false ; "type from another class")]
    #[test_case("999", "419891008", false ; "unknown class")]
    fn test_is_valid_class_type_combination(class: &str, typ: &str, expected: bool) {
        assert_eq!(is_valid_class_type_combination(class, typ), expected);
    }

    #[test]
    fn test_find_class_type_combination_in_type_catalog_order() {
        let found: Vec<_> = find_class_type_combination("371525003")
            .iter()
            .map(|e| e.code())
            .collect();
        let catalog_order: Vec<_> = Vocabulary::Type
            .entries()
            .iter()
            .map(|e| e.code())
            .filter(|c| found.contains(c))
            .collect();
        assert_eq!(found.len(), 6);
        assert_eq!(found, catalog_order);
    }

    #[test]
    fn test_specific_classes_offer_more_than_unspecified() {
        for (class, types) in tables::CLASS_TYPE_COMBINATIONS {
            let found = find_class_type_combination(class);
            assert_eq!(found.len(), types.len());
            if types.len() > 1 {
                assert!(found.iter().any(|e| e.code() != UNSPECIFIED_DOCUMENT));
            }
        }
        let unspecified = find_class_type_combination(UNSPECIFIED_DOCUMENT);
        assert_eq!(unspecified.len(), 1);
        assert_eq!(unspecified[0].code(), UNSPECIFIED_DOCUMENT);
    }

    #[test]
    fn test_find_class_type_combination_unknown_class() {
        assert!(find_class_type_combination("not-a-code").is_empty());
        assert!(!has_class_type_combination("not-a-code"));
    }

    #[test_case(Language::En, "Report of clinical encounter")]
    #[test_case(Language::De, "Bericht aufgrund einer Konsultation")]
    #[test_case(Language::Fr, "Rapport suite à une consultation")]
    fn test_class_code_display(language: Language, expected: &str) {
        assert_eq!(class_code_display("371531000", language), expected);
    }

    #[test]
    fn test_unknown_code_displays_question_mark() {
        assert_eq!(type_code_display("1", Language::It), "?");
        assert_eq!(facility_code_display("1", Language::Rm), "?");
        assert_eq!(practice_setting_display("1", Language::En), "?");
    }

    #[test]
    fn test_vocabularies_do_not_share_lookups() {
        assert!(class_code("394802001").is_none());
        assert!(practice_setting_code("394802001").is_some());
    }

    #[test]
    fn test_coding_uses_default_display() {
        let coding = class_code("721927009").unwrap().coding();
        assert_eq!(coding.system.as_deref(), Some(SNOMED_CT));
        assert_eq!(coding.code.as_deref(), Some("721927009"));
        assert_eq!(coding.display.as_deref(), Some("Referral note"));
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("DE".parse::<Language>().unwrap(), Language::De);
        assert!("es".parse::<Language>().is_err());
        assert_eq!(supported_languages().len(), 5);
        assert_eq!(Language::Rm.to_string(), "rm");
    }
}
