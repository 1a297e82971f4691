//! Word splitting and case convention conversion.
//!
//! [`convert`] is the general tool: it splits a string into words and rejoins them
//! with any separator and per-word transform. The shorthand functions and [`Case`]
//! fix those two parameters for the common conventions.

pub mod classify;
pub mod tokenizer;
pub mod transform;
pub mod untitle;

pub use tokenizer::{convert, words, Words};
pub use transform::Transform;
pub use untitle::untitle;

use crate::error::CaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shorthand for `convert(s, "_", lower)`.
pub fn snake_case(s: &str) -> String {
    convert(s, "_", transform::lower)
}

/// Shorthand for `convert(s, "_", upper)`.
pub fn upper_snake_case(s: &str) -> String {
    convert(s, "_", transform::upper)
}

/// Shorthand for `convert(s, "-", lower)`.
pub fn kebab_case(s: &str) -> String {
    convert(s, "-", transform::lower)
}

/// Shorthand for `convert(s, "-", upper)`.
pub fn upper_kebab_case(s: &str) -> String {
    convert(s, "-", transform::upper)
}

/// Title-cases every word, joins them without a separator, then lowercases the
/// first character of the result.
///
/// The un-titling pass runs over the joined string, so only the first word is
/// affected: inside the result there are no separators left to start a new run.
pub fn camel_case(s: &str) -> String {
    untitle(&upper_camel_case(s))
}

/// Shorthand for `convert(s, "", title)`.
pub fn upper_camel_case(s: &str) -> String {
    convert(s, "", transform::title)
}

/// The supported case conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Case {
    Snake,
    UpperSnake,
    Kebab,
    UpperKebab,
    UpperCamel,
    Camel,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Snake,
        Case::UpperSnake,
        Case::Kebab,
        Case::UpperKebab,
        Case::UpperCamel,
        Case::Camel,
    ];

    /// Canonical name, itself written in the convention it names.
    pub fn name(&self) -> &'static str {
        match self {
            Case::Snake => "snake_case",
            Case::UpperSnake => "UPPER_SNAKE_CASE",
            Case::Kebab => "kebab-case",
            Case::UpperKebab => "UPPER-KEBAB-CASE",
            Case::UpperCamel => "UpperCamelCase",
            Case::Camel => "camelCase",
        }
    }

    pub fn separator(&self) -> &'static str {
        match self {
            Case::Snake | Case::UpperSnake => "_",
            Case::Kebab | Case::UpperKebab => "-",
            Case::UpperCamel | Case::Camel => "",
        }
    }

    /// The per-word transform. `Camel` additionally un-titles the joined result.
    pub fn transform(&self) -> Transform {
        match self {
            Case::Snake | Case::Kebab => Transform::Lower,
            Case::UpperSnake | Case::UpperKebab => Transform::Upper,
            Case::UpperCamel | Case::Camel => Transform::Title,
        }
    }

    pub fn apply(&self, s: &str) -> String {
        match self {
            Case::Snake => snake_case(s),
            Case::UpperSnake => upper_snake_case(s),
            Case::Kebab => kebab_case(s),
            Case::UpperKebab => upper_kebab_case(s),
            Case::UpperCamel => upper_camel_case(s),
            Case::Camel => camel_case(s),
        }
    }
}

impl FromStr for Case {
    type Err = CaseError;

    /// Accepts the canonical names in any convention ("kebab-case", "KebabCase",
    /// "KEBAB_CASE" all work), with or without the `case` suffix, plus a few
    /// common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match snake_case(s).as_str() {
            "snake" | "snake_case" => Ok(Case::Snake),
            "upper_snake" | "upper_snake_case" | "screaming_snake" | "screaming_snake_case"
            | "constant" | "constant_case" => Ok(Case::UpperSnake),
            "kebab" | "kebab_case" => Ok(Case::Kebab),
            "upper_kebab" | "upper_kebab_case" | "screaming_kebab" | "screaming_kebab_case"
            | "cobol" | "cobol_case" => Ok(Case::UpperKebab),
            "upper_camel" | "upper_camel_case" | "pascal" | "pascal_case" => Ok(Case::UpperCamel),
            "camel" | "camel_case" | "lower_camel" | "lower_camel_case" => Ok(Case::Camel),
            _ => Err(CaseError::UnknownCase(s.to_string())),
        }
    }
}

impl TryFrom<String> for Case {
    type Error = CaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Case> for String {
    fn from(case: Case) -> Self {
        case.name().to_string()
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUTS: [&str; 7] = [
        "camelCase",
        "CAMELCaseWithACRONYMS",
        "kebab-case",
        "UPPER-KEBAB-CASE",
        "snake_case",
        "UPPER_SNAKE_CASE",
        "WITH-mixedCAPS_and   MixedSeparators, \t also!",
    ];

    fn check(f: fn(&str) -> String, expected: [&str; 7]) {
        for (input, want) in INPUTS.iter().zip(expected) {
            assert_eq!(f(input), want, "input: {:?}", input);
        }
    }

    #[test]
    fn test_snake_case() {
        check(
            snake_case,
            [
                "camel_case",
                "camel_case_with_acronyms",
                "kebab_case",
                "upper_kebab_case",
                "snake_case",
                "upper_snake_case",
                "with_mixed_caps_and_mixed_separators_also",
            ],
        );
    }

    #[test]
    fn test_upper_snake_case() {
        check(
            upper_snake_case,
            [
                "CAMEL_CASE",
                "CAMEL_CASE_WITH_ACRONYMS",
                "KEBAB_CASE",
                "UPPER_KEBAB_CASE",
                "SNAKE_CASE",
                "UPPER_SNAKE_CASE",
                "WITH_MIXED_CAPS_AND_MIXED_SEPARATORS_ALSO",
            ],
        );
    }

    #[test]
    fn test_kebab_case() {
        check(
            kebab_case,
            [
                "camel-case",
                "camel-case-with-acronyms",
                "kebab-case",
                "upper-kebab-case",
                "snake-case",
                "upper-snake-case",
                "with-mixed-caps-and-mixed-separators-also",
            ],
        );
    }

    #[test]
    fn test_upper_kebab_case() {
        check(
            upper_kebab_case,
            [
                "CAMEL-CASE",
                "CAMEL-CASE-WITH-ACRONYMS",
                "KEBAB-CASE",
                "UPPER-KEBAB-CASE",
                "SNAKE-CASE",
                "UPPER-SNAKE-CASE",
                "WITH-MIXED-CAPS-AND-MIXED-SEPARATORS-ALSO",
            ],
        );
    }

    #[test]
    fn test_camel_case() {
        check(
            camel_case,
            [
                "camelCase",
                "camelCaseWithAcronyms",
                "kebabCase",
                "upperKebabCase",
                "snakeCase",
                "upperSnakeCase",
                "withMixedCapsAndMixedSeparatorsAlso",
            ],
        );
        assert_eq!(camel_case("aa4N7"), "aa4N7");
    }

    #[test]
    fn test_upper_camel_case() {
        check(
            upper_camel_case,
            [
                "CamelCase",
                "CamelCaseWithAcronyms",
                "KebabCase",
                "UpperKebabCase",
                "SnakeCase",
                "UpperSnakeCase",
                "WithMixedCapsAndMixedSeparatorsAlso",
            ],
        );
        assert_eq!(
            upper_camel_case("Any non-alphanumeric symbols: !@#$ are skipped%^&*()"),
            "AnyNonAlphanumericSymbolsAreSkipped"
        );
    }

    #[test]
    fn test_camel_case_only_lowers_first_word() {
        assert_eq!(camel_case("XMLHttpRequest"), "xmlHttpRequest");
        assert_eq!(camel_case("  leading space"), "leadingSpace");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_upper_snake_of_snake_is_idempotent() {
        for input in ["camelCase", "HTTPServer_v2", "a_b_c", "ABC_def9Ghi", "x1Y2z3"] {
            assert_eq!(
                upper_snake_case(&snake_case(input)),
                upper_snake_case(input),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_unicode_cased_and_caseless() {
        assert_eq!(upper_camel_case("ПОДДЕРЖКА___юникода"), "ПоддержкаЮникода");
        assert_eq!(snake_case("ЗдравствуйМир"), "здравствуй_мир");
        assert_eq!(upper_camel_case("日本語テキスト"), "日本語テキスト");
    }

    #[test]
    fn test_case_apply_matches_shorthands() {
        for input in INPUTS {
            assert_eq!(Case::Snake.apply(input), snake_case(input));
            assert_eq!(Case::UpperSnake.apply(input), upper_snake_case(input));
            assert_eq!(Case::Kebab.apply(input), kebab_case(input));
            assert_eq!(Case::UpperKebab.apply(input), upper_kebab_case(input));
            assert_eq!(Case::UpperCamel.apply(input), upper_camel_case(input));
            assert_eq!(Case::Camel.apply(input), camel_case(input));
        }
    }

    #[test]
    fn test_case_parameters_match_apply() {
        let input = "someMixed_INPUT value";
        for case in Case::ALL {
            let generic = convert(input, case.separator(), |w| case.transform().apply(w));
            let expected = if case == Case::Camel {
                untitle(&generic)
            } else {
                generic
            };
            assert_eq!(case.apply(input), expected, "case: {}", case);
        }
    }

    #[test]
    fn test_case_names_are_self_describing() {
        for case in Case::ALL {
            assert_eq!(case.apply(case.name()), case.name());
            assert_eq!(case.name().parse::<Case>().unwrap(), case);
        }
    }

    #[test]
    fn test_case_aliases() {
        assert_eq!("snake".parse::<Case>().unwrap(), Case::Snake);
        assert_eq!("SCREAMING_SNAKE".parse::<Case>().unwrap(), Case::UpperSnake);
        assert_eq!("constant".parse::<Case>().unwrap(), Case::UpperSnake);
        assert_eq!("kebab".parse::<Case>().unwrap(), Case::Kebab);
        assert_eq!("cobol".parse::<Case>().unwrap(), Case::UpperKebab);
        assert_eq!("pascal".parse::<Case>().unwrap(), Case::UpperCamel);
        assert_eq!("PascalCase".parse::<Case>().unwrap(), Case::UpperCamel);
        assert_eq!("camel".parse::<Case>().unwrap(), Case::Camel);
        assert_eq!("upper-camel".parse::<Case>().unwrap(), Case::UpperCamel);
    }

    #[test]
    fn test_unknown_case() {
        let err = "sponge".parse::<Case>().unwrap_err();
        assert_eq!(err.to_string(), "unknown case convention: sponge");
    }

    #[test]
    fn test_case_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Case::UpperKebab).unwrap();
        assert_eq!(json, "\"UPPER-KEBAB-CASE\"");

        let parsed: Case = serde_json::from_str("\"pascal\"").unwrap();
        assert_eq!(parsed, Case::UpperCamel);

        assert!(serde_json::from_str::<Case>("\"nope\"").is_err());
    }
}
