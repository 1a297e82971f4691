use crate::error::CaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub fn lower(word: &str) -> String {
    word.to_lowercase()
}

pub fn upper(word: &str) -> String {
    word.to_uppercase()
}

/// Lowercase the whole word, then uppercase only its first character.
///
/// Unlike a locale-aware title-casing routine this never looks past the first
/// character, so `"mcDONALD"` becomes `"Mcdonald"`.
pub fn title(word: &str) -> String {
    let lowered = word.to_lowercase();
    let mut chars = lowered.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Built-in word transforms, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    Lower,
    Upper,
    Title,
    Keep,
}

impl Transform {
    pub const ALL: [Transform; 4] = [
        Transform::Lower,
        Transform::Upper,
        Transform::Title,
        Transform::Keep,
    ];

    pub fn apply(&self, word: &str) -> String {
        match self {
            Transform::Lower => lower(word),
            Transform::Upper => upper(word),
            Transform::Title => title(word),
            Transform::Keep => word.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transform::Lower => "lower",
            Transform::Upper => "upper",
            Transform::Title => "title",
            Transform::Keep => "keep",
        }
    }
}

impl FromStr for Transform {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(Transform::Lower),
            "upper" | "uppercase" => Ok(Transform::Upper),
            "title" | "titlecase" => Ok(Transform::Title),
            "keep" | "none" | "identity" => Ok(Transform::Keep),
            _ => Err(CaseError::UnknownTransform(s.to_string())),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
