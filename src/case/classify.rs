//! Per-codepoint classification by Unicode General Category.

use finl_unicode::categories::CharacterCategories;

/// Letters (`L*`) and numbers (`N*`) make up words; everything else separates them.
pub fn is_word_char(ch: char) -> bool {
    ch.is_letter() || ch.is_number()
}

pub fn is_separator(ch: char) -> bool {
    !is_word_char(ch)
}

pub fn is_upper(ch: char) -> bool {
    ch.is_letter_uppercase()
}

/// Numbers count as lowercase letters when looking for case transitions.
pub fn is_lower_or_number(ch: char) -> bool {
    ch.is_letter_lowercase() || ch.is_number()
}

/// Letters and decimal digits, the characters that continue an un-titling run.
pub fn is_run_char(ch: char) -> bool {
    ch.is_letter() || ch.is_number_decimal()
}

// Lookahead variants: the end of input is neither upper nor lower.

pub(crate) fn next_is_upper(next: Option<char>) -> bool {
    next.is_some_and(is_upper)
}

pub(crate) fn next_is_lower_or_number(next: Option<char>) -> bool {
    next.is_some_and(is_lower_or_number)
}
