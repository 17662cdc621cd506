//! Roman numeral rule.
//!
//! Any whole word made only of the letters I, V, X, L, C, D and M counts,
//! so ordinary words like "LIVID" or "mix" pass as numerals. The check does
//! not validate numeral grammar.
//!
//! Word boundaries are ASCII-only: a non-ASCII letter or digit next to the
//! run counts as a separator, so "éMé" matches.

use std::sync::OnceLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

static ROMAN_NUMERAL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn roman_numeral_pattern() -> &'static Regex {
    ROMAN_NUMERAL_PATTERN.get_or_init(|| Regex::new(r"(?i)(?-u:\b)[IVXLCDM]+(?-u:\b)").unwrap())
}

/// Checks if the password contains a word made of Roman numeral letters.
pub fn roman_numeral_rule(password: &SecretString) -> bool {
    roman_numeral_pattern().is_match(password.expose_secret())
}
