//! Password game rules
//!
//! Each rule is a pure predicate over the password. [`RULES`] holds them in
//! reveal order: rule `i + 1` is only shown once rules `0..=i` pass.

mod answer;
mod digits;
mod length;
mod month;
mod roman;
mod sponsor;
mod variety;

use std::fmt;

use secrecy::SecretString;

pub use answer::answer_rule;
pub use digits::digit_sum_rule;
pub use length::min_length_rule;
pub use month::month_rule;
pub use roman::roman_numeral_rule;
pub use sponsor::sponsor_rule;
pub use variety::{SPECIAL_CHARS, digit_rule, lowercase_rule, special_char_rule, uppercase_rule};

/// Signature shared by all rule predicates.
/// - `true` - the password satisfies the rule
/// - `false` - it does not
pub type RuleCheck = fn(&SecretString) -> bool;

/// Number of rules in the game.
pub const RULE_COUNT: usize = 10;

/// Identifies a rule. Discriminants are the rule's index in [`RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    MinLength = 0,
    Uppercase,
    Lowercase,
    Digit,
    SpecialChar,
    DigitSum,
    Month,
    RomanNumeral,
    Sponsor,
    Answer,
}

impl RuleId {
    /// Position of the rule in reveal order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The rule definition for this id.
    pub fn rule(self) -> &'static Rule {
        &RULES[self.index()]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule #{}", self.index() + 1)
    }
}

/// A rule definition: what the player reads and how it is checked.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub text: &'static str,
    check: RuleCheck,
}

impl Rule {
    /// Runs the rule's predicate against the password.
    pub fn is_satisfied(&self, password: &SecretString) -> bool {
        (self.check)(password)
    }
}

/// All rules, in reveal order.
pub static RULES: [Rule; RULE_COUNT] = [
    Rule {
        id: RuleId::MinLength,
        text: "Rule #1: Must be at least 8 characters long.",
        check: min_length_rule,
    },
    Rule {
        id: RuleId::Uppercase,
        text: "Rule #2: Must contain at least one uppercase letter.",
        check: uppercase_rule,
    },
    Rule {
        id: RuleId::Lowercase,
        text: "Rule #3: Must contain at least one lowercase letter.",
        check: lowercase_rule,
    },
    Rule {
        id: RuleId::Digit,
        text: "Rule #4: Must contain at least one number.",
        check: digit_rule,
    },
    Rule {
        id: RuleId::SpecialChar,
        text: "Rule #5: Must contain at least one special character (e.g., !@#$%).",
        check: special_char_rule,
    },
    Rule {
        id: RuleId::DigitSum,
        text: "Rule #6: The numbers must add up to 25.",
        check: digit_sum_rule,
    },
    Rule {
        id: RuleId::Month,
        text: "Rule #7: Must include a month of the year.",
        check: month_rule,
    },
    Rule {
        id: RuleId::RomanNumeral,
        text: "Rule #8: Must include a Roman numeral.",
        check: roman_numeral_rule,
    },
    Rule {
        id: RuleId::Sponsor,
        text: "Rule #9: Must include one of our sponsors: Pepsi, Starbucks, or Google.",
        check: sponsor_rule,
    },
    Rule {
        id: RuleId::Answer,
        text: "Rule #10: Must contain the answer to the ultimate question of life, the universe, and everything.",
        check: answer_rule,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_in_id_order() {
        for (i, rule) in RULES.iter().enumerate() {
            assert_eq!(rule.id.index(), i);
            assert!(std::ptr::eq(rule.id.rule(), rule));
        }
    }

    #[test]
    fn test_rule_text_matches_number() {
        for rule in &RULES {
            let prefix = format!("{}: ", rule.id);
            assert!(rule.text.starts_with(&prefix), "{} should start with {}", rule.text, prefix);
        }
    }

    #[test]
    fn test_is_satisfied_dispatches_to_check() {
        let pwd = SecretString::new("Pepsi".to_string().into());
        assert!(RuleId::Sponsor.rule().is_satisfied(&pwd));
        assert!(!RuleId::MinLength.rule().is_satisfied(&pwd));
    }
}
