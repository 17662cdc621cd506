//! Digit sum rule - the digits in the password must add up to a target.

use secrecy::{ExposeSecret, SecretString};

const TARGET_SUM: u32 = 25;

/// Checks that the ASCII digits of the password sum to [`TARGET_SUM`].
///
/// Each digit counts on its own, so `"19"` contributes 10, not 19.
/// A password without digits never satisfies the rule.
pub fn digit_sum_rule(password: &SecretString) -> bool {
    let mut digits = password
        .expose_secret()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .peekable();

    if digits.peek().is_none() {
        return false;
    }
    digits.sum::<u32>() == TARGET_SUM
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_digit_sum_exact() {
        assert!(digit_sum_rule(&secret("Abcdef!799")));
        assert!(digit_sum_rule(&secret("9a9b7")));
    }

    #[test]
    fn test_digit_sum_counts_digits_individually() {
        // 25 as a number is 2 + 5 = 7
        assert!(!digit_sum_rule(&secret("25")));
        assert!(digit_sum_rule(&secret("55555")));
    }

    #[test]
    fn test_digit_sum_no_digits() {
        assert!(!digit_sum_rule(&secret("NoDigitsHere!")));
        assert!(!digit_sum_rule(&secret("")));
    }

    #[test]
    fn test_digit_sum_off_by_one() {
        assert!(!digit_sum_rule(&secret("9971")));
        assert!(!digit_sum_rule(&secret("996")));
    }
}
