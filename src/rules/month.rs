//! Month rule - the password must name a month of the year.

use secrecy::{ExposeSecret, SecretString};

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Checks if any English month name appears in the password, ignoring case.
pub fn month_rule(password: &SecretString) -> bool {
    let lowered = password.expose_secret().to_lowercase();
    MONTHS.iter().any(|month| lowered.contains(month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_rule_any_case() {
        for pwd in ["xxMayxx", "JANUARY1", "deCember", "octoberfest"] {
            let pwd = SecretString::new(pwd.to_string().into());
            assert!(month_rule(&pwd));
        }
    }

    #[test]
    fn test_month_rule_abbreviation_not_enough() {
        let pwd = SecretString::new("Jan Feb Mar Sept".to_string().into());
        assert!(!month_rule(&pwd));
    }
}
