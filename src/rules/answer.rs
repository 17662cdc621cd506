//! The answer to the ultimate question.

use secrecy::{ExposeSecret, SecretString};

pub fn answer_rule(password: &SecretString) -> bool {
    password.expose_secret().contains("42")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_rule() {
        let yes = SecretString::new("x42y".to_string().into());
        let split = SecretString::new("4 2".to_string().into());
        assert!(answer_rule(&yes));
        assert!(!answer_rule(&split));
    }
}
