//! Character variety rules - uppercase, lowercase, digits and special characters.
//!
//! Only ASCII letters and digits count here; `É` is not an uppercase letter
//! for the purposes of the game.

use secrecy::{ExposeSecret, SecretString};

/// Characters accepted by [`special_char_rule`].
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Checks for at least one ASCII uppercase letter.
pub fn uppercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

/// Checks for at least one ASCII lowercase letter.
pub fn lowercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

/// Checks for at least one ASCII digit.
pub fn digit_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Checks for at least one character from [`SPECIAL_CHARS`].
pub fn special_char_rule(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(c))
}
