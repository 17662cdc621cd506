//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;

/// Checks if the password is at least [`MIN_LENGTH`] long.
///
/// Length is counted in UTF-16 code units, the unit a browser text field
/// reports, so a single emoji counts as two.
pub fn min_length_rule(password: &SecretString) -> bool {
    password.expose_secret().encode_utf16().count() >= MIN_LENGTH
}
