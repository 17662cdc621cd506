//! Sponsor rule - the password must advertise a sponsor.

use secrecy::{ExposeSecret, SecretString};

const SPONSORS: [&str; 3] = ["Pepsi", "Starbucks", "Google"];

/// Checks if a sponsor name appears in the password, spelled with its exact case.
pub fn sponsor_rule(password: &SecretString) -> bool {
    let pwd = password.expose_secret();
    SPONSORS.iter().any(|sponsor| pwd.contains(sponsor))
}
