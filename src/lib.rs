//! Password game rule engine
//!
//! As the player types a password, an ordered list of increasingly odd rules
//! is revealed and checked. The next rule only appears once every rule
//! before it passes, and revealed rules stay revealed.
//!
//! The crate is UI-agnostic: [`evaluate`] maps a password and the current
//! [`Progress`] to an [`Evaluation`], and [`render`] turns that into a
//! [`View`] the host draws in place of the previous one.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_game::PasswordGame;
//! use secrecy::SecretString;
//!
//! let mut game = PasswordGame::new();
//!
//! // Draw the first rule before any input
//! let view = game.on_input(&SecretString::new(String::new().into()));
//! assert_eq!(view.rows.len(), 1);
//!
//! // Each input event returns a complete view
//! let password = SecretString::new("correct horse".to_string().into());
//! let view = game.on_input(&password);
//! print!("{view}");
//! assert_eq!(game.progress().unlocked(), 2);
//! ```

// Internal modules
mod engine;
mod game;
mod progress;
mod render;
pub mod rules;

// Public API
pub use engine::{Evaluation, RuleStatus, evaluate};
pub use game::PasswordGame;
pub use progress::{Progress, ProgressError};
pub use render::{Row, Status, View, WIN_BANNER, render};
pub use rules::{RULE_COUNT, RULES, Rule, RuleId};

#[cfg(feature = "async")]
pub use engine::{DEBOUNCE, evaluate_rules_tx};
