//! Game session for the host UI layer.

use secrecy::SecretString;

use crate::engine::evaluate;
use crate::progress::Progress;
use crate::render::{View, render};

/// Keeps progress between input events and renders each one.
///
/// Call [`PasswordGame::on_input`] with the empty password right after
/// creating the game to draw the first rule.
#[derive(Debug, Clone, Default)]
pub struct PasswordGame {
    progress: Progress,
}

impl PasswordGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a game at previously saved progress.
    pub fn with_progress(progress: Progress) -> Self {
        Self { progress }
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Handles an input change: evaluates, keeps the new progress, renders.
    pub fn on_input(&mut self, password: &SecretString) -> View {
        let evaluation = evaluate(password, self.progress);
        self.progress = evaluation.progress;
        render(&evaluation)
    }
}
