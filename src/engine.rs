//! Rule engine - checks the unlocked rules and reveals the next one.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::progress::Progress;
use crate::rules::{RULES, Rule, RuleId};

/// Delay before an async evaluation runs, so fast typing only evaluates once.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Outcome of a single rule in an evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleStatus {
    pub id: RuleId,
    pub satisfied: bool,
}

impl RuleStatus {
    pub fn rule(&self) -> &'static Rule {
        self.id.rule()
    }
}

/// Result of evaluating a password against the unlocked rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Unlocked rules in order, including a freshly revealed one (unsatisfied).
    pub results: Vec<RuleStatus>,
    /// Progress to hand back on the next evaluation.
    pub progress: Progress,
    /// Every rule is satisfied by this password.
    pub won: bool,
}

/// Evaluates the password against every unlocked rule.
///
/// If all unlocked rules pass, one more rule is revealed and appended to the
/// results as unsatisfied without being checked. Once all rules are revealed
/// and the unlocked ones pass, the whole set is re-checked to decide `won`.
///
/// # Arguments
/// * `password` - The current input text
/// * `progress` - Progress returned by the previous evaluation
pub fn evaluate(password: &SecretString, progress: Progress) -> Evaluation {
    let mut results: Vec<RuleStatus> = RULES[..progress.unlocked()]
        .iter()
        .map(|rule| RuleStatus {
            id: rule.id,
            satisfied: rule.is_satisfied(password),
        })
        .collect();

    let all_satisfied = results.iter().all(|status| status.satisfied);
    let mut progress = progress;

    if all_satisfied && !progress.is_complete() {
        progress = progress.advance();
        let revealed = &RULES[progress.unlocked() - 1];

        #[cfg(feature = "tracing")]
        tracing::debug!("Unlocked {}", revealed.id);

        results.push(RuleStatus {
            id: revealed.id,
            satisfied: false,
        });
    }

    // The rule revealed above is still shown as failing, even when this
    // re-check finds that it already passes.
    let won = all_satisfied
        && progress.is_complete()
        && RULES.iter().all(|rule| rule.is_satisfied(password));

    #[cfg(feature = "tracing")]
    {
        if won {
            tracing::info!("All {} rules satisfied", RULES.len());
        }
    }

    Evaluation {
        results,
        progress,
        won,
    }
}

/// Async version that debounces, evaluates and sends the result via channel.
///
/// Nothing is evaluated or sent if `token` is cancelled before the debounce
/// delay elapses. A dropped evaluation also drops its reveal step: the caller
/// keeps its previous `Progress`, so a burst of keystrokes unlocks at most one
/// rule instead of one per keystroke.
#[cfg(feature = "async")]
pub async fn evaluate_rules_tx(
    password: &SecretString,
    progress: Progress,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate(password, progress);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send rule evaluation result: {}", _e);
    }
}
