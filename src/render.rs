//! Renderer - turns an evaluation into a view model for the host UI.
//!
//! Every call produces a complete [`View`]; the host replaces whatever it
//! displayed before.

use std::fmt;

use crate::engine::Evaluation;
use crate::rules::RuleId;

/// Message appended once every rule is satisfied.
pub const WIN_BANNER: &str = "🎉 Congratulations! You have a valid password! 🎉";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Satisfied,
    Unsatisfied,
}

impl Status {
    pub fn icon(self) -> &'static str {
        match self {
            Status::Satisfied => "✅",
            Status::Unsatisfied => "❌",
        }
    }

    /// Style class for hosts that render to HTML.
    pub fn class_name(self) -> &'static str {
        match self {
            Status::Satisfied => "satisfied",
            Status::Unsatisfied => "unsatisfied",
        }
    }
}

impl From<bool> for Status {
    fn from(satisfied: bool) -> Self {
        if satisfied {
            Status::Satisfied
        } else {
            Status::Unsatisfied
        }
    }
}

/// One displayed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RuleId,
    pub status: Status,
    pub text: &'static str,
}

/// Everything the host needs to draw the rule list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View {
    pub rows: Vec<Row>,
    pub banner: Option<&'static str>,
}

/// Builds the view for an evaluation, one row per result in order.
pub fn render(evaluation: &Evaluation) -> View {
    let rows = evaluation
        .results
        .iter()
        .map(|status| Row {
            id: status.id,
            status: Status::from(status.satisfied),
            text: status.rule().text,
        })
        .collect();

    View {
        rows,
        banner: evaluation.won.then_some(WIN_BANNER),
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{} {}", row.status.icon(), row.text)?;
        }
        if let Some(banner) = self.banner {
            writeln!(f, "{banner}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RuleStatus;
    use crate::progress::Progress;

    fn evaluation(results: &[(RuleId, bool)], won: bool) -> Evaluation {
        Evaluation {
            results: results
                .iter()
                .map(|&(id, satisfied)| RuleStatus { id, satisfied })
                .collect(),
            progress: Progress::new(results.len().max(1)).unwrap(),
            won,
        }
    }

    #[test]
    fn test_render_rows_in_order() {
        let view = render(&evaluation(
            &[(RuleId::MinLength, true), (RuleId::Uppercase, false)],
            false,
        ));

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].status, Status::Satisfied);
        assert_eq!(view.rows[0].text, "Rule #1: Must be at least 8 characters long.");
        assert_eq!(view.rows[1].id, RuleId::Uppercase);
        assert_eq!(view.rows[1].status.class_name(), "unsatisfied");
        assert_eq!(view.banner, None);
    }

    #[test]
    fn test_render_display() {
        let view = render(&evaluation(
            &[(RuleId::MinLength, true), (RuleId::Uppercase, false)],
            false,
        ));

        assert_eq!(
            view.to_string(),
            "✅ Rule #1: Must be at least 8 characters long.\n\
             ❌ Rule #2: Must contain at least one uppercase letter.\n"
        );
    }

    #[test]
    fn test_render_banner_when_won() {
        let results: Vec<(RuleId, bool)> = crate::rules::RULES
            .iter()
            .map(|rule| (rule.id, true))
            .collect();
        let view = render(&evaluation(&results, true));

        assert_eq!(view.banner, Some(WIN_BANNER));
        assert!(view.to_string().ends_with(&format!("{WIN_BANNER}\n")));
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(Status::from(true).icon(), "✅");
        assert_eq!(Status::from(false).icon(), "❌");
    }
}
