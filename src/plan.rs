//! Turning requested actions into an execution plan.

use crate::action::{Action, parse_actions};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeSet;

/// Deduplicate actions and sort them into canonical order.
#[must_use]
pub fn sort_actions(actions: &[Action]) -> Vec<Action> {
    actions
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Drop steps that another step in the plan already covers.
///
/// `test` builds the project itself, so an explicit `build` alongside it is removed.
#[must_use]
pub fn optimize_actions(mut actions: Vec<Action>) -> Vec<Action> {
    if actions.contains(&Action::Test)
        && let Some(pos) = actions.iter().position(|a| *a == Action::Build)
    {
        actions.remove(pos);
    }
    actions
}

/// Ordered, duplicate-free list of actions to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    actions: Vec<Action>,
}

impl Plan {
    /// Sort, deduplicate and optimize a requested sequence.
    #[must_use]
    pub fn from_actions(actions: &[Action]) -> Self {
        let sorted = sort_actions(actions);
        tracing::debug!(?sorted, "sorted actions");
        let actions = optimize_actions(sorted);
        tracing::debug!(?actions, "optimized plan");
        Self { actions }
    }

    /// The plan used when no actions are requested: [`Action::DEFAULT`] as is.
    #[must_use]
    pub fn default_plan() -> Self {
        Self {
            actions: Action::DEFAULT.to_vec(),
        }
    }

    /// Build the plan for raw command-line tokens.
    ///
    /// # Errors
    ///
    /// Fails on the first token that is not an action name.
    pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.is_empty() {
            return Ok(Self::default_plan());
        }
        let requested = parse_actions(tokens)?;
        tracing::debug!(?requested, "parsed actions");
        Ok(Self::from_actions(&requested))
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Announcement printed before execution, e.g. `dotbuild: clean → test`.
    #[must_use]
    pub fn announcement(&self) -> String {
        let names: Vec<&str> = self.actions.iter().map(|a| a.name()).collect();
        format!("dotbuild: {}", names.join(" → "))
    }

    /// Machine-readable description of the plan for a given build tool.
    #[must_use]
    pub fn report(&self, tool: &str) -> PlanReport {
        PlanReport {
            tool: tool.to_string(),
            actions: self.actions.clone(),
            commands: self.actions.iter().map(|a| a.command(tool)).collect(),
        }
    }
}

/// Serializable view of a plan, printed by `--dry-run --json`.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub tool: String,
    pub actions: Vec<Action>,
    pub commands: Vec<String>,
}

impl PlanReport {
    /// Single-line JSON, e.g. `{"tool":"dotnet","actions":["clean"],"commands":["dotnet clean"]}`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
