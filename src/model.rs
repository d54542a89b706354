// numeric constants that describe a fresh run
pub const MAX_STEPS: usize = 1000;
pub const DEFAULT_COLOR: &str = "#34d399"; // emerald-400
pub const START_HEADING: f64 = 90.0; // facing +y

use crate::processor::{self, error::ScriptError};
use serde::{Deserialize, Serialize, Serializer};

/// Where the turtle is, where it faces and how it draws.
///
/// `heading` is in degrees, counter-clockwise from +x, and is never
/// normalised: `left(360)` leaves it at 450.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub pen_down: bool,
    pub color: String,
}

impl CursorState {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading: START_HEADING,
            pen_down: true,
            color: color.into(),
        }
    }
}

/// One recorded cursor state. `id` 0 is the initial state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub id: usize,
    #[serde(flatten)]
    pub state: CursorState,
}

/// Everything a single run produces.
///
/// When `error` is set, `steps` is the prefix computed before the
/// failing line and the metrics cover exactly that prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub steps: Vec<Step>,
    #[serde(serialize_with = "describe_error")]
    pub error: Option<ScriptError>,
    pub path_length: f64,
    pub total_turns: f64,
}

impl ExecutionResult {
    /// State the turtle ended in (last step), if any step was recorded.
    pub fn final_state(&self) -> Option<&CursorState> {
        self.steps.last().map(|s| &s.state)
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

fn describe_error<S: Serializer>(error: &Option<ScriptError>, s: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => s.serialize_some(&e.to_string()),
        None => s.serialize_none(),
    }
}

/// Knobs for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Steps appended after the initial one before the run stops silently.
    pub max_steps: usize,
    pub default_color: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_steps: MAX_STEPS,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// ─────────────────────────────────────────────────────
/// Level catalog types
/// ─────────────────────────────────────────────────────

/// Data form of a level's success predicate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Goal {
    #[serde(default)]
    pub min_path_length: f64,
    #[serde(default)]
    pub exact_turns: Option<f64>,
    #[serde(default)]
    pub min_turns: Option<f64>,
    /// Both |x| and |y| of the end state must be below this.
    #[serde(default)]
    pub home_tolerance: Option<f64>,
}

impl Goal {
    pub fn is_met(&self, end: &CursorState, path_length: f64, total_turns: f64) -> bool {
        path_length >= self.min_path_length
            && self.exact_turns.is_none_or(|t| total_turns == t)
            && self.min_turns.is_none_or(|t| total_turns >= t)
            && self
                .home_tolerance
                .is_none_or(|tol| end.x.abs() < tol && end.y.abs() < tol)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub target_shape: String,
    pub initial_script: String,
    pub solution_script: String,
    #[serde(default)]
    pub hints: Vec<String>,
    pub goal: Goal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Solved,
    Unsolved,
    /// The run failed; metrics are not trusted.
    Errored(String),
}

impl Level {
    pub fn evaluate(&self, result: &ExecutionResult) -> Verdict {
        if let Some(e) = &result.error {
            return Verdict::Errored(e.to_string());
        }
        match result.final_state() {
            Some(end) if self.goal.is_met(end, result.path_length, result.total_turns) => {
                Verdict::Solved
            }
            _ => Verdict::Unsolved,
        }
    }

    /// Trace of the level's own solution, for thumbnails.
    pub fn preview(&self) -> Vec<Step> {
        processor::execute(&self.solution_script).steps
    }
}
