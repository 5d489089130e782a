//! JSON output format for planning runs

use serde::{Deserialize, Serialize};

use crate::stats::PlanSummary;

/// A single vertex of the solution path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPathPoint {
    pub x: f64,
    pub y: f64,
}

/// Roadmap size at termination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRoadmapStats {
    pub nodes: usize,
    pub edges: usize,
}

/// Machine-readable report of one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPlanReport {
    /// Planner that produced this run.
    pub planner: String,
    /// Whether a start-to-goal path was found.
    pub solved: bool,
    /// Cost of the solution path (absent when unsolved).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_cost: Option<f64>,
    /// Solution path, start first (absent when unsolved).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonPathPoint>>,
    pub roadmap: JsonRoadmapStats,
    /// Planning wall-clock time in microseconds.
    pub duration_us: u64,
}

impl JsonPlanReport {
    pub fn from_summary(summary: &PlanSummary) -> Self {
        let path = if summary.path.is_empty() {
            None
        } else {
            Some(
                summary
                    .path
                    .iter()
                    .map(|[x, y]| JsonPathPoint { x: *x, y: *y })
                    .collect(),
            )
        };
        JsonPlanReport {
            planner: summary.planner.clone(),
            solved: summary.solved,
            solution_cost: summary.solution_cost,
            path,
            roadmap: JsonRoadmapStats {
                nodes: summary.nodes,
                edges: summary.edges,
            },
            duration_us: summary.duration_us,
        }
    }

    /// Render as a pretty-printed JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
