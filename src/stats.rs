//! Planning run statistics

use serde::Serialize;

/// Outcome of one planning run.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    /// Planner that produced this run.
    pub planner: String,
    /// Whether a start-to-goal path was found.
    pub solved: bool,
    /// Cost of the solution path; `None` when unsolved.
    pub solution_cost: Option<f64>,
    /// Solution path as `[x, y]` pairs, start first.
    pub path: Vec<[f64; 2]>,
    /// Roadmap node count at termination.
    pub nodes: usize,
    /// Roadmap edge count at termination.
    pub edges: usize,
    /// Planning wall-clock time in microseconds.
    pub duration_us: u64,
}

impl PlanSummary {
    /// Human-readable report. `summary_only` suppresses the path listing.
    pub fn render_text(&self, summary_only: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("planner:  {}\n", self.planner));
        out.push_str(&format!("solved:   {}\n", self.solved));
        match self.solution_cost {
            Some(cost) => out.push_str(&format!("cost:     {cost:.4}\n")),
            None => out.push_str("cost:     -\n"),
        }
        out.push_str(&format!("nodes:    {}\n", self.nodes));
        out.push_str(&format!("edges:    {}\n", self.edges));
        out.push_str(&format!("time:     {} us\n", self.duration_us));

        if !summary_only && !self.path.is_empty() {
            out.push_str(&format!("path ({} vertices):\n", self.path.len()));
            for [x, y] in &self.path {
                out.push_str(&format!("  {x} {y}\n"));
            }
        }
        out
    }
}
