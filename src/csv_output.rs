//! CSV output format for planning runs

use crate::stats::PlanSummary;

/// CSV output formatter.
///
/// In path mode every row is one solution vertex (`index,x,y`); in summary
/// mode a single row carries the run statistics.
#[derive(Debug)]
pub struct CsvOutput {
    summary_only: bool,
}

impl CsvOutput {
    pub fn new(summary_only: bool) -> Self {
        Self { summary_only }
    }

    /// Escape CSV field (handle commas, quotes, newlines).
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate the CSV document for a finished run.
    pub fn render(&self, summary: &PlanSummary) -> String {
        if self.summary_only {
            let cost = summary
                .solution_cost
                .map(|c| c.to_string())
                .unwrap_or_default();
            let mut out = String::from("planner,solved,cost,nodes,edges,duration_us\n");
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                Self::escape_field(&summary.planner),
                summary.solved,
                cost,
                summary.nodes,
                summary.edges,
                summary.duration_us
            ));
            return out;
        }

        let mut out = String::from("index,x,y\n");
        for (index, [x, y]) in summary.path.iter().enumerate() {
            out.push_str(&format!("{index},{x},{y}\n"));
        }
        out
    }
}
