use crate::types::report::ScoreReport;

pub fn to_text(report: &ScoreReport) -> String {
    let mut output = format!("Driver Scores: {:?}", report.score_values());
    for warning in &report.warnings {
        output.push_str(&format!("\nwarning: {}", warning.message()));
    }
    output
}
