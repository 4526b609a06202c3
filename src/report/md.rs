use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Driver Score Report\n\n");
    output.push_str(&format!(
        "Alignment: {} (total weight {:.3})\n\n",
        report.alignment, report.total_weight
    ));

    output.push_str("## Driver Scores\n\n");
    if report.scores.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| observation | score | missing |\n");
        output.push_str("|---|---|---|\n");
        for driver in &report.scores {
            let missing = if driver.missing.is_empty() {
                "-".to_string()
            } else {
                driver
                    .missing
                    .iter()
                    .map(|parameter| parameter.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            output.push_str(&format!(
                "| {} | {:.3} | {} |\n",
                driver.observation, driver.score, missing
            ));
        }
        output.push('\n');
    }

    output.push_str("## Parameters\n\n");
    for score in &report.parameters {
        output.push_str(&format!(
            "- {}: fence [{:.3}, {:.3}], retained {}/{}",
            score.parameter,
            score.fence.lower,
            score.fence.upper,
            score.retained(),
            score.len()
        ));
        if !score.outliers.is_empty() {
            let outliers = score
                .outliers
                .iter()
                .map(|outlier| format!("#{}={}", outlier.index, outlier.value))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!(", outliers {outliers}"));
        }
        if score.degenerate {
            output.push_str(", degenerate range");
        }
        output.push('\n');
    }
    output.push('\n');

    output.push_str("## Warnings\n\n");
    if report.warnings.is_empty() {
        output.push_str("- none\n");
    } else {
        for warning in &report.warnings {
            output.push_str(&format!("- {}\n", warning.message()));
        }
    }

    output
}
