use colored::Colorize;
use u_stackkit::harness::Report;

const NAME_WIDTH: usize = 26;
const VALUE_WIDTH: usize = 24;

/// Truncates `text` to `width` columns, marking the cut with `...`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

pub fn print_report(report: &Report) {
    println!("{}", format!("== {} ==", report.suite).bold());
    println!(
        "{:<NAME_WIDTH$} {:<VALUE_WIDTH$} {:<VALUE_WIDTH$} Result",
        "Case", "Expected", "Actual"
    );
    println!("{}", "-".repeat(NAME_WIDTH + 2 * VALUE_WIDTH + 9));
    for outcome in &report.outcomes {
        let status = if outcome.passed {
            "PASS".green()
        } else {
            "FAIL".red().bold()
        };
        println!(
            "{:<NAME_WIDTH$} {:<VALUE_WIDTH$} {:<VALUE_WIDTH$} {status}",
            fit(&outcome.name, NAME_WIDTH),
            fit(&outcome.expected.to_string(), VALUE_WIDTH),
            fit(&outcome.actual.to_string(), VALUE_WIDTH),
        );
        if let Some(note) = &outcome.note {
            println!("    {}", note.yellow());
        }
    }
    println!();
}

pub fn print_summary(passed: usize, total: usize) {
    let line = format!("{passed}/{total} cases passed");
    if passed == total {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_short_text_untouched() {
        assert_eq!(fit("classic", 10), "classic");
    }

    #[test]
    fn test_fit_truncates_with_marker() {
        assert_eq!(fit("[0, 1, 0, 2, 1, 0]", 10), "[0, 1, ...");
    }
}
