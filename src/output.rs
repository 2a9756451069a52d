//! CLI output formatting.
//!
//! One `format_*` function per thing we print (returns `Vec<String>` for
//! testability) and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Slides
//! 001 Peter Parker [qr]
//! 002 Carol Danvers [qr]
//!
//! successfully saved file /work/directory.pptx (2 slides)
//! ```

use crate::pipeline::RunReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format the per-slide summary and the final save line for a finished run.
pub fn format_run_report(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();

    if report.names.is_empty() {
        lines.push("No attendees selected — wrote an empty deck".to_string());
    } else {
        lines.push("Slides".to_string());
        for (i, name) in report.names.iter().enumerate() {
            let marker = if report.qr_enabled { " [qr]" } else { "" };
            lines.push(format!("{} {}{}", format_index(i + 1), name, marker));
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "successfully saved file {} ({})",
        report.output_path.display(),
        plural(report.names.len(), "slide")
    ));
    lines
}

/// Print the run summary to stdout.
pub fn print_run_report(report: &RunReport) {
    for line in format_run_report(report) {
        println!("{line}");
    }
}
