//! Terminal output for host-hunter.
//!
//! Banner, one colored line per probe result, the summary block and the list
//! of successful domains. Colors come from the `console` crate and switch off
//! on their own when stdout is not a terminal.

use console::style;
use host_hunter_lib::{ProbeResult, Progress, ScanReport, VERSION};

const BANNER: &str = r#"
 _   _           _     _   _             _
| | | | ___  ___| |_  | | | |_   _ _ __ | |_ ___ _ __
| |_| |/ _ \/ __| __| | |_| | | | | '_ \| __/ _ \ '__|
|  _  | (_) \__ \ |_  |  _  | |_| | | | | ||  __/ |
|_| |_|\___/|___/\__| |_| |_|\__,_|_| |_|\__\___|_|
"#;

const DOMAIN_WIDTH: usize = 50;

// ── Banner ───────────────────────────────────────────────────────────────────

/// Name and library version shown under the banner.
pub fn version_line() -> String {
    format!("host-hunter v{}", VERSION)
}

pub fn print_banner() {
    println!();
    println!("{}", style(BANNER).cyan());
    println!("{}", style(version_line()).dim());
    println!();
}

// ── Single result line ───────────────────────────────────────────────────────

/// Plain text of a result line, without colors.
///
/// Successes show the status code and reason; failures show `000 Failed`.
pub fn format_result_line(result: &ProbeResult, progress: Progress) -> String {
    let secs = result.duration.as_secs_f64();
    match (result.error.as_ref(), result.status_code) {
        (None, Some(code)) => format!(
            "{:<width$} {} {} ({:.2}s) ---> {:6.1}%",
            result.domain,
            code,
            result.status_text(),
            secs,
            progress.percent,
            width = DOMAIN_WIDTH,
        ),
        _ => format!(
            "{:<width$} 000 Failed ({:.2}s) ---> {:6.1}%",
            result.domain,
            secs,
            progress.percent,
            width = DOMAIN_WIDTH,
        ),
    }
}

/// Print one result: green when a response came back, gray on failure.
pub fn print_result(result: &ProbeResult, progress: Progress) {
    let line = format_result_line(result, progress);
    if result.error.is_none() {
        println!("{}", style(line).green());
    } else {
        println!("{}", style(line).black().bright());
    }
}

// ── Summary ──────────────────────────────────────────────────────────────────

/// Lines of the summary block, without colors.
pub fn summary_lines(report: &ScanReport) -> Vec<String> {
    let mut lines = vec![
        format!("Total domains checked: {}", report.total),
        format!("Successful domains: {}", report.successful_count()),
        format!("Failed domains: {}", report.failed_count()),
        format!("Total time taken: {:.2}s", report.elapsed.as_secs_f64()),
    ];
    if report.total > 0 {
        lines.push(format!(
            "Average time per domain: {:.2}s",
            report.average_per_domain().as_secs_f64()
        ));
    }
    lines
}

pub fn print_summary(report: &ScanReport) {
    println!();
    println!("{}", style("----● Summary ●----").cyan());
    for line in summary_lines(report) {
        println!("{}", line);
    }
}

/// Print the successful domains in the order they were recorded.
pub fn print_successful_domains(report: &ScanReport) {
    println!();
    println!("{}", style("----● Successful Domains ●----").cyan());
    for domain in &report.successful {
        println!("{}", style(domain).green());
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
