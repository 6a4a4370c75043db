use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Structura".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Derive structured-data payloads from stored documents\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    let (color, indicator) = if ms < 50.0 {
        ("green", "fast")
    } else if ms < 100.0 {
        ("yellow", "moderate")
    } else {
        ("red", "slow")
    };

    match color {
        "green" => eprintln!(
            "  {} {:>8.2}ms ({})",
            format!("{}:", label).dimmed(),
            ms,
            indicator.dimmed()
        ),
        "yellow" => eprintln!(
            "  {} {:>8.2}ms ({})",
            format!("{}:", label).dimmed(),
            ms,
            indicator.bright_yellow()
        ),
        _ => eprintln!(
            "  {} {:>8.2}ms ({})",
            format!("{}:", label).dimmed(),
            ms,
            indicator.bright_red()
        ),
    }
}

/// Print synthesis details summary
pub fn print_synthesis_details(payload: &structura_core::StructuredDataPayload, extraction: &structura_core::Extraction) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Synthesis Details".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!("  {} {}", "kind:".dimmed(), payload.kind().bright_green());
    eprintln!("  {} {}", "words:".dimmed(), extraction.word_count);
    eprintln!("  {} {}", "reading time:".dimmed(), extraction.reading_duration);
    eprintln!("  {} {}", "outline entries:".dimmed(), extraction.outline.len());
    eprintln!("  {} {}", "faq pairs:".dimmed(), extraction.faq_pairs.len());
    eprintln!("  {} {}", "steps:".dimmed(), extraction.steps.len());
    eprintln!("{}", "═".repeat(60).dimmed());
}
