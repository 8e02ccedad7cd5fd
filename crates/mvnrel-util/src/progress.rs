//! Terminal status lines for the release hooks.
//!
//! Everything goes to stderr so stdout stays free for the release
//! orchestrator.

use std::io::Write;

use console::Style;

/// Width the status label is right-aligned to.
const LABEL_WIDTH: usize = 12;

/// `   Verifying pom.xml`, unstyled.
pub fn format_status(label: &str, message: &str) -> String {
    format!("{label:>LABEL_WIDTH$} {message}")
}

fn print_styled(style: Style, label: &str, message: &str) {
    // Pad before styling; escape codes would otherwise count towards the width.
    let padded = format!("{label:>LABEL_WIDTH$}");
    let _ = writeln!(std::io::stderr(), "{} {message}", style.apply_to(padded));
}

/// A step the hook is taking, with a bold green label.
pub fn status(label: &str, message: &str) {
    print_styled(Style::new().green().bold(), label, message);
}

/// Informational line (bold cyan label), e.g. a step that was skipped.
pub fn status_info(label: &str, message: &str) {
    print_styled(Style::new().cyan().bold(), label, message);
}

/// Warning line (bold yellow label).
pub fn status_warn(label: &str, message: &str) {
    print_styled(Style::new().yellow().bold(), label, message);
}

/// `verify-release` or `verify-release with 2 warnings`.
pub fn hook_outcome(hook: &str, warnings: usize) -> String {
    match warnings {
        0 => hook.to_string(),
        1 => format!("{hook} with 1 warning"),
        n => format!("{hook} with {n} warnings"),
    }
}

/// Closing line of a hook: green when clean, yellow when it raised warnings.
pub fn finished(hook: &str, warnings: usize) {
    let message = hook_outcome(hook, warnings);
    if warnings == 0 {
        status("Finished", &message);
    } else {
        status_warn("Finished", &message);
    }
}
