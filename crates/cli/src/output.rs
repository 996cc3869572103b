//! Console output helpers for the menus.

use console::style;

/// Styled terminal messages, kept apart from the `tracing` log lines so the
/// interactive surface stays readable.
#[derive(Clone, Default)]
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print an unstyled line.
    pub fn line(&self, msg: &str) {
        println!("{msg}");
    }
}
