//! Terminal presenter backed by the console crate.

use aikit_core::presenter::Presenter;
use console::style;

/// Styled terminal output. Respects NO_COLOR and non-tty streams through
/// console's own detection.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn heading(&self, message: &str) {
        println!("  {}", style(message).cyan().bold());
    }

    fn rule(&self) {
        println!("{}", style("━".repeat(64)).cyan());
    }

    fn detail(&self, message: &str) {
        println!("{}", style(message).dim());
    }

    fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", style("Warning:").yellow(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", style("Error:").red().bold(), message);
    }
}
