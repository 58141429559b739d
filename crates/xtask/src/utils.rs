//! Utility functions for xtask commands

use console::style;
use item_core::StyledRun;

/// Renders styled runs as 24-bit ANSI text, or plain text when colors are off.
pub fn paint(runs: &[StyledRun]) -> String {
    if !console::colors_enabled() {
        return item_core::plain_text(runs);
    }

    let mut out = String::new();
    for run in runs {
        let item_core::Rgb { r, g, b } = run.color;
        out.push_str(&format!("\x1b[38;2;{r};{g};{b}m{}", run.text));
    }
    out.push_str("\x1b[0m");
    out
}

/// Prints a bold cyan `label` followed by `value`.
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", style(label).bold().cyan(), value);
}
