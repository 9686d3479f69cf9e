//! Section header formatting.

use owo_colors::OwoColorize;

/// Prints a section header followed by a blank line.
pub fn print_section_header(title: &str) {
    println!("{}", title.cyan().bold());
    println!();
}
