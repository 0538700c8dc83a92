// Coloured terminal output for the one-shot commands

use colored::Colorize;

/// Section heading
pub fn heading(title: &str) {
    println!("{}", title.white().bold().underline());
}

/// Aligned "label  value" line
pub fn field(label: &str, value: &str) {
    println!("  {:<18} {}", format!("{}:", label).bold(), value);
}

/// A panel that could not be filled; shown instead of failing the command
pub fn degraded(label: &str, notice: &str) {
    println!("  {:<18} {}", format!("{}:", label).bold(), notice.yellow());
}

/// Display a warning message
pub fn warn(message: &str) {
    eprintln!("{}", format!("⚠️  Warning: {}", message).yellow().bold());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Display a dimmed/secondary message
pub fn dimmed(message: &str) {
    println!("{}", message.dimmed());
}
