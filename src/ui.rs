use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Prints a titled block of preview output, used by dry runs
pub fn display_preview(title: &str, body: &str) {
    println!("{}", style(title).underlined());
    println!("{}", body);
}

pub fn display_version_change(current: &str, next: &str) {
    println!("\n{}", style("Proposed version change:").bold());
    println!("  From: {}", style(current).red());
    println!("  To:   {}", style(next).green());
}
