// src/utils/console.rs

//! Terminal report rendering.
//!
//! Views print through these helpers so every command shares one visual
//! language. This is the product output, not diagnostics; diagnostics go
//! through the `log` facade.

/// Print a boxed section header.
pub fn header(title: &str) {
    let border = "═".repeat(60);
    println!("{border}");
    println!("  {title}");
    println!("{border}");
}

/// Print a separator line.
pub fn separator() {
    println!("{}", "─".repeat(60));
}

/// Print a plain line.
pub fn line(message: &str) {
    println!("{message}");
}

/// Print an indented sub-item.
pub fn sub_item(message: &str) {
    println!("    {message}");
}

/// Print a labeled key/value summary block.
pub fn summary(title: &str, items: &[(&str, String)]) {
    println!();
    println!("[{title}]");
    for (key, value) in items {
        println!("    {key}: {value}");
    }
}

/// Print one labeled bar-chart row.
pub fn chart_row(label: &str, value: u64, max: u64) {
    let bar = super::format::bar(value, max, 30);
    println!("    {label:<24} {bar} {value}");
}

/// Print a user-facing notice for an empty or failed view.
pub fn notice(message: &str) {
    println!();
    println!("  ({message})");
}
