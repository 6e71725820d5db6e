//! Terminal output helpers

use buildcfg_meta::Bundler;
use colored::{ColoredString, Colorize};
use serde_json::Value;

/// Render a framed box around `title` and `lines`.
///
/// Lines are padded by character count, so they must be plain text.
pub fn boxed(title: &str, lines: &[String]) -> String {
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let border = "─".repeat(width + 4);
    let pad = |text: &str| format!("{}{}", text, " ".repeat(width - text.chars().count()));

    let mut out = Vec::with_capacity(lines.len() + 4);
    out.push(format!("┌{}┐", border).cyan().to_string());
    out.push(format!(
        "{}{}{}",
        "│  ".cyan(),
        pad(title).bold(),
        "  │".cyan()
    ));
    out.push(format!("├{}┤", border).cyan().to_string());
    for line in lines {
        out.push(format!("{}{}{}", "│  ".cyan(), pad(line), "  │".cyan()));
    }
    out.push(format!("└{}┘", border).cyan().to_string());
    out.join("\n")
}

pub fn print_box(title: &str, lines: &[String]) {
    println!("{}", boxed(title, lines));
}

pub fn bundler(bundler: Bundler) -> ColoredString {
    bundler.as_str().magenta()
}

/// Check mark for an enabled option, cross for a disabled one.
pub fn mark(enabled: bool) -> ColoredString {
    if enabled { "✓".green() } else { "✗".dimmed() }
}

pub fn enabled(on: bool) -> &'static str {
    if on { "enabled" } else { "disabled" }
}

/// `config[key]` as compact JSON, or `fallback` when unset.
pub fn json_or(config: &Value, key: &str, fallback: &str) -> String {
    match config.get(key) {
        Some(value) if !value.is_null() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// `config[key]` as display text, or `fallback` when unset.
pub fn text_or(config: &Value, key: &str, fallback: &str) -> String {
    match config.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(value) if !value.is_null() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// Whether an option defaulting to on is still on (anything but `false`).
pub fn on_unless_false(config: &Value, key: &str) -> bool {
    config.get(key) != Some(&Value::Bool(false))
}

/// Whether an option defaulting to off is truthy.
pub fn on_if_truthy(config: &Value, key: &str) -> bool {
    match config.get(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}
