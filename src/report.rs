//! Console reporting for the scenario binaries.
//!
//! Output is a fixed sequence of `<label>: <value>` lines under colored
//! headers. The line builders are plain strings so tests can assert on
//! them without capturing stdout.

use colored::Colorize;

pub fn banner(title: &str) {
    println!("=== {} ===\n", title.bold());
}

pub fn section(title: &str) {
    println!("--- {} ---", title.cyan());
}

pub fn field(label: &str, value: &str) {
    println!("{}", field_line(label, value));
}

pub fn field_line(label: &str, value: &str) -> String {
    format!("{label}: {value}")
}

pub fn blank() {
    println!();
}
