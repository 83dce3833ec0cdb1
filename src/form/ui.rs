//! Banners and panels for the interactive form.

use crate::config::Config;
use crate::translation::Language;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Multilingual Translator",
        Style::header("lingo"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &Config) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Exit the translator")
    );
    println!();
}

pub fn print_translation(target: Language, text: &str) {
    println!(
        "{} Translated to {}:",
        Style::success("✓"),
        Style::value(target)
    );
    println!("{}", Style::translation(text));
    println!();
}

pub fn print_warning(message: &str) {
    eprintln!("{} {message}", Style::warning("Warning:"));
    eprintln!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
