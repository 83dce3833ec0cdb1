use clap::{Parser, Subcommand};

use crate::translation::Language;

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(about = "AI-powered multilingual translator for the terminal")]
#[command(version)]
pub struct Args {
    /// Sentence to translate (reads stdin if piped; opens the interactive form otherwise)
    pub text: Option<String>,

    /// Target language (e.g., urdu, french)
    #[arg(short = 't', long = "to", value_enum)]
    pub to: Option<Language>,

    /// API endpoint base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported target languages
    Languages,
}
