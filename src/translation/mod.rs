mod client;
mod language;
mod prompt;

pub use client::{CompletionClient, TranslationRequest};
pub use language::{Language, print_languages};
