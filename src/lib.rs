//! # lingo - Multilingual Translator for the terminal
//!
//! `lingo` translates free-text sentences into a fixed set of target
//! languages by calling a Gemini-hosted, OpenAI-compatible chat-completions
//! endpoint. The model detects the source language; `lingo` only asks for
//! the target.
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="your-api-key"
//!
//! # Interactive form
//! lingo
//!
//! # One-shot
//! lingo --to urdu "Hello"
//!
//! # From a pipe
//! echo "Hello" | lingo --to french
//! ```
//!
//! The API key is mandatory; without it the program halts before showing
//! any prompt. `LINGO_ENDPOINT` and `LINGO_MODEL` (or `--endpoint` /
//! `--model`) override the built-in Gemini defaults.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Startup configuration from CLI flags and the environment.
pub mod config;

/// The interactive translation form.
pub mod form;

/// Input reading from piped stdin.
pub mod input;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// Completion client for the OpenAI-compatible endpoint.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
