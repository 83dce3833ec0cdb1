use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit the translator"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone)]
pub enum SlashCommand {
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// One submission from the input prompt.
///
/// `Empty` covers whitespace-only submissions; the session warns and makes
/// no network call for those.
#[derive(Debug)]
pub enum Submission {
    Sentence(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_submission(input: &str) -> Submission {
    let input = input.trim();

    if input.is_empty() {
        return Submission::Empty;
    }

    input.strip_prefix('/').map_or_else(
        || Submission::Sentence(input.to_string()),
        parse_slash_command,
    )
}

fn parse_slash_command(cmd: &str) -> Submission {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("config") => Submission::Command(SlashCommand::Config),
        Some("help") => Submission::Command(SlashCommand::Help),
        Some("quit" | "exit" | "q") => Submission::Command(SlashCommand::Quit),
        _ => Submission::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_submissions() {
        assert!(matches!(parse_submission(""), Submission::Empty));
        assert!(matches!(parse_submission("   "), Submission::Empty));
        assert!(matches!(parse_submission("\t \n"), Submission::Empty));
    }

    #[test]
    fn test_sentence_submission() {
        match parse_submission("Hello, world!") {
            Submission::Sentence(text) => assert_eq!(text, "Hello, world!"),
            _ => panic!("Expected Submission::Sentence"),
        }
    }

    #[test]
    fn test_sentence_is_trimmed() {
        match parse_submission("  Bonjour  ") {
            Submission::Sentence(text) => assert_eq!(text, "Bonjour"),
            _ => panic!("Expected Submission::Sentence"),
        }
    }

    #[test]
    fn test_config_command() {
        assert!(matches!(
            parse_submission("/config"),
            Submission::Command(SlashCommand::Config)
        ));
    }

    #[test]
    fn test_help_command() {
        assert!(matches!(
            parse_submission("/help"),
            Submission::Command(SlashCommand::Help)
        ));
    }

    #[test]
    fn test_quit_commands() {
        for input in ["/quit", "/exit", "/q"] {
            assert!(matches!(
                parse_submission(input),
                Submission::Command(SlashCommand::Quit)
            ));
        }
    }

    #[test]
    fn test_unknown_command() {
        match parse_submission("/frobnicate") {
            Submission::Command(SlashCommand::Unknown(cmd)) => assert_eq!(cmd, "frobnicate"),
            _ => panic!("Expected Submission::Command(SlashCommand::Unknown)"),
        }
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), 3); // /config, /help, /quit
    }

    #[test]
    fn test_completer_filters_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/c").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/config"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/help  Show available commands".to_string();
        let completion = completer.get_completion("/h", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/help".to_string()));
    }
}
