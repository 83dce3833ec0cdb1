use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Select, Text};

use super::command::{SlashCommand, SlashCommandCompleter, Submission, parse_submission};
use super::ui;
use crate::config::Config;
use crate::translation::{CompletionClient, Language, TranslationRequest};
use crate::ui::Spinner;

/// The interactive translation form.
///
/// A prompt-driven loop: one sentence, one target language, one request.
/// Nothing is carried over between triggers except the last selected
/// target language (cursor convenience only).
pub struct FormSession {
    config: Config,
    client: CompletionClient,
    last_target: Language,
}

impl FormSession {
    /// Creates a new session from the resolved configuration.
    pub fn new(config: Config) -> Result<Self> {
        let client = CompletionClient::new(config.endpoint.clone(), config.api_key.clone())?;
        Ok(Self {
            config,
            client,
            last_target: Language::English,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(
                    "Type a sentence to translate, /help for commands, Ctrl+C to quit",
                )
                .prompt();

            match input {
                Ok(line) => match parse_submission(&line) {
                    Submission::Empty => {
                        ui::print_warning("Please enter a sentence to translate.");
                    }
                    Submission::Command(cmd) => {
                        if !self.handle_command(&cmd) {
                            break;
                        }
                    }
                    Submission::Sentence(text) => {
                        let Some(target) = self.select_target(render_config)? else {
                            // Selection cancelled; back to the input prompt
                            continue;
                        };
                        self.translate_and_print(&text, target).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&self, cmd: &SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn select_target(&mut self, render_config: RenderConfig<'static>) -> Result<Option<Language>> {
        let starting_cursor = Language::ALL
            .iter()
            .position(|lang| *lang == self.last_target)
            .unwrap_or(0);

        let selection = Select::new("Translate to:", Language::ALL.to_vec())
            .with_render_config(render_config)
            .with_starting_cursor(starting_cursor)
            .prompt();

        match selection {
            Ok(lang) => {
                self.last_target = lang;
                Ok(Some(lang))
            }
            Err(
                inquire::InquireError::OperationCanceled
                | inquire::InquireError::OperationInterrupted,
            ) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// One trigger: Idle -> Waiting -> Idle.
    ///
    /// A request failure is rendered and swallowed; the session stays up
    /// and the next trigger starts fresh.
    async fn translate_and_print(&self, text: &str, target: Language) {
        let request = TranslationRequest {
            source_text: text.to_string(),
            target_language: target,
            model: self.config.model.clone(),
        };

        let spinner = Spinner::new("Translating...");
        let result = self.client.translate(&request).await;
        spinner.stop();

        match result {
            Ok(translation) => ui::print_translation(target, &translation),
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new_from_config() {
        let config = Config {
            api_key: "test-key".to_string(),
            endpoint: "http://localhost:11434/v1".to_string(),
            model: "gemma3:12b".to_string(),
        };

        let session = FormSession::new(config).unwrap();
        assert_eq!(session.last_target, Language::English);
        assert_eq!(session.config.model, "gemma3:12b");
    }
}
