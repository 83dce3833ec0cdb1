use anyhow::{Result, bail};
use std::io::{self, Write};

use crate::config::Config;
use crate::input::InputReader;
use crate::translation::{CompletionClient, Language, TranslationRequest};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub text: Option<String>,
    pub to: Option<Language>,
}

/// One-shot mode: a single request, the bare translation on stdout.
///
/// Banners and the spinner stay on stderr so the output can be piped.
pub async fn run_translate(options: TranslateOptions, config: Config) -> Result<()> {
    let Some(target) = options.to else {
        bail!(
            "Missing target language\n\n\
             Pass it via: lingo --to <language> \"text\"\n\
             Run 'lingo languages' to see the supported set."
        );
    };

    let source_text = match options.text {
        Some(text) => text,
        None => InputReader::read_stdin()?,
    };

    if source_text.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    let client = CompletionClient::new(config.endpoint.clone(), config.api_key.clone())?;

    let request = TranslationRequest {
        source_text,
        target_language: target,
        model: config.model,
    };

    let spinner = Spinner::new("Translating...");
    let result = client.translate(&request).await;
    spinner.stop();

    let translation = result?;
    println!("{translation}");
    io::stdout().flush()?;

    Ok(())
}
