use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use lingo_cli::cli::commands::translate;
use lingo_cli::cli::{Args, Command};
use lingo_cli::config::{ResolveOptions, resolve_config};
use lingo_cli::form::FormSession;
use lingo_cli::output::{self, OutputConfig};
use lingo_cli::translation::print_languages;
use lingo_cli::ui::Style;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    if let Some(Command::Languages) = args.command {
        print_languages();
        return Ok(());
    }

    // The key is mandatory; halt before any prompt is shown.
    let options = ResolveOptions {
        endpoint: args.endpoint,
        model: args.model,
    };
    let config = match resolve_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            std::process::exit(exitcode::CONFIG);
        }
    };

    let stdin_piped = !std::io::stdin().is_terminal();

    if args.text.is_some() || stdin_piped {
        let options = translate::TranslateOptions {
            text: args.text,
            to: args.to,
        };
        translate::run_translate(options, config).await
    } else {
        let mut session = FormSession::new(config)?;
        session.run().await
    }
}
