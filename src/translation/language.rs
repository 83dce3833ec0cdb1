//! The closed set of target languages.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// A target language the translator can be asked for.
///
/// The set is fixed; the remote model handles source-language detection,
/// so only the target side is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    English,
    Urdu,
    Arabic,
    French,
    Hindi,
    Chinese,
    German,
}

impl Language {
    /// All supported target languages, in display order.
    pub const ALL: [Self; 7] = [
        Self::English,
        Self::Urdu,
        Self::Arabic,
        Self::French,
        Self::Hindi,
        Self::Chinese,
        Self::German,
    ];

    /// The English name of the language, as sent to the model.
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Urdu => "Urdu",
            Self::Arabic => "Arabic",
            Self::French => "French",
            Self::Hindi => "Hindi",
            Self::Chinese => "Chinese",
            Self::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown target language: '{s}'\n\n\
                     Run 'lingo languages' to see the supported set."
                )
            })
    }
}

/// Prints the supported target languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages"));
    for lang in Language::ALL {
        println!("  {}", Style::value(lang.name()));
    }
}
