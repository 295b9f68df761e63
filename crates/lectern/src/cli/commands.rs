//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use lectern_core::{MAX_TOKENS, SummaryStyle, TEMPERATURE};
use std::path::PathBuf;

/// Lecture notes summarizer backed by a hosted language model.
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(about = "Summarize lecture notes with a hosted language model")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (default: ./lectern.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the summarizer form over HTTP
    Serve {
        /// Address to listen on (overrides configuration)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Summarize notes from a file or standard input
    Summarize {
        /// Summary style
        #[arg(short, long, value_enum, default_value_t = StyleArg::Detailed)]
        style: StyleArg,

        /// Maximum tokens to generate
        #[arg(long, default_value_t = MAX_TOKENS.default as u32, value_parser = parse_max_tokens)]
        max_tokens: u32,

        /// Sampling temperature
        #[arg(long, default_value_t = TEMPERATURE.default as f32, value_parser = parse_temperature)]
        temperature: f32,

        /// Notes file; reads standard input when omitted
        file: Option<PathBuf>,
    },
}

/// Summary style as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Short,
    Detailed,
    ExamFocused,
}

impl From<StyleArg> for SummaryStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Short => SummaryStyle::Short,
            StyleArg::Detailed => SummaryStyle::Detailed,
            StyleArg::ExamFocused => SummaryStyle::ExamFocused,
        }
    }
}

fn parse_max_tokens(raw: &str) -> Result<u32, String> {
    let value: u32 = raw.parse().map_err(|_| format!("'{}' is not an integer", raw))?;
    let (min, max) = (MAX_TOKENS.min as u32, MAX_TOKENS.max as u32);
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between {} and {}", min, max))
    }
}

fn parse_temperature(raw: &str) -> Result<f32, String> {
    let value: f64 = raw.parse().map_err(|_| format!("'{}' is not a number", raw))?;
    if (TEMPERATURE.min..=TEMPERATURE.max).contains(&value) {
        Ok(value as f32)
    } else {
        Err(format!(
            "must be between {} and {}",
            TEMPERATURE.min, TEMPERATURE.max
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_defaults_match_form() {
        let cli = Cli::try_parse_from(["lectern", "summarize"]).unwrap();
        match cli.command {
            Commands::Summarize {
                style,
                max_tokens,
                temperature,
                file,
            } => {
                assert_eq!(style, StyleArg::Detailed);
                assert_eq!(max_tokens, 350);
                assert!((temperature - 0.4).abs() < 1e-6);
                assert!(file.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn summarize_accepts_style_and_file() {
        let cli = Cli::try_parse_from([
            "lectern",
            "summarize",
            "--style",
            "exam-focused",
            "--max-tokens",
            "800",
            "notes.txt",
        ])
        .unwrap();
        match cli.command {
            Commands::Summarize { style, file, .. } => {
                assert_eq!(SummaryStyle::from(style), SummaryStyle::ExamFocused);
                assert_eq!(file, Some(PathBuf::from("notes.txt")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn out_of_range_sliders_are_rejected() {
        assert!(Cli::try_parse_from(["lectern", "summarize", "--max-tokens", "32"]).is_err());
        assert!(Cli::try_parse_from(["lectern", "summarize", "--temperature", "2.0"]).is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["lectern", "serve", "--config", "alt.toml", "--bind", "0.0.0.0:80"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Commands::Serve { bind: Some(_) }));
    }
}
