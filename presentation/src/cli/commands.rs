//! CLI command definitions

use clap::{Parser, ValueEnum};
use quill_domain::Mood;
use std::path::PathBuf;

/// Output format for one-shot generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal text with markdown styling
    Text,
    /// Markdown rendered to an HTML fragment
    Html,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quill_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => quill_domain::OutputFormat::Text,
            OutputFormat::Html => quill_domain::OutputFormat::Html,
            OutputFormat::Json => quill_domain::OutputFormat::Json,
        }
    }
}

/// Tone of a one-shot generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoodArg {
    Happy,
    Sad,
    Mysterious,
    Adventurous,
    Romantic,
    Funny,
}

impl From<MoodArg> for Mood {
    fn from(mood: MoodArg) -> Self {
        match mood {
            MoodArg::Happy => Mood::Happy,
            MoodArg::Sad => Mood::Sad,
            MoodArg::Mysterious => Mood::Mysterious,
            MoodArg::Adventurous => Mood::Adventurous,
            MoodArg::Romantic => Mood::Romantic,
            MoodArg::Funny => Mood::Funny,
        }
    }
}

/// CLI arguments for quill
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about = "Streaming Gemini chat and mood-driven text generation")]
#[command(long_about = r#"
quill talks to the Gemini API in two ways:

1. One-shot generation: a prompt plus a mood produces one complete text
2. Chat: an interactive session whose replies stream in as they are written

The API key is read from GEMINI_API_KEY (configurable via provider.api_key_env).

Configuration files are loaded from (in priority order):
1. QUILL_<SECTION>__<KEY>   Environment overrides
2. --config <path>          Explicit config file
3. ./quill.toml             Project-level config
4. ~/.config/quill/config.toml   Global config

Example:
  quill "A poem about the sea" --mood mysterious
  quill "Write a limerick about Rust" --mood funny --output html
  quill --chat -m gemini-2.5-flash
"#)]
pub struct Cli {
    /// The prompt for one-shot generation (not required in chat mode)
    pub prompt: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Mood for one-shot generation
    #[arg(long, value_enum, default_value = "happy")]
    pub mood: MoodArg,

    /// Model to use (overrides chat.model and generator.model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format for one-shot generation
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_defaults() {
        let cli = Cli::parse_from(["quill", "A poem about the sea"]);
        assert_eq!(cli.prompt.as_deref(), Some("A poem about the sea"));
        assert!(!cli.chat);
        assert_eq!(cli.mood, MoodArg::Happy);
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_mood_and_output() {
        let cli = Cli::parse_from(["quill", "p", "--mood", "mysterious", "-o", "html"]);
        assert_eq!(Mood::from(cli.mood), Mood::Mysterious);
        assert_eq!(
            cli.output.map(quill_domain::OutputFormat::from),
            Some(quill_domain::OutputFormat::Html)
        );
    }

    #[test]
    fn test_unknown_mood_rejected() {
        let result = Cli::try_parse_from(["quill", "p", "--mood", "grumpy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_mode_flags() {
        let cli = Cli::parse_from(["quill", "--chat", "-m", "gemini-2.5-pro", "-q", "-vv"]);
        assert!(cli.chat);
        assert!(cli.prompt.is_none());
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::parse_from([
            "quill",
            "--config",
            "custom.toml",
            "--show-config",
            "--log-file",
            "quill.log",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.show_config);
        assert!(!cli.no_config);
        assert_eq!(cli.log_file, Some(PathBuf::from("quill.log")));
    }

    #[test]
    fn test_every_mood_arg_maps_to_distinct_mood() {
        let moods: Vec<Mood> = MoodArg::value_variants()
            .iter()
            .copied()
            .map(Mood::from)
            .collect();
        assert_eq!(moods, Mood::ALL.to_vec());
    }
}
