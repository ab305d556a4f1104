//! Slash commands understood by the chat REPL

use quill_domain::Mood;

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    /// Run the one-shot generator without touching the chat transcript
    Generate { mood: Mood, prompt: String },
    /// Print the whole transcript
    Transcript,
    /// Start a fresh conversation
    Reset,
    /// Show the models in use
    Model,
    /// List the models the service offers
    Models,
    /// Malformed or unknown command, with a message for the user
    Invalid(String),
}

/// One line read by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput<'a> {
    /// Empty or whitespace-only
    Blank,
    Command(ReplCommand),
    /// Chat text, exactly as typed
    Message(&'a str),
}

impl<'a> ReplInput<'a> {
    /// Classify a line. Surrounding whitespace decides nothing but is kept
    /// in chat messages.
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            ReplInput::Blank
        } else if trimmed.starts_with('/') {
            ReplInput::Command(ReplCommand::parse(trimmed))
        } else {
            ReplInput::Message(line)
        }
    }
}

impl ReplCommand {
    /// Parse a line starting with `/`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/transcript" | "/t" => ReplCommand::Transcript,
            "/reset" | "/clear" => ReplCommand::Reset,
            "/model" => ReplCommand::Model,
            "/models" => ReplCommand::Models,
            "/generate" | "/g" => Self::parse_generate(rest),
            _ => ReplCommand::Invalid(format!("Unknown command: {name}")),
        }
    }

    fn parse_generate(args: &str) -> Self {
        let Some((mood, prompt)) = args.split_once(char::is_whitespace) else {
            return ReplCommand::Invalid(Self::generate_usage());
        };
        match mood.parse::<Mood>() {
            Ok(mood) => ReplCommand::Generate {
                mood,
                prompt: prompt.trim().to_string(),
            },
            Err(e) => ReplCommand::Invalid(format!("{e}\n{}", Self::generate_usage())),
        }
    }

    fn generate_usage() -> String {
        let moods: Vec<&str> = Mood::ALL.iter().map(Mood::as_str).collect();
        format!("Usage: /generate <{}> <prompt>", moods.join("|"))
    }
}
