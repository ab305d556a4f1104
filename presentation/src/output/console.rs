//! Console output formatter for transcripts and generation results

use colored::Colorize;
use quill_domain::render::markdown::render;
use quill_domain::{GenerationOutput, MarkupStyle, Message, Model, Mood, Sender, to_html};
use serde::Serialize;

/// Shown in place of a successful but empty generation
pub const EMPTY_RESULT: &str = "Nothing was generated.";

/// Turn ANSI colors off process-wide when `enabled` is false
pub fn configure_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Formats transcripts and generation results for console display
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    style: MarkupStyle,
}

/// JSON shape of a one-shot generation
#[derive(Debug, Serialize)]
struct GenerationReport<'a> {
    model: &'a Model,
    mood: Mood,
    prompt: &'a str,
    result: &'a GenerationOutput,
}

impl ConsoleFormatter {
    /// Markdown is styled with ANSI codes when `color` is set, stripped otherwise.
    pub fn new(color: bool) -> Self {
        let style = if color {
            MarkupStyle::TERMINAL
        } else {
            MarkupStyle::PLAIN
        };
        Self { style }
    }

    /// Render model text for the terminal
    pub fn markdown(&self, text: &str) -> String {
        render(text, &self.style)
    }

    /// Format a generation result as terminal text
    pub fn format_generation(&self, output: &GenerationOutput) -> String {
        match output {
            GenerationOutput::Idle => String::new(),
            GenerationOutput::Text(text) => self.markdown(text),
            GenerationOutput::Empty => EMPTY_RESULT.dimmed().to_string(),
            GenerationOutput::Error(e) => format!("{} {}", "Error:".red().bold(), e),
        }
    }

    /// Format a generation result as an HTML fragment
    pub fn format_html(output: &GenerationOutput) -> String {
        match output {
            GenerationOutput::Idle => String::new(),
            GenerationOutput::Text(text) => to_html(text),
            GenerationOutput::Empty => format!("<p class=\"empty\">{EMPTY_RESULT}</p>"),
            GenerationOutput::Error(e) => format!("<p class=\"error\">Error: {e}</p>"),
        }
    }

    /// Format a generation result as JSON
    pub fn format_json(
        model: &Model,
        mood: Mood,
        prompt: &str,
        output: &GenerationOutput,
    ) -> String {
        let report = GenerationReport {
            model,
            mood,
            prompt,
            result: output,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Speaker label shown before a message
    pub fn speaker(sender: Sender) -> String {
        match sender {
            Sender::User => "you".cyan().bold().to_string(),
            Sender::Model => "model".yellow().bold().to_string(),
        }
    }

    /// Format one transcript message
    pub fn format_message(&self, message: &Message) -> String {
        let body = match message.sender {
            Sender::User => message.text.clone(),
            Sender::Model => self.markdown(&message.text),
        };
        format!("{}\n{}", Self::speaker(message.sender), Self::indent(&body, "  "))
    }

    /// Format the whole transcript
    pub fn format_transcript(&self, messages: &[Message]) -> String {
        if messages.is_empty() {
            return "(no messages yet)".dimmed().to_string();
        }
        messages
            .iter()
            .map(|message| self.format_message(message))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn header(title: &str) -> String {
        let line = "─".repeat(45);
        format!("{}\n{:^45}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ConsoleFormatter {
        colored::control::set_override(false);
        ConsoleFormatter::new(false)
    }

    #[test]
    fn test_plain_markdown_strips_markers() {
        assert_eq!(
            plain().markdown("**bold** and [docs](https://x.test)"),
            "bold and docs (https://x.test)"
        );
    }

    #[test]
    fn test_terminal_markdown_uses_ansi() {
        let formatter = ConsoleFormatter::new(true);
        assert_eq!(formatter.markdown("**a**"), "\x1b[1ma\x1b[22m");
    }

    #[test]
    fn test_format_generation_states() {
        let formatter = plain();
        assert_eq!(formatter.format_generation(&GenerationOutput::Idle), "");
        assert_eq!(
            formatter.format_generation(&GenerationOutput::Text("*hi*".into())),
            "hi"
        );
        assert_eq!(
            formatter.format_generation(&GenerationOutput::Empty),
            EMPTY_RESULT
        );
        assert_eq!(
            formatter.format_generation(&GenerationOutput::Error("Timeout".into())),
            "Error: Timeout"
        );
    }

    #[test]
    fn test_format_html() {
        assert_eq!(
            ConsoleFormatter::format_html(&GenerationOutput::Text("**a**\nb".into())),
            "<strong>a</strong><br>b"
        );
        assert_eq!(
            ConsoleFormatter::format_html(&GenerationOutput::Empty),
            "<p class=\"empty\">Nothing was generated.</p>"
        );
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(
            &Model::Gemini15Flash,
            Mood::Sad,
            "rain",
            &GenerationOutput::Text("Grey skies.".into()),
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["model"], "gemini-1.5-flash");
        assert_eq!(value["mood"], "sad");
        assert_eq!(value["result"]["state"], "text");
        assert_eq!(value["result"]["text"], "Grey skies.");
    }

    #[test]
    fn test_format_transcript() {
        let formatter = plain();
        let messages = vec![Message::user("Hi"), Message::model("**Hello**\nthere")];
        assert_eq!(
            formatter.format_transcript(&messages),
            "you\n  Hi\n\nmodel\n  Hello\n  there"
        );
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
