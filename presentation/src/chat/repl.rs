//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::{ReplCommand, ReplInput};
use crate::{ConsoleFormatter, ProgressReporter, StreamPrinter};
use colored::Colorize;
use quill_application::{
    ChatOutcome, ChatSessionUseCase, ChatState, GenerateUseCase, GeneratorState, LlmGateway,
    PanelConfig,
};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::sync::Arc;
use tracing::debug;

/// Interactive chat REPL
///
/// Hosts both panels: free text goes to the streaming chat, `/generate`
/// runs the one-shot generator. The two never share state.
pub struct ChatRepl<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    chat: ChatSessionUseCase<G>,
    chat_state: ChatState,
    generator: GenerateUseCase<G>,
    generator_state: GeneratorState,
    formatter: ConsoleFormatter,
    show_progress: bool,
}

impl<G: LlmGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<G>, chat: PanelConfig, generator: PanelConfig) -> Self {
        Self {
            chat: ChatSessionUseCase::new(Arc::clone(&gateway), chat),
            generator: GenerateUseCase::new(Arc::clone(&gateway), generator),
            gateway,
            chat_state: ChatState::new(),
            generator_state: GeneratorState::new(),
            formatter: ConsoleFormatter::new(true),
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_formatter(mut self, formatter: ConsoleFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("quill".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => match ReplInput::parse(&line) {
                    ReplInput::Blank => continue,
                    ReplInput::Command(command) => {
                        if self.handle_command(command).await {
                            break;
                        }
                    }
                    ReplInput::Message(text) => self.process_message(text).await,
                },
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header("quill - Chat Mode"));
        println!();
        println!("Chat model:      {}", self.chat.model());
        println!("Generator model: {}", self.generator.model());
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?               - Show this help");
        println!("  /generate <mood> <prompt>   - One-shot generation (does not touch the chat)");
        println!("  /transcript, /t             - Show the conversation so far");
        println!("  /reset, /clear              - Start a fresh conversation");
        println!("  /model                      - Show current models");
        println!("  /models                     - List models offered by the service");
        println!("  /quit, /exit, /q            - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Generate { mood, prompt } => {
                self.process_generation(mood, &prompt).await;
            }
            ReplCommand::Transcript => {
                println!();
                println!(
                    "{}",
                    self.formatter.format_transcript(self.chat_state.messages())
                );
                println!();
            }
            ReplCommand::Reset => {
                self.chat_state.reset();
                self.chat.drop_session();
                println!("{}", "Conversation cleared.".dimmed());
            }
            ReplCommand::Model => {
                println!();
                println!("Chat:      {}", self.chat.model());
                println!("Generator: {}", self.generator.model());
                println!();
            }
            ReplCommand::Models => self.list_models().await,
            ReplCommand::Invalid(message) => {
                println!("{}", message);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_message(&mut self, text: &str) {
        println!();
        let printer =
            StreamPrinter::new(self.chat.model().to_string()).with_progress(self.show_progress);
        let outcome = self
            .chat
            .send_with_observer(&mut self.chat_state, text, &printer)
            .await;
        debug!(?outcome, "Chat exchange finished");
        if outcome != ChatOutcome::Rejected {
            println!();
        }
    }

    async fn process_generation(&mut self, mood: quill_domain::Mood, prompt: &str) {
        println!();
        let progress = ProgressReporter::new();
        if self.show_progress {
            progress.start(format!("Generating ({mood})..."));
        }
        let result = self
            .generator
            .generate(&mut self.generator_state, prompt, mood)
            .await;
        progress.stop();

        match result {
            Ok(()) => println!(
                "{}",
                self.formatter
                    .format_generation(self.generator_state.output())
            ),
            Err(e) if e.is_rejection() => println!("{}", e.to_string().dimmed()),
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
        println!();
    }

    async fn list_models(&self) {
        match self.gateway.available_models().await {
            Ok(models) => {
                println!();
                println!("Available models:");
                for model in models {
                    println!("  - {}", model);
                }
                println!();
            }
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }
}
