//! Terminal collaborator: banner, prompts, status indicator
//!
//! The interaction cycle only talks to [`UserInterface`]. Production code uses
//! [`TerminalUserInterface`] (dialoguer + indicatif + console); tests use
//! [`ScriptedUserInterface`], which replays queued answers and records what
//! would have been shown.

use crate::{constants::SPINNER_TICK_MS, error::UiError};
use console::{measure_text_width, style};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Progress widget for one fetch
///
/// Starts spinning when created and ends in exactly one terminal state.
pub trait StatusIndicator: Send + Sync {
    /// Stops with the success state
    fn success(&self, message: &str);

    /// Stops with the error state
    fn error(&self, message: &str);

    /// Stops and removes the widget
    fn clear(&self);
}

/// Everything the interaction cycle shows or asks
pub trait UserInterface: Send + Sync {
    /// Shows the startup banner
    fn banner(&self, title: &str, subtitle: &str);

    /// Single-choice menu, returns the index of the chosen item
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, UiError>;

    /// Free-text prompt, an empty answer yields `default`
    fn input(&self, prompt: &str, default: &str) -> Result<String, UiError>;

    /// Starts a spinning status indicator
    fn start_status(&self, message: &str) -> Box<dyn StatusIndicator>;

    /// Prints a plain console line
    fn print(&self, message: &str);
}

/// Production UI on top of dialoguer, indicatif and console
pub struct TerminalUserInterface {
    theme: ColorfulTheme,
}

impl Default for TerminalUserInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalUserInterface {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl UserInterface for TerminalUserInterface {
    fn banner(&self, title: &str, subtitle: &str) {
        let width = measure_text_width(title) + 4;
        let rule = "═".repeat(width);
        println!("{}", style(format!("╔{}╗", rule)).magenta().bright());
        println!(
            "{}{}{}",
            style("║  ").magenta().bright(),
            style(title).cyan().bright().bold(),
            style("  ║").magenta().bright()
        );
        println!("{}", style(format!("╚{}╝", rule)).magenta().bright());
        println!("{}", style(subtitle).italic().dim());
        println!();
    }

    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, UiError> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(style(prompt).bold().white().bright().to_string())
            .items(items)
            .default(0)
            .interact()?;
        Ok(selection)
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String, UiError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(answer)
    }

    fn start_status(&self, message: &str) -> Box<dyn StatusIndicator> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(style(message).italic().green().bright().to_string());
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Box::new(SpinnerIndicator { pb })
    }

    fn print(&self, message: &str) {
        println!("{}", message);
    }
}

struct SpinnerIndicator {
    pb: ProgressBar,
}

impl SpinnerIndicator {
    fn finish(&self, mark: String, message: &str) {
        self.pb.set_style(
            ProgressStyle::with_template("{msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        self.pb.finish_with_message(format!("{} {}", mark, message));
    }
}

impl StatusIndicator for SpinnerIndicator {
    fn success(&self, message: &str) {
        self.finish(style("✔").green().to_string(), message);
    }

    fn error(&self, message: &str) {
        self.finish(style("✖").red().to_string(), message);
    }

    fn clear(&self) {
        self.pb.finish_and_clear();
    }
}

/// Queued answer for [`ScriptedUserInterface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Choose the menu item with this label
    Select(String),
    /// Type this text at the free-text prompt (empty means "just press enter")
    Input(String),
}

/// What a [`ScriptedUserInterface`] was asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Banner(String),
    Menu(Vec<String>),
    Prompt { prompt: String, default: String },
    Status(String),
    Success(String),
    Error(String),
    Cleared,
    Printed(String),
}

type EventLog = Arc<Mutex<Vec<UiEvent>>>;

fn record(log: &EventLog, event: UiEvent) {
    if let Ok(mut events) = log.lock() {
        events.push(event);
    }
}

/// Non-interactive UI that replays answers and records output
///
/// Once the queued answers run out every prompt fails with
/// [`UiError::Closed`], which ends the interaction cycle.
pub struct ScriptedUserInterface {
    answers: Mutex<VecDeque<ScriptedAnswer>>,
    events: EventLog,
}

impl ScriptedUserInterface {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything shown so far, in order
    pub fn events(&self) -> Vec<UiEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Number of times the menu was presented
    pub fn menu_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, UiEvent::Menu(_)))
            .count()
    }

    fn next_answer(&self) -> Result<ScriptedAnswer, UiError> {
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .ok_or(UiError::Closed)
    }
}

impl UserInterface for ScriptedUserInterface {
    fn banner(&self, title: &str, _subtitle: &str) {
        record(&self.events, UiEvent::Banner(title.to_string()));
    }

    fn select(&self, _prompt: &str, items: &[&str]) -> Result<usize, UiError> {
        record(
            &self.events,
            UiEvent::Menu(items.iter().map(|item| item.to_string()).collect()),
        );
        match self.next_answer()? {
            ScriptedAnswer::Select(label) => items
                .iter()
                .position(|item| *item == label)
                .ok_or_else(|| UiError::Script(format!("no menu item {:?}", label))),
            other => Err(UiError::Script(format!("expected a selection, got {:?}", other))),
        }
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String, UiError> {
        record(
            &self.events,
            UiEvent::Prompt {
                prompt: prompt.to_string(),
                default: default.to_string(),
            },
        );
        match self.next_answer()? {
            ScriptedAnswer::Input(text) if text.is_empty() => Ok(default.to_string()),
            ScriptedAnswer::Input(text) => Ok(text),
            other => Err(UiError::Script(format!("expected text input, got {:?}", other))),
        }
    }

    fn start_status(&self, message: &str) -> Box<dyn StatusIndicator> {
        record(&self.events, UiEvent::Status(message.to_string()));
        Box::new(RecordingIndicator {
            events: self.events.clone(),
        })
    }

    fn print(&self, message: &str) {
        record(&self.events, UiEvent::Printed(message.to_string()));
    }
}

struct RecordingIndicator {
    events: EventLog,
}

impl StatusIndicator for RecordingIndicator {
    fn success(&self, message: &str) {
        record(
            &self.events,
            UiEvent::Success(console::strip_ansi_codes(message).to_string()),
        );
    }

    fn error(&self, message: &str) {
        record(
            &self.events,
            UiEvent::Error(console::strip_ansi_codes(message).to_string()),
        );
    }

    fn clear(&self) {
        record(&self.events, UiEvent::Cleared);
    }
}
