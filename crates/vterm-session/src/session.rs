//! The interactive session: input buffer, history recall, and the
//! transcript, driven by an explicit event reducer.

use vterm_commands::{CommandOutput, CommandRegistry, Services};
use vterm_types::VtermError;

use crate::transcript::{render_text, TranscriptRecord};

/// An input event from the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user edited the input buffer; carries the full new contents.
    Input(String),
    /// Enter: run the buffer as a command line.
    Submit,
    /// Up arrow: recall the previous history entry.
    RecallOlder,
    /// Down arrow: move back toward the live buffer.
    RecallNewer,
    /// Tab: complete the command name in the buffer.
    Autocomplete,
    /// Ctrl+L: clear the visible transcript, keep the buffer.
    ClearScreen,
    /// Ctrl+C: abandon the current buffer.
    Interrupt,
}

/// One terminal session over a shared command registry.
///
/// All mutation goes through [`Session::apply`], so the front end stays
/// a thin render layer over this state.
pub struct Session<'r> {
    registry: &'r CommandRegistry,
    buffer: String,
    history: Vec<String>,
    /// History recall position. `None` means the live buffer;
    /// `Some(0)` is the most recent entry, growing toward the oldest.
    cursor: Option<usize>,
    transcript: Vec<TranscriptRecord>,
}

impl<'r> Session<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self {
            registry,
            buffer: String::new(),
            history: Vec::new(),
            cursor: None,
            transcript: Vec::new(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn transcript(&self) -> &[TranscriptRecord] {
        &self.transcript
    }

    /// Apply one input event.
    pub fn apply(&mut self, event: Event, services: &Services<'_>) {
        match event {
            Event::Input(text) => {
                self.buffer = text;
                self.cursor = None;
            },
            Event::Submit => self.submit(services),
            Event::RecallOlder => self.recall_older(),
            Event::RecallNewer => self.recall_newer(),
            Event::Autocomplete => self.autocomplete(services),
            Event::ClearScreen => self.transcript.clear(),
            Event::Interrupt => {
                let line = format!("{}^C", self.buffer);
                let now = services.clock.now();
                self.transcript.push(TranscriptRecord::ok(line, "", now));
                self.buffer.clear();
                self.cursor = None;
            },
        }
    }

    fn submit(&mut self, services: &Services<'_>) {
        let line = self.buffer.trim().to_string();
        self.buffer.clear();
        self.cursor = None;
        if line.is_empty() {
            return;
        }
        let now = services.clock.now();

        // `history` reads session state, so it cannot live in the registry.
        if line.split_whitespace().next() == Some("history") {
            let listing = self.render_history();
            self.history.push(line.clone());
            self.transcript.push(TranscriptRecord::ok(line, listing, now));
            return;
        }

        match self.registry.dispatch(&line, services) {
            Ok(CommandOutput::Text(output)) => {
                self.history.push(line.clone());
                self.transcript.push(TranscriptRecord::ok(line, output, now));
            },
            Ok(CommandOutput::Clear) => {
                // Swap rather than push: the clear signal discards the
                // transcript and leaves no trace of itself.
                self.transcript = Vec::new();
            },
            Err(VtermError::UnknownCommand(name)) => {
                log::debug!("unknown command: {name}");
                self.history.push(line.clone());
                self.transcript.push(TranscriptRecord::error(
                    line,
                    format!(
                        "bash: {name}: command not found\n\
                         Type 'help' for a list of available commands."
                    ),
                    now,
                ));
            },
            Err(err) => {
                self.history.push(line.clone());
                self.transcript
                    .push(TranscriptRecord::error(line, err.to_string(), now));
            },
        }
    }

    fn render_history(&self) -> String {
        if self.history.is_empty() {
            return "No commands in history yet.".to_string();
        }
        self.history
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("  {:>3}  {cmd}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn recall_older(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.cursor {
            None => 0,
            Some(c) => (c + 1).min(self.history.len() - 1),
        };
        self.cursor = Some(next);
        self.buffer = self.history[self.history.len() - 1 - next].clone();
    }

    fn recall_newer(&mut self) {
        match self.cursor {
            None => {},
            Some(0) => {
                self.cursor = None;
                self.buffer.clear();
            },
            Some(c) => {
                let next = c - 1;
                self.cursor = Some(next);
                self.buffer = self.history[self.history.len() - 1 - next].clone();
            },
        }
    }

    fn autocomplete(&mut self, services: &Services<'_>) {
        let partial = self.buffer.trim();
        if partial.is_empty() || partial.contains(' ') {
            return;
        }
        let matches = self.registry.completions(partial);
        match matches.len() {
            0 => {},
            1 => {
                self.buffer = matches.into_iter().next().unwrap_or_default();
            },
            _ => {
                // Presentation only: shown but never part of history.
                let now = services.clock.now();
                self.transcript.push(TranscriptRecord::ok(
                    partial.to_string(),
                    matches.join("  "),
                    now,
                ));
            },
        }
    }

    /// Wipe transcript and history, back to a fresh prompt.
    pub fn reset(&mut self) {
        log::info!(
            "session reset ({} records, {} history entries discarded)",
            self.transcript.len(),
            self.history.len()
        );
        self.buffer.clear();
        self.history.clear();
        self.cursor = None;
        self.transcript.clear();
    }

    /// Plain-text export of the transcript.
    pub fn export_text(&self) -> String {
        render_text(&self.transcript)
    }

    /// JSON export of the transcript.
    pub fn export_json(&self) -> vterm_types::Result<String> {
        Ok(serde_json::to_string_pretty(&self.transcript)?)
    }
}
