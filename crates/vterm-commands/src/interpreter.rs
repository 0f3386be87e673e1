//! Command spec, registry, and dispatch logic.
//!
//! Input lines are split on whitespace; the leading token is looked up
//! case-sensitively in the registry, and the remaining tokens become the
//! handler's argument list.

use std::collections::HashMap;

use vterm_platform::{Clock, Entropy};
use vterm_types::{Result, VtermError};

/// Output produced by a command.
///
/// `Clear` is a signal to the session, not display text: the transcript
/// must be atomically discarded instead of extended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text (possibly multi-line).
    Text(String),
    /// Signal to clear the transcript.
    Clear,
}

/// Capabilities injected into computed handlers.
///
/// Handlers that embed the current time or random flavor (`date`,
/// `uptime`, `ping`, ...) draw from these instead of the system, so
/// tests can substitute fixed fakes and assert exact output.
pub struct Services<'a> {
    pub clock: &'a dyn Clock,
    pub entropy: &'a dyn Entropy,
}

/// A computed responder: a pure function of the argument list.
pub type ResponderFn = fn(&[&str], &Services<'_>) -> CommandOutput;

/// How a command produces its output.
#[derive(Clone, Copy)]
pub enum Handler {
    /// A fixed response, independent of arguments.
    Static(&'static str),
    /// A function of the argument list.
    Computed(ResponderFn),
}

/// One registered command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// What the user types (registry key, exact match).
    pub name: &'static str,
    pub handler: Handler,
}

impl CommandSpec {
    fn run(&self, args: &[&str], services: &Services<'_>) -> CommandOutput {
        match self.handler {
            Handler::Static(text) => CommandOutput::Text(text.to_string()),
            Handler::Computed(f) => f(args, services),
        }
    }
}

/// Command names resolved by the session rather than the registry.
/// They still participate in completion and the help listing.
const SESSION_BUILTINS: &[&str] = &["history"];

/// Registry of available commands with dispatch.
///
/// Populated once at startup and immutable afterwards; safe to share
/// read-only between sessions.
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandSpec>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Create a registry with every built-in command module registered.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        crate::register_builtins(&mut reg);
        reg
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.insert(spec.name, spec);
    }

    /// Whether `name` is a dispatchable command.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Parse and execute a command line.
    ///
    /// The caller must not pass a blank line; the session treats blank
    /// input as a no-op before dispatch.
    pub fn dispatch(&self, line: &str, services: &Services<'_>) -> Result<CommandOutput> {
        let mut tokens = line.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| VtermError::Command("empty command line".to_string()))?;
        let args: Vec<&str> = tokens.collect();

        // sudo re-dispatches its argument list through the registry and
        // is the only handler that needs registry access.
        if name == "sudo" {
            return Ok(self.dispatch_sudo(&args, services));
        }

        match self.commands.get(name) {
            Some(spec) => Ok(spec.run(&args, services)),
            None => {
                log::debug!("dispatch miss: {name}");
                Err(VtermError::UnknownCommand(name.to_string()))
            },
        }
    }

    fn dispatch_sudo(&self, args: &[&str], services: &Services<'_>) -> CommandOutput {
        let Some(&nested) = args.first() else {
            return CommandOutput::Text(
                "usage: sudo <command>\nRun a command with superuser privileges".to_string(),
            );
        };
        let rest = &args[1..];

        if nested == "sudo" {
            return match self.dispatch_sudo(rest, services) {
                CommandOutput::Text(text) => CommandOutput::Text(format!("[sudo] {text}")),
                CommandOutput::Clear => CommandOutput::Clear,
            };
        }

        match self.commands.get(nested) {
            Some(spec) => match spec.run(rest, services) {
                CommandOutput::Text(text) => CommandOutput::Text(format!("[sudo] {text}")),
                CommandOutput::Clear => CommandOutput::Clear,
            },
            None => CommandOutput::Text(format!("[Simulated with sudo] {}", args.join(" "))),
        }
    }

    /// All completable names (registered commands plus session builtins
    /// such as `history`), sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.extend(SESSION_BUILTINS);
        names.push("sudo");
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Sorted completions for a partial command name.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        self.names()
            .into_iter()
            .filter(|name| name.starts_with(partial))
            .map(str::to_string)
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_platform::{FixedClock, FixedEntropy};

    fn fixture() -> (FixedClock, FixedEntropy) {
        (FixedClock::default_fixture(), FixedEntropy::constant(7))
    }

    fn text(result: Result<CommandOutput>) -> String {
        match result.unwrap() {
            CommandOutput::Text(s) => s,
            CommandOutput::Clear => panic!("expected text output"),
        }
    }

    #[test]
    fn static_handler_returns_fixed_text() {
        let mut reg = CommandRegistry::new();
        reg.register(CommandSpec {
            name: "pwd",
            handler: Handler::Static("/home/admin"),
        });
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        assert_eq!(text(reg.dispatch("pwd", &services)), "/home/admin");
    }

    #[test]
    fn computed_handler_receives_args() {
        let mut reg = CommandRegistry::new();
        reg.register(CommandSpec {
            name: "echo",
            handler: Handler::Computed(|args, _| CommandOutput::Text(args.join(" "))),
        });
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        assert_eq!(
            text(reg.dispatch("echo hello world", &services)),
            "hello world"
        );
        assert_eq!(
            text(reg.dispatch("echo   hello    world", &services)),
            "hello world"
        );
    }

    #[test]
    fn unknown_command_is_an_error() {
        let reg = CommandRegistry::with_builtins();
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        match reg.dispatch("unknowncmd123", &services) {
            Err(VtermError::UnknownCommand(name)) => assert_eq!(name, "unknowncmd123"),
            other => panic!("expected UnknownCommand, got {other:?}"),
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let reg = CommandRegistry::with_builtins();
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        assert!(reg.dispatch("LS", &services).is_err());
        assert!(reg.dispatch("ls", &services).is_ok());
    }

    #[test]
    fn clear_signals_instead_of_printing() {
        let reg = CommandRegistry::with_builtins();
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        assert_eq!(reg.dispatch("clear", &services).unwrap(), CommandOutput::Clear);
    }

    #[test]
    fn sudo_prefixes_nested_output() {
        let reg = CommandRegistry::with_builtins();
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        let out = text(reg.dispatch("sudo whoami", &services));
        assert!(out.starts_with("[sudo] "));
    }

    #[test]
    fn sudo_unknown_nested_command() {
        let reg = CommandRegistry::with_builtins();
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        let out = text(reg.dispatch("sudo frobnicate now", &services));
        assert_eq!(out, "[Simulated with sudo] frobnicate now");
    }

    #[test]
    fn sudo_without_args_prints_usage() {
        let reg = CommandRegistry::with_builtins();
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        assert!(text(reg.dispatch("sudo", &services)).contains("usage: sudo"));
    }

    #[test]
    fn sudo_clear_passes_the_signal_through() {
        let reg = CommandRegistry::with_builtins();
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        assert_eq!(
            reg.dispatch("sudo clear", &services).unwrap(),
            CommandOutput::Clear
        );
    }

    #[test]
    fn register_replaces_existing_command() {
        let mut reg = CommandRegistry::new();
        reg.register(CommandSpec {
            name: "x",
            handler: Handler::Static("one"),
        });
        reg.register(CommandSpec {
            name: "x",
            handler: Handler::Static("two"),
        });
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        assert_eq!(text(reg.dispatch("x", &services)), "two");
    }

    #[test]
    fn completions_are_sorted_prefix_matches() {
        let reg = CommandRegistry::with_builtins();
        let matches = reg.completions("ch");
        assert_eq!(matches, vec!["chgrp", "chmod", "chown"]);
    }

    #[test]
    fn completions_include_session_builtins() {
        let reg = CommandRegistry::with_builtins();
        assert!(reg.completions("hist").contains(&"history".to_string()));
        assert!(reg.completions("sud").contains(&"sudo".to_string()));
    }

    #[test]
    fn completions_no_match_is_empty() {
        let reg = CommandRegistry::with_builtins();
        assert!(reg.completions("xyz").is_empty());
    }

    #[test]
    fn every_registered_command_produces_nonempty_output() {
        let reg = CommandRegistry::with_builtins();
        let (clock, entropy) = fixture();
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        for name in reg.names() {
            if SESSION_BUILTINS.contains(&name) {
                continue;
            }
            match reg.dispatch(name, &services).unwrap() {
                CommandOutput::Text(out) => {
                    // `echo` with no arguments legitimately prints nothing.
                    if name != "echo" {
                        assert!(!out.is_empty(), "{name} produced empty output");
                    }
                },
                CommandOutput::Clear => assert_eq!(name, "clear"),
            }
        }
    }
}
