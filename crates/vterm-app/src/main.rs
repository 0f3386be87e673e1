//! Line-based demo shell over the simulated terminal session.
//!
//! Each stdin line is submitted as a command; `:`-prefixed lines are
//! shell actions (`:help` lists them) rather than simulated commands.

mod config;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use vterm_commands::{CommandRegistry, Services};
use vterm_platform::DesktopPlatform;
use vterm_session::{Event, Session};

use crate::config::Config;

const SHELL_HELP: &str = "\
Shell actions:
  :copy    Print the transcript as plain text
  :json    Print the transcript as JSON
  :reset   Clear transcript and history
  :help    Show this message
  :quit    Exit

Anything else is run as a simulated command. Try 'help'.";

fn banner(config: &Config) -> String {
    format!(
        "╔══════════════════════════════════════════╗\n\
         ║  VPS Terminal Simulator                  ║\n\
         ║  Logged in as {:<26} ║\n\
         ╚══════════════════════════════════════════╝\n\
         Type 'help' for commands, ':help' for shell actions.",
        format!("{}@{}", config.persona.user, config.persona.host)
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load(Path::new("vterm.toml"))?;
    log::info!("starting session for {}", config.prompt());

    let registry = CommandRegistry::with_builtins();
    let platform = DesktopPlatform::new();
    let services = Services {
        clock: &platform,
        entropy: &platform,
    };
    let mut session = Session::new(&registry);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.banner {
        writeln!(out, "{}", banner(&config))?;
    }

    let prompt = config.prompt();
    write!(out, "{prompt} ")?;
    out.flush()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            ":quit" | ":exit" => break,
            ":help" => writeln!(out, "{SHELL_HELP}")?,
            ":copy" => writeln!(out, "{}", session.export_text())?,
            ":json" => writeln!(out, "{}", session.export_json()?)?,
            ":reset" => {
                session.reset();
                writeln!(out, "Session reset.")?;
            },
            _ => {
                let before = session.transcript().len();
                session.apply(Event::Input(line.clone()), &services);
                session.apply(Event::Submit, &services);
                // A shrinking transcript means the command was `clear`.
                if session.transcript().len() > before {
                    if let Some(record) = session.transcript().last() {
                        writeln!(out, "{}", record.output)?;
                    }
                }
            },
        }

        write!(out, "{prompt} ")?;
        out.flush()?;
    }

    Ok(())
}
