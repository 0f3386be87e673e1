//! Small shell utilities: clear, echo, date, grep, and archive tools.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_util_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "clear",
        handler: Handler::Computed(|_, _| CommandOutput::Clear),
    });
    reg.register(CommandSpec {
        name: "echo",
        handler: Handler::Computed(echo),
    });
    reg.register(CommandSpec {
        name: "date",
        handler: Handler::Computed(date),
    });
    reg.register(CommandSpec {
        name: "grep",
        handler: Handler::Computed(grep),
    });
    reg.register(CommandSpec {
        name: "tar",
        handler: Handler::Computed(tar),
    });
    reg.register(CommandSpec {
        name: "zip",
        handler: Handler::Computed(zip),
    });
    reg.register(CommandSpec {
        name: "unzip",
        handler: Handler::Computed(unzip),
    });
}

fn echo(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    CommandOutput::Text(args.join(" "))
}

fn date(_args: &[&str], services: &Services<'_>) -> CommandOutput {
    CommandOutput::Text(format!("{} UTC", services.clock.now()))
}

fn grep(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&pattern) = args.first() else {
        return CommandOutput::Text(
            "Usage: grep <pattern> <file>\nSearch for pattern in file".to_string(),
        );
    };
    let target = args.get(1).copied().unwrap_or("input");
    CommandOutput::Text(format!(
        "[Simulated] Searching for \"{pattern}\" in {target}...\n\
         Line 10: {pattern} found here\n\
         Line 25: another {pattern} match"
    ))
}

const TAR_HELP: &str = "\
tar: Archive utility

Usage: tar [OPTIONS] [FILES]

Common options:
  -c    Create archive
  -x    Extract archive
  -v    Verbose
  -f    Specify filename
  -z    Gzip compression
  -j    Bzip2 compression

Examples:
  tar -czvf archive.tar.gz folder/    # Create
  tar -xzvf archive.tar.gz            # Extract
  tar -tvf archive.tar.gz             # List contents";

fn tar(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        return CommandOutput::Text(TAR_HELP.to_string());
    }
    let flags = args.concat();
    if flags.contains('c') {
        CommandOutput::Text("[Simulated] Creating archive...".to_string())
    } else if flags.contains('x') {
        CommandOutput::Text("[Simulated] Extracting archive...".to_string())
    } else {
        CommandOutput::Text(format!("tar {} - [Simulated]", args.join(" ")))
    }
}

fn zip(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text("Usage: zip <archive.zip> <files>".to_string());
    }
    CommandOutput::Text(format!("[Simulated] adding: {}", args[1..].join(", ")))
}

fn unzip(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.first() {
        Some(archive) => CommandOutput::Text(format!(
            "[Simulated] Archive: {archive}\n\
             \x20 extracting: file1.txt\n\
             \x20 extracting: file2.txt"
        )),
        None => CommandOutput::Text("Usage: unzip <archive.zip>".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_platform::{FixedClock, FixedEntropy};

    fn run(f: crate::ResponderFn, args: &[&str]) -> String {
        let clock = FixedClock::default_fixture();
        let entropy = FixedEntropy::constant(1);
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        match f(args, &services) {
            CommandOutput::Text(s) => s,
            CommandOutput::Clear => panic!("expected text"),
        }
    }

    #[test]
    fn echo_joins_args_with_single_spaces() {
        assert_eq!(run(echo, &["hello", "world"]), "hello world");
        assert_eq!(run(echo, &[]), "");
    }

    #[test]
    fn date_reads_the_injected_clock() {
        assert_eq!(run(date, &[]), "2024-01-15 10:00:00 UTC");
    }

    #[test]
    fn grep_embeds_pattern_and_file() {
        let out = run(grep, &["error", "app.log"]);
        assert!(out.contains("Searching for \"error\" in app.log"));
        assert!(out.contains("Line 25: another error match"));
    }

    #[test]
    fn tar_create_vs_extract() {
        assert_eq!(run(tar, &["-czvf", "a.tar.gz", "dir/"]), "[Simulated] Creating archive...");
        assert_eq!(run(tar, &["-xzvf", "a.tar.gz"]), "[Simulated] Extracting archive...");
        assert!(run(tar, &[]).contains("Archive utility"));
    }

    #[test]
    fn zip_lists_added_files() {
        assert_eq!(
            run(zip, &["backup.zip", "a.txt", "b.txt"]),
            "[Simulated] adding: a.txt, b.txt"
        );
        assert!(run(zip, &["backup.zip"]).contains("Usage: zip"));
    }

    #[test]
    fn unzip_extracts_placeholder_files() {
        assert!(run(unzip, &["backup.zip"]).contains("Archive: backup.zip"));
    }
}
