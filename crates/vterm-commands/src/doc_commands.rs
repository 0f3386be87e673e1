//! Documentation commands: help, man, which, whereis.

use crate::help_index;
use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_doc_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "help",
        handler: Handler::Computed(help),
    });
    reg.register(CommandSpec {
        name: "man",
        handler: Handler::Computed(man),
    });
    reg.register(CommandSpec {
        name: "which",
        handler: Handler::Computed(which),
    });
    reg.register(CommandSpec {
        name: "whereis",
        handler: Handler::Computed(whereis),
    });
}

/// Maximum description length shown in the `help` listing.
const HELP_DESC_WIDTH: usize = 45;

fn help(_args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let mut out = String::new();
    out.push_str("╔══════════════════════════════════════════════════════════════════╗\n");
    out.push_str("║                       VPS TERMINAL HELP                          ║\n");
    out.push_str("╚══════════════════════════════════════════════════════════════════╝\n\n");

    for (title, names) in help_index::CATEGORIES {
        out.push_str(title);
        out.push('\n');
        out.push_str(&"─".repeat(50));
        out.push('\n');
        for name in *names {
            let desc = help_index::description(name).unwrap_or("No description");
            let short: String = if desc.chars().count() > HELP_DESC_WIDTH {
                let cut: String = desc.chars().take(HELP_DESC_WIDTH - 3).collect();
                format!("{cut}...")
            } else {
                desc.to_string()
            };
            out.push_str(&format!("  {name:<15} {short}\n"));
        }
        out.push('\n');
    }

    out.push_str("Tips:\n");
    out.push_str("  - Type 'man <command>' for details on one command\n");
    out.push_str("  - Use the Up/Down arrows to navigate history\n");
    out.push_str("  - Press Tab to auto-complete\n");
    CommandOutput::Text(out)
}

fn man(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&name) = args.first() else {
        return CommandOutput::Text(
            "What manual page do you want?\nUsage: man <command>".to_string(),
        );
    };
    match help_index::description(name) {
        Some(desc) => CommandOutput::Text(format!(
            "╔══════════════════════════════════════════════════════════════╗\n\
             ║  MANUAL: {:<50}  ║\n\
             ╚══════════════════════════════════════════════════════════════╝\n\
             \n\
             NAME\n    {name} - {desc}\n\
             \n\
             SYNOPSIS\n    {name} [OPTIONS]... [ARGUMENTS]...\n\
             \n\
             DESCRIPTION\n    {desc}\n\
             \n\
             \x20   This is a simulated manual page. For complete documentation,\n\
             \x20   consult the official docs or run the command on a real system.\n\
             \n\
             SEE ALSO\n    help - List all available commands",
            name.to_uppercase()
        )),
        None => CommandOutput::Text(format!("No manual entry for {name}")),
    }
}

fn which(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&name) = args.first() else {
        return CommandOutput::Text("Usage: which <command>".to_string());
    };
    let paths: &[(&str, &str)] = &[
        ("bash", "/usr/bin/bash"),
        ("docker", "/usr/bin/docker"),
        ("nginx", "/usr/sbin/nginx"),
        ("mysql", "/usr/bin/mysql"),
        ("php", "/usr/bin/php"),
        ("node", "/usr/bin/node"),
        ("npm", "/usr/bin/npm"),
        ("git", "/usr/bin/git"),
        ("python3", "/usr/bin/python3"),
    ];
    match paths.iter().find(|(n, _)| *n == name) {
        Some((_, path)) => CommandOutput::Text(path.to_string()),
        None => CommandOutput::Text(format!("{name} not found")),
    }
}

fn whereis(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&name) = args.first() else {
        return CommandOutput::Text("Usage: whereis <command>".to_string());
    };
    CommandOutput::Text(format!(
        "{name}: /usr/bin/{name} /usr/share/man/man1/{name}.1.gz"
    ))
}
