//! User, group, and permission commands.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_access_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "whoami",
        handler: Handler::Static("admin"),
    });
    reg.register(CommandSpec {
        name: "id",
        handler: Handler::Static(
            "uid=1000(admin) gid=1000(admin) groups=1000(admin),27(sudo),998(docker),33(www-data)",
        ),
    });
    reg.register(CommandSpec {
        name: "groups",
        handler: Handler::Static("admin sudo docker www-data adm"),
    });
    reg.register(CommandSpec {
        name: "chmod",
        handler: Handler::Computed(chmod),
    });
    reg.register(CommandSpec {
        name: "chown",
        handler: Handler::Computed(chown),
    });
    reg.register(CommandSpec {
        name: "chgrp",
        handler: Handler::Computed(chgrp),
    });
    reg.register(CommandSpec {
        name: "su",
        handler: Handler::Computed(su),
    });
    reg.register(CommandSpec {
        name: "useradd",
        handler: Handler::Computed(useradd),
    });
    reg.register(CommandSpec {
        name: "usermod",
        handler: Handler::Computed(usermod),
    });
    reg.register(CommandSpec {
        name: "userdel",
        handler: Handler::Computed(userdel),
    });
    reg.register(CommandSpec {
        name: "groupadd",
        handler: Handler::Computed(groupadd),
    });
    reg.register(CommandSpec {
        name: "passwd",
        handler: Handler::Computed(passwd),
    });
}

const CHMOD_HELP: &str = "\
chmod: change file/directory permissions

Usage: chmod [OPTIONS] MODE FILE

MODE can be:
  Numeric: 755, 644, 777, 600, ...
    - 7 = rwx (read + write + execute)
    - 6 = rw- (read + write)
    - 5 = r-x (read + execute)
    - 4 = r-- (read only)
  Symbolic: u+x, g-w, o=r

Examples:
  chmod 755 script.sh    # Owner: rwx, Group: r-x, Others: r-x
  chmod 644 file.txt     # Owner: rw-, Group: r--, Others: r--
  chmod +x script.sh     # Add execute permission
  chmod -R 755 folder/   # Recursive";

fn chmod(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text(CHMOD_HELP.to_string());
    }
    CommandOutput::Text(format!(
        "[Simulated] chmod: changed permissions of '{}' to {}",
        args[args.len() - 1],
        args[0]
    ))
}

const CHOWN_HELP: &str = "\
chown: change file/directory ownership

Usage: chown [OPTIONS] OWNER[:GROUP] FILE

Options:
  -R    Recursive (for directories)
  -v    Verbose mode

Examples:
  chown user file.txt           # Change owner
  chown user:group file.txt     # Change owner and group
  chown :group file.txt         # Change group only
  chown -R www-data:www-data /var/www  # Recursive

Common owners:
  root       - System administrator
  www-data   - Web server (Nginx/Apache)
  mysql      - MySQL database
  postgres   - PostgreSQL database";

fn chown(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text(CHOWN_HELP.to_string());
    }
    CommandOutput::Text(format!(
        "[Simulated] chown: changed ownership of '{}' to {}",
        args[args.len() - 1],
        args[0]
    ))
}

const CHGRP_HELP: &str = "\
chgrp: change a file/directory group

Usage: chgrp [OPTIONS] GROUP FILE

Options:
  -R    Recursive
  -v    Verbose

Examples:
  chgrp www-data file.txt
  chgrp -R docker /app";

fn chgrp(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text(CHGRP_HELP.to_string());
    }
    CommandOutput::Text(format!(
        "[Simulated] chgrp: changed group of '{}' to {}",
        args[args.len() - 1],
        args[0]
    ))
}

fn su(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.last() {
        Some(user) => CommandOutput::Text(format!("[Simulated] Switched to user: {user}")),
        None => CommandOutput::Text("Usage: su - <username>\nSwitch user identity".to_string()),
    }
}

fn useradd(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.last() {
        Some(user) => CommandOutput::Text(format!("[Simulated] useradd: user '{user}' created")),
        None => CommandOutput::Text("Usage: useradd [-m] [-s /bin/bash] <username>".to_string()),
    }
}

fn usermod(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text("Usage: usermod [-aG group] <username>".to_string());
    }
    CommandOutput::Text(format!(
        "[Simulated] usermod: modified user {}",
        args[args.len() - 1]
    ))
}

fn userdel(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.last() {
        Some(user) => CommandOutput::Text(format!("[Simulated] userdel: user '{user}' deleted")),
        None => CommandOutput::Text("Usage: userdel [-r] <username>".to_string()),
    }
}

fn groupadd(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.first() {
        Some(group) => CommandOutput::Text(format!("[Simulated] groupadd: group '{group}' created")),
        None => CommandOutput::Text("Usage: groupadd <groupname>".to_string()),
    }
}

fn passwd(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let user = args.first().copied().unwrap_or("current user");
    CommandOutput::Text(format!(
        "[Simulated] passwd: password for {user} updated successfully"
    ))
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
    fn chmod_with_mode_and_file() {
        assert_eq!(
            run(chmod, &["755", "deploy.sh"]),
            "[Simulated] chmod: changed permissions of 'deploy.sh' to 755"
        );
    }

    #[test]
    fn chmod_short_args_print_the_mode_guide() {
        let out = run(chmod, &["755"]);
        assert!(out.contains("MODE can be"));
        assert!(out.contains("chmod -R 755 folder/"));
    }

    #[test]
    fn chown_uses_last_arg_as_target() {
        assert_eq!(
            run(chown, &["-R", "www-data:www-data", "/var/www"]),
            "[Simulated] chown: changed ownership of '/var/www' to -R"
        );
    }

    #[test]
    fn su_switches_to_last_named_user() {
        assert_eq!(
            run(su, &["-", "deploy"]),
            "[Simulated] Switched to user: deploy"
        );
        assert!(run(su, &[]).contains("Usage: su"));
    }

    #[test]
    fn user_lifecycle_messages() {
        assert_eq!(
            run(useradd, &["-m", "deploy"]),
            "[Simulated] useradd: user 'deploy' created"
        );
        assert_eq!(
            run(usermod, &["-aG", "docker", "deploy"]),
            "[Simulated] usermod: modified user deploy"
        );
        assert_eq!(
            run(userdel, &["-r", "deploy"]),
            "[Simulated] userdel: user 'deploy' deleted"
        );
    }

    #[test]
    fn passwd_defaults_to_current_user() {
        assert_eq!(
            run(passwd, &[]),
            "[Simulated] passwd: password for current user updated successfully"
        );
        assert!(run(passwd, &["deploy"]).contains("for deploy"));
    }
}
