//! Package management commands.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_pkg_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "apt",
        handler: Handler::Computed(apt),
    });
}

const APT_HELP: &str = "\
apt: Advanced Package Tool

Usage: apt [command] [package]

Commands:
  update       Update package list
  upgrade      Upgrade installed packages
  install      Install package(s)
  remove       Remove package(s)
  purge        Remove package + config
  search       Search packages
  show         Show package info
  list         List packages
  autoremove   Remove unused packages
  autoclean    Clean package cache

Examples:
  sudo apt update
  sudo apt upgrade -y
  sudo apt install nginx mysql-server
  apt search nodejs

Official docs: https://wiki.debian.org/Apt";

const APT_UPDATE: &str = "\
[Simulated] Hit:1 http://archive.ubuntu.com/ubuntu jammy InRelease
Hit:2 http://archive.ubuntu.com/ubuntu jammy-updates InRelease
Hit:3 http://archive.ubuntu.com/ubuntu jammy-security InRelease
Reading package lists... Done
Building dependency tree... Done
Reading state information... Done
All packages are up to date.";

const APT_UPGRADE: &str = "\
[Simulated] Reading package lists... Done
Building dependency tree... Done
Calculating upgrade... Done
0 upgraded, 0 newly installed, 0 to remove and 0 not upgraded.";

fn apt(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&sub) = args.first() else {
        return CommandOutput::Text(APT_HELP.to_string());
    };
    let text = match sub {
        "update" => APT_UPDATE.to_string(),
        "upgrade" => APT_UPGRADE.to_string(),
        "install" => {
            let pkg = if args.len() > 1 {
                args[1..].join(" ")
            } else {
                "package".to_string()
            };
            format!(
                "[Simulated] Reading package lists... Done\n\
                 Building dependency tree... Done\n\
                 The following NEW packages will be installed:\n\
                 \x20 {pkg}\n\
                 0 upgraded, 1 newly installed, 0 to remove.\n\
                 Setting up {pkg}...\n\
                 {pkg} has been installed successfully."
            )
        },
        "search" => {
            let pkg = args.get(1).copied().unwrap_or("package");
            format!(
                "Sorting... Done\n\
                 Full Text Search... Done\n\
                 {pkg}/jammy 1.0.0 amd64\n\
                 \x20 Description of {pkg}"
            )
        },
        _ => format!("apt: {} - [Simulated]", args.join(" ")),
    };
    CommandOutput::Text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_platform::{FixedClock, FixedEntropy};

    fn run(args: &[&str]) -> String {
        let clock = FixedClock::default_fixture();
        let entropy = FixedEntropy::constant(1);
        let services = Services {
            clock: &clock,
            entropy: &entropy,
        };
        match apt(args, &services) {
            CommandOutput::Text(s) => s,
            CommandOutput::Clear => panic!("expected text"),
        }
    }

    #[test]
    fn apt_without_args_shows_command_list() {
        let out = run(&[]);
        assert!(out.contains("Advanced Package Tool"));
        assert!(out.contains("autoremove"));
    }

    #[test]
    fn apt_update_reports_up_to_date() {
        assert!(run(&["update"]).contains("All packages are up to date."));
    }

    #[test]
    fn apt_install_names_the_packages() {
        let out = run(&["install", "nginx", "mysql-server"]);
        assert!(out.contains("nginx mysql-server has been installed successfully."));
    }

    #[test]
    fn apt_install_without_package_uses_placeholder() {
        assert!(run(&["install"]).contains("Setting up package..."));
    }

    #[test]
    fn apt_unknown_subcommand_echoes() {
        assert_eq!(run(&["moo"]), "apt: moo - [Simulated]");
    }
}
