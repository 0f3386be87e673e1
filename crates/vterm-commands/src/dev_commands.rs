//! Development tooling commands.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_dev_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "git",
        handler: Handler::Computed(git),
    });
    reg.register(CommandSpec {
        name: "node",
        handler: Handler::Computed(node),
    });
    reg.register(CommandSpec {
        name: "npm",
        handler: Handler::Computed(npm),
    });
    reg.register(CommandSpec {
        name: "pm2",
        handler: Handler::Computed(pm2),
    });
    reg.register(CommandSpec {
        name: "php",
        handler: Handler::Computed(php),
    });
    reg.register(CommandSpec {
        name: "composer",
        handler: Handler::Computed(composer),
    });
}

const GIT_HELP: &str = "\
git: Distributed version control system

Usage: git [command] [OPTIONS]

Commands:
  init          Initialize repository
  clone         Clone repository
  status        Show working tree status
  add           Add files to staging
  commit        Record changes
  push          Push to remote
  pull          Fetch and merge
  fetch         Download objects
  branch        List/create branches
  checkout      Switch branches
  merge         Merge branches
  log           Show commit logs
  diff          Show changes
  stash         Stash changes

Examples:
  git clone https://github.com/user/repo.git
  git add .
  git commit -m \"message\"
  git push origin main

Official docs: https://git-scm.com/docs";

const GIT_LOG: &str = "\
commit abc1234567890 (HEAD -> main, origin/main)
Author: admin <admin@vps-demo>
Date:   Mon Jan 15 10:00:00 2024 +0000

    Update configuration

commit def0987654321
Author: admin <admin@vps-demo>
Date:   Sun Jan 14 15:00:00 2024 +0000

    Initial commit";

fn git(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&sub) = args.first() else {
        return CommandOutput::Text(GIT_HELP.to_string());
    };
    let text = match sub {
        "status" => "On branch main\n\
                     Your branch is up to date with 'origin/main'.\n\
                     \n\
                     nothing to commit, working tree clean"
            .to_string(),
        "--version" => "git version 2.34.1".to_string(),
        "pull" => "Already up to date.".to_string(),
        "push" => "[Simulated] Enumerating objects: 5, done.\n\
                   Counting objects: 100% (5/5), done.\n\
                   Writing objects: 100% (3/3), 300 bytes | 300.00 KiB/s, done.\n\
                   To github.com:user/repo.git\n\
                   \x20  abc1234..def5678  main -> main"
            .to_string(),
        "log" => GIT_LOG.to_string(),
        _ => format!("git {} - [Simulated]", args.join(" ")),
    };
    CommandOutput::Text(text)
}

fn node(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-v") || args.contains(&"--version") {
        CommandOutput::Text("v20.10.0".to_string())
    } else {
        CommandOutput::Text(
            "Node.js JavaScript Runtime\nOfficial docs: https://nodejs.org/docs/".to_string(),
        )
    }
}

const NPM_HELP: &str = "\
npm: Node Package Manager

Usage: npm [command]

Commands:
  install       Install packages
  uninstall     Remove packages
  update        Update packages
  run           Run script
  start         Run start script
  test          Run tests
  init          Initialize package.json
  list          List installed packages
  audit         Security audit
  cache         Manage cache

Examples:
  npm install express
  npm run build
  npm start

Official docs: https://docs.npmjs.com/";

fn npm(args: &[&str], services: &Services<'_>) -> CommandOutput {
    let Some(&sub) = args.first() else {
        return CommandOutput::Text(NPM_HELP.to_string());
    };
    let text = match sub {
        "-v" | "--version" => "10.2.3".to_string(),
        "install" | "i" => {
            let count = services.entropy.below(100) + 50;
            format!("[Simulated] added {count} packages in 3s")
        },
        "run" => format!(
            "[Simulated] > {}\n> Running script...",
            args.get(1).copied().unwrap_or("script")
        ),
        _ => format!("npm {} - [Simulated]", args.join(" ")),
    };
    CommandOutput::Text(text)
}

const PM2_HELP: &str = "\
pm2: Node.js Process Manager

Usage: pm2 [command] [OPTIONS]

Commands:
  start         Start application
  stop          Stop application
  restart       Restart application
  reload        Reload application
  delete        Delete from PM2
  list          List all processes
  logs          Display logs
  monit         Monitor all processes
  startup       Enable startup script
  save          Save process list

Examples:
  pm2 start app.js --name myapp
  pm2 list
  pm2 logs myapp
  pm2 restart all

Official docs: https://pm2.keymetrics.io/docs/";

const PM2_LIST: &str = "\
┌─────┬────────────┬─────────────┬─────────┬─────────┬──────────┐
│ id  │ name       │ namespace   │ mode    │ status  │ cpu      │
├─────┼────────────┼─────────────┼─────────┼─────────┼──────────┤
│ 0   │ myapp      │ default     │ fork    │ online  │ 0.1%     │
│ 1   │ api        │ default     │ cluster │ online  │ 0.2%     │
└─────┴────────────┴─────────────┴─────────┴─────────┴──────────┘";

fn pm2(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&sub) = args.first() else {
        return CommandOutput::Text(PM2_HELP.to_string());
    };
    let text = match sub {
        "list" | "ls" => PM2_LIST.to_string(),
        "logs" => "[Simulated PM2 Logs]\n\
                   0|myapp  | 2024-01-15 10:00:00: Server running on port 3000\n\
                   0|myapp  | 2024-01-15 10:00:01: Database connected"
            .to_string(),
        _ => format!("pm2 {} - [Simulated]", args.join(" ")),
    };
    CommandOutput::Text(text)
}

fn php(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-v") || args.contains(&"--version") {
        return CommandOutput::Text(
            "PHP 8.2.13 (cli) (built: Nov 21 2023 09:55:59) (NTS)\n\
             Copyright (c) The PHP Group\n\
             Zend Engine v4.2.13, Copyright (c) Zend Technologies"
                .to_string(),
        );
    }
    if args.contains(&"-m") {
        return CommandOutput::Text(
            "[PHP Modules]\n\
             bcmath curl date dom fileinfo filter gd hash iconv json libxml mbstring\n\
             mysql mysqli openssl pcre PDO pdo_mysql pdo_pgsql redis session xml zip"
                .to_string(),
        );
    }
    CommandOutput::Text("PHP - Official docs: https://www.php.net/docs.php".to_string())
}

const COMPOSER_HELP: &str = "\
Composer: PHP Dependency Manager

Usage: composer [command] [OPTIONS]

Commands:
  install       Install dependencies
  update        Update dependencies
  require       Add dependency
  remove        Remove dependency
  dump-autoload Regenerate autoloader
  create-project Create new project

Examples:
  composer install
  composer require laravel/framework
  composer update --no-dev

Official docs: https://getcomposer.org/doc/";

fn composer(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&sub) = args.first() else {
        return CommandOutput::Text(COMPOSER_HELP.to_string());
    };
    let text = match sub {
        "--version" | "-V" => "Composer version 2.6.5 2023-10-06 10:11:52".to_string(),
        "install" => "[Simulated] Installing dependencies from lock file\n\
                      Nothing to install, update or remove\n\
                      Generating optimized autoload files"
            .to_string(),
        _ => format!("composer {} - [Simulated]", args.join(" ")),
    };
    CommandOutput::Text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_platform::{FixedClock, FixedEntropy};

    fn run(f: crate::ResponderFn, args: &[&str]) -> String {
        let clock = FixedClock::default_fixture();
        let entropy = FixedEntropy::constant(25);
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
    fn git_status_is_clean() {
        assert!(run(git, &["status"]).contains("working tree clean"));
    }

    #[test]
    fn git_log_shows_two_commits() {
        let out = run(git, &["log"]);
        assert!(out.contains("Update configuration"));
        assert!(out.contains("Initial commit"));
    }

    #[test]
    fn git_unknown_subcommand_echoes() {
        assert_eq!(run(git, &["rebase", "-i"]), "git rebase -i - [Simulated]");
    }

    #[test]
    fn node_version_flag() {
        assert_eq!(run(node, &["-v"]), "v20.10.0");
        assert_eq!(run(node, &["--version"]), "v20.10.0");
    }

    #[test]
    fn npm_install_count_is_deterministic() {
        assert_eq!(run(npm, &["install"]), "[Simulated] added 75 packages in 3s");
        assert_eq!(run(npm, &["i"]), run(npm, &["install"]));
    }

    #[test]
    fn npm_run_names_the_script() {
        assert!(run(npm, &["run", "build"]).contains("> build"));
    }

    #[test]
    fn pm2_list_renders_table() {
        let out = run(pm2, &["list"]);
        assert!(out.contains("│ 0   │ myapp"));
        assert_eq!(run(pm2, &["ls"]), out);
    }

    #[test]
    fn php_version_and_modules() {
        assert!(run(php, &["-v"]).contains("PHP 8.2.13"));
        assert!(run(php, &["-m"]).contains("[PHP Modules]"));
    }

    #[test]
    fn composer_install_uses_lock_file() {
        assert!(run(composer, &["install"]).contains("lock file"));
    }
}
