//! File and directory commands: ls, pwd, cat, mkdir, touch, rm, cp, mv,
//! ln, stat, file, head, tail, find.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_file_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "ls",
        handler: Handler::Computed(ls),
    });
    reg.register(CommandSpec {
        name: "pwd",
        handler: Handler::Static("/home/admin"),
    });
    reg.register(CommandSpec {
        name: "cat",
        handler: Handler::Computed(cat),
    });
    reg.register(CommandSpec {
        name: "mkdir",
        handler: Handler::Computed(mkdir),
    });
    reg.register(CommandSpec {
        name: "touch",
        handler: Handler::Computed(touch),
    });
    reg.register(CommandSpec {
        name: "rm",
        handler: Handler::Computed(rm),
    });
    reg.register(CommandSpec {
        name: "cp",
        handler: Handler::Computed(cp),
    });
    reg.register(CommandSpec {
        name: "mv",
        handler: Handler::Computed(mv),
    });
    reg.register(CommandSpec {
        name: "ln",
        handler: Handler::Computed(ln),
    });
    reg.register(CommandSpec {
        name: "stat",
        handler: Handler::Computed(stat),
    });
    reg.register(CommandSpec {
        name: "file",
        handler: Handler::Computed(file_type),
    });
    reg.register(CommandSpec {
        name: "head",
        handler: Handler::Computed(head),
    });
    reg.register(CommandSpec {
        name: "tail",
        handler: Handler::Computed(tail),
    });
    reg.register(CommandSpec {
        name: "find",
        handler: Handler::Computed(find),
    });
}

const LS_DEFAULT: &str = "apps  backups  docker  logs  scripts  websites";

const LS_LONG_ALL: &str = "\
total 48
drwxr-xr-x  7 admin admin 4096 Jan 15 10:00 .
drwxr-xr-x  3 root  root  4096 Jan 10 08:00 ..
-rw-------  1 admin admin 2048 Jan 15 09:00 .bash_history
-rw-r--r--  1 admin admin  220 Jan 10 08:00 .bash_logout
-rw-r--r--  1 admin admin 3771 Jan 10 08:00 .bashrc
drwxr-xr-x  5 admin admin 4096 Jan 15 09:30 apps
drwxr-xr-x  4 admin admin 4096 Jan 14 02:00 backups
drwxr-xr-x  6 admin admin 4096 Jan 13 15:00 docker
drwxr-xr-x  4 admin admin 4096 Jan 15 09:45 logs
drwxr-xr-x  3 admin admin 4096 Jan 12 11:00 scripts
drwx------  2 admin admin 4096 Jan 10 08:00 .ssh
drwxr-xr-x  8 admin admin 4096 Jan 15 10:30 websites";

const LS_LONG: &str = "\
drwxr-xr-x  5 admin admin 4096 Jan 15 09:30 apps
drwxr-xr-x  4 admin admin 4096 Jan 14 02:00 backups
drwxr-xr-x  6 admin admin 4096 Jan 13 15:00 docker
drwxr-xr-x  4 admin admin 4096 Jan 15 09:45 logs
drwxr-xr-x  3 admin admin 4096 Jan 12 11:00 scripts
drwxr-xr-x  8 admin admin 4096 Jan 15 10:30 websites";

const LS_ALL: &str =
    ".  ..  .bash_history  .bash_logout  .bashrc  .ssh  .vimrc  apps  backups  docker  logs  scripts  websites";

fn ls(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let listing = match args.join(" ").as_str() {
        "-la" | "-al" => LS_LONG_ALL,
        "-l" => LS_LONG,
        "-a" => LS_ALL,
        _ => LS_DEFAULT,
    };
    CommandOutput::Text(listing.to_string())
}

const OS_RELEASE: &str = r#"NAME="Ubuntu"
VERSION="22.04.3 LTS (Jammy Jellyfish)"
ID=ubuntu
ID_LIKE=debian
PRETTY_NAME="Ubuntu 22.04.3 LTS"
VERSION_ID="22.04"
HOME_URL="https://www.ubuntu.com/"
SUPPORT_URL="https://help.ubuntu.com/""#;

const ETC_PASSWD: &str = "\
root:x:0:0:root:/root:/bin/bash
daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin
admin:x:1000:1000:VPS Admin:/home/admin:/bin/bash
www-data:x:33:33:www-data:/var/www:/usr/sbin/nologin
mysql:x:112:117:MySQL Server,,,:/nonexistent:/bin/false";

const BASHRC: &str = "\
# ~/.bashrc: executed by bash for non-login shells.
# If not running interactively, don't do anything
case $- in
    *i*) ;;
      *) return;;
esac

# don't put duplicate lines in history
HISTCONTROL=ignoreboth

# append to history file
shopt -s histappend

# for setting history length
HISTSIZE=1000
HISTFILESIZE=2000";

const BASH_HISTORY: &str = "\
ls -la
sudo apt update
docker ps
systemctl status nginx
ufw status
git status
npm run build
pm2 list
mysql -u root -p
curl -I https://vps-demo.example.com";

fn cat(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&path) = args.first() else {
        return CommandOutput::Text("cat: missing operand\nUsage: cat <filename>".to_string());
    };
    let text = match path {
        "/etc/os-release" => OS_RELEASE,
        "/etc/hostname" => "vps-demo",
        "/etc/passwd" => ETC_PASSWD,
        ".bashrc" => BASHRC,
        ".bash_history" => BASH_HISTORY,
        _ => return CommandOutput::Text(format!("cat: {path}: No such file or directory")),
    };
    CommandOutput::Text(text.to_string())
}

fn mkdir(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&last) = args.last() else {
        return CommandOutput::Text(
            "mkdir: missing operand\nUsage: mkdir [-p] <directory>".to_string(),
        );
    };
    if args.contains(&"-p") {
        CommandOutput::Text(format!("[Simulated] mkdir: created directory path '{last}'"))
    } else {
        CommandOutput::Text(format!("[Simulated] mkdir: created directory '{}'", args[0]))
    }
}

fn touch(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.first() {
        Some(name) => CommandOutput::Text(format!("[Simulated] touch: created file '{name}'")),
        None => CommandOutput::Text("touch: missing file operand\nUsage: touch <file>".to_string()),
    }
}

fn rm(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        return CommandOutput::Text(
            "rm: missing operand\nUsage: rm [-rf] <file/directory>".to_string(),
        );
    }
    let recursive = args.contains(&"-r") || args.contains(&"-rf") || args.contains(&"-fr");
    let target = args
        .iter()
        .find(|a| !a.starts_with('-'))
        .copied()
        .unwrap_or("file");
    if recursive {
        CommandOutput::Text(format!(
            "[Simulated] rm: removed directory '{target}' recursively"
        ))
    } else {
        CommandOutput::Text(format!("[Simulated] rm: removed '{target}'"))
    }
}

fn cp(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text(
            "cp: missing operand\nUsage: cp [-r] <source> <destination>".to_string(),
        );
    }
    CommandOutput::Text(format!(
        "[Simulated] cp: copied '{}' to '{}'",
        args[0], args[1]
    ))
}

fn mv(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text(
            "mv: missing operand\nUsage: mv <source> <destination>".to_string(),
        );
    }
    CommandOutput::Text(format!(
        "[Simulated] mv: moved '{}' to '{}'",
        args[0], args[1]
    ))
}

fn ln(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text(
            "ln: missing operand\nUsage: ln [-s] <target> <link_name>".to_string(),
        );
    }
    if args.contains(&"-s") {
        CommandOutput::Text("[Simulated] ln: created symbolic link".to_string())
    } else {
        CommandOutput::Text("[Simulated] ln: created hard link".to_string())
    }
}

fn stat(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&path) = args.first() else {
        return CommandOutput::Text("stat: missing operand\nUsage: stat <file>".to_string());
    };
    CommandOutput::Text(format!(
        "  File: {path}\n\
         \x20 Size: 4096       Blocks: 8          IO Block: 4096   directory\n\
         Device: fe01h/65025d   Inode: 262537      Links: 2\n\
         Access: (0755/drwxr-xr-x)  Uid: ( 1000/   admin)   Gid: ( 1000/   admin)\n\
         Access: 2024-01-15 10:00:00.000000000 +0000\n\
         Modify: 2024-01-15 09:30:00.000000000 +0000\n\
         Change: 2024-01-15 09:30:00.000000000 +0000\n\
         \x20Birth: 2024-01-10 08:00:00.000000000 +0000"
    ))
}

fn file_type(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&name) = args.first() else {
        return CommandOutput::Text("Usage: file <filename>".to_string());
    };
    let kinds: &[(&str, &str)] = &[
        (".txt", "ASCII text"),
        (".py", "Python script, ASCII text executable"),
        (".js", "ASCII text"),
        (".sh", "Bourne-Again shell script, ASCII text executable"),
        (".jpg", "JPEG image data"),
        (".png", "PNG image data"),
        (".pdf", "PDF document"),
        (".zip", "Zip archive data"),
        (".tar", "POSIX tar archive"),
        (".gz", "gzip compressed data"),
    ];
    let kind = kinds
        .iter()
        .find(|(ext, _)| name.ends_with(ext))
        .map(|(_, k)| *k)
        .unwrap_or("data");
    CommandOutput::Text(format!("{name}: {kind}"))
}

fn head(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.last() {
        Some(name) => CommandOutput::Text(format!("[Simulated] First 10 lines of {name}")),
        None => CommandOutput::Text("Usage: head [-n lines] <file>".to_string()),
    }
}

fn tail(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&name) = args.last() else {
        return CommandOutput::Text("Usage: tail [-f] [-n lines] <file>".to_string());
    };
    CommandOutput::Text(format!(
        "[Simulated] Last 10 lines of {name}:\n\
         2024-01-15 09:55:00 INFO: Request processed\n\
         2024-01-15 09:56:00 INFO: Connection established\n\
         2024-01-15 09:57:00 INFO: Task completed\n\
         2024-01-15 09:58:00 INFO: Cache cleared\n\
         2024-01-15 09:59:00 INFO: Backup started"
    ))
}

fn find(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&path) = args.first() else {
        return CommandOutput::Text("Usage: find <path> -name <pattern>".to_string());
    };
    CommandOutput::Text(format!(
        "[Simulated] Searching in {path}...\n{path}/file1.txt\n{path}/subdir/file2.txt"
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
    fn ls_flag_variants_are_distinct() {
        let plain = run(ls, &[]);
        let long_all = run(ls, &["-la"]);
        assert_ne!(plain, long_all);
        assert!(long_all.contains("total 48"));
        assert!(long_all.contains(".bash_history"));
        assert!(run(ls, &["-l"]).contains("apps"));
        assert!(run(ls, &["-a"]).contains(".vimrc"));
    }

    #[test]
    fn ls_unknown_flag_falls_back_to_default() {
        assert_eq!(run(ls, &["-x"]), run(ls, &[]));
    }

    #[test]
    fn cat_known_and_unknown_files() {
        assert!(run(cat, &["/etc/os-release"]).contains("Ubuntu"));
        assert_eq!(run(cat, &["/etc/hostname"]), "vps-demo");
        assert!(run(cat, &["nope.txt"]).contains("No such file or directory"));
        assert!(run(cat, &[]).contains("missing operand"));
    }

    #[test]
    fn rm_detects_recursive_flags() {
        assert!(run(rm, &["-rf", "old/"]).contains("recursively"));
        assert!(!run(rm, &["notes.txt"]).contains("recursively"));
        assert!(run(rm, &[]).contains("missing operand"));
    }

    #[test]
    fn cp_and_mv_need_two_operands() {
        assert!(run(cp, &["a"]).contains("missing operand"));
        assert!(run(cp, &["a", "b"]).contains("copied 'a' to 'b'"));
        assert!(run(mv, &["a", "b"]).contains("moved 'a' to 'b'"));
    }

    #[test]
    fn file_detects_extension() {
        assert_eq!(
            run(file_type, &["deploy.sh"]),
            "deploy.sh: Bourne-Again shell script, ASCII text executable"
        );
        assert_eq!(run(file_type, &["blob"]), "blob: data");
    }

    #[test]
    fn zero_arg_usage_texts() {
        for (f, hint) in [
            (mkdir as crate::ResponderFn, "mkdir"),
            (touch, "touch"),
            (ln, "ln"),
            (stat, "stat"),
            (head, "head"),
            (tail, "tail"),
            (find, "find"),
        ] {
            assert!(run(f, &[]).contains(hint));
        }
    }
}
