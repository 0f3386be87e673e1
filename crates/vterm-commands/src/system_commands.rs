//! System, service, and shell-environment commands.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "hostname",
        handler: Handler::Static("vps-demo"),
    });
    reg.register(CommandSpec {
        name: "uname",
        handler: Handler::Computed(uname),
    });
    reg.register(CommandSpec {
        name: "uptime",
        handler: Handler::Computed(uptime),
    });
    reg.register(CommandSpec {
        name: "systemctl",
        handler: Handler::Computed(systemctl),
    });
    reg.register(CommandSpec {
        name: "service",
        handler: Handler::Computed(service),
    });
    reg.register(CommandSpec {
        name: "journalctl",
        handler: Handler::Computed(journalctl),
    });
    reg.register(CommandSpec {
        name: "dmesg",
        handler: Handler::Static(DMESG),
    });
    reg.register(CommandSpec {
        name: "reboot",
        handler: Handler::Static("[Simulated] System is going down for reboot NOW!"),
    });
    reg.register(CommandSpec {
        name: "shutdown",
        handler: Handler::Computed(shutdown),
    });
    reg.register(CommandSpec {
        name: "crontab",
        handler: Handler::Computed(crontab),
    });
    reg.register(CommandSpec {
        name: "timedatectl",
        handler: Handler::Computed(timedatectl),
    });
    reg.register(CommandSpec {
        name: "env",
        handler: Handler::Static(ENV_VARS),
    });
    reg.register(CommandSpec {
        name: "export",
        handler: Handler::Computed(export),
    });
    reg.register(CommandSpec {
        name: "alias",
        handler: Handler::Computed(alias),
    });
    reg.register(CommandSpec {
        name: "source",
        handler: Handler::Computed(source),
    });
    reg.register(CommandSpec {
        name: "w",
        handler: Handler::Computed(who_summary),
    });
    reg.register(CommandSpec {
        name: "jobs",
        handler: Handler::Static(
            "[1]+  Running                 nohup python3 app.py &\n\
             [2]-  Stopped                 vim config.txt",
        ),
    });
    reg.register(CommandSpec {
        name: "screen",
        handler: Handler::Computed(screen),
    });
    reg.register(CommandSpec {
        name: "tmux",
        handler: Handler::Computed(tmux),
    });
}

fn uname(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let text = if args.contains(&"-a") {
        "Linux vps-demo 5.15.0-91-generic #101-Ubuntu SMP Tue Nov 14 13:30:08 UTC 2023 x86_64 x86_64 x86_64 GNU/Linux"
    } else if args.contains(&"-r") {
        "5.15.0-91-generic"
    } else if args.contains(&"-m") {
        "x86_64"
    } else {
        "Linux"
    };
    CommandOutput::Text(text.to_string())
}

fn uptime(_args: &[&str], services: &Services<'_>) -> CommandOutput {
    let days = services.entropy.below(30) + 1;
    let hours = services.entropy.below(24);
    let mins = services.entropy.below(60);
    CommandOutput::Text(format!(
        " {} up {days} days, {hours}:{mins:02},  1 user,  load average: 0.15, 0.10, 0.05",
        services.clock.now().hms()
    ))
}

const SYSTEMCTL_HELP: &str = "\
systemctl: Control systemd services

Usage: systemctl [command] [service]

Commands:
  start <service>     Start a service
  stop <service>      Stop a service
  restart <service>   Restart a service
  reload <service>    Reload config
  status <service>    Show service status
  enable <service>    Enable at boot
  disable <service>   Disable at boot
  list-units          List all units
  daemon-reload       Reload systemd

Examples:
  sudo systemctl start nginx
  sudo systemctl status mysql
  sudo systemctl enable docker

Official docs: https://www.freedesktop.org/software/systemd/man/systemctl.html";

const SYSTEMCTL_UNITS: &str = "\
UNIT                    LOAD   ACTIVE SUB     DESCRIPTION
docker.service          loaded active running Docker Application Container Engine
nginx.service           loaded active running A high performance web server
mysql.service           loaded active running MySQL Community Server
ssh.service             loaded active running OpenBSD Secure Shell server

4 loaded units listed. Pass --all to see loaded but inactive units.";

/// Services the simulated host knows about.
const KNOWN_SERVICES: &[&str] = &[
    "nginx",
    "mysql",
    "docker",
    "ssh",
    "php8.2-fpm",
    "redis-server",
    "postgresql",
    "fail2ban",
    "ufw",
];

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn systemctl(args: &[&str], services: &Services<'_>) -> CommandOutput {
    let Some(&action) = args.first() else {
        return CommandOutput::Text(SYSTEMCTL_HELP.to_string());
    };
    if action == "list-units" {
        return CommandOutput::Text(SYSTEMCTL_UNITS.to_string());
    }

    let unit = args.get(1).copied();
    let Some(unit) = unit else {
        return CommandOutput::Text(
            "Missing service name. Usage: systemctl <action> <service>".to_string(),
        );
    };
    if !KNOWN_SERVICES.contains(&unit) {
        return CommandOutput::Text(format!("Unit {unit}.service could not be found."));
    }

    let text = match action {
        "status" => {
            let pid = services.entropy.below(10000) + 1000;
            let tasks = services.entropy.below(20) + 1;
            let mem_whole = services.entropy.below(100) + 10;
            let mem_frac = services.entropy.below(9);
            let cpu = services.entropy.below(10);
            format!(
                "● {unit}.service - {} Service\n\
                 \x20    Loaded: loaded (/lib/systemd/system/{unit}.service; enabled; vendor preset: enabled)\n\
                 \x20    Active: active (running) since Mon 2024-01-15 09:00:00 UTC; 6h ago\n\
                 \x20  Main PID: {pid} ({unit})\n\
                 \x20     Tasks: {tasks} (limit: 4915)\n\
                 \x20    Memory: {mem_whole}.{mem_frac}M\n\
                 \x20       CPU: {cpu}ms\n\
                 \x20    CGroup: /system.slice/{unit}.service",
                capitalize(unit)
            )
        },
        "start" => format!("[Simulated] Started {unit}.service - {unit} Service"),
        "stop" => format!("[Simulated] Stopped {unit}.service - {unit} Service"),
        "restart" => format!("[Simulated] Restarted {unit}.service - {unit} Service"),
        "reload" => format!("[Simulated] Reloaded {unit}.service - {unit} Service"),
        "enable" => format!(
            "Created symlink /etc/systemd/system/multi-user.target.wants/{unit}.service → /lib/systemd/system/{unit}.service."
        ),
        "disable" => {
            format!("Removed /etc/systemd/system/multi-user.target.wants/{unit}.service.")
        },
        _ => format!("Unknown action: {action}"),
    };
    CommandOutput::Text(text)
}

fn service(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text(
            "Usage: service <name> <start|stop|status|restart>".to_string(),
        );
    }
    CommandOutput::Text(format!("[Simulated] {} {}", args[0], args[1]))
}

const JOURNALCTL_HELP: &str = "\
journalctl: Query systemd journal

Usage: journalctl [OPTIONS]

Options:
  -u <service>    Show logs for service
  -f              Follow (like tail -f)
  -n <lines>      Show last N lines
  --since         Show since time
  --until         Show until time
  -p <priority>   Filter by priority

Examples:
  journalctl -u nginx -f
  journalctl -n 100
  journalctl --since \"1 hour ago\"";

fn journalctl(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        return CommandOutput::Text(JOURNALCTL_HELP.to_string());
    }
    CommandOutput::Text(
        "-- Logs begin at Mon 2024-01-10 08:00:00 UTC, end at Mon 2024-01-15 16:00:00 UTC. --\n\
         Jan 15 09:00:00 vps-demo systemd[1]: Started service.\n\
         Jan 15 09:00:01 vps-demo service[1234]: Service started successfully.\n\
         Jan 15 10:00:00 vps-demo service[1234]: Processing request..."
            .to_string(),
    )
}

const DMESG: &str = "\
[    0.000000] Linux version 5.15.0-91-generic (buildd@)
[    0.000000] Command line: BOOT_IMAGE=/vmlinuz-5.15.0-91-generic root=/dev/vda1
[    0.000000] KERNEL supported cpus:
[    0.000000]   Intel GenuineIntel
[    0.000000]   AMD AuthenticAMD
[    1.234567] systemd[1]: Detected virtualization kvm.
[    1.234567] systemd[1]: Set hostname to <vps-demo>.";

fn shutdown(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-h") && args.contains(&"now") {
        CommandOutput::Text("[Simulated] System is going down for poweroff NOW!".to_string())
    } else {
        CommandOutput::Text("Usage: shutdown -h now | shutdown -r now".to_string())
    }
}

const CRONTAB_LIST: &str = "\
# m h  dom mon dow   command
0 2 * * * /home/admin/scripts/backup.sh
0 4 * * 0 /usr/bin/certbot renew
*/5 * * * * /home/admin/scripts/health-check.sh";

const CRONTAB_HELP: &str = "\
crontab: Manage cron jobs

Usage: crontab [OPTIONS]
  -l    List current crontab
  -e    Edit crontab
  -r    Remove crontab

Cron format: minute hour day month weekday command
Examples:
  0 2 * * *     Daily at 2:00 AM
  */5 * * * *   Every 5 minutes
  0 0 * * 0     Weekly on Sunday";

fn crontab(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-l") {
        CommandOutput::Text(CRONTAB_LIST.to_string())
    } else if args.contains(&"-e") {
        CommandOutput::Text("[Simulated] Opening crontab editor...".to_string())
    } else {
        CommandOutput::Text(CRONTAB_HELP.to_string())
    }
}

fn timedatectl(_args: &[&str], services: &Services<'_>) -> CommandOutput {
    let hms = services.clock.now().hms();
    CommandOutput::Text(format!(
        "               Local time: Mon 2024-01-15 {hms} UTC\n\
         \x20          Universal time: Mon 2024-01-15 {hms} UTC\n\
         \x20                RTC time: Mon 2024-01-15 {hms}\n\
         \x20               Time zone: Etc/UTC (UTC, +0000)\n\
         System clock synchronized: yes\n\
         \x20             NTP service: active\n\
         \x20         RTC in local TZ: no"
    ))
}

const ENV_VARS: &str = "\
USER=admin
HOME=/home/admin
SHELL=/bin/bash
PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin
LANG=en_US.UTF-8
TERM=xterm-256color";

fn export(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        return CommandOutput::Text("Usage: export VAR=value".to_string());
    }
    CommandOutput::Text(format!("[Simulated] Exported: {}", args.join(" ")))
}

const ALIASES: &str = "\
alias ll='ls -la'
alias la='ls -A'
alias l='ls -CF'
alias ..='cd ..'
alias update='sudo apt update && sudo apt upgrade'";

fn alias(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        CommandOutput::Text(ALIASES.to_string())
    } else {
        CommandOutput::Text(format!("[Simulated] Alias set: {}", args.join(" ")))
    }
}

fn source(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.first() {
        Some(file) => CommandOutput::Text(format!("[Simulated] Sourced {file}")),
        None => CommandOutput::Text("Usage: source <file>".to_string()),
    }
}

fn who_summary(_args: &[&str], services: &Services<'_>) -> CommandOutput {
    CommandOutput::Text(format!(
        " {} up 15 days,  2:30,  2 users,  load average: 0.15, 0.10, 0.05\n\
         USER     TTY      FROM             LOGIN@   IDLE   JCPU   PCPU WHAT\n\
         admin    pts/0    192.168.1.100    09:30    0.00s  0.12s  0.01s w\n\
         root     pts/1    192.168.1.101    08:00    1:30m  0.05s  0.05s -bash",
        services.clock.now().hms()
    ))
}

const SCREEN_HELP: &str = "\
screen: GNU Screen - Terminal multiplexer

Usage: screen [OPTIONS] [command]

Options:
  -S <name>     Session name
  -ls           List sessions
  -r <name>     Reattach to session
  -d            Detach session

Examples:
  screen -S mysession
  screen -ls
  screen -r mysession

Official docs: https://www.gnu.org/software/screen/";

fn screen(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&first) = args.first() else {
        return CommandOutput::Text(SCREEN_HELP.to_string());
    };
    if first == "-ls" {
        return CommandOutput::Text(
            "There are screens on:\n\
             \t12345.mysession\t(01/15/2024 09:30:00 AM)\t(Attached)\n\
             \t12346.backup\t(01/15/2024 08:00:00 AM)\t(Detached)\n\
             2 Sockets in /var/run/screen/S-admin."
                .to_string(),
        );
    }
    CommandOutput::Text(format!("[Simulated] screen: {}", args.join(" ")))
}

const TMUX_HELP: &str = "\
tmux: Terminal multiplexer

Usage: tmux [command]

Commands:
  new-session   Create new session
  list-sessions List sessions
  attach        Attach to session
  detach        Detach from session
  kill-session  Kill session

Examples:
  tmux new-session -s mysession
  tmux list-sessions
  tmux attach -t mysession

Official docs: https://github.com/tmux/tmux";

fn tmux(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&first) = args.first() else {
        return CommandOutput::Text(TMUX_HELP.to_string());
    };
    if first == "list-sessions" || first == "ls" {
        return CommandOutput::Text(
            "mysession: 1 windows (created Mon Jan 15 09:30:00 2024) [80x24] (attached)\n\
             backup: 1 windows (created Mon Jan 15 08:00:00 2024) [80x24]"
                .to_string(),
        );
    }
    CommandOutput::Text(format!("[Simulated] tmux: {}", args.join(" ")))
}
