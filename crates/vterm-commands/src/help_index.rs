//! The help/manual index: one-line descriptions and category groupings.
//!
//! This table is maintained separately from the command registry and
//! deliberately documents more commands than the registry simulates
//! (`cd`, `vim`, `iptables`, ...). `help` and `man` read this index; the
//! registry decides what actually dispatches.

/// One-line description per command name.
const DESCRIPTIONS: &[(&str, &str)] = &[
    ("help", "List all available commands with a short description"),
    ("clear", "Clear the terminal screen of all previous output"),
    (
        "ls",
        "List files and directories. Options: -l (detail), -a (hidden files), -la (combined)",
    ),
    ("pwd", "Print Working Directory - show the current directory path"),
    ("whoami", "Show the username of the logged-in user"),
    ("date", "Show the current system date and time"),
    ("uname", "Show operating system information. Options: -a (all info)"),
    ("cat", "Concatenate - show file contents. Syntax: cat <filename>"),
    ("echo", "Print text to the terminal. Syntax: echo <text>"),
    ("mkdir", "Make Directory - create a new directory. Syntax: mkdir <dirname>"),
    ("touch", "Create a new empty file. Syntax: touch <filename>"),
    (
        "rm",
        "Remove - delete files. Options: -r (recursive), -f (force). Syntax: rm <file>",
    ),
    ("cp", "Copy - copy files/directories. Syntax: cp <source> <dest>"),
    ("mv", "Move - move or rename files. Syntax: mv <source> <dest>"),
    ("chmod", "Change Mode - change file permissions. Syntax: chmod <mode> <file>"),
    (
        "chown",
        "Change Owner - change file ownership. Syntax: chown <user>:<group> <file>",
    ),
    ("chgrp", "Change Group - change a file's group. Syntax: chgrp <group> <file>"),
    ("ssh", "Secure Shell - remote connection to a server. Syntax: ssh user@host"),
    (
        "scp",
        "Secure Copy - transfer files over SSH. Syntax: scp <source> user@host:<dest>",
    ),
    (
        "apt",
        "Advanced Package Tool - Debian/Ubuntu package manager. Commands: update, upgrade, install",
    ),
    ("sudo", "Super User Do - run a command with root privileges"),
    ("su", "Switch User - switch to another user. Syntax: su - <username>"),
    (
        "systemctl",
        "System Control - manage systemd services. Commands: start, stop, status, restart, enable",
    ),
    ("service", "Manage system services (legacy). Syntax: service <name> <action>"),
    (
        "ufw",
        "Uncomplicated Firewall - firewall configuration. Commands: status, enable, allow, deny",
    ),
    ("iptables", "Low-level firewall configuration (advanced)"),
    ("mysql", "MySQL client - connect to a MySQL database. Syntax: mysql -u <user> -p"),
    ("psql", "PostgreSQL client - connect to a PostgreSQL database"),
    ("redis-cli", "Redis CLI - connect to a Redis server"),
    (
        "docker",
        "Docker container management. Commands: ps, images, run, stop, logs, exec",
    ),
    (
        "docker-compose",
        "Docker Compose - manage multi-container apps. Commands: up, down, ps",
    ),
    ("nginx", "Nginx web server control. Options: -t (test config), -s (signal)"),
    ("php", "PHP interpreter. Options: -v (version), -m (modules)"),
    ("composer", "PHP dependency manager. Commands: install, update, require"),
    ("node", "Node.js runtime. Options: -v (version)"),
    ("npm", "Node Package Manager. Commands: install, run, start"),
    ("pm2", "Node.js process manager. Commands: start, stop, list, logs"),
    ("git", "Version control system. Commands: clone, pull, push, commit, status"),
    ("curl", "Transfer data from/to a server. Syntax: curl <url>"),
    ("wget", "Download files from the web. Syntax: wget <url>"),
    ("tar", "Archiver utility. Options: -xvf (extract), -cvf (create)"),
    ("zip", "Compress files. Syntax: zip <archive.zip> <files>"),
    ("unzip", "Extract a zip archive. Syntax: unzip <archive.zip>"),
    ("grep", "Search for a text pattern. Syntax: grep <pattern> <file>"),
    ("find", "Search for files/directories. Syntax: find <path> -name <pattern>"),
    ("htop", "Interactive process viewer (real-time monitoring)"),
    ("top", "Process viewer - show running processes"),
    ("ps", "Process Status - list processes. Options: aux (all users)"),
    ("kill", "Stop a process. Syntax: kill <PID> or kill -9 <PID>"),
    ("killall", "Stop processes by name. Syntax: killall <name>"),
    ("free", "Show memory usage. Options: -h (human readable)"),
    ("df", "Disk Free - show disk usage. Options: -h (human readable)"),
    ("du", "Disk Usage - directory sizes. Options: -sh (summary human)"),
    ("ncdu", "NCurses Disk Usage - interactive disk analyzer"),
    (
        "netstat",
        "Network Statistics - show network connections. Options: -tulpn",
    ),
    ("ss", "Socket Statistics - modern netstat alternative"),
    ("ping", "Test network connectivity. Syntax: ping <host>"),
    ("traceroute", "Trace the network route to a host"),
    ("ifconfig", "Interface Configuration - network interface info (legacy)"),
    ("ip", "Show/manipulate networking. Commands: addr, route, link"),
    ("nmap", "Network scanner - port scanning tool"),
    ("tail", "Show the end of a file. Options: -f (follow), -n (lines)"),
    ("head", "Show the beginning of a file. Options: -n (lines)"),
    ("less", "File pager - view a file with scrolling"),
    ("nano", "Simple terminal text editor"),
    ("vim", "Vi Improved - advanced text editor"),
    (
        "crontab",
        "Manage cron jobs (scheduled tasks). Options: -e (edit), -l (list)",
    ),
    ("history", "Show the command history for this session"),
    ("man", "Manual pages - command documentation. Syntax: man <command>"),
    ("which", "Show the location of an executable. Syntax: which <command>"),
    (
        "whereis",
        "Locate binary, source, and manual pages. Syntax: whereis <command>",
    ),
    ("alias", "Create a command shortcut. Syntax: alias name=command"),
    ("export", "Set an environment variable. Syntax: export VAR=value"),
    ("env", "Show all environment variables"),
    ("source", "Execute commands from a file. Syntax: source <file>"),
    ("reboot", "Restart the system (requires sudo)"),
    ("shutdown", "Shut down the system. Options: -h now, -r (reboot)"),
    ("passwd", "Change a user's password"),
    ("useradd", "Create a new user. Syntax: useradd <username>"),
    ("usermod", "Modify a user. Options: -aG (add to group)"),
    ("userdel", "Delete a user. Options: -r (remove home dir)"),
    ("groupadd", "Create a new group"),
    ("groups", "Show a user's groups"),
    ("id", "Show user and group IDs"),
    ("ln", "Link - create links. Options: -s (symbolic link)"),
    ("stat", "Show detailed file information"),
    ("file", "Determine a file's type"),
    ("diff", "Compare file contents"),
    ("wc", "Word Count - count lines, words, characters"),
    ("sort", "Sort lines of text"),
    ("uniq", "Remove duplicate lines"),
    ("awk", "Pattern scanning and processing"),
    ("sed", "Stream editor for text transformation"),
    ("tee", "Read stdin and write to stdout and files"),
    ("xargs", "Build commands from stdin"),
    ("certbot", "Let's Encrypt SSL certificate tool"),
    ("openssl", "SSL/TLS toolkit"),
    ("ssh-keygen", "Generate SSH key pairs"),
    ("ssh-copy-id", "Copy an SSH key to a remote server"),
    ("rsync", "Remote sync - synchronize files/directories"),
    ("fail2ban-client", "Fail2Ban CLI - manage banned IPs"),
    ("lsof", "List Open Files - show open files"),
    ("journalctl", "Query systemd journal logs"),
    ("dmesg", "Kernel ring buffer messages"),
    ("uptime", "Show system uptime and load average"),
    ("hostname", "Show/set the system hostname"),
    ("timedatectl", "Control system time and date"),
    ("locale", "Show locale settings"),
];

/// Fixed category groupings for the `help` listing.
///
/// Some listed names are documentation-only (no registry entry); they
/// fall back to the `No description` placeholder if also absent here.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "File & Directory",
        &[
            "ls", "pwd", "cd", "mkdir", "touch", "rm", "cp", "mv", "cat", "less", "head", "tail",
        ],
    ),
    ("Permissions", &["chmod", "chown", "chgrp", "stat"]),
    (
        "Users & Groups",
        &[
            "whoami", "id", "su", "sudo", "useradd", "usermod", "userdel", "groups", "passwd",
        ],
    ),
    ("Package Management", &["apt", "apt-get", "dpkg"]),
    (
        "System & Services",
        &[
            "systemctl",
            "service",
            "journalctl",
            "reboot",
            "shutdown",
            "uptime",
            "uname",
            "hostname",
        ],
    ),
    (
        "Network",
        &[
            "ping", "curl", "wget", "netstat", "ss", "ifconfig", "ip", "ufw", "ssh", "scp", "rsync",
        ],
    ),
    (
        "Monitoring",
        &[
            "top", "htop", "ps", "free", "df", "du", "ncdu", "kill", "killall",
        ],
    ),
    ("Containers", &["docker", "docker-compose"]),
    ("Database", &["mysql", "psql", "redis-cli"]),
    ("Web Server", &["nginx", "certbot"]),
    (
        "Development",
        &["git", "node", "npm", "pm2", "php", "composer"],
    ),
    (
        "Utilities",
        &[
            "echo", "date", "grep", "find", "tar", "zip", "unzip", "history", "clear",
        ],
    ),
];

/// Look up the one-line description for a command name.
pub fn description(name: &str) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_description() {
        assert_eq!(
            description("pwd"),
            Some("Print Working Directory - show the current directory path")
        );
    }

    #[test]
    fn unknown_description_is_none() {
        assert_eq!(description("cd"), None);
        assert_eq!(description("frobnicate"), None);
    }

    #[test]
    fn index_names_are_unique() {
        let mut names: Vec<&str> = DESCRIPTIONS.iter().map(|(n, _)| *n).collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn docker_is_listed_under_containers() {
        let (_, names) = CATEGORIES
            .iter()
            .find(|(title, _)| *title == "Containers")
            .unwrap();
        assert!(names.contains(&"docker"));
    }
}
