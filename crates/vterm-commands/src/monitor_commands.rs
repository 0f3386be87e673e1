//! Resource and process monitoring commands.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_monitor_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "free",
        handler: Handler::Computed(free),
    });
    reg.register(CommandSpec {
        name: "df",
        handler: Handler::Computed(df),
    });
    reg.register(CommandSpec {
        name: "du",
        handler: Handler::Computed(du),
    });
    reg.register(CommandSpec {
        name: "htop",
        handler: Handler::Static(HTOP),
    });
    reg.register(CommandSpec {
        name: "top",
        handler: Handler::Computed(top),
    });
    reg.register(CommandSpec {
        name: "ps",
        handler: Handler::Computed(ps),
    });
    reg.register(CommandSpec {
        name: "kill",
        handler: Handler::Computed(kill),
    });
    reg.register(CommandSpec {
        name: "killall",
        handler: Handler::Computed(killall),
    });
    reg.register(CommandSpec {
        name: "ncdu",
        handler: Handler::Static(
            "[Simulated] NCurses Disk Usage - Interactive disk analyzer\n\
             Install: sudo apt install ncdu\n\
             Official: https://dev.yorhel.nl/ncdu",
        ),
    });
}

const FREE_HUMAN: &str = "\
               total        used        free      shared  buff/cache   available
Mem:           3.8Gi       1.2Gi       1.4Gi        12Mi       1.2Gi       2.4Gi
Swap:          2.0Gi          0B       2.0Gi";

const FREE_KB: &str = "\
               total        used        free      shared  buff/cache   available
Mem:         3997680     1258624     1496832       12288     1242224     2512384
Swap:        2097148           0     2097148";

fn free(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-h") {
        CommandOutput::Text(FREE_HUMAN.to_string())
    } else {
        CommandOutput::Text(FREE_KB.to_string())
    }
}

const DF_HUMAN: &str = "\
Filesystem      Size  Used Avail Use% Mounted on
udev            1.9G     0  1.9G   0% /dev
tmpfs           393M  1.1M  392M   1% /run
/dev/vda1        50G   15G   33G  31% /
tmpfs           2.0G     0  2.0G   0% /dev/shm
tmpfs           5.0M     0  5.0M   0% /run/lock
/dev/vda15      105M  6.1M   99M   6% /boot/efi";

fn df(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-h") {
        CommandOutput::Text(DF_HUMAN.to_string())
    } else {
        CommandOutput::Text("Usage: df -h (for human-readable output)".to_string())
    }
}

fn du(args: &[&str], services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-sh") {
        let target = args
            .iter()
            .find(|a| !a.starts_with('-'))
            .copied()
            .unwrap_or(".");
        let size = services.entropy.below(500) + 50;
        CommandOutput::Text(format!("{size}M\t{target}"))
    } else {
        CommandOutput::Text("Usage: du -sh <directory>".to_string())
    }
}

const HTOP: &str = "\
[Simulated] htop - Interactive process viewer
Requires actual terminal. Install: sudo apt install htop
Official site: https://htop.dev/";

fn top(_args: &[&str], services: &Services<'_>) -> CommandOutput {
    CommandOutput::Text(format!(
        "top - {} up 15 days,  2:30,  1 user,  load average: 0.15, 0.10, 0.05\n\
         Tasks: 125 total,   1 running, 124 sleeping,   0 stopped,   0 zombie\n\
         %Cpu(s):  2.3 us,  0.7 sy,  0.0 ni, 96.8 id,  0.1 wa,  0.0 hi,  0.1 si,  0.0 st\n\
         MiB Mem :   3855.4 total,   1432.1 free,   1234.2 used,   1189.1 buff/cache\n\
         MiB Swap:   2048.0 total,   2048.0 free,      0.0 used.   2456.3 avail Mem\n\
         \n\
         \x20   PID USER      PR  NI    VIRT    RES    SHR S  %CPU  %MEM     TIME+ COMMAND\n\
         \x20  1234 root      20   0  456789  12345   1234 S   0.3   0.3   0:05.12 nginx\n\
         \x20  2345 mysql     20   0  987654  98765   4567 S   0.2   2.5   1:23.45 mysqld\n\
         \x20  3456 admin     20   0  123456  23456   2345 S   0.1   0.6   0:01.23 node",
        services.clock.now().hms()
    ))
}

const PS_ALL: &str = "\
USER       PID %CPU %MEM    VSZ   RSS TTY      STAT START   TIME COMMAND
root         1  0.0  0.1 169432 11920 ?        Ss   Jan10   0:05 /sbin/init
root       456  0.0  0.2 234567 20480 ?        Ss   Jan10   0:10 /usr/sbin/sshd
www-data  1234  0.1  0.3 456789 30720 ?        S    09:00   0:05 nginx: worker
mysql     2345  0.2  2.5 987654 98765 ?        Sl   09:00   1:23 /usr/sbin/mysqld
admin     3456  0.1  0.6 123456 23456 pts/0    Ss   10:00   0:01 node app.js";

const PS_SHORT: &str = "\
  PID TTY          TIME CMD
 3456 pts/0    00:00:00 bash
 3789 pts/0    00:00:00 ps";

fn ps(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"aux") || args.concat().contains("aux") {
        CommandOutput::Text(PS_ALL.to_string())
    } else {
        CommandOutput::Text(PS_SHORT.to_string())
    }
}

fn kill(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.last() {
        Some(pid) => CommandOutput::Text(format!("[Simulated] Sent signal to process {pid}")),
        None => CommandOutput::Text("Usage: kill [-9] <PID>".to_string()),
    }
}

fn killall(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    match args.first() {
        Some(name) => CommandOutput::Text(format!("[Simulated] Killed all processes named: {name}")),
        None => CommandOutput::Text("Usage: killall <process_name>".to_string()),
    }
}
