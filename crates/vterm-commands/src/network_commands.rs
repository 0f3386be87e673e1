//! Network, transfer, and firewall commands.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_network_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "ping",
        handler: Handler::Computed(ping),
    });
    reg.register(CommandSpec {
        name: "curl",
        handler: Handler::Computed(curl),
    });
    reg.register(CommandSpec {
        name: "wget",
        handler: Handler::Computed(wget),
    });
    reg.register(CommandSpec {
        name: "ssh",
        handler: Handler::Computed(ssh),
    });
    reg.register(CommandSpec {
        name: "scp",
        handler: Handler::Computed(scp),
    });
    reg.register(CommandSpec {
        name: "rsync",
        handler: Handler::Computed(rsync),
    });
    reg.register(CommandSpec {
        name: "netstat",
        handler: Handler::Computed(netstat),
    });
    reg.register(CommandSpec {
        name: "ss",
        handler: Handler::Computed(socket_stats),
    });
    reg.register(CommandSpec {
        name: "ufw",
        handler: Handler::Computed(ufw),
    });
    reg.register(CommandSpec {
        name: "traceroute",
        handler: Handler::Computed(traceroute),
    });
    reg.register(CommandSpec {
        name: "nslookup",
        handler: Handler::Computed(nslookup),
    });
    reg.register(CommandSpec {
        name: "dig",
        handler: Handler::Computed(dig),
    });
    reg.register(CommandSpec {
        name: "nmap",
        handler: Handler::Computed(nmap),
    });
    reg.register(CommandSpec {
        name: "lsof",
        handler: Handler::Computed(lsof),
    });
    reg.register(CommandSpec {
        name: "ssh-keygen",
        handler: Handler::Computed(ssh_keygen),
    });
    reg.register(CommandSpec {
        name: "ssh-copy-id",
        handler: Handler::Computed(ssh_copy_id),
    });
    reg.register(CommandSpec {
        name: "fail2ban-client",
        handler: Handler::Computed(fail2ban_client),
    });
}

fn ping(args: &[&str], services: &Services<'_>) -> CommandOutput {
    let Some(&host) = args.first() else {
        return CommandOutput::Text("Usage: ping <host>".to_string());
    };
    let e = services.entropy;
    let (a, b, c) = (e.below(255), e.below(255), e.below(255));
    CommandOutput::Text(format!(
        "PING {host} ({a}.{b}.{c}.1): 56 data bytes\n\
         64 bytes: icmp_seq=0 ttl=64 time=0.{} ms\n\
         64 bytes: icmp_seq=1 ttl=64 time=0.{} ms\n\
         64 bytes: icmp_seq=2 ttl=64 time=0.{} ms\n\
         --- {host} ping statistics ---\n\
         3 packets transmitted, 3 packets received, 0.0% packet loss",
        e.below(99),
        e.below(99),
        e.below(99)
    ))
}

const CURL_HELP: &str = "\
curl: Transfer data from/to servers

Usage: curl [OPTIONS] <url>

Options:
  -X <method>   HTTP method (GET, POST, PUT, DELETE)
  -H <header>   Add header
  -d <data>     POST data
  -o <file>     Output to file
  -O            Save with remote filename
  -L            Follow redirects
  -v            Verbose
  -s            Silent mode

Examples:
  curl https://api.example.com/data
  curl -X POST -d '{\"key\":\"value\"}' -H 'Content-Type: application/json' https://api.example.com
  curl -O https://example.com/file.zip

Official docs: https://curl.se/docs/";

fn curl(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        return CommandOutput::Text(CURL_HELP.to_string());
    }
    CommandOutput::Text(
        "[Simulated] HTTP/1.1 200 OK\n\
         Content-Type: text/html\n\
         {\"status\": \"success\", \"message\": \"curl request simulated\"}"
            .to_string(),
    )
}

fn wget(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&url) = args.first() else {
        return CommandOutput::Text("Usage: wget <url>".to_string());
    };
    let filename = url.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or("index.html");
    CommandOutput::Text(format!(
        "[Simulated] Downloading from {url}...\n\
         100%[===================>] 1,234,567    1.00MB/s    in 1.2s\n\
         '{filename}' saved"
    ))
}

const SSH_HELP: &str = "\
ssh: Secure Shell - Remote login program

Usage: ssh [OPTIONS] user@hostname

Options:
  -i <key>    Specify private key file
  -p <port>   Specify port (default: 22)
  -v          Verbose mode
  -L          Local port forwarding
  -R          Remote port forwarding

Examples:
  ssh root@192.168.1.100
  ssh -i ~/.ssh/id_rsa user@example.com
  ssh -p 2222 user@host

Official docs: https://www.openssh.com/";

fn ssh(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&target) = args.last() else {
        return CommandOutput::Text(SSH_HELP.to_string());
    };
    CommandOutput::Text(format!(
        "[Simulated] Connecting to {target}...\n\
         Warning: This is a simulated environment.\n\
         Connection established (demo mode).\n\
         \n\
         Welcome to Ubuntu 22.04.3 LTS (GNU/Linux 5.15.0-91-generic x86_64)\n\
         \n\
         \x20* Documentation:  https://help.ubuntu.com\n\
         \x20* Management:     https://landscape.canonical.com\n\
         \x20* Support:        https://ubuntu.com/advantage\n\
         \n\
         Last login: Mon Jan 15 10:00:00 2024 from 192.168.1.1\n\
         admin@vps-demo:~$"
    ))
}

const SCP_HELP: &str = "\
scp: Secure Copy - Transfer files via SSH

Usage: scp [OPTIONS] source destination

Examples:
  scp file.txt user@host:/path/
  scp user@host:/file.txt ./
  scp -r folder/ user@host:/path/
  scp -P 2222 file.txt user@host:/path/

Options:
  -r    Recursive (for directories)
  -P    Specify port
  -i    Specify private key";

fn scp(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text(SCP_HELP.to_string());
    }
    CommandOutput::Text(format!("[Simulated] scp: transferred {} successfully", args[0]))
}

const RSYNC_HELP: &str = "\
rsync: Remote sync - Fast file transfer

Usage: rsync [OPTIONS] source destination

Common options:
  -a    Archive mode (preserves permissions)
  -v    Verbose
  -z    Compress during transfer
  -P    Progress + partial
  --delete  Delete extraneous files

Examples:
  rsync -avz /local/ user@host:/remote/
  rsync -avzP folder/ user@host:/backup/";

fn rsync(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.len() < 2 {
        return CommandOutput::Text(RSYNC_HELP.to_string());
    }
    CommandOutput::Text("[Simulated] rsync: synchronized successfully".to_string())
}

const NETSTAT_LISTENING: &str = "\
Active Internet connections (only servers)
Proto Recv-Q Send-Q Local Address           Foreign Address         State       PID/Program name
tcp        0      0 0.0.0.0:22              0.0.0.0:*               LISTEN      456/sshd
tcp        0      0 0.0.0.0:80              0.0.0.0:*               LISTEN      1234/nginx
tcp        0      0 0.0.0.0:443             0.0.0.0:*               LISTEN      1234/nginx
tcp        0      0 127.0.0.1:3306          0.0.0.0:*               LISTEN      2345/mysqld
tcp        0      0 127.0.0.1:6379          0.0.0.0:*               LISTEN      3456/redis-server";

fn netstat(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-tulpn") || args.concat().contains("tulpn") {
        CommandOutput::Text(NETSTAT_LISTENING.to_string())
    } else {
        CommandOutput::Text("Usage: netstat -tulpn (show listening ports)".to_string())
    }
}

const SS_LISTENING: &str = "\
Netid  State   Recv-Q  Send-Q   Local Address:Port    Peer Address:Port  Process
tcp    LISTEN  0       128          0.0.0.0:22          0.0.0.0:*      users:((\"sshd\",pid=456,fd=3))
tcp    LISTEN  0       511          0.0.0.0:80          0.0.0.0:*      users:((\"nginx\",pid=1234,fd=6))
tcp    LISTEN  0       511          0.0.0.0:443         0.0.0.0:*      users:((\"nginx\",pid=1234,fd=7))";

fn socket_stats(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-tulpn") {
        CommandOutput::Text(SS_LISTENING.to_string())
    } else {
        CommandOutput::Text("Usage: ss -tulpn (show listening ports)".to_string())
    }
}

const UFW_HELP: &str = "\
ufw: Uncomplicated Firewall

Usage: ufw [command]

Commands:
  status          Show firewall status
  status verbose  Show detailed status
  enable          Enable firewall
  disable         Disable firewall
  allow <port>    Allow incoming port
  deny <port>     Deny incoming port
  delete <rule>   Delete rule
  reset           Reset all rules
  app list        List application profiles

Examples:
  sudo ufw status
  sudo ufw allow 22/tcp
  sudo ufw allow 'Nginx Full'
  sudo ufw deny 3306

Common ports:
  22   - SSH
  80   - HTTP
  443  - HTTPS
  3306 - MySQL
  5432 - PostgreSQL

Official docs: https://help.ubuntu.com/community/UFW";

const UFW_STATUS: &str = "\
Status: active

To                         Action      From
--                         ------      ----
22/tcp                     ALLOW       Anywhere
80/tcp                     ALLOW       Anywhere
443/tcp                    ALLOW       Anywhere
22/tcp (v6)                ALLOW       Anywhere (v6)
80/tcp (v6)                ALLOW       Anywhere (v6)
443/tcp (v6)               ALLOW       Anywhere (v6)";

fn ufw(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&sub) = args.first() else {
        return CommandOutput::Text(UFW_HELP.to_string());
    };
    let text = match sub {
        "status" => UFW_STATUS.to_string(),
        "enable" => "Firewall is active and enabled on system startup".to_string(),
        "disable" => "Firewall stopped and disabled on system startup".to_string(),
        "allow" => {
            let port = args.get(1).copied().unwrap_or("port");
            format!("Rule added: {port}\nRule added (v6): {port}")
        },
        "deny" => {
            let port = args.get(1).copied().unwrap_or("port");
            format!("Rule added: {port} DENY")
        },
        "app" => {
            if args.get(1) == Some(&"list") {
                "Available applications:\n\
                 \x20 Nginx Full\n\
                 \x20 Nginx HTTP\n\
                 \x20 Nginx HTTPS\n\
                 \x20 OpenSSH"
                    .to_string()
            } else {
                "Usage: ufw app list".to_string()
            }
        },
        _ => format!("UFW: {}", args.join(" ")),
    };
    CommandOutput::Text(text)
}

fn traceroute(args: &[&str], services: &Services<'_>) -> CommandOutput {
    let Some(&host) = args.first() else {
        return CommandOutput::Text("Usage: traceroute <host>".to_string());
    };
    let e = services.entropy;
    CommandOutput::Text(format!(
        "traceroute to {host} ({}.{}.{}.1), 30 hops max, 60 byte packets\n\
         \x201  gateway (192.168.1.1)  1.234 ms  1.123 ms  1.456 ms\n\
         \x202  10.0.0.1 (10.0.0.1)  5.678 ms  5.432 ms  5.789 ms\n\
         \x203  {host} ({}.{}.{}.1)  12.345 ms  12.123 ms  12.456 ms",
        e.below(255),
        e.below(255),
        e.below(255),
        e.below(255),
        e.below(255),
        e.below(255)
    ))
}

fn nslookup(args: &[&str], services: &Services<'_>) -> CommandOutput {
    let Some(&domain) = args.first() else {
        return CommandOutput::Text("Usage: nslookup <domain>".to_string());
    };
    let e = services.entropy;
    CommandOutput::Text(format!(
        "Server:\t\t8.8.8.8\n\
         Address:\t8.8.8.8#53\n\
         \n\
         Non-authoritative answer:\n\
         Name:\t{domain}\n\
         Address: {}.{}.{}.{}",
        e.below(255),
        e.below(255),
        e.below(255),
        e.below(255)
    ))
}

fn dig(args: &[&str], services: &Services<'_>) -> CommandOutput {
    let Some(&domain) = args.first() else {
        return CommandOutput::Text("Usage: dig <domain>".to_string());
    };
    let e = services.entropy;
    CommandOutput::Text(format!(
        "; <<>> DiG 9.18.1-1ubuntu1.1-Ubuntu <<>> {domain}\n\
         ;; global options: +cmd\n\
         ;; Got answer:\n\
         ;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 12345\n\
         ;; flags: qr rd ra; QUERY: 1, ANSWER: 1, AUTHORITY: 0, ADDITIONAL: 1\n\
         \n\
         ;; QUESTION SECTION:\n\
         ;{domain}.\t\t\tIN\tA\n\
         \n\
         ;; ANSWER SECTION:\n\
         {domain}.\t300\tIN\tA\t{}.{}.{}.{}\n\
         \n\
         ;; Query time: 23 msec\n\
         ;; SERVER: 8.8.8.8#53(8.8.8.8)\n\
         ;; WHEN: Mon Jan 15 10:00:00 UTC 2024\n\
         ;; MSG SIZE  rcvd: 58",
        e.below(255),
        e.below(255),
        e.below(255),
        e.below(255)
    ))
}

const NMAP_HELP: &str = "\
nmap: Network exploration tool and security scanner

Usage: nmap [OPTIONS] <target>

Options:
  -sS    TCP SYN scan
  -sU    UDP scan
  -O     OS detection
  -A     Aggressive scan
  -p     Port specification

Examples:
  nmap 192.168.1.1
  nmap -sS -O 192.168.1.0/24
  nmap -p 80,443 example.com

Official docs: https://nmap.org/docs.html";

fn nmap(args: &[&str], services: &Services<'_>) -> CommandOutput {
    let Some(&target) = args.last() else {
        return CommandOutput::Text(NMAP_HELP.to_string());
    };
    CommandOutput::Text(format!(
        "Starting Nmap 7.80 ( https://nmap.org ) at {} UTC\n\
         Nmap scan report for {target}\n\
         Host is up (0.0012s latency).\n\
         Not shown: 996 closed ports\n\
         PORT     STATE SERVICE\n\
         22/tcp   open  ssh\n\
         80/tcp   open  http\n\
         443/tcp  open  https\n\
         3306/tcp open  mysql\n\
         \n\
         Nmap done: 1 IP address (1 host up) scanned in 2.34 seconds",
        services.clock.now()
    ))
}

const LSOF_NETWORK: &str = "\
COMMAND   PID     USER   FD   TYPE DEVICE SIZE/OFF NODE NAME
sshd      456     root    3u  IPv4  12345      0t0  TCP *:ssh (LISTEN)
nginx    1234 www-data    6u  IPv4  23456      0t0  TCP *:http (LISTEN)
mysqld   2345    mysql   33u  IPv4  34567      0t0  TCP localhost:mysql (LISTEN)";

fn lsof(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.contains(&"-i") {
        CommandOutput::Text(LSOF_NETWORK.to_string())
    } else {
        CommandOutput::Text("Usage: lsof -i (list open network files)".to_string())
    }
}

const SSH_KEYGEN_HELP: &str = "\
ssh-keygen: Generate SSH key pairs

Usage: ssh-keygen [OPTIONS]

Options:
  -t <type>    Key type (rsa, ed25519, ecdsa)
  -b <bits>    Key bits (for RSA)
  -C <comment> Comment/email
  -f <file>    Output file

Examples:
  ssh-keygen -t ed25519 -C \"email@example.com\"
  ssh-keygen -t rsa -b 4096
  ssh-keygen -t ed25519 -f ~/.ssh/deploy_key";

fn ssh_keygen(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        return CommandOutput::Text(SSH_KEYGEN_HELP.to_string());
    }
    CommandOutput::Text(
        "[Simulated] Generating public/private key pair...\n\
         Your public key has been saved in ~/.ssh/id_ed25519.pub"
            .to_string(),
    )
}

fn ssh_copy_id(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&target) = args.last() else {
        return CommandOutput::Text("Usage: ssh-copy-id user@host".to_string());
    };
    CommandOutput::Text(format!(
        "[Simulated] Copying public key to {target}...\n\
         Number of key(s) added: 1\n\
         \n\
         Now try logging into the machine."
    ))
}

const FAIL2BAN_HELP: &str = "\
fail2ban-client: Fail2Ban management

Usage: fail2ban-client [command]

Commands:
  status        Show status
  status <jail> Show jail status
  set <jail> unbanip <ip>  Unban IP

Examples:
  fail2ban-client status
  fail2ban-client status sshd
  fail2ban-client set sshd unbanip 192.168.1.100

Official docs: https://www.fail2ban.org/";

const FAIL2BAN_SSHD: &str = "\
Status for the jail: sshd
|- Filter
|  |- Currently failed: 2
|  |- Total failed:     15
|  `- File list:        /var/log/auth.log
`- Actions
   |- Currently banned: 1
   |- Total banned:     5
   `- Banned IP list:   192.168.1.100";

fn fail2ban_client(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&sub) = args.first() else {
        return CommandOutput::Text(FAIL2BAN_HELP.to_string());
    };
    if sub == "status" {
        if args.get(1) == Some(&"sshd") {
            return CommandOutput::Text(FAIL2BAN_SSHD.to_string());
        }
        return CommandOutput::Text(
            "Status\n\
             |- Number of jail:      1\n\
             `- Jail list:   sshd"
                .to_string(),
        );
    }
    CommandOutput::Text(format!("fail2ban-client {} - [Simulated]", args.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_platform::{FixedClock, FixedEntropy};

    fn run_with(f: crate::ResponderFn, args: &[&str], entropy: &FixedEntropy) -> String {
        let clock = FixedClock::default_fixture();
        let services = Services {
            clock: &clock,
            entropy,
        };
        match f(args, &services) {
            CommandOutput::Text(s) => s,
            CommandOutput::Clear => panic!("expected text"),
        }
    }

    fn run(f: crate::ResponderFn, args: &[&str]) -> String {
        run_with(f, args, &FixedEntropy::constant(42))
    }

    #[test]
    fn ping_is_deterministic_under_fixed_entropy() {
        let out = run(ping, &["example.com"]);
        assert!(out.starts_with("PING example.com (42.42.42.1): 56 data bytes"));
        assert!(out.contains("time=0.42 ms"));
        assert!(out.ends_with("0.0% packet loss"));
    }

    #[test]
    fn ping_without_host_is_usage() {
        assert_eq!(run(ping, &[]), "Usage: ping <host>");
    }

    #[test]
    fn wget_derives_saved_filename() {
        let out = run(wget, &["https://example.com/dist/app.tar.gz"]);
        assert!(out.contains("'app.tar.gz' saved"));
    }

    #[test]
    fn wget_trailing_slash_falls_back_to_index() {
        let out = run(wget, &["https://example.com/"]);
        assert!(out.contains("'index.html' saved"));
    }

    #[test]
    fn ssh_banner_shows_target_and_prompt() {
        let out = run(ssh, &["root@203.0.113.7"]);
        assert!(out.contains("Connecting to root@203.0.113.7"));
        assert!(out.ends_with("admin@vps-demo:~$"));
    }

    #[test]
    fn netstat_requires_tulpn() {
        assert!(run(netstat, &["-tulpn"]).contains("1234/nginx"));
        assert!(run(netstat, &[]).contains("Usage: netstat"));
    }

    #[test]
    fn ufw_subcommands() {
        assert!(run(ufw, &["status"]).contains("Status: active"));
        assert_eq!(
            run(ufw, &["allow", "8080/tcp"]),
            "Rule added: 8080/tcp\nRule added (v6): 8080/tcp"
        );
        assert_eq!(run(ufw, &["deny", "3306"]), "Rule added: 3306 DENY");
        assert!(run(ufw, &["app", "list"]).contains("Nginx Full"));
        assert!(run(ufw, &[]).contains("Uncomplicated Firewall"));
    }

    #[test]
    fn nslookup_uses_entropy_for_address() {
        let entropy = FixedEntropy::new(vec![10, 20, 30, 40]);
        let out = run_with(nslookup, &["example.com"], &entropy);
        assert!(out.ends_with("Address: 10.20.30.40"));
    }

    #[test]
    fn nmap_embeds_clock_timestamp() {
        let out = run(nmap, &["192.168.1.1"]);
        assert!(out.contains("at 2024-01-15 10:00:00 UTC"));
        assert!(out.contains("22/tcp   open  ssh"));
    }

    #[test]
    fn fail2ban_status_variants() {
        assert!(run(fail2ban_client, &["status"]).contains("Jail list:   sshd"));
        assert!(run(fail2ban_client, &["status", "sshd"]).contains("Banned IP list"));
        assert!(run(fail2ban_client, &[]).contains("Fail2Ban management"));
    }
}
