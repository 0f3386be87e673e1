//! Database client commands.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_database_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "mysql",
        handler: Handler::Computed(mysql),
    });
    reg.register(CommandSpec {
        name: "psql",
        handler: Handler::Computed(psql),
    });
    reg.register(CommandSpec {
        name: "redis-cli",
        handler: Handler::Static(
            "[Simulated] 127.0.0.1:6379> PONG\nRedis CLI - https://redis.io/docs/ui/cli/",
        ),
    });
}

const MYSQL_HELP: &str = "\
mysql: MySQL Command-Line Client

Usage: mysql [OPTIONS] [database]

Options:
  -u <user>       Username
  -p              Prompt for password
  -h <host>       Server host
  -P <port>       Port number
  -e <statement>  Execute statement

Examples:
  mysql -u root -p
  mysql -u myuser -p mydatabase
  mysql -u root -p -e \"SHOW DATABASES;\"

Official docs: https://dev.mysql.com/doc/";

const MYSQL_MONITOR: &str = "\
[Simulated] Welcome to the MySQL monitor.  Commands end with ; or \\g.
Your MySQL connection id is 42
Server version: 8.0.35-0ubuntu0.22.04.1 (Ubuntu)

Copyright (c) 2000, 2023, Oracle and/or its affiliates.

Type 'help;' or '\\h' for help. Type '\\c' to clear the current input statement.

mysql> ";

fn mysql(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        CommandOutput::Text(MYSQL_HELP.to_string())
    } else if args.contains(&"-u") {
        CommandOutput::Text(MYSQL_MONITOR.to_string())
    } else {
        CommandOutput::Text("Usage: mysql -u username -p [database]".to_string())
    }
}

const PSQL_HELP: &str = "\
psql: PostgreSQL interactive terminal

Usage: psql [OPTIONS] [dbname [username]]

Options:
  -U <user>       Username
  -h <host>       Server host
  -p <port>       Port number
  -d <dbname>     Database name
  -c <command>    Execute command

Examples:
  psql -U postgres
  psql -U myuser -d mydb
  psql -U postgres -c \"\\l\"

Official docs: https://www.postgresql.org/docs/";

fn psql(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        return CommandOutput::Text(PSQL_HELP.to_string());
    }
    CommandOutput::Text(
        "[Simulated] psql (14.10 (Ubuntu 14.10-0ubuntu0.22.04.1))\n\
         Type \"help\" for help.\n\
         \n\
         postgres=# "
            .to_string(),
    )
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
    fn mysql_with_user_flag_opens_monitor() {
        let out = run(mysql, &["-u", "root", "-p"]);
        assert!(out.contains("Welcome to the MySQL monitor."));
        assert!(out.ends_with("mysql> "));
    }

    #[test]
    fn mysql_without_user_flag_is_usage() {
        assert_eq!(run(mysql, &["mydb"]), "Usage: mysql -u username -p [database]");
        assert!(run(mysql, &[]).contains("MySQL Command-Line Client"));
    }

    #[test]
    fn psql_connects_with_any_args() {
        assert!(run(psql, &["-U", "postgres"]).ends_with("postgres=# "));
        assert!(run(psql, &[]).contains("PostgreSQL interactive terminal"));
    }
}
