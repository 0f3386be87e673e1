//! Container commands. `docker-compose` delegates to `docker compose`.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_docker_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "docker",
        handler: Handler::Computed(docker),
    });
    reg.register(CommandSpec {
        name: "docker-compose",
        handler: Handler::Computed(docker_compose),
    });
}

const DOCKER_HELP: &str = "\
docker: Container management platform

Usage: docker [command]

Commands:
  ps            List running containers
  ps -a         List all containers
  images        List images
  run           Create and start container
  stop          Stop container
  start         Start stopped container
  restart       Restart container
  rm            Remove container
  rmi           Remove image
  exec          Execute command in container
  logs          View container logs
  build         Build image from Dockerfile
  pull          Pull image from registry
  push          Push image to registry
  compose       Docker Compose commands
  system        Manage Docker
  volume        Manage volumes
  network       Manage networks

Examples:
  docker ps
  docker run -d -p 80:80 nginx
  docker exec -it mycontainer bash
  docker logs -f mycontainer

Official docs: https://docs.docker.com/";

const DOCKER_PS: &str = "\
CONTAINER ID   IMAGE          COMMAND                  CREATED        STATUS         PORTS                    NAMES
a1b2c3d4e5f6   nginx:alpine   \"/docker-entrypoint.…\"   2 hours ago    Up 2 hours     0.0.0.0:80->80/tcp       nginx
b2c3d4e5f6g7   mysql:8.0      \"docker-entrypoint.s…\"   2 hours ago    Up 2 hours     3306/tcp                 mysql
c3d4e5f6g7h8   redis:alpine   \"docker-entrypoint.s…\"   2 hours ago    Up 2 hours     6379/tcp                 redis";

const DOCKER_PS_ALL: &str = "\
CONTAINER ID   IMAGE          COMMAND                  CREATED        STATUS                    PORTS                    NAMES
a1b2c3d4e5f6   nginx:alpine   \"/docker-entrypoint.…\"   2 hours ago    Up 2 hours                0.0.0.0:80->80/tcp       nginx
b2c3d4e5f6g7   mysql:8.0      \"docker-entrypoint.s…\"   2 hours ago    Up 2 hours                3306/tcp                 mysql
c3d4e5f6g7h8   redis:alpine   \"docker-entrypoint.s…\"   2 hours ago    Up 2 hours                6379/tcp                 redis
d4e5f6g7h8i9   node:20        \"docker-entrypoint.s…\"   3 days ago     Exited (0) 2 days ago                              app_old";

const DOCKER_IMAGES: &str = "\
REPOSITORY   TAG       IMAGE ID       CREATED        SIZE
nginx        alpine    a1b2c3d4e5f6   2 weeks ago    23.5MB
mysql        8.0       b2c3d4e5f6g7   2 weeks ago    446MB
redis        alpine    c3d4e5f6g7h8   2 weeks ago    28.5MB
node         20        d4e5f6g7h8i9   3 weeks ago    1.1GB
postgres     15        e5f6g7h8i9j0   3 weeks ago    379MB";

const COMPOSE_UP: &str = "\
[Simulated] Creating network \"app_default\" with the default driver
Creating app_db_1    ... done
Creating app_redis_1 ... done
Creating app_app_1   ... done
Creating app_nginx_1 ... done";

const COMPOSE_DOWN: &str = "\
[Simulated] Stopping app_nginx_1 ... done
Stopping app_app_1   ... done
Stopping app_redis_1 ... done
Stopping app_db_1    ... done
Removing app_nginx_1 ... done
Removing app_app_1   ... done
Removing app_redis_1 ... done
Removing app_db_1    ... done
Removing network app_default";

const COMPOSE_PS: &str = "\
NAME          COMMAND                  SERVICE   STATUS    PORTS
app_nginx_1   \"/docker-entrypoint.…\"   nginx     running   0.0.0.0:80->80/tcp
app_app_1     \"docker-php-entrypoi…\"   app       running   9000/tcp
app_db_1      \"docker-entrypoint.s…\"   db        running   3306/tcp
app_redis_1   \"docker-entrypoint.s…\"   redis     running   6379/tcp";

const SYSTEM_DF: &str = "\
TYPE            TOTAL     ACTIVE    SIZE      RECLAIMABLE
Images          5         3         1.88GB    500MB (26%)
Containers      4         3         123MB     45MB (36%)
Local Volumes   3         2         256MB     50MB (19%)
Build Cache     0         0         0B        0B";

fn docker(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&sub) = args.first() else {
        return CommandOutput::Text(DOCKER_HELP.to_string());
    };
    let text = match sub {
        "ps" => {
            if args.contains(&"-a") {
                DOCKER_PS_ALL.to_string()
            } else {
                DOCKER_PS.to_string()
            }
        },
        "images" => DOCKER_IMAGES.to_string(),
        "--version" | "-v" => "Docker version 24.0.7, build afdd53b".to_string(),
        "compose" => match args.get(1).copied() {
            Some("up") => COMPOSE_UP.to_string(),
            Some("down") => COMPOSE_DOWN.to_string(),
            Some("ps") => COMPOSE_PS.to_string(),
            _ => "Usage: docker compose [up|down|ps|logs|build|restart]\n\
                  Official docs: https://docs.docker.com/compose/"
                .to_string(),
        },
        "exec" => "[Simulated] Executing command in container...\nroot@container:/# ".to_string(),
        "logs" => "[Simulated] Container logs:\n\
                   2024-01-15 10:00:00 INFO: Application started\n\
                   2024-01-15 10:00:01 INFO: Listening on port 3000\n\
                   2024-01-15 10:05:00 INFO: Request received"
            .to_string(),
        "run" => "[Simulated] Creating container...\nContainer created and started successfully."
            .to_string(),
        "stop" => format!(
            "[Simulated] Stopping container: {}",
            args.get(1).copied().unwrap_or("container")
        ),
        "rm" => format!(
            "[Simulated] Removed container: {}",
            args.get(1).copied().unwrap_or("container")
        ),
        "rmi" => format!(
            "[Simulated] Removed image: {}",
            args.get(1).copied().unwrap_or("image")
        ),
        "system" => match args.get(1).copied() {
            Some("df") => SYSTEM_DF.to_string(),
            Some("prune") => {
                "[Simulated] Deleted unused data\nTotal reclaimed space: 1.2GB".to_string()
            },
            _ => "Usage: docker system [df|prune|info]".to_string(),
        },
        _ => format!("docker {} - [Simulated]", args.join(" ")),
    };
    CommandOutput::Text(text)
}

fn docker_compose(args: &[&str], services: &Services<'_>) -> CommandOutput {
    let mut forwarded = vec!["compose"];
    forwarded.extend_from_slice(args);
    docker(&forwarded, services)
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
    fn ps_excludes_exited_without_all_flag() {
        let running = run(docker, &["ps"]);
        let all = run(docker, &["ps", "-a"]);
        assert!(!running.contains("app_old"));
        assert!(all.contains("Exited (0) 2 days ago"));
    }

    #[test]
    fn images_lists_repositories() {
        let out = run(docker, &["images"]);
        assert!(out.contains("nginx"));
        assert!(out.contains("postgres"));
    }

    #[test]
    fn version_flags() {
        assert_eq!(
            run(docker, &["--version"]),
            "Docker version 24.0.7, build afdd53b"
        );
        assert_eq!(run(docker, &["-v"]), run(docker, &["--version"]));
    }

    #[test]
    fn compose_lifecycle() {
        assert!(run(docker, &["compose", "up"]).contains("Creating app_nginx_1"));
        assert!(run(docker, &["compose", "down"]).contains("Removing network app_default"));
        assert!(run(docker, &["compose", "ps"]).contains("app_db_1"));
        assert!(run(docker, &["compose"]).contains("Usage: docker compose"));
    }

    #[test]
    fn docker_compose_delegates_to_compose() {
        assert_eq!(run(docker_compose, &["up"]), run(docker, &["compose", "up"]));
        assert_eq!(run(docker_compose, &["ps"]), run(docker, &["compose", "ps"]));
    }

    #[test]
    fn stop_names_the_container() {
        assert_eq!(
            run(docker, &["stop", "nginx"]),
            "[Simulated] Stopping container: nginx"
        );
        assert_eq!(
            run(docker, &["stop"]),
            "[Simulated] Stopping container: container"
        );
    }

    #[test]
    fn system_subcommands() {
        assert!(run(docker, &["system", "df"]).contains("RECLAIMABLE"));
        assert!(run(docker, &["system", "prune"]).contains("Total reclaimed space"));
        assert!(run(docker, &["system"]).contains("Usage: docker system"));
    }

    #[test]
    fn unknown_subcommand_echoes() {
        assert_eq!(
            run(docker, &["volume", "ls"]),
            "docker volume ls - [Simulated]"
        );
    }
}
