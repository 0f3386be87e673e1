//! Web server and TLS certificate commands.

use crate::interpreter::{CommandOutput, CommandRegistry, CommandSpec, Handler, Services};

pub fn register_web_commands(reg: &mut CommandRegistry) {
    reg.register(CommandSpec {
        name: "nginx",
        handler: Handler::Computed(nginx),
    });
    reg.register(CommandSpec {
        name: "certbot",
        handler: Handler::Computed(certbot),
    });
}

const NGINX_HELP: &str = "\
nginx: High-performance web server

Usage: nginx [OPTIONS]

Options:
  -t            Test configuration
  -T            Test and dump configuration
  -s <signal>   Send signal (stop, quit, reload, reopen)
  -v            Show version
  -V            Show version and configure options
  -c <file>     Use specific config file

Examples:
  sudo nginx -t           # Test config
  sudo nginx -s reload    # Reload config
  sudo nginx -s stop      # Stop server

Official docs: https://nginx.org/en/docs/";

fn nginx(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    let Some(&flag) = args.first() else {
        return CommandOutput::Text(NGINX_HELP.to_string());
    };
    let text = match flag {
        "-t" => "nginx: the configuration file /etc/nginx/nginx.conf syntax is ok\n\
                 nginx: configuration file /etc/nginx/nginx.conf test is successful"
            .to_string(),
        "-v" => "nginx version: nginx/1.24.0 (Ubuntu)".to_string(),
        "-V" => "nginx version: nginx/1.24.0 (Ubuntu)\n\
                 built with OpenSSL 3.0.2 15 Mar 2022\n\
                 TLS SNI support enabled"
            .to_string(),
        "-s" => format!(
            "[Simulated] nginx: signal {} sent",
            args.get(1).copied().unwrap_or("")
        ),
        _ => "Usage: nginx [-t|-v|-V|-s signal]".to_string(),
    };
    CommandOutput::Text(text)
}

const CERTBOT_HELP: &str = "\
certbot: Let's Encrypt SSL certificate tool

Usage: certbot [command] [OPTIONS]

Commands:
  certonly      Obtain certificate only
  install       Install certificate
  renew         Renew certificates
  certificates  List certificates
  delete        Delete certificate
  --nginx       Use nginx plugin
  --apache      Use apache plugin

Examples:
  sudo certbot --nginx -d example.com
  sudo certbot renew --dry-run
  sudo certbot certificates

Official docs: https://certbot.eff.org/docs/";

const CERTBOT_RENEW: &str = "\
[Simulated] Saving debug log to /var/log/letsencrypt/letsencrypt.log
- - - - - - - - - - - - - - - - - - - - - - - - - - - -
Processing /etc/letsencrypt/renewal/example.com.conf
- - - - - - - - - - - - - - - - - - - - - - - - - - - -
Certificate not yet due for renewal

- - - - - - - - - - - - - - - - - - - - - - - - - - - -
No certificates are due for renewal.";

fn certbot(args: &[&str], _services: &Services<'_>) -> CommandOutput {
    if args.is_empty() {
        return CommandOutput::Text(CERTBOT_HELP.to_string());
    }
    if args.contains(&"--nginx") {
        let domain = args
            .iter()
            .position(|a| *a == "-d")
            .and_then(|i| args.get(i + 1))
            .copied()
            .unwrap_or("example.com");
        return CommandOutput::Text(format!(
            "[Simulated] Saving debug log to /var/log/letsencrypt/letsencrypt.log\n\
             Requesting a certificate for {domain}\n\
             Successfully received certificate.\n\
             Certificate is saved at: /etc/letsencrypt/live/example.com/fullchain.pem\n\
             Key is saved at: /etc/letsencrypt/live/example.com/privkey.pem"
        ));
    }
    if args[0] == "renew" {
        return CommandOutput::Text(CERTBOT_RENEW.to_string());
    }
    CommandOutput::Text(format!("certbot: {} - [Simulated]", args.join(" ")))
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
    fn nginx_config_test_passes() {
        assert!(run(nginx, &["-t"]).contains("test is successful"));
    }

    #[test]
    fn nginx_signal_forwarding() {
        assert_eq!(
            run(nginx, &["-s", "reload"]),
            "[Simulated] nginx: signal reload sent"
        );
    }

    #[test]
    fn nginx_unknown_flag_is_usage() {
        assert_eq!(run(nginx, &["-x"]), "Usage: nginx [-t|-v|-V|-s signal]");
    }

    #[test]
    fn certbot_nginx_plugin_picks_up_domain() {
        let out = run(certbot, &["--nginx", "-d", "vps-demo.example.com"]);
        assert!(out.contains("Requesting a certificate for vps-demo.example.com"));
    }

    #[test]
    fn certbot_nginx_without_domain_uses_default() {
        assert!(run(certbot, &["--nginx"]).contains("Requesting a certificate for example.com"));
    }

    #[test]
    fn certbot_renew_has_nothing_due() {
        assert!(run(certbot, &["renew"]).contains("No certificates are due for renewal."));
    }
}
