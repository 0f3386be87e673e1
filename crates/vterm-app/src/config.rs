//! Optional TOML configuration for the demo shell.
//!
//! Looked up as `vterm.toml` in the working directory; every field has a
//! default so a missing file is not an error.

use std::path::Path;

use serde::Deserialize;
use vterm_types::{Result, VtermError};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub persona: Persona,
    /// Print the welcome banner on startup.
    pub banner: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Persona {
    pub user: String,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            persona: Persona::default(),
            banner: true,
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            user: "admin".to_string(),
            host: "vps-demo".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or fall back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(VtermError::from)
    }

    /// The `user@host` prompt prefix.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.persona.user, self.persona.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_missing() {
        let cfg = Config::load(Path::new("/nonexistent/vterm.toml")).unwrap();
        assert_eq!(cfg.persona.user, "admin");
        assert_eq!(cfg.persona.host, "vps-demo");
        assert!(cfg.banner);
    }

    #[test]
    fn parses_partial_overrides() {
        let cfg: Config = toml::from_str(
            "banner = false\n\n[persona]\nuser = \"deploy\"\n",
        )
        .unwrap();
        assert_eq!(cfg.persona.user, "deploy");
        assert_eq!(cfg.persona.host, "vps-demo");
        assert!(!cfg.banner);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<Config>("colour = \"green\"").is_err());
    }

    #[test]
    fn prompt_format() {
        assert_eq!(Config::default().prompt(), "admin@vps-demo:~$");
    }
}
