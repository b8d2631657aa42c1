//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables
//! - CLI arguments (for the `tlsneg` binary)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::faults::HandshakeMode;
use crate::suites::{select_named, SuiteId};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Handshake preferences
    #[serde(default)]
    pub handshake: HandshakeConfig,

    /// Conformance harness settings
    #[serde(default)]
    pub harness: HarnessConfig,
}

impl Config {
    /// Default config file location (`<config dir>/tlsneg/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tlsneg").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let content = std::fs::read_to_string(path.into())?;
        Ok(toml::from_str(&content)?)
    }

    /// Read overrides from environment variables
    pub fn from_env() -> Result<ConfigOverlay> {
        ConfigOverlay::from_vars(|key| std::env::var(key).ok())
    }

    /// Load the default file (if present) overlaid with environment variables
    pub fn load() -> Result<Self> {
        let base = match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)?
            },
            _ => Self::default(),
        };
        Ok(base.merge(Self::from_env()?))
    }

    /// Apply an overlay; every field it sets wins
    pub fn merge(self, overlay: ConfigOverlay) -> Self {
        Self {
            handshake: HandshakeConfig {
                cipher_names: overlay
                    .cipher_names
                    .unwrap_or(self.handshake.cipher_names),
                suites: overlay.suites.unwrap_or(self.handshake.suites),
            },
            harness: HarnessConfig {
                modes: overlay.modes.unwrap_or(self.harness.modes),
            },
        }
    }
}

/// Partial configuration layered over a [`Config`].
///
/// A field is `Some` only when its source actually set it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverlay {
    /// `TLSNEG_CIPHERS`
    pub cipher_names: Option<Vec<String>>,
    /// `TLSNEG_SUITES`
    pub suites: Option<String>,
    /// `TLSNEG_MODES`
    pub modes: Option<Vec<HandshakeMode>>,
}

impl ConfigOverlay {
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let modes = match var("TLSNEG_MODES") {
            Some(modes) => Some(
                modes
                    .split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::parse::<HandshakeMode>)
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };

        Ok(Self {
            cipher_names: var("TLSNEG_CIPHERS").map(|c| parse_cipher_list(&c)),
            suites: var("TLSNEG_SUITES").map(|s| s.trim().to_string()),
            modes,
        })
    }
}

/// Handshake preference configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandshakeConfig {
    /// Bulk cipher preference tokens, most preferred first
    #[serde(default = "default_cipher_names")]
    pub cipher_names: Vec<String>,

    /// Suite group token (`srp`, `srpCert`, `rsa`, `anon`, `srpAll`, `certAll`)
    #[serde(default = "default_suites")]
    pub suites: String,
}

fn default_cipher_names() -> Vec<String> {
    ["aes256", "aes128", "3des", "rc4"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_suites() -> String {
    "certAll".to_string()
}

impl Default for HandshakeConfig {
    fn default() -> Self {
        Self {
            cipher_names: default_cipher_names(),
            suites: default_suites(),
        }
    }
}

impl HandshakeConfig {
    /// Ordered suite ids to offer
    pub fn proposal(&self) -> Result<Vec<SuiteId>> {
        select_named(&self.suites, self.cipher_names.as_slice())
    }
}

/// Conformance harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Handshake modes to exercise
    #[serde(default = "default_modes")]
    pub modes: Vec<HandshakeMode>,
}

fn default_modes() -> Vec<HandshakeMode> {
    HandshakeMode::all().to_vec()
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            modes: default_modes(),
        }
    }
}

/// Split a comma-separated cipher list into tokens
pub fn parse_cipher_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NegotiationError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.handshake.cipher_names, vec!["aes256", "aes128", "3des", "rc4"]);
        assert_eq!(config.handshake.suites, "certAll");
        assert_eq!(config.harness.modes.len(), 4);
    }

    #[test]
    fn test_default_proposal() {
        let proposal = HandshakeConfig::default().proposal().unwrap();
        assert_eq!(
            proposal,
            vec![0xC021, 0xC01E, 0xC01B, 0x0035, 0x002F, 0x000A, 0x0005]
        );
    }

    #[test]
    fn test_bad_group_rejected() {
        let config = HandshakeConfig {
            suites: "ecdhe".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.proposal(), Err(NegotiationError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_cipher_list() {
        assert_eq!(parse_cipher_list("aes256, aes128,,3des "), vec!["aes256", "aes128", "3des"]);
        assert!(parse_cipher_list("").is_empty());
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            [handshake]
            cipher_names = ["aes128", "rc4"]
            suites = "rsa"

            [harness]
            modes = ["srp", "mutual-cert"]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.handshake.proposal().unwrap(), vec![0x002F, 0x0005]);
        assert_eq!(
            config.harness.modes,
            vec![HandshakeMode::Srp, HandshakeMode::MutualCertificate]
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[handshake]\nsuites = \"anon\"\n").unwrap();
        assert_eq!(config.handshake.cipher_names.len(), 4);
        assert_eq!(config.handshake.proposal().unwrap(), vec![0x003A, 0x0034]);
        assert_eq!(config.harness.modes.len(), 4);
    }

    fn env(vars: &[(&str, &str)]) -> Result<ConfigOverlay> {
        ConfigOverlay::from_vars(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn test_overlay_from_vars() {
        let overlay = env(&[
            ("TLSNEG_CIPHERS", "3des, rc4"),
            ("TLSNEG_MODES", "srp,cert"),
        ])
        .unwrap();
        assert_eq!(overlay.cipher_names, Some(vec!["3des".to_string(), "rc4".to_string()]));
        assert_eq!(overlay.suites, None);
        assert_eq!(
            overlay.modes,
            Some(vec![HandshakeMode::Srp, HandshakeMode::Certificate])
        );

        assert_eq!(env(&[]).unwrap(), ConfigOverlay::default());
        assert!(env(&[("TLSNEG_MODES", "x509")]).is_err());
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let file = Config {
            handshake: HandshakeConfig {
                suites: "srpAll".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = file.merge(env(&[("TLSNEG_CIPHERS", "3des")]).unwrap());
        assert_eq!(merged.handshake.suites, "srpAll");
        assert_eq!(merged.handshake.cipher_names, vec!["3des"]);
        assert_eq!(merged.handshake.proposal().unwrap(), vec![0xC01A, 0xC01B]);
    }

    #[test]
    fn test_env_default_value_overrides_file() {
        let file = Config {
            handshake: HandshakeConfig {
                cipher_names: vec!["rc4".to_string()],
                suites: "rsa".to_string(),
            },
            harness: HarnessConfig {
                modes: vec![HandshakeMode::Srp],
            },
        };
        let overlay = env(&[
            ("TLSNEG_CIPHERS", "aes256,aes128,3des,rc4"),
            ("TLSNEG_SUITES", "certAll"),
            ("TLSNEG_MODES", "srp,srp-cert,cert,mutual-cert"),
        ])
        .unwrap();

        let merged = file.merge(overlay);
        let defaults = Config::default();
        assert_eq!(merged.handshake.suites, "certAll");
        assert_eq!(merged.handshake.cipher_names, defaults.handshake.cipher_names);
        assert_eq!(merged.harness.modes, defaults.harness.modes);
    }
}
