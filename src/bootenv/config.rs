use crate::error::{BootEnvError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECOVERY_BOOTCMD: &str = "run bootcmd_recovery";
const DEFAULT_STATIC_FLAGS: &str = "ethaddr:m,ipaddr:i,serverip:i,netmask:i";

/// Configuration for bootenv, stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootEnvConfig {
    /// Recognize the network address type codes (`i`, `m`)
    #[serde(default = "default_true")]
    pub net_types: bool,

    /// Allow overwriting write-once variables without force
    #[serde(default)]
    pub allow_overwrite: bool,

    /// Check values against declared variable types
    #[serde(default = "default_true")]
    pub validate_types: bool,

    /// Variable names that may be written once and never changed
    #[serde(default = "default_write_once")]
    pub write_once: Vec<String>,

    /// A write-once variable that may be moved away from a factory default
    /// exactly once (e.g. a placeholder MAC address)
    #[serde(default)]
    pub overwrite_once: Option<OverwriteOnce>,

    /// Built-in attribute list, overridden per name by the `.flags` variable
    #[serde(default = "default_static_flags")]
    pub static_flags: String,

    /// Value force-assigned to `bootcmd` by the recovery command
    #[serde(default = "default_recovery_bootcmd")]
    pub recovery_bootcmd: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverwriteOnce {
    pub name: String,
    pub default_value: String,
}

fn default_true() -> bool {
    true
}

fn default_write_once() -> Vec<String> {
    vec!["serial#".to_string(), "ethaddr".to_string()]
}

fn default_static_flags() -> String {
    DEFAULT_STATIC_FLAGS.to_string()
}

fn default_recovery_bootcmd() -> String {
    DEFAULT_RECOVERY_BOOTCMD.to_string()
}

impl Default for BootEnvConfig {
    fn default() -> Self {
        Self {
            net_types: true,
            allow_overwrite: false,
            validate_types: true,
            write_once: default_write_once(),
            overwrite_once: None,
            static_flags: default_static_flags(),
            recovery_bootcmd: default_recovery_bootcmd(),
        }
    }
}

impl BootEnvConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BootEnvError::Io)?;
        let config: BootEnvConfig =
            serde_json::from_str(&content).map_err(BootEnvError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BootEnvError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BootEnvError::Serialization)?;
        fs::write(config_path, content).map_err(BootEnvError::Io)?;
        Ok(())
    }

    /// Build the validation policy the store carries around.
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            net_types: self.net_types,
            allow_overwrite: self.allow_overwrite,
            validate_types: self.validate_types,
            write_once: self.write_once.clone(),
            overwrite_once: self.overwrite_once.clone(),
            static_flags: self.static_flags.clone(),
        }
    }
}

/// Everything the flags engine needs to judge a mutation, carried explicitly
/// by the store rather than read from globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub net_types: bool,
    pub allow_overwrite: bool,
    pub validate_types: bool,
    pub write_once: Vec<String>,
    pub overwrite_once: Option<OverwriteOnce>,
    pub static_flags: String,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        BootEnvConfig::default().policy()
    }
}
