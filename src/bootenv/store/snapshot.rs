//! Snapshot persistence: one JSON file per environment.
//!
//! The on-disk form is a sorted map of name to `{ value, flags }`. Flags
//! are written for inspection but never trusted on load; the store
//! re-derives them from the attribute lists, so a hand-edited snapshot
//! cannot desynchronize flags from declarations.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ValidationPolicy;
use crate::error::{BootEnvError, Result};
use crate::model::{VarFlags, Variable};
use crate::store::EnvStore;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    value: String,
    #[serde(default)]
    flags: VarFlags,
}

/// Loads a store from `path`. An absent file is an empty environment.
pub fn load<P: AsRef<Path>>(path: P, policy: ValidationPolicy) -> Result<EnvStore> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(EnvStore::new(policy));
    }

    let content = fs::read_to_string(path).map_err(BootEnvError::Io)?;
    let entries: BTreeMap<String, SnapshotEntry> =
        serde_json::from_str(&content).map_err(BootEnvError::Serialization)?;

    let vars = entries.into_iter().map(|(name, entry)| Variable {
        name,
        value: entry.value,
        flags: entry.flags,
    });
    Ok(EnvStore::from_vars(vars, policy))
}

/// Saves `store` to `path` atomically (write to a temp file, then rename).
pub fn save<P: AsRef<Path>>(store: &EnvStore, path: P) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(BootEnvError::Io)?;
    }

    let entries: BTreeMap<&str, SnapshotEntry> = store
        .variables()
        .map(|var| {
            (
                var.name.as_str(),
                SnapshotEntry {
                    value: var.value.clone(),
                    flags: var.flags,
                },
            )
        })
        .collect();
    let content = serde_json::to_string_pretty(&entries).map_err(BootEnvError::Serialization)?;

    let tmp_file = dir.join(format!(".env-{}.tmp", std::process::id()));
    fs::write(&tmp_file, content).map_err(BootEnvError::Io)?;
    fs::rename(&tmp_file, path).map_err(BootEnvError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::VarType;
    use crate::store::FLAGS_VAR;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = load(dir.path().join("env.json"), ValidationPolicy::default()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn round_trip_preserves_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("env.json");

        let mut store = EnvStore::new(ValidationPolicy::default());
        store.set("bootdelay", "3", false).unwrap();
        store.set("bootargs", "console=ttyS0", false).unwrap();
        save(&store, &path).unwrap();

        let loaded = load(&path, ValidationPolicy::default()).unwrap();
        assert_eq!(loaded.get_value("bootdelay"), Some("3"));
        assert_eq!(loaded.get_value("bootargs"), Some("console=ttyS0"));
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn load_rederives_flags_from_lists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("env.json");

        let mut store = EnvStore::new(ValidationPolicy::default());
        store.set("foo", "1", false).unwrap();
        store.set(FLAGS_VAR, "foo:d", false).unwrap();
        save(&store, &path).unwrap();

        let loaded = load(&path, ValidationPolicy::default()).unwrap();
        assert_eq!(loaded.get("foo").unwrap().flags.vartype, VarType::Decimal);
    }

    #[test]
    fn recorded_flags_are_not_trusted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("env.json");

        // Snapshot claims foo is hex, but no attribute list declares it.
        fs::write(
            &path,
            r#"{"foo": {"value": "1", "flags": {"vartype": "Hex"}}}"#,
        )
        .unwrap();

        let loaded = load(&path, ValidationPolicy::default()).unwrap();
        assert_eq!(loaded.get("foo").unwrap().flags.vartype, VarType::String);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("env.json");

        let store = EnvStore::new(ValidationPolicy::default());
        save(&store, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn snapshot_is_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("env.json");

        let mut store = EnvStore::new(ValidationPolicy::default());
        store.set("zulu", "1", false).unwrap();
        store.set("alpha", "2", false).unwrap();
        save(&store, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let alpha = content.find("alpha").unwrap();
        let zulu = content.find("zulu").unwrap();
        assert!(alpha < zulu);
    }
}
