//! Core data types for the environment store.

use serde::{Deserialize, Serialize};

use crate::flags::vartype::VarType;

/// A single environment variable: a name, a string value, and the flags
/// derived for it from the active attribute lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub value: String,
    /// Always derivable from the attribute lists; rebuilt on snapshot load
    /// and whenever `.flags` changes.
    #[serde(default)]
    pub flags: VarFlags,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            flags: VarFlags::cleared(),
        }
    }
}

/// Per-variable flags. Currently this carries only the declared value
/// format, but it is a struct so future attributes (access control, change
/// hooks) get a field rather than a bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VarFlags {
    pub vartype: VarType,
}

impl VarFlags {
    /// Flags for a variable with no declared type: values are free-form.
    pub fn cleared() -> Self {
        Self {
            vartype: VarType::String,
        }
    }

    pub fn typed(vartype: VarType) -> Self {
        Self { vartype }
    }
}

/// The kind of mutation being attempted against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    Create,
    Update,
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_cleared() {
        assert_eq!(VarFlags::default(), VarFlags::cleared());
        assert_eq!(VarFlags::default().vartype, VarType::String);
    }

    #[test]
    fn variable_new_starts_untyped() {
        let var = Variable::new("bootdelay", "3");
        assert_eq!(var.name, "bootdelay");
        assert_eq!(var.value, "3");
        assert_eq!(var.flags, VarFlags::cleared());
    }

    #[test]
    fn variable_deserializes_without_flags_field() {
        let var: Variable =
            serde_json::from_str(r#"{"name":"bootdelay","value":"3"}"#).unwrap();
        assert_eq!(var.flags, VarFlags::cleared());
    }
}
