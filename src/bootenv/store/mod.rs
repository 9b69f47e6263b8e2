//! The environment store: the single mutation path.
//!
//! Every create, update, and delete goes through [`EnvStore::set`] or
//! [`EnvStore::delete`], which run the consistency check before committing
//! and re-derive flags when the `.flags` variable changes. Nothing else in
//! the crate mutates variables.

pub mod snapshot;

use std::collections::HashMap;

use crate::config::ValidationPolicy;
use crate::error::{BootEnvError, Result};
use crate::flags;
use crate::model::{MutationOp, Variable};

/// Reserved variable holding the dynamic attribute list.
pub const FLAGS_VAR: &str = ".flags";

/// An in-memory environment with its validation policy.
#[derive(Debug, Clone)]
pub struct EnvStore {
    vars: HashMap<String, Variable>,
    policy: ValidationPolicy,
}

impl EnvStore {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            vars: HashMap::new(),
            policy,
        }
    }

    /// Builds a store from pre-existing variables, re-deriving every flag
    /// from the attribute lists so recorded flags can never be stale.
    pub fn from_vars(vars: impl IntoIterator<Item = Variable>, policy: ValidationPolicy) -> Self {
        let mut store = Self {
            vars: vars
                .into_iter()
                .map(|var| (var.name.clone(), var))
                .collect(),
            policy,
        };
        let dynamic = store.dynamic_list();
        flags::reapply_all(&mut store.vars, dynamic.as_deref(), &store.policy);
        store
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }

    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|var| var.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.vars.values()
    }

    /// All variable names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Creates or updates a variable.
    ///
    /// The consistency check runs first; on rejection the store is
    /// untouched. A newly created variable gets its flags from the current
    /// attribute lists. Setting [`FLAGS_VAR`] re-derives every variable's
    /// flags afterwards.
    pub fn set(&mut self, name: &str, value: &str, forced: bool) -> Result<&Variable> {
        let op = if self.vars.contains_key(name) {
            MutationOp::Update
        } else {
            MutationOp::Create
        };
        flags::validate_mutation(
            self.vars.get(name),
            name,
            Some(value),
            op,
            forced,
            &self.policy,
        )?;

        match op {
            MutationOp::Update => {
                if let Some(var) = self.vars.get_mut(name) {
                    var.value = value.to_string();
                }
            }
            _ => {
                let dynamic = self.dynamic_list();
                let initial = flags::initial_flags(name, dynamic.as_deref(), &self.policy);
                let mut var = Variable::new(name, value);
                var.flags = initial;
                self.vars.insert(name.to_string(), var);
            }
        }

        if name == FLAGS_VAR {
            let dynamic = self.dynamic_list();
            flags::reapply_all(&mut self.vars, dynamic.as_deref(), &self.policy);
        }

        self.vars
            .get(name)
            .ok_or_else(|| BootEnvError::Store(format!("variable {} missing after commit", name)))
    }

    /// Deletes a variable, returning it.
    ///
    /// Deleting [`FLAGS_VAR`] drops every dynamically declared flag; static
    /// declarations survive.
    pub fn delete(&mut self, name: &str, forced: bool) -> Result<Variable> {
        let Some(existing) = self.vars.get(name) else {
            return Err(BootEnvError::VariableNotFound(name.to_string()));
        };
        flags::validate_mutation(
            Some(existing),
            name,
            None,
            MutationOp::Delete,
            forced,
            &self.policy,
        )?;

        let removed = self
            .vars
            .remove(name)
            .ok_or_else(|| BootEnvError::VariableNotFound(name.to_string()))?;

        if name == FLAGS_VAR {
            flags::reapply_all(&mut self.vars, None, &self.policy);
        }
        Ok(removed)
    }

    /// The current dynamic attribute list, if any.
    fn dynamic_list(&self) -> Option<String> {
        self.vars.get(FLAGS_VAR).map(|var| var.value.clone())
    }
}
