use crate::commands::CmdResult;
use crate::error::{BootEnvError, Result};
use crate::model::Variable;
use crate::store::EnvStore;

/// Lists the named variables, or every variable when no names are given.
pub fn run(store: &EnvStore, names: &[String]) -> Result<CmdResult> {
    let listed: Vec<Variable> = if names.is_empty() {
        store
            .names()
            .into_iter()
            .filter_map(|name| store.get(name).cloned())
            .collect()
    } else {
        names
            .iter()
            .map(|name| {
                store
                    .get(name)
                    .cloned()
                    .ok_or_else(|| BootEnvError::VariableNotFound(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?
    };

    Ok(CmdResult::default().with_listed(listed))
}
