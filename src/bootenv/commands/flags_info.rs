use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Variable;
use crate::store::{EnvStore, FLAGS_VAR};

/// Reports the resolved type of every variable.
///
/// The listed variables carry their current flags; an info message notes
/// whether a dynamic flag list is active.
pub fn run(store: &EnvStore) -> Result<CmdResult> {
    let listed: Vec<Variable> = store
        .names()
        .into_iter()
        .filter_map(|name| store.get(name).cloned())
        .collect();

    let mut result = CmdResult::default().with_listed(listed);
    match store.get_value(FLAGS_VAR) {
        Some(dynamic) => {
            result.add_message(CmdMessage::info(format!("Active flag list: {}", dynamic)));
        }
        None => {
            result.add_message(CmdMessage::info(
                "No dynamic flag list; static declarations only",
            ));
        }
    }
    Ok(result)
}
