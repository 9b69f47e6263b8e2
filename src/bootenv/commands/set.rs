use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EnvStore;

/// Creates or updates a variable. `forced` bypasses write-once protection.
pub fn run(store: &mut EnvStore, name: &str, value: &str, forced: bool) -> Result<CmdResult> {
    let var = store.set(name, value, forced)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{}={}", var.name, var.value)));
    result.affected.push(var);
    Ok(result)
}
