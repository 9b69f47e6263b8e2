use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EnvStore;

/// Removes the named variables, stopping at the first rejection.
pub fn run(store: &mut EnvStore, names: &[String], forced: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for name in names {
        let removed = store.delete(name, forced)?;
        result.add_message(CmdMessage::success(format!("Deleted {}", removed.name)));
        result.affected.push(removed);
    }
    Ok(result)
}
