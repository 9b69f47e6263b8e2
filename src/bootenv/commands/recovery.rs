use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EnvStore;

const BOOTCMD_VAR: &str = "bootcmd";

/// Arms recovery boot by force-assigning `bootcmd`.
///
/// The assignment is forced so recovery still works when a policy marks
/// `bootcmd` write-once; type validation still applies.
pub fn run(store: &mut EnvStore, recovery_bootcmd: &str) -> Result<CmdResult> {
    let var = store.set(BOOTCMD_VAR, recovery_bootcmd, true)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recovery boot armed: {}={}",
        var.name, var.value
    )));
    result.affected.push(var);
    Ok(result)
}
