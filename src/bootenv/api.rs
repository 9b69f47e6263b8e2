//! # API Facade
//!
//! A **thin facade** over the command layer: the single entry point for all
//! bootenv operations, regardless of the UI being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It avoids business logic (that belongs in `commands/*.rs`), I/O, and
//! presentation concerns. The same facade serves the CLI, a serial console,
//! or a test harness.

use crate::commands;
use crate::error::Result;
use crate::store::EnvStore;

/// The main API facade for bootenv operations.
///
/// Owns the store plus the one policy value the commands need that the
/// store does not carry (the recovery boot command).
pub struct BootEnvApi {
    store: EnvStore,
    recovery_bootcmd: String,
}

impl BootEnvApi {
    pub fn new(store: EnvStore, recovery_bootcmd: impl Into<String>) -> Self {
        Self {
            store,
            recovery_bootcmd: recovery_bootcmd.into(),
        }
    }

    pub fn print(&self, names: &[String]) -> Result<commands::CmdResult> {
        commands::print::run(&self.store, names)
    }

    pub fn set(&mut self, name: &str, value: &str, forced: bool) -> Result<commands::CmdResult> {
        commands::set::run(&mut self.store, name, value, forced)
    }

    pub fn delete(&mut self, names: &[String], forced: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, names, forced)
    }

    pub fn flags_info(&self) -> Result<commands::CmdResult> {
        commands::flags_info::run(&self.store)
    }

    pub fn recovery(&mut self) -> Result<commands::CmdResult> {
        commands::recovery::run(&mut self.store, &self.recovery_bootcmd)
    }

    pub fn store(&self) -> &EnvStore {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
