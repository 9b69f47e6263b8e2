//! # Command Layer
//!
//! The core business logic of bootenv. Each command lives in its own
//! submodule and implements pure functions over the [`EnvStore`].
//!
//! Commands are completely UI-agnostic:
//! - **No I/O**: no stdout, stderr, or terminal concerns
//! - **No argument parsing**: that's the CLI layer's job
//! - **No exit codes**: return `Result`, let the caller decide
//!
//! Instead of strings, commands return [`CmdResult`]:
//! - `affected`: variables the command changed or removed
//! - `listed`: variables to display, already sorted
//! - `messages`: structured messages with levels (info, success, warning,
//!   error)
//!
//! The UI layer (CLI, serial console, test harness) decides how to render.
//!
//! ## Command Modules
//!
//! - [`print`]: Show one, several, or all variables
//! - [`set`]: Create or update a variable
//! - [`delete`]: Remove variables
//! - [`flags_info`]: The resolved type of every variable
//! - [`recovery`]: Force `bootcmd` to the configured recovery command

use serde::Serialize;

use crate::model::Variable;

pub mod delete;
pub mod flags_info;
pub mod print;
pub mod recovery;
pub mod set;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Variable>,
    pub listed: Vec<Variable>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<Variable>) -> Self {
        self.listed = listed;
        self
    }
}
