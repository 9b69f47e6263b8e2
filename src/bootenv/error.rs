use thiserror::Error;

use crate::flags::validate::TypeCheckError;

#[derive(Error, Debug)]
pub enum BootEnvError {
    #[error("Can't overwrite \"{name}\"")]
    ProtectedVariable { name: String },

    #[error("Type check failure for \"{name}\" <= \"{value}\" (type: {code}): {reason}")]
    TypeMismatch {
        name: String,
        value: String,
        code: char,
        reason: TypeCheckError,
    },

    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, BootEnvError>;
