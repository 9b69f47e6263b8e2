//! # The Flags Engine
//!
//! Everything that gives environment variables their types and keeps
//! mutations honest:
//!
//! - **Type codes**: single characters (`s`, `d`, `x`, `b`, `i`, `m`)
//!   declaring a variable's value format
//! - **Validation**: checking a proposed value against the declared format
//! - **Lookup**: resolving a variable's flags from the dynamic `.flags`
//!   list, falling back to the static policy list
//! - **Re-derivation**: rebuilding every variable's flags when the dynamic
//!   list changes
//! - **Consistency**: the write-once-then-type gate every store mutation
//!   passes through
//!
//! The store calls into this module on every create, update, and delete;
//! nothing here performs I/O or touches the store directly.

mod consistency;
mod handler;
mod lookup;
pub mod validate;
pub mod vartype;

pub use consistency::validate_mutation;
pub use handler::reapply_all;
pub use lookup::{initial_flags, lookup_flags};
pub use validate::{validate_value, TypeCheckError};
pub use vartype::{parse_vartype, VarType, VARTYPE_LOC};
