//! Flag lookup across the dynamic and static attribute lists.

use crate::attr;
use crate::config::ValidationPolicy;
use crate::flags::vartype::parse_vartype;
use crate::model::VarFlags;

/// Finds the flag string declared for `name`, dynamic list first.
///
/// A name present in the dynamic list shadows any static declaration, even
/// with an empty flag string. `None` means neither list mentions the name.
pub fn lookup_flags<'a>(
    dynamic: Option<&'a str>,
    static_list: &'a str,
    name: &str,
) -> Option<&'a str> {
    if let Some(dynamic) = dynamic {
        if let Some(flags) = attr::lookup(dynamic, name) {
            return Some(flags);
        }
    }
    attr::lookup(static_list, name)
}

/// Flags for a variable being created: whatever the current attribute lists
/// declare for its name, or cleared when they are silent.
pub fn initial_flags(name: &str, dynamic: Option<&str>, policy: &ValidationPolicy) -> VarFlags {
    match lookup_flags(dynamic, &policy.static_flags, name) {
        Some(flags) if !flags.is_empty() => {
            VarFlags::typed(parse_vartype(flags, policy.net_types))
        }
        _ => VarFlags::cleared(),
    }
}
