//! Re-derivation of every variable's flags after the flag list changes.

use std::collections::HashMap;

use crate::attr;
use crate::config::ValidationPolicy;
use crate::flags::vartype::parse_vartype;
use crate::model::{VarFlags, Variable};

/// Rebuilds the flags of every stored variable from scratch.
///
/// Runs after the dynamic flag list is created, updated, or deleted:
/// 1. clear every variable's flags,
/// 2. apply the static policy list,
/// 3. apply the new dynamic value, so its pairs override static ones.
///
/// Pairs naming a variable not in the store are ignored; a pair with an
/// empty flag string clears. Idempotent for an unchanged dynamic value.
pub fn reapply_all(
    vars: &mut HashMap<String, Variable>,
    dynamic: Option<&str>,
    policy: &ValidationPolicy,
) {
    for var in vars.values_mut() {
        var.flags = VarFlags::cleared();
    }
    apply_list(vars, &policy.static_flags, policy.net_types);
    if let Some(dynamic) = dynamic {
        apply_list(vars, dynamic, policy.net_types);
    }
}

fn apply_list(vars: &mut HashMap<String, Variable>, list: &str, net_types: bool) {
    attr::walk(list, |name, flags| {
        if let Some(var) = vars.get_mut(name) {
            var.flags = if flags.is_empty() {
                VarFlags::cleared()
            } else {
                VarFlags::typed(parse_vartype(flags, net_types))
            };
        }
    });
}
