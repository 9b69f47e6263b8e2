//! The consistency check every store mutation passes through.

use crate::config::ValidationPolicy;
use crate::error::BootEnvError;
use crate::flags::validate::validate_value;
use crate::model::{MutationOp, Variable};

/// Decides whether a mutation may proceed. Never mutates anything.
///
/// Checks run in order: write-once protection first, then type validation
/// against the flags of the existing entry. `forced` bypasses protection
/// but not type validation.
pub fn validate_mutation(
    existing: Option<&Variable>,
    name: &str,
    new_value: Option<&str>,
    op: MutationOp,
    forced: bool,
    policy: &ValidationPolicy,
) -> Result<(), BootEnvError> {
    if op != MutationOp::Create
        && !forced
        && !policy.allow_overwrite
        && is_protected(existing, name, policy)
    {
        return Err(BootEnvError::ProtectedVariable {
            name: name.to_string(),
        });
    }

    if op != MutationOp::Delete && policy.validate_types {
        let value = new_value.unwrap_or("");
        let vartype = existing.map(|var| var.flags.vartype).unwrap_or_default();
        if let Err(reason) = validate_value(value, vartype) {
            return Err(BootEnvError::TypeMismatch {
                name: name.to_string(),
                value: value.to_string(),
                code: vartype.code(),
                reason,
            });
        }
    }

    Ok(())
}

fn is_protected(existing: Option<&Variable>, name: &str, policy: &ValidationPolicy) -> bool {
    if !policy.write_once.iter().any(|w| w == name) {
        return false;
    }
    // A variable may be moved away from its factory default exactly once.
    if let Some(once) = &policy.overwrite_once {
        if once.name == name {
            if let Some(var) = existing {
                return var.value != once.default_value;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverwriteOnce;
    use crate::flags::vartype::VarType;
    use crate::model::VarFlags;

    fn var(name: &str, value: &str, vartype: VarType) -> Variable {
        Variable {
            name: name.to_string(),
            value: value.to_string(),
            flags: VarFlags::typed(vartype),
        }
    }

    #[test]
    fn creating_a_protected_name_is_allowed() {
        let policy = ValidationPolicy::default();
        assert!(validate_mutation(
            None,
            "serial#",
            Some("ABC123"),
            MutationOp::Create,
            false,
            &policy
        )
        .is_ok());
    }

    #[test]
    fn overwriting_a_protected_name_is_rejected() {
        let policy = ValidationPolicy::default();
        let existing = var("serial#", "ABC123", VarType::String);
        let err = validate_mutation(
            Some(&existing),
            "serial#",
            Some("XYZ789"),
            MutationOp::Update,
            false,
            &policy,
        )
        .unwrap_err();
        assert!(matches!(err, BootEnvError::ProtectedVariable { name } if name == "serial#"));
    }

    #[test]
    fn deleting_a_protected_name_is_rejected() {
        let policy = ValidationPolicy::default();
        let existing = var("serial#", "ABC123", VarType::String);
        assert!(validate_mutation(
            Some(&existing),
            "serial#",
            None,
            MutationOp::Delete,
            false,
            &policy
        )
        .is_err());
    }

    #[test]
    fn force_bypasses_protection() {
        let policy = ValidationPolicy::default();
        let existing = var("serial#", "ABC123", VarType::String);
        assert!(validate_mutation(
            Some(&existing),
            "serial#",
            Some("XYZ789"),
            MutationOp::Update,
            true,
            &policy
        )
        .is_ok());
    }

    #[test]
    fn allow_overwrite_disables_protection() {
        let policy = ValidationPolicy {
            allow_overwrite: true,
            ..ValidationPolicy::default()
        };
        let existing = var("serial#", "ABC123", VarType::String);
        assert!(validate_mutation(
            Some(&existing),
            "serial#",
            Some("XYZ789"),
            MutationOp::Update,
            false,
            &policy
        )
        .is_ok());
    }

    #[test]
    fn overwrite_once_allows_leaving_the_default_only() {
        let policy = ValidationPolicy {
            overwrite_once: Some(OverwriteOnce {
                name: "ethaddr".to_string(),
                default_value: "00:00:00:00:00:00".to_string(),
            }),
            ..ValidationPolicy::default()
        };

        // Still at the factory default: one rewrite is allowed.
        let factory = var("ethaddr", "00:00:00:00:00:00", VarType::MacAddr);
        assert!(validate_mutation(
            Some(&factory),
            "ethaddr",
            Some("aa:bb:cc:dd:ee:ff"),
            MutationOp::Update,
            false,
            &policy
        )
        .is_ok());

        // Already changed once: protected again.
        let changed = var("ethaddr", "aa:bb:cc:dd:ee:ff", VarType::MacAddr);
        assert!(validate_mutation(
            Some(&changed),
            "ethaddr",
            Some("11:22:33:44:55:66"),
            MutationOp::Update,
            false,
            &policy
        )
        .is_err());
    }

    #[test]
    fn type_mismatch_is_rejected_with_details() {
        let policy = ValidationPolicy::default();
        let existing = var("bootdelay", "3", VarType::Decimal);
        let err = validate_mutation(
            Some(&existing),
            "bootdelay",
            Some("fast"),
            MutationOp::Update,
            false,
            &policy,
        )
        .unwrap_err();
        match err {
            BootEnvError::TypeMismatch { name, value, code, .. } => {
                assert_eq!(name, "bootdelay");
                assert_eq!(value, "fast");
                assert_eq!(code, 'd');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn force_does_not_bypass_type_validation() {
        let policy = ValidationPolicy::default();
        let existing = var("bootdelay", "3", VarType::Decimal);
        assert!(validate_mutation(
            Some(&existing),
            "bootdelay",
            Some("fast"),
            MutationOp::Update,
            true,
            &policy
        )
        .is_err());
    }

    #[test]
    fn creates_are_validated_as_string() {
        // Flags are derived only after a create commits, so the creating
        // value itself is never type-checked.
        let policy = ValidationPolicy::default();
        assert!(validate_mutation(
            None,
            "bootdelay",
            Some("not a number"),
            MutationOp::Create,
            false,
            &policy
        )
        .is_ok());
    }

    #[test]
    fn deletes_skip_type_validation() {
        let policy = ValidationPolicy::default();
        let existing = var("bootdelay", "3", VarType::Decimal);
        assert!(validate_mutation(
            Some(&existing),
            "bootdelay",
            None,
            MutationOp::Delete,
            true,
            &policy
        )
        .is_ok());
    }

    #[test]
    fn validate_types_off_accepts_anything() {
        let policy = ValidationPolicy {
            validate_types: false,
            ..ValidationPolicy::default()
        };
        let existing = var("bootdelay", "3", VarType::Decimal);
        assert!(validate_mutation(
            Some(&existing),
            "bootdelay",
            Some("fast"),
            MutationOp::Update,
            false,
            &policy
        )
        .is_ok());
    }
}
