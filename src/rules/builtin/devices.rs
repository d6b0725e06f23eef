use crate::model::PermissionSet;
use crate::rules::{Finding, Rule, RuleMetadata, Severity};

/// The `all` device class exposes every device node to the sandbox.
pub struct AllDevicesRule;

impl Rule for AllDevicesRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "can-access-hardware-devices".into(),
            name: "All devices".into(),
            description: "Can access all hardware devices".into(),
            severity: Severity::PotentiallyUnsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        permissions.has_device("all").then(|| {
            Finding::new(Severity::PotentiallyUnsafe, "can-access-hardware-devices")
                .with_icon("drive-harddisk-symbolic")
        })
    }
}

/// Specific low-level device classes: shared memory and KVM.
pub struct SystemDevicesRule;

impl Rule for SystemDevicesRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "can-access-system-devices".into(),
            name: "System devices".into(),
            description: "Can access system devices (shm, kvm)".into(),
            severity: Severity::PotentiallyUnsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        (permissions.has_device("shm") || permissions.has_device("kvm"))
            .then(|| Finding::new(Severity::PotentiallyUnsafe, "can-access-system-devices"))
    }
}
