use crate::model::PermissionSet;
use crate::rules::{Finding, Rule, RuleMetadata, Severity};

/// Grants that let an app rewrite its own sandbox: creating files under the
/// Flatpak overrides directory, or talking to the Flatpak service or the
/// portal permission store.
pub struct PermissionEscalationRule;

impl Rule for PermissionEscalationRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            // Key spelling is load-bearing: it is the stable id the
            // translation catalog resolves.
            key: "can-aquire-arbitrary-permissions".into(),
            name: "Permission escalation".into(),
            description: "Can grant itself arbitrary permissions".into(),
            severity: Severity::Unsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        let escalates = permissions.has_filesystem("xdg-data/flatpak/overrides:create")
            || permissions.talks_to("org.freedesktop.flatpak")
            || permissions.talks_to("org.freedesktop.impl.portal.permissionstore");
        escalates.then(|| Finding::new(Severity::Unsafe, "can-aquire-arbitrary-permissions"))
    }
}
