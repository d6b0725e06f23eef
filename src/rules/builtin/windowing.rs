use crate::model::PermissionSet;
use crate::rules::{Finding, Rule, RuleMetadata, Severity};

/// X11 without sandboxing is a keylogging surface: any X client can snoop
/// input and windows of every other client. Apps that declare
/// `fallback-x11` only use X when Wayland is unavailable and are exempt.
pub struct LegacyX11Rule;

impl Rule for LegacyX11Rule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "uses-a-legacy-windowing-system".into(),
            name: "Legacy X11 windowing".into(),
            description: "Uses X11 without a Wayland fallback declaration".into(),
            severity: Severity::Unsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        (permissions.has_socket("x11") && !permissions.has_socket("fallback-x11"))
            .then(|| Finding::new(Severity::Unsafe, "uses-a-legacy-windowing-system"))
    }
}
