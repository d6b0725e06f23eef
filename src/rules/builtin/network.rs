use crate::model::PermissionSet;
use crate::rules::{Finding, Rule, RuleMetadata, Severity};

/// Flags apps that share the host network namespace.
///
/// Network access is routine for most applications, so this only rates
/// "probably safe" rather than anything stronger.
pub struct NetworkRule;

impl Rule for NetworkRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "has-network-access".into(),
            name: "Network access".into(),
            description: "Can talk to the network".into(),
            severity: Severity::ProbablySafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        permissions.has_shared("network").then(|| {
            Finding::new(Severity::ProbablySafe, "has-network-access")
                .with_icon("network-wireless-symbolic")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_network_shared() {
        let permissions = PermissionSet {
            shared: vec!["network".into()],
            ..Default::default()
        };
        let finding = NetworkRule.check(&permissions).unwrap();
        assert_eq!(finding.severity, Severity::ProbablySafe);
        assert_eq!(finding.description_key, "has-network-access");
    }

    #[test]
    fn ignores_other_shared_resources() {
        let permissions = PermissionSet {
            shared: vec!["ipc".into()],
            ..Default::default()
        };
        assert!(NetworkRule.check(&permissions).is_none());
    }
}
