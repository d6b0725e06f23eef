pub mod builtin;
pub mod finding;
pub mod policy;

use crate::model::{AppMetadata, PermissionSet};

pub use finding::{Finding, RuleMetadata, Severity};

/// A rule inspects a permission set and produces at most one finding.
pub trait Rule: Send + Sync {
    /// Metadata about this rule (key, name, severity).
    fn metadata(&self) -> RuleMetadata;

    /// Check the permission set. `Some` when the rule fires.
    fn check(&self, permissions: &PermissionSet) -> Option<Finding>;
}

/// The rule engine runs the ordered rule table against an app's
/// permissions, then appends the metadata-derived findings.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create a new engine with all built-in rules registered in their
    /// fixed evaluation order.
    pub fn new() -> Self {
        Self {
            rules: builtin::all_rules(),
        }
    }

    /// Rate an application.
    ///
    /// Runs every permission rule in order, falls back to a single
    /// "no-permissions" finding when none fired, then appends the license
    /// finding and, for verified publishers, the verification finding.
    /// The result is never empty and preserves rule order, not severity
    /// order.
    pub fn evaluate(&self, metadata: &AppMetadata, permissions: &PermissionSet) -> Vec<Finding> {
        let mut findings: Vec<Finding> = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(permissions))
            .collect();

        if findings.is_empty() {
            findings.push(
                Finding::new(Severity::Safe, "no-permissions")
                    .with_icon("security-high-symbolic"),
            );
        }

        if metadata.is_proprietary() {
            findings.push(
                Finding::new(Severity::ProbablySafe, "proprietary-code")
                    .with_icon("dialog-question-symbolic"),
            );
        } else {
            findings.push(
                Finding::new(Severity::Safe, "auditable-code").with_icon("system-search-symbolic"),
            );
        }

        if metadata.verified {
            findings.push(
                Finding::new(Severity::Safe, "software-developer-verified")
                    .with_icon("verified-checkmark-symbolic"),
            );
        }

        findings
    }

    /// List metadata for all registered permission rules, in evaluation
    /// order.
    pub fn list_rules(&self) -> Vec<RuleMetadata> {
        self.rules.iter().map(|rule| rule.metadata()).collect()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
