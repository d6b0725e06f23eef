//! D-Bus related rules: raw bus sockets and specific bus-name grants.

use crate::model::PermissionSet;
use crate::rules::{Finding, Rule, RuleMetadata, Severity};

/// Unfiltered access to the system bus.
pub struct SystemBusRule;

impl Rule for SystemBusRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "uses-system-services".into(),
            name: "System bus socket".into(),
            description: "Unfiltered access to system services".into(),
            severity: Severity::PotentiallyUnsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        permissions
            .has_socket("system-bus")
            .then(|| Finding::new(Severity::PotentiallyUnsafe, "uses-system-services"))
    }
}

/// Unfiltered access to the session bus. Rated higher than the system bus
/// because the session bus exposes the user's running applications.
pub struct SessionBusRule;

impl Rule for SessionBusRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "uses-session-services".into(),
            name: "Session bus socket".into(),
            description: "Unfiltered access to session services".into(),
            severity: Severity::Unsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        permissions
            .has_socket("session-bus")
            .then(|| Finding::new(Severity::Unsafe, "uses-session-services"))
    }
}

/// A talk grant on the dconf service lets the app read and change user
/// settings for every application.
pub struct UserSettingsRule;

impl Rule for UserSettingsRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "can-access-and-change-user-settings".into(),
            name: "User settings access".into(),
            description: "Can read and change user settings via dconf".into(),
            severity: Severity::PotentiallyUnsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        permissions.talks_to("ca.desrt.dconf").then(|| {
            Finding::new(
                Severity::PotentiallyUnsafe,
                "can-access-and-change-user-settings",
            )
            .with_icon("emblem-system-symbolic")
        })
    }
}
