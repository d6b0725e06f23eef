//! Filesystem grant rules.
//!
//! Grant tokens carry their access suffix (`:ro`, `:rw`, `:create`) as part
//! of the token; an unsuffixed grant means read-write. The broad-grant token
//! lists below are shared with the arbitrary-files rule, which fires on any
//! grant entry that is not one of these tokens.

use crate::model::PermissionSet;
use crate::rules::{Finding, Rule, RuleMetadata, Severity};
use once_cell::sync::Lazy;

static FULL_READ_WRITE: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["home", "home:rw", "~", "~:rw", "host", "host:rw"]);

static FULL_READ_ONLY: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["home:ro", "~:ro", "host:ro"]);

static DOWNLOADS_READ_WRITE: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["xdg-download", "xdg-download:rw"]);

static DOWNLOADS_READ_ONLY: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["xdg-download:ro"]);

/// Every token already covered by the full/downloads rules.
static BROAD_TOKENS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    FULL_READ_WRITE
        .iter()
        .chain(FULL_READ_ONLY.iter())
        .chain(DOWNLOADS_READ_WRITE.iter())
        .chain(DOWNLOADS_READ_ONLY.iter())
        .copied()
        .collect()
});

fn has_any(permissions: &PermissionSet, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| permissions.has_filesystem(token))
}

/// Read-write access to the whole home directory or the host filesystem.
pub struct FullReadWriteRule;

impl Rule for FullReadWriteRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "can-read-write-all-your-data".into(),
            name: "Full filesystem read-write".into(),
            description: "Can read and write all your data".into(),
            severity: Severity::Unsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        has_any(permissions, &FULL_READ_WRITE).then(|| {
            Finding::new(Severity::Unsafe, "can-read-write-all-your-data")
                .with_icon("folder-documents-symbolic")
        })
    }
}

/// Read-only access to the whole home directory or the host filesystem.
/// Still rated unsafe: reading everything is enough to exfiltrate it.
pub struct FullReadOnlyRule;

impl Rule for FullReadOnlyRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "can-read-all-your-data".into(),
            name: "Full filesystem read-only".into(),
            description: "Can read all your data".into(),
            severity: Severity::Unsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        has_any(permissions, &FULL_READ_ONLY).then(|| {
            Finding::new(Severity::Unsafe, "can-read-all-your-data")
                .with_icon("folder-documents-symbolic")
        })
    }
}

/// Read-write access to the downloads folder.
pub struct DownloadsReadWriteRule;

impl Rule for DownloadsReadWriteRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "can-read-write-your-downloads".into(),
            name: "Downloads read-write".into(),
            description: "Can read and write your downloads".into(),
            severity: Severity::PotentiallyUnsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        has_any(permissions, &DOWNLOADS_READ_WRITE).then(|| {
            Finding::new(Severity::PotentiallyUnsafe, "can-read-write-your-downloads")
                .with_icon("folder-download-symbolic")
        })
    }
}

/// Read-only access to the downloads folder.
pub struct DownloadsReadOnlyRule;

impl Rule for DownloadsReadOnlyRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "can-read-your-downloads".into(),
            name: "Downloads read-only".into(),
            description: "Can read your downloads".into(),
            severity: Severity::PotentiallyUnsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        has_any(permissions, &DOWNLOADS_READ_ONLY).then(|| {
            Finding::new(Severity::PotentiallyUnsafe, "can-read-your-downloads")
                .with_icon("folder-download-symbolic")
        })
    }
}

/// Any filesystem grant outside the broad tokens above.
///
/// Deliberately evaluates over the whole grant list, not per entry: one
/// unmatched entry fires the rule even when another entry already fired a
/// full-filesystem rule. Mixed lists like `["home", "xdg-documents/Work"]`
/// therefore produce both findings.
pub struct ArbitraryFilesRule;

impl Rule for ArbitraryFilesRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            key: "can-access-arbitrary-files".into(),
            name: "Arbitrary file access".into(),
            description: "Can access arbitrary files outside the standard grants".into(),
            severity: Severity::PotentiallyUnsafe,
        }
    }

    fn check(&self, permissions: &PermissionSet) -> Option<Finding> {
        permissions
            .filesystems
            .iter()
            .any(|entry| {
                !BROAD_TOKENS
                    .iter()
                    .any(|token| entry.eq_ignore_ascii_case(token))
            })
            .then(|| Finding::new(Severity::PotentiallyUnsafe, "can-access-arbitrary-files"))
    }
}
