//! appsafety — permission-based safety rating for sandboxed applications.
//!
//! A pure rule engine inspects an app's declared sandbox permissions plus
//! license/verification metadata and produces an ordered, never-empty list
//! of severity-tagged findings.
//!
//! # Quick Start
//!
//! ```
//! use appsafety::model::{AppMetadata, PermissionSet};
//!
//! let metadata = AppMetadata {
//!     project_license: Some("GPL-3.0+".into()),
//!     verified: false,
//! };
//! let permissions = PermissionSet {
//!     shared: vec!["network".into()],
//!     ..Default::default()
//! };
//! let findings = appsafety::evaluate(&metadata, &permissions);
//! assert_eq!(findings[0].description_key, "has-network-access");
//! ```

pub mod config;
pub mod error;
pub mod manifest;
pub mod model;
pub mod output;
pub mod presentation;
pub mod rules;

use std::path::Path;

use config::Config;
use error::Result;
use model::{AppMetadata, PermissionSet};
use output::OutputFormat;
use rules::policy::RatingVerdict;
use rules::{Finding, RuleEngine};

/// Rate an app's permissions and metadata.
///
/// Pure and deterministic: no I/O, safe to call concurrently. The result
/// is never empty and is ordered by rule evaluation, not by severity.
pub fn evaluate(metadata: &AppMetadata, permissions: &PermissionSet) -> Vec<Finding> {
    RuleEngine::new().evaluate(metadata, permissions)
}

/// Options for a file-rating invocation.
#[derive(Debug, Clone)]
pub struct RateOptions {
    /// Path to config file (defaults to `.appsafety.toml` next to the
    /// manifest).
    pub config_path: Option<std::path::PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// CLI override for the fail_on threshold.
    pub fail_on_override: Option<rules::Severity>,
}

impl Default for RateOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            format: OutputFormat::Console,
            fail_on_override: None,
        }
    }
}

/// Complete rating report for one application.
#[derive(Debug)]
pub struct RatingReport {
    pub app_name: String,
    pub findings: Vec<Finding>,
    pub verdict: RatingVerdict,
}

/// Run a complete rating: load config, detect the manifest format,
/// evaluate the rule table, apply the policy.
pub fn rate(path: &Path, options: &RateOptions) -> Result<RatingReport> {
    let config_path = options.config_path.clone().unwrap_or_else(|| {
        path.parent()
            .unwrap_or_else(|| Path::new("."))
            .join(".appsafety.toml")
    });
    let mut config = Config::load(&config_path)?;

    if let Some(fail_on) = options.fail_on_override {
        config.policy.fail_on = fail_on;
    }

    let declaration = manifest::auto_detect_and_load(path)?;

    let engine = RuleEngine::new();
    let findings = engine.evaluate(&declaration.metadata, &declaration.permissions);

    let effective_findings = config.policy.apply(&findings);
    let verdict = config.policy.evaluate(&findings);

    Ok(RatingReport {
        app_name: declaration.name,
        findings: effective_findings,
        verdict,
    })
}

/// Render a rating report in the specified format.
pub fn render_report(report: &RatingReport, format: OutputFormat) -> Result<String> {
    output::render(
        &report.findings,
        &report.verdict,
        format,
        &report.app_name,
    )
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn safe_viewer_passes_with_fallback_finding() {
        let report = rate(
            Path::new("tests/fixtures/safe_viewer.json"),
            &RateOptions::default(),
        )
        .unwrap();
        assert_eq!(report.app_name, "org.example.SafeViewer");
        // Wayland fires no rule, so the fallback finding leads.
        assert_eq!(report.findings[0].description_key, "no-permissions");
        assert!(report.verdict.pass);
    }

    #[test]
    fn x11_editor_keyfile_fails_on_legacy_windowing() {
        let report = rate(
            Path::new("tests/fixtures/x11_editor.metadata"),
            &RateOptions::default(),
        )
        .unwrap();
        assert_eq!(report.app_name, "org.example.Editor");
        assert!(report
            .findings
            .iter()
            .any(|f| f.description_key == "uses-a-legacy-windowing-system"));
        assert!(report
            .findings
            .iter()
            .any(|f| f.description_key == "can-read-write-all-your-data"));
        assert!(!report.verdict.pass);
    }

    #[test]
    fn proprietary_verified_app_gets_both_metadata_findings() {
        let report = rate(
            Path::new("tests/fixtures/proprietary_player.json"),
            &RateOptions::default(),
        )
        .unwrap();
        let keys: Vec<_> = report
            .findings
            .iter()
            .map(|f| f.description_key.as_str())
            .collect();
        assert!(keys.contains(&"proprietary-code"));
        assert_eq!(*keys.last().unwrap(), "software-developer-verified");
        // fallback-x11 is declared, so no legacy windowing finding.
        assert!(!keys.contains(&"uses-a-legacy-windowing-system"));
        assert!(report.verdict.pass);
    }

    #[test]
    fn fail_on_override_tightens_the_verdict() {
        let options = RateOptions {
            fail_on_override: Some(rules::Severity::ProbablySafe),
            ..Default::default()
        };
        let report = rate(Path::new("tests/fixtures/safe_viewer.json"), &options).unwrap();
        // safe_viewer has only Safe findings, so even the tight threshold passes.
        assert!(report.verdict.pass);

        let report = rate(
            Path::new("tests/fixtures/proprietary_player.json"),
            &options,
        )
        .unwrap();
        assert!(!report.verdict.pass);
    }
}
