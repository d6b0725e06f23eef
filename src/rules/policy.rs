use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Finding, Severity};

/// Rating verdict — the pass/fail decision after applying the ignore list
/// and severity overrides to the raw findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingVerdict {
    pub pass: bool,
    pub total_findings: usize,
    pub effective_findings: usize,
    pub highest_severity: Option<Severity>,
    pub fail_threshold: Severity,
}

/// Vetting policy loaded from `.appsafety.toml`.
///
/// This only shapes the verdict and the effective finding list. The raw
/// evaluation always keeps its full, never-empty output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Minimum severity to fail the rating.
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,
    /// Description keys to ignore entirely.
    #[serde(default)]
    pub ignore_keys: HashSet<String>,
    /// Per-key severity overrides.
    #[serde(default)]
    pub overrides: HashMap<String, Severity>,
}

fn default_fail_on() -> Severity {
    Severity::Unsafe
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            fail_on: Severity::Unsafe,
            ignore_keys: HashSet::new(),
            overrides: HashMap::new(),
        }
    }
}

impl Policy {
    /// Evaluate findings against this policy and produce a verdict.
    pub fn evaluate(&self, findings: &[Finding]) -> RatingVerdict {
        let effective: Vec<Severity> = findings
            .iter()
            .filter(|f| !self.ignore_keys.contains(&f.description_key))
            .map(|f| {
                self.overrides
                    .get(&f.description_key)
                    .copied()
                    .unwrap_or(f.severity)
            })
            .collect();

        let highest = effective.iter().copied().max();
        let failed = effective.iter().any(|&sev| sev >= self.fail_on);

        RatingVerdict {
            pass: !failed,
            total_findings: findings.len(),
            effective_findings: effective.len(),
            highest_severity: highest,
            fail_threshold: self.fail_on,
        }
    }

    /// Filter findings: remove ignored keys, apply overrides. Order is
    /// preserved.
    pub fn apply(&self, findings: &[Finding]) -> Vec<Finding> {
        findings
            .iter()
            .filter(|f| !self.ignore_keys.contains(&f.description_key))
            .map(|f| {
                let mut f = f.clone();
                if let Some(&override_sev) = self.overrides.get(&f.description_key) {
                    f.severity = override_sev;
                }
                f
            })
            .collect()
    }
}
