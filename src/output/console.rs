use crate::presentation;
use crate::rules::policy::RatingVerdict;
use crate::rules::{Finding, Severity};

/// Render findings as console output.
///
/// Findings stay in rule-evaluation order; that order is part of the
/// engine contract and must not be re-sorted by severity.
pub fn render(findings: &[Finding], verdict: &RatingVerdict, app_name: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n  Safety rating for {} ({} finding(s)):\n\n",
        app_name,
        findings.len()
    ));

    for finding in findings {
        let severity_tag = match finding.severity {
            Severity::Unsafe => "[UNSAFE]            ",
            Severity::PotentiallyUnsafe => "[POTENTIALLY UNSAFE]",
            Severity::ProbablySafe => "[PROBABLY SAFE]     ",
            Severity::Safe => "[SAFE]              ",
        };

        output.push_str(&format!(
            "  {} {}\n",
            severity_tag, finding.description_key
        ));
        output.push_str(&format!(
            "           icon: {}\n",
            finding
                .icon
                .as_deref()
                .unwrap_or_else(|| presentation::icon(finding.severity))
        ));
    }

    let status = if verdict.pass { "PASS" } else { "FAIL" };
    output.push_str(&format!(
        "\n  Result: {} (threshold: {}, highest: {})\n\n",
        status,
        verdict.fail_threshold,
        verdict
            .highest_severity
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".into()),
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::policy::Policy;

    #[test]
    fn keeps_rule_order_in_output() {
        // Unsafe before potentially-unsafe would be violated by a
        // severity sort; the renderer must keep input order.
        let findings = vec![
            Finding::new(Severity::ProbablySafe, "has-network-access"),
            Finding::new(Severity::Unsafe, "uses-session-services"),
            Finding::new(Severity::Safe, "auditable-code"),
        ];
        let verdict = Policy::default().evaluate(&findings);
        let rendered = render(&findings, &verdict, "org.example.App");

        let network = rendered.find("has-network-access").unwrap();
        let session = rendered.find("uses-session-services").unwrap();
        let license = rendered.find("auditable-code").unwrap();
        assert!(network < session && session < license);
    }

    #[test]
    fn verdict_line_reports_fail() {
        let findings = vec![Finding::new(Severity::Unsafe, "uses-session-services")];
        let verdict = Policy::default().evaluate(&findings);
        let rendered = render(&findings, &verdict, "org.example.App");
        assert!(rendered.contains("Result: FAIL"));
        assert!(rendered.contains("highest: unsafe"));
    }
}
