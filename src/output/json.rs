use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::rules::policy::RatingVerdict;
use crate::rules::Finding;

#[derive(Serialize)]
struct JsonReport<'a> {
    app: &'a str,
    generated_at: DateTime<Utc>,
    findings: &'a [Finding],
    verdict: &'a RatingVerdict,
}

/// Render findings as a JSON report.
pub fn render(findings: &[Finding], verdict: &RatingVerdict, app_name: &str) -> Result<String> {
    let report = JsonReport {
        app: app_name,
        generated_at: Utc::now(),
        findings,
        verdict,
    };
    let json = serde_json::to_string_pretty(&report)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::policy::Policy;
    use crate::rules::Severity;

    #[test]
    fn report_round_trips_as_json() {
        let findings = vec![Finding::new(Severity::ProbablySafe, "has-network-access")];
        let verdict = Policy::default().evaluate(&findings);
        let rendered = render(&findings, &verdict, "org.example.App").unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["app"], "org.example.App");
        assert_eq!(value["findings"][0]["severity"], "probably-safe");
        assert_eq!(value["findings"][0]["description_key"], "has-network-access");
        assert_eq!(value["verdict"]["pass"], true);
        assert!(value["generated_at"].is_string());
    }
}
