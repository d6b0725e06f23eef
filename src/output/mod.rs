pub mod console;
pub mod json;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::policy::RatingVerdict;
use crate::rules::Finding;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl OutputFormat {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Some(Self::Console),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render findings into the specified format.
pub fn render(
    findings: &[Finding],
    verdict: &RatingVerdict,
    format: OutputFormat,
    app_name: &str,
) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render(findings, verdict, app_name)),
        OutputFormat::Json => json::render(findings, verdict, app_name),
    }
}
