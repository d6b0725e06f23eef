use std::path::Path;

use crate::error::{Result, SafetyError};
use crate::model::AppDeclaration;

use super::ManifestAdapter;

/// Catalog backend permission summary adapter.
///
/// Loads the per-app JSON summary document served by the catalog backend:
/// name, license, verification status, and the permission set under a
/// `permissions` key. Unknown fields are ignored and every field is
/// optional.
pub struct SummaryAdapter;

impl ManifestAdapter for SummaryAdapter {
    fn format_name(&self) -> &'static str {
        "summary-json"
    }

    fn detect(&self, path: &Path, content: &str) -> bool {
        if path.extension().is_some_and(|e| e == "json") {
            return true;
        }
        content.trim_start().starts_with('{')
    }

    fn load(&self, path: &Path, content: &str) -> Result<AppDeclaration> {
        let mut declaration: AppDeclaration =
            serde_json::from_str(content).map_err(|e| SafetyError::Manifest {
                file: path.display().to_string(),
                message: e.to_string(),
            })?;

        if declaration.name.is_empty() {
            declaration.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "unknown".into());
        }

        Ok(declaration)
    }
}
