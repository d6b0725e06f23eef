//! Manifest adapters.
//!
//! Each adapter recognizes one on-disk declaration format and loads it into
//! the unified [`AppDeclaration`] the rule engine consumes.

pub mod keyfile;
pub mod summary;

use std::path::Path;

use crate::error::{Result, SafetyError};
use crate::model::AppDeclaration;

/// An adapter detects one manifest format and loads it into the input model.
pub trait ManifestAdapter: Send + Sync {
    /// Short format name, used in logs.
    fn format_name(&self) -> &'static str;

    /// Check if this adapter can handle the given file.
    fn detect(&self, path: &Path, content: &str) -> bool;

    /// Parse the file content into a declaration.
    fn load(&self, path: &Path, content: &str) -> Result<AppDeclaration>;
}

/// All registered adapters, in detection order.
pub fn all_adapters() -> Vec<Box<dyn ManifestAdapter>> {
    vec![
        Box::new(summary::SummaryAdapter),
        Box::new(keyfile::KeyfileAdapter),
    ]
}

/// Auto-detect the manifest format and load the declaration.
///
/// Adapters are tried in order; a matching adapter that fails to parse is
/// logged and skipped so a later adapter can still claim the file.
pub fn auto_detect_and_load(path: &Path) -> Result<AppDeclaration> {
    let content = std::fs::read_to_string(path)?;

    for adapter in all_adapters() {
        if adapter.detect(path, &content) {
            match adapter.load(path, &content) {
                Ok(declaration) => return Ok(declaration),
                Err(e) => {
                    tracing::warn!(
                        format = adapter.format_name(),
                        error = %e,
                        "adapter failed to load, trying next"
                    );
                }
            }
        }
    }

    Err(SafetyError::NoAdapter(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn auto_detects_summary_json() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(
            file,
            r#"{{"name": "org.example.App", "permissions": {{"shared": ["network"]}}}}"#
        )
        .unwrap();
        let declaration = auto_detect_and_load(file.path()).unwrap();
        assert_eq!(declaration.name, "org.example.App");
        assert!(declaration.permissions.has_shared("network"));
    }

    #[test]
    fn auto_detects_metadata_keyfile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[Application]\nname=org.example.App\n\n[Context]\nsockets=wayland;\n"
        )
        .unwrap();
        let declaration = auto_detect_and_load(file.path()).unwrap();
        assert_eq!(declaration.name, "org.example.App");
        assert!(declaration.permissions.has_socket("wayland"));
    }

    #[test]
    fn unrecognized_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a manifest of any kind").unwrap();
        let err = auto_detect_and_load(file.path()).unwrap_err();
        assert!(matches!(err, SafetyError::NoAdapter(_)));
    }
}
