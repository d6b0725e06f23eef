use serde::{Deserialize, Serialize};

/// The slice of catalog metadata the rating engine looks at beyond
/// permissions: licensing and publisher verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// SPDX-like license identifier, if the catalog knows one.
    pub project_license: Option<String>,
    /// Whether the publisher's identity has been verified by the catalog.
    pub verified: bool,
}

impl AppMetadata {
    /// An app counts as proprietary when it declares no license at all, an
    /// empty one, or a `LicenseRef-proprietary` identifier.
    pub fn is_proprietary(&self) -> bool {
        match self.project_license.as_deref() {
            None | Some("") => true,
            Some(license) => license.starts_with("LicenseRef-proprietary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_license(license: Option<&str>) -> AppMetadata {
        AppMetadata {
            project_license: license.map(|s| s.to_string()),
            verified: false,
        }
    }

    #[test]
    fn missing_license_is_proprietary() {
        assert!(with_license(None).is_proprietary());
    }

    #[test]
    fn empty_license_is_proprietary() {
        assert!(with_license(Some("")).is_proprietary());
    }

    #[test]
    fn license_ref_proprietary_is_proprietary() {
        assert!(with_license(Some("LicenseRef-proprietary-Spotify")).is_proprietary());
        assert!(with_license(Some("LicenseRef-proprietary")).is_proprietary());
    }

    #[test]
    fn free_license_is_not_proprietary() {
        assert!(!with_license(Some("GPL-3.0+")).is_proprietary());
        assert!(!with_license(Some("MIT")).is_proprietary());
    }
}
