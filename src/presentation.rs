//! Severity presentation lookups consumed by rendering layers.
//!
//! Total functions over the closed severity enum, exhaustiveness-checked
//! by `match`. The style tokens follow the catalog frontend's swatch
//! palette; the icons are symbolic icon names.

use crate::rules::Severity;

/// Style token for the severity swatch.
pub fn color_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Safe => "safety-green",
        Severity::ProbablySafe => "safety-blue",
        Severity::PotentiallyUnsafe => "safety-orange",
        Severity::Unsafe => "safety-red",
    }
}

/// Symbolic icon for the severity. Safe and probably-safe share the
/// shield icon.
pub fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Safe | Severity::ProbablySafe => "security-high-symbolic",
        Severity::PotentiallyUnsafe => "security-medium-symbolic",
        Severity::Unsafe => "security-low-symbolic",
    }
}

/// Translation-catalog key for the severity label.
pub fn translation_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Safe => "safe",
        Severity::ProbablySafe => "probably-safe",
        Severity::PotentiallyUnsafe => "potentially-unsafe",
        Severity::Unsafe => "unsafe",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Severity; 4] = [
        Severity::Safe,
        Severity::ProbablySafe,
        Severity::PotentiallyUnsafe,
        Severity::Unsafe,
    ];

    #[test]
    fn every_severity_has_a_distinct_color() {
        let colors: std::collections::HashSet<_> = ALL.iter().map(|&s| color_class(s)).collect();
        assert_eq!(colors.len(), ALL.len());
    }

    #[test]
    fn safe_and_probably_safe_share_an_icon() {
        assert_eq!(icon(Severity::Safe), icon(Severity::ProbablySafe));
        assert_ne!(icon(Severity::Safe), icon(Severity::PotentiallyUnsafe));
        assert_ne!(icon(Severity::PotentiallyUnsafe), icon(Severity::Unsafe));
    }

    #[test]
    fn translation_keys_match_display() {
        for &severity in &ALL {
            assert_eq!(translation_key(severity), severity.to_string());
        }
    }
}
