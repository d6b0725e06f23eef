use serde::{Deserialize, Serialize};

/// One safety observation about an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Risk level of the observation.
    pub severity: Severity,
    /// Stable identifier for the human-readable message, resolved by the
    /// presentation layer's translation catalog (e.g. "has-network-access").
    pub description_key: String,
    /// Optional symbolic icon identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Finding {
    pub fn new(severity: Severity, description_key: &str) -> Self {
        Self {
            severity,
            description_key: description_key.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Ordinal risk level. Ordering follows declaration order, so
/// `Safe < ProbablySafe < PotentiallyUnsafe < Unsafe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Safe,
    ProbablySafe,
    PotentiallyUnsafe,
    Unsafe,
}

impl Severity {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "safe" => Some(Self::Safe),
            "probably-safe" | "probably_safe" => Some(Self::ProbablySafe),
            "potentially-unsafe" | "potentially_unsafe" => Some(Self::PotentiallyUnsafe),
            "unsafe" => Some(Self::Unsafe),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::ProbablySafe => write!(f, "probably-safe"),
            Self::PotentiallyUnsafe => write!(f, "potentially-unsafe"),
            Self::Unsafe => write!(f, "unsafe"),
        }
    }
}

/// Metadata about a permission rule, used for `list-rules` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMetadata {
    /// The description key the rule emits when it fires.
    pub key: String,
    /// Human-readable rule name.
    pub name: String,
    /// What the rule looks for.
    pub description: String,
    /// Severity of the finding the rule emits.
    pub severity: Severity,
}
