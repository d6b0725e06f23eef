//! Input model for safety rating.
//!
//! All adapters produce an `AppDeclaration`. The rule engine consumes its
//! `AppMetadata` and `PermissionSet` halves. This decouples manifest-format
//! parsing from the rating rules.

pub mod metadata;
pub mod permissions;

use serde::{Deserialize, Serialize};

pub use metadata::AppMetadata;
pub use permissions::{BusGrants, PermissionSet};

/// Everything known about one application at rating time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppDeclaration {
    /// Application identifier (e.g. `org.gnome.Maps`).
    #[serde(default)]
    pub name: String,
    /// License and verification metadata.
    #[serde(flatten)]
    pub metadata: AppMetadata,
    /// Declared sandbox permissions.
    #[serde(default)]
    pub permissions: PermissionSet,
}
