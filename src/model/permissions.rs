use serde::{Deserialize, Serialize};

/// Declared sandbox permissions for one application.
///
/// Mirrors the shape of a Flatpak metadata `[Context]` section as exposed by
/// the catalog backend's permission summary. Every field is absent-safe:
/// a missing field means no grant of that kind. All token matching is
/// case-insensitive and exact (no prefix or substring matching).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionSet {
    /// Shared resources (e.g. `network`, `ipc`).
    pub shared: Vec<String>,
    /// IPC/display sockets (e.g. `x11`, `wayland`, `session-bus`).
    pub sockets: Vec<String>,
    /// Device classes (e.g. `all`, `dri`, `shm`, `kvm`).
    pub devices: Vec<String>,
    /// Filesystem grants, in declaration order. Each entry is a path token
    /// optionally suffixed `:ro`, `:rw`, or `:create`; unsuffixed means
    /// read-write.
    pub filesystems: Vec<String>,
    /// Session bus name grants.
    #[serde(rename = "session-bus", alias = "session_bus")]
    pub session_bus: BusGrants,
}

/// Bus-name grants, split by what the app may do with each name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusGrants {
    /// Names the app may call methods on.
    pub talk: Vec<String>,
    /// Names the app may register as.
    pub own: Vec<String>,
}

fn contains_token(list: &[String], token: &str) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(token))
}

impl PermissionSet {
    pub fn has_shared(&self, token: &str) -> bool {
        contains_token(&self.shared, token)
    }

    pub fn has_socket(&self, token: &str) -> bool {
        contains_token(&self.sockets, token)
    }

    pub fn has_device(&self, token: &str) -> bool {
        contains_token(&self.devices, token)
    }

    pub fn has_filesystem(&self, token: &str) -> bool {
        contains_token(&self.filesystems, token)
    }

    /// Whether the app may call methods on the given session bus name.
    pub fn talks_to(&self, name: &str) -> bool {
        contains_token(&self.session_bus.talk, name)
    }

    pub fn is_empty(&self) -> bool {
        self.shared.is_empty()
            && self.sockets.is_empty()
            && self.devices.is_empty()
            && self.filesystems.is_empty()
            && self.session_bus.talk.is_empty()
            && self.session_bus.own.is_empty()
    }
}
