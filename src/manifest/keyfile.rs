use std::path::Path;

use crate::error::{Result, SafetyError};
use crate::model::AppDeclaration;

use super::ManifestAdapter;

/// Flatpak `metadata` keyfile adapter.
///
/// Reads the `[Application]` name, the `[Context]` permission lists
/// (`;`-separated, trailing separator tolerated) and the
/// `[Session Bus Policy]` grants. A keyfile carries no license or
/// verification data, so the metadata half of the declaration stays at its
/// defaults.
pub struct KeyfileAdapter;

impl ManifestAdapter for KeyfileAdapter {
    fn format_name(&self) -> &'static str {
        "flatpak-keyfile"
    }

    fn detect(&self, _path: &Path, content: &str) -> bool {
        content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'))
            .is_some_and(|line| line.starts_with('[') && line.ends_with(']'))
    }

    fn load(&self, path: &Path, content: &str) -> Result<AppDeclaration> {
        let mut declaration = AppDeclaration::default();
        let mut section = String::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                section = line[1..line.len() - 1].trim().to_ascii_lowercase();
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| SafetyError::Manifest {
                file: path.display().to_string(),
                message: format!("line {}: expected key=value, got '{line}'", idx + 1),
            })?;
            let key = key.trim();
            let value = value.trim();

            match section.as_str() {
                "application" if key == "name" => declaration.name = value.into(),
                "context" => {
                    let permissions = &mut declaration.permissions;
                    match key {
                        "shared" => permissions.shared = split_list(value),
                        "sockets" => permissions.sockets = split_list(value),
                        "devices" => permissions.devices = split_list(value),
                        "filesystems" => permissions.filesystems = split_list(value),
                        _ => {}
                    }
                }
                "session bus policy" => match value.to_ascii_lowercase().as_str() {
                    "talk" => declaration.permissions.session_bus.talk.push(key.into()),
                    "own" => declaration.permissions.session_bus.own.push(key.into()),
                    // "none" and "see" carry no grant the rules care about.
                    _ => {}
                },
                _ => {}
            }
        }

        if declaration.name.is_empty() {
            declaration.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "unknown".into());
        }

        Ok(declaration)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[Application]
name=org.example.Editor
runtime=org.freedesktop.Platform/x86_64/23.08

[Context]
shared=network;ipc;
sockets=wayland;fallback-x11;pulseaudio;
devices=dri;
filesystems=xdg-documents;xdg-download:ro;

[Session Bus Policy]
ca.desrt.dconf=talk
org.example.Editor.Helper=own
org.freedesktop.Notifications=none
";

    fn load(content: &str) -> AppDeclaration {
        KeyfileAdapter.load(Path::new("metadata"), content).unwrap()
    }

    #[test]
    fn parses_context_lists_with_trailing_separator() {
        let declaration = load(SAMPLE);
        assert_eq!(declaration.name, "org.example.Editor");
        assert_eq!(declaration.permissions.shared, vec!["network", "ipc"]);
        assert_eq!(
            declaration.permissions.filesystems,
            vec!["xdg-documents", "xdg-download:ro"]
        );
        assert!(declaration.permissions.has_device("dri"));
    }

    #[test]
    fn splits_bus_policy_by_verb() {
        let declaration = load(SAMPLE);
        assert_eq!(
            declaration.permissions.session_bus.talk,
            vec!["ca.desrt.dconf"]
        );
        assert_eq!(
            declaration.permissions.session_bus.own,
            vec!["org.example.Editor.Helper"]
        );
    }

    #[test]
    fn keyfile_metadata_stays_default() {
        let declaration = load(SAMPLE);
        assert!(declaration.metadata.project_license.is_none());
        assert!(!declaration.metadata.verified);
    }

    #[test]
    fn bare_value_line_is_a_manifest_error() {
        let err = KeyfileAdapter
            .load(Path::new("metadata"), "[Context]\nnetwork\n")
            .unwrap_err();
        assert!(matches!(err, SafetyError::Manifest { .. }));
    }

    #[test]
    fn detect_wants_a_leading_section_header() {
        assert!(KeyfileAdapter.detect(Path::new("metadata"), "# comment\n[Application]\n"));
        assert!(!KeyfileAdapter.detect(Path::new("metadata"), "{\"name\": 1}"));
        assert!(!KeyfileAdapter.detect(Path::new("metadata"), ""));
    }

    #[test]
    fn missing_name_falls_back_to_file_stem() {
        let declaration = KeyfileAdapter
            .load(Path::new("org.example.App.metadata"), "[Context]\nshared=network;\n")
            .unwrap();
        assert_eq!(declaration.name, "org.example.App");
    }
}
