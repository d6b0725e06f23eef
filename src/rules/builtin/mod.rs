mod bus;
mod devices;
mod escalation;
mod filesystem;
mod network;
mod windowing;

use super::Rule;

/// Returns all built-in permission rules in their fixed evaluation order.
///
/// Order is part of the engine contract: findings are reported in this
/// order, and the fallback finding only applies when none of these fired.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(network::NetworkRule),
        Box::new(bus::SystemBusRule),
        Box::new(bus::SessionBusRule),
        Box::new(devices::AllDevicesRule),
        Box::new(devices::SystemDevicesRule),
        Box::new(filesystem::FullReadWriteRule),
        Box::new(filesystem::FullReadOnlyRule),
        Box::new(filesystem::DownloadsReadWriteRule),
        Box::new(filesystem::DownloadsReadOnlyRule),
        Box::new(filesystem::ArbitraryFilesRule),
        Box::new(bus::UserSettingsRule),
        Box::new(windowing::LegacyX11Rule),
        Box::new(escalation::PermissionEscalationRule),
    ]
}
