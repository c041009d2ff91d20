//! Settings for evpn-deploy
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EVPN_DEPLOY_*)
//! 3. Settings file (`--settings`, or `evpn-deploy.toml` next to the inventory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub(crate) use loader::{find_line_number, suggest_from};
pub use loader::{resolve, with_env_overrides, ConfigWarning, LoadedSettings, SETTINGS_FILE_NAME};
pub use types::{
    ColorMode, DelaySettings, DeviceSettings, HostKeyChecking, OutputSettings, Settings,
    SshSettings, TimeoutSettings,
};
