// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The fixed capture-settings surface: setting identifiers and defaults.

use crate::error::SettingsError;
use crate::value::SettingValue;
use std::fmt;
use std::str::FromStr;

/// Identifier for one setting on the capture surface.
///
/// The surface is closed: persistence names, subscriptions, and the CLI all
/// resolve to one of these variants. The string form (see [`as_str`]) is the
/// stable wire/persistence name and never changes for a shipped key.
///
/// [`as_str`]: SettingKey::as_str
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKey {
    /// Memory budget for still capture, in MB. Dynamically bounded.
    MemoryUseMb,
    /// Memory budget for RAW video buffering, in MB. Dynamically bounded.
    RawVideoMemoryUseMb,
    /// JPEG encode quality, 0–100.
    JpegQuality,
    /// Preview quality tier: 0 = low, 1 = medium, 2 = high.
    CameraPreviewQuality,
    /// Whether the dual exposure sliders are active.
    DualExposureControls,
    /// Automatic night-mode switching.
    AutoNightMode,
    /// Capture 10-bit RAW.
    Raw10,
    /// Capture 16-bit RAW.
    Raw16,
}

impl SettingKey {
    /// All keys, in persistence order.
    pub const ALL: [Self; 8] = [
        Self::MemoryUseMb,
        Self::RawVideoMemoryUseMb,
        Self::JpegQuality,
        Self::CameraPreviewQuality,
        Self::DualExposureControls,
        Self::AutoNightMode,
        Self::Raw10,
        Self::Raw16,
    ];

    /// Stable persistence name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MemoryUseMb => "memoryUseMb",
            Self::RawVideoMemoryUseMb => "rawVideoMemoryUseMb",
            Self::JpegQuality => "jpegQuality",
            Self::CameraPreviewQuality => "cameraPreviewQuality",
            Self::DualExposureControls => "dualExposureControls",
            Self::AutoNightMode => "autoNightMode",
            Self::Raw10 => "raw10",
            Self::Raw16 => "raw16",
        }
    }

    /// Returns `true` for the boolean toggles.
    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            Self::DualExposureControls | Self::AutoNightMode | Self::Raw10 | Self::Raw16
        )
    }

    /// Returns `true` for the two capability-bounded memory budgets.
    pub fn is_memory_budget(self) -> bool {
        matches!(self, Self::MemoryUseMb | Self::RawVideoMemoryUseMb)
    }

    /// Compiled-in default, used when no snapshot exists or a stored value
    /// is unusable.
    pub fn default_value(self) -> SettingValue {
        match self {
            Self::MemoryUseMb | Self::RawVideoMemoryUseMb => SettingValue::Int(1024),
            Self::JpegQuality => SettingValue::Int(95),
            Self::CameraPreviewQuality => SettingValue::Int(1),
            Self::DualExposureControls | Self::AutoNightMode | Self::Raw10 | Self::Raw16 => {
                SettingValue::Bool(false)
            }
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = SettingsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| SettingsError::UnknownSetting(name.to_owned()))
    }
}
