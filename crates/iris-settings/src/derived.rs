// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure display state derived from setting values.
//!
//! Adapters recompute these on every notification instead of storing the
//! results; derived state that is never stored cannot drift from its source
//! value.

use crate::keys::SettingKey;
use crate::value::SettingValue;

/// Label for a preview quality tier.
pub fn preview_quality_label(tier: i64) -> &'static str {
    match tier {
        0 => "low",
        1 => "medium",
        _ => "high",
    }
}

/// Display string for a memory budget.
pub fn memory_use_text(mb: i64) -> String {
    format!("{mb} MB")
}

/// Display string for JPEG quality.
pub fn jpeg_quality_text(quality: i64) -> String {
    format!("{quality}%")
}

/// Whether the preview quality slider is interactive.
///
/// The slider only applies while the dual exposure controls are active.
pub fn preview_quality_slider_enabled(dual_exposure_controls: bool) -> bool {
    dual_exposure_controls
}

/// Display string for any setting's current value.
pub fn display_text(key: SettingKey, value: SettingValue) -> String {
    match (key, value) {
        (SettingKey::MemoryUseMb | SettingKey::RawVideoMemoryUseMb, SettingValue::Int(mb)) => {
            memory_use_text(mb)
        }
        (SettingKey::JpegQuality, SettingValue::Int(q)) => jpeg_quality_text(q),
        (SettingKey::CameraPreviewQuality, SettingValue::Int(tier)) => {
            preview_quality_label(tier).to_owned()
        }
        (_, SettingValue::Bool(on)) => {
            let text = if on { "on" } else { "off" };
            text.to_owned()
        }
        (_, SettingValue::Int(v)) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_labels() {
        assert_eq!(preview_quality_label(0), "low");
        assert_eq!(preview_quality_label(1), "medium");
        assert_eq!(preview_quality_label(2), "high");
    }

    #[test]
    fn value_formatting() {
        assert_eq!(memory_use_text(1536), "1536 MB");
        assert_eq!(jpeg_quality_text(95), "95%");
    }

    #[test]
    fn slider_follows_dual_exposure() {
        assert!(preview_quality_slider_enabled(true));
        assert!(!preview_quality_slider_enabled(false));
    }

    #[test]
    fn display_text_dispatches_per_key() {
        assert_eq!(
            display_text(SettingKey::MemoryUseMb, SettingValue::Int(2048)),
            "2048 MB"
        );
        assert_eq!(
            display_text(SettingKey::CameraPreviewQuality, SettingValue::Int(1)),
            "medium"
        );
        assert_eq!(
            display_text(SettingKey::Raw10, SettingValue::Bool(true)),
            "on"
        );
    }
}
