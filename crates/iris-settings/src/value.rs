// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Setting payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value carried by a setting: an integer (sliders, enum tiers) or a
/// boolean (toggles).
///
/// Untagged serde so snapshots serialize as a flat JSON object
/// (`{"jpegQuality": 95, "raw10": false}`). `Bool` is listed first: untagged
/// deserialization tries variants in order, and every JSON boolean must land
/// on `Bool`, never be coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// A toggle state.
    Bool(bool),
    /// A numeric value.
    Int(i64),
}

impl SettingValue {
    /// Integer payload, if this is an `Int`.
    pub fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::Bool(_) => None,
        }
    }

    /// Boolean payload, if this is a `Bool`.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(v),
            Self::Int(_) => None,
        }
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_keeps_types_apart() {
        let int: SettingValue = serde_json::from_str("1024").unwrap();
        let boolean: SettingValue = serde_json::from_str("true").unwrap();
        assert_eq!(int, SettingValue::Int(1024));
        assert_eq!(boolean, SettingValue::Bool(true));
    }
}
