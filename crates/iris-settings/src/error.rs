// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for the settings store and its persistence port.

use crate::keys::SettingKey;
use thiserror::Error;

/// Error type for snapshot persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    /// No snapshot present in the store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The name does not resolve to a key on the settings surface.
    #[error("unknown setting: {0}")]
    UnknownSetting(String),
    /// The payload cannot be admitted for this key (wrong type, or outside
    /// an enum domain that must not be clamped).
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// The key the payload was offered to.
        key: SettingKey,
        /// Why it was rejected.
        reason: String,
    },
    /// Persistence failed.
    #[error(transparent)]
    Persist(#[from] PersistError),
}
