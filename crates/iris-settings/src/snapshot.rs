// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable full-state captures used for persistence round-trips.

use crate::keys::SettingKey;
use crate::value::SettingValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered name→value capture of the whole settings surface at one
/// instant.
///
/// Produced by the store on every persist, consumed on load. Backed by a
/// `BTreeMap` so iteration (and therefore the serialized form) is
/// deterministic — saving the same state twice yields byte-identical output.
/// Unknown names are preserved through deserialization and simply ignored by
/// the store, so snapshots written by newer builds load cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsSnapshot {
    entries: BTreeMap<String, SettingValue>,
}

impl SettingsSnapshot {
    /// Empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot holding the compiled-in default for every key.
    pub fn defaults() -> Self {
        SettingKey::ALL
            .into_iter()
            .map(|key| (key, key.default_value()))
            .collect()
    }

    /// Value stored for `key`, if any.
    pub fn get(&self, key: SettingKey) -> Option<SettingValue> {
        self.entries.get(key.as_str()).copied()
    }

    /// Insert or replace the value for `key`.
    pub fn insert(&mut self, key: SettingKey, value: SettingValue) {
        self.entries.insert(key.as_str().to_owned(), value);
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SettingValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(SettingKey, SettingValue)> for SettingsSnapshot {
    fn from_iter<I: IntoIterator<Item = (SettingKey, SettingValue)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (key, value) in iter {
            snapshot.insert(key, value);
        }
        snapshot
    }
}
