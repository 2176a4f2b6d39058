// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ports at the store's seams: snapshot persistence and device capability.

use crate::error::PersistError;
use crate::snapshot::SettingsSnapshot;

/// Storage port for settings snapshots.
///
/// Implementations must round-trip every name and value exactly; the format
/// is theirs to choose. Load returns [`PersistError::NotFound`] when no
/// snapshot has ever been saved — the store treats that as first run, not as
/// corruption.
pub trait SnapshotStore {
    /// Load the persisted snapshot. Returns `NotFound` when missing.
    fn load(&self) -> Result<SettingsSnapshot, PersistError>;
    /// Persist a snapshot, replacing any previous one.
    fn save(&mut self, snapshot: &SettingsSnapshot) -> Result<(), PersistError>;
}

/// Source of runtime device limits.
///
/// Queried by the adapter when wiring a store; re-callable to refresh the
/// memory ceiling.
pub trait CapabilityProvider {
    /// Total device memory in MB, if the platform exposes it.
    fn total_memory_mb(&self) -> Option<i64>;
}

/// In-memory [`SnapshotStore`] for tests and tools.
///
/// Tracks how many saves were issued so tests can assert persistence
/// cadence (one save per observed change, none for no-op sets).
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshot: Option<SettingsSnapshot>,
    saves: usize,
}

impl MemorySnapshotStore {
    /// Empty store (loads report `NotFound`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a snapshot.
    pub fn with_snapshot(snapshot: SettingsSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    /// Number of saves issued so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// The last saved (or seeded) snapshot.
    pub fn stored(&self) -> Option<&SettingsSnapshot> {
        self.snapshot.as_ref()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<SettingsSnapshot, PersistError> {
        self.snapshot.clone().ok_or(PersistError::NotFound)
    }

    fn save(&mut self, snapshot: &SettingsSnapshot) -> Result<(), PersistError> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::keys::SettingKey;
    use crate::value::SettingValue;

    #[test]
    fn empty_store_reports_not_found() {
        let store = MemorySnapshotStore::new();
        assert!(matches!(store.load(), Err(PersistError::NotFound)));
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemorySnapshotStore::new();
        let mut snapshot = SettingsSnapshot::new();
        snapshot.insert(SettingKey::JpegQuality, SettingValue::Int(80));
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), snapshot);
        assert_eq!(store.save_count(), 1);
    }
}
