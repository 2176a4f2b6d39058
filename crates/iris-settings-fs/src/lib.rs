// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed [`SnapshotStore`] for Iris tools (platform config dir).

use directories::ProjectDirs;
use iris_settings::{PersistError, SettingsSnapshot, SnapshotStore};
use std::fs;
use std::path::{Path, PathBuf};

const SNAPSHOT_FILE: &str = "settings.json";

/// Store the settings snapshot as a JSON file under the platform config
/// directory.
pub struct FsSnapshotStore {
    base: PathBuf,
}

impl FsSnapshotStore {
    /// Create a store rooted at the user config directory (e.g.,
    /// `~/.config/Iris`).
    pub fn new() -> Result<Self, PersistError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "Iris")
            .ok_or_else(|| PersistError::Other("could not resolve config dir".into()))?;
        Ok(Self::with_base(proj.config_dir()))
    }

    /// Create a store rooted at an explicit directory. Nothing is created
    /// until the first save.
    pub fn with_base<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Path of the snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        self.base.join(SNAPSHOT_FILE)
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn load(&self) -> Result<SettingsSnapshot, PersistError> {
        let bytes = match fs::read(self.snapshot_path()) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(PersistError::NotFound)
            }
            Err(err) => return Err(PersistError::Io(err)),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&mut self, snapshot: &SettingsSnapshot) -> Result<(), PersistError> {
        fs::create_dir_all(&self.base)?;
        let data = serde_json::to_vec_pretty(snapshot)?;
        fs::write(self.snapshot_path(), data)?;
        Ok(())
    }
}
