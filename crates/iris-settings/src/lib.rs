// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounded reactive settings store for Iris capture tools.
//!
//! `iris-settings` owns the in-memory capture settings surface: a fixed set of
//! named, bounded, observable values ([`SettingKey`]). The store clamps slider
//! inputs into range, derives the memory ceiling from reported device
//! capability, notifies subscribers synchronously on every value change, and
//! keeps a persisted [`SettingsSnapshot`] in sync through an injected
//! [`SnapshotStore`]. UI adapters stay thin: they render values (see
//! [`derived`]) and forward edits back in — they never own state.

pub mod bounds;
pub mod derived;
pub mod error;
pub mod keys;
pub mod ports;
pub mod snapshot;
pub mod store;
pub mod value;

pub use bounds::MemoryPolicy;
pub use error::{PersistError, SettingsError};
pub use keys::SettingKey;
pub use ports::{CapabilityProvider, MemorySnapshotStore, SnapshotStore};
pub use snapshot::SettingsSnapshot;
pub use store::{SettingsStore, SubscriptionHandle};
pub use value::SettingValue;
