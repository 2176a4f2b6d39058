// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The bounded reactive settings store.
//!
//! [`SettingsStore`] owns the value map for the whole capture surface and
//! delegates durability to an injected [`SnapshotStore`]. All work happens
//! synchronously on the calling thread: a `set` clamps, updates, persists,
//! and notifies before it returns, so adapters can reason about strict
//! ordering without locks or queues.
//!
//! # Notification Invariants
//!
//! - Exactly one notification per observed value change; a `set` that lands
//!   on the current value is a complete no-op (no save, no callbacks).
//! - Callbacks fire after the new value is staged for persistence.
//! - Delivery order per key is subscription insertion order.
//! - Subscribers receive the value by copy, never a reference into the map.

use crate::bounds::{
    clamp, MemoryPolicy, JPEG_QUALITY_MAX, JPEG_QUALITY_MIN, PREVIEW_QUALITY_MAX,
};
use crate::error::{PersistError, SettingsError};
use crate::keys::SettingKey;
use crate::ports::SnapshotStore;
use crate::snapshot::SettingsSnapshot;
use crate::value::SettingValue;
use std::collections::BTreeMap;
use tracing::warn;

/// Handle returned by [`SettingsStore::subscribe`]; pass it back to
/// [`SettingsStore::unsubscribe`] to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

struct Subscriber {
    handle: SubscriptionHandle,
    key: SettingKey,
    callback: Box<dyn FnMut(SettingValue)>,
}

/// In-memory observable settings store with bounded values and best-effort
/// persistence.
pub struct SettingsStore<S> {
    policy: MemoryPolicy,
    // Current ceiling for the memory budgets; starts at the policy maximum
    // until a device capability is reported.
    memory_max_mb: i64,
    values: BTreeMap<SettingKey, SettingValue>,
    subscribers: Vec<Subscriber>,
    next_handle: u64,
    sink: S,
}

impl<S> SettingsStore<S> {
    /// Consume the store and return the persistence sink.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Borrow the persistence sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The `[min, max]` range currently enforced for the memory budgets.
    pub fn memory_range(&self) -> (i64, i64) {
        (self.policy.minimum_memory_mb, self.memory_max_mb)
    }

    /// Current value for `key`.
    pub fn value_of(&self, key: SettingKey) -> SettingValue {
        self.values
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_value())
    }

    /// Current value for a setting by name.
    pub fn get(&self, name: &str) -> Result<SettingValue, SettingsError> {
        let key: SettingKey = name.parse()?;
        Ok(self.value_of(key))
    }

    /// Capture the full surface as an ordered snapshot.
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingKey::ALL
            .into_iter()
            .map(|key| (key, self.value_of(key)))
            .collect()
    }

    /// Register a callback for every future change to the named setting.
    ///
    /// Multiple subscribers per setting are allowed; per-key delivery order
    /// is insertion order.
    pub fn subscribe<F>(
        &mut self,
        name: &str,
        callback: F,
    ) -> Result<SubscriptionHandle, SettingsError>
    where
        F: FnMut(SettingValue) + 'static,
    {
        let key: SettingKey = name.parse()?;
        let handle = SubscriptionHandle(self.next_handle);
        self.next_handle += 1;
        self.subscribers.push(Subscriber {
            handle,
            key,
            callback: Box::new(callback),
        });
        Ok(handle)
    }

    /// Detach a subscriber. A no-op for handles already removed.
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        self.subscribers.retain(|sub| sub.handle != handle);
    }

    /// Clamp or reject `value` for `key`.
    ///
    /// Slider-style numerics clamp silently. The preview tier and the
    /// toggles reject out-of-domain payloads instead: clamping `5` to tier
    /// `2` or coercing an integer into a toggle would silently reinterpret
    /// the request.
    fn admit(&self, key: SettingKey, value: SettingValue) -> Result<SettingValue, SettingsError> {
        if key.is_toggle() {
            return match value {
                SettingValue::Bool(_) => Ok(value),
                SettingValue::Int(_) => Err(SettingsError::InvalidValue {
                    key,
                    reason: "expected a boolean".to_owned(),
                }),
            };
        }
        let Some(raw) = value.as_int() else {
            return Err(SettingsError::InvalidValue {
                key,
                reason: "expected an integer".to_owned(),
            });
        };
        match key {
            SettingKey::MemoryUseMb | SettingKey::RawVideoMemoryUseMb => Ok(SettingValue::Int(
                clamp(raw, self.policy.minimum_memory_mb, self.memory_max_mb),
            )),
            SettingKey::JpegQuality => {
                Ok(SettingValue::Int(clamp(raw, JPEG_QUALITY_MIN, JPEG_QUALITY_MAX)))
            }
            SettingKey::CameraPreviewQuality => {
                if (0..=PREVIEW_QUALITY_MAX).contains(&raw) {
                    Ok(value)
                } else {
                    Err(SettingsError::InvalidValue {
                        key,
                        reason: format!("tier must be between 0 and {PREVIEW_QUALITY_MAX}"),
                    })
                }
            }
            _ => Ok(value),
        }
    }

    /// Compiled-in default for `key`, clamped into the current bounds.
    fn default_for(&self, key: SettingKey) -> SettingValue {
        let value = key.default_value();
        self.admit(key, value).unwrap_or(value)
    }

    fn notify(&mut self, key: SettingKey, value: SettingValue) {
        for sub in &mut self.subscribers {
            if sub.key == key {
                (sub.callback)(value);
            }
        }
    }
}

impl<S> SettingsStore<S>
where
    S: SnapshotStore,
{
    /// Create a store over `sink` with the default [`MemoryPolicy`].
    ///
    /// Values start at their compiled-in defaults; call
    /// [`load`](SettingsStore::load) to populate from the persisted snapshot.
    pub fn new(sink: S) -> Self {
        Self::with_policy(sink, MemoryPolicy::default())
    }

    /// Create a store with an explicit memory policy.
    pub fn with_policy(sink: S, policy: MemoryPolicy) -> Self {
        let mut store = Self {
            policy,
            memory_max_mb: policy.maximum_memory_mb,
            values: BTreeMap::new(),
            subscribers: Vec::new(),
            next_handle: 1,
            sink,
        };
        for key in SettingKey::ALL {
            let value = store.default_for(key);
            store.values.insert(key, value);
        }
        store
    }

    /// Populate every setting from the persisted snapshot, then fire one
    /// notification per setting so freshly attached subscribers render.
    ///
    /// A missing snapshot means first run; an unreadable one is logged and
    /// treated the same. Either way the store falls back to defaults —
    /// load never surfaces an error. Stored values are clamped against the
    /// current bounds on the way in; entries with the wrong payload type
    /// fall back to that setting's default.
    pub fn load(&mut self) {
        let snapshot = match self.sink.load() {
            Ok(snapshot) => snapshot,
            Err(PersistError::NotFound) => SettingsSnapshot::new(),
            Err(err) => {
                warn!(error = %err, "settings snapshot unreadable; falling back to defaults");
                SettingsSnapshot::new()
            }
        };
        for key in SettingKey::ALL {
            let value = snapshot
                .get(key)
                .and_then(|raw| self.admit(key, raw).ok())
                .unwrap_or_else(|| self.default_for(key));
            self.values.insert(key, value);
        }
        for key in SettingKey::ALL {
            let value = self.value_of(key);
            self.notify(key, value);
        }
    }

    /// Report device capability and recompute the memory ceiling.
    ///
    /// Budgets already above the new ceiling are clamped down; only values
    /// that actually move are persisted and notified.
    pub fn set_capability(&mut self, total_mb: i64) {
        self.memory_max_mb = self.policy.effective_max(total_mb);
        let mut changed = Vec::new();
        for key in SettingKey::ALL.into_iter().filter(|k| k.is_memory_budget()) {
            if let Some(current) = self.value_of(key).as_int() {
                let next = clamp(current, self.policy.minimum_memory_mb, self.memory_max_mb);
                if next != current {
                    self.values.insert(key, SettingValue::Int(next));
                    changed.push((key, SettingValue::Int(next)));
                }
            }
        }
        if let Some((first, _)) = changed.first() {
            self.persist_best_effort(*first);
        }
        for (key, value) in changed {
            self.notify(key, value);
        }
    }

    /// Write a setting by name.
    ///
    /// Slider values clamp into range; enum-domain and toggle payloads are
    /// rejected when they do not fit (see the crate docs). When the
    /// admitted value equals the current one, nothing happens. Otherwise the
    /// store updates, persists best-effort, and notifies the key's
    /// subscribers before returning.
    pub fn set<V>(&mut self, name: &str, value: V) -> Result<(), SettingsError>
    where
        V: Into<SettingValue>,
    {
        let key: SettingKey = name.parse()?;
        self.set_key(key, value.into())
    }

    /// Write a setting by key. Same semantics as [`set`](Self::set).
    pub fn set_key(&mut self, key: SettingKey, value: SettingValue) -> Result<(), SettingsError> {
        let admitted = self.admit(key, value)?;
        if self.value_of(key) == admitted {
            return Ok(());
        }
        self.values.insert(key, admitted);
        self.persist_best_effort(key);
        self.notify(key, admitted);
        Ok(())
    }

    /// Serialize the current surface and hand it to the persistence sink.
    ///
    /// Failure is reported to the caller; in-memory state is never rolled
    /// back — the store keeps the latest intent even when durability lags.
    pub fn persist(&mut self) -> Result<(), PersistError> {
        let snapshot = self.snapshot();
        self.sink.save(&snapshot)
    }

    fn persist_best_effort(&mut self, key: SettingKey) {
        if let Err(err) = self.persist() {
            warn!(setting = %key, error = %err, "persist failed; keeping in-memory value");
        }
    }
}
