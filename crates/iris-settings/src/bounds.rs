// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Numeric bounds: static ranges and the capability-derived memory ceiling.

/// Inclusive range for [`SettingKey::JpegQuality`](crate::SettingKey::JpegQuality).
pub const JPEG_QUALITY_MIN: i64 = 0;
/// Upper end of the JPEG quality range.
pub const JPEG_QUALITY_MAX: i64 = 100;

/// Highest preview quality tier (tiers are 0, 1, 2).
pub const PREVIEW_QUALITY_MAX: i64 = 2;

/// Memory-budget policy injected at store construction.
///
/// These are deployment constants, not derived values: the minimum keeps
/// capture viable, the maximum caps the budget on large-memory devices. The
/// per-session ceiling between them comes from reported device capability
/// via [`effective_max`](MemoryPolicy::effective_max).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryPolicy {
    /// Lower bound for both memory budgets, in MB.
    pub minimum_memory_mb: i64,
    /// Absolute upper bound for both memory budgets, in MB.
    pub maximum_memory_mb: i64,
}

impl Default for MemoryPolicy {
    fn default() -> Self {
        Self {
            minimum_memory_mb: 512,
            maximum_memory_mb: 4096,
        }
    }
}

impl MemoryPolicy {
    /// Ceiling for the memory budgets on a device reporting `total_mb` of
    /// memory: `min(total − 2·minimum, maximum)`, floored at the minimum so
    /// the range never inverts on small devices.
    ///
    /// Reserving twice the minimum keeps headroom for the rest of the
    /// process and the OS.
    pub fn effective_max(&self, total_mb: i64) -> i64 {
        (total_mb - 2 * self.minimum_memory_mb)
            .min(self.maximum_memory_mb)
            .max(self.minimum_memory_mb)
    }
}

/// Clamp `value` into the inclusive `[lo, hi]` range.
///
/// Unlike `i64::clamp`, an inverted range does not panic: `lo` wins.
#[allow(clippy::manual_clamp)]
pub fn clamp(value: i64, lo: i64, hi: i64) -> i64 {
    value.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_max_reserves_twice_the_minimum() {
        let policy = MemoryPolicy {
            minimum_memory_mb: 100,
            maximum_memory_mb: 2000,
        };
        assert_eq!(policy.effective_max(1800), 1600);
    }

    #[test]
    fn effective_max_is_capped_by_the_policy_maximum() {
        let policy = MemoryPolicy::default();
        assert_eq!(policy.effective_max(64 * 1024), 4096);
    }

    #[test]
    fn effective_max_floors_at_the_minimum_on_small_devices() {
        let policy = MemoryPolicy::default();
        assert_eq!(policy.effective_max(600), 512);
        assert_eq!(policy.effective_max(0), 512);
    }
}
