use std::collections::HashSet;

use indexmap::IndexSet;

use crate::core::BarKey;

/// Ordered set of highlighted bars, held by key.
///
/// Keys are weak: the owning datasets may drop a bar at any time, so callers
/// prune with [`ActiveBars::retain_existing`] after structural changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveBars {
    keys: IndexSet<BarKey>,
}

impl ActiveBars {
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: BarKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = BarKey> + '_ {
        self.keys.iter().copied()
    }

    /// Replaces the whole set.
    pub fn replace(&mut self, keys: impl IntoIterator<Item = BarKey>) {
        self.keys = keys.into_iter().collect();
    }

    /// Click-to-select policy: an already active bar is removed, any other
    /// bar becomes the only active one. Applied per key, in order.
    pub fn toggle(&mut self, keys: impl IntoIterator<Item = BarKey>) {
        for key in keys {
            if !self.keys.shift_remove(&key) {
                self.keys.clear();
                self.keys.insert(key);
            }
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Drops keys that are not in `existing`; returns how many were dropped.
    pub fn retain_existing(&mut self, existing: &HashSet<BarKey>) -> usize {
        let before = self.keys.len();
        self.keys.retain(|key| existing.contains(key));
        before - self.keys.len()
    }
}
