// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selected-note bookkeeping.

use alloc::vec::Vec;

/// Selected keys with a primary key, an anchor and a revision counter.
///
/// Keys are unique and kept in the order they were selected. The primary is
/// the key most recently added; the anchor is where a replace started. The
/// revision only moves when the contents or either role actually change, so
/// observers can compare revisions instead of contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection<K> {
    keys: Vec<K>,
    primary: Option<usize>,
    anchor: Option<usize>,
    revision: u64,
}

impl<K> Selection<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            primary: None,
            anchor: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns the selected keys in selection order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Iterates over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Returns the primary key.
    #[must_use]
    pub fn primary(&self) -> Option<&K> {
        self.primary.map(|i| &self.keys[i])
    }

    /// Returns the anchor key.
    #[must_use]
    pub fn anchor(&self) -> Option<&K> {
        self.anchor.map(|i| &self.keys[i])
    }

    /// Returns the change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        self.keys.clear();
        self.primary = None;
        self.anchor = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K: PartialEq> Selection<K> {
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    /// Replaces the selection with `keys`, ignoring duplicates.
    ///
    /// The first key becomes both primary and anchor.
    pub fn replace_with(&mut self, keys: impl IntoIterator<Item = K>) {
        let mut next = Vec::new();
        for key in keys {
            if !next.contains(&key) {
                next.push(key);
            }
        }
        let role = (!next.is_empty()).then_some(0);
        if next == self.keys && self.primary == role && self.anchor == role {
            return;
        }
        self.keys = next;
        self.primary = role;
        self.anchor = role;
        self.touch();
    }

    /// Adds every key not yet selected. The last added key becomes primary.
    pub fn extend_with(&mut self, keys: impl IntoIterator<Item = K>) {
        let mut added = None;
        for key in keys {
            if !self.contains(&key) {
                self.keys.push(key);
                added = Some(self.keys.len() - 1);
            }
        }
        if added.is_some() {
            self.primary = added;
            if self.anchor.is_none() {
                self.anchor = self.primary;
            }
            self.touch();
        }
    }

    /// Selects `key` if it is not selected, deselects it otherwise.
    pub fn toggle(&mut self, key: K) {
        match self.index_of(&key) {
            Some(i) => self.remove_at(i),
            None => {
                self.keys.push(key);
                self.primary = Some(self.keys.len() - 1);
                if self.anchor.is_none() {
                    self.anchor = self.primary;
                }
            }
        }
        self.touch();
    }

    /// Deselects `key`. Returns `true` if it was selected.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(i) = self.index_of(key) else {
            return false;
        };
        self.remove_at(i);
        self.touch();
        true
    }

    /// Keeps only the keys for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        let mut i = 0;
        let mut changed = false;
        while i < self.keys.len() {
            if keep(&self.keys[i]) {
                i += 1;
            } else {
                self.remove_at(i);
                changed = true;
            }
        }
        if changed {
            self.touch();
        }
    }

    fn index_of(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    fn remove_at(&mut self, index: usize) {
        self.keys.remove(index);
        let shift = |role: Option<usize>| match role {
            Some(r) if r == index => None,
            Some(r) if r > index => Some(r - 1),
            other => other,
        };
        self.primary = shift(self.primary);
        self.anchor = shift(self.anchor);
    }
}
