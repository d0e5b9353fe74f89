// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawn-rectangle list: the per-frame hit-test surface.
//!
//! The render loop clears the list at the start of a frame and pushes one
//! entry per drawn object, in paint order. Interaction code only ever borrows
//! it immutably, so a frame's list is effectively frozen once painting is done.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::{contains_point, intersects_rect};

/// One drawn rectangle and the key of the object it represents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitEntry<K> {
    /// Screen-space rectangle as painted.
    pub rect: Rect,
    /// Caller-defined object key.
    pub key: K,
}

/// Ordered list of drawn rectangles, in paint order (first drawn first).
///
/// Keys are opaque identifiers compared by value; the list never relies on
/// object identity.
#[derive(Clone, Debug)]
pub struct HitList<K> {
    entries: Vec<HitEntry<K>>,
}

impl<K> Default for HitList<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HitList<K> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty list with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Removes all entries, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Appends a drawn rectangle. Later entries are painted on top.
    pub fn push(&mut self, rect: Rect, key: K) {
        self.entries.push(HitEntry { rect, key });
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in paint order.
    #[must_use]
    pub fn entries(&self) -> &[HitEntry<K>] {
        &self.entries
    }

    /// Returns an iterator over the entries in paint order.
    pub fn iter(&self) -> core::slice::Iter<'_, HitEntry<K>> {
        self.entries.iter()
    }

    /// Returns the key of the topmost (most recently drawn) rect containing `pt`.
    #[must_use]
    pub fn hit_point(&self, pt: Point) -> Option<&K> {
        self.entries
            .iter()
            .rev()
            .find(|e| contains_point(e.rect, pt))
            .map(|e| &e.key)
    }

    /// Returns every entry whose rect intersects `rect`, topmost first.
    ///
    /// An object drawn more than once appears once per drawn rect.
    pub fn intersecting(&self, rect: Rect) -> impl Iterator<Item = &HitEntry<K>> + '_ {
        self.entries
            .iter()
            .rev()
            .filter(move |e| intersects_rect(e.rect, rect))
    }
}

impl<K> HitList<K>
where
    K: Clone + PartialEq,
{
    /// Returns the keys of every rect intersecting `rect`.
    ///
    /// Keys are reported topmost first (reverse paint order) without
    /// duplicates. The order is only meaningful within the current frame.
    #[must_use]
    pub fn hit_rect(&self, rect: Rect) -> Vec<K> {
        let mut keys: Vec<K> = Vec::new();
        for entry in self.intersecting(rect) {
            if !keys.iter().any(|k| k == &entry.key) {
                keys.push(entry.key.clone());
            }
        }
        keys
    }

    /// Returns the topmost drawn rect for `key`, if it was drawn this frame.
    #[must_use]
    pub fn rect_of(&self, key: &K) -> Option<Rect> {
        self.entries
            .iter()
            .rev()
            .find(|e| &e.key == key)
            .map(|e| e.rect)
    }
}

impl<'a, K> IntoIterator for &'a HitList<K> {
    type Item = &'a HitEntry<K>;
    type IntoIter = core::slice::Iter<'a, HitEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
