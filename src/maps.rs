//! Reversed-key map practice sandbox.
//!
//! [`MapSandbox`] owns a single string-to-string map where every entry
//! inserted through [`MapSandbox::add_string`] or [`MapSandbox::reset`] gets
//! its key by reversing the value's characters: adding `"abc"` stores the
//! entry `("cba", "abc")`. The invariant is enforced only at those two
//! insertion points; [`MapSandbox::uppercase_all_keys`] is allowed to break
//! it.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Reverses a string character by character (Unicode scalar values, not
/// bytes).
fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// A practice sandbox over a string-to-string map with reversed keys.
///
/// Keys are unique; adding a value whose reversal is already a key
/// overwrites that entry. Two values differing only by case reverse to
/// distinct keys and coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSandbox {
    entries: HashMap<String, String>,
}

impl MapSandbox {
    /// Creates a sandbox with an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all values in ascending lexicographic order.
    #[must_use]
    pub fn values_sorted_ascending(&self) -> Vec<String> {
        let mut values: Vec<String> = self.entries.values().cloned().collect();
        values.sort();
        values
    }

    /// Returns all keys in descending lexicographic order.
    #[must_use]
    pub fn keys_sorted_descending(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort_by(|a, b| b.cmp(a));
        keys
    }

    /// Returns the lexicographically smallest key, or `None` if the map is
    /// empty.
    #[must_use]
    pub fn smallest_key(&self) -> Option<String> {
        self.entries.keys().min().cloned()
    }

    /// Returns the lexicographically largest value, or `None` if the map is
    /// empty.
    #[must_use]
    pub fn largest_value(&self) -> Option<String> {
        self.entries.values().max().cloned()
    }

    /// Returns every key converted to uppercase.
    ///
    /// Order is unspecified. Keys are unique in the map, but uppercasing may
    /// collide, so the returned collection can contain duplicates.
    #[must_use]
    pub fn keys_uppercased(&self) -> Vec<String> {
        self.entries.keys().map(|k| k.to_uppercase()).collect()
    }

    /// Returns the number of distinct values, compared case-sensitively.
    #[must_use]
    pub fn count_distinct_values(&self) -> usize {
        let distinct: HashSet<&str> = self.entries.values().map(String::as_str).collect();
        distinct.len()
    }

    /// Inserts `value` under its reversed characters as the key.
    ///
    /// If the reversed key is already present its value is overwritten, so
    /// the map may or may not grow.
    pub fn add_string(&mut self, value: impl Into<String>) {
        let value = value.into();
        let key = reverse(&value);
        self.entries.insert(key, value);
    }

    /// Removes the entry with exactly `key`; absent keys are a no-op.
    pub fn remove_by_key(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Removes every entry whose value exactly equals `value`.
    ///
    /// All entries are searched rather than assuming the reversed-key
    /// construction left at most one match.
    pub fn remove_by_value(&mut self, value: &str) {
        self.entries.retain(|_, v| v != value);
    }

    /// Clears the map, then inserts each object's textual rendering under
    /// its reversed key, in order.
    ///
    /// Later objects whose rendering reverses to an existing key overwrite
    /// the earlier entry. Inputs implement [`std::fmt::Display`], so there
    /// is no absent-value case to handle.
    pub fn reset<T: std::fmt::Display>(&mut self, objects: &[T]) {
        self.entries.clear();
        for object in objects {
            let value = object.to_string();
            self.entries.insert(reverse(&value), value);
        }
        tracing::debug!(count = self.entries.len(), "map reset");
    }

    /// Replaces every key with its uppercase form, values unchanged.
    ///
    /// If uppercasing makes two keys collide, the entry processed last wins;
    /// map iteration order is unspecified, so the winner is too. This
    /// operation may break the reversed-key invariant, which is only
    /// enforced at insertion.
    pub fn uppercase_all_keys(&mut self) {
        let rebuilt: HashMap<String, String> = self
            .entries
            .drain()
            .map(|(key, value)| (key.to_uppercase(), value))
            .collect();
        self.entries = rebuilt;
        tracing::debug!(count = self.entries.len(), "map keys uppercased");
    }

    /// Returns true iff every candidate exactly matches some current value.
    #[must_use]
    pub fn contains_all_values<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        candidates
            .iter()
            .all(|c| self.entries.values().any(|v| v == c.as_ref()))
    }
}
