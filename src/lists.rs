//! Growable-list practice sandbox.
//!
//! [`ListSandbox`] exposes the same operation surface as
//! [`ArraySandbox`](crate::arrays::ArraySandbox) but mutates its storage in
//! place: appends are amortized O(1), inserts shift instead of reallocating
//! the whole buffer. Two operations differ on purpose: the integer sort runs
//! descending, and duplicate counting walks the list against auxiliary
//! tracking collections instead of building a frequency map.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// A practice sandbox over growable integer and string lists.
///
/// The string list is a [`VecDeque`], an ordered list with cheap operations
/// at both ends. Accessors return owned copies of the storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSandbox {
    integers: Vec<i32>,
    strings: VecDeque<String>,
}

impl ListSandbox {
    /// Creates a sandbox with both lists empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an independent copy of the integer list.
    #[must_use]
    pub fn copy_integers(&self) -> Vec<i32> {
        self.integers.clone()
    }

    /// Returns an independent copy of the string list.
    #[must_use]
    pub fn copy_strings(&self) -> Vec<String> {
        self.strings.iter().cloned().collect()
    }

    /// Returns the number of elements in the integer list.
    #[must_use]
    pub fn integer_count(&self) -> usize {
        self.integers.len()
    }

    /// Returns the number of elements in the string list.
    #[must_use]
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Appends `value` to the end of the integer list.
    pub fn append_integer(&mut self, value: i32) {
        self.integers.push(value);
    }

    /// Appends `value` to the end of the string list.
    pub fn append_string(&mut self, value: impl Into<String>) {
        self.strings.push_back(value.into());
    }

    /// Removes every element equal to `value`, keeping survivor order.
    pub fn remove_integer(&mut self, value: i32) {
        self.integers.retain(|&v| v != value);
    }

    /// Removes every element case-insensitively equal to `value`, keeping
    /// survivor order.
    pub fn remove_string(&mut self, value: &str) {
        let needle = value.to_lowercase();
        self.strings.retain(|s| s.to_lowercase() != needle);
    }

    /// Inserts `value` at `position`, clamped to `[0, count]`.
    pub fn insert_integer(&mut self, value: i32, position: isize) {
        let position = position.clamp(0, self.integers.len() as isize) as usize;
        self.integers.insert(position, value);
    }

    /// Removes the integer at `position`; out-of-range positions are a
    /// no-op.
    pub fn remove_integer_at(&mut self, position: isize) {
        if position >= 0 && (position as usize) < self.integers.len() {
            self.integers.remove(position as usize);
        }
    }

    /// Replaces the integer list with `values` truncated toward zero.
    pub fn reset_integers(&mut self, values: &[f64]) {
        self.integers.clear();
        self.integers.extend(values.iter().map(|&v| v as i32));
        tracing::debug!(count = self.integers.len(), "integer list reset");
    }

    /// Replaces the string list with the textual rendering of each value.
    ///
    /// Inputs implement [`std::fmt::Display`], so there is no absent-value
    /// case to handle.
    pub fn reset_strings<T: std::fmt::Display>(&mut self, values: &[T]) {
        self.strings.clear();
        self.strings.extend(values.iter().map(|v| v.to_string()));
        tracing::debug!(count = self.strings.len(), "string list reset");
    }

    /// Replaces each negative integer with its magnitude, in place.
    pub fn abs_all_integers(&mut self) {
        for value in &mut self.integers {
            *value = value.wrapping_abs();
        }
    }

    /// Sorts the integer list from largest to smallest.
    pub fn sort_integers_descending(&mut self) {
        self.integers.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Sorts the string list ascending by case-insensitive comparison.
    pub fn sort_strings_case_insensitive(&mut self) {
        self.strings
            .make_contiguous()
            .sort_by_key(|s| s.to_lowercase());
    }

    /// Counts how many integers equal `value`.
    #[must_use]
    pub fn count_occurrences_int(&self, value: i32) -> usize {
        let mut count = 0;
        for &v in &self.integers {
            if v == value {
                count += 1;
            }
        }
        count
    }

    /// Counts how many strings case-insensitively equal `value`.
    #[must_use]
    pub fn count_occurrences_string(&self, value: &str) -> usize {
        let needle = value.to_lowercase();
        self.strings
            .iter()
            .filter(|s| s.to_lowercase() == needle)
            .count()
    }

    /// Returns every index at which the integer list holds `value`,
    /// ascending.
    #[must_use]
    pub fn find_integer_positions(&self, value: i32) -> Vec<usize> {
        self.integers
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == value)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the `(min, max)` of the integer list, or `None` if empty.
    #[must_use]
    pub fn integer_range(&self) -> Option<(i32, i32)> {
        let min = *self.integers.iter().min()?;
        let max = *self.integers.iter().max()?;
        Some((min, max))
    }

    /// Returns a map from each distinct integer to its occurrence count.
    #[must_use]
    pub fn histogram(&self) -> HashMap<i32, usize> {
        let mut counts = HashMap::new();
        for &value in &self.integers {
            *counts.entry(value).or_insert(0) += 1;
        }
        counts
    }

    /// Returns how many distinct integers occur more than once.
    ///
    /// Walks the list once against two tracking collections: values already
    /// seen, and values already known to repeat.
    #[must_use]
    pub fn count_repeated_integers(&self) -> usize {
        let mut seen: Vec<i32> = Vec::new();
        let mut repeated: Vec<i32> = Vec::new();

        for &value in &self.integers {
            if seen.contains(&value) {
                if !repeated.contains(&value) {
                    repeated.push(value);
                }
            } else {
                seen.push(value);
            }
        }

        repeated.len()
    }

    /// Returns true iff `other` has the same integers in the same order.
    #[must_use]
    pub fn compare_ordered(&self, other: &[i32]) -> bool {
        if other.len() != self.integers.len() {
            return false;
        }
        self.integers.iter().zip(other).all(|(a, b)| a == b)
    }

    /// Returns true iff `other` holds the same multiset of integers.
    #[must_use]
    pub fn has_same_integers_unordered(&self, other: &[i32]) -> bool {
        let mut ours = self.integers.clone();
        let mut theirs = other.to_vec();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }

    /// Replaces the integer list with `count` uniform random draws from
    /// `[min, max]` inclusive. Inverted bounds are swapped before drawing.
    pub fn randomize_integers(&mut self, count: usize, min: i32, max: i32) {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let mut rng = rand::rng();

        self.integers.clear();
        for _ in 0..count {
            self.integers.push(rng.random_range(low..=high));
        }
        tracing::debug!(count, low, high, "integer list randomized");
    }
}
