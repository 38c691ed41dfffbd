//! Fixed-size-array practice sandbox.
//!
//! This module provides the [`ArraySandbox`] type: an integer buffer and a
//! string buffer manipulated with raw-array semantics. Every structural
//! mutation builds a replacement buffer of exactly the new length and swaps
//! it in, so the buffers never carry slack capacity.
//!
//! # Example
//!
//! ```rust
//! use structbox::prelude::*;
//!
//! let mut sandbox = ArraySandbox::new();
//! sandbox.append_integer(5);
//! sandbox.append_integer(-3);
//! sandbox.abs_all_integers();
//! sandbox.sort_integers_ascending();
//! assert_eq!(sandbox.copy_integers(), vec![3, 5]);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A practice sandbox over fixed-size integer and string buffers.
///
/// Both buffers start empty and can only be changed through the methods on
/// this type. Accessors hand out independent copies, never references into
/// internal storage, so callers cannot corrupt sandbox state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArraySandbox {
    /// The integer buffer. Length always equals the logical element count.
    integers: Vec<i32>,
    /// The string buffer. Length always equals the logical element count.
    strings: Vec<String>,
}

impl ArraySandbox {
    /// Creates a sandbox with both buffers empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an independent copy of the integer buffer.
    ///
    /// Mutating the returned vector never affects the sandbox.
    #[must_use]
    pub fn copy_integers(&self) -> Vec<i32> {
        self.integers.clone()
    }

    /// Returns an independent copy of the string buffer.
    ///
    /// Mutating the returned vector never affects the sandbox.
    #[must_use]
    pub fn copy_strings(&self) -> Vec<String> {
        self.strings.clone()
    }

    /// Returns the number of elements in the integer buffer.
    #[must_use]
    pub fn integer_count(&self) -> usize {
        self.integers.len()
    }

    /// Returns the number of elements in the string buffer.
    #[must_use]
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Grows the integer buffer by one slot, placing `value` last.
    ///
    /// All prior elements keep their positions.
    pub fn append_integer(&mut self, value: i32) {
        let mut grown = Vec::with_capacity(self.integers.len() + 1);
        grown.extend_from_slice(&self.integers);
        grown.push(value);
        self.integers = grown;
    }

    /// Grows the string buffer by one slot, placing `value` last.
    ///
    /// All prior elements keep their positions.
    pub fn append_string(&mut self, value: impl Into<String>) {
        let mut grown = Vec::with_capacity(self.strings.len() + 1);
        grown.extend_from_slice(&self.strings);
        grown.push(value.into());
        self.strings = grown;
    }

    /// Removes every element equal to `value` from the integer buffer.
    ///
    /// Survivors keep their relative order. Removing an absent value is a
    /// no-op.
    pub fn remove_integer(&mut self, value: i32) {
        self.integers = self
            .integers
            .iter()
            .copied()
            .filter(|&v| v != value)
            .collect();
    }

    /// Removes every element case-insensitively equal to `value` from the
    /// string buffer.
    ///
    /// Comparison lowercases both sides. Survivors keep their relative
    /// order.
    pub fn remove_string(&mut self, value: &str) {
        let needle = value.to_lowercase();
        self.strings = self
            .strings
            .iter()
            .filter(|s| s.to_lowercase() != needle)
            .cloned()
            .collect();
    }

    /// Inserts `value` into the integer buffer at `position`.
    ///
    /// The position is clamped to `[0, count]`: negative positions insert at
    /// the front, positions past the end append. All existing elements keep
    /// their relative order.
    pub fn insert_integer(&mut self, value: i32, position: isize) {
        let position = position.clamp(0, self.integers.len() as isize) as usize;

        let mut grown = Vec::with_capacity(self.integers.len() + 1);
        grown.extend_from_slice(&self.integers[..position]);
        grown.push(value);
        grown.extend_from_slice(&self.integers[position..]);
        self.integers = grown;
    }

    /// Removes the integer at `position`, shifting later elements left.
    ///
    /// Positions outside `[0, count)` leave the buffer untouched.
    pub fn remove_integer_at(&mut self, position: isize) {
        if position < 0 || position as usize >= self.integers.len() {
            return;
        }
        let position = position as usize;

        let mut shrunk = Vec::with_capacity(self.integers.len() - 1);
        shrunk.extend_from_slice(&self.integers[..position]);
        shrunk.extend_from_slice(&self.integers[position + 1..]);
        self.integers = shrunk;
    }

    /// Replaces the integer buffer with `values` truncated toward zero.
    ///
    /// Truncation is `as`-cast semantics: `-3.9` becomes `-3`, and values
    /// outside the `i32` range saturate at the bounds.
    pub fn reset_integers(&mut self, values: &[f64]) {
        self.integers = values.iter().map(|&v| v as i32).collect();
        tracing::debug!(count = self.integers.len(), "integer buffer reset");
    }

    /// Replaces the string buffer with the textual rendering of each value.
    ///
    /// Anything that implements [`std::fmt::Display`] is accepted; absent
    /// or null inputs are unrepresentable here, so there is no skip or
    /// failure path.
    pub fn reset_strings<T: std::fmt::Display>(&mut self, values: &[T]) {
        self.strings = values.iter().map(|v| v.to_string()).collect();
        tracing::debug!(count = self.strings.len(), "string buffer reset");
    }

    /// Replaces each negative integer with its magnitude, in place.
    ///
    /// Non-negative values are unchanged. `i32::MIN` has no positive
    /// counterpart and stays put.
    pub fn abs_all_integers(&mut self) {
        for value in &mut self.integers {
            *value = value.wrapping_abs();
        }
    }

    /// Sorts the integer buffer in ascending numeric order.
    pub fn sort_integers_ascending(&mut self) {
        self.integers.sort_unstable();
    }

    /// Sorts the string buffer ascending by case-insensitive comparison.
    pub fn sort_strings_case_insensitive(&mut self) {
        self.strings.sort_by_key(|s| s.to_lowercase());
    }

    /// Counts how many integers equal `value`.
    #[must_use]
    pub fn count_occurrences_int(&self, value: i32) -> usize {
        self.integers.iter().filter(|&&v| v == value).count()
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

    /// Returns every index at which the integer buffer holds `value`.
    ///
    /// Indices are ascending; the result is empty when the value is absent.
    #[must_use]
    pub fn find_integer_positions(&self, value: i32) -> Vec<usize> {
        self.integers
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == value)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the `(min, max)` of the integer buffer, or `None` if empty.
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
    #[must_use]
    pub fn count_repeated_integers(&self) -> usize {
        self.histogram().values().filter(|&&count| count > 1).count()
    }

    /// Returns true iff `other` has the same integers in the same order.
    #[must_use]
    pub fn equals_sequence(&self, other: &[i32]) -> bool {
        self.integers.as_slice() == other
    }

    /// Returns true iff `other` holds the same multiset of integers.
    ///
    /// Order-independent: both sides are sorted into copies and compared.
    #[must_use]
    pub fn has_same_integers_unordered(&self, other: &[i32]) -> bool {
        let mut ours = self.integers.clone();
        let mut theirs = other.to_vec();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }

    /// Replaces the integer buffer with `count` uniform random draws from
    /// `[min, max]` inclusive.
    ///
    /// Inverted bounds are swapped before drawing, so the call never fails.
    /// No seeding contract is provided; draws come from the thread-local
    /// generator.
    pub fn randomize_integers(&mut self, count: usize, min: i32, max: i32) {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let mut rng = rand::rng();
        self.integers = (0..count).map(|_| rng.random_range(low..=high)).collect();
        tracing::debug!(count, low, high, "integer buffer randomized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sandbox_is_empty() {
        let sandbox = ArraySandbox::new();
        assert_eq!(sandbox.integer_count(), 0);
        assert_eq!(sandbox.string_count(), 0);
        assert!(sandbox.copy_integers().is_empty());
        assert!(sandbox.copy_strings().is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let mut sandbox = ArraySandbox::new();
        sandbox.append_integer(1);
        sandbox.append_integer(2);
        sandbox.append_integer(3);
        assert_eq!(sandbox.copy_integers(), vec![1, 2, 3]);

        sandbox.append_string("a");
        sandbox.append_string("b");
        assert_eq!(sandbox.copy_strings(), vec!["a", "b"]);
    }

    #[test]
    fn copies_are_independent() {
        let mut sandbox = ArraySandbox::new();
        sandbox.append_integer(7);

        let mut copy = sandbox.copy_integers();
        copy.push(99);
        copy[0] = -1;

        assert_eq!(sandbox.copy_integers(), vec![7]);
    }

    #[test]
    fn append_then_remove_last_restores_sequence() {
        let mut sandbox = ArraySandbox::new();
        sandbox.append_integer(4);
        sandbox.append_integer(8);
        let before = sandbox.copy_integers();

        sandbox.append_integer(15);
        sandbox.remove_integer_at(sandbox.integer_count() as isize - 1);

        assert_eq!(sandbox.copy_integers(), before);
    }

    #[test]
    fn remove_integer_drops_all_occurrences() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[2.0, 1.0, 2.0, 3.0, 2.0]);
        sandbox.remove_integer(2);
        assert_eq!(sandbox.copy_integers(), vec![1, 3]);
    }

    #[test]
    fn remove_absent_integer_is_noop() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[1.0, 2.0]);
        sandbox.remove_integer(42);
        assert_eq!(sandbox.copy_integers(), vec![1, 2]);
    }

    #[test]
    fn remove_string_is_case_insensitive() {
        let mut sandbox = ArraySandbox::new();
        sandbox.append_string("Hola");
        sandbox.append_string("mundo");
        sandbox.append_string("HOLA");
        sandbox.remove_string("hola");
        assert_eq!(sandbox.copy_strings(), vec!["mundo"]);
    }

    #[test]
    fn insert_clamps_negative_position_to_front() {
        let mut a = ArraySandbox::new();
        let mut b = ArraySandbox::new();
        for sandbox in [&mut a, &mut b] {
            sandbox.reset_integers(&[1.0, 2.0, 3.0]);
        }

        a.insert_integer(0, -5);
        b.insert_integer(0, 0);

        assert_eq!(a.copy_integers(), b.copy_integers());
        assert_eq!(a.copy_integers(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn insert_clamps_past_end_position_to_count() {
        let mut a = ArraySandbox::new();
        let mut b = ArraySandbox::new();
        for sandbox in [&mut a, &mut b] {
            sandbox.reset_integers(&[1.0, 2.0, 3.0]);
        }

        a.insert_integer(9, a.integer_count() as isize + 5);
        b.insert_integer(9, b.integer_count() as isize);

        assert_eq!(a.copy_integers(), b.copy_integers());
        assert_eq!(a.copy_integers(), vec![1, 2, 3, 9]);
    }

    #[test]
    fn insert_in_middle_preserves_order() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[1.0, 3.0]);
        sandbox.insert_integer(2, 1);
        assert_eq!(sandbox.copy_integers(), vec![1, 2, 3]);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[1.0, 2.0]);
        sandbox.remove_integer_at(-1);
        sandbox.remove_integer_at(2);
        sandbox.remove_integer_at(100);
        assert_eq!(sandbox.copy_integers(), vec![1, 2]);
    }

    #[test]
    fn reset_integers_truncates_toward_zero() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[1.9, -1.9, 0.5, -0.5]);
        assert_eq!(sandbox.copy_integers(), vec![1, -1, 0, 0]);
    }

    #[test]
    fn reset_strings_renders_display_values() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_strings(&[10, 20, 30]);
        assert_eq!(sandbox.copy_strings(), vec!["10", "20", "30"]);
    }

    #[test]
    fn abs_flips_only_negatives() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[5.0, -3.0, 0.0]);
        sandbox.abs_all_integers();
        assert_eq!(sandbox.copy_integers(), vec![5, 3, 0]);
    }

    #[test]
    fn sort_ascending_is_idempotent() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[3.0, 1.0, 2.0]);
        sandbox.sort_integers_ascending();
        let once = sandbox.copy_integers();
        sandbox.sort_integers_ascending();
        assert_eq!(sandbox.copy_integers(), once);
        assert_eq!(once, vec![1, 2, 3]);
    }

    #[test]
    fn sort_strings_ignores_case() {
        let mut sandbox = ArraySandbox::new();
        sandbox.append_string("banana");
        sandbox.append_string("Apple");
        sandbox.append_string("cherry");
        sandbox.sort_strings_case_insensitive();
        assert_eq!(sandbox.copy_strings(), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn occurrence_counts() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[1.0, 2.0, 1.0]);
        assert_eq!(sandbox.count_occurrences_int(1), 2);
        assert_eq!(sandbox.count_occurrences_int(3), 0);

        sandbox.append_string("Ok");
        sandbox.append_string("OK");
        assert_eq!(sandbox.count_occurrences_string("ok"), 2);
        assert_eq!(sandbox.count_occurrences_string("missing"), 0);
    }

    #[test]
    fn find_positions_returns_ascending_indices() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[5.0, 1.0, 5.0, 5.0]);
        assert_eq!(sandbox.find_integer_positions(5), vec![0, 2, 3]);
        assert!(sandbox.find_integer_positions(9).is_empty());
    }

    #[test]
    fn range_of_empty_buffer_is_none() {
        let sandbox = ArraySandbox::new();
        assert_eq!(sandbox.integer_range(), None);
    }

    #[test]
    fn range_reports_min_and_max() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[4.0, -2.0, 7.0]);
        assert_eq!(sandbox.integer_range(), Some((-2, 7)));
    }

    #[test]
    fn histogram_counts_every_distinct_value() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[1.0, 1.0, 2.0, 3.0, 3.0, 3.0]);

        let histogram = sandbox.histogram();
        assert_eq!(histogram.len(), 3);
        assert_eq!(histogram[&1], 2);
        assert_eq!(histogram[&2], 1);
        assert_eq!(histogram[&3], 3);
    }

    #[test]
    fn repeated_count_matches_histogram() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[1.0, 1.0, 2.0, 3.0, 3.0, 3.0]);
        assert_eq!(sandbox.count_repeated_integers(), 2);
    }

    #[test]
    fn ordered_and_unordered_comparison_differ() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[3.0, 1.0, 2.0]);

        assert!(!sandbox.equals_sequence(&[1, 2, 3]));
        assert!(sandbox.has_same_integers_unordered(&[1, 2, 3]));
        assert!(sandbox.equals_sequence(&[3, 1, 2]));
        assert!(!sandbox.has_same_integers_unordered(&[1, 2]));
    }

    #[test]
    fn randomize_respects_count_and_bounds() {
        let mut sandbox = ArraySandbox::new();
        sandbox.randomize_integers(50, -3, 3);

        assert_eq!(sandbox.integer_count(), 50);
        assert!(sandbox.copy_integers().iter().all(|&v| (-3..=3).contains(&v)));
    }

    #[test]
    fn randomize_with_inverted_bounds_swaps_them() {
        let mut sandbox = ArraySandbox::new();
        sandbox.randomize_integers(20, 3, -3);

        assert_eq!(sandbox.integer_count(), 20);
        assert!(sandbox.copy_integers().iter().all(|&v| (-3..=3).contains(&v)));
    }

    #[test]
    fn serialization_roundtrip() {
        let mut sandbox = ArraySandbox::new();
        sandbox.reset_integers(&[1.0, 2.0]);
        sandbox.append_string("hello");

        let json = serde_json::to_string(&sandbox).unwrap();
        let deserialized: ArraySandbox = serde_json::from_str(&json).unwrap();
        assert_eq!(sandbox, deserialized);
    }
}
