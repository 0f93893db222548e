// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cyclic priority ordering of the stack.
//!
//! [`StackModel`] keeps the slots in priority order, front first. The slot at
//! position `k` holds `levels[k]`, so the per-slot priorities are a
//! permutation of the level table by construction and no runtime check is
//! needed to keep them that way.
//!
//! A flick calls [`StackModel::rotate`], which applies [`rotate`] to that
//! front-to-back list: the back-most slot becomes the front slot and every
//! other slot moves one level back.

use crate::config::STACK_DEPTH;
use crate::stack::SlotId;

/// Single right-cyclic rotation: the last element moves to the front and all
/// others shift back by one.
///
/// Pure and total. Applying it `N` times returns the input.
///
/// ```
/// use flickstack_core::model::rotate;
///
/// assert_eq!(rotate([1.0, 0.9, 0.8]), [0.8, 1.0, 0.9]);
/// ```
#[must_use]
pub fn rotate<T: Copy, const N: usize>(seq: [T; N]) -> [T; N] {
    let mut out = seq;
    if N > 1 {
        out.rotate_right(1);
    }
    out
}

/// Returns whether `values` holds every entry of `levels` exactly once.
#[must_use]
pub fn is_permutation(values: &[f64], levels: &[f64]) -> bool {
    values.len() == levels.len()
        && levels
            .iter()
            .all(|level| values.iter().filter(|&v| v == level).count() == 1)
}

/// Priority ordering of the stack's slots.
#[derive(Clone, Debug, PartialEq)]
pub struct StackModel {
    levels: [f64; STACK_DEPTH],
    /// Slots from front to back.
    order: [SlotId; STACK_DEPTH],
    rotations: u64,
}

impl StackModel {
    /// Creates a model with the identity assignment: slot `i` holds
    /// `levels[i]`.
    #[must_use]
    pub fn new(levels: [f64; STACK_DEPTH]) -> Self {
        Self {
            levels,
            order: identity_order(),
            rotations: 0,
        }
    }

    /// Restores the identity assignment.
    pub fn reset(&mut self) {
        self.order = identity_order();
        self.rotations = 0;
    }

    /// Rotates the stack once and returns the new per-slot priorities, in slot
    /// order.
    ///
    /// The slot that held the lowest priority now holds the highest.
    pub fn rotate(&mut self) -> [f64; STACK_DEPTH] {
        self.order = rotate(self.order);
        self.rotations += 1;
        self.priorities()
    }

    /// Current priority of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` does not belong to this stack.
    #[must_use]
    pub fn priority_of(&self, slot: SlotId) -> f64 {
        self.levels[self.depth_of(slot)]
    }

    /// Depth of `slot`, 0 being the front.
    ///
    /// # Panics
    ///
    /// Panics if `slot` does not belong to this stack.
    #[must_use]
    pub fn depth_of(&self, slot: SlotId) -> usize {
        self.order
            .iter()
            .position(|&s| s == slot)
            .unwrap_or_else(|| panic!("{slot:?} is not part of this stack"))
    }

    /// Per-slot priorities in slot order.
    #[must_use]
    pub fn priorities(&self) -> [f64; STACK_DEPTH] {
        let mut out = [0.0; STACK_DEPTH];
        for (depth, slot) in self.order.iter().enumerate() {
            out[slot.index() as usize] = self.levels[depth];
        }
        out
    }

    /// Slots from front to back.
    #[must_use]
    pub fn order(&self) -> &[SlotId; STACK_DEPTH] {
        &self.order
    }

    /// The slot currently holding the highest priority.
    #[must_use]
    pub fn front(&self) -> SlotId {
        self.order[0]
    }

    /// Returns whether `slot` is the front slot.
    #[must_use]
    pub fn is_front(&self, slot: SlotId) -> bool {
        self.front() == slot
    }

    /// Number of rotations since creation or the last reset.
    #[must_use]
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// The level table, front first.
    #[must_use]
    pub fn levels(&self) -> &[f64; STACK_DEPTH] {
        &self.levels
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "STACK_DEPTH is a small constant"
)]
fn identity_order() -> [SlotId; STACK_DEPTH] {
    core::array::from_fn(|i| SlotId::new(i as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [f64; 3] = [1.0, 0.9, 0.8];

    #[test]
    fn rotate_moves_last_to_front() {
        let out = rotate([1.0, 0.9, 0.8]);
        assert_eq!(out[0], 0.8, "back value moves to the front");
        assert_eq!(out[1], 1.0);
        assert_eq!(out[2], 0.9);
    }

    #[test]
    fn rotate_preserves_permutation() {
        let perms = [
            [1.0, 0.9, 0.8],
            [1.0, 0.8, 0.9],
            [0.9, 1.0, 0.8],
            [0.9, 0.8, 1.0],
            [0.8, 1.0, 0.9],
            [0.8, 0.9, 1.0],
        ];
        for p in perms {
            assert!(
                is_permutation(&rotate(p), &LEVELS),
                "rotate({p:?}) left the level set"
            );
        }
    }

    #[test]
    fn rotate_cycles_after_n() {
        let start = [1.0, 0.9, 0.8];
        let once = rotate(start);
        assert_ne!(once, start, "one rotation is not the identity for N = 3");
        assert_eq!(rotate(rotate(once)), start, "three rotations close the cycle");
    }

    #[test]
    fn rotate_single_and_empty() {
        assert_eq!(rotate([7]), [7]);
        let empty: [u8; 0] = [];
        assert_eq!(rotate(empty), empty);
    }

    #[test]
    fn model_starts_as_identity() {
        let model = StackModel::new(LEVELS);
        assert_eq!(model.priorities(), LEVELS);
        assert_eq!(model.front(), SlotId::new(0));
        assert_eq!(model.rotations(), 0);
    }

    #[test]
    fn model_rotation_brings_back_slot_forward() {
        let mut model = StackModel::new(LEVELS);
        let [a, b, c] = *model.order();

        let after = model.rotate();
        assert_eq!(model.priority_of(c), 1.0, "back slot is now front");
        assert_eq!(model.priority_of(a), 0.9, "former front is now second");
        assert_eq!(model.priority_of(b), 0.8);
        assert_eq!(after, [0.9, 0.8, 1.0]);
        assert!(model.is_front(c));
        assert!(is_permutation(&after, &LEVELS), "still a permutation");
    }

    #[test]
    fn model_returns_home_after_full_cycle() {
        let mut model = StackModel::new(LEVELS);
        for _ in 0..STACK_DEPTH {
            let _ = model.rotate();
        }
        assert_eq!(model.priorities(), LEVELS);
        assert_eq!(model.rotations(), 3);

        model.reset();
        assert_eq!(model.rotations(), 0);
    }

    #[test]
    fn permutation_check_rejects_duplicates() {
        assert!(!is_permutation(&[1.0, 1.0, 0.8], &LEVELS), "duplicate 1.0");
        assert!(!is_permutation(&[1.0, 0.9], &LEVELS), "missing a level");
    }

    #[test]
    #[should_panic(expected = "is not part of this stack")]
    fn foreign_slot_panics() {
        let model = StackModel::new(LEVELS);
        let _ = model.priority_of(SlotId::new(9));
    }
}
