// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style evaluation and change tracking.
//!
//! Every dirty channel is drained; a slot that appears in any drain has its
//! [`CardStyle`](crate::style::CardStyle) recomputed from its current state.
//! A non-empty `PRIORITY` drain also means the paint order changed.
//!
//! [`StyleChanges`] uses raw slot indices (`u32`) so presenters can read
//! [`style_at`](super::CardStack::style_at) directly.

use alloc::vec::Vec;

use super::id::SlotId;
use super::store::CardStack;
use crate::dirty;
use crate::style::derive_style;

/// The set of changes produced by a single [`CardStack::evaluate`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleChanges {
    /// Slots whose cached style was recomputed, ascending.
    pub restyled: Vec<u32>,
    /// Whether priorities changed, so the paint order must be refreshed.
    pub reordered: bool,
}

impl StyleChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.restyled.clear();
        self.reordered = false;
    }

    /// Returns whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restyled.is_empty() && !self.reordered
    }
}

impl CardStack {
    /// Recomputes the cached style of every dirty slot and returns what
    /// changed.
    pub fn evaluate(&mut self) -> StyleChanges {
        let mut changes = StyleChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer.
    pub fn evaluate_into(&mut self, changes: &mut StyleChanges) {
        changes.clear();

        // PRIORITY first: a non-empty drain means the paint order changed.
        changes.restyled.extend(
            self.dirty
                .drain(dirty::PRIORITY)
                .affected()
                .deterministic()
                .run(),
        );
        changes.reordered = !changes.restyled.is_empty();

        for channel in [dirty::MOTION, dirty::SCALE, dirty::DIRECTION] {
            changes.restyled.extend(
                self.dirty
                    .drain(channel)
                    .affected()
                    .deterministic()
                    .run(),
            );
        }
        changes.restyled.sort_unstable();
        changes.restyled.dedup();

        for &idx in &changes.restyled {
            let slot = idx as usize;
            let snapshot = self.snapshot(SlotId::new(idx));
            self.styles[slot] = derive_style(self.fills[slot], &snapshot, &self.config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{STACK_DEPTH, StackConfig};
    use crate::gesture::PanEvent;
    use crate::time::{HostTime, Timebase};

    const MS: u64 = 1_000_000;

    fn stack() -> CardStack {
        CardStack::new(
            StackConfig::portrait(400.0, 800.0),
            Timebase::NANOS,
            [None; STACK_DEPTH],
        )
    }

    fn begin(stack: &mut CardStack, dy: f64) {
        let front = stack.front();
        let _ = stack.handle_pan(
            front,
            PanEvent::Begin {
                absolute_x: 300.0,
                translation_y: dy,
            },
            HostTime(0),
        );
    }

    #[test]
    fn first_evaluate_styles_everything() {
        let mut stack = stack();
        let changes = stack.evaluate();
        assert_eq!(changes.restyled, [0, 1, 2]);
        assert!(changes.reordered, "initial priorities count as a reorder");
        for slot in stack.slots() {
            assert_eq!(*stack.style(slot), stack.derive(slot), "cache matches derive");
        }
        assert!(stack.evaluate().is_empty(), "nothing left to drain");
    }

    #[test]
    fn drag_restyles_only_the_front_slot() {
        let mut stack = stack();
        let _ = stack.evaluate();
        begin(&mut stack, -40.0);
        let changes = stack.evaluate();
        assert_eq!(changes.restyled, [0]);
        assert!(!changes.reordered);
        assert_eq!(stack.style_at(0).transform.translate_y, -40.0);
    }

    #[test]
    fn flick_reorders_and_restyles_all() {
        let mut stack = stack();
        let _ = stack.evaluate();
        begin(&mut stack, -40.0);
        let front = stack.front();
        let _ = stack.handle_pan(front, PanEvent::End, HostTime(0));
        let changes = stack.evaluate();
        assert!(changes.reordered);
        assert_eq!(changes.restyled, [0, 1, 2]);

        let new_front = SlotId::new(2);
        assert_eq!(stack.style(new_front).z_index, 100);
        assert_eq!(stack.style(new_front).bottom, 40.0);
    }

    #[test]
    fn tick_feeds_evaluate() {
        let mut stack = stack();
        begin(&mut stack, -100.0);
        let front = stack.front();
        let _ = stack.handle_pan(front, PanEvent::End, HostTime(0));
        let _ = stack.evaluate();

        // Scale finished at 250ms, so only the settling slot still moves.
        let _ = stack.tick(HostTime(250 * MS));
        let _ = stack.evaluate();
        let _ = stack.tick(HostTime(400 * MS));
        let changes = stack.evaluate();
        assert_eq!(changes.restyled, [0]);
        assert!(!changes.reordered);
        assert_eq!(*stack.style(front), stack.derive(front));
    }

    #[test]
    fn evaluate_into_reuses_buffer() {
        let mut stack = stack();
        let mut changes = StyleChanges::default();
        stack.evaluate_into(&mut changes);
        assert_eq!(changes.restyled.len(), 3);
        stack.evaluate_into(&mut changes);
        assert!(changes.is_empty(), "buffer cleared between calls");
    }

    #[test]
    fn reset_restyles_everything() {
        let mut stack = stack();
        let _ = stack.evaluate();
        stack.reset();
        let changes = stack.evaluate();
        assert_eq!(changes.restyled, [0, 1, 2]);
        assert!(changes.reordered);
    }
}
