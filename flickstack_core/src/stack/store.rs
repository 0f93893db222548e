// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays slot storage and read access.

use understory_dirty::{CycleHandling, DirtyTracker};

use crate::animation::{AnimatedValue, AnimationToken};
use crate::config::{STACK_DEPTH, StackConfig};
use crate::dirty;
use crate::gesture::{FlickDirection, SlotPhase};
use crate::model::StackModel;
use crate::style::{CardStyle, CardTransform, Position, Rgba8, SlotSnapshot, derive_style};
use crate::time::Timebase;

use super::id::SlotId;

/// A stack of [`STACK_DEPTH`] cards that can be flicked.
///
/// See the [module docs](super) for the frame loop.
#[derive(Debug)]
pub struct CardStack {
    pub(crate) config: StackConfig,
    pub(crate) timebase: Timebase,
    pub(crate) model: StackModel,

    // -- Per-slot animated state (written by that slot's controller) --
    pub(crate) offset: [AnimatedValue; STACK_DEPTH],
    pub(crate) rotation: [AnimatedValue; STACK_DEPTH],
    pub(crate) scale: [AnimatedValue; STACK_DEPTH],
    pub(crate) direction: [FlickDirection; STACK_DEPTH],
    pub(crate) phase: [SlotPhase; STACK_DEPTH],
    /// Token of the offset settle whose completion ends `Settling`.
    pub(crate) settle: [Option<AnimationToken>; STACK_DEPTH],

    // -- Host-supplied --
    pub(crate) fills: [Option<Rgba8>; STACK_DEPTH],

    // -- Derived (written by evaluate) --
    pub(crate) styles: [CardStyle; STACK_DEPTH],

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,
}

impl CardStack {
    /// Creates a stack in its initial order: slot `i` holds `levels[i]`.
    ///
    /// `fills` are the per-slot background colours, in slot order.
    ///
    /// # Panics
    ///
    /// Panics if the configured levels are not strictly decreasing.
    #[must_use]
    pub fn new(
        config: StackConfig,
        timebase: Timebase,
        fills: [Option<Rgba8>; STACK_DEPTH],
    ) -> Self {
        assert!(
            config.levels_are_ordered(),
            "stack levels must be strictly decreasing, got {:?}",
            config.levels
        );
        let model = StackModel::new(config.levels);
        let mut stack = Self {
            config,
            timebase,
            offset: [AnimatedValue::new(config.base_offset); STACK_DEPTH],
            rotation: [AnimatedValue::new(0.0); STACK_DEPTH],
            scale: config.levels.map(AnimatedValue::new),
            direction: [FlickDirection::Right; STACK_DEPTH],
            phase: [SlotPhase::Idle; STACK_DEPTH],
            settle: [None; STACK_DEPTH],
            fills,
            styles: [CardStyle {
                position: Position::Absolute,
                size: config.card_size,
                fill: None,
                bottom: config.fallback_bottom,
                z_index: 0,
                transform: CardTransform::IDENTITY,
            }; STACK_DEPTH],
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            model,
        };
        stack.mark_all();
        stack
    }

    /// Returns every slot to its initial priority and resting state, as if
    /// the stack had just been created.
    ///
    /// In-flight animations are dropped without completing.
    pub fn reset(&mut self) {
        self.model.reset();
        let priorities = self.model.priorities();
        for idx in 0..STACK_DEPTH {
            let _ = self.offset[idx].set(self.config.base_offset);
            let _ = self.rotation[idx].set(0.0);
            let _ = self.scale[idx].set(priorities[idx]);
            self.direction[idx] = FlickDirection::Right;
            self.phase[idx] = SlotPhase::Idle;
            self.settle[idx] = None;
        }
        self.mark_all();
    }

    fn mark_all(&mut self) {
        for idx in 0..STACK_DEPTH {
            for channel in dirty::ALL {
                self.dirty.mark(slot_key(idx), channel);
            }
        }
    }

    /// Returns the slot array index for `slot`, or `None` if it is not part
    /// of this stack.
    pub(crate) fn index_of(&self, slot: SlotId) -> Option<usize> {
        let idx = slot.index() as usize;
        (idx < STACK_DEPTH).then_some(idx)
    }

    /// Panics if `slot` is not part of this stack.
    pub(crate) fn validate(&self, slot: SlotId) -> usize {
        self.index_of(slot)
            .unwrap_or_else(|| panic!("{slot:?} out of range (depth {STACK_DEPTH})"))
    }

    // -- Query API --

    /// The stack configuration.
    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// The timebase used to convert configured durations into ticks.
    #[must_use]
    pub fn timebase(&self) -> Timebase {
        self.timebase
    }

    /// The priority model.
    #[must_use]
    pub fn model(&self) -> &StackModel {
        &self.model
    }

    /// All slots, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + use<> {
        (0..STACK_DEPTH).map(|i| SlotId::new(slot_key(i)))
    }

    /// The slot currently holding the highest priority; the only one that
    /// accepts drags.
    #[must_use]
    pub fn front(&self) -> SlotId {
        self.model.front()
    }

    /// Slots in paint order, back-most first.
    #[must_use]
    pub fn paint_order(&self) -> [SlotId; STACK_DEPTH] {
        let mut order = *self.model.order();
        order.reverse();
        order
    }

    /// Current priority of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not part of this stack.
    #[must_use]
    pub fn priority(&self, slot: SlotId) -> f64 {
        let _ = self.validate(slot);
        self.model.priority_of(slot)
    }

    /// Gesture phase of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not part of this stack.
    #[must_use]
    pub fn phase(&self, slot: SlotId) -> SlotPhase {
        self.phase[self.validate(slot)]
    }

    /// Current animated vertical offset of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not part of this stack.
    #[must_use]
    pub fn offset(&self, slot: SlotId) -> f64 {
        self.offset[self.validate(slot)].value()
    }

    /// Current rotation accumulator of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not part of this stack.
    #[must_use]
    pub fn rotation(&self, slot: SlotId) -> f64 {
        self.rotation[self.validate(slot)].value()
    }

    /// Current animated scale of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not part of this stack.
    #[must_use]
    pub fn scale(&self, slot: SlotId) -> f64 {
        self.scale[self.validate(slot)].value()
    }

    /// Returns whether any field of any slot is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.offset
            .iter()
            .chain(&self.rotation)
            .chain(&self.scale)
            .any(AnimatedValue::is_animating)
    }

    /// Captures the inputs of `slot`'s derived style.
    ///
    /// The flick direction is only visible to hosts through the rotation
    /// angle of the derived style.
    pub(crate) fn snapshot(&self, slot: SlotId) -> SlotSnapshot {
        let idx = self.validate(slot);
        SlotSnapshot {
            priority: self.model.priority_of(slot),
            offset: self.offset[idx].value(),
            rotation: self.rotation[idx].value(),
            scale: self.scale[idx].value(),
            direction: self.direction[idx],
        }
    }

    /// Computes `slot`'s style from its current state, without touching the
    /// cache or dirty state.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not part of this stack.
    #[must_use]
    pub fn derive(&self, slot: SlotId) -> CardStyle {
        let idx = self.validate(slot);
        derive_style(self.fills[idx], &self.snapshot(slot), &self.config)
    }

    /// Returns `slot`'s cached style.
    ///
    /// Only current after [`evaluate`](Self::evaluate).
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not part of this stack.
    #[must_use]
    pub fn style(&self, slot: SlotId) -> &CardStyle {
        &self.styles[self.validate(slot)]
    }

    /// Returns the cached style at raw slot index `idx`, as found in
    /// [`StyleChanges`](super::StyleChanges).
    ///
    /// # Panics
    ///
    /// Panics if `idx >= STACK_DEPTH`.
    #[must_use]
    pub fn style_at(&self, idx: u32) -> &CardStyle {
        assert!(
            (idx as usize) < STACK_DEPTH,
            "slot index {idx} out of range (depth {STACK_DEPTH})"
        );
        &self.styles[idx as usize]
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "slot indices are below STACK_DEPTH"
)]
pub(crate) const fn slot_key(idx: usize) -> u32 {
    idx as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> CardStack {
        CardStack::new(StackConfig::default(), Timebase::NANOS, [None; STACK_DEPTH])
    }

    #[test]
    fn new_stack_is_identity_and_resting() {
        let stack = stack();
        let slots: [SlotId; 3] = [SlotId::new(0), SlotId::new(1), SlotId::new(2)];
        assert_eq!(stack.front(), slots[0]);
        for (slot, level) in slots.iter().zip([1.0, 0.9, 0.8]) {
            assert_eq!(stack.priority(*slot), level);
            assert_eq!(stack.scale(*slot), level, "scale starts at priority");
            assert_eq!(stack.offset(*slot), 0.0);
            assert_eq!(stack.rotation(*slot), 0.0);
            assert_eq!(stack.phase(*slot), SlotPhase::Idle);
        }
        assert!(!stack.is_animating());
    }

    #[test]
    fn paint_order_is_back_to_front() {
        let stack = stack();
        let order = stack.paint_order();
        assert_eq!(order, [SlotId::new(2), SlotId::new(1), SlotId::new(0)]);
    }

    #[test]
    fn derive_matches_snapshot() {
        let stack = stack();
        let front = stack.front();
        let style = stack.derive(front);
        assert_eq!(style.z_index, 100);
        assert_eq!(style.bottom, 40.0);
        assert_eq!(style.transform.scale, 1.0);
        assert_eq!(stack.derive(front), style, "derive is pure");
    }

    #[test]
    fn fills_follow_slot_identity() {
        let blue = Rgba8::opaque(0, 0, 0x80);
        let stack = CardStack::new(
            StackConfig::default(),
            Timebase::NANOS,
            [Some(blue), None, None],
        );
        assert_eq!(stack.derive(SlotId::new(0)).fill, Some(blue));
        assert_eq!(stack.derive(SlotId::new(1)).fill, None);
    }

    #[test]
    #[should_panic(expected = "stack levels must be strictly decreasing")]
    fn unordered_levels_panic() {
        let mut config = StackConfig::default();
        config.levels = [0.8, 0.9, 1.0];
        let _ = CardStack::new(config, Timebase::NANOS, [None; STACK_DEPTH]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn foreign_slot_panics() {
        let stack = stack();
        let _ = stack.offset(SlotId::new(7));
    }
}
