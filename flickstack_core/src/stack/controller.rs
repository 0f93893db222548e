// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slot gesture handling and animation advance.
//!
//! Only the front slot reacts to pan events. Releasing it rotates the
//! [`StackModel`](crate::model::StackModel), publishes the new priorities
//! (each changed slot starts scaling toward its new priority), and starts two
//! settle animations on the released slot: the offset eases back to rest and
//! the rotation accumulator runs on to the terminal value. The offset settle's
//! completion, if it is still the current animation on that field, clears the
//! flick direction and returns the slot to [`SlotPhase::Idle`].

use alloc::vec::Vec;

use crate::animation::Easing;
use crate::config::STACK_DEPTH;
use crate::dirty;
use crate::gesture::{FlickDirection, PanEvent, PanOutcome, SlotPhase};
use crate::time::HostTime;

use super::id::SlotId;
use super::store::{CardStack, slot_key};

/// What a single [`CardStack::tick`] call did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Slots whose settle completed on this tick.
    pub settled: Vec<SlotId>,
    /// Whether any animation is still in flight after this tick.
    pub animating: bool,
}

impl CardStack {
    /// Feeds a pan gesture event to `slot`.
    ///
    /// Events for a slot that is not currently the front slot, `Update` and
    /// `End` outside an active drag, and events for slots outside this stack
    /// are ignored.
    pub fn handle_pan(&mut self, slot: SlotId, event: PanEvent, now: HostTime) -> PanOutcome {
        let Some(idx) = self.index_of(slot) else {
            return PanOutcome::Ignored;
        };
        if !self.model.is_front(slot) {
            return PanOutcome::Ignored;
        }
        match event {
            PanEvent::Begin {
                absolute_x,
                translation_y,
            } => {
                if absolute_x < self.config.midpoint_x() {
                    self.set_direction(idx, FlickDirection::Left);
                }
                self.drag_to(idx, translation_y);
                self.phase[idx] = SlotPhase::Dragging;
                self.settle[idx] = None;
                PanOutcome::Began
            }
            PanEvent::Update { translation_y } => {
                if self.phase[idx] != SlotPhase::Dragging {
                    return PanOutcome::Ignored;
                }
                self.drag_to(idx, translation_y);
                PanOutcome::Moved
            }
            PanEvent::End => {
                if self.phase[idx] != SlotPhase::Dragging {
                    return PanOutcome::Ignored;
                }
                self.flick(idx, now);
                PanOutcome::Flicked
            }
        }
    }

    /// Advances every in-flight animation to `now`.
    pub fn tick(&mut self, now: HostTime) -> TickReport {
        let mut report = TickReport::default();
        for idx in 0..STACK_DEPTH {
            let key = slot_key(idx);

            let offset = self.offset[idx].advance(now);
            if offset.changed {
                self.dirty.mark(key, dirty::MOTION);
            }
            if let Some(token) = offset.completed
                && self.settle[idx] == Some(token)
                && self.offset[idx].is_current(token)
            {
                self.settle[idx] = None;
                self.set_direction(idx, FlickDirection::Right);
                self.phase[idx] = SlotPhase::Idle;
                report.settled.push(SlotId::new(key));
            }

            if self.rotation[idx].advance(now).changed {
                self.dirty.mark(key, dirty::MOTION);
            }
            if self.scale[idx].advance(now).changed {
                self.dirty.mark(key, dirty::SCALE);
            }
        }
        report.animating = self.is_animating();
        report
    }

    /// Moves the offset and rotation accumulator to follow the finger,
    /// superseding any animation on them.
    fn drag_to(&mut self, idx: usize, translation_y: f64) {
        let value = translation_y + self.config.base_offset;
        let moved_offset = self.offset[idx].set(value);
        let moved_rotation = self.rotation[idx].set(value);
        if moved_offset || moved_rotation {
            self.dirty.mark(slot_key(idx), dirty::MOTION);
        }
    }

    fn set_direction(&mut self, idx: usize, direction: FlickDirection) {
        if self.direction[idx] != direction {
            self.direction[idx] = direction;
            self.dirty.mark(slot_key(idx), dirty::DIRECTION);
        }
    }

    /// Release of the front slot at `idx`: rotate, publish, settle.
    fn flick(&mut self, idx: usize, now: HostTime) {
        let before = self.model.priorities();
        let after = self.model.rotate();
        let scale_duration = self.config.scale_duration(self.timebase);
        for slot in 0..STACK_DEPTH {
            if before[slot] != after[slot] {
                let _ =
                    self.scale[slot].animate_to(after[slot], now, scale_duration, Easing::Linear);
                self.dirty.mark(slot_key(slot), dirty::PRIORITY);
            }
        }

        let settle_duration = self.config.settle_duration(self.timebase);
        let token = self.offset[idx].animate_to(
            self.config.base_offset,
            now,
            settle_duration,
            Easing::Quad,
        );
        self.settle[idx] = Some(token);
        let _ = self.rotation[idx].animate_to(
            self.config.rotation_terminal,
            now,
            settle_duration,
            Easing::Linear,
        );
        self.phase[idx] = SlotPhase::Settling;
    }
}
