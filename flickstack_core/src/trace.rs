// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for gestures and the frame loop.
//!
//! This module provides a [`TraceSink`] trait with one method per event kind.
//! All method bodies default to no-ops, so implementing only the events you
//! care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! The frame loop owns the tracer and emits events around its calls into
//! [`CardStack`](crate::stack::CardStack):
//!
//! ```rust,ignore
//! let outcome = stack.handle_pan(slot, event, now);
//! tracer.pan(&PanTraceEvent::new(slot, &event, outcome, now));
//! if outcome == PanOutcome::Flicked {
//!     tracer.rotation(&RotationEvent::new(stack.model(), now));
//! }
//! ```

use crate::config::STACK_DEPTH;
use crate::gesture::{PanEvent, PanOutcome};
use crate::model::StackModel;
use crate::stack::{SlotId, StyleChanges};
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which kind of [`PanEvent`] was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanKind {
    /// [`PanEvent::Begin`].
    Begin,
    /// [`PanEvent::Update`].
    Update,
    /// [`PanEvent::End`].
    End,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for every pan event delivered to the stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanTraceEvent {
    /// Slot the event was addressed to.
    pub slot: SlotId,
    /// Event kind.
    pub kind: PanKind,
    /// What the stack did with it.
    pub outcome: PanOutcome,
    /// Host time of delivery.
    pub timestamp: HostTime,
    /// Vertical translation carried by the event, if any.
    pub translation_y: Option<f64>,
}

impl PanTraceEvent {
    /// Describes `event` delivered to `slot` at `timestamp`.
    #[must_use]
    pub fn new(slot: SlotId, event: &PanEvent, outcome: PanOutcome, timestamp: HostTime) -> Self {
        let (kind, translation_y) = match *event {
            PanEvent::Begin { translation_y, .. } => (PanKind::Begin, Some(translation_y)),
            PanEvent::Update { translation_y } => (PanKind::Update, Some(translation_y)),
            PanEvent::End => (PanKind::End, None),
        };
        Self {
            slot,
            kind,
            outcome,
            timestamp,
            translation_y,
        }
    }
}

/// Emitted after the stack rotates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationEvent {
    /// Rotation counter since creation or the last reset.
    pub rotation_index: u64,
    /// New front slot.
    pub front: SlotId,
    /// Per-slot priorities after the rotation, in slot order.
    pub priorities: [f64; STACK_DEPTH],
    /// Host time of the rotation.
    pub timestamp: HostTime,
}

impl RotationEvent {
    /// Captures the current state of `model`.
    #[must_use]
    pub fn new(model: &StackModel, timestamp: HostTime) -> Self {
        Self {
            rotation_index: model.rotations(),
            front: model.front(),
            priorities: model.priorities(),
            timestamp,
        }
    }
}

/// Emitted when a slot's settle completes and it returns to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleEvent {
    /// Slot that settled.
    pub slot: SlotId,
    /// Host time of the tick that completed the settle.
    pub timestamp: HostTime,
}

/// Emitted after each evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvaluateEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Host time of the evaluation.
    pub timestamp: HostTime,
    /// Number of slots restyled.
    pub restyled: u32,
    /// Whether the paint order changed.
    pub reordered: bool,
}

impl EvaluateEvent {
    /// Summarizes `changes` for frame `frame_index`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "restyle sets never exceed STACK_DEPTH"
    )]
    pub fn new(frame_index: u64, timestamp: HostTime, changes: &StyleChanges) -> Self {
        Self {
            frame_index,
            timestamp,
            restyled: changes.restyled.len() as u32,
            reordered: changes.reordered,
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the frame loop.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called for every pan event.
    fn on_pan(&mut self, e: &PanTraceEvent) {
        _ = e;
    }

    /// Called after the stack rotates.
    fn on_rotation(&mut self, e: &RotationEvent) {
        _ = e;
    }

    /// Called when a settle completes.
    fn on_settle(&mut self, e: &SettleEvent) {
        _ = e;
    }

    /// Called after each evaluation.
    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PanTraceEvent`].
    #[inline]
    pub fn pan(&mut self, e: &PanTraceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pan(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RotationEvent`].
    #[inline]
    pub fn rotation(&mut self, e: &RotationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rotation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SettleEvent`].
    #[inline]
    pub fn settle(&mut self, e: &SettleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_settle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`EvaluateEvent`].
    #[inline]
    pub fn evaluate(&mut self, e: &EvaluateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_evaluate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pan() -> PanTraceEvent {
        PanTraceEvent::new(
            SlotId::new(0),
            &PanEvent::Update {
                translation_y: -42.0,
            },
            PanOutcome::Moved,
            HostTime(1_000),
        )
    }

    #[test]
    fn pan_event_captures_translation() {
        let e = sample_pan();
        assert_eq!(e.kind, PanKind::Update);
        assert_eq!(e.translation_y, Some(-42.0));

        let end = PanTraceEvent::new(
            SlotId::new(1),
            &PanEvent::End,
            PanOutcome::Ignored,
            HostTime(5),
        );
        assert_eq!(end.kind, PanKind::End);
        assert_eq!(end.translation_y, None);
        assert_eq!(end.outcome, PanOutcome::Ignored);
    }

    #[test]
    fn rotation_event_from_model() {
        let mut model = StackModel::new([1.0, 0.9, 0.8]);
        let _ = model.rotate();
        let e = RotationEvent::new(&model, HostTime(7));
        assert_eq!(e.rotation_index, 1);
        assert_eq!(e.front, SlotId::new(2));
        assert_eq!(e.priorities, [0.9, 0.8, 1.0]);
    }

    #[test]
    fn evaluate_event_counts_restyles() {
        let changes = StyleChanges {
            restyled: alloc::vec![0, 2],
            reordered: true,
        };
        let e = EvaluateEvent::new(3, HostTime(9), &changes);
        assert_eq!(e.restyled, 2);
        assert!(e.reordered);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_pan(&sample_pan());
        sink.on_settle(&SettleEvent {
            slot: SlotId::new(0),
            timestamp: HostTime(0),
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.pan(&sample_pan());
        tracer.settle(&SettleEvent {
            slot: SlotId::new(0),
            timestamp: HostTime(0),
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            settled: Vec<u32>,
        }
        impl TraceSink for RecordingSink {
            fn on_settle(&mut self, e: &SettleEvent) {
                self.settled.push(e.slot.index());
            }
        }

        let mut sink = RecordingSink {
            settled: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.settle(&SettleEvent {
            slot: SlotId::new(2),
            timestamp: HostTime(10),
        });
        tracer.pan(&sample_pan());
        drop(tracer);
        assert_eq!(sink.settled, &[2]);
    }
}
