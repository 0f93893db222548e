// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].

use flickstack_core::config::STACK_DEPTH;
use flickstack_core::gesture::PanOutcome;
use flickstack_core::stack::SlotId;
use flickstack_core::time::HostTime;
use flickstack_core::trace::{
    EvaluateEvent, PanKind, PanTraceEvent, RotationEvent, SettleEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_PAN: u8 = 1;
const TAG_ROTATION: u8 = 2;
const TAG_SETTLE: u8 = 3;
const TAG_EVALUATE: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_option_f64(&mut self, v: Option<f64>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_f64(val);
            }
            None => {
                self.write_u8(0);
                self.write_u64(0);
            }
        }
    }

    fn write_kind(&mut self, k: PanKind) {
        self.write_u8(match k {
            PanKind::Begin => 0,
            PanKind::Update => 1,
            PanKind::End => 2,
        });
    }

    fn write_outcome(&mut self, o: PanOutcome) {
        self.write_u8(match o {
            PanOutcome::Ignored => 0,
            PanOutcome::Began => 1,
            PanOutcome::Moved => 2,
            PanOutcome::Flicked => 3,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_pan(&mut self, e: &PanTraceEvent) {
        self.write_u8(TAG_PAN);
        self.write_u32(e.slot.index());
        self.write_kind(e.kind);
        self.write_outcome(e.outcome);
        self.write_u64(e.timestamp.ticks());
        self.write_option_f64(e.translation_y);
    }

    fn on_rotation(&mut self, e: &RotationEvent) {
        self.write_u8(TAG_ROTATION);
        self.write_u64(e.rotation_index);
        self.write_u32(e.front.index());
        for p in e.priorities {
            self.write_f64(p);
        }
        self.write_u64(e.timestamp.ticks());
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.write_u8(TAG_SETTLE);
        self.write_u32(e.slot.index());
        self.write_u64(e.timestamp.ticks());
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        self.write_u8(TAG_EVALUATE);
        self.write_u64(e.frame_index);
        self.write_u64(e.timestamp.ticks());
        self.write_u32(e.restyled);
        self.write_u8(u8::from(e.reordered));
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`PanTraceEvent`].
    Pan(PanTraceEvent),
    /// A [`RotationEvent`].
    Rotation(RotationEvent),
    /// A [`SettleEvent`].
    Settle(SettleEvent),
    /// An [`EvaluateEvent`].
    Evaluate(EvaluateEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_option_f64(&mut self) -> Option<Option<f64>> {
        let present = self.read_u8()?;
        let val = self.read_f64()?;
        Some((present != 0).then_some(val))
    }

    fn read_kind(&mut self) -> Option<PanKind> {
        Some(match self.read_u8()? {
            0 => PanKind::Begin,
            1 => PanKind::Update,
            _ => PanKind::End,
        })
    }

    fn read_outcome(&mut self) -> Option<PanOutcome> {
        Some(match self.read_u8()? {
            0 => PanOutcome::Ignored,
            1 => PanOutcome::Began,
            2 => PanOutcome::Moved,
            _ => PanOutcome::Flicked,
        })
    }

    fn decode_pan(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Pan(PanTraceEvent {
            slot: SlotId::new(self.read_u32()?),
            kind: self.read_kind()?,
            outcome: self.read_outcome()?,
            timestamp: HostTime(self.read_u64()?),
            translation_y: self.read_option_f64()?,
        }))
    }

    fn decode_rotation(&mut self) -> Option<RecordedEvent> {
        let rotation_index = self.read_u64()?;
        let front = SlotId::new(self.read_u32()?);
        let mut priorities = [0.0; STACK_DEPTH];
        for p in &mut priorities {
            *p = self.read_f64()?;
        }
        Some(RecordedEvent::Rotation(RotationEvent {
            rotation_index,
            front,
            priorities,
            timestamp: HostTime(self.read_u64()?),
        }))
    }

    fn decode_settle(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Settle(SettleEvent {
            slot: SlotId::new(self.read_u32()?),
            timestamp: HostTime(self.read_u64()?),
        }))
    }

    fn decode_evaluate(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Evaluate(EvaluateEvent {
            frame_index: self.read_u64()?,
            timestamp: HostTime(self.read_u64()?),
            restyled: self.read_u32()?,
            reordered: self.read_u8()? != 0,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_PAN => self.decode_pan(),
            TAG_ROTATION => self.decode_rotation(),
            TAG_SETTLE => self.decode_settle(),
            TAG_EVALUATE => self.decode_evaluate(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
