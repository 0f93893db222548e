// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to milliseconds using a [`Timebase`].

use std::io::Write;

use flickstack_core::gesture::PanOutcome;
use flickstack_core::time::{HostTime, Timebase};
use flickstack_core::trace::{
    EvaluateEvent, PanKind, PanTraceEvent, RotationEvent, SettleEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn host_ms(&self, t: HostTime) -> f64 {
        self.timebase.ticks_to_nanos(t.ticks()) as f64 / 1_000_000.0
    }
}

fn kind_name(kind: PanKind) -> &'static str {
    match kind {
        PanKind::Begin => "begin",
        PanKind::Update => "update",
        PanKind::End => "end",
    }
}

fn outcome_name(outcome: PanOutcome) -> &'static str {
    match outcome {
        PanOutcome::Ignored => "ignored",
        PanOutcome::Began => "began",
        PanOutcome::Moved => "moved",
        PanOutcome::Flicked => "flicked",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pan(&mut self, e: &PanTraceEvent) {
        let at = self.host_ms(e.timestamp);
        let _ = match e.translation_y {
            Some(dy) => writeln!(
                self.writer,
                "[pan:{}] slot={} dy={dy:.1} -> {} at {at:.3}ms",
                kind_name(e.kind),
                e.slot.index(),
                outcome_name(e.outcome),
            ),
            None => writeln!(
                self.writer,
                "[pan:{}] slot={} -> {} at {at:.3}ms",
                kind_name(e.kind),
                e.slot.index(),
                outcome_name(e.outcome),
            ),
        };
    }

    fn on_rotation(&mut self, e: &RotationEvent) {
        let _ = writeln!(
            self.writer,
            "[rotate] #{} front={} priorities={:?} at {:.3}ms",
            e.rotation_index,
            e.front.index(),
            e.priorities,
            self.host_ms(e.timestamp),
        );
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        let _ = writeln!(
            self.writer,
            "[settle] slot={} at {:.3}ms",
            e.slot.index(),
            self.host_ms(e.timestamp),
        );
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        let reordered = if e.reordered { " reordered" } else { "" };
        let _ = writeln!(
            self.writer,
            "[eval] frame={} restyled={}{reordered} at {:.3}ms",
            e.frame_index,
            e.restyled,
            self.host_ms(e.timestamp),
        );
    }
}
