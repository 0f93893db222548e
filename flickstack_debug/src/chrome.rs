// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Each slot gets its own track (`tid`). A flick opens a `Settle` span on the
//! released slot's track that closes when its settle completes; superseded
//! settles never close and show up as unterminated spans.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use flickstack_core::gesture::PanOutcome;
use flickstack_core::time::Timebase;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
pub fn export(bytes: &[u8], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Pan(e) => {
                let ts = ticks_to_us(e.timestamp.ticks(), timebase);
                events.push(json!({
                    "ph": "i",
                    "name": format!("Pan{:?}", e.kind),
                    "cat": "Gesture",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.slot.index(),
                    "s": "t",
                    "args": {
                        "outcome": format!("{:?}", e.outcome),
                        "translation_y": e.translation_y,
                    }
                }));
                if e.outcome == PanOutcome::Flicked {
                    events.push(json!({
                        "ph": "B",
                        "name": "Settle",
                        "cat": "Animation",
                        "ts": ts,
                        "pid": 0,
                        "tid": e.slot.index(),
                    }));
                }
            }
            RecordedEvent::Rotation(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Rotate",
                    "cat": "Stack",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "rotation_index": e.rotation_index,
                        "front": e.front.index(),
                        "priorities": e.priorities,
                    }
                }));
            }
            RecordedEvent::Settle(e) => {
                events.push(json!({
                    "ph": "E",
                    "name": "Settle",
                    "cat": "Animation",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": e.slot.index(),
                }));
            }
            RecordedEvent::Evaluate(e) => {
                events.push(json!({
                    "ph": "C",
                    "name": "Restyled",
                    "cat": "Frame",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "args": {
                        "slots": e.restyled,
                    }
                }));
                if e.reordered {
                    events.push(json!({
                        "ph": "i",
                        "name": "Reorder",
                        "cat": "Frame",
                        "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                        "pid": 0,
                        "tid": 0,
                        "s": "p",
                        "args": {
                            "frame_index": e.frame_index,
                        }
                    }));
                }
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}
