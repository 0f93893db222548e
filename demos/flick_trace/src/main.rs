// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated frame loop that flicks cards through a traced [`CardStack`].
//!
//! Runs 150 synthetic 60 Hz frames with a scripted sequence of pan gestures,
//! recording events to both a
//! [`PrettyPrintSink`](flickstack_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](flickstack_debug::recorder::RecorderSink), then exports a
//! Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;

use flickstack_core::backend::Presenter;
use flickstack_core::config::StackConfig;
use flickstack_core::gesture::{PanEvent, PanOutcome};
use flickstack_core::stack::{CardStack, SlotId, StyleChanges};
use flickstack_core::style::Rgba8;
use flickstack_core::time::{HostTime, Timebase};
use flickstack_core::trace::{
    EvaluateEvent, PanTraceEvent, RotationEvent, SettleEvent, TraceSink, Tracer,
};

use flickstack_debug::pretty::PrettyPrintSink;
use flickstack_debug::recorder::RecorderSink;

const FRAME_COUNT: u64 = 150;
/// 16.6ms refresh interval in nanoseconds (≈60 Hz).
const REFRESH_INTERVAL_NS: u64 = 16_666_667;

/// Fans every event out to both sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Tee<'_> {
    fn on_pan(&mut self, e: &PanTraceEvent) {
        self.pretty.on_pan(e);
        self.recorder.on_pan(e);
    }

    fn on_rotation(&mut self, e: &RotationEvent) {
        self.pretty.on_rotation(e);
        self.recorder.on_rotation(e);
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.pretty.on_settle(e);
        self.recorder.on_settle(e);
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        self.pretty.on_evaluate(e);
        self.recorder.on_evaluate(e);
    }
}

/// Prints the restacked paint order and the front card's box.
#[derive(Debug, Default)]
struct ConsolePresenter {
    restacks: u32,
}

impl Presenter for ConsolePresenter {
    fn apply(&mut self, stack: &CardStack, changes: &StyleChanges) {
        if !changes.reordered {
            return;
        }
        self.restacks += 1;
        let order: Vec<u32> = stack.paint_order().iter().map(|s| s.index()).collect();
        let front = stack.style(stack.front());
        let rect = front.rest_rect(stack.config().viewport);
        println!(
            "  paint order {order:?}, front rests at y={:.0}..{:.0} z={}",
            rect.y0, rect.y1, front.z_index,
        );
    }
}

/// One scripted gesture step.
enum Step {
    Begin { x: f64 },
    Drag { dy: f64 },
    Release,
    /// A stray touch on a card that is not in front.
    Poke { slot: u32 },
}

fn script(frame: u64) -> Option<Step> {
    match frame {
        // Left-half flick.
        5 => Some(Step::Begin { x: 80.0 }),
        6..=17 => Some(Step::Drag {
            dy: -25.0 * (frame - 5) as f64,
        }),
        18 => Some(Step::Release),
        24 => Some(Step::Poke { slot: 0 }),
        // Right-half flick on the new front card.
        60 => Some(Step::Begin { x: 300.0 }),
        61..=68 => Some(Step::Drag {
            dy: -40.0 * (frame - 60) as f64,
        }),
        69 => Some(Step::Release),
        // Grab the next card before the previous settle finishes.
        80 => Some(Step::Begin { x: 200.0 }),
        81..=84 => Some(Step::Drag {
            dy: -60.0 * (frame - 80) as f64,
        }),
        85 => Some(Step::Release),
        _ => None,
    }
}

fn main() {
    let timebase = Timebase::NANOS;

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()), timebase);
    let mut recorder = RecorderSink::new();

    // -- stack -------------------------------------------------------------
    let config = StackConfig::portrait(390.0, 844.0);
    let fills = [
        Some(Rgba8::opaque(0x1a, 0x23, 0x7e)),
        Some(Rgba8::opaque(0xff, 0xc1, 0x07)),
        Some(Rgba8::opaque(0xd3, 0x2f, 0x2f)),
    ];
    let mut stack = CardStack::new(config, timebase, fills);
    let mut presenter = ConsolePresenter::default();
    let mut changes = StyleChanges::default();

    // -- simulated loop ----------------------------------------------------
    let mut now = HostTime(1_000_000_000); // start at 1s
    {
        let mut tee = Tee {
            pretty: &mut pretty,
            recorder: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);

        for frame_index in 0..FRAME_COUNT {
            // 1. Gestures
            if let Some(step) = script(frame_index) {
                let (slot, event) = match step {
                    Step::Begin { x } => (
                        stack.front(),
                        PanEvent::Begin {
                            absolute_x: x,
                            translation_y: 0.0,
                        },
                    ),
                    Step::Drag { dy } => (stack.front(), PanEvent::Update { translation_y: dy }),
                    Step::Release => (stack.front(), PanEvent::End),
                    Step::Poke { slot } => (
                        SlotId::new(slot),
                        PanEvent::Begin {
                            absolute_x: 10.0,
                            translation_y: -5.0,
                        },
                    ),
                };
                let outcome = stack.handle_pan(slot, event, now);
                tracer.pan(&PanTraceEvent::new(slot, &event, outcome, now));
                if outcome == PanOutcome::Flicked {
                    tracer.rotation(&RotationEvent::new(stack.model(), now));
                }
            }

            // 2. Animate
            for slot in stack.tick(now).settled {
                tracer.settle(&SettleEvent {
                    slot,
                    timestamp: now,
                });
            }

            // 3. Evaluate + present
            stack.evaluate_into(&mut changes);
            if !changes.is_empty() {
                tracer.evaluate(&EvaluateEvent::new(frame_index, now, &changes));
            }
            presenter.apply(&stack, &changes);

            now = HostTime(now.ticks() + REFRESH_INTERVAL_NS);
        }
    }

    // -- export Chrome trace -----------------------------------------------
    let path = "flick_trace.json";
    let file = File::create(path).expect("failed to create flick_trace.json");
    let mut writer = BufWriter::new(file);
    flickstack_debug::chrome::export(recorder.as_bytes(), timebase, &mut writer)
        .expect("failed to write Chrome trace");

    println!(
        "Wrote {path} ({FRAME_COUNT} frames, {} rotations, {} restacks)",
        stack.model().rotations(),
        presenter.restacks,
    );
}
