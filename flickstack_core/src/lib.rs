// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority-driven reordering and animation core for a flickable card stack.
//!
//! `flickstack_core` models a small stack of overlapping cards. The user drags
//! the front card; on release the stack order rotates cyclically and every
//! card animates toward the style derived from its new priority. The crate is
//! `no_std` compatible (with `alloc`), never draws, and never reads a clock:
//! the host feeds it gesture events and frame times and applies the resulting
//! styles.
//!
//! # Architecture
//!
//! ```text
//!   Host pan recognizer
//!       │
//!       ▼
//!   CardStack::handle_pan() ──► (End) StackModel::rotate()
//!                                           │
//!                 ┌─────────────────────────┘
//!                 ▼
//!   CardStack::tick(now) ──► TickReport (settled slots)
//!                 │
//!                 ▼
//!   CardStack::evaluate() ──► StyleChanges ──► Presenter::apply()
//! ```
//!
//! **[`model`]**: Cyclic priority ordering. The only writer of priorities.
//!
//! **[`stack`]**: Struct-of-arrays slot state, per-slot gesture handling, and
//! cached [`CardStyle`](style::CardStyle)s.
//!
//! **[`style`]**: The pure [`derive_style`](style::derive_style) function and
//! the style types a renderer consumes, with a `kurbo::Affine` view of the
//! card transform.
//!
//! **[`priority`]**: Resting height and stacking order lookups.
//!
//! **[`animation`]**: Tweened scalar fields with last-start-wins completion.
//!
//! **[`gesture`]**: Pan events, flick direction, and slot phases.
//!
//! **[`dirty`]**: Dirty-tracking channels via `understory_dirty`.
//!
//! **[`config`]**: Stack geometry and timing presets.
//!
//! **[`time`]**: Host time, durations, and timebase conversion.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait hosts
//! implement.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animation;
pub mod backend;
pub mod config;
pub mod dirty;
pub mod gesture;
pub mod model;
pub mod priority;
pub mod stack;
pub mod style;
pub mod time;
pub mod trace;
