// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The card stack: priority model, per-slot controllers, and derived styles.
//!
//! A [`CardStack`] owns everything that changes while the user flicks cards:
//!
//! - The [`StackModel`](crate::model::StackModel), the only writer of
//!   priorities.
//! - Per-slot animated state (offset, rotation accumulator, scale, flick
//!   direction, phase), stored in struct-of-arrays form and written only by
//!   the controller operations for that slot.
//! - A cached [`CardStyle`](crate::style::CardStyle) per slot, recomputed by
//!   [`evaluate`](CardStack::evaluate) for the slots whose inputs changed.
//!
//! # Frame loop
//!
//! ```rust,ignore
//! // Gesture callbacks, as they arrive:
//! let _ = stack.handle_pan(stack.front(), event, now);
//!
//! // Once per frame:
//! let report = stack.tick(now);
//! let changes = stack.evaluate();
//! presenter.apply(&stack, &changes);
//! ```
//!
//! # Controller states
//!
//! ```text
//!   Idle ──Begin──► Dragging ──Update──► Dragging
//!                      │
//!                     End (front slot: rotate + start settle)
//!                      ▼
//!                   Settling ──offset settle completes──► Idle
//! ```

mod controller;
mod evaluate;
mod id;
mod store;

pub use controller::TickReport;
pub use evaluate::StyleChanges;
pub use id::SlotId;
pub use store::CardStack;
