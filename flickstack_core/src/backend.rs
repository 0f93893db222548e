// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presenter contract for the host renderer.
//!
//! The core crate never draws. A host supplies:
//!
//! - **Time**: the current [`HostTime`](crate::time::HostTime) and the
//!   [`Timebase`](crate::time::Timebase) of its monotonic clock.
//! - **Gestures**: [`PanEvent`](crate::gesture::PanEvent)s from its pan
//!   recognizer, forwarded to [`CardStack::handle_pan`].
//! - **Presenter**: an implementation of [`Presenter`] that applies restyled
//!   slots to its native views.

use crate::stack::{CardStack, StyleChanges};

/// Applies evaluated style changes to a host-native view tree.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_frame(now: HostTime) {
///     for settled in stack.tick(now).settled {
///         tracer.settle(&SettleEvent { slot: settled, timestamp: now });
///     }
///     let changes = stack.evaluate();
///     presenter.apply(&stack, &changes);
/// }
/// ```
pub trait Presenter {
    /// Applies `changes` to the backing views, reading current styles from
    /// `stack` via [`CardStack::style_at`].
    ///
    /// When `changes.reordered` is set, the host must restack its views in
    /// [`CardStack::paint_order`].
    fn apply(&mut self, stack: &CardStack, changes: &StyleChanges);
}
