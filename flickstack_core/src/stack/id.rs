// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot identity.

use core::fmt;

/// A stable card slot in a [`CardStack`](super::CardStack).
///
/// A slot keeps its identity (and its host-supplied fill) for the lifetime of
/// the stack; only the priority assigned to it changes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(pub(crate) u32);

impl SlotId {
    /// Creates a handle for slot index `idx`.
    ///
    /// Handles at or past the stack depth are ignored by
    /// [`handle_pan`](super::CardStack::handle_pan) and panic in queries.
    #[inline]
    #[must_use]
    pub const fn new(idx: u32) -> Self {
        Self(idx)
    }

    /// Returns the slot index, matching the order fills were supplied in.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotId({})", self.0)
    }
}
