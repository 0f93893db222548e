// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture input and per-slot gesture state.
//!
//! The host's gesture recognizer delivers [`PanEvent`]s for the front card.
//! Horizontal position only matters at `Begin`, where it decides the
//! [`FlickDirection`]; after that only the cumulative vertical translation is
//! read.

/// One event from a pan gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    /// The finger went down and started moving.
    Begin {
        /// Absolute horizontal position of the touch in the viewport.
        absolute_x: f64,
        /// Vertical translation since the touch went down.
        translation_y: f64,
    },
    /// The finger moved.
    Update {
        /// Vertical translation since the touch went down.
        translation_y: f64,
    },
    /// The finger lifted.
    End,
}

/// Side of the viewport a flick started on.
///
/// Selects which input range maps the rotation accumulator to an angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlickDirection {
    /// Started at or right of the midpoint.
    #[default]
    Right,
    /// Started left of the midpoint.
    Left,
}

impl FlickDirection {
    /// Input range for the rotation interpolation, anchored at the viewport
    /// height for rightward flicks and at its negation for leftward ones.
    #[inline]
    #[must_use]
    pub fn input_range(self, viewport_height: f64) -> [f64; 2] {
        match self {
            Self::Right => [0.0, viewport_height],
            Self::Left => [0.0, -viewport_height],
        }
    }
}

/// Gesture lifecycle of one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlotPhase {
    /// Resting; no gesture and no settle in flight.
    #[default]
    Idle,
    /// A pan gesture is active.
    Dragging,
    /// Released; the offset is settling back to rest.
    Settling,
}

/// What a slot did with a [`PanEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum PanOutcome {
    /// The event was not applicable (non-front slot, or wrong phase).
    Ignored,
    /// A drag started.
    Began,
    /// The drag moved.
    Moved,
    /// The card was released, the stack rotated, and the settle began.
    Flicked,
}
