// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-time card styles.
//!
//! [`derive_style`] is the single place a card's visual state is computed. It
//! is a pure function of the slot's priority and animated fields (captured in
//! a [`SlotSnapshot`]) plus the stack configuration, so evaluating it twice
//! on the same inputs gives bit-identical output.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::animation::interpolate;
use crate::config::StackConfig;
use crate::gesture::FlickDirection;
use crate::priority::{resting_bottom, stacking_order};

/// An 8-bit-per-channel colour supplied by the host for each slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// An opaque colour.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }
}

/// How a card box is positioned in its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Positioned against the container edges, outside normal flow.
    #[default]
    Absolute,
}

/// The animated part of a card's style, applied in order: translate, rotate,
/// scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    /// Vertical translation.
    pub translate_y: f64,
    /// Rotation in radians.
    pub rotate: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl CardTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translate_y: 0.0,
        rotate: 0.0,
        scale: 1.0,
    };

    /// Composes the transform into an affine map in card-local coordinates.
    ///
    /// Rotation and scale are about the card centre.
    #[must_use]
    pub fn to_affine(self, card_size: Size) -> Affine {
        let center = Point::new(card_size.width / 2.0, card_size.height / 2.0).to_vec2();
        Affine::translate(center + Vec2::new(0.0, self.translate_y))
            * Affine::rotate(self.rotate)
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Everything a renderer needs to draw one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    /// Always [`Position::Absolute`].
    pub position: Position,
    /// Fixed card size.
    pub size: Size,
    /// Background fill for the slot, if the host supplied one.
    pub fill: Option<Rgba8>,
    /// Resting distance from the container bottom.
    pub bottom: f64,
    /// Paint order; higher values paint above lower ones.
    pub z_index: i32,
    /// Animated transform.
    pub transform: CardTransform,
}

impl CardStyle {
    /// The card's untransformed box in a container of size `viewport`, with
    /// the origin at the top-left and the card centred horizontally.
    #[must_use]
    pub fn rest_rect(&self, viewport: Size) -> Rect {
        let x0 = (viewport.width - self.size.width) / 2.0;
        let y1 = viewport.height - self.bottom;
        Rect::new(x0, y1 - self.size.height, x0 + self.size.width, y1)
    }
}

/// The inputs of [`derive_style`] for one slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotSnapshot {
    /// Currently assigned priority.
    pub priority: f64,
    /// Animated vertical offset.
    pub offset: f64,
    /// Animated rotation accumulator.
    pub rotation: f64,
    /// Animated scale.
    pub scale: f64,
    /// Latched flick direction.
    pub direction: FlickDirection,
}

/// Maps a rotation accumulator to an angle in radians.
#[must_use]
pub fn rotation_angle(rotation: f64, direction: FlickDirection, config: &StackConfig) -> f64 {
    interpolate(
        rotation,
        direction.input_range(config.viewport.height),
        [0.0, config.max_tilt],
    )
}

/// Derives the render style of a card.
#[must_use]
pub fn derive_style(fill: Option<Rgba8>, slot: &SlotSnapshot, config: &StackConfig) -> CardStyle {
    CardStyle {
        position: Position::Absolute,
        size: config.card_size,
        fill,
        bottom: resting_bottom(slot.priority, config),
        z_index: stacking_order(slot.priority),
        transform: CardTransform {
            translate_y: slot.offset,
            rotate: rotation_angle(slot.rotation, slot.direction, config),
            scale: slot.scale,
        },
    }
}
