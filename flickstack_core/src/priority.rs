// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority-to-layout mappings.
//!
//! A priority is one of the configured [`levels`](crate::config::StackConfig::levels).
//! It decides where a card rests, how it stacks against its neighbours, and
//! (through [`StackModel`](crate::model::StackModel)) whether it is the front
//! card that accepts drags.
//!
//! Priorities are only ever copied out of the level table, never computed,
//! so exact comparison against the table is sound.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::StackConfig;

/// Multiplier from priority to stacking order.
pub const Z_SCALE: f64 = 100.0;

/// Returns the depth (0 = front) of `priority` in `levels`, if it is one of
/// them.
#[must_use]
pub fn depth_of(priority: f64, levels: &[f64]) -> Option<usize> {
    levels.iter().position(|&level| level == priority)
}

/// Resting distance from the container bottom for a card at `priority`.
///
/// One step per configured level, plus
/// [`fallback_bottom`](StackConfig::fallback_bottom) for anything else.
#[must_use]
pub fn resting_bottom(priority: f64, config: &StackConfig) -> f64 {
    match depth_of(priority, &config.levels) {
        Some(depth) => config.resting_bottoms[depth],
        None => config.fallback_bottom,
    }
}

/// Stacking order for a card at `priority`: higher priority paints above.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "priorities are small positive values; the rounded product fits in i32"
)]
pub fn stacking_order(priority: f64) -> i32 {
    (priority * Z_SCALE).round() as i32
}
