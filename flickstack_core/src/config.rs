// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack geometry, priority tables, and animation timings.

use kurbo::Size;

use crate::time::{Duration, Timebase};

/// Number of cards in a stack.
pub const STACK_DEPTH: usize = 3;

/// Configuration for a [`CardStack`](crate::stack::CardStack).
///
/// Level tables are indexed by depth, front first: `levels[0]` is the front
/// priority and `resting_bottoms[0]` is where the front card rests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackConfig {
    /// Size of the container the cards are positioned in.
    pub viewport: Size,
    /// Fixed size of every card.
    pub card_size: Size,
    /// Priority per depth, strictly decreasing from front to back.
    pub levels: [f64; STACK_DEPTH],
    /// Resting distance from the container bottom per depth.
    pub resting_bottoms: [f64; STACK_DEPTH],
    /// Resting distance used for a priority outside [`levels`](Self::levels).
    pub fallback_bottom: f64,
    /// Resting vertical offset; drags are measured from here.
    pub base_offset: f64,
    /// Tilt in radians reached when the rotation accumulator has travelled one
    /// viewport height.
    pub max_tilt: f64,
    /// Value the rotation accumulator is driven to after a flick.
    pub rotation_terminal: f64,
    /// Duration of the offset and rotation settle animations.
    pub settle_millis: u32,
    /// Duration of the scale animation toward a new priority.
    pub scale_millis: u32,
}

impl StackConfig {
    /// A three-card stack for a portrait viewport of the given size.
    ///
    /// The rotation terminal is four viewport heights upward, which with a
    /// quarter-turn `max_tilt` sweeps exactly one full turn in either
    /// direction.
    #[must_use]
    pub const fn portrait(width: f64, height: f64) -> Self {
        Self {
            viewport: Size::new(width, height),
            card_size: Size::new(width * 0.9, 200.0),
            levels: [1.0, 0.9, 0.8],
            resting_bottoms: [40.0, 70.0, 100.0],
            fallback_bottom: 0.0,
            base_offset: 0.0,
            max_tilt: core::f64::consts::FRAC_PI_2,
            rotation_terminal: -4.0 * height,
            settle_millis: 600,
            scale_millis: 250,
        }
    }

    /// Priority of the front-most card.
    #[inline]
    #[must_use]
    pub const fn front_priority(&self) -> f64 {
        self.levels[0]
    }

    /// Horizontal midpoint of the viewport; gestures starting left of it
    /// flick to the left.
    #[inline]
    #[must_use]
    pub const fn midpoint_x(&self) -> f64 {
        self.viewport.width / 2.0
    }

    /// Settle duration in host ticks.
    #[inline]
    #[must_use]
    pub const fn settle_duration(&self, timebase: Timebase) -> Duration {
        Duration::from_millis(self.settle_millis, timebase)
    }

    /// Scale duration in host ticks.
    #[inline]
    #[must_use]
    pub const fn scale_duration(&self, timebase: Timebase) -> Duration {
        Duration::from_millis(self.scale_millis, timebase)
    }

    /// Returns whether the level table is strictly decreasing, front to back.
    #[must_use]
    pub fn levels_are_ordered(&self) -> bool {
        self.levels.windows(2).all(|w| w[0] > w[1])
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::portrait(390.0, 844.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels_front_to_back() {
        let config = StackConfig::default();
        assert_eq!(config.levels, [1.0, 0.9, 0.8]);
        assert_eq!(config.front_priority(), 1.0);
        assert!(config.levels_are_ordered(), "levels must decrease");
    }

    #[test]
    fn scale_settles_before_offset() {
        let config = StackConfig::default();
        let tb = Timebase::NANOS;
        assert!(
            config.scale_duration(tb) < config.settle_duration(tb),
            "scale trails priority over a shorter window"
        );
    }

    #[test]
    fn unordered_levels_detected() {
        let mut config = StackConfig::default();
        config.levels = [1.0, 0.8, 0.9];
        assert!(!config.levels_are_ordered(), "0.8 before 0.9 is out of order");
    }

    #[test]
    fn midpoint_is_half_width() {
        let config = StackConfig::portrait(400.0, 800.0);
        assert_eq!(config.midpoint_x(), 200.0);
        assert_eq!(config.rotation_terminal, -3200.0);
    }
}
