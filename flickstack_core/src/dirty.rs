// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Every input of a card's derived style lives in one channel. Mutations
//! through [`CardStack`](crate::stack::CardStack) mark the channel for the
//! affected slot; [`evaluate`](crate::stack::CardStack::evaluate) drains all
//! of them and restyles exactly the slots that appear in any drain.
//!
//! All channels are local-only: slots do not depend on each other, so no
//! dependency edges are registered.

use understory_dirty::Channel;

/// Priority changed (rotation or reset). Affects resting height, stacking
/// order, and starts a scale animation.
pub const PRIORITY: Channel = Channel::new(0);

/// Vertical offset or rotation accumulator changed.
pub const MOTION: Channel = Channel::new(1);

/// Animated scale changed.
pub const SCALE: Channel = Channel::new(2);

/// Flick direction flag changed, switching the rotation input range.
pub const DIRECTION: Channel = Channel::new(3);

/// Every channel, in drain order.
pub const ALL: [Channel; 4] = [PRIORITY, MOTION, SCALE, DIRECTION];
