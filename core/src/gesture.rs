// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Distance, in logical pixels, a drag has to travel horizontally to count as
/// a swipe. Vertical travel beyond it cancels the swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Distance a pointer has to move before the gesture is claimed as a drag.
/// Anything shorter is a tap.
pub const CLAIM_THRESHOLD: f32 = 2.0;

/// Direction of a horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl fmt::Display for HorizontalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HorizontalDirection::Left => write!(f, "LEFT"),
            HorizontalDirection::Right => write!(f, "RIGHT"),
        }
    }
}

/// State of the swipe recognizer.
///
/// `Idle -> Tracking -> Handled -> Idle`, where `Handled` swallows all further
/// movement until the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeState {
    Idle,
    Tracking { origin: (f32, f32), claimed: bool },
    Handled,
}

/// Recognizes horizontal swipes from pointer positions.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    claim_threshold: f32,
    state: SwipeState,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            claim_threshold: CLAIM_THRESHOLD,
            state: SwipeState::Idle,
        }
    }

    pub fn with_claim_threshold(mut self, claim_threshold: f32) -> Self {
        self.claim_threshold = claim_threshold;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// Starts a gesture at the given pointer position.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.state = SwipeState::Tracking {
            origin: (x, y),
            claimed: false,
        };
    }

    /// Feeds a pointer move and returns a direction at most once per gesture.
    ///
    /// Whichever axis crosses the threshold first decides the gesture: a
    /// vertical drag never turns into a horizontal swipe later on.
    pub fn update(&mut self, x: f32, y: f32) -> Option<HorizontalDirection> {
        let SwipeState::Tracking { origin, claimed } = self.state else {
            return None;
        };

        let (dx, dy) = (x - origin.0, y - origin.1);
        if !claimed {
            if dx.abs() <= self.claim_threshold && dy.abs() <= self.claim_threshold {
                return None;
            }
            self.state = SwipeState::Tracking {
                origin,
                claimed: true,
            };
        }

        if dy.abs() > self.threshold {
            tracing::trace!(dx, dy, "vertical drag, swipe cancelled");
            self.state = SwipeState::Handled;
            return None;
        }

        let direction = if dx < -self.threshold {
            HorizontalDirection::Left
        } else if dx > self.threshold {
            HorizontalDirection::Right
        } else {
            return None;
        };

        tracing::debug!(dx, dy, %direction, "swipe recognized");
        self.state = SwipeState::Handled;
        Some(direction)
    }

    /// Ends the gesture and returns the state it ended in.
    ///
    /// A `Tracking` state that was never claimed means the pointer was
    /// released without dragging, i.e. a tap.
    pub fn end(&mut self) -> SwipeState {
        std::mem::replace(&mut self.state, SwipeState::Idle)
    }
}
