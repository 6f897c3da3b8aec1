//! Stage slide transition between carousel items.
//!
//! The incoming item enters from the side implied by the navigation
//! direction and the outgoing item leaves toward the opposite side.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer, ease_out_cubic};
use crate::NavDirection;

/// Horizontal travel of an entering/exiting slide, in abstract stage units.
pub const SLIDE_DISTANCE: f32 = 1000.0;
const SLIDE_ROTATE_Y: f32 = 45.0;
const SLIDE_SCALE: f32 = 0.8;

/// Visual properties of a slide at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidePose {
    /// Horizontal offset in stage units; positive is to the right.
    pub x: f32,
    pub opacity: f32,
    /// Degrees around the vertical axis.
    pub rotate_y: f32,
    pub scale: f32,
}

impl SlidePose {
    pub const CENTER: SlidePose = SlidePose {
        x: 0.0,
        opacity: 1.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    /// Pose an incoming slide starts from.
    #[must_use]
    pub fn enter(direction: NavDirection) -> Self {
        let sign = if direction.is_forward() { 1.0 } else { -1.0 };
        Self {
            x: sign * SLIDE_DISTANCE,
            opacity: 0.0,
            rotate_y: sign * SLIDE_ROTATE_Y,
            scale: SLIDE_SCALE,
        }
    }

    /// Pose an outgoing slide ends at.
    #[must_use]
    pub fn exit(direction: NavDirection) -> Self {
        let sign = if direction.is_backward() { 1.0 } else { -1.0 };
        Self {
            x: sign * SLIDE_DISTANCE,
            opacity: 0.0,
            rotate_y: sign * SLIDE_ROTATE_Y,
            scale: SLIDE_SCALE,
        }
    }

    #[must_use]
    pub fn lerp(self, to: SlidePose, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            x: mix(self.x, to.x),
            opacity: mix(self.opacity, to.opacity),
            rotate_y: mix(self.rotate_y, to.rotate_y),
            scale: mix(self.scale, to.scale),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlideEffect {
    direction: NavDirection,
    outgoing: usize,
    timer: EffectTimer,
}

impl SlideEffect {
    #[must_use]
    pub fn new(direction: NavDirection, outgoing: usize, duration: Duration) -> Self {
        Self {
            direction,
            outgoing,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn direction(&self) -> NavDirection {
        self.direction
    }

    /// Index of the item leaving the stage.
    #[must_use]
    pub fn outgoing(&self) -> usize {
        self.outgoing
    }

    #[must_use]
    pub fn incoming_pose(&self) -> SlidePose {
        match self.phase() {
            AnimPhase::Running { progress } => {
                SlidePose::enter(self.direction).lerp(SlidePose::CENTER, ease_out_cubic(progress))
            }
            AnimPhase::Completed => SlidePose::CENTER,
        }
    }

    /// `None` once the outgoing slide has fully left.
    #[must_use]
    pub fn outgoing_pose(&self) -> Option<SlidePose> {
        match self.phase() {
            AnimPhase::Running { progress } => Some(
                SlidePose::CENTER.lerp(SlidePose::exit(self.direction), ease_out_cubic(progress)),
            ),
            AnimPhase::Completed => None,
        }
    }
}
