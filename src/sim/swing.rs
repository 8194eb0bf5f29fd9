//! Melee swing state machine
//!
//! A swing sweeps the sword through an arc in degrees:
//! - facing right: clockwise, from `aim + half` down to `aim - half`
//! - facing left: counter-clockwise, from `aim - half` up to `aim + half`
//!
//! Angles are unwrapped once at swing start so plain linear interpolation
//! walks the arc in the right direction.

use serde::{Deserialize, Serialize};

/// One melee swing, owned by the player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Swing {
    /// Hit window open
    pub active: bool,
    /// Increments on every new swing; enemies remember the last id that hit them
    pub id: u32,
    /// Seconds since the swing started
    pub elapsed: f32,
    /// Total swing time in seconds
    pub duration: f32,
    /// Arc start (degrees, unwrapped)
    pub start_angle: f32,
    /// Arc end (degrees, unwrapped relative to start)
    pub end_angle: f32,
    /// Current blade angle (degrees)
    pub current_angle: f32,
}

impl Swing {
    /// Begin a new swing centered on `aim_deg`
    pub fn start(&mut self, aim_deg: f32, sweep: f32, duration: f32, facing_left: bool) {
        self.id = self.id.wrapping_add(1);
        self.active = true;
        self.elapsed = 0.0;
        self.duration = duration;

        let half = sweep.abs() * 0.5;

        if facing_left {
            self.start_angle = aim_deg - half;
            self.end_angle = aim_deg + half;
            while self.end_angle < self.start_angle {
                self.end_angle += 360.0;
            }
        } else {
            self.start_angle = aim_deg + half;
            self.end_angle = aim_deg - half;
            while self.end_angle > self.start_angle {
                self.end_angle -= 360.0;
            }
        }

        self.current_angle = self.start_angle;
    }

    /// Normalized progress through the swing, clamped to [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Advance the blade; closes the hit window once the duration has elapsed
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        let t = self.progress();
        self.current_angle = self.start_angle + (self.end_angle - self.start_angle) * t;
        if self.elapsed >= self.duration {
            self.active = false;
        }
    }

    /// Whether the blade should be tested against targets this tick
    #[inline]
    pub fn can_hit(&self) -> bool {
        self.active
    }
}
