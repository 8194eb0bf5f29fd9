//! Sword Survivor - top-down melee survival arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, swing, spawner, combat, boons)
//! - `highscores`: Highscore collaborator interface and leaderboard
//! - `settings`: Runner configuration
//! - `error`: Error types for the fallible surfaces

pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SimError};
pub use highscores::{HighScores, HighscoreStore};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1600.0;
    pub const WORLD_HEIGHT: f32 = 1200.0;
    /// Default camera view dimensions
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 64.0;
    pub const PLAYER_MAX_HP: i32 = 10;
    pub const PLAYER_SPEED: f32 = 180.0;
    pub const PLAYER_DAMAGE: i32 = 2;
    pub const PLAYER_ATTACK_COOLDOWN: f32 = 0.6;
    pub const PLAYER_SWORD_REACH: f32 = 180.0;
    pub const PLAYER_SWORD_THICKNESS: f32 = 28.0;
    /// Total sweep of one swing (degrees)
    pub const PLAYER_SWING_SWEEP: f32 = 120.0;
    pub const PLAYER_SWING_DURATION: f32 = 0.2;
    pub const PLAYER_PICKUP_RANGE: f32 = 40.0;
    pub const PLAYER_CRIT_CHANCE: f32 = 0.15;
    pub const PLAYER_XP_TO_FIRST_LEVEL: i32 = 7;
    /// Invulnerability window after taking contact damage
    pub const PLAYER_HURT_COOLDOWN: f32 = 0.6;

    /// Cosmetic hurt flash for player and enemies
    pub const HURT_FLASH: f32 = 0.2;

    /// Base enemy stats (before variant and wave scaling)
    pub const ENEMY_SIZE: f32 = 48.0;
    pub const ENEMY_HP: i32 = 3;
    pub const ENEMY_TOUCH_DAMAGE: i32 = 1;
    pub const ENEMY_SPEED: f32 = 85.0;

    /// Orb defaults
    pub const ORB_RADIUS: f32 = 5.0;
    pub const ORB_MAGNET_SPEED: f32 = 160.0;
    /// Extra range beyond pickup range where orbs start homing
    pub const ORB_MAGNET_MARGIN: f32 = 30.0;

    /// Squared distance below which seek/magnet movement is skipped
    pub const SEEK_EPSILON_SQ: f32 = 1e-4;
}

/// Unit direction vector for an angle in degrees
#[inline]
pub fn angle_to_dir(deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Angle (degrees) of the ray from `from` toward `to`
#[inline]
pub fn aim_angle_deg(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

/// Convert polar (r, theta radians) to cartesian offset
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Camera center that follows `target` while keeping the view inside the world.
///
/// If the view is larger than the world along an axis, the camera is centered
/// on the world along that axis.
pub fn camera_center(target: Vec2, view_size: Vec2) -> Vec2 {
    use consts::{WORLD_HEIGHT, WORLD_WIDTH};

    let clamp_axis = |v: f32, half_view: f32, world: f32| {
        if half_view * 2.0 >= world {
            world / 2.0
        } else {
            v.clamp(half_view, world - half_view)
        }
    };

    Vec2::new(
        clamp_axis(target.x, view_size.x / 2.0, WORLD_WIDTH),
        clamp_axis(target.y, view_size.y / 2.0, WORLD_HEIGHT),
    )
}
