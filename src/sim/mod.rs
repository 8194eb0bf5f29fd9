//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (owned by `GameState`)
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod boons;
pub mod collision;
pub mod spawner;
pub mod state;
pub mod swing;
pub mod tick;

pub use boons::{Boon, BoonChoice, BoonType, roll_choices};
pub use collision::{SwordContact, closest_point_on_segment, sword_contact, sword_hits_enemy};
pub use spawner::{Spawner, ViewRect};
pub use state::{
    Enemy, EnemyKind, GameEvent, GamePhase, GameState, Hud, Orb, Player, next_xp_threshold,
};
pub use swing::Swing;
pub use tick::{TickInput, tick};
