//! Game state and core simulation types
//!
//! Everything one run needs lives in `GameState`; the seeded RNG is part of it
//! so identical inputs replay identically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boons::{BoonChoice, BoonType};
use super::spawner::Spawner;
use super::swing::Swing;
use crate::consts::*;
use crate::{aim_angle_deg, polar_to_cartesian};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// World is simulating
    Playing,
    /// Frozen until one of the offered boons is picked
    LevelUp,
    /// Frozen by the player
    Paused,
    /// Run ended
    GameOver,
}

/// Discrete events for presentation/audio collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemyHit { id: u32, pos: Vec2, damage: i32, crit: bool },
    EnemyKilled { pos: Vec2, kind: EnemyKind },
    PlayerHit { damage: i32, hp: i32 },
    OrbPickup { xp: u32 },
    WaveStarted { wave: u32 },
    LevelUpBegin { level: u32 },
    LevelUpResolved { boon: BoonType, level: u32 },
    GameOver { kills: u32, wave: u32 },
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Body diameter; collision radius is half of it
    pub size: f32,
    pub hp: i32,
    pub max_hp: i32,
    /// Units per second
    pub speed: f32,
    pub damage: i32,
    /// Seconds between swings
    pub attack_cooldown: f32,
    pub sword_reach: f32,
    pub sword_thickness: f32,
    /// Degrees
    pub swing_sweep: f32,
    pub swing_duration: f32,
    pub pickup_range: f32,
    /// XP multiplier
    pub xp_gain: f32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    /// Probability in [0, 1] that a hit deals double damage
    pub crit_chance: f32,
    /// Counts down to the next swing
    pub attack_timer: f32,
    /// Invulnerability window remaining
    pub hurt_cooldown: f32,
    /// Cosmetic red flash remaining
    pub hurt_timer: f32,
    pub facing_left: bool,
    pub swing: Swing,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: PLAYER_SIZE,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            speed: PLAYER_SPEED,
            damage: PLAYER_DAMAGE,
            attack_cooldown: PLAYER_ATTACK_COOLDOWN,
            sword_reach: PLAYER_SWORD_REACH,
            sword_thickness: PLAYER_SWORD_THICKNESS,
            swing_sweep: PLAYER_SWING_SWEEP,
            swing_duration: PLAYER_SWING_DURATION,
            pickup_range: PLAYER_PICKUP_RANGE,
            xp_gain: 1.0,
            level: 1,
            xp: 0,
            xp_to_next: PLAYER_XP_TO_FIRST_LEVEL as u32,
            crit_chance: PLAYER_CRIT_CHANCE,
            attack_timer: 0.0,
            hurt_cooldown: 0.0,
            hurt_timer: 0.0,
            facing_left: false,
            swing: Swing::default(),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Move by a normalized input vector (length clamped to 1)
    pub fn apply_movement(&mut self, movement: Vec2, dt: f32) {
        let movement = movement.clamp_length_max(1.0);
        if movement.x < 0.0 {
            self.facing_left = true;
        } else if movement.x > 0.0 {
            self.facing_left = false;
        }
        self.pos += movement * self.speed * dt;
    }

    /// Keep the whole body inside the world rectangle
    pub fn clamp_to_world(&mut self) {
        let half = self.size * 0.5;
        self.pos.x = self.pos.x.clamp(half, WORLD_WIDTH - half);
        self.pos.y = self.pos.y.clamp(half, WORLD_HEIGHT - half);
    }

    /// Advance timers and the swing. Returns true if a new swing started.
    pub fn update(&mut self, dt: f32, aim: Vec2) -> bool {
        self.hurt_cooldown = (self.hurt_cooldown - dt).max(0.0);
        self.hurt_timer = (self.hurt_timer - dt).max(0.0);

        let aim_deg = aim_angle_deg(self.pos, aim);
        self.attack_timer -= dt;

        let mut started = false;
        if !self.swing.active && self.attack_timer <= 0.0 {
            self.swing
                .start(aim_deg, self.swing_sweep, self.swing_duration, self.facing_left);
            self.attack_timer = self.attack_cooldown;
            started = true;
        }

        self.swing.advance(dt);
        started
    }

    /// Contact damage, honoring the invulnerability window.
    /// Returns true if the damage landed.
    pub fn take_contact_damage(&mut self, damage: i32) -> bool {
        if self.hurt_cooldown > 0.0 {
            return false;
        }
        self.hp = (self.hp - damage).clamp(0, self.max_hp);
        self.hurt_cooldown = PLAYER_HURT_COOLDOWN;
        self.hurt_timer = HURT_FLASH;
        true
    }

    /// Add XP and resolve thresholds. Returns true if at least one level was gained.
    pub fn gain_xp(&mut self, amount: u32) -> bool {
        self.xp += amount;
        let mut leveled = false;
        while self.xp >= self.xp_to_next {
            self.xp -= self.xp_to_next;
            self.level += 1;
            self.xp_to_next = next_xp_threshold(self.xp_to_next);
            leveled = true;
        }
        leveled
    }
}

/// Threshold growth after each level
#[inline]
pub fn next_xp_threshold(current: u32) -> u32 {
    ((current as f32 * 1.25).round() as u32).max(5)
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Grunt,
    /// Heavy
    Brute,
    /// Tanky
    Golem,
    /// Massive
    Obby,
    /// Giant, extremely tough and slow
    FireOrb,
}

/// Per-variant multipliers over the base enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantScale {
    pub size: f32,
    pub hp: f32,
    pub touch_damage: f32,
    pub speed: f32,
}

/// Orbs dropped on death, arranged in a ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbDrop {
    pub count: u32,
    pub ring_radius: f32,
}

impl EnemyKind {
    pub fn scale(self) -> VariantScale {
        let (size, hp, touch_damage, speed) = match self {
            EnemyKind::Grunt => (1.0, 1.0, 1.0, 1.0),
            EnemyKind::Brute => (2.0, 5.0, 3.0, 0.7),
            EnemyKind::Golem => (3.0, 12.0, 5.0, 0.55),
            EnemyKind::Obby => (4.0, 27.0, 7.0, 0.45),
            EnemyKind::FireOrb => (5.0, 100.0, 5.0, 0.1),
        };
        VariantScale {
            size,
            hp,
            touch_damage,
            speed,
        }
    }

    pub fn orb_drop(self) -> OrbDrop {
        let (count, ring_radius) = match self {
            EnemyKind::Grunt => (1, 0.0),
            EnemyKind::Brute => (5, 15.0),
            EnemyKind::Golem => (8, 20.0),
            EnemyKind::Obby => (15, 26.0),
            EnemyKind::FireOrb => (30, 32.0),
        };
        OrbDrop { count, ring_radius }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Grunt => "Grunt",
            EnemyKind::Brute => "Brute",
            EnemyKind::Golem => "Golem",
            EnemyKind::Obby => "Obby",
            EnemyKind::FireOrb => "FireOrb",
        }
    }
}

/// Scale an integer stat, rounding up, never below 1
#[inline]
fn scale_stat_ceil(base: i32, factor: f32) -> i32 {
    ((base as f32 * factor).ceil() as i32).max(1)
}

/// Scale an integer stat, rounding to nearest, never below 1
#[inline]
fn scale_stat_round(base: i32, factor: f32) -> i32 {
    ((base as f32 * factor).round() as i32).max(1)
}

/// An enemy (any variant)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    /// Body diameter
    pub size: f32,
    pub hp: i32,
    pub touch_damage: i32,
    pub speed: f32,
    /// Id of the last swing that damaged this enemy
    pub last_hit_swing_id: Option<u32>,
    pub facing_left: bool,
    /// Cosmetic hit flash remaining
    pub hurt_timer: f32,
}

impl Enemy {
    /// Build an enemy with variant multipliers applied to the base stats
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2) -> Self {
        let scale = kind.scale();
        Self {
            id,
            kind,
            pos,
            size: ENEMY_SIZE * scale.size,
            hp: scale_stat_ceil(ENEMY_HP, scale.hp),
            touch_damage: scale_stat_ceil(ENEMY_TOUCH_DAMAGE, scale.touch_damage),
            speed: ENEMY_SPEED * scale.speed,
            last_hit_swing_id: None,
            facing_left: false,
            hurt_timer: 0.0,
        }
    }

    /// Per-wave difficulty: hp x1.05 and touch damage x1.02 per wave past the first
    pub fn apply_wave_scaling(&mut self, wave: u32) {
        let waves = wave.saturating_sub(1) as i32;
        self.hp = scale_stat_round(self.hp, 1.05f32.powi(waves));
        self.touch_damage = scale_stat_round(self.touch_damage, 1.02f32.powi(waves));
    }

    /// Straight-line seek toward `target`
    pub fn update(&mut self, dt: f32, target: Vec2) {
        let to_target = target - self.pos;
        if to_target.length_squared() > SEEK_EPSILON_SQ {
            self.pos += to_target.normalize() * self.speed * dt;
        }

        if target.x < self.pos.x {
            self.facing_left = true;
        } else if target.x > self.pos.x {
            self.facing_left = false;
        }

        self.hurt_timer = (self.hurt_timer - dt).max(0.0);
    }

    /// Record a hit from `swing_id`. Returns false if that swing already hit.
    pub fn register_hit(&mut self, swing_id: u32) -> bool {
        if self.last_hit_swing_id == Some(swing_id) {
            return false;
        }
        self.last_hit_swing_id = Some(swing_id);
        true
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
        self.hurt_timer = HURT_FLASH;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// An experience orb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orb {
    pub id: u32,
    pub pos: Vec2,
    pub value: u32,
    pub radius: f32,
    pub magnet_speed: f32,
}

impl Orb {
    pub fn new(id: u32, pos: Vec2, value: u32) -> Self {
        Self {
            id,
            pos,
            value,
            radius: ORB_RADIUS,
            magnet_speed: ORB_MAGNET_SPEED,
        }
    }

    /// Home in on the player once inside the magnet radius
    pub fn update(&mut self, dt: f32, player_pos: Vec2, pickup_range: f32) {
        let magnet = pickup_range + ORB_MAGNET_MARGIN;
        if self.pos.distance_squared(player_pos) > magnet * magnet {
            return;
        }
        let to_player = player_pos - self.pos;
        if to_player.length_squared() > SEEK_EPSILON_SQ {
            self.pos += to_player.normalize() * self.magnet_speed * dt;
        }
    }
}

/// HUD snapshot for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub hp: i32,
    pub max_hp: i32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub kills: u32,
    pub wave: u32,
    pub phase: GamePhase,
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The only random source in the simulation
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulated ticks this run
    pub time_ticks: u64,
    pub player: Player,
    /// Live enemies (sorted by id after every tick)
    pub enemies: Vec<Enemy>,
    /// Uncollected orbs (sorted by id after every tick)
    pub orbs: Vec<Orb>,
    pub spawner: Spawner,
    pub kills: u32,
    /// Offer awaiting a selection while in `LevelUp`
    pub boon_offer: Option<BoonChoice>,
    /// Levels gained that have not been turned into boons yet
    pub pending_level_ups: u32,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new run with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ticks: 0,
            player: Player::new(world_center()),
            enemies: Vec::new(),
            orbs: Vec::new(),
            spawner: Spawner::new(),
            kills: 0,
            boon_offer: None,
            pending_level_ups: 0,
            events: Vec::new(),
            next_id: 1,
        };
        state.events.push(GameEvent::WaveStarted { wave: 1 });
        state
    }

    /// Start a fresh run. The RNG stream carries on.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.player = Player::new(world_center());
        self.enemies.clear();
        self.orbs.clear();
        self.spawner.reset();
        self.kills = 0;
        self.boon_offer = None;
        self.pending_level_ups = 0;
        self.events.clear();
        self.events.push(GameEvent::WaveStarted { wave: 1 });
        log::info!("Run reset");
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn wave(&self) -> u32 {
        self.spawner.wave()
    }

    /// XP carried by each orb dropped right now
    #[inline]
    pub fn orb_value(&self) -> u32 {
        1 + self.wave() / 2
    }

    /// Drop the death ring for `kind` around `pos`
    pub fn spawn_orbs(&mut self, kind: EnemyKind, pos: Vec2) {
        let value = self.orb_value();
        let drop = kind.orb_drop();
        for k in 0..drop.count {
            let orb_pos = if drop.count == 1 {
                pos
            } else {
                let angle = std::f32::consts::TAU * k as f32 / drop.count as f32;
                pos + polar_to_cartesian(drop.ring_radius, angle)
            };
            let id = self.next_entity_id();
            self.orbs.push(Orb::new(id, orb_pos, value));
        }
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn hud(&self) -> Hud {
        Hud {
            hp: self.player.hp,
            max_hp: self.player.max_hp,
            level: self.player.level,
            xp: self.player.xp,
            xp_to_next: self.player.xp_to_next,
            kills: self.kills,
            wave: self.wave(),
            phase: self.phase,
        }
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.orbs.sort_by_key(|o| o.id);
    }
}

#[inline]
pub fn world_center() -> Vec2 {
    Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gain_xp_just_below_threshold() {
        let mut player = Player::new(Vec2::ZERO);
        assert!(!player.gain_xp(player.xp_to_next - 1));
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 6);
    }

    #[test]
    fn test_gain_xp_exact_threshold() {
        let mut player = Player::new(Vec2::ZERO);
        assert!(player.gain_xp(7));
        assert_eq!(player.level, 2);
        assert_eq!(player.xp, 0);
        assert_eq!(player.xp_to_next, 9);
    }

    #[test]
    fn test_gain_xp_multiple_levels() {
        let mut player = Player::new(Vec2::ZERO);
        // Thresholds grow 7 -> 9 -> 11
        assert_eq!(next_xp_threshold(7), 9);
        assert_eq!(next_xp_threshold(9), 11);
        // 2 * 7 + 1 = 15: 15 - 7 = 8 (next 9), 8 < 9 -> one level only
        assert!(player.gain_xp(15));
        assert_eq!(player.level, 2);
        assert_eq!(player.xp, 8);

        let mut player = Player::new(Vec2::ZERO);
        // 7 + 9 = 16 crosses two thresholds
        assert!(player.gain_xp(16));
        assert_eq!(player.level, 3);
        assert_eq!(player.xp, 0);
        assert_eq!(player.xp_to_next, 11);
    }

    #[test]
    fn test_threshold_growth_floor() {
        assert_eq!(next_xp_threshold(1), 5);
        assert_eq!(next_xp_threshold(7), 9);
        assert_eq!(next_xp_threshold(9), 11);
        assert_eq!(next_xp_threshold(11), 14);
    }

    #[test]
    fn test_variant_scaling() {
        let base = Enemy::new(1, EnemyKind::Grunt, Vec2::ZERO);
        assert_eq!(base.size, 48.0);
        assert_eq!(base.hp, 3);
        assert_eq!(base.touch_damage, 1);

        let brute = Enemy::new(2, EnemyKind::Brute, Vec2::ZERO);
        assert_eq!(brute.size, 96.0);
        assert_eq!(brute.hp, 15);
        assert_eq!(brute.touch_damage, 3);
        assert!((brute.speed - 85.0 * 0.7).abs() < 1e-4);

        let golem = Enemy::new(3, EnemyKind::Golem, Vec2::ZERO);
        assert_eq!(golem.hp, 36);
        assert_eq!(golem.touch_damage, 5);

        let obby = Enemy::new(4, EnemyKind::Obby, Vec2::ZERO);
        assert_eq!(obby.size, 192.0);
        assert_eq!(obby.hp, 81);
        assert_eq!(obby.touch_damage, 7);

        let fire = Enemy::new(5, EnemyKind::FireOrb, Vec2::ZERO);
        assert_eq!(fire.size, 240.0);
        assert_eq!(fire.hp, 300);
        assert!((fire.speed - 8.5).abs() < 1e-4);
    }

    #[test]
    fn test_wave_scaling() {
        let mut e = Enemy::new(1, EnemyKind::Grunt, Vec2::ZERO);
        e.apply_wave_scaling(1);
        assert_eq!(e.hp, 3);
        assert_eq!(e.touch_damage, 1);

        let mut e = Enemy::new(1, EnemyKind::Brute, Vec2::ZERO);
        // 15 * 1.05^9 = 23.27 -> 23
        e.apply_wave_scaling(10);
        assert_eq!(e.hp, 23);
        // 3 * 1.02^9 = 3.585 -> 4
        assert_eq!(e.touch_damage, 4);
    }

    #[test]
    fn test_enemy_seeks_and_faces_target() {
        let mut e = Enemy::new(1, EnemyKind::Grunt, Vec2::new(100.0, 0.0));
        e.update(1.0, Vec2::ZERO);
        assert!((e.pos.x - 15.0).abs() < 1e-3);
        assert!(e.facing_left);

        // On top of the target: no movement
        let mut e = Enemy::new(1, EnemyKind::Grunt, Vec2::ZERO);
        e.update(1.0, Vec2::ZERO);
        assert_eq!(e.pos, Vec2::ZERO);
    }

    #[test]
    fn test_register_hit_once_per_swing() {
        let mut e = Enemy::new(1, EnemyKind::Grunt, Vec2::ZERO);
        assert!(e.register_hit(1));
        assert!(!e.register_hit(1));
        assert!(e.register_hit(2));
    }

    #[test]
    fn test_orb_magnet_radius() {
        let player = Vec2::ZERO;
        // Outside pickup + margin (40 + 30): stays put
        let mut far = Orb::new(1, Vec2::new(80.0, 0.0), 1);
        far.update(0.1, player, 40.0);
        assert_eq!(far.pos, Vec2::new(80.0, 0.0));

        // Inside: moves 16 units toward the player
        let mut near = Orb::new(2, Vec2::new(60.0, 0.0), 1);
        near.update(0.1, player, 40.0);
        assert!((near.pos.x - 44.0).abs() < 1e-3);
    }

    #[test]
    fn test_contact_damage_respects_cooldown() {
        let mut p = Player::new(Vec2::ZERO);
        assert!(p.take_contact_damage(3));
        assert_eq!(p.hp, 7);
        assert!(!p.take_contact_damage(3));
        assert_eq!(p.hp, 7);
        p.update(PLAYER_HURT_COOLDOWN, Vec2::X);
        assert!(p.take_contact_damage(100));
        assert_eq!(p.hp, 0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_player_swings_when_cooldown_ready() {
        let mut p = Player::new(Vec2::new(500.0, 500.0));
        assert!(p.update(0.01, Vec2::new(600.0, 500.0)));
        assert!(p.swing.active);
        assert_eq!(p.swing.id, 1);
        // Aim straight right, facing right: arc runs 60 -> -60
        assert_eq!(p.swing.start_angle, 60.0);
        assert!(!p.update(0.01, Vec2::new(600.0, 500.0)));
    }

    #[test]
    fn test_movement_clamped_and_faces() {
        let mut p = Player::new(Vec2::new(100.0, 100.0));
        p.apply_movement(Vec2::new(-3.0, 0.0), 1.0);
        assert!(p.facing_left);
        assert!((p.pos.x - (100.0 - PLAYER_SPEED)).abs() < 1e-3);
        p.clamp_to_world();
        assert_eq!(p.pos.x, PLAYER_SIZE / 2.0);
    }

    #[test]
    fn test_spawn_orbs_ring() {
        let mut state = GameState::new(1);
        state.spawn_orbs(EnemyKind::Grunt, Vec2::new(10.0, 10.0));
        assert_eq!(state.orbs.len(), 1);
        assert_eq!(state.orbs[0].pos, Vec2::new(10.0, 10.0));
        assert_eq!(state.orbs[0].value, 1);

        state.orbs.clear();
        state.spawn_orbs(EnemyKind::Golem, Vec2::ZERO);
        assert_eq!(state.orbs.len(), 8);
        for orb in &state.orbs {
            assert!((orb.pos.length() - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_hud_snapshot() {
        let mut state = GameState::new(3);
        state.kills = 4;
        state.player.hp = 6;
        let hud = state.hud();
        assert_eq!(hud.hp, 6);
        assert_eq!(hud.max_hp, PLAYER_MAX_HP);
        assert_eq!(hud.level, 1);
        assert_eq!(hud.xp_to_next, 7);
        assert_eq!(hud.kills, 4);
        assert_eq!(hud.wave, 1);
        assert_eq!(hud.phase, GamePhase::Playing);
    }

    proptest! {
        #[test]
        fn prop_gain_xp_keeps_xp_below_threshold(grants in prop::collection::vec(0u32..200, 1..20)) {
            let mut p = Player::new(Vec2::ZERO);
            for amount in grants {
                let level_before = p.level;
                let leveled = p.gain_xp(amount);
                prop_assert_eq!(leveled, p.level > level_before);
                prop_assert!(p.xp < p.xp_to_next);
                prop_assert!(p.xp_to_next >= 5);
            }
        }

        #[test]
        fn prop_player_hp_in_bounds(hits in prop::collection::vec(0i32..50, 1..30)) {
            let mut p = Player::new(Vec2::ZERO);
            for dmg in hits {
                p.take_contact_damage(dmg);
                prop_assert!(p.hp >= 0 && p.hp <= p.max_hp);
                p.update(PLAYER_HURT_COOLDOWN, Vec2::X);
            }
        }
    }
}
