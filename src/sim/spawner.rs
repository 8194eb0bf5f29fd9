//! Wave timer and enemy spawn policy
//!
//! Elapsed time turns into fractional spawn credits; every whole credit queues
//! one spawn. The queue is capped so a long frame cannot dump a swarm at once,
//! and leftover credit is kept rather than spawned.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Enemy, EnemyKind};
use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH, WORLD_HEIGHT, WORLD_WIDTH};

/// Seconds per wave at wave 1
pub const BASE_WAVE_DURATION: f32 = 30.0;
/// Waves never get shorter than this
pub const MIN_WAVE_DURATION: f32 = 18.0;
/// Wave duration lost per wave
pub const WAVE_DURATION_STEP: f32 = 0.5;

pub const BASE_SPAWNS_PER_SEC: f32 = 0.9;
/// Multiplicative spawn rate growth per wave
pub const SPAWN_RATE_GROWTH: f32 = 0.08;
pub const MAX_SPAWNS_PER_SEC: f32 = 4.0;

/// Upper bound on queued spawns
pub const MAX_PENDING_SPAWNS: u32 = 8;

/// Spawn distance outside the view edge
pub const SPAWN_EDGE_MARGIN: f32 = 64.0;

/// Camera view rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl ViewRect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }
}

impl Default for ViewRect {
    fn default() -> Self {
        Self {
            center: Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
            size: Vec2::new(VIEW_WIDTH, VIEW_HEIGHT),
        }
    }
}

/// Spawn probability for one variant band
struct Band {
    kind: EnemyKind,
    unlock_wave: u32,
    base: f32,
    per_wave: f32,
    cap: f32,
}

impl Band {
    fn chance(&self, wave: u32) -> f32 {
        if wave < self.unlock_wave {
            return 0.0;
        }
        (self.base + self.per_wave * (wave - self.unlock_wave) as f32).min(self.cap)
    }
}

/// Bands in draw order; whatever probability is left spawns a Grunt
const BANDS: [Band; 4] = [
    Band {
        kind: EnemyKind::FireOrb,
        unlock_wave: 50,
        base: 0.02,
        per_wave: 0.01,
        cap: 0.10,
    },
    Band {
        kind: EnemyKind::Obby,
        unlock_wave: 10,
        base: 0.03,
        per_wave: 0.015,
        cap: 0.15,
    },
    Band {
        kind: EnemyKind::Golem,
        unlock_wave: 5,
        base: 0.04,
        per_wave: 0.02,
        cap: 0.20,
    },
    Band {
        kind: EnemyKind::Brute,
        unlock_wave: 2,
        base: 0.06,
        per_wave: 0.025,
        cap: 0.35,
    },
];

/// Spawn chance of `kind` at `wave`
pub fn variant_chance(kind: EnemyKind, wave: u32) -> f32 {
    BANDS
        .iter()
        .find(|b| b.kind == kind)
        .map(|b| b.chance(wave))
        .unwrap_or_else(|| 1.0 - BANDS.iter().map(|b| b.chance(wave)).sum::<f32>())
}

/// Map one uniform roll in [0, 1) to a variant
pub fn pick_kind(wave: u32, roll: f32) -> EnemyKind {
    let mut acc = 0.0;
    for band in &BANDS {
        acc += band.chance(wave);
        if roll < acc {
            return band.kind;
        }
    }
    EnemyKind::Grunt
}

/// Wave length at `wave`
pub fn wave_duration(wave: u32) -> f32 {
    (BASE_WAVE_DURATION - WAVE_DURATION_STEP * wave.saturating_sub(1) as f32).max(MIN_WAVE_DURATION)
}

/// Spawn rate at `wave`
pub fn spawns_per_sec(wave: u32) -> f32 {
    let rate = BASE_SPAWNS_PER_SEC * (1.0 + SPAWN_RATE_GROWTH).powi(wave.saturating_sub(1) as i32);
    rate.min(MAX_SPAWNS_PER_SEC)
}

/// Wave progression and spawn queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    wave: u32,
    wave_timer: f32,
    spawn_credits: f32,
    pending_spawns: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            wave: 1,
            wave_timer: 0.0,
            spawn_credits: 0.0,
            pending_spawns: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn wave(&self) -> u32 {
        self.wave
    }

    #[inline]
    pub fn pending(&self) -> u32 {
        self.pending_spawns
    }

    #[inline]
    pub fn credits(&self) -> f32 {
        self.spawn_credits
    }

    /// Advance wave timer and spawn credits. Returns true if a new wave began.
    pub fn update(&mut self, dt: f32) -> bool {
        self.wave_timer += dt;
        let duration = wave_duration(self.wave);
        let advanced = self.wave_timer >= duration;
        if advanced {
            self.wave += 1;
            self.wave_timer -= duration;
        }

        self.spawn_credits += spawns_per_sec(self.wave) * dt;
        while self.spawn_credits >= 1.0 && self.pending_spawns < MAX_PENDING_SPAWNS {
            self.pending_spawns += 1;
            self.spawn_credits -= 1.0;
        }

        advanced
    }

    /// Dequeue one pending spawn
    pub fn should_spawn(&mut self) -> bool {
        if self.pending_spawns > 0 {
            self.pending_spawns -= 1;
            true
        } else {
            false
        }
    }

    /// A point just outside one of the four view edges
    pub fn spawn_position<R: Rng>(rng: &mut R, view: &ViewRect) -> Vec2 {
        let half = view.size / 2.0;
        let c = view.center;
        match rng.random_range(0..4u32) {
            0 => Vec2::new(
                c.x - half.x - SPAWN_EDGE_MARGIN,
                c.y + rng.random_range(-half.y..=half.y),
            ),
            1 => Vec2::new(
                c.x + half.x + SPAWN_EDGE_MARGIN,
                c.y + rng.random_range(-half.y..=half.y),
            ),
            2 => Vec2::new(
                c.x + rng.random_range(-half.x..=half.x),
                c.y + half.y + SPAWN_EDGE_MARGIN,
            ),
            _ => Vec2::new(
                c.x + rng.random_range(-half.x..=half.x),
                c.y - half.y - SPAWN_EDGE_MARGIN,
            ),
        }
    }

    /// Create the next enemy for the current wave
    pub fn spawn_enemy<R: Rng>(&self, id: u32, rng: &mut R, view: &ViewRect) -> Enemy {
        let pos = Self::spawn_position(rng, view);
        let kind = pick_kind(self.wave, rng.random::<f32>());
        let mut enemy = Enemy::new(id, kind, pos);
        enemy.apply_wave_scaling(self.wave);
        enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_no_spawns_at_start() {
        let mut spawner = Spawner::new();
        spawner.update(0.0);
        assert_eq!(spawner.pending(), 0);
        assert!(!spawner.should_spawn());
    }

    #[test]
    fn test_one_credit_one_spawn() {
        let mut spawner = Spawner::new();
        // 0.9 spawns/sec * 1.2s = 1.08 credits
        for _ in 0..12 {
            spawner.update(0.1);
        }
        assert!(spawner.should_spawn());
        assert!(!spawner.should_spawn());
        assert!(spawner.credits() < 1.0);
    }

    #[test]
    fn test_lag_spike_is_capped() {
        let mut spawner = Spawner::new();
        spawner.update(100.0);
        assert_eq!(spawner.pending(), MAX_PENDING_SPAWNS);
        // Excess credit is retained, not spawned
        assert!(spawner.credits() > 1.0);

        let mut drained = 0;
        while spawner.should_spawn() {
            drained += 1;
        }
        assert_eq!(drained, MAX_PENDING_SPAWNS);
    }

    #[test]
    fn test_wave_advances_and_duration_floor() {
        let mut spawner = Spawner::new();
        assert!(!spawner.update(29.9));
        assert!(spawner.update(0.2));
        assert_eq!(spawner.wave(), 2);

        assert_eq!(wave_duration(1), 30.0);
        assert_eq!(wave_duration(5), 28.0);
        assert_eq!(wave_duration(100), MIN_WAVE_DURATION);
    }

    #[test]
    fn test_spawn_rate_capped() {
        assert!((spawns_per_sec(1) - 0.9).abs() < 1e-6);
        assert!((spawns_per_sec(2) - 0.972).abs() < 1e-4);
        assert_eq!(spawns_per_sec(200), MAX_SPAWNS_PER_SEC);
    }

    #[test]
    fn test_variant_bands_gated_by_wave() {
        assert_eq!(variant_chance(EnemyKind::Brute, 1), 0.0);
        assert!((variant_chance(EnemyKind::Brute, 2) - 0.06).abs() < 1e-6);
        assert_eq!(variant_chance(EnemyKind::Brute, 100), 0.35);
        assert_eq!(variant_chance(EnemyKind::Golem, 4), 0.0);
        assert_eq!(variant_chance(EnemyKind::Obby, 9), 0.0);
        assert_eq!(variant_chance(EnemyKind::FireOrb, 49), 0.0);
        assert!((variant_chance(EnemyKind::Grunt, 1) - 1.0).abs() < 1e-6);

        // Wave 1 only ever yields the base variant
        for i in 0..100 {
            assert_eq!(pick_kind(1, i as f32 / 100.0), EnemyKind::Grunt);
        }
        assert_eq!(pick_kind(2, 0.0), EnemyKind::Brute);
        assert_eq!(pick_kind(2, 0.07), EnemyKind::Grunt);
        // Wave 60: FireOrb 0.10, Obby 0.15, Golem 0.20, Brute 0.35
        assert_eq!(pick_kind(60, 0.05), EnemyKind::FireOrb);
        assert_eq!(pick_kind(60, 0.2), EnemyKind::Obby);
        assert_eq!(pick_kind(60, 0.4), EnemyKind::Golem);
        assert_eq!(pick_kind(60, 0.6), EnemyKind::Brute);
        assert_eq!(pick_kind(60, 0.85), EnemyKind::Grunt);
    }

    #[test]
    fn test_spawn_position_outside_view() {
        let mut rng = Pcg32::seed_from_u64(7);
        let view = ViewRect::default();
        let half = view.size / 2.0;
        for _ in 0..200 {
            let p = Spawner::spawn_position(&mut rng, &view);
            let d = (p - view.center).abs();
            assert!(d.x >= half.x + SPAWN_EDGE_MARGIN - 1e-3 || d.y >= half.y + SPAWN_EDGE_MARGIN - 1e-3);
        }
    }

    #[test]
    fn test_spawned_enemy_is_wave_scaled() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut spawner = Spawner::new();
        spawner.wave = 10;
        let e = spawner.spawn_enemy(1, &mut rng, &ViewRect::default());
        let base = Enemy::new(1, e.kind, e.pos);
        assert!(e.hp >= base.hp);
        assert!(e.touch_damage >= 1);
    }

    proptest! {
        #[test]
        fn prop_spawns_reproducible(seed in any::<u64>(), wave in 1u32..80) {
            let mut spawner = Spawner::new();
            spawner.wave = wave;
            let view = ViewRect::default();
            let mut a = Pcg32::seed_from_u64(seed);
            let mut b = Pcg32::seed_from_u64(seed);
            for id in 0..16 {
                let ea = spawner.spawn_enemy(id, &mut a, &view);
                let eb = spawner.spawn_enemy(id, &mut b, &view);
                prop_assert_eq!(ea.kind, eb.kind);
                prop_assert_eq!(ea.pos, eb.pos);
                prop_assert_eq!(ea.hp, eb.hp);
            }
        }

        #[test]
        fn prop_wave_never_decreases(dts in prop::collection::vec(0.0f32..5.0, 1..100)) {
            let mut spawner = Spawner::new();
            let mut last = spawner.wave();
            for dt in dts {
                spawner.update(dt);
                prop_assert!(spawner.wave() >= last);
                prop_assert!(spawner.pending() <= MAX_PENDING_SPAWNS);
                last = spawner.wave();
            }
        }
    }
}
