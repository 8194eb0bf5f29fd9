//! Per-frame simulation step
//!
//! Order inside a tick is fixed: player → spawner → enemies (move, contact,
//! sword) → orbs (magnet, pickup) → level-up check.

use glam::Vec2;
use rand::Rng;

use super::boons::{Boon, roll_choices};
use super::collision::{enemy_touches_player, orb_in_pickup_range, sword_hits_enemy};
use super::spawner::ViewRect;
use super::state::{EnemyKind, GameEvent, GamePhase, GameState};
use crate::error::SimError;

/// Input for a single tick, already normalized upstream
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement direction, length <= 1 (longer vectors are clamped)
    pub movement: Vec2,
    /// World-space aim point
    pub aim: Vec2,
    /// Current camera view, used for spawn placement
    pub view: ViewRect,
    /// Pause toggle
    pub pause: bool,
    /// Start a new run
    pub restart: bool,
    /// Selected index into the pending boon offer
    pub boon_choice: Option<usize>,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        state.reset();
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::LevelUp => {
            if let Some(index) = input.boon_choice {
                if let Err(e) = state.select_boon(index) {
                    log::warn!("Ignoring boon selection: {}", e);
                }
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    update_player(state, input, dt);
    update_spawner(state, &input.view, dt);
    update_enemies(state, dt);

    // A dead player collects nothing and cannot level up
    if state.phase == GamePhase::Playing {
        update_orbs(state, dt);
        if state.pending_level_ups > 0 && state.boon_offer.is_none() {
            begin_level_up(state);
        }
    }

    state.normalize_order();
}

fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let player = &mut state.player;
    player.apply_movement(input.movement, dt);
    player.update(dt, input.aim);
    player.clamp_to_world();
}

fn update_spawner(state: &mut GameState, view: &ViewRect, dt: f32) {
    if state.spawner.update(dt) {
        let wave = state.spawner.wave();
        log::info!("Wave {} started", wave);
        state.events.push(GameEvent::WaveStarted { wave });
    }

    while state.spawner.should_spawn() {
        let id = state.next_entity_id();
        let enemy = state.spawner.spawn_enemy(id, &mut state.rng, view);
        log::debug!("Spawned {} #{} at {:?}", enemy.kind.as_str(), id, enemy.pos);
        state.enemies.push(enemy);
    }
}

fn update_enemies(state: &mut GameState, dt: f32) {
    let mut deaths: Vec<(EnemyKind, Vec2)> = Vec::new();
    let mut died = false;

    // Reverse so removing the current enemy never skips the next one
    for i in (0..state.enemies.len()).rev() {
        let enemy = &mut state.enemies[i];
        enemy.update(dt, state.player.pos);

        if enemy_touches_player(enemy, &state.player)
            && state.player.take_contact_damage(enemy.touch_damage)
        {
            let damage = enemy.touch_damage;
            state.events.push(GameEvent::PlayerHit {
                damage,
                hp: state.player.hp,
            });
            log::debug!("Player hit for {} ({} hp left)", damage, state.player.hp);

            if !state.player.is_alive() && state.phase != GamePhase::GameOver {
                state.phase = GamePhase::GameOver;
                died = true;
            }
        }

        if sword_hits_enemy(&state.player, enemy) && enemy.register_hit(state.player.swing.id) {
            let crit = state.rng.random::<f32>() < state.player.crit_chance;
            let damage = if crit {
                state.player.damage * 2
            } else {
                state.player.damage
            };
            enemy.take_damage(damage);
            state.events.push(GameEvent::EnemyHit {
                id: enemy.id,
                pos: enemy.pos,
                damage,
                crit,
            });

            if enemy.is_dead() {
                let dead = state.enemies.remove(i);
                state.kills += 1;
                state.events.push(GameEvent::EnemyKilled {
                    pos: dead.pos,
                    kind: dead.kind,
                });
                deaths.push((dead.kind, dead.pos));
            }
        }
    }

    for (kind, pos) in deaths {
        state.spawn_orbs(kind, pos);
    }

    // Reported after the pass so kills later in the same tick are counted
    if died {
        let wave = state.spawner.wave();
        log::info!("Game over: {} kills, wave {}", state.kills, wave);
        state.events.push(GameEvent::GameOver {
            kills: state.kills,
            wave,
        });
    }
}

fn update_orbs(state: &mut GameState, dt: f32) {
    let player_pos = state.player.pos;
    let pickup_range = state.player.pickup_range;

    for i in (0..state.orbs.len()).rev() {
        let orb = &mut state.orbs[i];
        orb.update(dt, player_pos, pickup_range);
        if !orb_in_pickup_range(orb, player_pos, pickup_range) {
            continue;
        }

        let orb = state.orbs.remove(i);
        let xp = (orb.value as f32 * state.player.xp_gain).round() as u32;
        state.events.push(GameEvent::OrbPickup { xp });

        let level_before = state.player.level;
        if state.player.gain_xp(xp) {
            state.pending_level_ups += state.player.level - level_before;
        }
    }
}

/// Freeze the world and offer boons for the next pending level
fn begin_level_up(state: &mut GameState) {
    let offer = roll_choices(&mut state.rng, &state.player);
    // Level being resolved: levels still queued count back from the current one
    let level = state.player.level + 1 - state.pending_level_ups;
    log::info!(
        "Level {} reached, offering: {}",
        level,
        offer
            .options
            .iter()
            .map(|b| b.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    state.boon_offer = Some(offer);
    state.phase = GamePhase::LevelUp;
    state.events.push(GameEvent::LevelUpBegin { level });
}

impl GameState {
    /// Advance one frame (same as [`tick`])
    pub fn simulate(&mut self, input: &TickInput, dt: f32) {
        tick(self, input, dt);
    }

    /// Resolve the pending offer with the boon at `index`.
    ///
    /// Applies the boon, restores hp to the (possibly raised) max, then either
    /// offers the next queued level or resumes play.
    pub fn select_boon(&mut self, index: usize) -> Result<Boon, SimError> {
        let offer = self.boon_offer.as_ref().ok_or(SimError::NoPendingChoice)?;
        let boon = offer.get(index).cloned().ok_or(SimError::InvalidChoice {
            index,
            len: offer.len(),
        })?;

        let level = self.player.level + 1 - self.pending_level_ups.max(1);
        boon.apply(&mut self.player);
        self.player.hp = self.player.max_hp;
        self.boon_offer = None;
        self.pending_level_ups = self.pending_level_ups.saturating_sub(1);
        self.events.push(GameEvent::LevelUpResolved {
            boon: boon.kind,
            level,
        });
        log::info!("Picked boon {} at level {}", boon.title, level);

        if self.pending_level_ups > 0 {
            begin_level_up(self);
        } else {
            self.phase = GamePhase::Playing;
        }

        Ok(boon)
    }
}
