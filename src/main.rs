//! Sword Survivor headless runner
//!
//! Drives the simulation at a fixed timestep with a simple autopilot standing
//! in for keyboard/touch input, then prints a JSON run summary.
//!
//! Usage: `sword-survivor [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::Vec2;
    use serde::Serialize;

    use sword_survivor::consts::*;
    use sword_survivor::sim::{GameEvent, GamePhase, GameState, TickInput, ViewRect, tick};
    use sword_survivor::{HighScores, HighscoreStore, Settings, camera_center};

    /// Distance at which the autopilot starts backing away from an enemy
    const FLEE_RADIUS: f32 = 220.0;

    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        seconds: f32,
        kills: u32,
        wave: u32,
        level: u32,
        hp: i32,
        max_hp: i32,
        game_over: bool,
        best_kills: u32,
        boons: Vec<String>,
    }

    /// Fixed-step session with frame accumulator
    struct Session {
        state: GameState,
        settings: Settings,
        accumulator: f32,
        boons: Vec<String>,
    }

    impl Session {
        fn new(settings: Settings) -> Self {
            Self {
                state: GameState::new(settings.seed),
                settings,
                accumulator: 0.0,
                boons: Vec::new(),
            }
        }

        fn view(&self) -> ViewRect {
            let size = Vec2::new(self.settings.view_width, self.settings.view_height);
            ViewRect::new(camera_center(self.state.player.pos, size), size)
        }

        /// Flee the nearest enemy, aim at it, and pick boons by preference
        fn autopilot(&self) -> TickInput {
            let state = &self.state;
            let player = &state.player;

            let boon_choice = state.boon_offer.as_ref().and_then(|offer| {
                offer
                    .options
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, b)| self.settings.boon_rank(b.kind))
                    .map(|(i, _)| i)
            });

            let nearest = state.enemies.iter().min_by(|a, b| {
                a.pos
                    .distance_squared(player.pos)
                    .partial_cmp(&b.pos.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let nearest_orb = state.orbs.iter().min_by(|a, b| {
                a.pos
                    .distance_squared(player.pos)
                    .partial_cmp(&b.pos.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let (movement, aim) = match nearest {
                Some(enemy) => {
                    let away = player.pos - enemy.pos;
                    let threat = enemy.size / 2.0 + FLEE_RADIUS;
                    let movement = if away.length() < threat {
                        // Drift sideways a little so we don't pin ourselves to a wall
                        (away.normalize_or_zero() + away.perp().normalize_or_zero() * 0.5)
                            .normalize_or_zero()
                    } else if let Some(orb) = nearest_orb {
                        (orb.pos - player.pos).normalize_or_zero()
                    } else {
                        Vec2::ZERO
                    };
                    (movement, enemy.pos)
                }
                None => {
                    let movement = nearest_orb
                        .map(|o| (o.pos - player.pos).normalize_or_zero())
                        .unwrap_or(Vec2::ZERO);
                    (movement, player.pos + Vec2::X)
                }
            };

            TickInput {
                movement,
                aim,
                view: self.view(),
                boon_choice,
                ..Default::default()
            }
        }

        /// Feed one rendered frame into the fixed-step loop
        fn frame(&mut self, dt: f32) {
            let dt = dt.min(self.settings.max_frame_dt);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.autopilot();
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                for event in self.state.drain_events() {
                    self.handle_event(&event);
                }
            }
        }

        fn handle_event(&mut self, event: &GameEvent) {
            match event {
                GameEvent::WaveStarted { wave } => log::info!("Wave {}!", wave),
                GameEvent::LevelUpResolved { boon, level } => {
                    log::info!("Level {}: took {:?}", level, boon);
                    self.boons.push(boon.title().to_string());
                }
                GameEvent::EnemyKilled { kind, pos } => {
                    log::debug!("{} killed at ({:.0}, {:.0})", kind.as_str(), pos.x, pos.y);
                }
                GameEvent::GameOver { kills, wave } => {
                    log::info!("Game over after {} kills on wave {}", kills, wave);
                }
                other => log::trace!("{:?}", other),
            }
        }

        fn simulated_seconds(&self) -> f32 {
            self.state.time_ticks as f32 * SIM_DT
        }

        fn run(&mut self) {
            // Level-up pauses stop the sim clock, so cap total frames as well
            let max_frames = (self.settings.run_seconds / self.settings.frame_dt).ceil() as u64 * 4;
            let mut frames = 0;
            while self.state.phase != GamePhase::GameOver
                && self.simulated_seconds() < self.settings.run_seconds
                && frames < max_frames
            {
                self.frame(self.settings.frame_dt);
                frames += 1;
            }
        }
    }

    pub fn run() {
        env_logger::init();
        log::info!("Sword Survivor (headless) starting...");

        let settings = match std::env::args().nth(1) {
            Some(path) => match Settings::load_from(&path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("{}", e);
                    std::process::exit(1);
                }
            },
            None => Settings::default(),
        };

        let mut highscores = HighScores::new();
        let mut session = Session::new(settings);
        session.run();

        let state = &session.state;
        let game_over = state.phase == GamePhase::GameOver;
        // Only a finished run counts toward the best score
        if game_over {
            highscores.maybe_set(state.kills);
        }

        let summary = RunSummary {
            seed: session.settings.seed,
            seconds: session.simulated_seconds(),
            kills: state.kills,
            wave: state.wave(),
            level: state.player.level,
            hp: state.player.hp,
            max_hp: state.player.max_hp,
            game_over,
            best_kills: highscores.get(),
            boons: session.boons.clone(),
        };

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is driven by the host page on the web; nothing to run here
}
