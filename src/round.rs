//! Round lifecycle: NotStarted → Playing → GameOver, restart on confirm, and
//! high-score bookkeeping against the persistent store.

use std::io::ErrorKind;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::compute;
use crate::config::{CoverShape, GameConfig};
use crate::entities::{Formation, GameStatus, World};
use crate::error::Error;
use crate::events::GameEvent;
use crate::input::{Action, InputState};
use crate::persistence::HighScoreStore;
use crate::spawn::{build_cover, build_enemy_grid};

/// Replace `world` with a fresh playing round.  Only the high score and the
/// round counter survive.
pub fn start_round(world: &mut World, cover_shape: &CoverShape) {
    let round = world.round + 1;
    *world = World {
        enemies: build_enemy_grid(),
        covers: build_cover(cover_shape),
        round,
        status: GameStatus::Playing,
        ..World::new(world.high_score)
    };
    debug!(round, high_score = world.high_score, "round started");
}

/// Refill the formation after the last enemy falls, starting the next round.
/// Score, lives and cover carry over; shots in flight are cleared.
pub fn next_wave(world: &mut World) {
    world.enemies = build_enemy_grid();
    world.formation = Formation::default();
    world.player_shots.clear();
    world.enemy_shots.clear();
    world.wave += 1;
    world.round += 1;
    debug!(wave = world.wave, round = world.round, score = world.score, "wave cleared");
}

/// A missing or unreadable store counts as a high score of zero.
pub fn load_high_score(store: &impl HighScoreStore) -> u32 {
    match store.load() {
        Ok(score) => score,
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => 0,
        Err(e) => {
            warn!(error = %e, "could not load high score, starting from zero");
            0
        }
    }
}

// ── Game ──────────────────────────────────────────────────────────────────────

/// Owns the live world together with its random source and high-score
/// store.  A driver calls `frame` once per tick and renders `world()`.
pub struct Game<R: Rng, S: HighScoreStore> {
    world: World,
    rng: R,
    store: S,
    config: GameConfig,
}

impl<R: Rng, S: HighScoreStore> Game<R, S> {
    /// Title-screen game with the stored high score loaded.
    pub fn new(config: GameConfig, store: S, rng: R) -> Self {
        let high_score = load_high_score(&store);
        Game {
            world: World::new(high_score),
            rng,
            store,
            config,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn status(&self) -> GameStatus {
        self.world.status
    }

    /// Start a new round unless one is already being played.
    /// Returns whether a round was started.
    pub fn restart(&mut self) -> bool {
        if self.world.status == GameStatus::Playing {
            return false;
        }
        start_round(&mut self.world, &self.config.cover_shape);
        true
    }

    /// Handle confirm, run one simulation step and persist a beaten high
    /// score.
    pub fn frame(&mut self, input: &InputState, elapsed: Duration) -> Vec<GameEvent> {
        if input.held(Action::Confirm) {
            self.restart();
        }
        let events = compute::step(&mut self.world, input, &mut self.rng, elapsed);
        self.persist(&events);
        events
    }

    fn persist(&mut self, events: &[GameEvent]) {
        let Some(score) = events.iter().rev().find_map(|e| match e {
            GameEvent::HighScore(score) => Some(*score),
            _ => None,
        }) else {
            return;
        };
        if let Err(e) = self.store.save(score) {
            warn!(error = %e, score, "could not save high score");
        }
    }
}
