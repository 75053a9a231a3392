//! Pairwise interactions applied once per step, after everything has moved.
//!
//! The passes run in a fixed order and each removes the projectiles it
//! consumes, so a shot that has already hit something is never tested
//! against a later target in the same step.

use rand::Rng;
use tracing::debug;

use crate::constants::{BONUS_SCORES, EXTRA_LIFE_EVERY};
use crate::entities::{Cover, GameStatus, Projectile, World};
use crate::events::{GameEvent, SoundCue};
use crate::geometry::{collide, Bounds};

/// Run every collision pass in order.
pub fn resolve(world: &mut World, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
    player_shots_vs_enemies(world, events);
    enemy_shots_vs_player(world, events);
    shots_vs_cover(&mut world.player_shots, &mut world.covers);
    shots_vs_cover(&mut world.enemy_shots, &mut world.covers);
    player_shots_vs_bonus(world, rng, events);
}

// ── Player shots ↔ enemies ────────────────────────────────────────────────────

pub fn player_shots_vs_enemies(world: &mut World, events: &mut Vec<GameEvent>) {
    let mut i = 0;
    while i < world.player_shots.len() {
        let shot = &world.player_shots[i];
        let hit = world
            .enemies
            .iter()
            .position(|e| e.alive && collide(shot, e));
        match hit {
            Some(j) => {
                let enemy = &mut world.enemies[j];
                enemy.alive = false;
                let points = enemy.points;
                world.player_shots.remove(i);
                events.push(GameEvent::Sound(SoundCue::ENEMY_HIT));
                add_score(world, points, events);
                grant_extra_life(world, events);
            }
            None => i += 1,
        }
    }
}

/// Add `points` and raise the high score if it was beaten.
pub fn add_score(world: &mut World, points: u32, events: &mut Vec<GameEvent>) {
    world.score = world.score.saturating_add(points);
    if world.record_score() {
        events.push(GameEvent::HighScore(world.high_score));
    }
}

/// At most one life per call; the threshold moves up by exactly
/// `EXTRA_LIFE_EVERY`, so a large jump is paid out over later kills.
pub fn grant_extra_life(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    let Some(next) = world.last_bonus_score.checked_add(EXTRA_LIFE_EVERY) else {
        return false;
    };
    if world.score < next {
        return false;
    }
    world.player.lives += 1;
    world.last_bonus_score = next;
    debug!(lives = world.player.lives, score = world.score, "extra life");
    events.push(GameEvent::Sound(SoundCue::BONUS_LIFE));
    true
}

// ── Enemy shots ↔ player ──────────────────────────────────────────────────────

/// The ship takes at most one hit per step.
pub fn enemy_shots_vs_player(world: &mut World, events: &mut Vec<GameEvent>) {
    let ship = &world.player;
    let Some(i) = world.enemy_shots.iter().position(|s| collide(s, ship))
    else {
        return;
    };

    world.enemy_shots.remove(i);
    world.player.lives = world.player.lives.saturating_sub(1);
    events.push(GameEvent::Sound(SoundCue::PLAYER_HIT));

    if world.player.lives == 0 {
        world.status = GameStatus::GameOver;
        debug!(score = world.score, "out of lives");
        events.push(GameEvent::Sound(SoundCue::GAME_OVER));
    }
}

// ── Shots ↔ cover ─────────────────────────────────────────────────────────────

/// Each shot breaks the first intact segment it touches and is consumed.
pub fn shots_vs_cover(shots: &mut Vec<Projectile>, covers: &mut [Cover]) {
    shots.retain(|shot| {
        let hit = covers
            .iter_mut()
            .flat_map(|c| c.segments.iter_mut())
            .find(|s| s.intact && collide(shot, &**s));
        match hit {
            Some(segment) => {
                segment.intact = false;
                false
            }
            None => true,
        }
    });
}

// ── Player shots ↔ bonus target ───────────────────────────────────────────────

pub fn player_shots_vs_bonus(world: &mut World, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
    let target = match &world.bonus {
        Some(b) if b.alive => b.bounds(),
        _ => return,
    };
    let Some(i) = world.player_shots.iter().position(|s| collide(s, &target))
    else {
        return;
    };

    world.player_shots.remove(i);
    world.bonus = None;

    let points = BONUS_SCORES[rng.gen_range(0..BONUS_SCORES.len())];
    debug!(points, "bonus target destroyed");
    events.push(GameEvent::Sound(SoundCue::UFO_HIT));
    events.push(GameEvent::Sound(SoundCue::UFO_SCORE));
    add_score(world, points, events);
}
