//! The per-frame simulation step and the movement rules it is built from.
//!
//! `step` mutates the world it is given and returns the events the frame
//! produced.  All randomness comes through the injected `rng`, so a seeded
//! generator replays a game exactly.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::collision;
use crate::constants::{
    BONUS_WIDTH, ENEMY_FIRE_CHANCE, ENEMY_HEIGHT, ENEMY_SHOT_SPEED, ENEMY_WIDTH, FIELD_HEIGHT,
    FIELD_WIDTH, FORMATION_BASE_INTERVAL, FORMATION_DROP, FORMATION_MARGIN,
    FORMATION_SPEED_TIERS, FORMATION_STEP_X, PLAYER_SHOT_SPEED, PLAYER_SPEED, PLAYER_WIDTH,
    PROJECTILE_WIDTH,
};
use crate::entities::{Direction, GameStatus, Projectile, ShotKind, World};
use crate::events::{GameEvent, SoundCue, MARCH_PITCHES};
use crate::geometry::Bounds;
use crate::input::{Action, InputState};
use crate::round;
use crate::spawn;

// ── Difficulty table ─────────────────────────────────────────────────────────

/// Steps between formation moves; the grid speeds up as it thins out.
pub fn formation_interval(alive: usize) -> u32 {
    FORMATION_SPEED_TIERS
        .iter()
        .find(|(below, _)| alive < *below)
        .map(|&(_, interval)| interval)
        .unwrap_or(FORMATION_BASE_INTERVAL)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance a playing world by one frame.  Worlds that are not playing are
/// left untouched.
pub fn step(
    world: &mut World,
    input: &InputState,
    rng: &mut impl Rng,
    elapsed: Duration,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if world.status != GameStatus::Playing {
        return events;
    }
    world.frame += 1;
    world.clock += elapsed;

    // ── 1. Player movement ───────────────────────────────────────────────────
    move_player(world, input.horizontal());

    // ── 2. Player firing ─────────────────────────────────────────────────────
    if input.held(Action::Fire) {
        player_fire(world, &mut events);
    }

    // ── 3. Projectiles ───────────────────────────────────────────────────────
    advance_shots(&mut world.player_shots);
    advance_shots(&mut world.enemy_shots);

    // ── 4. Formation ─────────────────────────────────────────────────────────
    formation_tick(world, &mut events);

    // ── 5. Enemy firing ──────────────────────────────────────────────────────
    enemy_fire(world, rng, &mut events);

    // ── 6. Bonus target ──────────────────────────────────────────────────────
    spawn::maybe_spawn_bonus_target(world, rng, &mut events);
    advance_bonus(world);

    // ── 7. Collisions ────────────────────────────────────────────────────────
    collision::resolve(world, rng, &mut events);

    // ── 8. Invasion / wave clear ─────────────────────────────────────────────
    if world.status == GameStatus::Playing && formation_reached_player(world) {
        world.status = GameStatus::GameOver;
        debug!(score = world.score, "formation reached the player");
        events.push(GameEvent::Sound(SoundCue::GAME_OVER));
    }
    if world.status == GameStatus::Playing && world.alive_enemy_count() == 0 {
        round::next_wave(world);
        events.push(GameEvent::WaveCleared(world.wave));
    }

    events
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Move by `dx` ship-speeds and clamp so the whole ship stays on the field.
pub fn move_player(world: &mut World, dx: f32) {
    let x = world.player.x + dx * PLAYER_SPEED;
    world.player.x = x.max(0.0).min(FIELD_WIDTH - PLAYER_WIDTH);
}

/// Only one player shot may be in flight.  Returns whether a shot was fired.
pub fn player_fire(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    if !world.player_shots.is_empty() {
        return false;
    }
    world.player_shots.push(Projectile {
        x: world.player.x + PLAYER_WIDTH / 2.0 - PROJECTILE_WIDTH / 2.0,
        y: world.player.y,
        speed: -PLAYER_SHOT_SPEED,
        kind: ShotKind::Player,
    });
    events.push(GameEvent::Sound(SoundCue::PLAYER_FIRE));
    true
}

/// Move every shot by its speed and drop those that left the field.
pub fn advance_shots(shots: &mut Vec<Projectile>) {
    for shot in shots.iter_mut() {
        shot.y += shot.speed;
    }
    shots.retain(|s| s.y >= 0.0 && s.y <= FIELD_HEIGHT);
}

// ── Formation ────────────────────────────────────────────────────────────────

/// Count one step and, on the active interval, march the formation.
/// Returns whether it moved.
pub fn formation_tick(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    let interval = formation_interval(world.alive_enemy_count());
    world.formation.counter += 1;
    if world.formation.counter < interval {
        return false;
    }
    world.formation.counter = 0;

    let direction = world.formation.direction;
    let dx = FORMATION_STEP_X * direction.sign();
    let mut hit_edge = false;
    for enemy in world.enemies.iter_mut().filter(|e| e.alive) {
        enemy.x += dx;
        hit_edge |= match direction {
            Direction::Right => enemy.x + ENEMY_WIDTH > FIELD_WIDTH - FORMATION_MARGIN,
            Direction::Left => enemy.x < FORMATION_MARGIN,
        };
    }

    // The drop happens now; the new direction applies from the next move.
    if hit_edge {
        world.formation.direction = direction.reversed();
        for enemy in world.enemies.iter_mut().filter(|e| e.alive) {
            enemy.y += FORMATION_DROP;
        }
    }

    let phase = 1 - world.formation.phase;
    world.formation.phase = phase;
    for enemy in world.enemies.iter_mut() {
        enemy.phase = phase;
    }

    events.push(GameEvent::Sound(SoundCue::enemy_step(world.formation.tone)));
    world.formation.tone = (world.formation.tone + 1) % MARCH_PITCHES.len();
    true
}

/// True once any live enemy's lower edge is level with the ship's top.
pub fn formation_reached_player(world: &World) -> bool {
    world
        .alive_enemies()
        .any(|e| e.bounds().bottom() >= world.player.y)
}

// ── Enemy fire ───────────────────────────────────────────────────────────────

/// With `ENEMY_FIRE_CHANCE`, one random live enemy drops a shot.
pub fn enemy_fire(world: &mut World, rng: &mut impl Rng, events: &mut Vec<GameEvent>) -> bool {
    if !rng.gen_bool(ENEMY_FIRE_CHANCE) {
        return false;
    }
    let alive = world.alive_enemy_count();
    if alive == 0 {
        return false;
    }
    let pick = rng.gen_range(0..alive);
    let Some(shooter) = world.alive_enemies().nth(pick) else {
        return false;
    };
    let kind = ShotKind::ENEMY_VARIANTS[rng.gen_range(0..ShotKind::ENEMY_VARIANTS.len())];
    let shot = Projectile {
        x: shooter.x + ENEMY_WIDTH / 2.0 - PROJECTILE_WIDTH / 2.0,
        y: shooter.y + ENEMY_HEIGHT,
        speed: ENEMY_SHOT_SPEED,
        kind,
    };
    world.enemy_shots.push(shot);
    events.push(GameEvent::Sound(SoundCue::ENEMY_FIRE));
    true
}

// ── Bonus target ─────────────────────────────────────────────────────────────

/// Fly the bonus target and remove it once it has fully left the field on
/// the side opposite its entry.
pub fn advance_bonus(world: &mut World) {
    let Some(bonus) = world.bonus.as_mut() else {
        return;
    };
    bonus.x += bonus.speed * bonus.direction.sign();
    let gone = match bonus.direction {
        Direction::Right => bonus.x > FIELD_WIDTH,
        Direction::Left => bonus.x + BONUS_WIDTH < 0.0,
    };
    if gone {
        world.bonus = None;
    }
}
