#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use space_invaders::config::CoverShape;
use space_invaders::entities::{Enemy, EnemyKind, Projectile, ShotKind, World};
use space_invaders::round::start_round;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Every `gen_bool` roll fails, so no random event ever fires.
/// Only for paths that never reach `gen_range`.
pub struct NeverRng;

impl RngCore for NeverRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }
    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0xff);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Every `gen_bool` roll succeeds and `gen_range` yields its lower bound.
pub struct AlwaysRng;

impl RngCore for AlwaysRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// A freshly started round with the default cover.
pub fn playing_world() -> World {
    let mut world = World::new(0);
    start_round(&mut world, &CoverShape::default());
    world
}

pub fn enemy_at(x: f32, y: f32, kind: EnemyKind) -> Enemy {
    Enemy {
        x,
        y,
        kind,
        points: kind.points(),
        alive: true,
        phase: 0,
    }
}

pub fn player_shot(x: f32, y: f32) -> Projectile {
    Projectile {
        x,
        y,
        speed: -7.0,
        kind: ShotKind::Player,
    }
}

pub fn enemy_shot(x: f32, y: f32) -> Projectile {
    Projectile {
        x,
        y,
        speed: 3.0,
        kind: ShotKind::Straight,
    }
}
