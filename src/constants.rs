//! Fixed gameplay tuning.  All distances are logical playfield units,
//! all speeds are units per step and all intervals are counted in steps.

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: f32 = 448.0;
pub const FIELD_HEIGHT: f32 = 512.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 12.0;
pub const PLAYER_HEIGHT: f32 = 12.0;
pub const PLAYER_SPEED: f32 = 3.0;
/// Distance from the bottom of the field to the top of the ship.
pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;
pub const STARTING_LIVES: u32 = 3;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_WIDTH: f32 = 4.0;
pub const PROJECTILE_HEIGHT: f32 = 10.0;
pub const PLAYER_SHOT_SPEED: f32 = 7.0;
pub const ENEMY_SHOT_SPEED: f32 = 3.0;
/// Chance per step that some enemy fires.
pub const ENEMY_FIRE_CHANCE: f64 = 0.02;

// ── Enemy formation ───────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: f32 = 12.0;
pub const ENEMY_HEIGHT: f32 = 12.0;
pub const ENEMY_ROWS: usize = 5;
pub const ENEMY_COLS: usize = 11;
pub const ENEMY_SPACING_X: f32 = 10.0;
pub const ENEMY_SPACING_Y: f32 = 10.0;
pub const FORMATION_START_X: f32 = 50.0;
pub const FORMATION_START_Y: f32 = 80.0;
/// Horizontal distance from either side wall at which the formation turns.
pub const FORMATION_MARGIN: f32 = 50.0;
pub const FORMATION_STEP_X: f32 = 1.0;
pub const FORMATION_DROP: f32 = 20.0;
/// Steps between formation moves with a full grid.
pub const FORMATION_BASE_INTERVAL: u32 = 60;
/// `(alive below, interval)` pairs, fastest tier first.
pub const FORMATION_SPEED_TIERS: [(usize, u32); 3] = [(10, 10), (20, 20), (30, 30)];

// ── Cover ─────────────────────────────────────────────────────────────────────

pub const COVER_COUNT: usize = 4;
/// Distance from the bottom of the field to the top of each cover block.
pub const COVER_BOTTOM_OFFSET: f32 = 120.0;
pub const COVER_SEGMENT_SIZE: f32 = 1.0;
pub const COVER_DEFAULT_SIZE: usize = 16;

// ── Bonus target ──────────────────────────────────────────────────────────────

pub const BONUS_WIDTH: f32 = 14.0;
pub const BONUS_HEIGHT: f32 = 8.0;
pub const BONUS_SPEED: f32 = 2.0;
pub const BONUS_Y: f32 = 60.0;
/// Steps that must pass before a bonus target may appear.
pub const BONUS_SPAWN_INTERVAL: u32 = 1000;
pub const BONUS_SPAWN_CHANCE: f64 = 0.01;
pub const BONUS_SCORES: [u32; 4] = [50, 100, 150, 300];

// ── Scoring ───────────────────────────────────────────────────────────────────

pub const EXTRA_LIFE_EVERY: u32 = 1000;
