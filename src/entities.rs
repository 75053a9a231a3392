//! Game entity types and their bounding boxes.

use std::time::Duration;

use crate::constants::{
    BONUS_HEIGHT, BONUS_WIDTH, COVER_SEGMENT_SIZE, ENEMY_HEIGHT, ENEMY_WIDTH, FIELD_HEIGHT,
    FIELD_WIDTH, PLAYER_BOTTOM_OFFSET, PLAYER_HEIGHT, PLAYER_WIDTH, PROJECTILE_HEIGHT,
    PROJECTILE_WIDTH, STARTING_LIVES,
};
use crate::geometry::{Bounds, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen: nothing simulated until the first confirm.
    NotStarted,
    Playing,
    GameOver,
}

/// Horizontal travel direction shared by the formation and the bonus target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Visual variant of an enemy, chosen by its formation row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Top row.
    Squid,
    /// Rows 1 and 2.
    Crab,
    /// Rows 3 and 4.
    Octopus,
}

impl EnemyKind {
    pub fn for_row(row: usize) -> EnemyKind {
        match row {
            0 => EnemyKind::Squid,
            1 | 2 => EnemyKind::Crab,
            _ => EnemyKind::Octopus,
        }
    }

    /// Score awarded for destroying one enemy of this kind.
    pub fn points(self) -> u32 {
        match self {
            EnemyKind::Squid => 30,
            EnemyKind::Crab => 20,
            EnemyKind::Octopus => 10,
        }
    }
}

/// Shape tag of a projectile.  Only enemy shots vary; the tag never affects
/// movement or collision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotKind {
    Player,
    Straight,
    Thick,
    Zigzag,
}

impl ShotKind {
    pub const ENEMY_VARIANTS: [ShotKind; 3] = [ShotKind::Straight, ShotKind::Thick, ShotKind::Zigzag];
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub lives: u32,
}

impl Player {
    /// A fresh ship centred at the bottom of the field.
    pub fn spawn() -> Player {
        Player {
            x: (FIELD_WIDTH - PLAYER_WIDTH) / 2.0,
            y: FIELD_HEIGHT - PLAYER_BOTTOM_OFFSET,
            lives: STARTING_LIVES,
        }
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    pub points: u32,
    /// Dead enemies stay in the formation so indices remain stable.
    pub alive: bool,
    /// Animation frame, 0 or 1.
    pub phase: u8,
}

impl Bounds for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    /// Vertical speed per step; negative travels up the screen.
    pub speed: f32,
    pub kind: ShotKind,
}

impl Bounds for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}

// ── Cover ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub x: f32,
    pub y: f32,
    pub intact: bool,
}

impl Bounds for Segment {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, COVER_SEGMENT_SIZE, COVER_SEGMENT_SIZE)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cover {
    pub x: f32,
    pub y: f32,
    pub segments: Vec<Segment>,
}

impl Cover {
    pub fn intact_segments(&self) -> usize {
        self.segments.iter().filter(|s| s.intact).count()
    }
}

// ── Bonus target ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct BonusTarget {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub direction: Direction,
    pub alive: bool,
}

impl Bounds for BonusTarget {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, BONUS_WIDTH, BONUS_HEIGHT)
    }
}

// ── Formation bookkeeping ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    pub direction: Direction,
    /// Steps since the formation last moved.
    pub counter: u32,
    /// Shared animation frame, toggled on every formation move.
    pub phase: u8,
    /// Index into the four-note march played on each move.
    pub tone: usize,
}

impl Default for Formation {
    fn default() -> Self {
        Formation {
            direction: Direction::Right,
            counter: 0,
            phase: 0,
            tone: 0,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state.  Owned exclusively by the round lifecycle
/// and lent read-only to the renderer between steps.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub player: Player,
    /// Fixed 5×11 grid for the whole wave; see `Enemy::alive`.
    pub enemies: Vec<Enemy>,
    /// At most one entry.
    pub player_shots: Vec<Projectile>,
    pub enemy_shots: Vec<Projectile>,
    pub covers: Vec<Cover>,
    pub bonus: Option<BonusTarget>,
    pub score: u32,
    /// Best score seen, including the current round.
    pub high_score: u32,
    /// Formations faced this session: bumped by every start, restart and
    /// wave clear, so the enemy set only changes between rounds.
    pub round: u32,
    /// Waves cleared in this round, plus one.
    pub wave: u32,
    pub status: GameStatus,
    /// Score at which the last extra life was granted.
    pub last_bonus_score: u32,
    pub formation: Formation,
    /// Steps since the last bonus target appeared.
    pub bonus_timer: u32,
    pub frame: u64,
    /// Simulated time accumulated by `step`.
    pub clock: Duration,
}

impl World {
    /// An empty title-screen world carrying a previously recorded high score.
    pub fn new(high_score: u32) -> World {
        World {
            player: Player::spawn(),
            enemies: Vec::new(),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            covers: Vec::new(),
            bonus: None,
            score: 0,
            high_score,
            round: 0,
            wave: 1,
            status: GameStatus::NotStarted,
            last_bonus_score: 0,
            formation: Formation::default(),
            bonus_timer: 0,
            frame: 0,
            clock: Duration::ZERO,
        }
    }

    pub fn is_started(&self) -> bool {
        self.status != GameStatus::NotStarted
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    pub fn alive_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.alive)
    }

    pub fn alive_enemy_count(&self) -> usize {
        self.alive_enemies().count()
    }

    /// Raise the high score to the current score if it was beaten.
    /// Returns `true` when it changed.
    pub fn record_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
