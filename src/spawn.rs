//! Builders for the enemy grid, the cover row and the bonus target.

use rand::Rng;

use crate::config::CoverShape;
use crate::constants::{
    BONUS_SPAWN_CHANCE, BONUS_SPAWN_INTERVAL, BONUS_SPEED, BONUS_WIDTH, BONUS_Y, COVER_BOTTOM_OFFSET,
    COVER_COUNT, COVER_SEGMENT_SIZE, ENEMY_COLS, ENEMY_HEIGHT, ENEMY_ROWS, ENEMY_SPACING_X,
    ENEMY_SPACING_Y, ENEMY_WIDTH, FIELD_HEIGHT, FIELD_WIDTH, FORMATION_START_X, FORMATION_START_Y,
};
use crate::entities::{BonusTarget, Cover, Direction, Enemy, EnemyKind, Segment, World};
use crate::events::{GameEvent, SoundCue};

/// The full 5×11 formation in its starting position, top row first.
pub fn build_enemy_grid() -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(ENEMY_ROWS * ENEMY_COLS);
    for row in 0..ENEMY_ROWS {
        let kind = EnemyKind::for_row(row);
        for col in 0..ENEMY_COLS {
            enemies.push(Enemy {
                x: FORMATION_START_X + col as f32 * (ENEMY_WIDTH + ENEMY_SPACING_X),
                y: FORMATION_START_Y + row as f32 * (ENEMY_HEIGHT + ENEMY_SPACING_Y),
                kind,
                points: kind.points(),
                alive: true,
                phase: 0,
            });
        }
    }
    enemies
}

/// `COVER_COUNT` copies of `shape` spread across the field with equal gaps
/// at both walls and between blocks.
pub fn build_cover(shape: &CoverShape) -> Vec<Cover> {
    let block_width = shape.width() as f32 * COVER_SEGMENT_SIZE;
    let gap = (FIELD_WIDTH - block_width * COVER_COUNT as f32) / (COVER_COUNT + 1) as f32;
    let top = FIELD_HEIGHT - COVER_BOTTOM_OFFSET;

    (0..COVER_COUNT)
        .map(|i| {
            let left = gap + i as f32 * (block_width + gap);
            let segments = shape
                .rows()
                .iter()
                .enumerate()
                .flat_map(|(r, row)| {
                    row.iter()
                        .enumerate()
                        .filter(|(_, filled)| **filled)
                        .map(move |(c, _)| Segment {
                            x: left + c as f32 * COVER_SEGMENT_SIZE,
                            y: top + r as f32 * COVER_SEGMENT_SIZE,
                            intact: true,
                        })
                })
                .collect();
            Cover {
                x: left,
                y: top,
                segments,
            }
        })
        .collect()
}

/// A bonus target just outside the wall it enters from.
pub fn bonus_target(direction: Direction) -> BonusTarget {
    let x = match direction {
        Direction::Right => -BONUS_WIDTH,
        Direction::Left => FIELD_WIDTH,
    };
    BonusTarget {
        x,
        y: BONUS_Y,
        speed: BONUS_SPEED,
        direction,
        alive: true,
    }
}

/// Counts one step on the bonus timer and, once the interval has passed
/// with no target on screen, rolls for a new one.
pub fn maybe_spawn_bonus_target(
    world: &mut World,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) -> bool {
    world.bonus_timer = world.bonus_timer.saturating_add(1);
    if world.bonus.is_some() || world.bonus_timer <= BONUS_SPAWN_INTERVAL {
        return false;
    }
    if !rng.gen_bool(BONUS_SPAWN_CHANCE) {
        return false;
    }
    let direction = if rng.gen_bool(0.5) {
        Direction::Right
    } else {
        Direction::Left
    };
    world.bonus = Some(bonus_target(direction));
    world.bonus_timer = 0;
    events.push(GameEvent::Sound(SoundCue::UFO_APPEAR));
    true
}
