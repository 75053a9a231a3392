use space_invaders::collision::*;
use space_invaders::constants::BONUS_SCORES;
use space_invaders::entities::*;
use space_invaders::events::{CueKind, GameEvent};
use space_invaders::spawn::bonus_target;

mod common;
use common::{enemy_at, enemy_shot, player_shot, playing_world, seeded_rng, AlwaysRng, NeverRng};

fn sounds(events: &[GameEvent]) -> Vec<CueKind> {
    events.iter().filter_map(|e| e.sound()).map(|c| c.kind).collect()
}

/// A playing world with no enemies, cover or shots in the way.
fn bare_world() -> World {
    let mut w = playing_world();
    w.enemies.clear();
    w.covers.clear();
    w
}

fn segment(x: f32, y: f32) -> Segment {
    Segment { x, y, intact: true }
}

// ── player shots ↔ enemies ────────────────────────────────────────────────────

#[test]
fn shot_kills_overlapping_enemy() {
    let mut w = bare_world();
    w.enemies.push(enemy_at(98.0, 55.0, EnemyKind::Crab));
    w.player_shots.push(player_shot(100.0, 50.0));
    let mut events = Vec::new();

    player_shots_vs_enemies(&mut w, &mut events);

    assert!(!w.enemies[0].alive);
    assert_eq!(w.enemies.len(), 1);
    assert_eq!(w.score, 20);
    assert!(w.player_shots.is_empty());
    assert_eq!(w.high_score, 20);
    assert!(events.contains(&GameEvent::HighScore(20)));
    assert_eq!(sounds(&events), vec![CueKind::EnemyHit]);
}

#[test]
fn shot_kills_only_one_enemy() {
    let mut w = bare_world();
    w.enemies.push(enemy_at(95.0, 50.0, EnemyKind::Squid));
    w.enemies.push(enemy_at(102.0, 50.0, EnemyKind::Octopus));
    w.player_shots.push(player_shot(100.0, 50.0));

    player_shots_vs_enemies(&mut w, &mut Vec::new());

    assert_eq!(w.alive_enemy_count(), 1);
    assert!(!w.enemies[0].alive);
    assert_eq!(w.score, 30);
}

#[test]
fn shot_passes_through_dead_enemy() {
    let mut w = bare_world();
    let mut dead = enemy_at(98.0, 55.0, EnemyKind::Crab);
    dead.alive = false;
    w.enemies.push(dead);
    w.player_shots.push(player_shot(100.0, 50.0));

    player_shots_vs_enemies(&mut w, &mut Vec::new());

    assert_eq!(w.score, 0);
    assert_eq!(w.player_shots.len(), 1);
}

#[test]
fn high_score_not_lowered() {
    let mut w = bare_world();
    w.high_score = 5000;
    w.enemies.push(enemy_at(98.0, 55.0, EnemyKind::Crab));
    w.player_shots.push(player_shot(100.0, 50.0));
    let mut events = Vec::new();

    player_shots_vs_enemies(&mut w, &mut events);

    assert_eq!(w.high_score, 5000);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::HighScore(_))));
}

// ── extra lives ───────────────────────────────────────────────────────────────

#[test]
fn extra_life_at_each_thousand() {
    let mut w = bare_world();
    w.score = 990;
    w.enemies.push(enemy_at(98.0, 55.0, EnemyKind::Octopus));
    w.player_shots.push(player_shot(100.0, 50.0));
    let mut events = Vec::new();

    player_shots_vs_enemies(&mut w, &mut events);

    assert_eq!(w.score, 1000);
    assert_eq!(w.lives(), 4);
    assert_eq!(w.last_bonus_score, 1000);
    assert!(sounds(&events).contains(&CueKind::BonusLife));

    // 1010 is not another thousand.
    w.enemies.push(enemy_at(98.0, 55.0, EnemyKind::Octopus));
    w.player_shots.push(player_shot(100.0, 50.0));
    player_shots_vs_enemies(&mut w, &mut Vec::new());
    assert_eq!(w.score, 1010);
    assert_eq!(w.lives(), 4);
}

#[test]
fn large_jump_grants_one_life_per_hit() {
    let mut w = bare_world();
    w.score = 2990;
    w.last_bonus_score = 0;

    w.enemies.push(enemy_at(98.0, 55.0, EnemyKind::Octopus));
    w.player_shots.push(player_shot(100.0, 50.0));
    player_shots_vs_enemies(&mut w, &mut Vec::new());
    assert_eq!(w.score, 3000);
    assert_eq!(w.lives(), 4);
    assert_eq!(w.last_bonus_score, 1000);

    // The remaining thousands are paid out one per later kill.
    w.enemies.push(enemy_at(98.0, 55.0, EnemyKind::Octopus));
    w.player_shots.push(player_shot(100.0, 50.0));
    player_shots_vs_enemies(&mut w, &mut Vec::new());
    assert_eq!(w.lives(), 5);
    assert_eq!(w.last_bonus_score, 2000);
}

#[test]
fn grant_extra_life_needs_full_thousand() {
    let mut w = bare_world();
    w.last_bonus_score = 1000;
    w.score = 1999;
    assert!(!grant_extra_life(&mut w, &mut Vec::new()));
    w.score = 2000;
    assert!(grant_extra_life(&mut w, &mut Vec::new()));
    assert_eq!(w.last_bonus_score, 2000);
}

#[test]
fn extra_life_marker_never_overflows() {
    let mut w = bare_world();
    w.score = u32::MAX;
    w.last_bonus_score = u32::MAX - 500;
    assert!(!grant_extra_life(&mut w, &mut Vec::new()));
    assert_eq!(w.lives(), 3);
    assert_eq!(w.last_bonus_score, u32::MAX - 500);
}

// ── enemy shots ↔ player ──────────────────────────────────────────────────────

#[test]
fn enemy_shot_costs_a_life() {
    let mut w = bare_world();
    let (px, py) = (w.player.x, w.player.y);
    w.enemy_shots.push(enemy_shot(px + 4.0, py - 5.0));
    let mut events = Vec::new();

    enemy_shots_vs_player(&mut w, &mut events);

    assert_eq!(w.lives(), 2);
    assert!(w.enemy_shots.is_empty());
    assert_eq!(w.status, GameStatus::Playing);
    assert_eq!(sounds(&events), vec![CueKind::PlayerHit]);
}

#[test]
fn last_life_ends_game() {
    let mut w = bare_world();
    w.player.lives = 1;
    let (px, py) = (w.player.x, w.player.y);
    w.enemy_shots.push(enemy_shot(px + 4.0, py - 5.0));
    let mut events = Vec::new();

    enemy_shots_vs_player(&mut w, &mut events);

    assert_eq!(w.lives(), 0);
    assert_eq!(w.status, GameStatus::GameOver);
    assert!(w.is_game_over());
    assert_eq!(sounds(&events), vec![CueKind::PlayerHit, CueKind::GameOver]);
}

#[test]
fn one_hit_per_step() {
    let mut w = bare_world();
    let (px, py) = (w.player.x, w.player.y);
    w.enemy_shots.push(enemy_shot(px, py));
    w.enemy_shots.push(enemy_shot(px + 6.0, py));
    enemy_shots_vs_player(&mut w, &mut Vec::new());
    assert_eq!(w.lives(), 2);
    assert_eq!(w.enemy_shots.len(), 1);
}

#[test]
fn near_miss_leaves_player_alone() {
    let mut w = bare_world();
    let (px, py) = (w.player.x, w.player.y);
    w.enemy_shots.push(enemy_shot(px - 4.0, py)); // right edge touches the ship
    enemy_shots_vs_player(&mut w, &mut Vec::new());
    assert_eq!(w.lives(), 3);
    assert_eq!(w.enemy_shots.len(), 1);
}

// ── shots ↔ cover ─────────────────────────────────────────────────────────────

#[test]
fn shot_breaks_one_segment() {
    let mut covers = vec![Cover {
        x: 10.0,
        y: 10.0,
        segments: vec![segment(10.0, 10.0), segment(11.0, 10.0), segment(10.0, 11.0)],
    }];
    let mut shots = vec![player_shot(9.0, 5.0)];

    shots_vs_cover(&mut shots, &mut covers);

    assert!(shots.is_empty());
    assert_eq!(covers[0].intact_segments(), 2);
}

#[test]
fn broken_segment_lets_shots_through() {
    let mut covers = vec![Cover {
        x: 10.0,
        y: 10.0,
        segments: vec![Segment { x: 10.0, y: 10.0, intact: false }],
    }];
    let mut shots = vec![enemy_shot(9.0, 5.0)];
    shots_vs_cover(&mut shots, &mut covers);
    assert_eq!(shots.len(), 1);
}

#[test]
fn each_shot_resolved_independently() {
    let mut covers = vec![Cover {
        x: 0.0,
        y: 0.0,
        segments: vec![segment(1.0, 1.0), segment(50.0, 1.0)],
    }];
    let mut shots = vec![enemy_shot(0.0, 0.0), enemy_shot(49.0, 0.0), enemy_shot(100.0, 0.0)];
    shots_vs_cover(&mut shots, &mut covers);
    assert_eq!(covers[0].intact_segments(), 0);
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].x, 100.0);
}

// ── player shots ↔ bonus target ───────────────────────────────────────────────

#[test]
fn bonus_hit_awards_mystery_score() {
    let mut w = bare_world();
    let mut b = bonus_target(Direction::Right);
    b.x = 100.0;
    w.bonus = Some(b);
    w.player_shots.push(player_shot(105.0, 62.0));
    let mut events = Vec::new();

    player_shots_vs_bonus(&mut w, &mut AlwaysRng, &mut events);

    assert_eq!(w.score, 50);
    assert_eq!(w.high_score, 50);
    assert!(w.bonus.is_none());
    assert!(w.player_shots.is_empty());
    assert_eq!(sounds(&events), vec![CueKind::UfoHit, CueKind::UfoScore]);
}

#[test]
fn seeded_bonus_scores_come_from_table() {
    let mut rng = seeded_rng();
    for _ in 0..50 {
        let mut w = bare_world();
        w.bonus = Some(BonusTarget { x: 100.0, ..bonus_target(Direction::Left) });
        w.player_shots.push(player_shot(105.0, 62.0));
        player_shots_vs_bonus(&mut w, &mut rng, &mut Vec::new());
        assert!(BONUS_SCORES.contains(&w.score));
    }
}

#[test]
fn bonus_miss_keeps_target() {
    let mut w = bare_world();
    w.bonus = Some(BonusTarget { x: 100.0, ..bonus_target(Direction::Right) });
    w.player_shots.push(player_shot(300.0, 62.0));
    player_shots_vs_bonus(&mut w, &mut NeverRng, &mut Vec::new());
    assert!(w.bonus.is_some());
    assert_eq!(w.player_shots.len(), 1);
}

// ── ordering ──────────────────────────────────────────────────────────────────

#[test]
fn shot_is_consumed_once() {
    let mut w = bare_world();
    w.enemies.push(enemy_at(98.0, 55.0, EnemyKind::Crab));
    w.covers.push(Cover {
        x: 100.0,
        y: 55.0,
        segments: vec![segment(101.0, 56.0)],
    });
    w.bonus = Some(BonusTarget { x: 95.0, y: 52.0, ..bonus_target(Direction::Right) });
    w.player_shots.push(player_shot(100.0, 50.0));

    resolve(&mut w, &mut NeverRng, &mut Vec::new());

    assert!(!w.enemies[0].alive);
    assert_eq!(w.score, 20);
    assert_eq!(w.covers[0].intact_segments(), 1);
    assert!(w.bonus.is_some());
}

#[test]
fn enemy_shot_hits_player_before_cover() {
    let mut w = bare_world();
    let (px, py) = (w.player.x, w.player.y);
    w.covers.push(Cover {
        x: px,
        y: py,
        segments: vec![segment(px + 5.0, py + 2.0)],
    });
    w.enemy_shots.push(enemy_shot(px + 4.0, py - 5.0));

    resolve(&mut w, &mut NeverRng, &mut Vec::new());

    assert_eq!(w.lives(), 2);
    assert_eq!(w.covers[0].intact_segments(), 1);
}
