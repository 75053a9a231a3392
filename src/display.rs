//! Terminal rendering for the binary. Nothing here touches game state.
//!
//! The 448x512 playfield is scaled onto whatever grid the terminal offers,
//! so a cell may cover several logical units in each direction.

use std::collections::HashSet;
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_invaders::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use space_invaders::entities::{Enemy, EnemyKind, GameStatus, Projectile, ShotKind, World};
use space_invaders::geometry::Bounds;

// ── Palette ───────────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_WAVE: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_ENEMY_SQUID: Color = Color::Magenta;
const C_ENEMY_CRAB: Color = Color::Cyan;
const C_ENEMY_OCTOPUS: Color = Color::White;
const C_SHOT_PLAYER: Color = Color::White;
const C_SHOT_ENEMY: Color = Color::Yellow;
const C_COVER: Color = Color::Green;
const C_BONUS: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

// ── Projection ────────────────────────────────────────────────────────────────

/// Maps logical playfield coordinates onto terminal cells.
///
/// Layout: row 0 HUD, row 1 top border, field rows, border, hint row.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    fn inner_cols(&self) -> u16 {
        self.cols.saturating_sub(2).max(1)
    }

    fn inner_rows(&self) -> u16 {
        self.rows.saturating_sub(4).max(1)
    }

    /// Terminal cell for a logical point, or `None` if it falls outside the
    /// visible field.
    pub fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(0.0..FIELD_WIDTH).contains(&x) || !(0.0..FIELD_HEIGHT).contains(&y) {
            return None;
        }
        let col = 1 + (x / FIELD_WIDTH * self.inner_cols() as f32) as u16;
        let row = 2 + (y / FIELD_HEIGHT * self.inner_rows() as f32) as u16;
        Some((col, row))
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// Clear the screen and draw `world` as it stands after the last step.
pub fn render<W: Write>(out: &mut W, world: &World, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, world, view)?;

    match world.status {
        GameStatus::NotStarted => draw_title(out, world, view)?,
        GameStatus::Playing | GameStatus::GameOver => {
            draw_cover(out, world, view)?;
            for enemy in world.alive_enemies() {
                draw_enemy(out, enemy, view)?;
            }
            for shot in world.player_shots.iter().chain(&world.enemy_shots) {
                draw_shot(out, shot, view)?;
            }
            draw_bonus(out, world, view)?;
            draw_player(out, world, view)?;
        }
    }

    draw_controls_hint(out, view)?;

    if world.status == GameStatus::GameOver {
        draw_game_over(out, world, view)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let span = "─".repeat(view.cols.saturating_sub(2) as usize);
    let bottom = view.rows.saturating_sub(2);
    let right = view.cols.saturating_sub(1);

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{span}┐")))?;
    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{span}┘")))?;

    for row in 2..bottom {
        for col in [0, right] {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("│"))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &World, view: Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("SCORE {:06}  HI {:06}", world.score, world.high_score)))?;

    let wave_str = format!("[ WAVE {} ]", world.wave);
    let wx = (view.cols / 2).saturating_sub(wave_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(wx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_WAVE))?;
    out.queue(Print(&wave_str))?;

    let lives = format!("Ships:{}", "▲".repeat(world.lives() as usize));
    let lx = view.cols.saturating_sub(lives.chars().count() as u16 + 1);
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(Print(&lives))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, world: &World, view: Viewport) -> std::io::Result<()> {
    let ship = world.player.bounds();
    if let Some((col, row)) = view.cell(ship.x + ship.width / 2.0, ship.y) {
        out.queue(style::SetForegroundColor(C_PLAYER))?;
        out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
        out.queue(Print("/▲\\"))?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, view: Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(enemy.x, enemy.y) else {
        return Ok(());
    };
    // Two animation frames per kind, swapped on every formation move.
    let (color, frames) = match enemy.kind {
        EnemyKind::Squid => (C_ENEMY_SQUID, ["«»", "»«"]),
        EnemyKind::Crab => (C_ENEMY_CRAB, ["╔╗", "╚╝"]),
        EnemyKind::Octopus => (C_ENEMY_OCTOPUS, ["◎◎", "◉◉"]),
    };
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(frames[(enemy.phase & 1) as usize]))?;
    Ok(())
}

fn draw_shot<W: Write>(out: &mut W, shot: &Projectile, view: Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(shot.x, shot.y) else {
        return Ok(());
    };
    let (color, glyph) = match shot.kind {
        ShotKind::Player => (C_SHOT_PLAYER, "║"),
        ShotKind::Straight => (C_SHOT_ENEMY, "|"),
        ShotKind::Thick => (C_SHOT_ENEMY, "┃"),
        ShotKind::Zigzag => (C_SHOT_ENEMY, "≀"),
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

/// Segments are far smaller than a cell; a cell is drawn while any intact
/// segment still projects onto it.
fn draw_cover<W: Write>(out: &mut W, world: &World, view: Viewport) -> std::io::Result<()> {
    let cells: HashSet<(u16, u16)> = world
        .covers
        .iter()
        .flat_map(|c| c.segments.iter())
        .filter(|s| s.intact)
        .filter_map(|s| view.cell(s.x, s.y))
        .collect();

    out.queue(style::SetForegroundColor(C_COVER))?;
    for (col, row) in cells {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("█"))?;
    }
    Ok(())
}

fn draw_bonus<W: Write>(out: &mut W, world: &World, view: Viewport) -> std::io::Result<()> {
    let Some(bonus) = world.bonus.as_ref().filter(|b| b.alive) else {
        return Ok(());
    };
    if let Some((col, row)) = view.cell(bonus.x, bonus.y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_BONUS))?;
        out.queue(Print("<◉>"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   SPACE / J : Shoot   ENTER : Start   Q : Quit",
    ))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: Viewport,
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_title<W: Write>(out: &mut W, world: &World, view: Viewport) -> std::io::Result<()> {
    let mut lines = vec![
        ("★  SPACE  INVADERS  ★".to_string(), Color::Cyan),
        (String::new(), Color::White),
        ("PRESS ENTER TO START".to_string(), Color::White),
    ];
    if world.high_score > 0 {
        lines.push((format!("Best Score: {}", world.high_score), Color::Yellow));
    }
    lines.push((String::new(), Color::White));
    lines.push(("30 · 20 · 10 points per row   saucer: mystery".to_string(), C_HINT));
    draw_centered(out, view, &lines)
}

fn draw_game_over<W: Write>(out: &mut W, world: &World, view: Viewport) -> std::io::Result<()> {
    let new_best = world.score > 0 && world.score >= world.high_score;
    let best_line = if new_best {
        (format!("★ NEW BEST: {:>6} ★", world.high_score), Color::Yellow)
    } else {
        (format!("Best Score:  {:>6}", world.high_score), Color::DarkGrey)
    };
    let lines = [
        ("╔════════════════════╗".to_string(), Color::Red),
        ("║    GAME  OVER      ║".to_string(), Color::Red),
        ("╚════════════════════╝".to_string(), Color::Red),
        (format!("Final Score: {:>6}", world.score), Color::Yellow),
        best_line,
        ("ENTER - Play Again  Q - Quit".to_string(), Color::White),
    ];
    draw_centered(out, view, &lines)
}
