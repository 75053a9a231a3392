mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

use space_invaders::config::{CoverShape, GameConfig};
use space_invaders::events::GameEvent;
use space_invaders::input::{Action, InputState};
use space_invaders::persistence::FileStore;
use space_invaders::Game;

use display::Viewport;

#[derive(Parser, Debug)]
#[command(name = "space_invaders")]
#[command(about = "Defend the ground against a marching invader fleet")]
struct Args {
    /// Seed for a reproducible game (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// File holding the best score between sessions
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Simulation steps per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Where to write the log (the terminal belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Cover bitmap, rows of `x` and `.`
    #[arg(long)]
    cover: Option<PathBuf>,
}

// ── Key mapping ───────────────────────────────────────────────────────────────

/// Frames a press or repeat keeps a key down when the terminal never sends
/// releases.  Must outlast the OS key-repeat gap (about 133 ms at 60 FPS).
const HOLD_WINDOW: u64 = 8;

fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Keys bound to each action.
const BINDINGS: &[(Action, &[KeyCode])] = &[
    (Action::MoveLeft, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
    (Action::MoveRight, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
    (Action::Fire, &[KeyCode::Char(' '), KeyCode::Char('j'), KeyCode::Char('J')]),
    (Action::Confirm, &[KeyCode::Enter]),
];

fn input_state(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> InputState {
    let mut input = InputState::new();
    for (action, keys) in BINDINGS {
        if keys.iter().any(|k| is_held(key_frame, k, frame)) {
            input.press(*action);
        }
    }
    input
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging(path: &Path) {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("logging disabled: cannot create {}: {e}", path.display());
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn load_config(args: &Args) -> std::io::Result<GameConfig> {
    let cover_shape = match &args.cover {
        Some(path) => std::fs::read_to_string(path)?
            .parse::<CoverShape>()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?,
        None => CoverShape::default(),
    };
    Ok(GameConfig { cover_shape })
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key.  Each frame the keys that are still
/// "fresh" become the held-action set handed to the simulation, so Space
/// and A/D can be held together.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game<StdRng, FileStore>,
    rx: &mpsc::Receiver<Event>,
    frame_time: Duration,
) -> std::io::Result<()> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Input ─────────────────────────────────────────────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        _ => {}
                    }
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let input = input_state(&key_frame, frame);
        let elapsed = frame_start.duration_since(last);
        last = frame_start;

        for event in game.frame(&input, elapsed) {
            match event {
                GameEvent::Sound(cue) => trace!(kind = ?cue.kind, pitch = cue.pitch_hz, "sound"),
                GameEvent::HighScore(score) => trace!(score, "high score"),
                GameEvent::WaveCleared(wave) => info!(wave, "wave cleared"),
            }
        }

        let (cols, rows) = terminal::size()?;
        display::render(out, game.world(), Viewport::new(cols, rows))?;

        let spent = frame_start.elapsed();
        if spent < frame_time {
            thread::sleep(frame_time - spent);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("space_invaders.log"));
    init_logging(&log_path);

    let config = load_config(&args)?;
    let store = FileStore::new(args.score_file.clone().unwrap_or_else(FileStore::default_path));
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?args.seed, score_file = %store.path().display(), "starting");
    let mut game = Game::new(config, store, rng);
    let frame_time = Duration::from_secs(1) / args.fps.max(1);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Release events are only reported by terminals speaking the kitty
    // protocol; elsewhere HOLD_WINDOW takes over.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread; the loop polls the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &rx, frame_time);

    // Restore the terminal even when the loop failed.
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(
        score = game.world().score,
        high_score = game.world().high_score,
        "exiting"
    );
    result
}
