//! Fire-and-forget notifications produced by a simulation step.
//!
//! The core never waits on these; a driver may play them, log them or
//! drop them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueKind {
    EnemyStep,
    PlayerFire,
    EnemyFire,
    EnemyHit,
    BonusLife,
    PlayerHit,
    GameOver,
    UfoAppear,
    UfoHit,
    UfoScore,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundCue {
    pub kind: CueKind,
    pub pitch_hz: f32,
    pub duration_secs: f32,
    pub waveform: Waveform,
}

/// The formation march cycles through these pitches, one per move.
pub const MARCH_PITCHES: [f32; 4] = [100.0, 120.0, 140.0, 160.0];

impl SoundCue {
    const fn tone(kind: CueKind, pitch_hz: f32, duration_secs: f32, waveform: Waveform) -> Self {
        SoundCue {
            kind,
            pitch_hz,
            duration_secs,
            waveform,
        }
    }

    pub fn enemy_step(tone: usize) -> Self {
        let pitch = MARCH_PITCHES[tone % MARCH_PITCHES.len()];
        Self::tone(CueKind::EnemyStep, pitch, 0.05, Waveform::Sine)
    }

    pub const PLAYER_FIRE: SoundCue = Self::tone(CueKind::PlayerFire, 440.0, 0.05, Waveform::Sine);
    pub const ENEMY_FIRE: SoundCue = Self::tone(CueKind::EnemyFire, 200.0, 0.05, Waveform::Sine);
    pub const ENEMY_HIT: SoundCue = Self::tone(CueKind::EnemyHit, 800.0, 0.05, Waveform::Sine);
    pub const BONUS_LIFE: SoundCue = Self::tone(CueKind::BonusLife, 900.0, 0.1, Waveform::Square);
    pub const PLAYER_HIT: SoundCue = Self::tone(CueKind::PlayerHit, 50.0, 0.5, Waveform::Sawtooth);
    pub const GAME_OVER: SoundCue = Self::tone(CueKind::GameOver, 30.0, 1.0, Waveform::Triangle);
    pub const UFO_APPEAR: SoundCue = Self::tone(CueKind::UfoAppear, 600.0, 0.1, Waveform::Sine);
    pub const UFO_HIT: SoundCue = Self::tone(CueKind::UfoHit, 1000.0, 0.1, Waveform::Sine);
    pub const UFO_SCORE: SoundCue = Self::tone(CueKind::UfoScore, 1200.0, 0.05, Waveform::Sine);
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Sound(SoundCue),
    /// The high score was beaten; carries the new value.
    HighScore(u32),
    /// Every enemy of the wave was destroyed; carries the next wave number.
    WaveCleared(u32),
}

impl GameEvent {
    pub fn sound(&self) -> Option<&SoundCue> {
        match self {
            GameEvent::Sound(cue) => Some(cue),
            _ => None,
        }
    }
}
