//! Sound cues
//!
//! The simulation never plays sound itself. The runner turns tick events into
//! symbolic cues and hands them to an [`AudioSink`], without waiting on playback.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Bullet leaves the ship
    Fire,
    /// Bullet destroys a rock
    RockExplode,
    /// Rock hits the ship
    TakeDamage,
}

impl SoundCue {
    /// Asset name a playback backend can look up
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Fire => "laser_gun",
            SoundCue::RockExplode => "rock_explode",
            SoundCue::TakeDamage => "take_damage",
        }
    }

    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BulletFired => Some(SoundCue::Fire),
            GameEvent::RockDestroyed { .. } => Some(SoundCue::RockExplode),
            GameEvent::ShipDamaged { .. } => Some(SoundCue::TakeDamage),
            _ => None,
        }
    }
}

/// Fire-and-forget audio output
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Play the cue for every event that has one, in event order
pub fn play_events(sink: &mut dyn AudioSink, events: &[GameEvent]) {
    for cue in events.iter().filter_map(SoundCue::for_event) {
        sink.play(cue);
    }
}

/// Audio sink for headless runs: logs each cue
#[derive(Debug, Default)]
pub struct LogAudio {
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues_played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        self.played += 1;
        log::debug!("Sound: {}", cue.name());
    }
}
