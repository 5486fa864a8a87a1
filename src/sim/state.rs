//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Field;
use super::bullet::Bullet;
use super::menu::Menu;
use super::rock::{Rock, RockTier};
use super::ship::Ship;
use crate::settings::Settings;

/// Top-level game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu, no game running
    PreGame,
    /// Active play
    InGame,
    /// Pause menu over a frozen game
    PauseGame,
    /// Lives exhausted
    PostGame,
}

impl GamePhase {
    pub fn shows_menu(self) -> bool {
        self != GamePhase::InGame
    }
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired,
    RockDestroyed { tier: RockTier },
    ShipDamaged { lives_left: u32 },
    BonusLife { lives: u32 },
    PhaseChanged { from: GamePhase, to: GamePhase },
    ExitRequested,
}

/// Player score; only ever grows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn add(&mut self, points: u64) {
        self.0 = self.0.saturating_add(points);
    }
}

/// Remaining lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lives(u32);

impl Lives {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn count(self) -> u32 {
        self.0
    }

    /// Lose one life, returning how many remain
    pub fn lose(&mut self) -> u32 {
        self.0 = self.0.saturating_sub(1);
        self.0
    }

    pub fn gain(&mut self) {
        self.0 += 1;
    }

    pub fn is_depleted(self) -> bool {
        self.0 == 0
    }
}

/// Rock spawn pacing, tightened on every bonus life
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Seconds between timed rock spawns
    pub spawn_interval: f32,
    /// Seconds since the last timed spawn
    pub spawn_timer: f32,
    /// Next bonus life at `bonus_life_score * bonus_multiplier`
    pub bonus_multiplier: u64,
}

impl Difficulty {
    pub fn new(settings: &Settings) -> Self {
        Self {
            spawn_interval: settings.spawn_interval_secs,
            spawn_timer: 0.0,
            bonus_multiplier: 1,
        }
    }

    /// Shrink the spawn interval by one step, not below the floor
    pub fn tighten(&mut self, settings: &Settings) {
        self.spawn_interval = (self.spawn_interval - settings.difficulty_step_secs)
            .max(settings.min_spawn_interval_secs);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub rng: Pcg32,
    pub settings: Settings,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Live rocks (sorted by id)
    pub rocks: Vec<Rock>,
    pub bullets: Vec<Bullet>,
    /// Present in every phase except InGame
    pub menu: Option<Menu>,
    pub score: Score,
    pub lives: Lives,
    pub difficulty: Difficulty,
    /// Ticks fire has been held; a shot goes out on multiples of the fire interval
    pub fire_counter: u32,
    /// Seconds since the last accepted menu move, while the debounce window is open
    pub menu_debounce: Option<f32>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Input currently comes from an external controller
    pub external_controller: bool,
    /// Set once Exit is chosen; the runner stops after this tick
    pub exit_requested: bool,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh state sitting on the title menu
    pub fn new(seed: u64, settings: Settings) -> Self {
        let field = settings.field();
        Self {
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship::new(field.center()),
            lives: Lives::new(settings.starting_lives),
            difficulty: Difficulty::new(&settings),
            settings,
            phase: GamePhase::PreGame,
            rocks: Vec::new(),
            bullets: Vec::new(),
            menu: Some(Menu::for_phase(GamePhase::PreGame)),
            score: Score::default(),
            fire_counter: 0,
            menu_debounce: None,
            time_ticks: 0,
            external_controller: false,
            exit_requested: false,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn field(&self) -> Field {
        self.settings.field()
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform random point on the field
    pub fn random_point(&mut self) -> Vec2 {
        let field = self.field();
        Vec2::new(
            self.rng.random_range(0.0..field.width),
            self.rng.random_range(0.0..field.height),
        )
    }

    /// Build a rock with the state's RNG (not yet added to the field)
    pub fn make_rock(&mut self, tier: RockTier, pos: Vec2, is_new: bool) -> Rock {
        let id = self.next_entity_id();
        Rock::new(id, tier, pos, is_new, &mut self.rng)
    }

    /// Switch phase, opening or dropping the menu to match
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        self.menu = to.shows_menu().then(|| Menu::for_phase(to));
        self.menu_debounce = None;
        self.events.push(GameEvent::PhaseChanged { from, to });
        log::info!("Phase {:?} -> {:?}", from, to);
    }

    /// Ensure rocks are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.rocks.sort_by_key(|r| r.id);
    }
}
