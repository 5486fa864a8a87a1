//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, elapsed time passed in
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod bullet;
pub mod geometry;
pub mod menu;
pub mod rock;
pub mod ship;
pub mod state;
pub mod tick;

pub use body::{Body, Color, Field, Kinematic};
pub use bullet::Bullet;
pub use geometry::Shape;
pub use menu::{Menu, MenuOption};
pub use rock::{Rock, RockTier};
pub use ship::{Ship, Thrust, Turn};
pub use state::{GameEvent, GamePhase, GameState, Lives, Score};
pub use tick::{TickInput, start_new_game, tick};
