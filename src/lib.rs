//! Asteroid Drift - a wrap-around asteroid field arcade game
//!
//! Core modules:
//! - `sim`: Simulation (motion, collisions, spawn rules, game state machine)
//! - `input`: Logical actions and the shared intent buffer
//! - `render`: Frame snapshots handed to an external renderer
//! - `audio`: Fire-and-forget sound cues
//! - `host`: Fixed-rate runner and shutdown plumbing
//! - `settings`: Data-driven game rules

pub mod audio;
pub mod host;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Fixed physical constants of the game objects
pub mod consts {
    /// Ship max speed per axis (units per tick)
    pub const SHIP_MAX_SPEED: f32 = 5.0;
    /// Ship acceleration per tick; also used as the rotation step (radians)
    pub const SHIP_ACCEL: f32 = 0.2;
    /// Frames of invincibility after (re)spawning
    pub const SHIP_INVINCIBLE_FRAMES: u32 = 100;
    /// Fraction of the invincibility window after which the ship blinks
    pub const SHIP_BLINK_START: f32 = 0.6;
    /// Blink toggles every N frames
    pub const SHIP_BLINK_PERIOD: u32 = 5;
    /// Proximity radius of the ship
    pub const SHIP_SIZE: f32 = 40.0;
    /// Distance from ship centre to its nose
    pub const SHIP_NOSE: f32 = 20.0;

    /// Radius of a Big rock; Medium and Small are /2 and /4
    pub const ROCK_BASE_SIZE: f32 = 80.0;
    /// Vertex count range of a generated rock (max exclusive)
    pub const ROCK_MIN_SIDES: usize = 6;
    pub const ROCK_MAX_SIDES: usize = 14;
    /// Per-axis rock speed range (inclusive, whole units)
    pub const ROCK_MIN_SPEED: i32 = -3;
    pub const ROCK_MAX_SPEED: i32 = 3;
    /// Max rock rotation per tick (radians)
    pub const ROCK_MAX_ROTATION: f32 = 0.04;
    /// Radial variance of rock vertices as a fraction of its radius
    pub const ROCK_VARIANCE: f32 = 0.5;
    /// Fade-in alpha step per tick
    pub const ROCK_FADE_STEP: u8 = 5;
    /// Children produced when a Big or Medium rock is shot
    pub const ROCK_SPLIT_COUNT: usize = 3;

    /// Bullet speed (units per tick)
    pub const BULLET_SPEED: f32 = 15.0;
    /// Bullet lifetime in ticks
    pub const BULLET_LIFETIME: u32 = 25;
    /// Bullet polygon radius
    pub const BULLET_RADIUS: f32 = 3.0;
    /// Bullet proximity radius
    pub const BULLET_SIZE: f32 = 2.0;
}

/// Unit vector pointing along a heading, where heading 0 is "up" on screen
/// (negative y) and positive headings turn clockwise.
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), -heading.cos())
}

/// Wrap a coordinate back onto `[0, extent)`.
///
/// Leaving past the far edge snaps to 0; leaving past the near edge re-enters
/// from the far side. The far edge drops its overshoot so a body crossing
/// `extent` always lands exactly on 0; the near side cannot do the same, since
/// `extent` itself is off the field.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = if value >= extent {
        0.0
    } else if value < 0.0 {
        value.rem_euclid(extent)
    } else {
        value
    };
    // rem_euclid may round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}
