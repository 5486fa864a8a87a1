//! Logical input actions
//!
//! The host forwards key state into a [`SharedInput`] from its own thread; the
//! runner polls it once per tick through the [`InputSource`] trait.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Everything the game can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    RotateLeft,
    RotateRight,
    ThrustForward,
    ThrustBackward,
    Fire,
    Pause,
    Confirm,
    CursorUp,
    CursorDown,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::RotateLeft,
        Action::RotateRight,
        Action::ThrustForward,
        Action::ThrustBackward,
        Action::Fire,
        Action::Pause,
        Action::Confirm,
        Action::CursorUp,
        Action::CursorDown,
    ];

    #[inline]
    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Read side of the input contract
pub trait InputSource {
    fn is_down(&self, action: Action) -> bool;

    /// An external controller is feeding the actions
    fn override_active(&self) -> bool {
        false
    }

    /// The game is over; stop forwarding input
    fn shutdown(&self) {}
}

/// Snapshot every action into one tick's worth of input
pub fn poll(source: &dyn InputSource) -> TickInput {
    TickInput {
        rotate_left: source.is_down(Action::RotateLeft),
        rotate_right: source.is_down(Action::RotateRight),
        thrust_forward: source.is_down(Action::ThrustForward),
        thrust_backward: source.is_down(Action::ThrustBackward),
        fire: source.is_down(Action::Fire),
        pause: source.is_down(Action::Pause),
        confirm: source.is_down(Action::Confirm),
        cursor_up: source.is_down(Action::CursorUp),
        cursor_down: source.is_down(Action::CursorDown),
        external_controller: source.override_active(),
    }
}

#[derive(Debug, Default)]
struct InputBits {
    /// One bit per held action
    held: AtomicU16,
    override_on: AtomicBool,
    closed: AtomicBool,
}

/// Thread-safe intent buffer; clones share the same state
#[derive(Debug, Clone, Default)]
pub struct SharedInput {
    bits: Arc<InputBits>,
}

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down or up. Ignored once the game has shut down.
    pub fn set(&self, action: Action, down: bool) {
        if self.is_closed() {
            return;
        }
        if down {
            self.bits.held.fetch_or(action.bit(), Ordering::AcqRel);
        } else {
            self.bits.held.fetch_and(!action.bit(), Ordering::AcqRel);
        }
    }

    pub fn press(&self, action: Action) {
        self.set(action, true);
    }

    pub fn release(&self, action: Action) {
        self.set(action, false);
    }

    pub fn set_override(&self, on: bool) {
        if !self.is_closed() {
            self.bits.override_on.store(on, Ordering::Release);
        }
    }

    /// True after the runner has called [`InputSource::shutdown`]
    pub fn is_closed(&self) -> bool {
        self.bits.closed.load(Ordering::Acquire)
    }
}

impl InputSource for SharedInput {
    fn is_down(&self, action: Action) -> bool {
        self.bits.held.load(Ordering::Acquire) & action.bit() != 0
    }

    fn override_active(&self) -> bool {
        self.bits.override_on.load(Ordering::Acquire)
    }

    fn shutdown(&self) {
        self.bits.closed.store(true, Ordering::Release);
        self.bits.held.store(0, Ordering::Release);
        self.bits.override_on.store(false, Ordering::Release);
        log::debug!("Input closed");
    }
}
