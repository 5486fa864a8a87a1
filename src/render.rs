//! Frame snapshots for renderers
//!
//! [`Frame::capture`] copies everything a renderer needs out of the game state,
//! so presenting never reads state the simulation is about to mutate.

use serde::{Deserialize, Serialize};

use crate::sim::{Color, Field, GamePhase, GameState, Kinematic, Shape};

/// One entity, already transformed to world space at every position it occupies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Mirror images first, then the real position
    pub outlines: Vec<Shape>,
    pub color: Color,
    pub filled: bool,
}

impl Sprite {
    pub fn of(entity: &dyn Kinematic) -> Self {
        Self {
            outlines: entity.outlines(),
            color: entity.color(),
            filled: entity.filled(),
        }
    }

    /// Fully transparent sprites need not be drawn
    pub fn is_visible(&self) -> bool {
        self.color.a > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuView {
    pub title: String,
    pub options: Vec<String>,
    pub selected: usize,
}

/// Owned snapshot of one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub field: Field,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Hidden on the title screen
    pub ship: Option<Sprite>,
    pub rocks: Vec<Sprite>,
    pub bullets: Vec<Sprite>,
    pub menu: Option<MenuView>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let ship = (state.phase != GamePhase::PreGame).then(|| Sprite::of(&state.ship));
        let menu = state.menu.as_ref().map(|m| MenuView {
            title: m.title().to_string(),
            options: m.options().iter().map(|o| o.label().to_string()).collect(),
            selected: m.selected_index(),
        });

        Self {
            tick: state.time_ticks,
            field: state.field(),
            phase: state.phase,
            score: state.score.value(),
            lives: state.lives.count(),
            ship,
            rocks: state.rocks.iter().map(|r| Sprite::of(r)).collect(),
            bullets: state.bullets.iter().map(|b| Sprite::of(b)).collect(),
            menu,
        }
    }
}

/// Anything that can show a frame
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

/// Headless renderer: logs a summary of each frame and any menu that appears
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_phase: Option<GamePhase>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogRenderer {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;

        if self.last_phase != Some(frame.phase) {
            self.last_phase = Some(frame.phase);
            if let Some(menu) = &frame.menu {
                log::info!("[{}] {}", menu.title, menu.options.join(" | "));
            }
        }

        let visible_rocks = frame.rocks.iter().filter(|r| r.is_visible()).count();
        log::trace!(
            "frame {}: {:?} score={} lives={} rocks={}/{} bullets={}",
            frame.tick,
            frame.phase,
            frame.score,
            frame.lives,
            visible_rocks,
            frame.rocks.len(),
            frame.bullets.len()
        );
    }
}
