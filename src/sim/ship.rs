//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Color, Field, Kinematic};
use super::geometry::Shape;
use crate::consts::*;
use crate::heading_vector;

/// Thrust applied for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Thrust {
    Forward,
    Backward,
    None,
}

/// Rotation applied for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    pub(crate) invincible: bool,
    /// Frames elapsed in the current invincibility window
    pub(crate) invincible_frames: u32,
    color: Color,
}

/// Body square, nose and two wings; the wings are open outlines
fn ship_model() -> Shape {
    let p = |x: f32, y: f32| Vec2::new(x, y);
    Shape::from_figures(vec![
        vec![p(-10.0, -10.0), p(10.0, -10.0), p(10.0, 10.0), p(-10.0, 10.0)],
        vec![p(-10.0, -10.0), p(0.0, -30.0), p(10.0, -10.0)],
        vec![p(-10.0, -10.0), p(-25.0, 10.0), p(-10.0, 10.0), p(-10.0, 5.0)],
        vec![p(10.0, -10.0), p(25.0, 10.0), p(10.0, 10.0), p(10.0, -10.0)],
    ])
}

impl Ship {
    /// New ship at `pos`; starts invincible
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(ship_model(), pos, SHIP_SIZE),
            invincible: true,
            invincible_frames: 0,
            color: Color::RED,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn heading(&self) -> f32 {
        self.body.rotation
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    /// Where bullets leave the ship
    pub fn nose(&self) -> Vec2 {
        self.body.pos + heading_vector(self.heading()) * SHIP_NOSE
    }

    /// Accelerate along (or against) the heading, clamping each axis
    pub fn apply_thrust(&mut self, thrust: Thrust) {
        let push = heading_vector(self.heading()) * SHIP_ACCEL;
        let vel = match thrust {
            Thrust::None => return,
            Thrust::Forward => self.body.vel + push,
            Thrust::Backward => self.body.vel - push,
        };
        self.body.vel = vel.clamp(Vec2::splat(-SHIP_MAX_SPEED), Vec2::splat(SHIP_MAX_SPEED));
    }

    /// Rotation shares the acceleration constant as its angular step
    pub fn rotate(&mut self, turn: Turn) {
        match turn {
            Turn::Left => self.body.rotation -= SHIP_ACCEL,
            Turn::Right => self.body.rotation += SHIP_ACCEL,
        }
    }

    /// Park at `pos` facing up, at rest
    pub fn reset_to(&mut self, pos: Vec2) {
        self.body.pos = pos;
        self.body.rotation = 0.0;
        self.body.vel = Vec2::ZERO;
        self.body.clear_mirrors();
    }

    pub fn activate_invincibility(&mut self) {
        self.invincible = true;
        self.invincible_frames = 0;
        self.color = Color::LIGHT_BLUE;
    }
}

impl Kinematic for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tick(&mut self, field: Field) {
        self.body.advance(field);
        if !self.invincible {
            return;
        }

        self.invincible_frames += 1;
        let blink_after = (SHIP_INVINCIBLE_FRAMES as f32 * SHIP_BLINK_START) as u32;
        if self.invincible_frames > blink_after && self.invincible_frames % SHIP_BLINK_PERIOD == 0 {
            self.color = if self.color == Color::RED {
                Color::LIGHT_BLUE
            } else {
                Color::RED
            };
        }
        if self.invincible_frames >= SHIP_INVINCIBLE_FRAMES {
            self.invincible = false;
            self.color = Color::RED;
        }
    }

    fn color(&self) -> Color {
        self.color
    }
}
