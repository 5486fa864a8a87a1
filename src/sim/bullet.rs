//! Bullets fired from the ship's nose

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Color, Field, Kinematic};
use super::geometry::Shape;
use crate::consts::*;
use crate::heading_vector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub body: Body,
    heading: f32,
    frames_alive: u32,
    removed: bool,
}

impl Bullet {
    /// Spawn at `pos` travelling along `heading` at fixed speed
    pub fn new(pos: Vec2, heading: f32) -> Self {
        let mut body = Body::new(Shape::regular(8, BULLET_RADIUS), pos, BULLET_SIZE);
        body.vel = heading_vector(heading) * BULLET_SPEED;
        Self {
            body,
            heading,
            frames_alive: 0,
            removed: false,
        }
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn frames_alive(&self) -> u32 {
        self.frames_alive
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn kill(&mut self) {
        self.removed = true;
    }
}

impl Kinematic for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tick(&mut self, field: Field) {
        self.body.advance(field);
        self.frames_alive += 1;
        if self.frames_alive >= BULLET_LIFETIME {
            self.removed = true;
        }
    }

    fn color(&self) -> Color {
        Color::PURPLE
    }

    fn filled(&self) -> bool {
        true
    }
}
