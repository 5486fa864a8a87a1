//! Kinematic bodies on a toroidal field
//!
//! Every moving object owns a [`Body`]. Near a field edge the body also exists at
//! up to three mirror positions on the opposite side(s), so drawing and
//! collision stay seamless across the wrap boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Shape;
use crate::wrap_coordinate;

/// Play field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a point back onto the field
    pub fn wrap(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            wrap_coordinate(p.x, self.width),
            wrap_coordinate(p.y, self.height),
        )
    }
}

/// RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Position, motion and shape shared by all moving objects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rotation of the model (radians, clockwise on screen)
    pub rotation: f32,
    /// Proximity radius (not a geometric bound)
    pub size: f32,
    pub shape: Shape,
    /// Extra positions across the wrap edges, recomputed on every advance
    mirrors: Vec<Vec2>,
}

impl Body {
    pub fn new(shape: Shape, pos: Vec2, size: f32) -> Self {
        debug_assert!(size > 0.0, "body size must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            size,
            shape,
            mirrors: Vec::new(),
        }
    }

    pub fn mirrors(&self) -> &[Vec2] {
        &self.mirrors
    }

    /// Mirrors followed by the real position
    pub fn all_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.mirrors.iter().copied().chain(std::iter::once(self.pos))
    }

    /// Move by one tick of velocity, wrap, and refresh mirrors
    pub fn advance(&mut self, field: Field) {
        self.pos = field.wrap(self.pos + self.vel);
        self.refresh_mirrors(field);
    }

    /// Teleport without moving; mirrors are rebuilt for the new spot
    pub fn place(&mut self, pos: Vec2, field: Field) {
        self.pos = field.wrap(pos);
        self.refresh_mirrors(field);
    }

    pub fn clear_mirrors(&mut self) {
        self.mirrors.clear();
    }

    fn refresh_mirrors(&mut self, field: Field) {
        self.mirrors.clear();
        let Vec2 { x, y } = self.pos;

        let mirror_x = if x - self.size < 0.0 {
            Some(x + field.width)
        } else if x + self.size > field.width {
            Some(x - field.width)
        } else {
            None
        };
        let mirror_y = if y - self.size < 0.0 {
            Some(y + field.height)
        } else if y + self.size > field.height {
            Some(y - field.height)
        } else {
            None
        };

        if let Some(mx) = mirror_x {
            self.mirrors.push(Vec2::new(mx, y));
        }
        if let Some(my) = mirror_y {
            self.mirrors.push(Vec2::new(x, my));
        }
        if let (Some(mx), Some(my)) = (mirror_x, mirror_y) {
            self.mirrors.push(Vec2::new(mx, my));
        }
    }

    /// Shape rotated by the body's rotation and moved to `at`
    pub fn shape_at(&self, at: Vec2) -> Shape {
        self.shape.transformed(self.rotation, at)
    }

    /// Cheap pre-filter: is this body within reach of any image of `other`?
    ///
    /// Reach is twice each size, which must never reject a pair the exact test
    /// would accept.
    pub fn is_close(&self, other: &Body) -> bool {
        let reach = self.size * 2.0 + other.size * 2.0;
        other
            .all_positions()
            .any(|p| self.pos.distance(p) < reach)
    }

    /// Exact test: does this body's region overlap any image of `other`?
    ///
    /// Call only after [`Body::is_close`] has passed.
    pub fn is_colliding(&self, other: &Body) -> bool {
        let mine = self.shape_at(self.pos);
        other
            .all_positions()
            .any(|p| mine.intersects(&other.shape_at(p)))
    }

    /// Pre-filter then exact test
    pub fn hits(&self, other: &Body) -> bool {
        self.is_close(other) && self.is_colliding(other)
    }
}

/// Shared per-tick behaviour of ships, rocks and bullets
pub trait Kinematic {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Advance one simulation tick
    fn tick(&mut self, field: Field) {
        self.body_mut().advance(field);
    }

    /// Current draw colour (reflects fading/blinking)
    fn color(&self) -> Color;

    /// Whether the renderer should fill rather than outline the shape
    fn filled(&self) -> bool {
        false
    }

    /// Transformed shapes at the real position and every mirror
    fn outlines(&self) -> Vec<Shape> {
        let body = self.body();
        body.all_positions().map(|p| body.shape_at(p)).collect()
    }
}
