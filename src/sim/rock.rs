//! Drifting rocks with procedurally generated outlines

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, Color, Field, Kinematic};
use super::geometry::Shape;
use crate::consts::*;

/// Rock size tier. The discriminant doubles as the score multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RockTier {
    Big = 1,
    Medium = 2,
    Small = 3,
}

impl RockTier {
    pub fn radius(self) -> f32 {
        match self {
            RockTier::Big => ROCK_BASE_SIZE,
            RockTier::Medium => ROCK_BASE_SIZE / 2.0,
            RockTier::Small => ROCK_BASE_SIZE / 4.0,
        }
    }

    pub fn ordinal(self) -> u64 {
        self as u64
    }

    /// Tier of the children a shot rock breaks into
    pub fn split(self) -> Option<RockTier> {
        match self {
            RockTier::Big => Some(RockTier::Medium),
            RockTier::Medium => Some(RockTier::Small),
            RockTier::Small => None,
        }
    }
}

/// Colour while fading in; alpha comes from the fade amount
const FADE_RGB: (u8, u8, u8) = (0, 100, 255);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    pub id: u32,
    pub body: Body,
    tier: RockTier,
    /// Rotation added every tick
    spin: f32,
    pub(crate) fading_in: bool,
    /// 0 (invisible) ..= 255 (opaque)
    pub(crate) fade: u8,
    removed: bool,
}

impl Rock {
    /// Roll a new rock of `tier` at `pos`. `is_new` rocks fade in and cannot
    /// hurt the ship until they are fully opaque.
    pub fn new(id: u32, tier: RockTier, pos: Vec2, is_new: bool, rng: &mut impl Rng) -> Self {
        let radius = tier.radius();
        let sides = rng.random_range(ROCK_MIN_SIDES..ROCK_MAX_SIDES);
        let shape = rock_outline(sides, radius, radius * ROCK_VARIANCE, rng);

        let mut body = Body::new(shape, pos, radius);
        body.vel = Vec2::new(
            rng.random_range(ROCK_MIN_SPEED..=ROCK_MAX_SPEED) as f32,
            rng.random_range(ROCK_MIN_SPEED..=ROCK_MAX_SPEED) as f32,
        );
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let spin = ROCK_MAX_ROTATION * rng.random::<f32>() * direction;

        Self {
            id,
            body,
            tier,
            spin,
            fading_in: is_new,
            fade: if is_new { 0 } else { u8::MAX },
            removed: false,
        }
    }

    pub fn tier(&self) -> RockTier {
        self.tier
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn is_fading_in(&self) -> bool {
        self.fading_in
    }

    pub fn fade(&self) -> u8 {
        self.fade
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Flag for removal; splitting and scoring are up to the caller
    pub fn kill(&mut self) {
        self.removed = true;
    }
}

/// Irregular N-gon: each vertex sits on its spoke, pulled inward by a random
/// amount up to `variance` (independently per axis).
pub fn rock_outline(sides: usize, radius: f32, variance: f32, rng: &mut impl Rng) -> Shape {
    let step = std::f32::consts::TAU / sides as f32;
    let points = (0..sides)
        .map(|i| {
            let angle = i as f32 * step;
            let rx = radius - rng.random::<f32>() * variance;
            let ry = radius - rng.random::<f32>() * variance;
            Vec2::new(angle.sin() * rx, angle.cos() * ry)
        })
        .collect();
    Shape::polygon(points)
}

impl Kinematic for Rock {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tick(&mut self, field: Field) {
        self.body.advance(field);
        self.body.rotation += self.spin;
        if self.fading_in {
            self.fade = self.fade.saturating_add(ROCK_FADE_STEP);
            if self.fade == u8::MAX {
                self.fading_in = false;
            }
        }
    }

    fn color(&self) -> Color {
        if self.fading_in {
            let (r, g, b) = FADE_RGB;
            Color::rgba(r, g, b, self.fade)
        } else {
            Color::GREEN
        }
    }
}
