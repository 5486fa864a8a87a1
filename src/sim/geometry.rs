//! Polygon shapes and exact region intersection
//!
//! A [`Shape`] is a set of figures (closed polygons) in local coordinates. Its
//! region is the union of the filled figures, so an open outline still encloses
//! the area between its first and last vertex.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Figures with less area than this are treated as empty
const MIN_FIGURE_AREA: f32 = 1e-4;

/// A multi-figure polygon shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    figures: Vec<Vec<Vec2>>,
}

impl Shape {
    /// Shape made of a single figure
    pub fn polygon(points: Vec<Vec2>) -> Self {
        Self {
            figures: vec![points],
        }
    }

    /// Shape made of several figures
    pub fn from_figures(figures: Vec<Vec<Vec2>>) -> Self {
        Self { figures }
    }

    /// Regular polygon centred on the origin
    pub fn regular(sides: usize, radius: f32) -> Self {
        let step = std::f32::consts::TAU / sides as f32;
        let points = (0..sides)
            .map(|i| Vec2::from_angle(i as f32 * step) * radius)
            .collect();
        Self::polygon(points)
    }

    pub fn figures(&self) -> &[Vec<Vec2>] {
        &self.figures
    }

    /// Rotate about the local origin, then translate to `at`
    pub fn transformed(&self, rotation: f32, at: Vec2) -> Shape {
        let rot = Vec2::from_angle(rotation);
        Shape {
            figures: self
                .figures
                .iter()
                .map(|fig| fig.iter().map(|&p| rot.rotate(p) + at).collect())
                .collect(),
        }
    }

    /// Furthest vertex distance from the local origin
    pub fn extent(&self) -> f32 {
        self.figures
            .iter()
            .flatten()
            .map(|p| p.length())
            .fold(0.0, f32::max)
    }

    /// Whether a point lies inside any figure
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.figures
            .iter()
            .filter(|fig| !is_degenerate(fig))
            .any(|fig| figure_contains(fig, point))
    }

    /// Whether the two regions share any area
    ///
    /// Degenerate figures never intersect anything.
    pub fn intersects(&self, other: &Shape) -> bool {
        self.figures
            .iter()
            .filter(|a| !is_degenerate(a))
            .any(|a| {
                other
                    .figures
                    .iter()
                    .filter(|b| !is_degenerate(b))
                    .any(|b| figures_intersect(a, b))
            })
    }
}

/// Signed area of a closed figure (shoelace)
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice / 2.0
}

fn is_degenerate(points: &[Vec2]) -> bool {
    points.len() < 3 || signed_area(points).abs() < MIN_FIGURE_AREA
}

/// Closed edges of a figure
fn edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Even-odd point-in-polygon test
fn figure_contains(points: &[Vec2], p: Vec2) -> bool {
    let mut inside = false;
    for (a, b) in edges(points) {
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

fn figures_intersect(a: &[Vec2], b: &[Vec2]) -> bool {
    let crossing =
        edges(a).any(|(p1, p2)| edges(b).any(|(q1, q2)| segments_intersect(p1, p2, q1, q2)));
    // No boundary crossing: either disjoint or one fully contains the other
    crossing || figure_contains(b, a[0]) || figure_contains(a, b[0])
}

fn orientation(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Segment intersection, including touching and collinear overlap
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}
