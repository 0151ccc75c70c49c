use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The fixed play area
#[derive(Debug, Clone, Copy)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.court_width,
            height: config.court_height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of a box of `extent` height into the court
    pub fn clamp_y(&self, y: f32, extent: f32) -> f32 {
        y.clamp(0.0, self.height - extent)
    }

    /// Whether an x coordinate lies within the court horizontally (edges included)
    pub fn contains_x(&self, x: f32) -> bool {
        (0.0..=self.width).contains(&x)
    }
}
