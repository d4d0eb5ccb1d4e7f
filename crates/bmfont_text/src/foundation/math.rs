//! Math utilities and types
//!
//! Layout works in whole pixels; draw transforms work in floats.

pub use nalgebra::{Rotation2, Vector2, Vector4};

use serde::{Deserialize, Serialize};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (RGBA colors)
pub type Vec4 = Vector4<f32>;

/// Integer 2D vector for pixel positions
pub type IVec2 = Vector2<i32>;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Scale a point component-wise, then rotate it about the origin
///
/// Rotation is in radians, counter-clockwise in a y-up frame (clockwise on
/// a y-down screen).
pub fn scale_then_rotate(point: Vec2, scale: Vec2, rotation: f32) -> Vec2 {
    Rotation2::new(rotation) * point.component_mul(&scale)
}
