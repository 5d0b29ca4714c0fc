//! The rectangular play field every entity lives inside.

use std::ops::Range;

use glam::Vec2;

use crate::constants::{GROUND_HEIGHT, MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH, SPAWN_BOTTOM_MARGIN, SPAWN_MARGIN_X, SPAWN_TOP};
use crate::error::GeometryError;

/// Canvas-space bounds of the play field, with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    size: Vec2,
}

impl PlayField {
    /// Creates a play field, rejecting sizes too small to spawn enemies into.
    pub fn new(width: f32, height: f32) -> Result<Self, GeometryError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::NonFinite { width, height });
        }
        if width <= MIN_FIELD_WIDTH || height <= MIN_FIELD_HEIGHT {
            return Err(GeometryError::FieldTooSmall {
                width,
                height,
                min_width: MIN_FIELD_WIDTH,
                min_height: MIN_FIELD_HEIGHT,
            });
        }
        Ok(Self {
            size: Vec2::new(width, height),
        })
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// The y coordinate of the floor line that grounded entities rest on.
    pub fn floor(&self) -> f32 {
        self.size.y - GROUND_HEIGHT
    }

    /// Horizontal range enemies may spawn in.
    ///
    /// Never inverted: when the field is too narrow the range collapses onto its start.
    pub fn spawn_x_range(&self) -> Range<f32> {
        clamped_range(SPAWN_MARGIN_X, self.size.x - SPAWN_MARGIN_X)
    }

    /// Vertical range enemies may spawn in. Never inverted.
    pub fn spawn_y_range(&self) -> Range<f32> {
        clamped_range(SPAWN_TOP, self.size.y - SPAWN_BOTTOM_MARGIN)
    }
}

fn clamped_range(start: f32, end: f32) -> Range<f32> {
    start..end.max(start)
}
