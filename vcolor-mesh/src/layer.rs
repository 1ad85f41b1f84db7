//! Named per-corner color layers.

use crate::color::Rgba;
use serde::{Deserialize, Serialize};

/// Name given to a color layer created on demand.
pub const DEFAULT_COLOR_LAYER: &str = "Col";

/// A named array of RGBA values, one per face corner.
///
/// Colors are stored per corner, not per vertex: corners of the same vertex
/// across different faces may hold different colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CornerColorLayer {
    name: String,
    colors: Vec<Rgba>,
}

impl CornerColorLayer {
    /// Create a layer with `corner_count` entries, all opaque white.
    pub fn new(name: impl Into<String>, corner_count: usize) -> Self {
        Self {
            name: name.into(),
            colors: vec![Rgba::WHITE; corner_count],
        }
    }

    /// Layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of corner entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the layer has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color stored for a corner, if the index is in range.
    pub fn get(&self, corner: usize) -> Option<Rgba> {
        self.colors.get(corner).copied()
    }

    /// Store a color for a corner. Out-of-range indices are ignored.
    pub fn set(&mut self, corner: usize, color: Rgba) {
        if let Some(slot) = self.colors.get_mut(corner) {
            *slot = color;
        }
    }

    /// Grow the layer to cover newly added corners, filling with white.
    pub fn grow_to(&mut self, corner_count: usize) {
        if corner_count > self.colors.len() {
            self.colors.resize(corner_count, Rgba::WHITE);
        }
    }
}
