//! RGBA color value used by corner color layers.

use glam::Vec4;
use serde::{Deserialize, Serialize};

/// An RGBA color with each channel in the 0-1 range.
///
/// Alpha is a first-class channel here: corner color layers store it and the
/// editing operations copy it along with the RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque white, the initial value of new color layers.
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a new color from raw channel values.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Return a copy with every channel clamped to the 0-1 range.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Largest absolute per-channel difference to another color.
    ///
    /// The live-sync guard uses this to decide whether a picked color is
    /// meaningfully different from the one the UI already holds.
    pub fn max_channel_delta(self, other: Rgba) -> f32 {
        let dr = (self.r - other.r).abs();
        let dg = (self.g - other.g).abs();
        let db = (self.b - other.b).abs();
        let da = (self.a - other.a).abs();
        dr.max(dg).max(db).max(da)
    }

    /// Channel values as an array, in RGBA order.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create a color from an RGBA array.
    pub fn from_array(channels: [f32; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Vec4> for Rgba {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Rgba> for Vec4 {
    fn from(c: Rgba) -> Self {
        Vec4::new(c.r, c.g, c.b, c.a)
    }
}
