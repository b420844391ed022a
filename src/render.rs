//! Geometry handed to whatever draws the simulation. Nothing here is read back by the core.

use serde::{Deserialize, Serialize};

/// One stick as a line from `(x1, y1)` to `(x2, y2)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Everything needed to draw one skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub segments: Vec<Segment>,
    pub head: (f64, f64),
    pub head_radius: f64,
}

/// Every skeleton of the population, in population order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub figures: Vec<Figure>,
}
