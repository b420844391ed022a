//! Ground plane and side walls, derived from the display surface every frame.

use crate::{constants::*, error::ConfigError, joint::POSE_DEPTH};
use serde::{Deserialize, Serialize};

/// Size of the display surface, plus how the ground and spawn point sit inside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub floor_margin: f64,
    pub drop_height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: STANCE_VIEWPORT_WIDTH,
            height: STANCE_VIEWPORT_HEIGHT,
            floor_margin: STANCE_FLOOR_MARGIN,
            drop_height: STANCE_DROP_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0. && self.height > self.floor_margin) {
            return Err(ConfigError::Viewport {
                width: self.width,
                height: self.height,
                floor_margin: self.floor_margin,
            });
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            floor_y: self.height - self.floor_margin,
            left_x: 0.,
            right_x: self.width,
        }
    }
}

/// The box every particle is clamped into. +y points down, so the floor is the largest y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub floor_y: f64,
    pub left_x: f64,
    pub right_x: f64,
}

impl Bounds {
    /// Origin of a freshly spawned skeleton: horizontally centred, feet `drop_height` above the
    /// floor
    pub fn spawn_origin(&self, drop_height: f64) -> (f64, f64) {
        (
            (self.left_x + self.right_x) / 2.,
            self.floor_y - drop_height - POSE_DEPTH,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_viewport_bounds() {
        let bounds = Viewport::sized(800., 600.).bounds();
        assert_f64_approx!(550., bounds.floor_y);
        assert_f64_approx!(0., bounds.left_x);
        assert_f64_approx!(800., bounds.right_x);

        let (x, y) = bounds.spawn_origin(STANCE_DROP_HEIGHT);
        assert_f64_approx!(400., x);
        assert_f64_approx!(550. - STANCE_DROP_HEIGHT - POSE_DEPTH, y);
    }

    #[test]
    fn test_viewport_validate() {
        assert!(Viewport::default().validate().is_ok());
        assert!(Viewport::sized(0., 600.).validate().is_err());
        assert!(Viewport::sized(800., 40.).validate().is_err());
        assert!(Viewport::sized(f64::NAN, 600.).validate().is_err());
    }
}
