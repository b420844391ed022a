//! The fixed joint set that skeletons, fitness and rendering all address joints by.

use serde::{Deserialize, Serialize};

impl_joints!(
    Head, Shoulder, Hip, LeftElbow, RightElbow, LeftHand, RightHand, LeftKnee, RightKnee,
    LeftFoot, RightFoot,
);

/// The two joints whose ground contact counts as standing
pub const FEET: [Joint; 2] = [Joint::LeftFoot, Joint::RightFoot];

impl Joint {
    #[inline]
    pub fn is_foot(self) -> bool {
        FEET.contains(&self)
    }

    /// Offset of this joint from the skeleton origin in the spawn pose. +y points down.
    pub const fn rest_offset(self) -> (f64, f64) {
        match self {
            Self::Head => (0., -50.),
            Self::Shoulder => (0., -20.),
            Self::Hip => (0., 30.),
            Self::LeftElbow => (-40., -20.),
            Self::RightElbow => (40., -20.),
            Self::LeftHand => (-80., -20.),
            Self::RightHand => (80., -20.),
            Self::LeftKnee => (-30., 80.),
            Self::RightKnee => (30., 80.),
            Self::LeftFoot => (-30., 130.),
            Self::RightFoot => (30., 130.),
        }
    }
}

/// Lowest point of the spawn pose below the origin
pub const POSE_DEPTH: f64 = 130.;

/// Sticks of the humanoid figure as `(from, to, rest length)`, in relaxation order
pub const BONES: [(Joint, Joint, f64); 10] = [
    (Joint::Head, Joint::Shoulder, 30.),
    (Joint::Shoulder, Joint::Hip, 50.),
    (Joint::Shoulder, Joint::LeftElbow, 40.),
    (Joint::LeftElbow, Joint::LeftHand, 40.),
    (Joint::Shoulder, Joint::RightElbow, 40.),
    (Joint::RightElbow, Joint::RightHand, 40.),
    (Joint::Hip, Joint::LeftKnee, 50.),
    (Joint::LeftKnee, Joint::LeftFoot, 50.),
    (Joint::Hip, Joint::RightKnee, 50.),
    (Joint::RightKnee, Joint::RightFoot, 50.),
];
