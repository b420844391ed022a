//! Rigid-length sticks between two particles, solved by pairwise relaxation.

use crate::{
    joint::{Joint, JOINT_COUNT},
    particle::Particle,
};
use serde::{Deserialize, Serialize};

/// A fixed-distance link between two joints of the same skeleton. Holds joint ids rather than the
/// particles themselves; the skeleton owns the particles and lends them out to relax.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stick {
    a: Joint,
    b: Joint,
    rest_length: f64,
}

impl Stick {
    pub const fn new(a: Joint, b: Joint, rest_length: f64) -> Self {
        Self { a, b, rest_length }
    }

    #[inline]
    pub fn ends(&self) -> (Joint, Joint) {
        (self.a, self.b)
    }

    #[inline]
    pub fn rest_length(&self) -> f64 {
        self.rest_length
    }

    /// Apply this stick's correction once. Returns false if the endpoints coincide and the
    /// correction was skipped.
    pub fn relax(&self, particles: &mut [Particle; JOINT_COUNT]) -> bool {
        let (mut p1, mut p2) = (particles[self.a.idx()], particles[self.b.idx()]);
        if !relax_pair(&mut p1, &mut p2, self.rest_length) {
            log::trace!("skipping degenerate stick {}-{}", self.a.name(), self.b.name());
            return false;
        }
        particles[self.a.idx()] = p1;
        particles[self.b.idx()] = p2;
        true
    }
}

/// Move `p1` and `p2` apart (or together) by half the error each, so that they end up exactly
/// `rest_length` apart. Coincident points have no direction to correct along and are left alone.
pub fn relax_pair(p1: &mut Particle, p2: &mut Particle, rest_length: f64) -> bool {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let distance = dx.hypot(dy);
    if distance == 0. {
        return false;
    }

    let percent = (rest_length - distance) / distance / 2.;
    let (offset_x, offset_y) = (dx * percent, dy * percent);

    p1.x -= offset_x;
    p1.y -= offset_y;
    p2.x += offset_x;
    p2.y += offset_y;
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn distance(p1: &Particle, p2: &Particle) -> f64 {
        (p2.x - p1.x).hypot(p2.y - p1.y)
    }

    #[test]
    fn test_relax_pair_halfway() {
        let mut p1 = Particle::at(0., 0.);
        let mut p2 = Particle::at(100., 0.);
        assert!(relax_pair(&mut p1, &mut p2, 50.));
        assert_f64_approx!(25., p1.x);
        assert_f64_approx!(0., p1.y);
        assert_f64_approx!(75., p2.x);
        assert_f64_approx!(0., p2.y);
    }

    #[test]
    fn test_relax_pair_converges_in_one_pass() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let mut p1 = Particle::at(rng.random_range(-500.0..500.), rng.random_range(-500.0..500.));
            let mut p2 = Particle::at(rng.random_range(-500.0..500.), rng.random_range(-500.0..500.));
            let rest = rng.random_range(1.0..200.);
            let mid = ((p1.x + p2.x) / 2., (p1.y + p2.y) / 2.);

            relax_pair(&mut p1, &mut p2, rest);
            assert!((distance(&p1, &p2) - rest).abs() < 1e-6);

            // correction is symmetric, so the midpoint never moves
            assert!((mid.0 - (p1.x + p2.x) / 2.).abs() < 1e-6);
            assert!((mid.1 - (p1.y + p2.y) / 2.).abs() < 1e-6);
        }
    }

    #[test]
    fn test_relax_pair_coincident_is_skipped() {
        let mut p1 = Particle::at(3., 4.);
        let mut p2 = Particle::at(3., 4.);
        assert!(!relax_pair(&mut p1, &mut p2, 10.));
        assert_eq!(Particle::at(3., 4.), p1);
        assert_eq!(Particle::at(3., 4.), p2);
    }

    #[test]
    fn test_stick_relax_leaves_other_particles() {
        let mut particles = [Particle::at(5., 5.); JOINT_COUNT];
        particles[Joint::Head.idx()] = Particle::at(0., 0.);
        particles[Joint::Shoulder.idx()] = Particle::at(0., 60.);

        let stick = Stick::new(Joint::Head, Joint::Shoulder, 30.);
        assert!(stick.relax(&mut particles));
        assert_f64_approx!(15., particles[Joint::Head.idx()].y);
        assert_f64_approx!(45., particles[Joint::Shoulder.idx()].y);
        for joint in Joint::ALL.into_iter().skip(2) {
            assert_eq!(Particle::at(5., 5.), particles[joint.idx()]);
        }

        // both remaining particles coincide at (5, 5)
        assert!(!Stick::new(Joint::Hip, Joint::LeftFoot, 10.).relax(&mut particles));
    }
}
