//! Point masses with implicit velocity.

use crate::{bounds::Bounds, config::Physics};
use serde::{Deserialize, Serialize};

/// A unit point mass. Velocity is never stored, it is always the difference between the current
/// and previous position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub old_x: f64,
    pub old_y: f64,
}

impl Particle {
    /// A particle at rest at `(x, y)`
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            old_x: x,
            old_y: y,
        }
    }

    #[inline]
    pub fn velocity(&self) -> (f64, f64) {
        (self.x - self.old_x, self.y - self.old_y)
    }

    /// Advance one step: damp the implicit velocity, add `impulse` and gravity, and commit the
    /// current position as the previous one.
    pub fn integrate(&mut self, physics: &Physics, impulse: Option<(f64, f64)>) {
        let (vx, vy) = self.velocity();
        let (ix, iy) = impulse.unwrap_or_default();

        self.old_x = self.x;
        self.old_y = self.y;
        self.x += vx * physics.damping + ix;
        self.y += vy * physics.damping + iy + physics.gravity;
    }

    /// Push the particle back inside `bounds`. A clamped axis keeps `restitution` of its
    /// velocity, so contact bleeds momentum instead of stopping the particle dead.
    pub fn clamp(&mut self, bounds: &Bounds, restitution: f64) {
        if self.y > bounds.floor_y {
            let vy = self.y - self.old_y;
            self.y = bounds.floor_y;
            self.old_y = self.y - vy * restitution;
        }

        if self.x < bounds.left_x {
            let vx = self.x - self.old_x;
            self.x = bounds.left_x;
            self.old_x = self.x - vx * restitution;
        } else if self.x > bounds.right_x {
            let vx = self.x - self.old_x;
            self.x = bounds.right_x;
            self.old_x = self.x - vx * restitution;
        }
    }

    #[inline]
    pub fn is_touching_ground(&self, floor_y: f64) -> bool {
        self.y >= floor_y
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn weightless() -> Physics {
        Physics {
            gravity: 0.,
            ..Physics::default()
        }
    }

    fn bounds() -> Bounds {
        Bounds {
            floor_y: 100.,
            left_x: 0.,
            right_x: 200.,
        }
    }

    #[test]
    fn test_integrate_at_rest_without_gravity() {
        let physics = weightless();
        let mut p = Particle::at(10., 20.);
        for _ in 0..100 {
            p.integrate(&physics, None);
        }
        assert_eq!(Particle::at(10., 20.), p);

        p.integrate(&physics, Some((0., 0.)));
        assert_eq!(Particle::at(10., 20.), p);
    }

    #[test]
    fn test_integrate_gravity_always_applies() {
        let physics = Physics::default();
        let mut p = Particle::at(0., 0.);
        p.integrate(&physics, None);
        assert_f64_approx!(physics.gravity, p.y);
        assert_f64_approx!(0., p.old_y);
    }

    #[test]
    fn test_integrate_damps_velocity() {
        let physics = Physics {
            damping: 0.5,
            gravity: 0.,
            ..Physics::default()
        };
        let mut p = Particle {
            x: 10.,
            y: 0.,
            old_x: 0.,
            old_y: 0.,
        };
        p.integrate(&physics, Some((1., -2.)));
        assert_f64_approx!(16., p.x);
        assert_f64_approx!(-2., p.y);
        assert_f64_approx!(10., p.old_x);
        assert_f64_approx!(0., p.old_y);
    }

    #[test]
    fn test_clamp_floor_keeps_part_of_velocity() {
        let mut p = Particle {
            x: 50.,
            y: 110.,
            old_x: 50.,
            old_y: 90.,
        };
        p.clamp(&bounds(), 0.5);
        assert_f64_approx!(100., p.y);
        assert_f64_approx!(10., p.velocity().1);
        assert!(p.is_touching_ground(100.));
    }

    #[test]
    fn test_clamp_walls() {
        let mut left = Particle {
            x: -10.,
            y: 50.,
            old_x: 10.,
            old_y: 50.,
        };
        left.clamp(&bounds(), 0.5);
        assert_f64_approx!(0., left.x);
        assert_f64_approx!(-10., left.velocity().0);

        let mut right = Particle {
            x: 230.,
            y: 50.,
            old_x: 210.,
            old_y: 50.,
        };
        right.clamp(&bounds(), 0.5);
        assert_f64_approx!(200., right.x);
        assert_f64_approx!(10., right.velocity().0);
    }

    #[test]
    fn test_clamp_never_leaves_particle_below_floor() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = bounds();
        for _ in 0..10_000 {
            let mut p = Particle {
                x: rng.random_range(-1e4..1e4),
                y: rng.random_range(-1e4..1e4),
                old_x: rng.random_range(-1e4..1e4),
                old_y: rng.random_range(-1e4..1e4),
            };
            p.clamp(&b, 0.5);
            assert!(p.y <= b.floor_y);
            assert!(p.x >= b.left_x && p.x <= b.right_x);
        }
    }

    #[test]
    fn test_touching_ground() {
        assert!(Particle::at(0., 100.).is_touching_ground(100.));
        assert!(Particle::at(0., 101.).is_touching_ground(100.));
        assert!(!Particle::at(0., 99.9).is_touching_ground(100.));
    }
}
