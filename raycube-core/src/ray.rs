/// Rays and intersection results
use crate::math::{Point3, Vec3};

/// A ray defined by an origin and a (not necessarily unit) direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}

/// Result of a successful ray/solid test
///
/// `t` is measured in units of the ray's own direction, so it only means a
/// distance when the direction has unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub t: f32,
    pub point: Point3,
}

impl Hit {
    pub fn new(ray: &Ray, t: f32) -> Self {
        Self {
            t,
            point: ray.at(t),
        }
    }
}
