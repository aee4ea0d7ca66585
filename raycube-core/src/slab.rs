/// Ray / axis-aligned cube intersection using the slab method
use crate::math::Point3;
use crate::ray::{Hit, Ray};

/// A cube aligned with the world axes, given by its center and half-extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSolid {
    pub center: Point3,
    pub half_extent: f32,
}

impl BoxSolid {
    pub fn new(center: Point3, half_extent: f32) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Build from the full edge length, the way cubes are usually sized
    pub fn with_size(center: Point3, size: f32) -> Self {
        Self::new(center, size / 2.0)
    }

    pub fn min(&self) -> Point3 {
        self.center.map(|c| c - self.half_extent)
    }

    pub fn max(&self) -> Point3 {
        self.center.map(|c| c + self.half_extent)
    }

    /// Intersect the ray with the three slabs and keep the overlap of the
    /// parameter intervals.
    ///
    /// A zero direction component divides to +/- infinity, which leaves the
    /// axis unbounded when the origin lies inside that slab and empties the
    /// interval otherwise. When the origin is inside the box the entry
    /// parameter is negative and the exit parameter is reported instead.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let (min, max) = (self.min(), self.max());
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let t1 = (min[axis] - ray.origin[axis]) / ray.direction[axis];
            let t2 = (max[axis] - ray.origin[axis]) / ray.direction[axis];
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }

        if t_near <= t_far && t_far >= 0.0 {
            let t = if t_near > 0.0 { t_near } else { t_far };
            Some(Hit::new(ray, t))
        } else {
            None
        }
    }
}
