/// Ray / triangle intersection (Möller–Trumbore)
use crate::math::{Point3, Vec3, EPSILON};
use crate::ray::{Hit, Ray};

/// A triangle face defined by three vertex positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3; 3],
}

impl Triangle {
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's winding
    pub fn normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(&(v2 - v0)).normalize()
    }

    pub fn centroid(&self) -> Point3 {
        let [v0, v1, v2] = self.vertices;
        Point3::from((v0.coords + v1.coords + v2.coords) / 3.0)
    }

    /// Test the ray against the triangle without building its plane.
    ///
    /// Hits are accepted from either side, so the winding order only
    /// matters for [`Triangle::normal`]. Only intersections strictly in
    /// front of the origin (`t > EPSILON`) count.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let [v0, v1, v2] = self.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = ray.direction.cross(&edge2);
        let a = edge1.dot(&h);

        // Ray is parallel to the triangle plane
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin - v0;
        let u = f * s.dot(&h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = f * ray.direction.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(&q);
        if t > EPSILON {
            Some(Hit::new(ray, t))
        } else {
            // Line crosses the triangle behind the origin
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    fn ray_at(x: f32, y: f32) -> Ray {
        Ray::new(Point3::new(x, y, -1.0), Vec3::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn test_normal_and_centroid() {
        let tri = right_triangle();
        assert_relative_eq!(tri.normal(), Vec3::z());
        assert_relative_eq!(tri.centroid(), Point3::new(1.0 / 3.0, 1.0 / 3.0, 0.0));
    }

    #[test]
    fn test_hit_through_centroid() {
        let tri = right_triangle();
        let normal = tri.normal();

        let ray = Ray::new(tri.centroid() + normal * 0.5, -normal);
        let hit = tri.intersect(&ray).expect("ray through centroid should hit");
        assert!(hit.t > 0.0 && hit.t < 1.0);
        assert_relative_eq!(hit.t, 0.5, epsilon = 1e-6);
        assert_relative_eq!(hit.point, tri.centroid(), epsilon = 1e-6);

        // Back side is accepted too
        let ray = Ray::new(tri.centroid() - normal * 0.5, normal);
        assert!(tri.intersect(&ray).is_some());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let tri = right_triangle();
        let direction = Vec3::new(1.0, 1.0, 0.0);
        for origin in [
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(0.2, 0.2, 0.0),
            Point3::new(-1.0, 0.1, 0.5),
            Point3::new(-5.0, -3.0, -2.0),
        ] {
            assert!(tri.intersect(&Ray::new(origin, direction)).is_none());
        }
    }

    #[test]
    fn test_rays_outside_each_edge() {
        let tri = right_triangle();
        assert!(tri.intersect(&ray_at(0.25, 0.25)).is_some());

        // u < 0
        assert!(tri.intersect(&ray_at(-0.01, 0.3)).is_none());
        // v < 0
        assert!(tri.intersect(&ray_at(0.3, -0.01)).is_none());
        // u + v > 1
        assert!(tri.intersect(&ray_at(0.51, 0.51)).is_none());
        // u > 1
        assert!(tri.intersect(&ray_at(1.01, 0.0)).is_none());
    }

    #[test]
    fn test_behind_origin_misses() {
        let tri = right_triangle();
        let ray = Ray::new(Point3::new(0.25, 0.25, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_winding_does_not_matter() {
        let tri = right_triangle();
        let [v0, v1, v2] = tri.vertices;
        let flipped = Triangle::new(v0, v2, v1);

        let a = tri.intersect(&ray_at(0.2, 0.3)).expect("hit");
        let b = flipped.intersect(&ray_at(0.2, 0.3)).expect("hit");
        assert_relative_eq!(a.t, b.t, epsilon = 1e-6);
        assert_relative_eq!(flipped.normal(), -tri.normal());
    }
}
