//! Vector algebra shared by every intersection routine
//!
//! Points and vectors are `nalgebra` types fixed to `f32`. Addition,
//! subtraction and scaling come from the operator impls, dot and cross
//! products from `Vector3::dot` / `Vector3::cross`.

/// A position in world space
pub type Point3 = nalgebra::Point3<f32>;

/// A direction or displacement in world space
pub type Vec3 = nalgebra::Vector3<f32>;

/// Tolerance for parallelism and forward-hit checks
pub const EPSILON: f32 = 1e-5;

/// Component-wise closeness check used when comparing geometry
pub fn approx_eq(a: &Point3, b: &Point3, tolerance: f32) -> bool {
    (a - b).iter().all(|c| c.abs() <= tolerance)
}
