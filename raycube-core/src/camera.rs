/// Closed-form ray generation, no projection matrix involved
use std::f32::consts::TAU;

use crate::math::{Point3, Vec3};
use crate::ray::Ray;

/// Eye whose viewing direction circles the XY plane once per run
///
/// Every cell of a frame gets the same direction: the image is uniformly
/// hit or uniformly empty, it is not a perspective view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepCamera {
    pub eye: Point3,
    pub frames: u32,
}

impl SweepCamera {
    pub fn new(eye: Point3, frames: u32) -> Self {
        Self { eye, frames }
    }

    /// Sweep angle of a frame: `frame * 2π / frames`
    pub fn angle(&self, frame: u32) -> f32 {
        let delta = TAU / self.frames as f32;
        delta * frame as f32
    }

    pub fn direction(&self, frame: u32) -> Vec3 {
        let (sin, cos) = self.angle(frame).sin_cos();
        Vec3::new(cos, sin, 0.0)
    }

    /// Ray for one output cell. The cell position does not change the ray.
    pub fn ray(&self, frame: u32, _col: usize, _row: usize) -> Ray {
        Ray::new(self.eye, self.direction(frame))
    }
}
