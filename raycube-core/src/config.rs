/// Run parameters for the two scenarios
use std::f32::consts::PI;

use crate::error::{ConfigError, Result};
use crate::math::{Point3, Vec3};
use crate::transform::steps_per_revolution;

/// Default console grid
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

/// Sweep: a fixed box viewed along a direction that circles once per run
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub width: usize,
    pub height: usize,
    pub frames: u32,
    /// Edge length of the cube
    pub cube_size: f32,
    /// How far the eye sits behind the cube along -Z
    pub eye_distance: f32,
}

impl SweepConfig {
    /// Cube center, placed at the middle of the console grid
    pub fn center(&self) -> Point3 {
        Point3::new((self.width / 2) as f32, (self.height / 2) as f32, 0.0)
    }

    pub fn eye(&self) -> Point3 {
        self.center() - Vec3::new(0.0, 0.0, self.eye_distance)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.frames == 0 {
            return Err(ConfigError::NoFrames);
        }
        check_size(self.cube_size)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frames: 100,
            cube_size: 10.0,
            eye_distance: 100.0,
        }
    }
}

/// Spin: a fixed ray against a mesh cube turning about Y
#[derive(Debug, Clone, PartialEq)]
pub struct SpinConfig {
    pub cube_size: f32,
    pub ray_origin: Point3,
    pub ray_direction: Vec3,
    /// Radians added per frame
    pub rotation_speed: f32,
}

impl SpinConfig {
    pub fn validate(&self) -> Result<()> {
        check_size(self.cube_size)?;
        self.frame_count()?;
        if self.ray_direction.norm_squared() == 0.0 {
            return Err(ConfigError::ZeroDirection);
        }
        Ok(())
    }

    /// Frames in one revolution: `ceil(2π / rotation_speed)`
    pub fn frame_count(&self) -> Result<u32> {
        let speed = self.rotation_speed;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        steps_per_revolution(speed).ok_or(ConfigError::SpeedTooSmall(speed))
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            cube_size: 1.0,
            ray_origin: Point3::new(0.0, 0.0, -3.0),
            ray_direction: Vec3::new(0.0, 0.0, 1.0),
            rotation_speed: PI / 60.0,
        }
    }
}

fn check_size(size: f32) -> Result<()> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize(size))
    }
}
