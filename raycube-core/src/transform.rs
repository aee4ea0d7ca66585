/// Rigid rotation about the Y axis and the per-frame spin state
use nalgebra::Rotation3;
use std::f32::consts::TAU;

use crate::math::Vec3;

/// Steps of `speed` radians needed to turn at least once, `None` if the
/// count is not a finite positive `u32`
pub fn steps_per_revolution(speed: f32) -> Option<u32> {
    let steps = (TAU / speed).ceil();
    if steps.is_finite() && steps >= 1.0 && steps < u32::MAX as f32 {
        Some(steps as u32)
    } else {
        None
    }
}

/// Rotation about Y advanced by a fixed increment per frame
///
/// The bound is an integer step count, so it is reached even when `speed`
/// is too small to change an accumulated `f32` angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinState {
    /// Increment applied by every [`SpinState::step`] (radians)
    pub speed: f32,
    steps: u32,
    taken: u32,
}

impl SpinState {
    pub fn new(speed: f32, steps: u32) -> Self {
        Self {
            speed,
            steps,
            taken: 0,
        }
    }

    /// Steps in one full run
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Total angle applied so far (radians)
    pub fn angle(&self) -> f32 {
        self.taken as f32 * self.speed
    }

    /// True once a full revolution has been applied
    pub fn is_complete(&self) -> bool {
        self.taken >= self.steps
    }

    /// Advance by one increment and return the increment to apply
    pub fn step(&mut self) -> f32 {
        self.taken += 1;
        self.speed
    }
}

/// Rotation helpers
pub struct Transform;

impl Transform {
    /// Rotation about +Y by `angle` radians:
    /// `x' = x cos θ + z sin θ`, `z' = -x sin θ + z cos θ`, `y` unchanged.
    pub fn rotation_y(angle: f32) -> Rotation3<f32> {
        Rotation3::new(Vec3::new(0.0, angle, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn rotate_y_closed_form(point: &Point3, angle: f32) -> Point3 {
        let (sin, cos) = angle.sin_cos();
        Point3::new(
            point.x * cos + point.z * sin,
            point.y,
            -point.x * sin + point.z * cos,
        )
    }

    #[test]
    fn test_spin_state() {
        let steps = steps_per_revolution(0.5).expect("fits a u32");
        // 12 * 0.5 = 6.0 < TAU, 13 * 0.5 = 6.5 >= TAU
        assert_eq!(steps, 13);

        let mut state = SpinState::new(0.5, steps);
        assert_eq!(state.angle(), 0.0);
        assert!(!state.is_complete());

        let delta = state.step();
        assert_relative_eq!(delta, 0.5);
        assert_relative_eq!(state.angle(), 0.5);

        let mut taken = 1;
        while !state.is_complete() {
            state.step();
            taken += 1;
        }
        assert_eq!(taken, state.steps());
        assert_relative_eq!(state.angle(), 6.5);
    }

    #[test]
    fn test_tiny_speed_still_completes() {
        // 1e-7 is below half an f32 ulp once an accumulated angle passes 2.0
        let speed = 1e-7;
        let steps = steps_per_revolution(speed).expect("fits a u32");
        let mut state = SpinState::new(speed, steps);

        let mut taken: u32 = 0;
        while !state.is_complete() {
            state.step();
            taken += 1;
        }
        assert_eq!(taken, steps);
        assert!(state.angle() >= TAU);
    }

    #[test]
    fn test_steps_per_revolution_bounds() {
        assert_eq!(steps_per_revolution(1.0), Some(7));
        assert_eq!(steps_per_revolution(10.0), Some(1));
        assert_eq!(steps_per_revolution(1e-10), None);
        assert_eq!(steps_per_revolution(0.0), None);
        assert_eq!(steps_per_revolution(f32::NAN), None);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = Point3::new(1.0, 2.0, 0.0);
        let r = Transform::rotation_y(FRAC_PI_2) * p;
        assert_relative_eq!(r, Point3::new(0.0, 2.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_matrix_matches_closed_form() {
        let p = Point3::new(0.3, -0.7, 1.2);
        for angle in [0.0, 0.1, 1.0, 2.5, -0.8] {
            let expected = rotate_y_closed_form(&p, angle);
            let rotated = Transform::rotation_y(angle) * p;
            assert_relative_eq!(rotated, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = Transform::rotation_y(0.0);
        assert_relative_eq!(rotation, Rotation3::identity());
    }
}
