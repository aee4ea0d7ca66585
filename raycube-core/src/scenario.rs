/// Frame-by-frame driver shared by the sweep and spin runs
use log::{debug, info, trace};

use crate::camera::SweepCamera;
use crate::config::{SpinConfig, SweepConfig};
use crate::error::Result;
use crate::geometry::CubeMesh;
use crate::ray::{Hit, Ray};
use crate::sampler::{sample_grid, HitGrid};
use crate::slab::BoxSolid;
use crate::solid::Solid;
use crate::transform::SpinState;

/// Which run a scenario performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sweep,
    Spin,
}

/// Loop state carried from one frame to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub index: u32,
    /// Sweep angle of the camera, or cumulative rotation of the solid
    pub angle: f32,
}

/// What was sampled in one frame
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// One result per output cell
    Grid(HitGrid),
    /// The single fixed ray
    Single(Option<Hit>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub state: FrameState,
    pub sample: Sample,
}

/// Rays and loop bound of a run
#[derive(Debug, Clone, Copy, PartialEq)]
enum Driver {
    /// Grid of rays per frame, `camera.frames` frames
    Sweep(SweepCamera),
    /// One fixed ray per frame, one revolution of the solid
    Spin { ray: Ray, spin: SpinState },
}

/// A solid, the rays aimed at it and the loop bound
///
/// Iterating yields one [`Frame`] per step until the bound is reached: a
/// fixed number of frames for the sweep, one full turn for the spin.
#[derive(Debug, Clone)]
pub struct Scenario {
    solid: Solid,
    driver: Driver,
    width: usize,
    height: usize,
    next_index: u32,
}

impl Scenario {
    /// Stationary box, camera direction circling once over `frames`
    pub fn sweep(config: &SweepConfig) -> Result<Self> {
        config.validate()?;
        let cube = BoxSolid::with_size(config.center(), config.cube_size);
        let camera = SweepCamera::new(config.eye(), config.frames);
        info!(
            "sweep: {}x{} grid, {} frames, cube {:?} half-extent {}, eye {:?}",
            config.width, config.height, config.frames, cube.center, cube.half_extent, camera.eye
        );
        Ok(Self {
            solid: Solid::Box(cube),
            driver: Driver::Sweep(camera),
            width: config.width,
            height: config.height,
            next_index: 0,
        })
    }

    /// Mesh cube turning about Y in front of a fixed ray
    pub fn spin(config: &SpinConfig) -> Result<Self> {
        config.validate()?;
        let frames = config.frame_count()?;
        let ray = Ray::new(config.ray_origin, config.ray_direction);
        info!(
            "spin: cube size {}, ray {:?} along {:?}, {} rad per frame, {} frames",
            config.cube_size, ray.origin, ray.direction, config.rotation_speed, frames
        );
        Ok(Self {
            solid: Solid::Mesh(CubeMesh::cube(config.cube_size)),
            driver: Driver::Spin {
                ray,
                spin: SpinState::new(config.rotation_speed, frames),
            },
            width: 1,
            height: 1,
            next_index: 0,
        })
    }

    pub fn mode(&self) -> Mode {
        match self.driver {
            Driver::Sweep(_) => Mode::Sweep,
            Driver::Spin { .. } => Mode::Spin,
        }
    }

    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    /// Number of frames a fresh scenario will produce
    pub fn total_frames(&self) -> u32 {
        match &self.driver {
            Driver::Sweep(camera) => camera.frames,
            Driver::Spin { spin, .. } => spin.steps(),
        }
    }

    /// Move the loop state forward and update the solid for the new frame.
    /// Returns `None` once the bound is reached.
    fn advance(&mut self) -> Option<FrameState> {
        let index = self.next_index;
        let angle = match &mut self.driver {
            Driver::Sweep(camera) => {
                if index >= camera.frames {
                    return None;
                }
                camera.angle(index)
            }
            Driver::Spin { spin, .. } => {
                if spin.is_complete() {
                    return None;
                }
                let delta = spin.step();
                self.solid.rotate_y(delta);
                spin.angle()
            }
        };
        self.next_index += 1;
        Some(FrameState { index, angle })
    }

    fn sample(&self, state: &FrameState) -> Sample {
        match &self.driver {
            Driver::Sweep(camera) => Sample::Grid(sample_grid(
                &self.solid,
                self.width,
                self.height,
                |col, row| camera.ray(state.index, col, row),
            )),
            Driver::Spin { ray, .. } => Sample::Single(self.solid.intersect(ray)),
        }
    }
}

impl Iterator for Scenario {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let state = self.advance()?;
        let sample = self.sample(&state);

        match &sample {
            Sample::Grid(grid) => debug!(
                "frame {}: angle {:.4}, {} of {} cells hit",
                state.index,
                state.angle,
                grid.hit_count(),
                grid.width() * grid.height()
            ),
            Sample::Single(hit) => {
                debug!("frame {}: rotation {:.4}", state.index, state.angle);
                if let Some(hit) = hit {
                    trace!("ray hit at t = {} ({:?})", hit.t, hit.point);
                }
            }
        }

        Some(Frame { state, sample })
    }
}
