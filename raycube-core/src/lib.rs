/// RAYCUBE Core Library - Ray casting against a cube
///
/// This library provides the stateless core of the renderer: vector algebra,
/// the slab and Möller–Trumbore intersection tests, the cube models and the
/// per-frame sampling pipeline. Console output lives in `raycube-terminal`.

pub mod math;
pub mod ray;
pub mod slab;
pub mod triangle;
pub mod transform;
pub mod geometry;
pub mod solid;
pub mod camera;
pub mod sampler;
pub mod scenario;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use math::{Point3, Vec3};
pub use ray::{Hit, Ray};
pub use slab::BoxSolid;
pub use triangle::Triangle;
pub use geometry::{CubeMesh, FaceKind};
pub use transform::{SpinState, Transform};
pub use solid::Solid;
pub use camera::SweepCamera;
pub use sampler::HitGrid;
pub use scenario::{Frame, FrameState, Mode, Sample, Scenario};
pub use config::{SpinConfig, SweepConfig};
pub use error::ConfigError;
