/// The rendered solid, as either an axis-aligned box or a triangle mesh
use crate::geometry::CubeMesh;
use crate::ray::{Hit, Ray};
use crate::slab::BoxSolid;

/// Two interchangeable models of the same cube
///
/// `Box` is tested with the slab method and never moves. `Mesh` is tested
/// triangle by triangle and spins about Y.
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    Box(BoxSolid),
    Mesh(CubeMesh),
}

impl Solid {
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Solid::Box(cube) => cube.intersect(ray),
            Solid::Mesh(mesh) => mesh.intersect(ray).map(|(_, hit)| hit),
        }
    }

    /// Apply one frame's rotation increment
    pub fn rotate_y(&mut self, angle: f32) {
        match self {
            // Axis-aligned by definition, motion comes from the rays
            Solid::Box(_) => {}
            Solid::Mesh(mesh) => mesh.rotate_y(angle),
        }
    }
}

impl From<BoxSolid> for Solid {
    fn from(cube: BoxSolid) -> Self {
        Solid::Box(cube)
    }
}

impl From<CubeMesh> for Solid {
    fn from(mesh: CubeMesh) -> Self {
        Solid::Mesh(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vec3};
    use approx::assert_relative_eq;

    #[test]
    fn test_box_and_mesh_agree_head_on() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 0.0, 1.0));
        let as_box: Solid = BoxSolid::with_size(Point3::origin(), 1.0).into();
        let as_mesh: Solid = CubeMesh::cube(1.0).into();

        let a = as_box.intersect(&ray).expect("box hit");
        let b = as_mesh.intersect(&ray).expect("mesh hit");
        assert_relative_eq!(a.t, 2.5, epsilon = 1e-5);
        assert_relative_eq!(b.t, 2.5, epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_ignored_for_box() {
        let cube = BoxSolid::new(Point3::new(1.0, 2.0, 3.0), 2.0);
        let mut solid = Solid::Box(cube);
        solid.rotate_y(1.0);
        assert_eq!(solid, Solid::Box(cube));
    }

    #[test]
    fn test_rotation_moves_mesh() {
        let mut solid = Solid::Mesh(CubeMesh::cube(1.0));
        solid.rotate_y(0.3);
        assert_ne!(solid, Solid::Mesh(CubeMesh::cube(1.0)));
    }
}
