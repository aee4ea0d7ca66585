/// Cube mesh: 8 shared vertices, 6 quad faces, 12 triangles
use crate::math::Point3;
use crate::ray::{Hit, Ray};
use crate::transform::Transform;
use crate::triangle::Triangle;

/// Named faces of the cube, in the order they are tested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    /// z = -h, facing a viewer on the negative Z axis
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

/// A quad face as indices into the cube's vertex array
///
/// Indices run counter-clockwise when seen from outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub kind: FaceKind,
    pub indices: [usize; 4],
}

impl Face {
    const fn new(kind: FaceKind, indices: [usize; 4]) -> Self {
        Self { kind, indices }
    }

    /// Split the quad `[a, b, c, d]` into `(a, b, c)` and `(a, c, d)`
    pub fn triangles(&self, vertices: &[Point3; 8]) -> [Triangle; 2] {
        let [a, b, c, d] = self.indices.map(|i| vertices[i]);
        [Triangle::new(a, b, c), Triangle::new(a, c, d)]
    }
}

//     7-------6
//    /|      /|
//   3-------2 |     y
//   | 4-----|-5     |  z
//   |/      |/      | /
//   0-------1       +---- x
const FACES: [Face; 6] = [
    Face::new(FaceKind::Front, [0, 3, 2, 1]),
    Face::new(FaceKind::Back, [4, 5, 6, 7]),
    Face::new(FaceKind::Left, [0, 4, 7, 3]),
    Face::new(FaceKind::Right, [1, 2, 6, 5]),
    Face::new(FaceKind::Top, [3, 7, 6, 2]),
    Face::new(FaceKind::Bottom, [0, 1, 5, 4]),
];

/// Cube as an explicit mesh, rotated in place frame after frame
#[derive(Debug, Clone, PartialEq)]
pub struct CubeMesh {
    pub vertices: [Point3; 8],
}

impl CubeMesh {
    /// Axis-aligned cube of edge `size` centred on the origin
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        Self {
            vertices: [
                Point3::new(-h, -h, -h),
                Point3::new(h, -h, -h),
                Point3::new(h, h, -h),
                Point3::new(-h, h, -h),
                Point3::new(-h, -h, h),
                Point3::new(h, -h, h),
                Point3::new(h, h, h),
                Point3::new(-h, h, h),
            ],
        }
    }

    pub fn faces(&self) -> &'static [Face; 6] {
        &FACES
    }

    /// All 12 triangles in test order, tagged with their face
    pub fn triangles(&self) -> impl Iterator<Item = (FaceKind, Triangle)> + '_ {
        FACES.iter().flat_map(move |face| {
            face.triangles(&self.vertices)
                .into_iter()
                .map(move |tri| (face.kind, tri))
        })
    }

    /// Rotate every vertex about Y by `angle`, composing with earlier turns
    pub fn rotate_y(&mut self, angle: f32) {
        let rotation = Transform::rotation_y(angle);
        for vertex in &mut self.vertices {
            *vertex = rotation * *vertex;
        }
    }

    /// Report the first triangle the ray hits.
    ///
    /// Faces are tried in fixed order and the search stops at the first
    /// hit, so a farther face earlier in the list wins over a nearer one.
    pub fn intersect(&self, ray: &Ray) -> Option<(FaceKind, Hit)> {
        self.triangles()
            .find_map(|(kind, tri)| tri.intersect(ray).map(|hit| (kind, hit)))
    }
}
