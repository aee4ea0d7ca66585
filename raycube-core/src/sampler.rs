/// Per-cell ray sampling into a hit grid
use crate::ray::{Hit, Ray};
use crate::solid::Solid;

/// Row-major grid of per-cell intersection results for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HitGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<Hit>>,
}

impl HitGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Hit> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[row * self.width + col].as_ref()
    }

    pub fn is_hit(&self, col: usize, row: usize) -> bool {
        self.get(col, row).is_some()
    }

    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Hit>]> {
        self.cells.chunks(self.width.max(1))
    }
}

/// Cast one ray per cell and record whether it hit the solid
pub fn sample_grid<F>(solid: &Solid, width: usize, height: usize, ray_for: F) -> HitGrid
where
    F: Fn(usize, usize) -> Ray,
{
    let mut cells = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            cells.push(solid.intersect(&ray_for(col, row)));
        }
    }
    HitGrid {
        width,
        height,
        cells,
    }
}
