/// ASCII rasterizer for terminal rendering
use crossterm::{style::Print, QueueableCommand};
use raycube_core::HitGrid;
use std::io::Write;

/// Character drawn where the ray hit the solid
pub const HIT_SYMBOL: char = '#';
/// Character drawn where it did not
pub const MISS_SYMBOL: char = ' ';

/// Converts per-cell hits to a character buffer and writes it out
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![MISS_SYMBOL; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(MISS_SYMBOL);
    }

    /// Map each cell to its symbol. The buffer is resized if the grid differs.
    pub fn rasterize(&mut self, grid: &HitGrid) {
        if grid.width() != self.width || grid.height() != self.height {
            *self = Self::new(grid.width(), grid.height());
        }

        for (row, cells) in grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                self.char_buffer[row * self.width + col] = if cell.is_some() {
                    HIT_SYMBOL
                } else {
                    MISS_SYMBOL
                };
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            let line: String = self.char_buffer[y * self.width..(y + 1) * self.width]
                .iter()
                .collect();
            writer.queue(Print(line))?;
            writer.queue(Print('\n'))?;
        }
        Ok(())
    }
}
