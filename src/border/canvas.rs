use image::{Rgba, RgbaImage};

/// Pixels per block side. Every drawing call addresses whole blocks.
pub const BLOCK_SIZE: u32 = 2;

/// RGBA canvas addressed in 2x2 block coordinates.
#[derive(Clone)]
pub struct BlockCanvas {
    image: RgbaImage,
}

impl BlockCanvas {
    /// Create a canvas filled with `background`. Pixel dimensions should be even.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn block_width(&self) -> i32 {
        (self.image.width() / BLOCK_SIZE) as i32
    }

    pub fn block_height(&self) -> i32 {
        (self.image.height() / BLOCK_SIZE) as i32
    }

    /// Fill the block at (bx, by). Blocks outside the canvas are ignored.
    pub fn put(&mut self, bx: i32, by: i32, color: Rgba<u8>) {
        if bx < 0 || by < 0 || bx >= self.block_width() || by >= self.block_height() {
            return;
        }

        let px = bx as u32 * BLOCK_SIZE;
        let py = by as u32 * BLOCK_SIZE;
        for dy in 0..BLOCK_SIZE {
            for dx in 0..BLOCK_SIZE {
                self.image.put_pixel(px + dx, py + dy, color);
            }
        }
    }

    /// Horizontal run of blocks on row `by`, both ends inclusive.
    pub fn hline(&mut self, bx_start: i32, bx_end: i32, by: i32, color: Rgba<u8>) {
        for bx in bx_start..=bx_end {
            self.put(bx, by, color);
        }
    }

    /// Vertical run of blocks in column `bx`, both ends inclusive.
    pub fn vline(&mut self, bx: i32, by_start: i32, by_end: i32, color: Rgba<u8>) {
        for by in by_start..=by_end {
            self.put(bx, by, color);
        }
    }

    /// Consecutive blocks on row `by` starting at column `bx`, one per color.
    pub fn stamp(&mut self, bx: i32, by: i32, colors: &[Rgba<u8>]) {
        for (offset, &color) in colors.iter().enumerate() {
            self.put(bx + offset as i32, by, color);
        }
    }

    /// Color of the block at (bx, by), read from its top-left pixel.
    pub fn block(&self, bx: i32, by: i32) -> Option<Rgba<u8>> {
        if bx < 0 || by < 0 || bx >= self.block_width() || by >= self.block_height() {
            return None;
        }
        Some(*self.image.get_pixel(bx as u32 * BLOCK_SIZE, by as u32 * BLOCK_SIZE))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
