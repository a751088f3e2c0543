//! Procedural pixel-art border images.
//!
//! A border is drawn in 2x2 pixel blocks: a beveled orange frame with staircase
//! corners, a recessed inner frame, and a drop shadow toward the lower right.
//! Everything inside the inner frame stays transparent so game content shows
//! through when the image is layered on top.

mod canvas;
mod layout;
mod palette;
mod passes;

pub use canvas::{BlockCanvas, BLOCK_SIZE};
pub use layout::{Layout, RowSpan};
pub use palette::{BorderPalette, BAND_COUNT};
pub use passes::Pass;

use image::RgbaImage;
use std::fmt;
use thiserror::Error;

/// Smallest accepted size, in blocks, on either axis.
pub const MIN_BLOCKS: u32 = 24;

/// Largest accepted size, in blocks, on either axis.
pub const MAX_BLOCKS: u32 = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeLimit {
    Minimum,
    Maximum,
}

impl fmt::Display for SizeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeLimit::Minimum => f.write_str("minimum"),
            SizeLimit::Maximum => f.write_str("maximum"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorderError {
    /// Normalized size falls outside the drawable range. Sizes are in pixels.
    #[error("{limit} size is {limit_px}x{limit_px}px. Got {width}x{height}px.")]
    InvalidDimensions {
        width: u32,
        height: u32,
        limit: SizeLimit,
        limit_px: u32,
    },
}

/// Pixel size of a border after odd sides have been rounded up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Round odd sides up to the next even number, then enforce the size range.
    pub fn normalize(width: u32, height: u32) -> Result<Self, BorderError> {
        let max_px = MAX_BLOCKS * BLOCK_SIZE;
        if width > max_px || height > max_px {
            return Err(BorderError::InvalidDimensions {
                width,
                height,
                limit: SizeLimit::Maximum,
                limit_px: max_px,
            });
        }

        let width = width + width % 2;
        let height = height + height % 2;

        if width / BLOCK_SIZE < MIN_BLOCKS || height / BLOCK_SIZE < MIN_BLOCKS {
            return Err(BorderError::InvalidDimensions {
                width,
                height,
                limit: SizeLimit::Minimum,
                limit_px: MIN_BLOCKS * BLOCK_SIZE,
            });
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn block_width(&self) -> i32 {
        (self.width / BLOCK_SIZE) as i32
    }

    pub fn block_height(&self) -> i32 {
        (self.height / BLOCK_SIZE) as i32
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.block_width(), self.block_height())
    }
}

/// File name used when the caller does not pick one. Uses the requested size.
pub fn default_filename(width: u32, height: u32) -> String {
    format!("border_{}x{}.png", width, height)
}

/// Render the complete border at the requested pixel size.
pub fn generate_border(width: u32, height: u32, palette: &BorderPalette) -> Result<RgbaImage, BorderError> {
    let dims = Dimensions::normalize(width, height)?;
    Ok(render_passes(&dims, palette, &Pass::ORDER).into_image())
}

/// Run the given passes, in the order given, onto a fresh transparent canvas.
pub fn render_passes(dims: &Dimensions, palette: &BorderPalette, passes: &[Pass]) -> BlockCanvas {
    let layout = dims.layout();
    let mut canvas = BlockCanvas::new(dims.width(), dims.height(), palette.transparent);

    for pass in passes {
        pass.draw(&mut canvas, &layout, palette);
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_sides_round_up() {
        let dims = Dimensions::normalize(601, 401).unwrap();
        assert_eq!((dims.width(), dims.height()), (602, 402));
        assert_eq!((dims.block_width(), dims.block_height()), (301, 201));
    }

    #[test]
    fn rounding_happens_before_minimum_check() {
        let dims = Dimensions::normalize(47, 47).unwrap();
        assert_eq!((dims.width(), dims.height()), (48, 48));
    }

    #[test]
    fn below_minimum_is_rejected() {
        let err = Dimensions::normalize(46, 46).unwrap_err();
        assert_eq!(
            err,
            BorderError::InvalidDimensions {
                width: 46,
                height: 46,
                limit: SizeLimit::Minimum,
                limit_px: 48,
            }
        );
        assert_eq!(err.to_string(), "minimum size is 48x48px. Got 46x46px.");
    }

    #[test]
    fn one_short_side_is_enough_to_fail() {
        assert!(Dimensions::normalize(600, 45).is_err());
        assert!(Dimensions::normalize(45, 600).is_err());
    }

    #[test]
    fn oversized_is_rejected_without_overflow() {
        let err = Dimensions::normalize(u32::MAX, 100).unwrap_err();
        assert!(matches!(
            err,
            BorderError::InvalidDimensions { limit: SizeLimit::Maximum, .. }
        ));
        assert!(Dimensions::normalize(16384, 16384).is_ok());
        assert!(Dimensions::normalize(16385, 48).is_err());
    }

    #[test]
    fn default_filename_uses_requested_size() {
        assert_eq!(default_filename(601, 401), "border_601x401.png");
    }
}
