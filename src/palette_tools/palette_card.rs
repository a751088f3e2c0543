use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb, RgbImage, Rgba};
use std::path::Path;

use crate::border::{self, BorderPalette, MIN_BLOCKS, BLOCK_SIZE};
use crate::style::Style;

/// Size of each color cell
const CELL_SIZE: u32 = 40;
const PADDING: u32 = 10;
/// Side of one checkerboard square behind translucent colors
const CHECKER: u32 = 8;
/// Upscale factor for the minimum-size border preview
const PREVIEW_SCALE: u32 = 4;

/// Render the swatch card: one cell per palette entry, then a border preview.
pub fn render_palette_card(palette: &BorderPalette) -> Result<RgbImage> {
    let entries = palette.entries();

    let min_px = MIN_BLOCKS * BLOCK_SIZE;
    let preview_size = min_px * PREVIEW_SCALE;

    let swatch_width = entries.len() as u32 * CELL_SIZE;
    let total_width = PADDING + swatch_width + PADDING + preview_size + PADDING;
    let total_height = PADDING * 2 + CELL_SIZE.max(preview_size);

    let mut img = ImageBuffer::from_pixel(total_width, total_height, Rgb([32u8, 32u8, 32u8]));

    for (i, (_, color)) in entries.iter().enumerate() {
        let x = PADDING + i as u32 * CELL_SIZE;
        let y = PADDING;

        // Fill cell over the checkerboard so alpha shows
        for py in 0..CELL_SIZE {
            for px in 0..CELL_SIZE {
                img.put_pixel(x + px, y + py, blend_over_checker(*color, px, py));
            }
        }

        // Draw cell border (thin gray line)
        let border_color = Rgb([64u8, 64u8, 64u8]);
        for px in 0..CELL_SIZE {
            img.put_pixel(x + px, y, border_color);
            img.put_pixel(x + px, y + CELL_SIZE - 1, border_color);
        }
        for py in 0..CELL_SIZE {
            img.put_pixel(x, y + py, border_color);
            img.put_pixel(x + CELL_SIZE - 1, y + py, border_color);
        }
    }

    let preview = border::generate_border(min_px, min_px, palette)
        .context("Failed to render border preview")?;
    let preview = imageops::resize(&preview, preview_size, preview_size, FilterType::Nearest);

    let preview_x = PADDING + swatch_width + PADDING;
    for (px, py, pixel) in preview.enumerate_pixels() {
        img.put_pixel(preview_x + px, PADDING + py, blend_over_checker(*pixel, px, py));
    }

    Ok(img)
}

/// Write the card for `style` to `output` and list the colors on stdout.
pub fn generate_palette_card(style: &Style, output: &Path) -> Result<()> {
    let palette = style.palette()?;
    let img = render_palette_card(&palette)?;

    img.save(output)
        .with_context(|| format!("Failed to write palette card: {}", output.display()))?;

    println!("Palette card image created: {}", output.display());
    println!("  Style: {}", style.name);
    for (label, color) in palette.entries() {
        let [r, g, b, a] = color.0;
        println!("  {:<12} = RGBA({}, {}, {}, {})", label, r, g, b, a);
    }

    Ok(())
}

fn blend_over_checker(color: Rgba<u8>, x: u32, y: u32) -> Rgb<u8> {
    let light = (x / CHECKER + y / CHECKER) % 2 == 0;
    let base: u8 = if light { 204 } else { 153 };

    let [r, g, b, a] = color.0;
    let alpha = a as u32;
    let mix = |c: u8| ((c as u32 * alpha + base as u32 * (255 - alpha)) / 255) as u8;
    Rgb([mix(r), mix(g), mix(b)])
}
