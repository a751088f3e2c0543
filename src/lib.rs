//! Pixel-art border generator and dev server launcher for the game's asset
//! pipeline.

pub mod batch;
pub mod border;
pub mod launcher;
pub mod palette_tools;
pub mod style;
