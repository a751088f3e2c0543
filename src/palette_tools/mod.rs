mod palette_card;

pub use palette_card::{generate_palette_card, render_palette_card};
