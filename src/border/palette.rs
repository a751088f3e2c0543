use image::Rgba;

/// Number of shades in the band gradient.
pub const BAND_COUNT: usize = 7;

/// Colors used by the border passes. Bands are stored darkest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderPalette {
    pub transparent: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub shadow: Rgba<u8>,
    pub bands: [Rgba<u8>; BAND_COUNT],
}

impl BorderPalette {
    /// Band `n`, 1 = darkest, 7 = lightest. Out-of-range values clamp.
    pub fn band(&self, n: usize) -> Rgba<u8> {
        self.bands[n.clamp(1, BAND_COUNT) - 1]
    }

    /// Every entry with a display label, in card order.
    pub fn entries(&self) -> Vec<(String, Rgba<u8>)> {
        let mut entries = vec![
            ("transparent".to_string(), self.transparent),
            ("outline".to_string(), self.outline),
            ("shadow".to_string(), self.shadow),
        ];
        for n in 1..=BAND_COUNT {
            entries.push((format!("band {}", n), self.band(n)));
        }
        entries
    }
}

impl Default for BorderPalette {
    fn default() -> Self {
        Self {
            transparent: Rgba([0, 0, 0, 0]),
            outline: Rgba([0, 0, 0, 255]),
            shadow: Rgba([127, 127, 127, 100]),
            bands: [
                Rgba([255, 135, 15, 255]),  // 1: darkest
                Rgba([255, 155, 40, 255]),  // 2
                Rgba([255, 175, 65, 255]),  // 3
                Rgba([255, 195, 90, 255]),  // 4
                Rgba([255, 215, 115, 255]), // 5
                Rgba([255, 235, 140, 255]), // 6
                Rgba([255, 255, 165, 255]), // 7: lightest
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_one_indexed() {
        let palette = BorderPalette::default();
        assert_eq!(palette.band(1), Rgba([255, 135, 15, 255]));
        assert_eq!(palette.band(7), Rgba([255, 255, 165, 255]));
    }

    #[test]
    fn band_index_clamps() {
        let palette = BorderPalette::default();
        assert_eq!(palette.band(0), palette.band(1));
        assert_eq!(palette.band(9), palette.band(7));
    }

    #[test]
    fn entries_cover_whole_palette() {
        let entries = BorderPalette::default().entries();
        assert_eq!(entries.len(), 3 + BAND_COUNT);
        assert_eq!(entries[0].0, "transparent");
        assert_eq!(entries[9].0, "band 7");
    }
}
