use super::canvas::BLOCK_SIZE;

/// Inclusive run of blocks on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub row: i32,
    pub left: i32,
    pub right: i32,
}

impl RowSpan {
    /// Width in blocks
    pub fn len(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn contains(&self, bx: i32, by: i32) -> bool {
        by == self.row && bx >= self.left && bx <= self.right
    }

    /// Pixel-space (x, y, width) of the span's top pixel row.
    pub fn to_pixels(&self) -> (u32, u32, u32) {
        let b = BLOCK_SIZE as i32;
        ((self.left * b) as u32, (self.row * b) as u32, (self.len() * b) as u32)
    }
}

/// Named block offsets every pass draws against.
///
/// Horizontal offsets are mirrored left/right around the block width; vertical
/// offsets are mirrored top/bottom around the block height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub block_width: i32,
    pub block_height: i32,

    /// Outer outline columns
    pub outer_left: i32,
    pub outer_right: i32,

    /// Band-4 fill columns
    pub fill_left: i32,
    pub fill_right: i32,

    /// Outer outline bar rows
    pub top_bar: i32,
    pub bottom_bar: i32,

    /// Band-4 rows (the full-width edge rows)
    pub top_fill: i32,
    pub bottom_fill: i32,

    /// Inner frame outline columns
    pub inner_left: i32,
    pub inner_right: i32,

    /// Inner outline bar extent
    pub inner_bar_left: i32,
    pub inner_bar_right: i32,
}

impl Layout {
    pub fn new(block_width: i32, block_height: i32) -> Self {
        Self {
            block_width,
            block_height,
            outer_left: 2,
            outer_right: block_width - 3,
            fill_left: 6,
            fill_right: block_width - 7,
            top_bar: 2,
            bottom_bar: block_height - 3,
            top_fill: 6,
            bottom_fill: block_height - 7,
            inner_left: 7,
            inner_right: block_width - 8,
            inner_bar_left: 11,
            inner_bar_right: block_width - 12,
        }
    }

    /// Blocks no pass ever writes: the see-through window inside the inner
    /// frame, one span per row, top to bottom. The inner bars and the shaded
    /// recess close off the rows above and below this range.
    pub fn interior(&self) -> Vec<RowSpan> {
        ((self.top_fill + 4)..=(self.bottom_fill - 2))
            .filter_map(|row| self.interior_row(row))
            .collect()
    }

    fn interior_row(&self, by: i32) -> Option<RowSpan> {
        let (top, bottom) = (self.top_fill, self.bottom_fill);
        let (il, ir) = (self.inner_left, self.inner_right);

        // Innermost column written from each side. Corner rows of the top and
        // bottom inset coincide at minimum height, so every matching row applies.
        let mut left_edge = i32::MIN;
        let mut right_edge = i32::MAX;
        let mut reach = |left: i32, right: i32| {
            left_edge = left_edge.max(left);
            right_edge = right_edge.min(right);
        };

        if by == top + 4 {
            reach(il + 5, ir - 3);
        }
        if by == top + 5 {
            reach(il + 4, ir - 2);
        }
        if by == top + 6 {
            reach(il + 3, ir);
        }
        if by >= top + 7 && by < bottom - 5 {
            reach(il + 2, ir);
        }
        if by == bottom - 5 {
            reach(il + 2, ir - 2);
        }
        if by == bottom - 4 {
            reach(il + 3, ir - 3);
        }
        if by == bottom - 3 || by == bottom - 2 {
            reach(il + 4, ir - 4);
        }

        let span = RowSpan {
            row: by,
            left: left_edge + 1,
            right: right_edge - 1,
        };
        (span.len() > 0).then_some(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_mirror_across_block_width() {
        let layout = Layout::new(300, 200);
        assert_eq!(layout.outer_right, 297);
        assert_eq!(layout.fill_right, 293);
        assert_eq!(layout.inner_right, 292);
        assert_eq!(layout.inner_bar_right, 288);
        assert_eq!(layout.bottom_bar, 197);
        assert_eq!(layout.bottom_fill, 193);
    }

    #[test]
    fn interior_at_minimum_size_is_a_small_pocket() {
        let layout = Layout::new(24, 24);
        let blocks: Vec<(i32, i32)> = layout
            .interior()
            .iter()
            .flat_map(|span| (span.left..=span.right).map(move |bx| (bx, span.row)))
            .collect();
        assert_eq!(
            blocks,
            vec![(12, 11), (13, 11), (11, 12), (12, 12), (13, 12), (11, 13), (12, 13)]
        );
    }

    #[test]
    fn interior_wall_rows_run_between_inner_walls() {
        let layout = Layout::new(300, 200);
        let interior = layout.interior();

        let first = interior[0];
        assert_eq!((first.row, first.left, first.right), (10, 13, 288));

        let wall = interior.iter().find(|span| span.row == 100).unwrap();
        assert_eq!((wall.left, wall.right), (10, 291));
        assert!(wall.contains(150, 100));
        assert_eq!(wall.to_pixels(), (20, 200, 564));

        let last = interior.last().unwrap();
        assert_eq!((last.row, last.left, last.right), (191, 12, 287));
    }
}
