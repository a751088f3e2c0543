use super::canvas::BlockCanvas;
use super::layout::Layout;
use super::palette::BorderPalette;

/// One drawing step of the border. Passes run in [`Pass::ORDER`]; a later pass
/// replaces whatever an earlier one wrote at the same block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    TopStaircase,
    BottomStaircase,
    LeftWall,
    RightWall,
    InnerTopCorners,
    InnerWalls,
    InnerBottomCorners,
    DropShadow,
}

impl Pass {
    pub const ORDER: [Pass; 8] = [
        Pass::TopStaircase,
        Pass::BottomStaircase,
        Pass::LeftWall,
        Pass::RightWall,
        Pass::InnerTopCorners,
        Pass::InnerWalls,
        Pass::InnerBottomCorners,
        Pass::DropShadow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::TopStaircase => "top staircase",
            Pass::BottomStaircase => "bottom staircase",
            Pass::LeftWall => "left wall",
            Pass::RightWall => "right wall",
            Pass::InnerTopCorners => "inner top corners",
            Pass::InnerWalls => "inner walls",
            Pass::InnerBottomCorners => "inner bottom corners",
            Pass::DropShadow => "drop shadow",
        }
    }

    pub fn draw(self, canvas: &mut BlockCanvas, layout: &Layout, palette: &BorderPalette) {
        match self {
            Pass::TopStaircase => top_staircase(canvas, layout, palette),
            Pass::BottomStaircase => bottom_staircase(canvas, layout, palette),
            Pass::LeftWall => left_wall(canvas, layout, palette),
            Pass::RightWall => right_wall(canvas, layout, palette),
            Pass::InnerTopCorners => inner_top_corners(canvas, layout, palette),
            Pass::InnerWalls => inner_walls(canvas, layout, palette),
            Pass::InnerBottomCorners => inner_bottom_corners(canvas, layout, palette),
            Pass::DropShadow => drop_shadow(canvas, layout, palette),
        }
    }
}

/// Full-width row shared by both staircases: K 7 6 5 [4 ...] 3 2 1 K
fn edge_row(canvas: &mut BlockCanvas, l: &Layout, p: &BorderPalette, by: i32) {
    let k = p.outline;
    canvas.stamp(l.outer_left, by, &[k, p.band(7), p.band(6), p.band(5)]);
    canvas.hline(l.fill_left, l.fill_right, by, p.band(4));
    canvas.stamp(l.fill_right + 1, by, &[p.band(3), p.band(2), p.band(1), k]);
}

/// Outside-in from the top bar, lightest bands nearest the outer edge.
fn top_staircase(canvas: &mut BlockCanvas, l: &Layout, p: &BorderPalette) {
    let k = p.outline;
    let row = l.top_bar;

    canvas.hline(l.fill_left, l.fill_right, row, k);

    canvas.put(l.fill_left - 1, row + 1, k);
    canvas.hline(l.fill_left, l.fill_right, row + 1, p.band(7));
    canvas.put(l.fill_right + 1, row + 1, k);

    canvas.put(l.fill_left - 2, row + 2, k);
    canvas.hline(l.fill_left - 1, l.fill_right + 1, row + 2, p.band(6));
    canvas.put(l.fill_right + 2, row + 2, k);

    canvas.stamp(l.fill_left - 3, row + 3, &[k, p.band(6)]);
    canvas.hline(l.fill_left - 1, l.fill_right + 1, row + 3, p.band(5));
    canvas.stamp(l.fill_right + 2, row + 3, &[p.band(2), k]);

    edge_row(canvas, l, p, l.top_fill);
}

/// Inside-out down to the bottom bar, darkest bands nearest the outer edge.
fn bottom_staircase(canvas: &mut BlockCanvas, l: &Layout, p: &BorderPalette) {
    let k = p.outline;
    let row = l.bottom_fill;

    edge_row(canvas, l, p, row);

    canvas.stamp(l.fill_left - 3, row + 1, &[k, p.band(6), p.band(5)]);
    canvas.hline(l.fill_left, l.fill_right + 1, row + 1, p.band(3));
    canvas.stamp(l.fill_right + 2, row + 1, &[p.band(2), k]);

    canvas.put(l.fill_left - 2, row + 2, k);
    canvas.hline(l.fill_left - 1, l.fill_right + 1, row + 2, p.band(2));
    canvas.put(l.fill_right + 2, row + 2, k);

    canvas.put(l.fill_left - 1, row + 3, k);
    canvas.hline(l.fill_left, l.fill_right, row + 3, p.band(1));
    canvas.put(l.fill_right + 1, row + 3, k);

    canvas.hline(l.fill_left, l.fill_right, l.bottom_bar, k);
}

fn left_wall(canvas: &mut BlockCanvas, l: &Layout, p: &BorderPalette) {
    let column = [p.outline, p.band(7), p.band(6), p.band(5), p.band(4)];
    for by in (l.top_fill + 1)..l.bottom_fill {
        canvas.stamp(l.outer_left, by, &column);
    }
}

fn right_wall(canvas: &mut BlockCanvas, l: &Layout, p: &BorderPalette) {
    let column = [p.band(4), p.band(3), p.band(2), p.band(1), p.outline];
    for by in (l.top_fill + 1)..l.bottom_fill {
        canvas.stamp(l.fill_right, by, &column);
    }
}

/// Six rows under the top edge. The recess between the inner bars is shaded.
fn inner_top_corners(canvas: &mut BlockCanvas, l: &Layout, p: &BorderPalette) {
    let (k, g) = (p.outline, p.shadow);
    let row = l.top_fill;
    let (il, ir) = (l.inner_left, l.inner_right);

    canvas.stamp(il, row + 1, &[k, k, p.band(4), p.band(5)]);
    canvas.hline(l.inner_bar_left, l.inner_bar_right, row + 1, k);
    canvas.stamp(ir - 3, row + 1, &[p.band(5), p.band(4), k, k]);

    canvas.stamp(il, row + 2, &[k, k, p.band(5), p.band(6)]);
    canvas.put(l.inner_bar_left, row + 2, k);
    canvas.hline(l.inner_bar_left + 1, l.inner_bar_right - 1, row + 2, g);
    canvas.put(l.inner_bar_right, row + 2, k);
    canvas.stamp(ir - 3, row + 2, &[p.band(6), p.band(5), k, k]);

    canvas.stamp(il, row + 3, &[p.band(4), p.band(5), p.band(6), p.band(7)]);
    canvas.put(l.inner_bar_left, row + 3, k);
    canvas.hline(l.inner_bar_left + 1, l.inner_bar_right - 1, row + 3, g);
    canvas.put(l.inner_bar_right, row + 3, k);
    canvas.stamp(ir - 3, row + 3, &[p.band(7), p.band(6), p.band(5), p.band(4)]);

    canvas.stamp(il, row + 4, &[p.band(5), p.band(6), p.band(7), k, g, g]);
    canvas.stamp(ir - 3, row + 4, &[k, p.band(7), p.band(6), p.band(5)]);

    canvas.stamp(il, row + 5, &[k, k, k, g, g]);
    canvas.stamp(ir - 2, row + 5, &[k, k, k]);

    canvas.stamp(il, row + 6, &[k, g, g, g]);
    canvas.put(ir, row + 6, k);
}

fn inner_walls(canvas: &mut BlockCanvas, l: &Layout, p: &BorderPalette) {
    for by in (l.top_fill + 7)..(l.bottom_fill - 5) {
        canvas.stamp(l.inner_left, by, &[p.outline, p.shadow, p.shadow]);
        canvas.put(l.inner_right, by, p.outline);
    }
}

/// Five rows above the bottom edge, mirroring the top corners without shading.
fn inner_bottom_corners(canvas: &mut BlockCanvas, l: &Layout, p: &BorderPalette) {
    let k = p.outline;
    let row = l.bottom_fill;
    let (il, ir) = (l.inner_left, l.inner_right);

    canvas.stamp(il, row - 5, &[k, k, k]);
    canvas.stamp(ir - 2, row - 5, &[k, k, k]);

    canvas.stamp(il, row - 4, &[p.band(5), p.band(6), p.band(7), k]);
    canvas.stamp(ir - 3, row - 4, &[k, p.band(7), p.band(6), p.band(5)]);

    canvas.stamp(il, row - 3, &[p.band(4), p.band(5), p.band(6), p.band(7), k]);
    canvas.stamp(ir - 4, row - 3, &[k, p.band(7), p.band(6), p.band(5), p.band(4)]);

    canvas.stamp(il, row - 2, &[k, k, p.band(5), p.band(6), k]);
    canvas.stamp(ir - 4, row - 2, &[k, p.band(6), p.band(5), k, k]);

    canvas.stamp(il, row - 1, &[k, k, p.band(4), p.band(5)]);
    canvas.hline(l.inner_bar_left, l.inner_bar_right, row - 1, k);
    canvas.stamp(ir - 3, row - 1, &[p.band(5), p.band(4), k, k]);
}

/// Shadow cast down-right: right columns, a stepped corner, two rows underneath.
fn drop_shadow(canvas: &mut BlockCanvas, l: &Layout, p: &BorderPalette) {
    let g = p.shadow;
    let or = l.outer_right;

    canvas.put(or + 1, l.top_fill + 1, g);
    canvas.vline(or + 1, l.top_fill + 2, l.bottom_fill, g);
    canvas.vline(or + 2, l.top_fill + 2, l.bottom_fill, g);

    canvas.hline(or, or + 2, l.bottom_fill + 1, g);
    canvas.hline(or - 1, or + 1, l.bottom_fill + 2, g);
    canvas.hline(or - 2, or, l.bottom_fill + 3, g);
    canvas.hline(or - 3, or - 1, l.bottom_bar, g);

    canvas.hline(l.fill_left + 1, l.fill_right + 2, l.bottom_bar + 1, g);
    canvas.hline(l.fill_left + 2, l.fill_right + 1, l.bottom_bar + 2, g);
}
