/// Row packer for one-shot glyph atlases.
///
/// Glyphs go left to right with a one pixel gap. When a glyph does not fit
/// in the rest of the row, a new row starts just below the tallest glyph
/// placed so far. The first row and column of the atlas stay empty, so no
/// glyph touches the border or a neighbour.
#[derive(Debug)]
pub struct RowPacker {
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    bottom: u32,
}

impl RowPacker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            x: 1,
            y: 1,
            bottom: 1,
        }
    }

    /// Reserves a `width x height` slot and returns its top-left corner, or
    /// `None` once the rows run past the atlas height.
    pub fn allocate(&mut self, width: u32, height: u32) -> Option<(u32, u32)> {
        let padded_width = width.saturating_add(1);
        let padded_height = height.saturating_add(1);

        if self.x.saturating_add(padded_width) >= self.width {
            self.x = 1;
            self.y = self.bottom;
            if self.x.saturating_add(padded_width) >= self.width {
                return None;
            }
        }

        let row_end = self.y.saturating_add(padded_height);
        if row_end >= self.height {
            return None;
        }

        let position = (self.x, self.y);
        self.x += padded_width;
        self.bottom = self.bottom.max(row_end);
        Some(position)
    }

    /// Rows used so far, gaps included.
    pub fn used_height(&self) -> u32 {
        self.bottom
    }

    /// Whether a glyph this wide fits on an empty row.
    pub fn fits_row(&self, width: u32) -> bool {
        width.saturating_add(2) < self.width
    }
}
