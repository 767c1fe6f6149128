/// Geometry the window calculator works against.
///
/// All rows share `row_height`. `header_offset` is the distance from the top of the scroll
/// container to the first row (page header plus the table's own header row).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// Height of a single row. Treated as at least 1.
    pub row_height: u32,
    /// Rows rendered beyond the viewport on each side. Also the snap grid factor.
    pub margin: usize,
    pub header_offset: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            row_height: 31,
            margin: 5,
            header_offset: 183,
        }
    }
}

impl WindowOptions {
    pub fn new(row_height: u32, margin: usize, header_offset: u32) -> Self {
        Self {
            row_height,
            margin,
            header_offset,
        }
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_header_offset(mut self, header_offset: u32) -> Self {
        self.header_offset = header_offset;
        self
    }

    /// The snap grid step in pixels (`row_height × margin`).
    pub fn snap_step(&self) -> u64 {
        crate::snap_step(self.row_height, self.margin)
    }
}
