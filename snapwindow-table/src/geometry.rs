use snapwindow::WindowOptions;

use crate::GeometryError;

/// Fixed vertical geometry of the table, in pixels.
///
/// The page header sits above the table; the table's own header row sits above the first row.
/// Both push the first row down, so windowing measures scroll offsets from
/// `header_height + header_row_height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableGeometry {
    pub header_height: u32,
    pub header_row_height: u32,
    pub row_height: u32,
    /// Rows rendered above and below the viewport.
    pub margin: usize,
}

impl Default for TableGeometry {
    fn default() -> Self {
        Self {
            header_height: 148,
            header_row_height: 35,
            row_height: 31,
            margin: 5,
        }
    }
}

impl TableGeometry {
    pub fn with_header_height(mut self, header_height: u32) -> Self {
        self.header_height = header_height;
        self
    }

    pub fn with_header_row_height(mut self, header_row_height: u32) -> Self {
        self.header_row_height = header_row_height;
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.row_height == 0 {
            vwarn!("TableGeometry: zero row height");
            return Err(GeometryError::ZeroRowHeight);
        }
        if self.margin == 0 {
            vwarn!("TableGeometry: zero margin");
            return Err(GeometryError::ZeroMargin);
        }
        Ok(())
    }

    /// Distance from the top of the page to the first row.
    pub fn header_offset(&self) -> u32 {
        self.header_height.saturating_add(self.header_row_height)
    }

    pub fn window_options(&self) -> WindowOptions {
        WindowOptions::new(self.row_height, self.margin, self.header_offset())
    }

    /// Height of the scroll content for `count` rows, header row included.
    ///
    /// This is sized to the full sequence (not the window) so the scrollbar is correct.
    pub fn content_height(&self, count: usize) -> u64 {
        (self.header_row_height as u64)
            .saturating_add((count as u64).saturating_mul(self.row_height as u64))
    }
}
