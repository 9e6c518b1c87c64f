use std::ops::Range;

/// Half-open range of image rows owned by a single worker for one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowBand {
    start_row: u32,
    end_row: u32,
}

impl RowBand {
    pub(crate) fn new(start_row: u32, end_row: u32) -> Self {
        debug_assert!(start_row <= end_row);

        Self { start_row, end_row }
    }

    #[must_use]
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    #[must_use]
    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.end_row - self.start_row
    }
}
