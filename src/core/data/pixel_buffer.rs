use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::row_band::RowBand;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BandsDoNotPartition {
        expected_start_row: u32,
        band: Option<RowBand>,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BandsDoNotPartition {
                expected_start_row,
                band: Some(band),
            } => {
                write!(
                    f,
                    "row band {}..{} does not start at expected row {}",
                    band.start_row(),
                    band.end_row(),
                    expected_start_row
                )
            }
            Self::BandsDoNotPartition {
                expected_start_row,
                band: None,
            } => {
                write!(f, "row bands stop at row {} before the image ends", expected_start_row)
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major RGB frame, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    image_size: ImageSize,
    buffer: Vec<u8>,
}

/// Exclusive view over the rows of one band.
#[derive(Debug)]
pub struct BandSlice<'a> {
    band: RowBand,
    row_bytes: usize,
    data: &'a mut [u8],
}

impl<'a> BandSlice<'a> {
    #[must_use]
    pub fn band(&self) -> RowBand {
        self.band
    }

    /// Yields `(y, row)` pairs where `y` is the absolute image row.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [u8])> + '_ {
        let start_row = self.band.start_row();

        self.data
            .chunks_exact_mut(self.row_bytes)
            .enumerate()
            .map(move |(offset, row)| (start_row + offset as u32, row))
    }
}

impl PixelBuffer {
    #[must_use]
    pub fn new(image_size: ImageSize) -> Self {
        Self {
            image_size,
            buffer: vec![0; image_size.buffer_len()],
        }
    }

    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if !self.image_size.contains(x, y) {
            return None;
        }

        let index = self.index_of(x, y);

        Some(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    /// Splits the buffer into one exclusive slice per band.
    ///
    /// The bands must be ordered, contiguous, and cover every row exactly
    /// once; anything else is rejected before any slice is handed out.
    pub fn split_bands_mut(
        &mut self,
        bands: &[RowBand],
    ) -> Result<Vec<BandSlice<'_>>, PixelBufferError> {
        let mut expected_start_row = 0;

        for band in bands {
            if band.start_row() != expected_start_row || band.end_row() < band.start_row() {
                return Err(PixelBufferError::BandsDoNotPartition {
                    expected_start_row,
                    band: Some(*band),
                });
            }
            expected_start_row = band.end_row();
        }

        if expected_start_row != self.image_size.height() {
            return Err(PixelBufferError::BandsDoNotPartition {
                expected_start_row,
                band: None,
            });
        }

        let row_bytes = self.image_size.row_bytes();
        let mut rest: &mut [u8] = &mut self.buffer;
        let mut slices = Vec::with_capacity(bands.len());

        for band in bands {
            let (head, tail) =
                std::mem::take(&mut rest).split_at_mut(band.height() as usize * row_bytes);
            slices.push(BandSlice {
                band: *band,
                row_bytes,
                data: head,
            });
            rest = tail;
        }

        Ok(slices)
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize * self.image_size.width() as usize + x as usize) * 3
    }
}
