use crate::controllers::frame_loop::data::frame_data::FrameData;
use crate::controllers::frame_loop::ports::frame_presenter::{FramePresenter, PresentError};
use log::debug;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the frame bytes.
#[must_use]
pub fn frame_checksum(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Headless presenter that fingerprints each frame instead of drawing it.
#[derive(Debug, Default)]
pub struct ChecksumPresenter {
    frames_presented: u64,
    last_generation: u64,
    last_checksum: Option<u64>,
}

impl ChecksumPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.last_generation
    }

    #[must_use]
    pub fn last_checksum(&self) -> Option<u64> {
        self.last_checksum
    }
}

impl FramePresenter for ChecksumPresenter {
    fn present(&mut self, frame: &FrameData<'_>) -> Result<(), PresentError> {
        if self.frames_presented > 0 && frame.generation <= self.last_generation {
            return Err(PresentError::new(
                frame.generation,
                format!(
                    "frame arrived out of order after generation {}",
                    self.last_generation
                ),
            ));
        }

        let checksum = frame_checksum(frame.pixel_buffer.buffer());
        debug!(
            "frame {} checksum {:016x} rendered in {:?}",
            frame.generation, checksum, frame.render_duration
        );

        self.frames_presented += 1;
        self.last_generation = frame.generation;
        self.last_checksum = Some(checksum);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::image_size::ImageSize;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use std::time::Duration;

    fn frame(generation: u64, buffer: &PixelBuffer) -> FrameData<'_> {
        FrameData {
            generation,
            pixel_buffer: buffer,
            render_duration: Duration::from_millis(3),
        }
    }

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(frame_checksum(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(frame_checksum(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_records_latest_frame() {
        let buffer = PixelBuffer::new(ImageSize::new(2, 2).unwrap());
        let mut presenter = ChecksumPresenter::new();

        presenter.present(&frame(1, &buffer)).unwrap();
        presenter.present(&frame(2, &buffer)).unwrap();

        assert_eq!(presenter.frames_presented(), 2);
        assert_eq!(presenter.last_generation(), 2);
        assert_eq!(presenter.last_checksum(), Some(frame_checksum(&[0; 12])));
    }

    #[test]
    fn test_rejects_stale_generation() {
        let buffer = PixelBuffer::new(ImageSize::new(2, 2).unwrap());
        let mut presenter = ChecksumPresenter::new();

        presenter.present(&frame(3, &buffer)).unwrap();

        assert_eq!(
            presenter.present(&frame(3, &buffer)).unwrap_err().generation,
            3
        );
    }
}
