use crate::core::data::pixel_buffer::PixelBuffer;
use std::time::Duration;

/// A completed frame, borrowed from the loop for the duration of `present`.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    pub generation: u64,
    pub pixel_buffer: &'a PixelBuffer,
    pub render_duration: Duration,
}
