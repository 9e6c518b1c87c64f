use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ImageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "image size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ImageSizeError {}

/// Dimensions of the rendered frame in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ImageSizeError> {
        if width == 0 || height == 0 {
            return Err(ImageSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Integer half of the width; odd widths round down.
    #[must_use]
    pub fn half_width(&self) -> u32 {
        self.width / 2
    }

    #[must_use]
    pub fn half_height(&self) -> u32 {
        self.height / 2
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * 3
    }

    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.pixel_count() * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_size_new_valid() {
        let size = ImageSize::new(1920, 1080).unwrap();

        assert_eq!(size.width(), 1920);
        assert_eq!(size.height(), 1080);
        assert_eq!(size.pixel_count(), 2_073_600);
        assert_eq!(size.buffer_len(), 6_220_800);
    }

    #[test]
    fn test_image_size_must_be_positive() {
        assert_eq!(
            ImageSize::new(0, 10),
            Err(ImageSizeError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            ImageSize::new(10, 0),
            Err(ImageSizeError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_single_pixel_is_valid() {
        assert!(ImageSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_halves_round_down() {
        let size = ImageSize::new(7, 5).unwrap();

        assert_eq!(size.half_width(), 3);
        assert_eq!(size.half_height(), 2);
    }

    #[test]
    fn test_contains() {
        let size = ImageSize::new(4, 3).unwrap();

        assert!(size.contains(0, 0));
        assert!(size.contains(3, 2));
        assert!(!size.contains(4, 2));
        assert!(!size.contains(3, 3));
    }
}
