use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::controllers::frame_loop::data::frame_data::FrameData;
use crate::controllers::frame_loop::ports::frame_presenter::{FramePresenter, PresentError};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Copies finished frames into a `pixels` surface and presents them.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
        })
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resizes both the surface and the backing buffer to match the window.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;

        Ok(())
    }
}

impl FramePresenter for PixelsPresenter {
    fn present(&mut self, frame: &FrameData<'_>) -> Result<(), PresentError> {
        let image_size = frame.pixel_buffer.image_size();

        if image_size.width() != self.width || image_size.height() != self.height {
            return Err(PresentError::new(
                frame.generation,
                format!(
                    "frame is {}x{} but surface is {}x{}",
                    image_size.width(),
                    image_size.height(),
                    self.width,
                    self.height
                ),
            ));
        }

        copy_rgb_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut());

        self.pixels
            .render()
            .map_err(|err| PresentError::new(frame.generation, err.to_string()))
    }
}
