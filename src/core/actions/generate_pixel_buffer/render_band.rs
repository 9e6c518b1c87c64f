use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::BandSlice;

/// Computes and colours every pixel of one band, writing straight into it.
pub fn render_band<Alg, CMap>(band: &mut BandSlice<'_>, algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (y, row) in band.rows_mut() {
        for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
            let colour = colour_map.map(algorithm.compute(x as u32, y));
            pixel.copy_from_slice(&colour.to_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::image_size::ImageSize;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::row_band::RowBand;

    struct CoordinateAlgorithm {}

    impl FractalAlgorithm for CoordinateAlgorithm {
        type Success = (u32, u32);

        fn compute(&self, x: u32, y: u32) -> Self::Success {
            (x, y)
        }
    }

    struct CoordinateColourMap {}

    impl ColourMap<(u32, u32)> for CoordinateColourMap {
        fn map(&self, (x, y): (u32, u32)) -> Colour {
            Colour::new(x as u8, y as u8, 7)
        }

        fn display_name(&self) -> &str {
            "Coordinates"
        }
    }

    #[test]
    fn test_band_receives_absolute_coordinates() {
        let mut buffer = PixelBuffer::new(ImageSize::new(3, 4).unwrap());
        let bands = [RowBand::new(0, 2), RowBand::new(2, 4)];

        {
            let mut slices = buffer.split_bands_mut(&bands).unwrap();
            render_band(&mut slices[1], &CoordinateAlgorithm {}, &CoordinateColourMap {});
        }

        assert_eq!(buffer.pixel(0, 0), Some(Colour::new(0, 0, 0)));
        assert_eq!(buffer.pixel(2, 1), Some(Colour::new(0, 0, 0)));
        assert_eq!(buffer.pixel(0, 2), Some(Colour::new(0, 2, 7)));
        assert_eq!(buffer.pixel(2, 3), Some(Colour::new(2, 3, 7)));
    }
}
