use crate::core::data::row_band::RowBand;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBandError {
    ZeroBands,
    MoreBandsThanRows { bands: u32, height: u32 },
}

impl fmt::Display for RowBandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBands => write!(f, "at least one row band is required"),
            Self::MoreBandsThanRows { bands, height } => {
                write!(f, "cannot split {} rows into {} bands", height, bands)
            }
        }
    }
}

impl Error for RowBandError {}

/// Splits `[0, height)` into `bands` contiguous, non-empty row bands.
///
/// Band `i` covers `[i * height / bands, (i + 1) * height / bands)` using
/// exact integer division, so every row belongs to exactly one band and the
/// remainder rows are spread across the bands rather than dropped.
pub fn calculate_row_bands(height: u32, bands: u32) -> Result<Vec<RowBand>, RowBandError> {
    if bands == 0 {
        return Err(RowBandError::ZeroBands);
    }

    if bands > height {
        return Err(RowBandError::MoreBandsThanRows { bands, height });
    }

    let boundary = |index: u32| (u64::from(index) * u64::from(height) / u64::from(bands)) as u32;

    Ok((0..bands)
        .map(|index| RowBand::new(boundary(index), boundary(index + 1)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(height: u32, bands: u32) {
        let result = calculate_row_bands(height, bands).unwrap();
        let mut owners = vec![0u32; height as usize];

        assert_eq!(result.len(), bands as usize);
        assert_eq!(result.first().unwrap().start_row(), 0);
        assert_eq!(result.last().unwrap().end_row(), height);

        for pair in result.windows(2) {
            assert_eq!(pair[0].end_row(), pair[1].start_row());
        }

        for band in &result {
            assert!(band.height() > 0, "empty band {:?} for {}/{}", band, height, bands);
            for row in band.rows() {
                owners[row as usize] += 1;
            }
        }

        assert!(
            owners.iter().all(|&count| count == 1),
            "rows not covered exactly once for height {} and {} bands",
            height,
            bands
        );
    }

    #[test]
    fn test_divisible_height() {
        assert_exact_cover(1080, 30);
        assert_exact_cover(20, 4);
    }

    #[test]
    fn test_non_divisible_height() {
        assert_exact_cover(1080, 32);
        assert_exact_cover(1080, 7);
        assert_exact_cover(1081, 32);
        assert_exact_cover(7, 3);
    }

    #[test]
    fn test_band_per_row() {
        assert_exact_cover(7, 7);
        assert_exact_cover(1, 1);
    }

    #[test]
    fn test_exhaustive_small_sizes() {
        for height in 1..=64 {
            for bands in 1..=height {
                assert_exact_cover(height, bands);
            }
        }
    }

    #[test]
    fn test_band_heights_differ_by_at_most_one() {
        let bands = calculate_row_bands(1080, 32).unwrap();
        let min = bands.iter().map(RowBand::height).min().unwrap();
        let max = bands.iter().map(RowBand::height).max().unwrap();

        assert_eq!((min, max), (33, 34));
    }

    #[test]
    fn test_zero_bands_rejected() {
        assert_eq!(calculate_row_bands(10, 0), Err(RowBandError::ZeroBands));
    }

    #[test]
    fn test_more_bands_than_rows_rejected() {
        assert_eq!(
            calculate_row_bands(3, 4),
            Err(RowBandError::MoreBandsThanRows { bands: 4, height: 3 })
        );
    }
}
