//! Pixel grid transposition.

use crate::image_pipeline::bmp::types::Pixel;
use crate::image_pipeline::common::error::{ProcessingError, Result};

/// Read-only snapshot of a `width` x `height` buffer indexed
/// `[column][row]`.
///
/// Storage is column-major over the source, which is the row-major buffer
/// of the transposed image.
#[derive(Debug, Clone, PartialEq)]
pub struct TransposedMatrix {
    columns: usize,
    rows: usize,
    data: Vec<Pixel>,
}

impl TransposedMatrix {
    /// Number of source columns (the original width).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of source rows (the original height).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `matrix[column][row]`, or `None` when either index is outside the
    /// grid.
    pub fn get(&self, column: isize, row: isize) -> Option<Pixel> {
        let column = usize::try_from(column).ok().filter(|&c| c < self.columns)?;
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        self.data.get(column * self.rows + row).copied()
    }

    /// Flat row-major buffer of the transposed image: `rows` wide and
    /// `columns` tall.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.data
    }
}

/// Transposes a row-major `width` x `height` buffer so that
/// `matrix[x][y] == pixels[y * width + x]`.
pub fn transpose(pixels: &[Pixel], width: usize, height: usize) -> Result<TransposedMatrix> {
    let expected = width * height;
    if pixels.len() != expected {
        return Err(ProcessingError::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let mut data = vec![Pixel::default(); expected];
    for (index, &pixel) in pixels.iter().enumerate() {
        let (row, col) = (index / width, index % width);
        data[col * height + row] = pixel;
    }

    Ok(TransposedMatrix {
        columns: width,
        rows: height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<Pixel> {
        (0..len)
            .map(|i| Pixel::new(i as u8, (i * 3) as u8, 255 - i as u8))
            .collect()
    }

    #[test]
    fn two_by_two_index_mapping() {
        let pixels = vec![
            Pixel::new(10, 0, 0),
            Pixel::new(20, 0, 0),
            Pixel::new(30, 0, 0),
            Pixel::new(40, 0, 0),
        ];
        let matrix = transpose(&pixels, 2, 2).unwrap();

        assert_eq!(matrix.get(0, 0), Some(Pixel::new(10, 0, 0)));
        assert_eq!(matrix.get(1, 0), Some(Pixel::new(20, 0, 0)));
        assert_eq!(matrix.get(0, 1), Some(Pixel::new(30, 0, 0)));
        assert_eq!(matrix.get(1, 1), Some(Pixel::new(40, 0, 0)));
    }

    #[test]
    fn rectangular_mapping_matches_row_major_source() {
        let (width, height) = (4, 3);
        let pixels = ramp(width * height);
        let matrix = transpose(&pixels, width, height).unwrap();

        assert_eq!(matrix.columns(), width);
        assert_eq!(matrix.rows(), height);
        for y in 0..height {
            for x in 0..width {
                assert_eq!(
                    matrix.get(x as isize, y as isize),
                    Some(pixels[y * width + x])
                );
            }
        }
        assert_eq!(
            matrix.into_pixels()[3..6],
            [pixels[1], pixels[5], pixels[9]]
        );
    }

    #[test]
    fn out_of_range_indices_on_either_axis_are_none() {
        let matrix = transpose(&ramp(6), 3, 2).unwrap();
        assert_eq!(matrix.get(-1, 0), None);
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.get(0, -1), None);
        assert_eq!(matrix.get(0, 2), None);
    }

    #[test]
    fn transposing_twice_is_identity() {
        for (width, height) in [(1, 1), (1, 7), (7, 1), (5, 5), (3, 8), (8, 3)] {
            let pixels = ramp(width * height);
            let once = transpose(&pixels, width, height).unwrap().into_pixels();
            let twice = transpose(&once, height, width).unwrap().into_pixels();
            assert_eq!(twice, pixels, "{width}x{height}");
        }
    }

    #[test]
    fn length_mismatch_is_reported() {
        let result = transpose(&ramp(5), 2, 3);
        assert!(matches!(
            result,
            Err(ProcessingError::SizeMismatch { expected: 6, actual: 5 })
        ));
    }

    #[test]
    fn empty_grid_transposes_to_empty() {
        let matrix = transpose(&[], 0, 4).unwrap();
        assert_eq!(matrix.get(0, 0), None);
        assert!(matrix.into_pixels().is_empty());
    }
}
