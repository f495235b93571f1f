//! Fixed-dimension RGB pixel grid with bounds-checked sampling
//!
//! The grid is the only shared mutable resource in the system. Reads and
//! writes are addressed by signed coordinates so that probing and stepping
//! can wander past any edge; misses are reported as `None` (reads) or
//! silently dropped (writes) rather than raised as errors, because the
//! algorithm treats a boundary miss as "no data available".

use ndarray::Array2;

use crate::algorithm::luminosity::luminosity;

/// An RGB triple; alpha from decoded files is discarded before storage
pub type Pixel = [u8; 3];

/// Immutable-dimension 2D grid of RGB pixels, row-major, origin top-left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Pixel storage indexed by (row, col)
    data: Array2<Pixel>,
}

impl PixelGrid {
    /// Create a grid of the given dimensions filled with a single color
    pub fn filled(width: usize, height: usize, color: Pixel) -> Self {
        Self {
            data: Array2::from_elem((height, width), color),
        }
    }

    /// Build a grid from row-major pixel rows
    ///
    /// Rows shorter than the widest row are padded with black. An empty
    /// input produces a 0x0 grid.
    pub fn from_rows(rows: &[Vec<Pixel>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut data = Array2::from_elem((height, width), [0, 0, 0]);
        for (y, row) in rows.iter().enumerate() {
            for (x, &pixel) in row.iter().enumerate() {
                if let Some(cell) = data.get_mut((y, x)) {
                    *cell = pixel;
                }
            }
        }

        Self { data }
    }

    /// Grid width in pixels
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Grid height in pixels
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Grid dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Bounds-checked pixel read
    ///
    /// Returns the stored pixel when `0 <= x < width` and `0 <= y < height`,
    /// `None` otherwise. Callers treat `None` as "no data" and exclude the
    /// coordinate from further computation.
    pub fn get(&self, x: i64, y: i64) -> Option<Pixel> {
        if x < 0 || y < 0 {
            return None;
        }
        self.data.get((y as usize, x as usize)).copied()
    }

    /// Bounds-checked pixel write; out-of-bounds writes are silently dropped
    pub fn put(&mut self, x: i64, y: i64, pixel: Pixel) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = self.data.get_mut((y as usize, x as usize)) {
            *cell = pixel;
        }
    }

    /// Replace every occurrence of one color with another
    pub fn replace_color(&mut self, from: Pixel, to: Pixel) {
        for cell in &mut self.data {
            if *cell == from {
                *cell = to;
            }
        }
    }

    /// Grayscale rendition where each pixel holds its own BT.709 luminosity
    pub fn luminosity_map(&self) -> Self {
        let data = self.data.map(|&pixel| {
            let luma = luminosity(pixel) as u8;
            [luma, luma, luma]
        });

        Self { data }
    }

    /// Decode an `image` crate RGB buffer into a grid
    pub fn from_rgb_image(img: &image::RgbImage) -> Self {
        let (width, height) = (img.width() as usize, img.height() as usize);
        let mut data = Array2::from_elem((height, width), [0, 0, 0]);

        for (x, y, pixel) in img.enumerate_pixels() {
            if let Some(cell) = data.get_mut((y as usize, x as usize)) {
                *cell = pixel.0;
            }
        }

        Self { data }
    }

    /// Encode the grid as an `image` crate RGB buffer for export
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let mut img = image::RgbImage::new(self.width() as u32, self.height() as u32);

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let stored = self
                .data
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or([0, 0, 0]);
            *pixel = image::Rgb(stored);
        }

        img
    }
}

#[cfg(test)]
mod tests {
    use super::PixelGrid;

    #[test]
    fn test_get_rejects_out_of_range_coordinates() {
        let grid = PixelGrid::filled(3, 2, [10, 20, 30]);

        assert_eq!(grid.get(0, 0), Some([10, 20, 30]));
        assert_eq!(grid.get(2, 1), Some([10, 20, 30]));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
    }

    #[test]
    fn test_put_drops_out_of_bounds_writes() {
        let mut grid = PixelGrid::filled(2, 2, [0, 0, 0]);

        grid.put(1, 1, [9, 9, 9]);
        grid.put(2, 0, [1, 1, 1]);
        grid.put(-1, -1, [1, 1, 1]);

        assert_eq!(grid.get(1, 1), Some([9, 9, 9]));
        assert_eq!(grid.get(0, 0), Some([0, 0, 0]));
    }

    #[test]
    fn test_replace_color_swaps_only_matching_pixels() {
        let mut grid = PixelGrid::from_rows(&[
            vec![[255, 0, 0], [0, 255, 0]],
            vec![[255, 0, 0], [0, 0, 255]],
        ]);

        grid.replace_color([255, 0, 0], [255, 255, 255]);

        assert_eq!(grid.get(0, 0), Some([255, 255, 255]));
        assert_eq!(grid.get(0, 1), Some([255, 255, 255]));
        assert_eq!(grid.get(1, 0), Some([0, 255, 0]));
        assert_eq!(grid.get(1, 1), Some([0, 0, 255]));
    }

    #[test]
    fn test_luminosity_map_is_grayscale() {
        let grid = PixelGrid::from_rows(&[vec![[0, 0, 0], [255, 255, 255], [255, 0, 0]]]);
        let map = grid.luminosity_map();

        assert_eq!(map.get(0, 0), Some([0, 0, 0]));
        // The BT.709 weights sum to just under 1, so white truncates to 254
        assert_eq!(map.get(1, 0), Some([254, 254, 254]));
        // 0.2126 * 255 = 54.213, truncated
        assert_eq!(map.get(2, 0), Some([54, 54, 54]));
    }

    #[test]
    fn test_rgb_image_round_trip_preserves_dimensions() {
        let grid = PixelGrid::filled(4, 3, [7, 8, 9]);
        let img = grid.to_rgb_image();

        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(PixelGrid::from_rgb_image(&img), grid);
    }
}
