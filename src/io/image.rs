//! PNG decode/encode at the pixel grid boundary
//!
//! The core consumes and produces [`PixelGrid`] buffers only; this module
//! owns the conversion to and from files. Alpha channels on decoded images
//! are discarded because the algorithm operates on flat RGB triples.

use std::path::Path;

use crate::io::error::{CompositeError, Result};
use crate::spatial::PixelGrid;

/// Decode a PNG (or any format the `image` crate recognizes) into a grid
///
/// # Errors
///
/// Returns [`CompositeError::ImageLoad`] when the file cannot be opened or
/// is not a decodable image.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| CompositeError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    Ok(PixelGrid::from_rgb_image(&img.to_rgb8()))
}

/// Encode a grid as a PNG at the given path, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CompositeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    grid.to_rgb_image()
        .save(path)
        .map_err(|e| CompositeError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
