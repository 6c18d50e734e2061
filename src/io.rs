use std::ffi::OsString;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

use crate::error::{EdgeError, EdgeResult};
use crate::models::EdgeMap;

/// Inserted before the extension of a derived output file name
pub const OUTPUT_SUFFIX: &str = "_edges";

/// File name the GUI writes its result to, next to the input
pub const GUI_OUTPUT_FILE_NAME: &str = "DAPI_edges.png";

/// Sample image whose directory the file browser opens in
pub const DEFAULT_INPUT: &str = "test_images/DAPI.png";

/// Extensions offered by the file browser
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "gif", "webp"];

/// Load an image, failing with `MissingInputFile` when `path` is not a file
pub fn read_image(path: &Path) -> EdgeResult<DynamicImage> {
    if !path.is_file() {
        return Err(EdgeError::MissingInputFile(path.to_path_buf()));
    }

    let img = ImageReader::open(path)
        .map_err(image::ImageError::IoError)?
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;

    debug!(path = %path.display(), width = img.width(), height = img.height(), "image loaded");
    Ok(img)
}

/// `dir/input.png` becomes `dir/input_edges.png`
pub fn derive_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::new();
    match (input.file_stem(), input.extension()) {
        (Some(stem), Some(ext)) => {
            name.push(stem);
            name.push(OUTPUT_SUFFIX);
            name.push(".");
            name.push(ext);
        }
        (Some(stem), None) => {
            name.push(stem);
            name.push(OUTPUT_SUFFIX);
        }
        _ => name.push(OUTPUT_SUFFIX),
    }
    input.with_file_name(name)
}

/// Directory of `DEFAULT_INPUT`, when it exists
pub fn default_browse_dir() -> Option<PathBuf> {
    Path::new(DEFAULT_INPUT)
        .parent()
        .filter(|dir| dir.is_dir())
        .map(Path::to_path_buf)
}

/// Fixed output location used by the GUI
pub fn gui_output_path(input: &Path) -> PathBuf {
    input.with_file_name(GUI_OUTPUT_FILE_NAME)
}

/// Write an edge map, format chosen from the extension of `path`.
/// PNG and TIFF get 16-bit samples, GIF gets RGBA, other formats 8-bit gray.
/// The file is only created once encoding succeeded.
pub fn save_edge_map(edges: &EdgeMap, path: &Path) -> EdgeResult<()> {
    let format = ImageFormat::from_path(path)?;
    let img = match format {
        ImageFormat::Png | ImageFormat::Tiff => DynamicImage::ImageLuma16(edges.to_luma16()),
        ImageFormat::Gif => DynamicImage::ImageLuma8(edges.to_luma8()).to_rgba8().into(),
        _ => DynamicImage::ImageLuma8(edges.to_luma8()),
    };

    let mut encoded = Cursor::new(Vec::new());
    img.write_to(&mut encoded, format)?;
    fs::write(path, encoded.into_inner()).map_err(image::ImageError::IoError)?;

    debug!(path = %path.display(), ?format, "edge map saved");
    Ok(())
}
