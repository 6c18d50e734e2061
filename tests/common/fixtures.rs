use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb};

/// Grayscale image, black on the left half and white from `width / 2` on
pub fn step_image(width: u32, height: u32) -> DynamicImage {
    let img = GrayImage::from_fn(width, height, |x, _| {
        if x < width / 2 { Luma([0u8]) } else { Luma([255u8]) }
    });
    DynamicImage::ImageLuma8(img)
}

/// Grayscale image with a single value everywhere
pub fn uniform_image(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// RGB gradient with a bright square in the middle
pub fn rgb_scene(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let inside = x > width / 4 && x < 3 * width / 4 && y > height / 4 && y < 3 * height / 4;
        if inside {
            Rgb([250u8, 240u8, 230u8])
        } else {
            Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 64u8])
        }
    });
    DynamicImage::ImageRgb8(img)
}

/// Writes a grayscale step image as PNG into `dir` and returns its path
pub fn write_step_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    step_image(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .expect("Failed to save test image");
    path
}

/// Like `step_image`, with a mid-gray column at `width / 2` so the
/// strongest gradient sits on a single pixel
pub fn centered_step_image(width: u32, height: u32) -> DynamicImage {
    let mid = width / 2;
    let img = GrayImage::from_fn(width, height, |x, _| {
        if x < mid {
            Luma([0u8])
        } else if x == mid {
            Luma([128u8])
        } else {
            Luma([255u8])
        }
    });
    DynamicImage::ImageLuma8(img)
}
