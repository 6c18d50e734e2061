use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use imageproc::definitions::Image;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::gradients::{horizontal_prewitt, horizontal_sobel, vertical_prewitt, vertical_sobel};

/// Smoothing scale applied before Canny
pub const CANNY_SIGMA: f32 = 7.0;

/// Hysteresis thresholds, 10% and 20% of the 8-bit range
pub const CANNY_LOW_THRESHOLD: f32 = 0.1 * 255.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 0.2 * 255.0;

/// Sum of the positive weights of each 3x3 kernel, times the 8-bit range
const SOBEL_NORM: f32 = 4.0 * 255.0;
const PREWITT_NORM: f32 = 3.0 * 255.0;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Gaussian smoothing followed by Canny, returns a 0/1 mask.
/// A `sigma` that is not positive skips the smoothing.
pub fn canny_mask(img: &GrayImage, sigma: f32) -> ImageBuffer<Luma<f32>, Vec<f32>> {
    // imageproc's non-maximum suppression underflows on empty images
    if img.width() == 0 || img.height() == 0 {
        return ImageBuffer::new(img.width(), img.height());
    }

    let blurred = if sigma > 0.0 {
        gaussian_blur_f32(img, sigma)
    } else {
        img.clone()
    };
    let edges = canny(&blurred, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD);
    ImageBuffer::from_fn(edges.width(), edges.height(), |x, y| {
        Luma([if edges.get_pixel(x, y)[0] > 0 { 1.0 } else { 0.0 }])
    })
}

/// Sobel gradient magnitude
pub fn sobel_magnitude(img: &GrayImage) -> ImageBuffer<Luma<f32>, Vec<f32>> {
    magnitude(&horizontal_sobel(img), &vertical_sobel(img), SOBEL_NORM)
}

/// Prewitt gradient magnitude
pub fn prewitt_magnitude(img: &GrayImage) -> ImageBuffer<Luma<f32>, Vec<f32>> {
    magnitude(&horizontal_prewitt(img), &vertical_prewitt(img), PREWITT_NORM)
}

// Root mean square of both directions, on a [0, 1] intensity scale
fn magnitude(
    gx: &Image<Luma<i16>>,
    gy: &Image<Luma<i16>>,
    norm: f32,
) -> ImageBuffer<Luma<f32>, Vec<f32>> {
    ImageBuffer::from_fn(gx.width(), gx.height(), |x, y| {
        let h = gx.get_pixel(x, y)[0] as f32;
        let v = gy.get_pixel(x, y)[0] as f32;
        Luma([((h * h + v * v) / 2.0).sqrt() / norm])
    })
}
