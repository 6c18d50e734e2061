pub mod filters;

use image::DynamicImage;
use tracing::debug;

use crate::error::EdgeResult;
use crate::models::{EdgeMap, Method};

/// Uniform entry point over the Canny, Sobel and Prewitt filters
#[derive(Debug, Clone)]
pub struct EdgeDetector {
    pub canny_sigma: f32,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self {
            canny_sigma: filters::CANNY_SIGMA,
        }
    }

    /// Negative or NaN values are clamped to 0, which disables the smoothing
    pub fn with_canny_sigma(mut self, sigma: f32) -> Self {
        self.canny_sigma = if sigma > 0.0 { sigma } else { 0.0 };
        self
    }

    /// Run the filter selected by `method` on a grayscale copy of `img`
    pub fn detect(&self, img: &DynamicImage, method: Method) -> EdgeMap {
        let gray = filters::to_grayscale(img);
        debug!(
            method = method.as_str(),
            width = gray.width(),
            height = gray.height(),
            "detecting edges"
        );

        let samples = match method {
            Method::Canny => filters::canny_mask(&gray, self.canny_sigma),
            Method::Sobel => filters::sobel_magnitude(&gray),
            Method::Prewitt => filters::prewitt_magnitude(&gray),
        };

        EdgeMap::new(method.edge_kind(), samples)
    }

    /// Parse `method` and run it. Unknown names fail before any pixel work.
    pub fn find_edges(&self, img: &DynamicImage, method: &str) -> EdgeResult<EdgeMap> {
        let method: Method = method.parse()?;
        Ok(self.detect(img, method))
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect edges with the default detector settings
pub fn detect(img: &DynamicImage, method: Method) -> EdgeMap {
    EdgeDetector::new().detect(img, method)
}

/// Detect edges selecting the filter by name (`canny`, `sobel` or `prewitt`)
pub fn find_edges(img: &DynamicImage, method: &str) -> EdgeResult<EdgeMap> {
    EdgeDetector::new().find_edges(img, method)
}
