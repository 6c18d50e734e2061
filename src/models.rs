use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use image::{ImageBuffer, Luma};

use crate::colormap::Colormap;
use crate::error::EdgeError;

/// Edge detection filter applied by the facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Canny,
    Sobel,
    Prewitt,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Canny, Method::Sobel, Method::Prewitt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Canny => "canny",
            Method::Sobel => "sobel",
            Method::Prewitt => "prewitt",
        }
    }

    /// Kind of map this method produces
    pub fn edge_kind(&self) -> EdgeKind {
        match self {
            Method::Canny => EdgeKind::Mask,
            Method::Sobel | Method::Prewitt => EdgeKind::Magnitude,
        }
    }
}

impl FromStr for Method {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canny" => Ok(Method::Canny),
            "sobel" => Ok(Method::Sobel),
            "prewitt" => Ok(Method::Prewitt),
            _ => Err(EdgeError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Binary mask, every sample is 0.0 or 1.0
    Mask,
    /// Non-negative gradient magnitude
    Magnitude,
}

/// Result of an edge detection, same dimensions as the input image
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMap {
    kind: EdgeKind,
    samples: ImageBuffer<Luma<f32>, Vec<f32>>,
}

impl EdgeMap {
    pub fn new(kind: EdgeKind, samples: ImageBuffer<Luma<f32>, Vec<f32>>) -> Self {
        Self { kind, samples }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn width(&self) -> u32 {
        self.samples.width()
    }

    pub fn height(&self) -> u32 {
        self.samples.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.samples.dimensions()
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.samples.get_pixel(x, y)[0]
    }

    /// Row-major sample values
    pub fn samples(&self) -> &[f32] {
        self.samples.as_raw()
    }

    pub fn max_value(&self) -> f32 {
        self.samples().iter().copied().fold(0.0, f32::max)
    }

    /// Number of samples with a non-zero response
    pub fn edge_count(&self) -> usize {
        self.samples().iter().filter(|v| **v > 0.0).count()
    }

    /// 8-bit rendering: masks become 0/255, magnitudes are scaled by 255
    pub fn to_luma8(&self) -> ImageBuffer<Luma<u8>, Vec<u8>> {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            Luma([(self.get(x, y).clamp(0.0, 1.0) * u8::MAX as f32).round() as u8])
        })
    }

    /// 16-bit rendering, used for formats that can carry it
    pub fn to_luma16(&self) -> ImageBuffer<Luma<u16>, Vec<u16>> {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            Luma([(self.get(x, y).clamp(0.0, 1.0) * u16::MAX as f32).round() as u16])
        })
    }
}

/// One edge detection request, as issued by the CLI or a GUI action
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRequest {
    pub input: PathBuf,
    /// Explicit output path; derived from `input` when `None`
    pub output: Option<PathBuf>,
    pub method: Method,
    pub colormap: Colormap,
}

impl EdgeRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            method: Method::default(),
            colormap: Colormap::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }
}

/// What a completed request produced
#[derive(Debug, Clone)]
pub struct EdgeOutcome {
    pub output: PathBuf,
    pub edges: EdgeMap,
}
