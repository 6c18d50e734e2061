use std::fmt;
use std::str::FromStr;

use image::{DynamicImage, Rgb, RgbImage};

use crate::error::EdgeError;
use crate::models::EdgeMap;

/// Display colour map, only used for visualisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Colormap {
    #[default]
    Gray,
    Viridis,
    Greens,
    Blues,
    Reds,
}

// Evenly spaced anchor colours, interpolated linearly
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

const GREENS: [[u8; 3]; 9] = [
    [247, 252, 245],
    [229, 245, 224],
    [199, 233, 192],
    [161, 217, 155],
    [116, 196, 118],
    [65, 171, 93],
    [35, 139, 69],
    [0, 109, 44],
    [0, 68, 27],
];

const BLUES: [[u8; 3]; 9] = [
    [247, 251, 255],
    [222, 235, 247],
    [198, 219, 239],
    [158, 202, 225],
    [107, 174, 214],
    [66, 146, 198],
    [33, 113, 181],
    [8, 81, 156],
    [8, 48, 107],
];

const REDS: [[u8; 3]; 9] = [
    [255, 245, 240],
    [254, 224, 210],
    [252, 187, 161],
    [252, 146, 114],
    [251, 106, 74],
    [239, 59, 44],
    [203, 24, 29],
    [165, 15, 21],
    [103, 0, 13],
];

const GRAY: [[u8; 3]; 2] = [[0, 0, 0], [255, 255, 255]];

impl Colormap {
    pub const ALL: [Colormap; 5] = [
        Colormap::Gray,
        Colormap::Viridis,
        Colormap::Greens,
        Colormap::Blues,
        Colormap::Reds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Colormap::Gray => "gray",
            Colormap::Viridis => "viridis",
            Colormap::Greens => "Greens",
            Colormap::Blues => "Blues",
            Colormap::Reds => "Reds",
        }
    }

    fn anchors(&self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Gray => &GRAY,
            Colormap::Viridis => &VIRIDIS,
            Colormap::Greens => &GREENS,
            Colormap::Blues => &BLUES,
            Colormap::Reds => &REDS,
        }
    }

    /// Colour for `value`, clamped to [0, 1]
    pub fn map(&self, value: f32) -> Rgb<u8> {
        let anchors = self.anchors();
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };

        let position = value * (anchors.len() - 1) as f32;
        let lower = (position.floor() as usize).min(anchors.len() - 2);
        let t = position - lower as f32;

        let a = anchors[lower];
        let b = anchors[lower + 1];
        let channel = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8;
        Rgb([channel(0), channel(1), channel(2)])
    }

    /// Render an edge map, normalised by its maximum response
    pub fn colorize_edges(&self, edges: &EdgeMap) -> RgbImage {
        let max = edges.max_value();
        let scale = if max > 0.0 { 1.0 / max } else { 0.0 };
        RgbImage::from_fn(edges.width(), edges.height(), |x, y| {
            self.map(edges.get(x, y) * scale)
        })
    }

    /// Render the luminance of a source image
    pub fn colorize_image(&self, img: &DynamicImage) -> RgbImage {
        let gray = img.to_luma8();
        RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
            self.map(gray.get_pixel(x, y)[0] as f32 / u8::MAX as f32)
        })
    }
}

impl FromStr for Colormap {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gray" | "grey" => Ok(Colormap::Gray),
            "viridis" => Ok(Colormap::Viridis),
            "greens" => Ok(Colormap::Greens),
            "blues" => Ok(Colormap::Blues),
            "reds" => Ok(Colormap::Reds),
            _ => Err(EdgeError::UnsupportedColormap(s.to_string())),
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
