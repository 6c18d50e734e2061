use std::path::PathBuf;

use iced::widget::image::Handle;
use image::{DynamicImage, RgbImage};

use crate::io;
use crate::{Colormap, EdgeMap, EdgeRequest, Method};

/// Current values of the form, turned into a request on each action
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: String,
    pub method: Method,
    pub colormap: Colormap,
}

impl FormState {
    /// `None` while no input file is selected.
    /// GUI results always go to the fixed file next to the input.
    pub fn to_request(&self) -> Option<EdgeRequest> {
        let input = self.input.trim();
        if input.is_empty() {
            return None;
        }

        let input = PathBuf::from(input);
        let output = io::gui_output_path(&input);
        Some(
            EdgeRequest::new(input)
                .with_output(output)
                .with_method(self.method)
                .with_colormap(self.colormap),
        )
    }
}

/// Rendered input and edge map shown side by side
#[derive(Debug, Clone)]
pub struct ResultPanel {
    pub original: Handle,
    pub edges: Handle,
    pub caption: String,
}

impl ResultPanel {
    pub fn render(image: &DynamicImage, edges: &EdgeMap, colormap: Colormap, caption: String) -> Self {
        Self {
            original: rgba_handle(colormap.colorize_image(image)),
            edges: rgba_handle(colormap.colorize_edges(edges)),
            caption,
        }
    }
}

fn rgba_handle(img: RgbImage) -> Handle {
    let (width, height) = img.dimensions();
    let rgba = DynamicImage::ImageRgb8(img).to_rgba8();
    Handle::from_rgba(width, height, rgba.into_raw())
}
