use anyhow::Result;
use image::DynamicImage;
use tracing::info;

use crate::colormap::Colormap;
use crate::detection::EdgeDetector;
use crate::io;
use crate::models::{EdgeMap, EdgeOutcome, EdgeRequest};

/// Display collaborator, shows the input next to its edge map.
/// Implementations block until the viewer is dismissed.
pub trait Viewer {
    fn show(&self, image: &DynamicImage, edges: &EdgeMap, colormap: Colormap) -> Result<()>;
}

/// Viewer for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NoViewer;

impl Viewer for NoViewer {
    fn show(&self, _image: &DynamicImage, _edges: &EdgeMap, _colormap: Colormap) -> Result<()> {
        Ok(())
    }
}

/// Read, detect, save, then display. Nothing is written when reading fails.
pub fn run(request: &EdgeRequest, viewer: &dyn Viewer) -> Result<EdgeOutcome> {
    run_with(&EdgeDetector::new(), request, viewer)
}

pub fn run_with(
    detector: &EdgeDetector,
    request: &EdgeRequest,
    viewer: &dyn Viewer,
) -> Result<EdgeOutcome> {
    info!("Loading image: {}", request.input.display());
    let img = io::read_image(&request.input)?;
    info!("Image loaded: {}x{}", img.width(), img.height());

    info!("Detecting edges with {}", request.method);
    let edges = detector.detect(&img, request.method);

    let output = request
        .output
        .clone()
        .unwrap_or_else(|| io::derive_output_path(&request.input));
    io::save_edge_map(&edges, &output)?;
    info!("Saved edges to {}", output.display());

    viewer.show(&img, &edges, request.colormap)?;

    Ok(EdgeOutcome { output, edges })
}
