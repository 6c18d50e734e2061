use clap::Parser;
use std::path::PathBuf;

use edgedetector::{Colormap, EdgeRequest, Method, NoViewer, Viewer, logging, run};

#[derive(Parser)]
#[command(name = "edgedetector")]
#[command(about = "Detect edges in an image with the Canny, Sobel or Prewitt filter")]
struct Cli {
    /// Path to input image file
    #[arg(short, long, value_name = "IMAGE")]
    input: PathBuf,

    /// Output image path (defaults to the input name with "_edges" before the extension)
    #[arg(short, long, value_name = "IMAGE")]
    output: Option<PathBuf>,

    /// Edge detection method: canny, sobel or prewitt
    #[arg(short, long, default_value = "canny")]
    method: Method,

    /// Colormap used to display the result: gray, viridis, Greens, Blues or Reds
    #[arg(short, long, default_value = "gray")]
    cmap: Colormap,

    /// Save the result without opening the viewer
    #[arg(long)]
    no_display: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn request(&self) -> EdgeRequest {
        let mut request = EdgeRequest::new(&self.input)
            .with_method(self.method)
            .with_colormap(self.cmap);
        request.output = self.output.clone();
        request
    }
}

fn viewer(no_display: bool) -> Box<dyn Viewer> {
    if no_display {
        return Box::new(NoViewer);
    }

    #[cfg(feature = "gui")]
    {
        Box::new(edgedetector::gui::WindowViewer)
    }

    #[cfg(not(feature = "gui"))]
    {
        tracing::warn!("Built without the gui feature, not displaying the result");
        Box::new(NoViewer)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let request = args.request();
    let viewer = viewer(args.no_display);
    let outcome = run(&request, &*viewer)?;

    let (width, height) = outcome.edges.dimensions();
    println!(
        "{} edges ({}x{}) written to {}",
        request.method,
        width,
        height,
        outcome.output.display()
    );

    Ok(())
}
