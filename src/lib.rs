pub mod colormap;
pub mod detection;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod pipeline;

pub use colormap::Colormap;
pub use detection::{EdgeDetector, detect, find_edges};
pub use error::{EdgeError, EdgeResult};
pub use models::{EdgeKind, EdgeMap, EdgeOutcome, EdgeRequest, Method};
pub use pipeline::{NoViewer, Viewer, run, run_with};

#[cfg(feature = "gui")]
pub mod gui;
