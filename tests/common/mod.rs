#![allow(dead_code, unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from edgedetector for tests
pub use edgedetector::{
    Colormap, EdgeError, EdgeKind, EdgeMap, EdgeRequest, Method, NoViewer, detect, find_edges,
};
