#![cfg(feature = "gui")]

use std::path::PathBuf;

use edgedetector::gui::FormState;
use edgedetector::{Colormap, Method};

#[test]
fn test_empty_input_gives_no_request() {
    let form = FormState::default();
    assert!(form.to_request().is_none());

    let form = FormState {
        input: "   ".to_string(),
        ..FormState::default()
    };
    assert!(form.to_request().is_none());
}

#[test]
fn test_request_targets_fixed_output() {
    let form = FormState {
        input: "test_images/cells.png".to_string(),
        method: Method::Prewitt,
        colormap: Colormap::Greens,
    };

    let request = form.to_request().expect("input is set");
    assert_eq!(request.input, PathBuf::from("test_images/cells.png"));
    assert_eq!(request.output, Some(PathBuf::from("test_images/DAPI_edges.png")));
    assert_eq!(request.method, Method::Prewitt);
    assert_eq!(request.colormap, Colormap::Greens);
}
