mod common;

use common::*;
use image::GenericImageView;

#[test]
fn test_output_shape_matches_input() {
    let img = rgb_scene(37, 23);
    for method in ["canny", "sobel", "prewitt"] {
        let edges = find_edges(&img, method).expect("valid method");
        assert_eq!(edges.dimensions(), img.dimensions(), "method {}", method);
        assert_eq!(edges.samples().len(), 37 * 23);
    }
}

#[test]
fn test_unsupported_method_is_rejected() {
    let img = step_image(16, 16);
    for name in ["laplace", "", "canny2", "sobel prewitt"] {
        match find_edges(&img, name) {
            Err(EdgeError::UnsupportedMethod(got)) => assert_eq!(got, name),
            other => panic!("expected UnsupportedMethod for '{}', got {:?}", name, other),
        }
    }
}

#[test]
fn test_unsupported_method_message_names_the_input() {
    let err = find_edges(&step_image(8, 8), "roberts").unwrap_err();
    assert!(err.to_string().contains("'roberts'"));
}

#[test]
fn test_method_names_are_parsed_leniently() {
    assert_eq!("Sobel".parse::<Method>().unwrap(), Method::Sobel);
    assert_eq!(" prewitt ".parse::<Method>().unwrap(), Method::Prewitt);
    assert_eq!("CANNY".parse::<Method>().unwrap(), Method::Canny);
    assert_eq!(Method::default(), Method::Canny);
    for method in Method::ALL {
        assert_eq!(method.as_str().parse::<Method>().unwrap(), method);
    }
}

#[test]
fn test_canny_is_a_binary_mask() {
    let edges = detect(&centered_step_image(96, 96), Method::Canny);
    assert_eq!(edges.kind(), EdgeKind::Mask);
    assert!(edges.samples().iter().all(|v| *v == 0.0 || *v == 1.0));
    assert!(edges.edge_count() > 0);

    let row = 48;
    let found = (45..=50).any(|x| edges.get(x, row) == 1.0);
    assert!(found, "expected an edge next to the step");
}

#[test]
fn test_canny_on_flat_image_finds_nothing() {
    let edges = detect(&uniform_image(40, 40, 120), Method::Canny);
    assert_eq!(edges.edge_count(), 0);
}

#[test]
fn test_gradient_maps_are_non_negative() {
    let img = rgb_scene(50, 40);
    for method in [Method::Sobel, Method::Prewitt] {
        let edges = detect(&img, method);
        assert_eq!(edges.kind(), EdgeKind::Magnitude);
        assert!(edges.samples().iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!(edges.max_value() > 0.0);
    }
}

#[test]
fn test_gradient_magnitude_of_full_step() {
    // a 0 -> 255 step gives sqrt(1/2) with both kernels
    let img = step_image(32, 32);
    for method in [Method::Sobel, Method::Prewitt] {
        let edges = detect(&img, method);
        assert!((edges.max_value() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-4);
        assert_eq!(edges.get(5, 16), 0.0);
        assert_eq!(edges.get(26, 16), 0.0);
        assert!(edges.get(15, 16) > 0.7);
        assert!(edges.get(16, 16) > 0.7);
    }
}

#[test]
fn test_flat_image_has_zero_gradient() {
    let img = uniform_image(20, 20, 200);
    assert_eq!(detect(&img, Method::Sobel).max_value(), 0.0);
    assert_eq!(detect(&img, Method::Prewitt).max_value(), 0.0);
}

#[test]
fn test_detection_is_deterministic() {
    let img = rgb_scene(64, 48);
    for method in Method::ALL {
        let first = detect(&img, method);
        let second = detect(&img, method);
        assert_eq!(first, second);
    }
}

#[test]
fn test_detector_sigma_is_configurable() {
    let img = centered_step_image(64, 64);
    let detector = edgedetector::EdgeDetector::new().with_canny_sigma(1.0);
    assert_eq!(detector.canny_sigma, 1.0);
    let edges = detector.find_edges(&img, "canny").unwrap();
    assert_eq!(edges.dimensions(), (64, 64));
    assert!(edges.edge_count() > 0);
}

#[test]
fn test_empty_image_keeps_its_shape() {
    let img = image::DynamicImage::ImageLuma8(image::GrayImage::new(0, 0));
    for method in Method::ALL {
        let edges = detect(&img, method);
        assert_eq!(edges.dimensions(), (0, 0), "method {}", method);
        assert_eq!(edges.kind(), method.edge_kind());
        assert_eq!(edges.edge_count(), 0);
    }

    let edges = find_edges(&uniform_image(0, 7, 10), "canny").unwrap();
    assert_eq!(edges.dimensions(), (0, 7));
}

#[test]
fn test_non_positive_sigma_skips_smoothing() {
    let img = centered_step_image(32, 32);
    for sigma in [0.0, -2.5, f32::NAN] {
        let detector = edgedetector::EdgeDetector::new().with_canny_sigma(sigma);
        assert_eq!(detector.canny_sigma, 0.0);
        let edges = detector.detect(&img, Method::Canny);
        assert_eq!(edges.dimensions(), (32, 32));
        assert!(edges.samples().iter().all(|v| *v == 0.0 || *v == 1.0));
    }

    // the public field bypasses the builder
    let detector = edgedetector::EdgeDetector { canny_sigma: -1.0 };
    assert_eq!(detector.detect(&img, Method::Canny).dimensions(), (32, 32));
}
