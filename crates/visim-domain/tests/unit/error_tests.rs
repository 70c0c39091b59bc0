//! Tests for the error taxonomy

use visim_domain::error::Error;

#[test]
fn constructor_helpers_build_expected_variants() {
    assert!(matches!(
        Error::image_fetch("timeout"),
        Error::ImageFetch { .. }
    ));
    assert!(matches!(
        Error::image_decode("not an image"),
        Error::ImageDecode { .. }
    ));
    assert!(matches!(
        Error::embedding("model failed"),
        Error::EmbeddingProvider { .. }
    ));
    assert!(matches!(Error::catalog("down"), Error::Catalog { .. }));
}

#[test]
fn dimension_mismatch_message_names_both_sizes() {
    let message = Error::dimension_mismatch(512, 768).to_string();
    assert!(message.contains("512"));
    assert!(message.contains("768"));
}

#[test]
fn malformed_embedding_message_identifies_the_entry() {
    let err = Error::malformed_embedding("prod-1", "img.jpg", "wrong dimension");
    let message = err.to_string();
    assert!(message.contains("prod-1"));
    assert!(message.contains("img.jpg"));
    assert!(message.contains("wrong dimension"));
}

#[test]
fn scan_faults_are_recoverable_and_request_faults_are_not() {
    assert!(Error::malformed_embedding("p", "u", "r").is_recoverable_scan_fault());
    assert!(Error::dimension_mismatch(2, 3).is_recoverable_scan_fault());
    assert!(Error::degenerate_vector("zero").is_recoverable_scan_fault());

    assert!(!Error::image_fetch("net").is_recoverable_scan_fault());
    assert!(!Error::catalog("down").is_recoverable_scan_fault());
    assert!(!Error::internal("bug").is_recoverable_scan_fault());
}

#[test]
fn source_errors_are_preserved_for_diagnostics() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = Error::image_fetch_with_source("fetching query image", io);
    assert!(std::error::Error::source(&err).is_some());
}
