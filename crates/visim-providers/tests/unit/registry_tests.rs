//! Tests for provider registry resolution
//!
//! Uses the real linkme registries with the providers of this crate
//! linked, so resolution-by-name is validated end to end.

// Force linkme registration of all providers
extern crate visim_providers;

use visim_application::ports::registry::{
    list_catalog_providers, list_embedding_providers, resolve_catalog_provider,
    resolve_embedding_provider, CatalogProviderConfig, EmbeddingProviderConfig,
};

#[test]
fn all_embedding_providers_are_registered() {
    let names: Vec<&str> = list_embedding_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert!(names.contains(&"clip-server"));
    assert!(names.contains(&"null"));
}

#[test]
fn all_catalog_providers_are_registered() {
    let names: Vec<&str> = list_catalog_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert!(names.contains(&"memory"));
    assert!(names.contains(&"filesystem"));
}

#[test]
fn resolves_null_embedding_provider_with_dimensions() {
    let provider =
        resolve_embedding_provider(&EmbeddingProviderConfig::new("null").with_dimensions(128))
            .expect("null provider resolves");
    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.dimensions(), 128);
}

#[test]
fn resolves_clip_server_provider_with_defaults() {
    let provider = resolve_embedding_provider(&EmbeddingProviderConfig::new("clip-server"))
        .expect("clip-server provider resolves");
    assert_eq!(provider.provider_name(), "clip-server");
    assert_eq!(provider.dimensions(), 512);
}

#[test]
fn resolves_memory_catalog_provider() {
    let provider = resolve_catalog_provider(&CatalogProviderConfig::new("memory"))
        .expect("memory provider resolves");
    assert_eq!(provider.provider_name(), "memory");
}

#[test]
fn resolves_filesystem_catalog_provider() {
    let provider = resolve_catalog_provider(
        &CatalogProviderConfig::new("filesystem")
            .with_connection("./data")
            .with_database("shop")
            .with_collection("products"),
    )
    .expect("filesystem provider resolves");
    assert_eq!(provider.provider_name(), "filesystem");
}

#[test]
fn unknown_names_report_the_available_set() {
    let err = resolve_embedding_provider(&EmbeddingProviderConfig::new("bogus")).unwrap_err();
    assert!(err.contains("bogus"));
    assert!(err.contains("clip-server"));

    let err = resolve_catalog_provider(&CatalogProviderConfig::new("bogus")).unwrap_err();
    assert!(err.contains("memory"));
}
