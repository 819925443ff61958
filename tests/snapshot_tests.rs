mod common;

use common::{fixture_collections, fixture_manager, fixture_metaregistry, fixture_resources};
use prefix_registry::{
    Provider, RegistryConfig, RegistryError, RegistryManager, RegistrySnapshot, Resource,
    SnapshotLoader,
};

#[test]
fn loader_round_trips_through_json_documents() {
    let dir = tempfile::tempdir().unwrap();
    let config = RegistryConfig::from_dir(dir.path());

    std::fs::write(
        &config.registry_path,
        serde_json::to_vec_pretty(&fixture_resources()).unwrap(),
    )
    .unwrap();
    std::fs::write(
        &config.metaregistry_path,
        serde_json::to_vec_pretty(&fixture_metaregistry()).unwrap(),
    )
    .unwrap();
    std::fs::write(
        &config.collections_path,
        serde_json::to_vec_pretty(&fixture_collections()).unwrap(),
    )
    .unwrap();

    let snapshot = SnapshotLoader::new(config).load().unwrap();
    assert_eq!(snapshot.resources().len(), 5);
    assert_eq!(snapshot.metaregistry().len(), 4);
    assert_eq!(snapshot.collections().len(), 1);
    assert!(snapshot.warnings().is_empty());

    // Compiled patterns survive the round trip.
    let doid = snapshot.resource("doid").unwrap();
    assert!(snapshot.patterns().validate(doid, "4325"));
    assert!(!snapshot.patterns().validate(doid, "not-a-doid"));
}

#[test]
fn missing_collections_document_means_no_collections() {
    let dir = tempfile::tempdir().unwrap();
    let config = RegistryConfig::from_dir(dir.path());

    std::fs::write(
        &config.registry_path,
        serde_json::to_vec_pretty(&fixture_resources()).unwrap(),
    )
    .unwrap();
    std::fs::write(
        &config.metaregistry_path,
        serde_json::to_vec_pretty(&fixture_metaregistry()).unwrap(),
    )
    .unwrap();

    let snapshot = SnapshotLoader::new(config).load().unwrap();
    assert!(snapshot.collections().is_empty());
}

#[test]
fn missing_registry_document_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SnapshotLoader::new(RegistryConfig::from_dir(dir.path()))
        .load()
        .unwrap_err();
    assert!(matches!(err, RegistryError::Load { .. }));
}

#[test]
fn bad_pattern_degrades_to_always_pass_with_warning() {
    let broken = Resource::new("broken", "Broken Patterns Inc").with_pattern(r"[unclosed");
    let snapshot =
        RegistrySnapshot::build(vec![broken], fixture_metaregistry(), vec![], false).unwrap();

    assert_eq!(snapshot.warnings().len(), 1);
    assert_eq!(snapshot.warnings()[0].prefix, "broken");

    let record = snapshot.resource("broken").unwrap();
    assert!(snapshot.patterns().validate(record, "anything goes"));
}

#[test]
fn bad_pattern_fails_the_build_in_strict_mode() {
    let broken = Resource::new("broken", "Broken Patterns Inc").with_pattern(r"[unclosed");
    let err = RegistrySnapshot::build(vec![broken], fixture_metaregistry(), vec![], true)
        .unwrap_err();
    assert!(matches!(err, RegistryError::Configuration { .. }));
}

#[test]
fn provider_template_without_placeholder_is_disabled_with_warning() {
    let resource = Resource::new("odd", "Odd Templates")
        .with_provider(Provider::new("fixed", "No Placeholder", "http://example.org/record"))
        .with_provider(Provider::new("ok", "Fine", "http://example.org/$1"));
    let snapshot = RegistrySnapshot::build(vec![resource], vec![], vec![], false).unwrap();

    assert_eq!(snapshot.warnings().len(), 1);
    let manager = RegistryManager::from_arc(std::sync::Arc::new(snapshot));
    let providers = manager.get_providers("odd", "123").unwrap();
    assert_eq!(providers.len(), 1);
    assert_eq!(providers["ok"], "http://example.org/123");
}

#[test]
fn duplicate_canonical_prefix_fails_the_build() {
    let first = Resource::new("dup", "First");
    let second = Resource::new("dup", "Second");
    let err = RegistrySnapshot::build(vec![first, second], vec![], vec![], false).unwrap_err();
    assert!(matches!(err, RegistryError::Load { .. }));
}

#[test]
fn prefix_normalization_resolves_case_synonyms_and_preferred_form() {
    let manager = fixture_manager();

    assert_eq!(manager.normalize_prefix("doid"), Some("doid"));
    assert_eq!(manager.normalize_prefix("DOID"), Some("doid"));
    assert_eq!(manager.normalize_prefix("  DOID  "), Some("doid"));
    // go's preferred prefix is GO; its synonym is "gene ontology".
    assert_eq!(manager.normalize_prefix("GO"), Some("go"));
    assert_eq!(manager.normalize_prefix("gene ontology"), Some("go"));
    assert_eq!(manager.normalize_prefix("unheard-of"), None);

    assert_eq!(manager.get_resource("DOID").unwrap().prefix, "doid");
}

#[test]
fn collection_context_maps_members_to_uri_prefixes() {
    let manager = fixture_manager();

    let context = manager.get_collection_context("0000001").unwrap();
    assert_eq!(
        context["doid"],
        "http://purl.obolibrary.org/obo/DOID_"
    );
    // mesh has no providers, so it contributes nothing.
    assert!(!context.contains_key("mesh"));

    let err = manager.get_collection_context("9999999").unwrap_err();
    assert!(matches!(err, RegistryError::CollectionNotFound { .. }));
}

#[test]
fn ad_hoc_context_splits_lists_and_skips_unknowns() {
    let manager = fixture_manager();

    let context = manager.ad_hoc_context(["go,doid", "unknown", "mesh", "chebi"]);
    assert_eq!(context.len(), 3);
    assert_eq!(context["go"], "http://purl.obolibrary.org/obo/GO_");
    assert!(context.contains_key("doid"));
    assert!(context.contains_key("chebi"));
    // mesh has no providers at all, so it contributes nothing.
    assert!(!context.contains_key("mesh"));
}
