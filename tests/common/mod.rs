#![allow(dead_code)]

use prefix_registry::{
    Attributable, Collection, Provider, Registry, RegistryManager, RegistrySnapshot, Resource,
};
use url::Url;

pub const CHARLIE_ORCID: &str = "0000-0003-4423-4370";

pub fn charlie() -> Attributable {
    Attributable::new("Charles Tapley Hoyt").with_orcid(CHARLIE_ORCID)
}

pub fn fixture_resources() -> Vec<Resource> {
    let mut doid = Resource::new("doid", "Human Disease Ontology")
        .with_pattern(r"^\d+$")
        .with_provider(Provider::new(
            "obofoundry",
            "OBO Foundry",
            "http://purl.obolibrary.org/obo/DOID_$1",
        ))
        .with_provider(Provider::new(
            "ols",
            "Ontology Lookup Service",
            "https://www.ebi.ac.uk/ols/ontologies/doid/terms?obo_id=DOID:$1",
        ))
        .with_mapping("miriam", "doid")
        .with_mapping("obofoundry", "DOID")
        .with_mapping("n2t", "doid")
        .with_mapping("wikidata", "P699")
        .with_synonym("DOID");
    doid.contributor = Some(charlie());

    let chebi = Resource::new("chebi", "Chemical Entities of Biological Interest")
        .with_pattern(r"^\d+$")
        .with_provider(Provider::new(
            "chebi",
            "ChEBI",
            "https://www.ebi.ac.uk/chebi/searchId.do?chebiId=CHEBI:$1",
        ))
        .with_mapping("miriam", "chebi")
        .with_mapping("obofoundry", "CHEBI")
        .with_mapping("n2t", "chebi");

    let mut go = Resource::new("go", "Gene Ontology")
        .with_pattern(r"^\d{7}$")
        .with_provider(Provider::new(
            "obofoundry",
            "OBO Foundry",
            "http://purl.obolibrary.org/obo/GO_$1",
        ))
        .with_mapping("miriam", "go")
        .with_mapping("obofoundry", "GO")
        .with_synonym("gene ontology");
    go.preferred_prefix = Some("GO".to_string());
    go.reviewer = Some(charlie());

    // Mapped to n2t only, and deliberately without providers.
    let mesh = Resource::new("mesh", "Medical Subject Headings").with_mapping("n2t", "mesh");

    // Name contains "doid" only as a substring; must rank below the exact hit.
    let pdoid = Resource::new("pdoid", "Pseudo DOID Registry");

    vec![doid, chebi, go, mesh, pdoid]
}

pub fn fixture_metaregistry() -> Vec<Registry> {
    let miriam = Registry {
        metaprefix: "miriam".to_string(),
        name: "Identifiers.org".to_string(),
        homepage: Url::parse("https://identifiers.org").unwrap(),
        description: None,
        provider_uri_format: Some("https://registry.identifiers.org/registry/$1".to_string()),
        contact: Some(charlie()),
    };

    let n2t = Registry {
        metaprefix: "n2t".to_string(),
        name: "Name-to-Thing".to_string(),
        homepage: Url::parse("https://n2t.net").unwrap(),
        description: None,
        provider_uri_format: None,
        contact: None,
    };

    let obofoundry = Registry {
        metaprefix: "obofoundry".to_string(),
        name: "OBO Foundry".to_string(),
        homepage: Url::parse("https://obofoundry.org").unwrap(),
        description: None,
        provider_uri_format: Some("https://obofoundry.org/ontology/$1".to_string()),
        contact: None,
    };

    let wikidata = Registry {
        metaprefix: "wikidata".to_string(),
        name: "Wikidata".to_string(),
        homepage: Url::parse("https://www.wikidata.org").unwrap(),
        description: None,
        provider_uri_format: None,
        contact: None,
    };

    vec![miriam, n2t, obofoundry, wikidata]
}

pub fn fixture_collections() -> Vec<Collection> {
    vec![Collection {
        identifier: "0000001".to_string(),
        name: "Disease and chemistry".to_string(),
        description: None,
        resources: vec!["doid".to_string(), "chebi".to_string(), "mesh".to_string()],
        authors: vec![charlie()],
    }]
}

pub fn fixture_snapshot() -> RegistrySnapshot {
    RegistrySnapshot::build(
        fixture_resources(),
        fixture_metaregistry(),
        fixture_collections(),
        false,
    )
    .expect("fixture snapshot builds")
}

pub fn fixture_manager() -> RegistryManager {
    RegistryManager::new(fixture_snapshot())
}
