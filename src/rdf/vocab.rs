//! Vocabulary IRI constants for the metadata statements.
//!
//! One module per namespace; each exposes its namespace IRI as `NS` plus the
//! terms the translators actually use.

/// `rdf:` — RDF core.
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// `rdfs:` — RDF Schema.
pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// `foaf:` — Friend of a Friend.
pub mod foaf {
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";
    pub const ORGANIZATION: &str = "http://xmlns.com/foaf/0.1/Organization";
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
}

/// `dct:` — Dublin Core terms.
pub mod dct {
    pub const NS: &str = "http://purl.org/dc/terms/";
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const HAS_VERSION: &str = "http://purl.org/dc/terms/hasVersion";
    pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    pub const LANGUAGE: &str = "http://purl.org/dc/terms/language";
    pub const LICENSE: &str = "http://purl.org/dc/terms/license";
    pub const RIGHTS: &str = "http://purl.org/dc/terms/rights";
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
}

/// `dcat:` — Data Catalog Vocabulary.
pub mod dcat {
    pub const NS: &str = "http://www.w3.org/ns/dcat#";
    pub const CATALOG: &str = "http://www.w3.org/ns/dcat#Catalog";
    pub const DATASET_CLASS: &str = "http://www.w3.org/ns/dcat#Dataset";
    pub const DISTRIBUTION_CLASS: &str = "http://www.w3.org/ns/dcat#Distribution";
    pub const THEME_TAXONOMY: &str = "http://www.w3.org/ns/dcat#themeTaxonomy";
    pub const THEME: &str = "http://www.w3.org/ns/dcat#theme";
    pub const DATASET: &str = "http://www.w3.org/ns/dcat#dataset";
    pub const DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#distribution";
    pub const MEDIA_TYPE: &str = "http://www.w3.org/ns/dcat#mediaType";
    pub const DOWNLOAD_URL: &str = "http://www.w3.org/ns/dcat#downloadURL";
}

/// `r3d:` — re3data repository description schema.
pub mod r3d {
    pub const NS: &str = "http://www.re3data.org/schema/3-0#";
    pub const DATA_CATALOG: &str = "http://www.re3data.org/schema/3-0#dataCatalog";
    pub const REPOSITORY_IDENTIFIER: &str = "http://www.re3data.org/schema/3-0#repositoryIdentifier";
}

/// `fdp:` — FAIR Data Point ontology.
pub mod fdp {
    pub const NS: &str = "http://rdf.biosemantics.org/ontologies/fdp-o#";
    pub const METADATA_ISSUED: &str = "http://rdf.biosemantics.org/ontologies/fdp-o#metadataIssued";
    pub const METADATA_IDENTIFIER: &str =
        "http://rdf.biosemantics.org/ontologies/fdp-o#metadataIdentifier";
}

/// `datacite:` — DataCite ontology.
pub mod datacite {
    pub const NS: &str = "http://purl.org/spar/datacite/";
    pub const RESOURCE_IDENTIFIER: &str = "http://purl.org/spar/datacite/ResourceIdentifier";
}

/// `lang:` — ISO 639-1 language identifiers.
pub mod lang {
    pub const NS: &str = "http://id.loc.gov/vocabulary/iso639-1/";
    pub const EN: &str = "http://id.loc.gov/vocabulary/iso639-1/en";
    pub const NL: &str = "http://id.loc.gov/vocabulary/iso639-1/nl";
}

/// `xsd:` — XML Schema datatypes.
pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}
