//! Translators from tranSMART study records to FAIR metadata graphs.

use std::sync::Arc;

use chrono::Utc;

use crate::rdf::vocab::{datacite, dcat, dct, fdp, foaf, lang, r3d, rdf, rdfs, xsd};
use crate::rdf::{Graph, Iri, Literal};
use crate::upstream::{self, StudyProvider};
use crate::error::Result;

/// Publisher of this FAIR Data Point.
pub const ORGANIZATION: &str = "http://thehyve.nl";
/// Display name of the publisher.
pub const ORGANIZATION_NAME: &str = "The Hyve";

const GPL3: &str = "https://www.gnu.org/licenses/gpl-3.0.en.html";
const THEME_TAXONOMY: &str = "https://www.wikidata.org/wiki/Q30612";
// Issue date of the repository-level metadata records.
const METADATA_ISSUED: &str = "2017-02-17T00:00:00";

/// Builds the per-resource metadata graphs, fetching study records through a
/// [`StudyProvider`]. Every call recomputes its graph from scratch.
pub struct MetadataService {
    provider: Arc<dyn StudyProvider>,
}

impl MetadataService {
    /// Create a service over the given study provider.
    pub fn new(provider: Arc<dyn StudyProvider>) -> Self {
        Self { provider }
    }

    fn base_graph() -> Graph {
        let mut graph = Graph::new();
        graph.bind("rdf", rdf::NS);
        graph.bind("rdfs", rdfs::NS);
        graph.bind("foaf", foaf::NS);
        graph.bind("dct", dct::NS);
        graph.bind("dcat", dcat::NS);
        graph.bind("r3d", r3d::NS);
        graph.bind("fdp", fdp::NS);
        graph.bind("datacite", datacite::NS);
        graph.bind("xsd", xsd::NS);
        graph
    }

    fn issued() -> Literal {
        Literal::typed(METADATA_ISSUED, xsd::DATE_TIME)
    }

    /// Identifier sub-statements: types the resource at `/{id}` as a
    /// DataCite resource identifier carrying its literal identifier string.
    fn insert_identifier_resource(graph: &mut Graph, id: &str) {
        let resource = Iri::new(format!("/{}", id));
        graph.insert(
            resource.clone(),
            rdf::TYPE,
            Iri::new(datacite::RESOURCE_IDENTIFIER),
        );
        graph.insert(resource, dct::IDENTIFIER, Literal::string(id));
    }

    /// Describe the repository itself. No upstream call.
    pub fn describe_repository(&self) -> Graph {
        let mut graph = Self::base_graph();
        let repository = Iri::new("");
        let meta_id = "repository-metadata-id";
        let repository_id = "repository-id";

        graph.insert(repository.clone(), dct::TITLE, Literal::string("TranSMART"));
        graph.insert(repository.clone(), fdp::METADATA_ISSUED, Self::issued());
        graph.insert(repository.clone(), dct::HAS_VERSION, Literal::integer(1));
        graph.insert(
            repository.clone(),
            dct::DESCRIPTION,
            Literal::lang(
                "This is the development instance of tranSMART FAIR Datapoint.",
                "en",
            ),
        );
        graph.insert(repository.clone(), dct::PUBLISHER, Iri::new(ORGANIZATION));
        graph.insert(repository.clone(), dct::LANGUAGE, Iri::new(lang::EN));
        graph.insert(repository.clone(), dct::LANGUAGE, Iri::new(lang::NL));
        graph.insert(repository.clone(), dct::LICENSE, Iri::new(GPL3));
        graph.insert(repository.clone(), dct::RIGHTS, Iri::new(GPL3));
        graph.insert(repository.clone(), r3d::DATA_CATALOG, Iri::new("/studies"));
        graph.insert(
            repository.clone(),
            fdp::METADATA_IDENTIFIER,
            Literal::string(meta_id),
        );
        graph.insert(
            repository,
            r3d::REPOSITORY_IDENTIFIER,
            Iri::new(format!("/{}", repository_id)),
        );
        Self::insert_identifier_resource(&mut graph, meta_id);
        Self::insert_identifier_resource(&mut graph, repository_id);
        graph
    }

    /// Describe the study catalog, linking every study the upstream lists.
    pub async fn describe_catalog(&self) -> Result<Graph> {
        let mut graph = Self::base_graph();
        let catalog = Iri::new("");
        let meta_id = "studies-catalog-metadata-id";
        let organization = Iri::new(ORGANIZATION);

        graph.insert(catalog.clone(), rdf::TYPE, Iri::new(dcat::CATALOG));
        graph.insert(catalog.clone(), dct::TITLE, Literal::lang("Studies", "en"));
        graph.insert(catalog.clone(), dct::HAS_VERSION, Literal::integer(1));
        graph.insert(catalog.clone(), dct::PUBLISHER, organization.clone());
        graph.insert(
            catalog.clone(),
            dcat::THEME_TAXONOMY,
            Iri::new(THEME_TAXONOMY),
        );
        graph.insert(
            catalog.clone(),
            fdp::METADATA_IDENTIFIER,
            Literal::string(meta_id),
        );
        graph.insert(catalog.clone(), fdp::METADATA_ISSUED, Self::issued());
        graph.insert(
            organization.clone(),
            rdf::TYPE,
            Iri::new(foaf::ORGANIZATION),
        );
        graph.insert(
            organization,
            foaf::NAME,
            Literal::string(ORGANIZATION_NAME),
        );
        Self::insert_identifier_resource(&mut graph, meta_id);

        let studies = self.provider.fetch_studies(None).await?;
        if let Some(list) = upstream::array_field(&studies, "studies") {
            for study in list {
                if let Some(id) = upstream::str_field(study, "id") {
                    graph.insert(
                        catalog.clone(),
                        dcat::DATASET,
                        Iri::new(format!("/studies/{}", id)),
                    );
                }
            }
        }
        Ok(graph)
    }

    /// Describe a single study as a dataset.
    ///
    /// The study must carry `id` and `ontologyTerm`; any field under
    /// `ontologyTerm.metadata` is optional and enriches the base statements.
    pub async fn describe_dataset(&self, study_id: &str) -> Result<Graph> {
        let study = self.provider.fetch_studies(Some(study_id)).await?;
        let id = upstream::required_str(&study, "id")?;
        let ontology_term = upstream::required(&study, "ontologyTerm")?;

        let mut graph = Self::base_graph();
        let dataset = Iri::new("");
        let meta_id = format!("{}-dataset-metadata-id", id);

        graph.insert(dataset.clone(), rdf::TYPE, Iri::new(dcat::DATASET_CLASS));
        graph.insert(dataset.clone(), dct::HAS_VERSION, Literal::integer(1));
        graph.insert(dataset.clone(), dct::PUBLISHER, Iri::new(ORGANIZATION));
        graph.insert(
            dataset.clone(),
            dcat::DISTRIBUTION,
            Iri::new(format!("/studies/{}/observations", id)),
        );
        graph.insert(dataset.clone(), rdfs::LABEL, Literal::string(id));
        graph.insert(
            dataset.clone(),
            fdp::METADATA_IDENTIFIER,
            Literal::string(meta_id.as_str()),
        );
        graph.insert(
            dataset.clone(),
            fdp::METADATA_ISSUED,
            Literal::date_time(Utc::now()),
        );
        Self::insert_identifier_resource(&mut graph, &meta_id);

        if let Some(metadata) = upstream::object_field(ontology_term, "metadata") {
            if let Some(title) = upstream::str_field(metadata, "Title") {
                graph.insert(dataset.clone(), dct::TITLE, Literal::string(title));
            }
            if let Some(version) = upstream::str_field(metadata, "Has Version") {
                graph.insert(dataset.clone(), dct::HAS_VERSION, Literal::string(version));
            }
            if let Some(license) = upstream::str_field(metadata, "License") {
                graph.insert(dataset.clone(), dct::LICENSE, Iri::new(license));
            }
            if let Some(theme) = upstream::str_field(metadata, "theme") {
                graph.insert(dataset.clone(), dcat::THEME, Literal::string(theme));
            }
            if let Some(publisher) = upstream::str_field(metadata, "Publisher") {
                let publisher = Iri::new(publisher);
                graph.insert(dataset, dct::PUBLISHER, publisher.clone());
                graph.insert(
                    publisher.clone(),
                    rdf::TYPE,
                    Iri::new(foaf::ORGANIZATION),
                );
                if let Some(name) = upstream::str_field(metadata, "name") {
                    graph.insert(publisher, foaf::NAME, Literal::string(name));
                }
            }
        }
        Ok(graph)
    }

    /// Describe a study's observations as a JSON distribution.
    pub async fn describe_distribution(&self, study_id: &str) -> Result<Graph> {
        let study = self.provider.fetch_studies(Some(study_id)).await?;
        let id = upstream::required_str(&study, "id")?;

        let mut graph = Self::base_graph();
        let distribution = Iri::new("");
        let meta_id = format!("{}-distribution-metadata-id", id);

        graph.insert(
            distribution.clone(),
            rdf::TYPE,
            Iri::new(dcat::DISTRIBUTION_CLASS),
        );
        graph.insert(
            distribution.clone(),
            dct::TITLE,
            Literal::string(format!("{} JSON", study_id)),
        );
        graph.insert(distribution.clone(), dct::HAS_VERSION, Literal::integer(1));
        graph.insert(
            distribution.clone(),
            fdp::METADATA_IDENTIFIER,
            Literal::string(meta_id.as_str()),
        );
        graph.insert(distribution.clone(), fdp::METADATA_ISSUED, Self::issued());
        graph.insert(
            distribution.clone(),
            dcat::MEDIA_TYPE,
            Literal::string("application/json"),
        );
        graph.insert(
            distribution,
            dcat::DOWNLOAD_URL,
            Iri::new(format!("/studies/{}/observations", id)),
        );
        Self::insert_identifier_resource(&mut graph, &meta_id);
        Ok(graph)
    }
}
