//! Turtle serializer for per-request metadata graphs.
//!
//! Writes one `@prefix` line per binding, then one predicate list per
//! subject in first-seen order. IRIs are compacted to `prefix:local` where a
//! binding matches; `rdf:type` is written as `a`.

use super::graph::{Graph, Statement};
use super::term::{Iri, Literal, Term};
use super::vocab::rdf;

/// Content type of the serialized output.
pub const MEDIA_TYPE: &str = "text/turtle; charset=utf-8";

/// Serializes a graph to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(2048);

    for (prefix, namespace) in graph.prefixes() {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, namespace));
    }
    if !graph.prefixes().is_empty() && !graph.is_empty() {
        out.push('\n');
    }

    let mut subjects: Vec<&Iri> = Vec::new();
    for statement in graph.statements() {
        if !subjects.contains(&&statement.subject) {
            subjects.push(&statement.subject);
        }
    }

    for subject in subjects {
        let block: Vec<&Statement> = graph
            .statements()
            .iter()
            .filter(|s| &s.subject == subject)
            .collect();
        out.push_str(&render_iri(subject, graph));
        out.push('\n');
        for (i, statement) in block.iter().enumerate() {
            let terminator = if i + 1 == block.len() { " ." } else { " ;" };
            out.push_str(&format!(
                "  {} {}{}\n",
                render_predicate(&statement.predicate, graph),
                render_term(&statement.object, graph),
                terminator
            ));
        }
        out.push('\n');
    }

    out
}

fn render_predicate(predicate: &Iri, graph: &Graph) -> String {
    if predicate.as_str() == rdf::TYPE {
        return "a".to_string();
    }
    render_iri(predicate, graph)
}

fn render_term(term: &Term, graph: &Graph) -> String {
    match term {
        Term::Iri(iri) => render_iri(iri, graph),
        Term::Literal(literal) => render_literal(literal, graph),
    }
}

fn render_iri(iri: &Iri, graph: &Graph) -> String {
    for (prefix, namespace) in graph.prefixes() {
        if let Some(local) = iri.as_str().strip_prefix(namespace.as_str()) {
            if is_local_name(local) {
                return format!("{}:{}", prefix, local);
            }
        }
    }
    format!("<{}>", iri.as_str())
}

fn render_literal(literal: &Literal, graph: &Graph) -> String {
    let quoted = format!("\"{}\"", escape(literal.lexical()));
    if let Some(language) = literal.language() {
        return format!("{}@{}", quoted, language);
    }
    if let Some(datatype) = literal.datatype() {
        return format!("{}^^{}", quoted, render_iri(datatype, graph));
    }
    quoted
}

// A conservative subset of Turtle's PN_LOCAL; anything else falls back to
// the angle-bracket form.
fn is_local_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::vocab::{dcat, dct, lang, rdf, xsd};

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph.bind("rdf", rdf::NS);
        graph.bind("dct", dct::NS);
        graph.bind("dcat", dcat::NS);
        graph.bind("lang", lang::NS);
        graph.bind("xsd", xsd::NS);
        graph
    }

    #[test]
    fn writes_prefix_declarations() {
        let mut graph = sample_graph();
        graph.insert(Iri::new(""), dct::TITLE, Literal::string("TranSMART"));
        let turtle = to_turtle(&graph);
        assert!(turtle.contains("@prefix dct: <http://purl.org/dc/terms/> ."));
        assert!(turtle.contains("@prefix lang: <http://id.loc.gov/vocabulary/iso639-1/> ."));
    }

    #[test]
    fn compacts_rdf_type_to_a() {
        let mut graph = sample_graph();
        graph.insert(Iri::new(""), rdf::TYPE, Iri::new(dcat::CATALOG));
        let turtle = to_turtle(&graph);
        assert!(turtle.contains("  a dcat:Catalog ."));
    }

    #[test]
    fn relative_iris_use_angle_brackets() {
        let mut graph = sample_graph();
        graph.insert(Iri::new(""), dcat::DATASET, Iri::new("/studies/S1"));
        let turtle = to_turtle(&graph);
        assert!(turtle.contains("<>\n"));
        assert!(turtle.contains("dcat:dataset </studies/S1> ."));
    }

    #[test]
    fn renders_language_and_typed_literals() {
        let mut graph = sample_graph();
        let subject = Iri::new("");
        graph.insert(subject.clone(), dct::TITLE, Literal::lang("Studies", "en"));
        graph.insert(subject, dct::HAS_VERSION, Literal::integer(1));
        let turtle = to_turtle(&graph);
        assert!(turtle.contains("dct:title \"Studies\"@en ;"));
        assert!(turtle.contains("dct:hasVersion \"1\"^^xsd:integer ."));
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        let mut graph = sample_graph();
        graph.insert(
            Iri::new(""),
            dct::TITLE,
            Literal::string("a \"quoted\" \\ title"),
        );
        let turtle = to_turtle(&graph);
        assert!(turtle.contains(r#""a \"quoted\" \\ title""#));
    }

    #[test]
    fn groups_statements_by_subject() {
        let mut graph = sample_graph();
        let root = Iri::new("");
        let meta = Iri::new("/repository-metadata-id");
        graph.insert(root.clone(), dct::TITLE, Literal::string("TranSMART"));
        graph.insert(meta.clone(), dct::IDENTIFIER, Literal::string("repository-metadata-id"));
        graph.insert(root, dct::HAS_VERSION, Literal::integer(1));
        let turtle = to_turtle(&graph);
        // Both statements about <> are folded into a single block
        let root_block = turtle
            .split("\n\n")
            .find(|b| b.starts_with("<>"))
            .unwrap_or_default();
        assert!(root_block.contains("dct:title"));
        assert!(root_block.contains("dct:hasVersion"));
        assert_eq!(turtle.matches("<>\n").count(), 1);
    }
}
