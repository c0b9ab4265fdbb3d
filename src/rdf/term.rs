//! RDF term types: IRIs and literals.

use chrono::{DateTime, Utc};

use super::vocab::xsd;

/// An IRI reference, absolute or relative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri(String);

impl Iri {
    /// Create an IRI from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The IRI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Iri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An RDF literal: a lexical form with an optional language tag or datatype.
///
/// A literal never carries both a language tag and a datatype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    lexical: String,
    language: Option<String>,
    datatype: Option<Iri>,
}

impl Literal {
    /// A plain string literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            lexical: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// A language-tagged string literal.
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// An `xsd:integer` literal.
    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }

    /// An `xsd:dateTime` literal.
    pub fn date_time(value: DateTime<Utc>) -> Self {
        Self::typed(
            value.format("%Y-%m-%dT%H:%M:%S").to_string(),
            xsd::DATE_TIME,
        )
    }

    /// A literal with an explicit datatype IRI.
    pub fn typed(value: impl Into<String>, datatype: impl Into<Iri>) -> Self {
        Self {
            lexical: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }

    /// The lexical form.
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// The language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The datatype IRI, if any.
    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }
}

/// The object position of a statement: an IRI or a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Iri(Iri),
    Literal(Literal),
}

impl Term {
    /// The literal value, if this term is a literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            Term::Iri(_) => None,
        }
    }

    /// The IRI, if this term is one.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}
