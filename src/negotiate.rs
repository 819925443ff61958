//! Response format negotiation.
//!
//! The HTTP layer passes the raw `Accept` header and the `format` query
//! parameter; this module turns them into one enumerated content type with
//! the original precedence rules: a known `format` parameter maps to its
//! media type, `*/*` counts as no header, and an explicit disagreement
//! between header and parameter is an error rather than a silent pick.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Yaml,
    Turtle,
    JsonLd,
    RdfXml,
    N3,
}

impl ContentType {
    pub fn media_type(self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Yaml => "application/yaml",
            ContentType::Turtle => "text/turtle",
            ContentType::JsonLd => "application/ld+json",
            ContentType::RdfXml => "application/rdf+xml",
            ContentType::N3 => "text/n3",
        }
    }

    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            "application/json" => Some(ContentType::Json),
            "application/yaml" => Some(ContentType::Yaml),
            "text/turtle" => Some(ContentType::Turtle),
            "application/ld+json" => Some(ContentType::JsonLd),
            "application/rdf+xml" => Some(ContentType::RdfXml),
            "text/n3" => Some(ContentType::N3),
            _ => None,
        }
    }

    pub fn from_format_param(format: &str) -> Option<Self> {
        match format {
            "json" => Some(ContentType::Json),
            "yaml" | "yml" => Some(ContentType::Yaml),
            "turtle" => Some(ContentType::Turtle),
            "jsonld" | "json-ld" => Some(ContentType::JsonLd),
            "rdf" | "xml" => Some(ContentType::RdfXml),
            "n3" => Some(ContentType::N3),
            _ => None,
        }
    }

    /// Whether this is one of the RDF serializations.
    pub fn is_rdf(self) -> bool {
        matches!(
            self,
            ContentType::Turtle | ContentType::JsonLd | ContentType::RdfXml | ContentType::N3
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    #[error("bad query parameter format={format}")]
    UnknownFormat { format: String },

    #[error("bad Accept header: {accept}")]
    UnsupportedMediaType { accept: String },

    #[error("mismatch between Accept header ({accept}) and format parameter ({format})")]
    Mismatch { accept: String, format: String },
}

/// Resolve the `Accept` header and `format` parameter into one content type.
pub fn negotiate(
    accept: Option<&str>,
    format: Option<&str>,
) -> Result<ContentType, NegotiationError> {
    let from_format = match format {
        Some(format) => Some(ContentType::from_format_param(format).ok_or_else(|| {
            NegotiationError::UnknownFormat {
                format: format.to_string(),
            }
        })?),
        None => None,
    };

    let accept = accept.filter(|value| *value != "*/*");
    let from_accept = match accept {
        Some(accept) => Some(ContentType::from_media_type(accept).ok_or_else(|| {
            NegotiationError::UnsupportedMediaType {
                accept: accept.to_string(),
            }
        })?),
        None => None,
    };

    match (from_accept, from_format) {
        (Some(header), Some(param)) if header != param => Err(NegotiationError::Mismatch {
            accept: header.media_type().to_string(),
            format: param.media_type().to_string(),
        }),
        (Some(header), _) => Ok(header),
        (None, Some(param)) => Ok(param),
        (None, None) => Ok(ContentType::Json),
    }
}
