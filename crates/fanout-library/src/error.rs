use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read library file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed library XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attr(#[from] AttrError),

    #[error("<{element}> is missing its \"{attribute}\" attribute")]
    MissingAttribute { element: String, attribute: String },

    #[error("attribute \"{attribute}\" has non-numeric value \"{value}\"")]
    InvalidNumber { attribute: String, value: String },

    #[error("unknown pad shape \"{shape}\"")]
    UnknownPadShape { shape: String },

    #[error("package \"{name}\" not found in library")]
    PackageNotFound { name: String },
}
