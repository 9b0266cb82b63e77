//! Crate-wide error taxonomy.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A geometry violated its arity or vertex invariants. `context` names
    /// the placemark or table row the geometry came from.
    #[error("{context}: {reason}")]
    MalformedGeometry { context: String, reason: String },

    /// A coordinate table lacks a required column after name normalization.
    #[error("coordinate table is missing a '{0}' column")]
    InvalidSchema(&'static str),

    /// A containment query was made against a site with no closed region.
    #[error("containment queries are not supported for boundary lines")]
    NoContainment,

    #[error("failed to parse KML document: {0}")]
    Kml(#[from] kml::Error),

    #[error("failed to read coordinate table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize map data: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to parse map data: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedGeometry {
            context: context.into(),
            reason: reason.into(),
        }
    }
}
