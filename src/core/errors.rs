use std::path::PathBuf;
use thiserror::Error as ThisError;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors returned while loading the AWS IP Ranges or querying the loaded [Catalog].
///
/// [Catalog]: crate::Catalog
#[derive(Debug, ThisError)]
pub enum Error {
    /// Retrieving the AWS IP Ranges document from the URL failed (transport failure or a
    /// non-2xx response).
    #[error("failed to fetch the AWS IP Ranges from `{url}`: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The cache file could not be read or written.
    #[error("failed to access the AWS IP Ranges cache file `{}`: {source}", path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON document, query address/CIDR, or catalog record.
    #[error("parse error: {0}")]
    Parse(String),

    /// Records matching a single query reported different regions.
    #[error("inconsistent data: `{query}` matched prefixes in multiple regions: {}", regions.join(", "))]
    InconsistentData { query: String, regions: Vec<String> },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Parse(format!("invalid AWS IP Ranges JSON: {error}"))
    }
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
