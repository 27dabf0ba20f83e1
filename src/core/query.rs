use crate::core::errors::{Error, Result};
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Query
-------------------------------------------------------------------------------------------------*/

/// A host address or CIDR network to look up in the [Catalog](crate::Catalog). Text containing
/// a `/` separator is parsed as a network, anything else as a host address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Query {
    Address(IpAddr),
    Network {
        /// The query text, as given.
        cidr: String,
        network: IpNetwork,
    },
}

impl Query {
    pub fn is_network(&self) -> bool {
        matches!(self, Query::Network { .. })
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.contains('/') {
            let network = value.parse::<IpNetwork>().map_err(|error| {
                Error::Parse(format!("invalid CIDR network `{value}`: {error}"))
            })?;
            Ok(Query::Network {
                cidr: value.to_string(),
                network,
            })
        } else {
            let address = value
                .parse::<IpAddr>()
                .map_err(|error| Error::Parse(format!("invalid IP address `{value}`: {error}")))?;
            Ok(Query::Address(address))
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Address(address) => write!(f, "{address}"),
            Query::Network { cidr, .. } => write!(f, "{cidr}"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
