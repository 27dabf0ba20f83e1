//! Check whether an IP address or network belongs to AWS, and which services and region own it,
//! using the [AWS IP address ranges](https://docs.aws.amazon.com/vpc/latest/userguide/aws-ip-ranges.html)
//! document.
//!
//! ```no_run
//! // Load the AWS IP Ranges (from ${HOME}/.aws/ip-ranges.json when present)
//! let catalog = awsranges::get_catalog()?;
//!
//! // Is this address or network AWS?
//! assert!(catalog.contains("3.5.140.1")?);
//!
//! // Which services and region own it?
//! let result = catalog.lookup_services("3.5.140.1")?;
//! println!("{} in {}", result.services.join(", "), result.region);
//! # Ok::<(), awsranges::Error>(())
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::catalog::Catalog;
pub use crate::core::client::{
    get_catalog, load, Client, ClientBuilder, HttpConfig, AWS_IP_RANGES_URL,
};
pub use crate::core::errors::{Error, Result};
pub use crate::core::prefix_record::PrefixRecord;
pub use crate::core::query::Query;
pub use crate::core::services_result::ServicesResult;

// Re-export the ipnetwork crate used by the public API.
pub use ipnetwork;
