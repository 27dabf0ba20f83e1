use crate::core::catalog::Catalog;
use crate::core::errors::{Error, Result};
use crate::core::prefix_record::PrefixRecord;
use crate::core::query::Query;
use crate::core::services_result::ServicesResult;
use crate::core::utils;
use ipnetwork::IpNetwork;
use log::{debug, trace, warn};
use std::net::IpAddr;

/*-------------------------------------------------------------------------------------------------
  Containment Engine
-------------------------------------------------------------------------------------------------*/

impl Catalog {
    /*-------------------------------------------------------------------------
      Membership
    -------------------------------------------------------------------------*/

    /// Check whether an IP address or CIDR network belongs to AWS. Text containing a `/` is
    /// checked with [Catalog::contains_network], anything else with
    /// [Catalog::contains_address].
    ///
    /// ```
    /// # use awsranges::{Catalog, PrefixRecord};
    /// let catalog: Catalog = vec![PrefixRecord::new("3.5.140.0/22", "ap-northeast-2", "EC2")].into();
    ///
    /// assert!(catalog.contains("3.5.140.1")?);
    /// assert!(catalog.contains("3.5.141.0/24")?);
    /// assert!(!catalog.contains("8.8.8.8")?);
    /// # Ok::<(), awsranges::Error>(())
    /// ```
    pub fn contains(&self, query: &str) -> Result<bool> {
        match query.parse::<Query>()? {
            Query::Address(address) => Ok(self.contains_address(address)),
            Query::Network { cidr, .. } => self.contains_network(&cidr),
        }
    }

    /// Returns `true` when any prefix in the catalog contains `address`. Records with a
    /// malformed network are skipped.
    pub fn contains_address(&self, address: IpAddr) -> bool {
        self.parsed_networks().any(|(record, network)| {
            let found = network.contains(address);
            if found {
                trace!("{address} is contained in {}", record.network);
            }
            found
        })
    }

    /// Returns `true` when `cidr` is published verbatim in the catalog, or when a catalog
    /// prefix encloses the queried network. Records with a malformed network are skipped; a
    /// malformed `cidr` is an [Error::Parse].
    pub fn contains_network(&self, cidr: &str) -> Result<bool> {
        let cidr = cidr.trim();
        let query = parse_query_network(cidr)?;

        let found = self.records.iter().any(|record| {
            if record.network == cidr {
                trace!("{cidr} is published in the catalog");
                return true;
            }
            match record.parse_network() {
                Ok(network) if utils::ipnetwork::same_family(&network, &query) => {
                    let found = utils::ipnetwork::is_supernet_of(network, query);
                    if found {
                        trace!("{cidr} is enclosed by {}", record.network);
                    }
                    found
                }
                Ok(_) => false,
                Err(error) => {
                    warn!("Skipping catalog record: {error}");
                    false
                }
            }
        });

        Ok(found)
    }

    /*-------------------------------------------------------------------------
      Service Attribution
    -------------------------------------------------------------------------*/

    /// Find the services and region owning an IP address or CIDR network.
    ///
    /// Every record is scanned. For an address query, every prefix containing the address
    /// matches. For a network query, a prefix matches only when its prefix length equals the
    /// query's and it contains the query's base address; a broader enclosing prefix does not
    /// attribute its services to the query.
    ///
    /// The reported region is the region of the last matching record. Nothing matching is not
    /// an error: the returned [ServicesResult] is empty.
    ///
    /// ```
    /// # use awsranges::{Catalog, PrefixRecord};
    /// let catalog: Catalog = vec![
    ///     PrefixRecord::new("13.32.0.0/15", "GLOBAL", "CLOUDFRONT"),
    ///     PrefixRecord::new("13.32.0.0/15", "GLOBAL", "AMAZON"),
    /// ]
    /// .into();
    ///
    /// let result = catalog.lookup_services("13.32.1.1")?;
    /// assert_eq!(result.region, "GLOBAL");
    /// assert_eq!(result.services, ["CLOUDFRONT", "AMAZON"]);
    ///
    /// assert!(catalog.lookup_services("13.32.0.0/16")?.is_empty());
    /// # Ok::<(), awsranges::Error>(())
    /// ```
    pub fn lookup_services(&self, query: &str) -> Result<ServicesResult> {
        let query = query.parse::<Query>()?;
        let mut result = ServicesResult::default();

        for record in self.matching_records(&query) {
            let record = record?;
            result.add_match(&record.region, &record.service);
        }

        debug!(
            "{query}: {} matching service(s) in region {:?}",
            result.services.len(),
            result.region
        );
        Ok(result)
    }

    /// Like [Catalog::lookup_services], but fails with [Error::InconsistentData] when the
    /// matching records do not all share one region.
    pub fn lookup_services_consistent(&self, query: &str) -> Result<ServicesResult> {
        let query = query.parse::<Query>()?;
        let mut result = ServicesResult::default();
        let mut regions: Vec<String> = Vec::new();

        for record in self.matching_records(&query) {
            let record = record?;
            if !regions.contains(&record.region) {
                regions.push(record.region.clone());
            }
            result.add_match(&record.region, &record.service);
        }

        if regions.len() > 1 {
            return Err(Error::InconsistentData {
                query: query.to_string(),
                regions,
            });
        }

        Ok(result)
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// Records paired with their parsed networks; malformed records are logged and skipped.
    fn parsed_networks(&self) -> impl Iterator<Item = (&PrefixRecord, IpNetwork)> + '_ {
        self.records
            .iter()
            .filter_map(|record| match record.parse_network() {
                Ok(network) => Some((record, network)),
                Err(error) => {
                    warn!("Skipping catalog record: {error}");
                    None
                }
            })
    }

    /// Records matching `query` for service attribution, in catalog order. A malformed record
    /// yields an error.
    fn matching_records<'c>(
        &'c self,
        query: &'c Query,
    ) -> impl Iterator<Item = Result<&'c PrefixRecord>> + 'c {
        self.records.iter().filter_map(move |record| {
            let network = match record.parse_network() {
                Ok(network) => network,
                Err(error) => return Some(Err(error)),
            };

            let matched = match query {
                Query::Address(address) => network.contains(*address),
                Query::Network {
                    network: query_network,
                    ..
                } => {
                    network.prefix() == query_network.prefix()
                        && network.contains(query_network.ip())
                }
            };

            if matched {
                trace!("{query} matches {} ({})", record.network, record.service);
                Some(Ok(record))
            } else {
                None
            }
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn parse_query_network(cidr: &str) -> Result<IpNetwork> {
    match cidr.parse::<Query>()? {
        Query::Network { network, .. } => Ok(network),
        Query::Address(_) => Err(Error::Parse(format!(
            "invalid CIDR network `{cidr}`: missing prefix length"
        ))),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
