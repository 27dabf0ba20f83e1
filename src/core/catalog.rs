use crate::core::errors::Result;
use crate::core::json;
use crate::core::prefix_record::PrefixRecord;
use log::debug;
use std::collections::BTreeSet;
use std::convert::From;
use std::iter::FromIterator;

/*-------------------------------------------------------------------------------------------------
  Catalog
-------------------------------------------------------------------------------------------------*/

/// The published AWS IP prefixes, in document order: the `prefixes` (IPv4) entries followed by
/// the `ipv6_prefixes` entries. Records are neither deduplicated nor indexed; queries scan the
/// records linearly (see [Catalog::contains_address], [Catalog::lookup_services]).
///
/// A [Catalog] is immutable once built and may be shared between threads.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    pub(crate) records: Vec<PrefixRecord>,
}

/*--------------------------------------------------------------------------------------
  Catalog Implementation
--------------------------------------------------------------------------------------*/

impl Catalog {
    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn records(&self) -> &[PrefixRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrefixRecord> {
        self.records.iter()
    }

    /// Sorted set of the regions present in the catalog.
    pub fn regions(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.region.as_str())
            .collect()
    }

    /// Sorted set of the services present in the catalog.
    pub fn services(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.service.as_str())
            .collect()
    }

    /*-------------------------------------------------------------------------
      Build From JSON
    -------------------------------------------------------------------------*/

    /// Build a [Catalog] from the raw bytes of an AWS IP Ranges document. The same bytes are
    /// written to the cache file, so a cached document parses to an identical catalog.
    pub fn from_json(json: &[u8]) -> Result<Catalog> {
        let json_ip_ranges = json::parse(json)?;

        let ipv4_records = json_ip_ranges.prefixes.iter().map(|json_ipv4_prefix| {
            PrefixRecord::new(
                &json_ipv4_prefix.ip_prefix,
                &json_ipv4_prefix.region,
                &json_ipv4_prefix.service,
            )
        });

        let ipv6_records = json_ip_ranges.ipv6_prefixes.iter().map(|json_ipv6_prefix| {
            PrefixRecord::new(
                &json_ipv6_prefix.ipv6_prefix,
                &json_ipv6_prefix.region,
                &json_ipv6_prefix.service,
            )
        });

        let catalog: Catalog = ipv4_records.chain(ipv6_records).collect();

        debug!(
            "Parsed {} IPv4 and {} IPv6 AWS IP prefixes",
            json_ip_ranges.prefixes.len(),
            json_ip_ranges.ipv6_prefixes.len()
        );

        Ok(catalog)
    }
}

impl From<Vec<PrefixRecord>> for Catalog {
    fn from(records: Vec<PrefixRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<PrefixRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = PrefixRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'c> IntoIterator for &'c Catalog {
    type Item = &'c PrefixRecord;
    type IntoIter = std::slice::Iter<'c, PrefixRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
