use crate::core::errors::{Error, Result};
use ipnetwork::IpNetwork;

/*-------------------------------------------------------------------------------------------------
  Prefix Record
-------------------------------------------------------------------------------------------------*/

/// One published AWS address block. The same network may appear in several records, one per
/// `(region, service)` pair that uses it.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PrefixRecord {
    /// IPv4 or IPv6 prefix in CIDR notation, exactly as published.
    pub network: String,

    /// AWS region the prefix is associated with.
    pub region: String,

    /// AWS service that uses the prefix.
    pub service: String,
}

impl PrefixRecord {
    pub fn new(network: &str, region: &str, service: &str) -> Self {
        Self {
            network: network.to_string(),
            region: region.to_string(),
            service: service.to_string(),
        }
    }

    /// Parse the record's `network` text into an [IpNetwork].
    pub fn parse_network(&self) -> Result<IpNetwork> {
        self.network.parse::<IpNetwork>().map_err(|error| {
            Error::Parse(format!("invalid prefix `{}` in catalog: {error}", self.network))
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /*----------------------------------------------------------------------------------
      Test Helper Functions
    ----------------------------------------------------------------------------------*/

    pub(crate) fn test_ipv4_record() -> PrefixRecord {
        PrefixRecord::new("3.5.140.0/22", "ap-northeast-2", "EC2")
    }

    pub(crate) fn test_ipv6_record() -> PrefixRecord {
        PrefixRecord::new("2600:1f14::/35", "us-west-2", "EC2")
    }

    /*----------------------------------------------------------------------------------
      PrefixRecord
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_parse_network() {
        let ipv4: IpNetwork = "3.5.140.0/22".parse().unwrap();
        assert_eq!(test_ipv4_record().parse_network().unwrap(), ipv4);

        let ipv6: IpNetwork = "2600:1f14::/35".parse().unwrap();
        assert_eq!(test_ipv6_record().parse_network().unwrap(), ipv6);
    }

    #[test]
    fn test_parse_malformed_network() {
        let record = PrefixRecord {
            network: "3.5.140.0/33".to_string(),
            ..test_ipv4_record()
        };
        let error = record.parse_network().unwrap_err();
        assert!(matches!(error, Error::Parse(_)));
        assert!(error.to_string().contains("3.5.140.0/33"));
    }

    #[test]
    fn test_prefix_record_equality() {
        let record1 = test_ipv4_record();
        let record2 = test_ipv4_record();
        let record3 = PrefixRecord {
            region: "us-east-1".to_string(),
            ..test_ipv4_record()
        };
        let record4 = PrefixRecord {
            service: "AMAZON".to_string(),
            ..test_ipv4_record()
        };

        assert_eq!(record1, record2); // Equal records
        assert_ne!(record1, record3); // Different regions
        assert_ne!(record1, record4); // Different services
    }
}
