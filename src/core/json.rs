use crate::core::errors::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

/// Parse the raw bytes of an AWS IP Ranges document. Fields other than the prefix entries
/// (`syncToken`, `createDate`, `network_border_group`, ...) are ignored.
pub fn parse(json: &[u8]) -> Result<JsonIpRanges<'_>> {
    Ok(serde_json::from_slice(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  JSON IP Ranges
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonIpRanges<'j> {
    #[serde(borrow)]
    pub prefixes: Vec<JsonIpPrefix<'j>>,

    #[serde(borrow, default)]
    pub ipv6_prefixes: Vec<JsonIpv6Prefix<'j>>,
}

/*--------------------------------------------------------------------------------------
  JSON IP (IPv4) Prefix
--------------------------------------------------------------------------------------*/

// The prefix is kept as text; CIDR parsing happens at query time.
#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonIpPrefix<'j> {
    #[serde(borrow)]
    pub ip_prefix: Cow<'j, str>,
    #[serde(borrow)]
    pub region: Cow<'j, str>,
    #[serde(borrow)]
    pub service: Cow<'j, str>,
}

/*--------------------------------------------------------------------------------------
  JSON IPv6 Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonIpv6Prefix<'j> {
    #[serde(borrow)]
    pub ipv6_prefix: Cow<'j, str>,
    #[serde(borrow)]
    pub region: Cow<'j, str>,
    #[serde(borrow)]
    pub service: Cow<'j, str>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::Error;

    #[test]
    fn test_json_ip_ranges() {
        let aws_ip_ranges_test_json = r#"{
          "syncToken": "1640995200",
          "createDate": "2022-01-01-00-00-00",
          "prefixes": [
            {
              "ip_prefix": "3.5.140.0/22",
              "region": "ap-northeast-2",
              "network_border_group": "ap-northeast-2",
              "service": "AMAZON"
            }
          ],
          "ipv6_prefixes": [
            {
              "ipv6_prefix": "2600:1f14::/35",
              "region": "us-west-2",
              "network_border_group": "us-west-2",
              "service": "EC2"
            }
          ]
        }"#;

        let parsed_value = parse(aws_ip_ranges_test_json.as_bytes()).unwrap();

        let expected_value = JsonIpRanges {
            prefixes: vec![JsonIpPrefix {
                ip_prefix: Cow::Borrowed("3.5.140.0/22"),
                region: Cow::Borrowed("ap-northeast-2"),
                service: Cow::Borrowed("AMAZON"),
            }],
            ipv6_prefixes: vec![JsonIpv6Prefix {
                ipv6_prefix: Cow::Borrowed("2600:1f14::/35"),
                region: Cow::Borrowed("us-west-2"),
                service: Cow::Borrowed("EC2"),
            }],
        };

        assert_eq!(parsed_value, expected_value);
    }

    #[test]
    fn test_ipv6_prefixes_are_optional() {
        let json = br#"{"prefixes": [{"ip_prefix": "10.0.0.0/8", "region": "GLOBAL", "service": "AMAZON"}]}"#;
        let parsed_value = parse(json).unwrap();
        assert_eq!(parsed_value.prefixes.len(), 1);
        assert!(parsed_value.ipv6_prefixes.is_empty());
    }

    #[test]
    fn test_escaped_strings_are_accepted() {
        let json = br#"{"prefixes": [{"ip_prefix": "10.0.0.0\/8", "region": "GLOBAL", "service": "AMAZON"}]}"#;
        let parsed_value = parse(json).unwrap();
        assert_eq!(parsed_value.prefixes[0].ip_prefix, "10.0.0.0/8");
    }

    #[test]
    fn test_missing_prefixes_is_a_parse_error() {
        let result = parse(br#"{"syncToken": "1640995200"}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_missing_ip_prefix_is_a_parse_error() {
        let json = br#"{"prefixes": [{"region": "GLOBAL", "service": "AMAZON"}]}"#;
        assert!(matches!(parse(json), Err(Error::Parse(_))));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(parse(b"<html>503</html>"), Err(Error::Parse(_))));
    }
}
