/*-------------------------------------------------------------------------------------------------
  Services Result
-------------------------------------------------------------------------------------------------*/

/// Region and services owning a queried address or network. An empty result (no region, no
/// services) means the query does not belong to AWS.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServicesResult {
    /// Region of the last matching prefix record.
    pub region: String,

    /// Services of the matching prefix records, in the order first seen, without duplicates.
    pub services: Vec<String>,
}

impl ServicesResult {
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub(crate) fn add_match(&mut self, region: &str, service: &str) {
        region.clone_into(&mut self.region);
        if !self.services.iter().any(|seen| seen == service) {
            self.services.push(service.to_string());
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ServicesResult::default();
        assert!(result.is_empty());
        assert_eq!(result.region, "");
    }

    #[test]
    fn test_add_match_keeps_first_seen_order_and_last_region() {
        let mut result = ServicesResult::default();
        result.add_match("us-east-1", "S3");
        result.add_match("us-east-1", "AMAZON");
        result.add_match("us-east-2", "S3");

        assert_eq!(result.services, ["S3", "AMAZON"]);
        assert_eq!(result.region, "us-east-2");
        assert!(!result.is_empty());
    }
}
