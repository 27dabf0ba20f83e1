use awsranges::ServicesResult;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Check IP
--------------------------------------------------------------------------------------*/

pub fn membership(query: &str, found: bool) -> String {
    if found {
        format!("{query} belongs to AWS")
    } else {
        format!("{query} does not belong to AWS")
    }
}

/*--------------------------------------------------------------------------------------
  Check Services
--------------------------------------------------------------------------------------*/

pub fn services(query: &str, result: &ServicesResult) -> String {
    if result.is_empty() {
        format!("{query} does not belong to any AWS service")
    } else {
        format!(
            "{query} belongs to the service {} in the {} region",
            result.services.join(", "),
            result.region
        )
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        assert_eq!(membership("3.5.140.1", true), "3.5.140.1 belongs to AWS");
        assert_eq!(membership("8.8.8.8", false), "8.8.8.8 does not belong to AWS");
    }

    #[test]
    fn test_services() {
        let result = ServicesResult {
            region: "GLOBAL".to_string(),
            services: vec!["CLOUDFRONT".to_string(), "AMAZON".to_string()],
        };
        assert_eq!(
            services("13.32.1.1", &result),
            "13.32.1.1 belongs to the service CLOUDFRONT, AMAZON in the GLOBAL region"
        );
        assert_eq!(
            services("8.8.8.8", &ServicesResult::default()),
            "8.8.8.8 does not belong to any AWS service"
        );
    }
}
