use awsranges::{Catalog, ServicesResult};
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Catalog
--------------------------------------------------------------------------------------*/

pub fn catalog(catalog: &Catalog) {
    let count_prefixes = catalog.len();
    let count_regions = catalog.regions().len();
    let count_services = catalog.services().len();
    info!("Loaded {count_prefixes} AWS IP Prefix(es) across {count_regions} region(s) and {count_services} service(s)");
}

/*--------------------------------------------------------------------------------------
  Search Results
--------------------------------------------------------------------------------------*/

pub fn membership(query: &str, found: bool) {
    if found {
        info!("Found {query} in the AWS IP Ranges");
    } else {
        warn!("Did not find {query} in the AWS IP Ranges");
    }
}

pub fn services(query: &str, result: &ServicesResult) {
    if result.is_empty() {
        warn!("Did not find an AWS IP Prefix with the same mask length as or containing {query}");
    } else {
        let count_services = result.services.len();
        info!("Found {count_services} AWS service(s) for {query}");
    }
}
