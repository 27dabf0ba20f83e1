/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod catalog;
pub mod client;
pub mod containment;
pub mod errors;
pub mod json;
pub mod prefix_record;
pub mod query;
pub mod services_result;
pub mod utils;
