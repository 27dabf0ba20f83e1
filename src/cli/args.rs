use clap::{Parser, Subcommand};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about="Check IP addresses and networks against the AWS IP ranges.", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// URL of the AWS IP Ranges document
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Cache file for the AWS IP Ranges document [default: ${HOME}/.aws/ip-ranges.json]
    #[arg(long, global = true)]
    pub cache_file: Option<PathBuf>,

    /// Fetch the AWS IP Ranges even when a cache file exists
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check if an IP address or network belongs to AWS
    CheckIp {
        /// IP address or CIDR network
        address: String,
    },

    /// Check which AWS services and region an IP address or network belongs to
    CheckServices {
        /// IP address or CIDR network
        address: String,
    },
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
