mod cli;

use awsranges::{Client, ClientBuilder, Query, Result};
use clap::Parser;
use log::error;
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

// Exit codes: found (0), not found (1), error (2).
fn main() -> ExitCode {
    let args = cli::Args::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
        .ok();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            error!("{error}");
            ExitCode::from(2)
        }
    }
}

/*--------------------------------------------------------------------------------------
  Run Command
--------------------------------------------------------------------------------------*/

fn run(args: &cli::Args) -> Result<bool> {
    // Reject a malformed address before loading the AWS IP Ranges.
    let address = match &args.command {
        cli::Command::CheckIp { address } | cli::Command::CheckServices { address } => address,
    };
    address.parse::<Query>()?;

    let catalog = build_client(args).load()?;
    cli::log::catalog(&catalog);

    match &args.command {
        cli::Command::CheckIp { address } => {
            let found = catalog.contains(address)?;
            cli::log::membership(address, found);
            println!("{}", cli::output::membership(address, found));
            Ok(found)
        }
        cli::Command::CheckServices { address } => {
            let result = catalog.lookup_services(address)?;
            cli::log::services(address, &result);
            println!("{}", cli::output::services(address, &result));
            Ok(!result.is_empty())
        }
    }
}

/*--------------------------------------------------------------------------------------
  Build Client from CLI Arguments
--------------------------------------------------------------------------------------*/

fn build_client(args: &cli::Args) -> Client {
    let mut builder = ClientBuilder::new();

    if let Some(url) = &args.url {
        builder.url(url);
    }
    if let Some(cache_file) = &args.cache_file {
        builder.cache_file(cache_file);
    }
    if args.no_cache {
        builder.use_cache(false);
    }

    builder.build()
}
