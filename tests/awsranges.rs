use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  awsranges Binary Tests
-------------------------------------------------------------------------------------------------*/

// Nothing listens on port 1; any attempt to fetch fails.
const UNREACHABLE_URL: &str = "http://127.0.0.1:1/ip-ranges.json";

fn fixture_cache_file() -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "data", "ip-ranges.json"]
        .iter()
        .collect()
}

/// The awsranges command, reading the fixture cache file and never reaching the network.
fn awsranges() -> Command {
    let mut command = Command::cargo_bin("awsranges").unwrap();
    command
        .env_remove("AWSRANGES_USE_CACHE")
        .env("AWSRANGES_URL", UNREACHABLE_URL)
        .env("AWSRANGES_CONNECT_TIMEOUT", "2")
        .env("AWSRANGES_TIMEOUT", "5")
        .arg("--cache-file")
        .arg(fixture_cache_file());
    command
}

fn stdout_of(command: &mut Command) -> String {
    String::from_utf8(command.output().unwrap().stdout).unwrap()
}

/*--------------------------------------------------------------------------------------
  Version
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    Command::cargo_bin("awsranges")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Check IP
--------------------------------------------------------------------------------------*/

/*-----------------------------------------------------------------------------
  Check IP: IP Address
-----------------------------------------------------------------------------*/

#[test]
fn command_check_ip_address() {
    awsranges()
        .arg("check-ip")
        .arg("3.5.140.1")
        .assert()
        .success()
        .stdout("3.5.140.1 belongs to AWS\n");
}

#[test]
fn command_check_ip_address_not_found() {
    awsranges()
        .arg("check-ip")
        .arg("8.8.8.8")
        .assert()
        .failure()
        .code(1)
        .stdout("8.8.8.8 does not belong to AWS\n");
}

#[test]
fn command_check_ip_ipv6_address() {
    awsranges()
        .arg("check-ip")
        .arg("2600:1f14::1")
        .assert()
        .success();
}

/*-----------------------------------------------------------------------------
  Check IP: Network
-----------------------------------------------------------------------------*/

#[test]
fn command_check_ip_network() {
    awsranges()
        .arg("check-ip")
        .arg("13.32.0.0/16")
        .assert()
        .success()
        .stdout("13.32.0.0/16 belongs to AWS\n");
}

#[test]
fn command_check_ip_network_not_enclosed() {
    awsranges()
        .arg("check-ip")
        .arg("13.32.0.0/14")
        .assert()
        .failure()
        .code(1);
}

/*-----------------------------------------------------------------------------
  Check IP: Invalid Address
-----------------------------------------------------------------------------*/

#[test]
fn command_check_ip_invalid_address() {
    awsranges()
        .arg("check-ip")
        .arg("not-an-ip")
        .assert()
        .failure()
        .code(2);
}

/*--------------------------------------------------------------------------------------
  Check Services
--------------------------------------------------------------------------------------*/

#[test]
fn command_check_services_address() {
    let stdout = stdout_of(awsranges().arg("check-services").arg("13.32.1.1"));
    assert_eq!(
        stdout,
        "13.32.1.1 belongs to the service CLOUDFRONT, AMAZON in the GLOBAL region\n"
    );
}

#[test]
fn command_check_services_network() {
    awsranges()
        .arg("check-services")
        .arg("13.32.0.0/15")
        .assert()
        .success()
        .stdout("13.32.0.0/15 belongs to the service CLOUDFRONT, AMAZON in the GLOBAL region\n");
}

#[test]
fn command_check_services_network_mask_length_differs() {
    awsranges()
        .arg("check-services")
        .arg("13.32.0.0/16")
        .assert()
        .failure()
        .code(1)
        .stdout("13.32.0.0/16 does not belong to any AWS service\n");
}

#[test]
fn command_check_services_invalid_address() {
    awsranges()
        .arg("check-services")
        .arg("not-an-ip")
        .assert()
        .failure()
        .code(2);
}

/*--------------------------------------------------------------------------------------
  Load Errors
--------------------------------------------------------------------------------------*/

#[test]
fn command_no_cache_network_error() {
    awsranges()
        .arg("--no-cache")
        .arg("check-ip")
        .arg("3.5.140.1")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn command_corrupt_cache_file() {
    let scratch = tempfile::TempDir::new().unwrap();
    let cache_file = scratch.path().join("ip-ranges.json");
    fs::write(&cache_file, "not json").unwrap();

    Command::cargo_bin("awsranges")
        .unwrap()
        .env("AWSRANGES_URL", UNREACHABLE_URL)
        .arg("--cache-file")
        .arg(&cache_file)
        .arg("check-ip")
        .arg("3.5.140.1")
        .assert()
        .failure()
        .code(2);
}
