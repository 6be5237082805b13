//! Logger initialization (one global logger per test binary)

use bridge_config::LogLevel;
use bridge_host::logger;

use googletest::prelude::*;
use log::{LevelFilter, debug, info};

#[test]
fn given_log_file_when_initialized_then_records_at_level_are_written() {
    // Given
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bridge.log");

    // When
    logger::initialize(LogLevel(LevelFilter::Info), Some(path.clone()), true).unwrap();
    info!("host logger smoke line");
    debug!("filtered debug line");
    log::logger().flush();

    // Then
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_that!(contents, contains_substring("host logger smoke line"));
    assert_that!(contents, contains_substring("INFO"));
    assert_that!(contents, not(contains_substring("filtered debug line")));
}
