use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Supervisor
// =========================================================================

#[test]
#[serial]
fn given_zero_shutdown_timeout_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("BRIDGE_SHUTDOWN_TIMEOUT_MS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_shutdown_timeout_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("BRIDGE_SHUTDOWN_TIMEOUT_MS", "60001");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_shutdown_timeout_at_limit_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("BRIDGE_SHUTDOWN_TIMEOUT_MS", "60000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_abort_grace_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _grace = EnvGuard::set("BRIDGE_ABORT_GRACE_MS", "10001");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_millisecond_settings_when_durations_then_converted() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("BRIDGE_SHUTDOWN_TIMEOUT_MS", "1500");
    let _grace = EnvGuard::set("BRIDGE_ABORT_GRACE_MS", "250");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.supervisor.shutdown_timeout(),
        eq(Duration::from_millis(1500))
    );
    assert_that!(
        config.supervisor.abort_grace(),
        eq(Duration::from_millis(250))
    );
}
