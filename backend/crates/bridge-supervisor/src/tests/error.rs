use crate::SupervisorError;

use std::io;
use std::panic::Location;

use error_location::ErrorLocation;

#[test]
fn test_only_shutdown_timeout_is_warning() {
    let timeout = SupervisorError::ShutdownTimeout {
        timeout_ms: 5000,
        location: ErrorLocation::from(Location::caller()),
    };
    let bind = SupervisorError::BindFailure {
        source: io::Error::new(io::ErrorKind::AddrInUse, "in use"),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(timeout.is_warning());
    assert!(!bind.is_warning());
}

#[test]
fn test_bind_failure_message_includes_source() {
    let error = SupervisorError::BindFailure {
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        location: ErrorLocation::from(Location::caller()),
    };

    let message = error.to_string();

    assert!(message.contains("Failed to bind"));
    assert!(message.contains("permission denied"));
}

#[test]
fn test_shutdown_timeout_message_includes_timeout() {
    let error = SupervisorError::ShutdownTimeout {
        timeout_ms: 1234,
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(error.to_string().contains("1234ms"));
    assert!(!error.recovery_hint().is_empty());
}
