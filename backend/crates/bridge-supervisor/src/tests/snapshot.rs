use crate::snapshot::SnapshotCell;
use crate::{Phase, PortSnapshot};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn test_new_cell_is_idle_without_port() {
    let cell = SnapshotCell::new();

    let snapshot = cell.load();

    assert_that!(snapshot.phase, eq(Phase::Idle));
    assert_that!(snapshot.generation, eq(0));
    assert_that!(snapshot.port, none());
}

#[test]
fn test_running_snapshot_keeps_all_fields() {
    let cell = SnapshotCell::new();

    cell.publish(PortSnapshot::new(Phase::Running, 7, 54321));
    let snapshot = cell.load();

    assert_that!(snapshot.phase, eq(Phase::Running));
    assert_that!(snapshot.generation, eq(7));
    assert_that!(snapshot.port, some(eq(54321)));
}

#[test]
fn test_port_is_dropped_outside_running() {
    for phase in [Phase::Idle, Phase::Starting, Phase::Stopping] {
        let snapshot = PortSnapshot::new(phase, 3, 8081);
        assert_that!(snapshot.port, none());
    }
}

#[test]
fn test_max_generation_and_port_survive_packing() {
    let cell = SnapshotCell::new();

    cell.publish(PortSnapshot::new(Phase::Running, u32::MAX, u16::MAX));
    let snapshot = cell.load();

    assert_that!(snapshot.generation, eq(u32::MAX));
    assert_that!(snapshot.port, some(eq(u16::MAX)));
    assert_that!(snapshot.phase, eq(Phase::Running));
}

#[test]
fn test_phase_display_names() {
    assert_eq!(Phase::Idle.to_string(), "idle");
    assert_eq!(Phase::Starting.to_string(), "starting");
    assert_eq!(Phase::Running.to_string(), "running");
    assert_eq!(Phase::Stopping.to_string(), "stopping");
}
