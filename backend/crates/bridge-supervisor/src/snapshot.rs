use crate::Phase;

use std::sync::atomic::{AtomicU64, Ordering};

const PORT_MASK: u64 = 0xFFFF;
const PHASE_SHIFT: u32 = 16;
const PHASE_MASK: u64 = 0xFF;
const GENERATION_SHIFT: u32 = 32;

/// Consistent view of the supervisor state at one completed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSnapshot {
    pub phase: Phase,
    /// Generation of the most recent successful start (0 = never started)
    pub generation: u32,
    /// Bound port, present only while `phase == Running`
    pub port: Option<u16>,
}

impl PortSnapshot {
    pub(crate) fn new(phase: Phase, generation: u32, port: u16) -> Self {
        let port = (phase == Phase::Running && port != 0).then_some(port);
        Self {
            phase,
            generation,
            port,
        }
    }

    fn pack(&self) -> u64 {
        ((self.generation as u64) << GENERATION_SHIFT)
            | ((self.phase as u64) << PHASE_SHIFT)
            | self.port.unwrap_or(0) as u64
    }

    fn unpack(bits: u64) -> Self {
        let phase = Phase::from_bits(((bits >> PHASE_SHIFT) & PHASE_MASK) as u8);
        let generation = (bits >> GENERATION_SHIFT) as u32;
        Self::new(phase, generation, (bits & PORT_MASK) as u16)
    }
}

/// Lock-free cell holding the latest [`PortSnapshot`].
///
/// All fields live in one word so readers never see a torn state.
#[derive(Debug)]
pub(crate) struct SnapshotCell(AtomicU64);

impl SnapshotCell {
    pub(crate) fn new() -> Self {
        Self(AtomicU64::new(PortSnapshot::new(Phase::Idle, 0, 0).pack()))
    }

    pub(crate) fn publish(&self, snapshot: PortSnapshot) {
        self.0.store(snapshot.pack(), Ordering::Release);
    }

    pub(crate) fn load(&self) -> PortSnapshot {
        PortSnapshot::unpack(self.0.load(Ordering::Acquire))
    }
}
