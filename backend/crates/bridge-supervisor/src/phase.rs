use std::fmt;

/// Lifecycle phase of the supervised server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    /// No server instance exists
    Idle = 0,
    /// A server is binding its listening socket
    Starting = 1,
    /// A server is listening and serving requests
    Running = 2,
    /// The running server is being drained and released
    Stopping = 3,
}

impl Phase {
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Phase::Starting,
            2 => Phase::Running,
            3 => Phase::Stopping,
            _ => Phase::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Starting => "starting",
            Phase::Running => "running",
            Phase::Stopping => "stopping",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
