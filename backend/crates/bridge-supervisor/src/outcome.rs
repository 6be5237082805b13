/// Successful result of [`Supervisor::start`](crate::Supervisor::start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new server instance was bound and is serving
    Started { port: u16, generation: u32 },
    /// A server was already running, nothing was created
    AlreadyRunning { port: u16, generation: u32 },
}

impl StartOutcome {
    pub fn port(&self) -> u16 {
        match self {
            Self::Started { port, .. } | Self::AlreadyRunning { port, .. } => *port,
        }
    }

    pub fn generation(&self) -> u32 {
        match self {
            Self::Started { generation, .. } | Self::AlreadyRunning { generation, .. } => {
                *generation
            }
        }
    }
}

/// Successful result of [`Supervisor::stop`](crate::Supervisor::stop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// The running instance was drained and released
    Stopped { port: u16, generation: u32 },
    /// No server was running
    AlreadyStopped,
}
