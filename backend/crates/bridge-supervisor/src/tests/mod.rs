mod error;
mod snapshot;
