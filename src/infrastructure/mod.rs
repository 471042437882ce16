//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O: reading snapshot files, stdin, and running the
//! host export command.

pub mod host;

pub use host::{HostSnapshot, SnapshotSource, TestTable};
