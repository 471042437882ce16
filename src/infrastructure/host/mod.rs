//! Host adapters
//!
//! Implement the test registry and debug data ports on top of a snapshot the
//! host exports.

mod snapshot;
mod source;
mod test_table;

pub use snapshot::HostSnapshot;
pub use source::{SnapshotSource, STDIN_PATH};
pub use test_table::{TestFn, TestTable};
