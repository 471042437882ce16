//! Domain Ports (Interfaces)
//!
//! These traits define the boundary to the host system.
//! Infrastructure layer provides concrete implementations.

pub mod debug_data_provider;
pub mod test_registry;

pub use debug_data_provider::DebugDataProvider;
pub use test_registry::{test_function_name, TestFunction, TestRegistry};
