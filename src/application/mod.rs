//! Application Layer
//!
//! Use cases that orchestrate the flow between host ports and domain services.
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Run every registered check into flat rows
//! - `StatusUseCase` - Reduce check rows to one site verdict
//! - `InfoUseCase` - List and flatten debug information sections

pub mod check;
pub mod info;
pub mod status;

pub use check::{CheckOptions, CheckUseCase};
pub use info::{InfoOptions, InfoUseCase};
pub use status::{StatusReport, StatusUseCase};
