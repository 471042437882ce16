//! Domain entities
//!
//! Request-scoped data handed over by the host and the rows derived from it.

pub mod check;
pub mod info;
pub mod status;

pub use check::{
    Badge, CheckDefinition, CheckGroup, CheckResult, CheckStatus, CheckType, HostTestResult,
    TestRef, CHECK_RESULT_FIELDS,
};
pub use info::{
    DebugData, InfoField, InfoRow, InfoSection, SectionSummary, SizeEntry, SizesData,
    INFO_ROW_FIELDS, SECTION_SUMMARY_FIELDS,
};
pub use status::StatusCounts;
