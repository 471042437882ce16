//! Domain Services
//!
//! Pure logic over domain entities: no I/O, no host access beyond the ports.

mod aggregator;
mod markup;
mod normalizer;
mod section_flattener;

pub use aggregator::{aggregate, overall_status, verdict_token, GOOD_THRESHOLD_PERCENT};
pub use markup::strip_tags;
pub use normalizer::ResultNormalizer;
pub use section_flattener::{
    filter_private, flatten_all, flatten_section, list_sections, PATHS_SIZES_SECTION,
};
