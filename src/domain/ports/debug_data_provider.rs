//! Debug data port - the host's structured debug information.

use crate::domain::entities::{DebugData, SizesData};
use crate::error::SiteHealthResult;

/// Source of the host's debug information sections.
pub trait DebugDataProvider {
    /// All sections keyed by slug, in host order.
    fn debug_data(&self) -> SiteHealthResult<DebugData>;

    /// Directory sizes for the `wp-paths-sizes` section, if the host computed them.
    fn sizes(&self) -> SiteHealthResult<Option<SizesData>>;
}
