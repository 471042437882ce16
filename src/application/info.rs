//! Info Use Case
//!
//! Lists debug information sections and flattens their fields into rows.

use tracing::debug;

use crate::domain::entities::{InfoRow, SectionSummary};
use crate::domain::ports::DebugDataProvider;
use crate::domain::services::{filter_private, flatten_all, flatten_section, list_sections};
use crate::error::{SiteHealthError, SiteHealthResult};

/// Options for the info operation
#[derive(Debug, Clone, Default)]
pub struct InfoOptions {
    /// Section slug, e.g. `wp-database`
    pub section: Option<String>,
    /// Every section, in host order (takes precedence over `section`)
    pub all: bool,
    /// Keep fields the host marks private
    pub include_private: bool,
}

impl InfoOptions {
    /// Non-empty section slug, if one was given.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref().filter(|s| !s.is_empty())
    }

    /// Fails with `MissingSection` when neither a section nor `all` was requested.
    pub fn validate(&self) -> SiteHealthResult<()> {
        if self.section().is_none() && !self.all {
            return Err(SiteHealthError::MissingSection);
        }
        Ok(())
    }
}

/// Info Use Case
pub struct InfoUseCase<'a, P: DebugDataProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: DebugDataProvider + ?Sized> InfoUseCase<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// One `{label, section}` row per section.
    pub fn sections(&self) -> SiteHealthResult<Vec<SectionSummary>> {
        Ok(list_sections(&self.provider.debug_data()?))
    }

    /// Field rows for the requested section(s).
    ///
    /// Fails with `MissingSection` before touching the host when neither a
    /// section nor `all` was requested.
    pub fn execute(&self, options: &InfoOptions) -> SiteHealthResult<Vec<InfoRow>> {
        options.validate()?;
        let section = options.section();

        let data = self.provider.debug_data()?;
        let sizes = self.provider.sizes()?;

        let rows = match section {
            _ if options.all => flatten_all(&data, sizes.as_ref()),
            Some(section) => {
                if !data.contains_key(section) {
                    debug!(section, "unknown info section");
                }
                flatten_section(&data, section, sizes.as_ref())
            }
            None => Vec::new(),
        };

        Ok(filter_private(rows, options.include_private))
    }
}
