//! Per-table view configuration.
//!
//! ```yaml
//! table_name: orders
//! page_size: 25
//! window_radius: 2
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paginate::DEFAULT_WINDOW_RADIUS;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Settings for one table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Name used as the export file prefix.
    pub table_name: String,
    /// Rows per page. Zero is raised to one.
    pub page_size: usize,
    /// Pages shown on each side of the current page in the page window.
    pub window_radius: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            table_name: "table".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            window_radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

impl ViewConfig {
    /// Creates a default configuration for the named table.
    pub fn named(table_name: impl Into<String>) -> Self {
        ViewConfig {
            table_name: table_name.into(),
            ..ViewConfig::default()
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn window_radius(mut self, radius: usize) -> Self {
        self.window_radius = radius;
        self
    }

    /// Parses a configuration from a YAML (or JSON) document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let mut config: ViewConfig = serde_yaml::from_str(source)?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }
}
