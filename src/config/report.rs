//! Report output configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Report output configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Attach the paginated HTML document to every report
    #[serde(default = "default_render_html")]
    pub render_html: bool,

    /// YAML file of benchmark records overlaid on the built-in table
    pub benchmarks_path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            render_html: default_render_html(),
            benchmarks_path: None,
        }
    }
}

fn default_render_html() -> bool {
    true
}
