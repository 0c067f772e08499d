//! Report Renderer Port - Turns a finished report into a document.

use crate::domain::report::Report;

/// Port for rendering a report into a self-contained document string.
///
/// Rendering is pure string building and cannot fail.
pub trait ReportRenderer: Send + Sync {
    /// Renders the report.
    fn render(&self, report: &Report) -> String;

    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;
}
