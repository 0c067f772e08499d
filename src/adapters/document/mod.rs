//! Document adapters - report renderers.
//!
//! - `HtmlSlideRenderer` - paginated single-file HTML slide document

mod html_renderer;

pub use html_renderer::HtmlSlideRenderer;
