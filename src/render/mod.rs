//! Presentation layer: the view model as an HTML page.

pub mod html;

pub use html::render_page;
