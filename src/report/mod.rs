//! Report rendering module
//!
//! Turns an acquired version table into one self-contained HTML document per
//! series. The document embeds the raw data and recomputes classifications
//! in the browser, so a report keeps working when copied around on its own.

mod renderer;

pub use renderer::ReportRenderer;
