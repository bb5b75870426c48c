//! Logging facilities for Horizon rich text.
//!
//! The converter is instrumented with the `tracing` crate. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_richtext=debug")
//!         .init();
//!
//!     let doc = horizon_richtext::convert("<b>hello</b>");
//! }
//! ```
//!
//! Malformed attribute values are reported at `debug`. Failures that make a
//! conversion fall back to an empty document are reported at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Public conversion entry points.
    pub const CONVERT: &str = "horizon_richtext::convert";
    /// Markup tokenizer and tag balancing.
    pub const MARKUP: &str = "horizon_richtext::markup";
    /// Style stack and span bookkeeping.
    pub const STACK: &str = "horizon_richtext::stack";
    /// Document assembly.
    pub const DOCUMENT: &str = "horizon_richtext::document";
}
