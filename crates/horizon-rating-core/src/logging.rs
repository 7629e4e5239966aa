//! Logging facilities for Horizon Rating.
//!
//! Horizon Rating uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_rating_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_rating_core::signal";
    /// Rating control target.
    pub const CONTROL: &str = "horizon_rating::control";
    /// Rating engine target.
    pub const ENGINE: &str = "horizon_rating::engine";
}
