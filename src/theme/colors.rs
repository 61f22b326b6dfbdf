//! Colors applied through inline styles.
//!
//! The stylesheet in `styles.rs` owns the page palette; these constants
//! cover the elements the code styles directly (particles, skip control).

/// Soft white for the particle dots
pub const PARTICLE: &str = "rgba(255, 255, 255, 0.6)";

/// Frosted background for the skip control
pub const SKIP_BUTTON_BG: &str = "rgba(255, 255, 255, 0.1)";

/// Hairline border for the skip control
pub const SKIP_BUTTON_BORDER: &str = "rgba(255, 255, 255, 0.3)";
