//! Sequencer context provider for Overture.
//!
//! Provides the intro sequencer to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| sequencer);
//!
//! // In child components
//! let sequencer = use_sequencer();
//! let phase = sequencer.read().phase();
//! ```

use dioxus::prelude::*;
use overture_core::{IntroConfig, IntroSequencer};

/// Get the intro configuration built from the command line.
pub fn get_intro_config() -> IntroConfig {
    crate::get_intro_config()
}

/// Whether the intro should be bypassed (set via --skip-intro).
pub fn get_skip_intro() -> bool {
    crate::get_skip_intro()
}

/// Hook to access the intro sequencer from context.
///
/// Returns the shared signal; reading it inside a component subscribes
/// that component to phase changes.
///
/// # Example
///
/// ```ignore
/// let mut sequencer = use_sequencer();
///
/// // First trigger wins; later ones are silent no-ops
/// if let Some(plan) = sequencer.write().advance(AdvanceTrigger::SkipButton) {
///     // play the outgoing transition
/// }
/// ```
pub fn use_sequencer() -> Signal<IntroSequencer> {
    use_context::<Signal<IntroSequencer>>()
}
