use dioxus::prelude::*;
use overture_core::IntroSequencer;

use crate::components::{IntroOverlay, MainContent};
use crate::context::get_intro_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the intro sequencer context. The intro
/// overlay sits above the main content until the sequence advances.
#[component]
pub fn App() -> Element {
    // The sequencer is plain state; a signal is all the sharing it needs.
    // Config was validated in main, but never let a bad one through to a
    // locked, unscrollable page.
    let sequencer: Signal<IntroSequencer> = use_signal(|| {
        IntroSequencer::new(get_intro_config()).unwrap_or_else(|e| {
            tracing::warn!("invalid intro config, using defaults: {}", e);
            IntroSequencer::with_defaults()
        })
    });

    use_context_provider(|| sequencer);

    rsx! {
        style { {GLOBAL_STYLES} }
        IntroOverlay {}
        MainContent {}
    }
}
