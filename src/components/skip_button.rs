//! Skip control for the intro.
//!
//! Fades in after a couple of seconds (CSS-driven) so first-time viewers
//! get a beat of the animation before the exit appears.

use dioxus::prelude::*;

use crate::theme::colors;

#[component]
pub fn SkipButton(on_skip: EventHandler<()>) -> Element {
    let background = colors::SKIP_BUTTON_BG;
    let border = colors::SKIP_BUTTON_BORDER;

    rsx! {
        button {
            class: "skip-button",
            style: "background: {background}; border-color: {border};",

            // The click-anywhere handler on the overlay must not see this
            // click; the button is its own trigger.
            onclick: move |evt| {
                evt.stop_propagation();
                on_skip.call(());
            },

            "Skip Intro"
        }
    }
}
