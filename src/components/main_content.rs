//! Main Content Component
//!
//! The page the intro gives way to. Every element in the fixed reveal
//! order carries its own transition delay, so once the sequence advances
//! the whole page cascades in top to bottom.

use dioxus::prelude::*;

use crate::components::AnchorLink;
use crate::context::{get_intro_config, use_sequencer};

/// Feature cards shown in the reveal cascade, in order.
const FEATURES: [(&str, &str); 3] = [
    (
        "Timed sequences",
        "A single schedule drives status text, particles, and the auto-advance.",
    ),
    (
        "Skippable by design",
        "Timer, button, or a click anywhere - the first trigger wins, the rest are no-ops.",
    ),
    (
        "Graceful exits",
        "Scrolling is always restored, whatever happens to the animation.",
    ),
];

#[component]
pub fn MainContent() -> Element {
    let sequencer = use_sequencer();
    let config = get_intro_config();

    let advanced_class = if sequencer.read().phase().is_terminal() {
        "advanced"
    } else {
        ""
    };

    // Position in the fixed reveal order determines each delay
    let reveal = |index: usize| {
        format!(
            "--reveal-delay: {}ms",
            config.reveal_delay(index).as_millis()
        )
    };

    rsx! {
        main { id: "main-content", class: "main-content {advanced_class}",

            section { id: "hero", class: "content-section",
                h2 { class: "reveal", style: reveal(0), "Welcome to Overture" }
                p { class: "reveal", style: reveal(1),
                    "A one-shot introductory sequence: a loading animation, a burst of "
                    "particles, and a staggered reveal of everything below it."
                }
            }

            section { id: "features", class: "content-section",
                h2 { class: "reveal", style: reveal(2), "Features" }
                div { class: "feature-grid",
                    for (i, (title, body)) in FEATURES.iter().enumerate() {
                        div {
                            key: "{title}",
                            class: "feature-card reveal",
                            style: reveal(3 + i),
                            h3 { class: "feature-title", "{title}" }
                            p { class: "feature-body", "{body}" }
                        }
                    }
                }
            }

            section { id: "about", class: "content-section",
                h2 { class: "reveal", style: reveal(6), "About" }
                p { class: "reveal", style: reveal(7),
                    "Overture runs entirely on one cooperative timeline. No state "
                    "survives a restart; every launch opens the same way."
                }
            }

            footer { class: "content-footer",
                nav { class: "footer-nav",
                    AnchorLink { href: "#hero", label: "Top" }
                    AnchorLink { href: "#features", label: "Features" }
                    AnchorLink { href: "#about", label: "About" }
                }
            }
        }
    }
}
