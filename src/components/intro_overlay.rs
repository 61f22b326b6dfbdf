//! Intro Overlay Component
//!
//! Runs the whole intro sequence: locks scrolling, walks the timeline
//! (status rotation, particle spawns, auto-advance), and handles every way
//! out of it - the timer, the skip button, or a click anywhere in the
//! overlay. All three funnel into the sequencer's idempotent advance, so
//! the never-cancelled timer losing the race is harmless.

use std::time::Duration;

use dioxus::prelude::*;
use overture_core::{
    particles, AdvanceTrigger, IntroConfig, Phase, SequenceAction, StatusRotation, Timeline,
};

use crate::components::{spawn_particle, ActiveParticle, ParticleField, SkipButton};
use crate::context::{get_skip_intro, use_sequencer};

/// Scripts for the webview side of the scroll lock. Suppressing the input
/// events covers keys and gestures; the overflow style covers scrollbar
/// dragging.
const BODY_SCROLL_LOCK: &str = "document.body.style.overflow = 'hidden'";
const BODY_SCROLL_RESTORE: &str = "document.body.style.overflow = 'auto'";

/// Optional chaining keeps a missing content container a silent no-op.
const SCROLL_TO_CONTENT: &str =
    "document.getElementById('main-content')?.scrollIntoView({behavior:'smooth',block:'start'})";

/// Inline custom properties feeding the stylesheet's sequence-dependent
/// timings: the loading bar fills over the full configured duration, and
/// the fade-out transition runs for the advance plan's fade time.
fn sequence_style(config: &IntroConfig, fade_out: Duration) -> String {
    format!(
        "--intro-duration: {}ms; --fade-out: {}ms",
        config.total_duration.as_millis(),
        fade_out.as_millis()
    )
}

/// Map a key to the legacy key code the scroll-lock policy speaks.
fn legacy_key_code(key: &Key) -> Option<u32> {
    match key {
        Key::Character(c) if c == " " => Some(32),
        Key::PageUp => Some(33),
        Key::PageDown => Some(34),
        Key::End => Some(35),
        Key::Home => Some(36),
        Key::ArrowLeft => Some(37),
        Key::ArrowUp => Some(38),
        Key::ArrowRight => Some(39),
        Key::ArrowDown => Some(40),
        _ => None,
    }
}

/// The full-viewport intro overlay.
///
/// Renders nothing once the outgoing transition has finished hiding it.
#[component]
pub fn IntroOverlay() -> Element {
    let mut sequencer = use_sequencer();
    let mut status: Signal<&'static str> = use_signal(|| StatusRotation::new().current());
    let particle_views: Signal<Vec<ActiveParticle>> = use_signal(Vec::new);
    let mut fading: Signal<bool> = use_signal(|| false);
    let mut hidden: Signal<bool> = use_signal(|| false);
    let mut fade_out_ms: Signal<u64> =
        use_signal(|| sequencer.peek().config().fade_out.as_millis() as u64);

    // One advance path for all three triggers. First caller gets the plan
    // and plays the outgoing transition; everyone else is a no-op.
    let advance = move |trigger: AdvanceTrigger| {
        let plan = sequencer.write().advance(trigger);
        let Some(plan) = plan else { return };
        document::eval(BODY_SCROLL_RESTORE);
        fade_out_ms.set(plan.fade_out.as_millis() as u64);
        spawn(async move {
            fading.set(true);
            tokio::time::sleep(plan.scroll_delay).await;
            document::eval(SCROLL_TO_CONTENT);
            tokio::time::sleep(plan.hide_delay).await;
            hidden.set(true);
        });
    };

    // Start the sequence once on mount and drive the timeline.
    use_effect(move || {
        if !sequencer.write().start() {
            return;
        }
        document::eval(BODY_SCROLL_LOCK);

        if get_skip_intro() {
            tracing::info!("bypassing intro (--skip-intro)");
            advance(AdvanceTrigger::SkipButton);
            return;
        }

        spawn(async move {
            let config = sequencer.peek().config().clone();
            let plan = particles::spawn_plan(&config);
            let mut rotation = StatusRotation::new();
            let mut timeline = Timeline::for_config(&config);
            let started = tokio::time::Instant::now();

            while let Some(due_at) = timeline.next_due() {
                let elapsed = started.elapsed();
                if due_at > elapsed {
                    tokio::time::sleep(due_at - elapsed).await;
                }
                for action in timeline.drain_due(started.elapsed()) {
                    match action {
                        SequenceAction::AdvanceStatus => {
                            if let Some(message) = rotation.advance() {
                                status.set(message);
                            }
                        }
                        SequenceAction::SpawnParticle(id) => {
                            if let Some(particle) = plan.iter().find(|p| p.id == id) {
                                spawn_particle(particle_views, particle.clone());
                            }
                        }
                        SequenceAction::AutoAdvance => advance(AdvanceTrigger::Timer),
                    }
                }
            }
        });
    });

    if hidden() {
        return rsx! {};
    }

    let phase = sequencer.read().phase();
    let active_class = if phase == Phase::Idle { "" } else { "intro-active" };
    let fade_class = if fading() { "fading" } else { "" };
    let timing_style = sequence_style(
        sequencer.read().config(),
        Duration::from_millis(fade_out_ms()),
    );

    rsx! {
        section {
            id: "intro",
            class: "intro-section {active_class} {fade_class}",
            style: timing_style,
            tabindex: "0",
            autofocus: true,

            // Click anywhere (outside the skip button) advances
            onclick: move |_| advance(AdvanceTrigger::IntroClick),

            // While locked, swallow everything that would scroll
            onkeydown: move |evt| {
                if let Some(code) = legacy_key_code(&evt.key()) {
                    if sequencer.peek().scroll().suppresses_key(code) {
                        evt.prevent_default();
                    }
                }
            },
            onwheel: move |evt| {
                if sequencer.peek().scroll().suppresses_gesture() {
                    evt.prevent_default();
                }
            },
            ontouchmove: move |evt| {
                if sequencer.peek().scroll().suppresses_gesture() {
                    evt.prevent_default();
                }
            },

            ParticleField { particles: particle_views }

            div { class: "intro-container",
                h1 { class: "intro-title", "Overture" }
                p { class: "loading-text", "{status}" }
                div { class: "loading-bar",
                    div { class: "loading-bar-fill" }
                }
            }

            SkipButton { on_skip: move |_| advance(AdvanceTrigger::SkipButton) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timings_follow_config_overrides() {
        let config = IntroConfig {
            total_duration: Duration::from_millis(3000),
            ..Default::default()
        };
        let style = sequence_style(&config, config.fade_out);
        assert!(style.contains("--intro-duration: 3000ms"));
        assert!(style.contains("--fade-out: 1000ms"));
    }

    #[test]
    fn test_fade_out_follows_advance_plan() {
        use overture_core::IntroSequencer;

        let config = IntroConfig {
            fade_out: Duration::from_millis(250),
            ..Default::default()
        };
        let mut seq = IntroSequencer::new(config.clone()).unwrap();
        seq.start();
        let plan = seq.advance(AdvanceTrigger::Timer).unwrap();

        let style = sequence_style(&config, plan.fade_out);
        assert!(style.contains("--fade-out: 250ms"));
    }
}
