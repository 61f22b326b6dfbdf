//! Particle Field Component
//!
//! Decorative short-lived particles sprinkled over the intro. Each entry
//! removes itself after its lifetime; a resize re-rolls the positions of
//! whatever is still alive.

use dioxus::prelude::*;
use overture_core::particles::{random_position, ParticleSpawn};

use crate::theme::colors;

/// A particle currently on screen.
#[derive(Clone, PartialEq)]
pub struct ActiveParticle {
    pub id: u32,
    /// Viewport-fraction position
    pub x: f32,
    pub y: f32,
    pub lifetime_ms: u64,
}

/// Put a planned particle on screen and schedule its removal.
///
/// The removal task retains by id, so a particle leaves exactly once and
/// never reappears.
pub fn spawn_particle(mut views: Signal<Vec<ActiveParticle>>, plan: ParticleSpawn) {
    let entry = ActiveParticle {
        id: plan.id,
        x: plan.x,
        y: plan.y,
        lifetime_ms: plan.lifetime.as_millis() as u64,
    };

    let mut live = views();
    live.push(entry);
    views.set(live);

    spawn(async move {
        tokio::time::sleep(plan.lifetime).await;
        let mut live = views();
        live.retain(|p| p.id != plan.id);
        views.set(live);
    });
}

/// The particle host layer. Purely cosmetic; never intercepts input.
#[component]
pub fn ParticleField(mut particles: Signal<Vec<ActiveParticle>>) -> Element {
    rsx! {
        div {
            class: "particle-field",

            // Re-roll live particle positions when the viewport changes
            onresize: move |_| {
                let mut live = particles();
                for p in live.iter_mut() {
                    let (x, y) = random_position();
                    p.x = x;
                    p.y = y;
                }
                particles.set(live);
            },

            for p in particles() {
                {
                    let left = p.x * 100.0;
                    let top = p.y * 100.0;
                    let background = colors::PARTICLE;
                    rsx! {
                        div {
                            key: "{p.id}",
                            class: "particle",
                            style: "left: {left}%; top: {top}%; background: {background}; --particle-life: {p.lifetime_ms}ms",
                        }
                    }
                }
            }
        }
    }
}
