//! UI Components for Overture.
//!
//! The intro overlay plus the main content it gives way to.

mod anchor_link;
mod intro_overlay;
mod main_content;
mod particle_field;
mod skip_button;

pub use anchor_link::AnchorLink;
pub use intro_overlay::IntroOverlay;
pub use main_content::MainContent;
pub use particle_field::{spawn_particle, ActiveParticle, ParticleField};
pub use skip_button::SkipButton;
