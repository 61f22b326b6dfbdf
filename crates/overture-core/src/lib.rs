//! Overture Core Library
//!
//! Timing, state, and input-suppression logic for a one-shot introductory
//! animation sequence. The desktop front end renders it; everything here is
//! plain data and plain state, fully testable without a UI.
//!
//! ## Overview
//!
//! On launch the intro locks scrolling, plays a loading animation (rotating
//! status text plus a burst of decorative particles), and arms a single
//! fixed-duration auto-advance. The user can skip early; all triggers
//! funnel into one idempotent advance, after which scrolling is restored
//! and the main content reveals in a staggered sequence.
//!
//! ## Quick Start
//!
//! ```
//! use overture_core::{AdvanceTrigger, IntroConfig, IntroSequencer, Timeline};
//!
//! let mut seq = IntroSequencer::new(IntroConfig::default()).unwrap();
//! seq.start();
//! assert!(seq.scroll().is_locked());
//!
//! let mut timeline = Timeline::for_config(seq.config());
//! // ...the front end sleeps between entries and acts on what drains...
//!
//! let plan = seq.advance(AdvanceTrigger::SkipButton).unwrap();
//! assert!(!seq.scroll().is_locked());
//! // The never-cancelled timer fires later and loses quietly
//! assert!(seq.advance(AdvanceTrigger::Timer).is_none());
//! # let _ = (plan, &mut timeline);
//! ```

pub mod anchor;
pub mod config;
pub mod error;
pub mod particles;
pub mod scroll;
pub mod sequencer;
pub mod status;
pub mod timeline;

// Re-exports
pub use anchor::AnchorAction;
pub use config::IntroConfig;
pub use error::{IntroError, IntroResult};
pub use particles::ParticleSpawn;
pub use scroll::{ScrollLock, SCROLL_KEY_CODES};
pub use sequencer::{AdvancePlan, AdvanceTrigger, IntroSequencer, Phase};
pub use status::{StatusRotation, STATUS_MESSAGES};
pub use timeline::{SequenceAction, Timeline, TimelineEntry};
