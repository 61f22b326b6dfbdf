//! Timing configuration for the intro sequence.
//!
//! Every interval the sequence uses lives here so the desktop binary can
//! override them from the command line and tests can shrink them to
//! milliseconds.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{IntroError, IntroResult};

/// Total running time of the unskipped intro (ms)
pub const DEFAULT_TOTAL_DURATION_MS: u64 = 7000;

/// How long each status message stays up before the next one (ms)
pub const DEFAULT_STATUS_INTERVAL_MS: u64 = 1500;

/// How many decorative particles the intro spawns
pub const DEFAULT_PARTICLE_COUNT: u32 = 20;

/// Gap between consecutive particle spawns (ms)
pub const DEFAULT_SPAWN_STAGGER_MS: u64 = 200;

/// How long each particle lives before removing itself (ms)
pub const DEFAULT_PARTICLE_LIFETIME_MS: u64 = 2000;

/// Timing knobs for the whole intro sequence.
///
/// `Default` reproduces the shipped experience; [`IntroConfig::validate`]
/// guards against configs that would wedge the sequence (and with it the
/// scroll lock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Total duration before the auto-advance fires
    pub total_duration: Duration,
    /// Interval between status-text updates
    pub status_interval: Duration,
    /// Number of decorative particles to spawn
    pub particle_count: u32,
    /// Delay between consecutive particle spawns
    pub spawn_stagger: Duration,
    /// Lifetime of each particle before it removes itself
    pub particle_lifetime: Duration,
    /// Duration of the intro fade-out once advanced
    pub fade_out: Duration,
    /// Delay before the viewport scrolls to the main content
    pub scroll_delay: Duration,
    /// Delay after the scroll until the intro is hidden entirely
    pub hide_delay: Duration,
    /// Base delay before the first main-content element reveals
    pub reveal_base: Duration,
    /// Additional delay per main-content element
    pub reveal_stagger: Duration,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            total_duration: Duration::from_millis(DEFAULT_TOTAL_DURATION_MS),
            status_interval: Duration::from_millis(DEFAULT_STATUS_INTERVAL_MS),
            particle_count: DEFAULT_PARTICLE_COUNT,
            spawn_stagger: Duration::from_millis(DEFAULT_SPAWN_STAGGER_MS),
            particle_lifetime: Duration::from_millis(DEFAULT_PARTICLE_LIFETIME_MS),
            fade_out: Duration::from_millis(1000),
            scroll_delay: Duration::from_millis(500),
            hide_delay: Duration::from_millis(1000),
            reveal_base: Duration::from_millis(1000),
            reveal_stagger: Duration::from_millis(200),
        }
    }
}

impl IntroConfig {
    /// Check the config for values that would stall or wedge the sequence.
    ///
    /// A zero total duration means the auto-advance never arms sensibly; a
    /// zero particle lifetime means spawned particles never clean up.
    pub fn validate(&self) -> IntroResult<()> {
        if self.total_duration.is_zero() {
            return Err(IntroError::InvalidConfig(
                "total_duration is zero".to_string(),
            ));
        }
        if self.status_interval.is_zero() {
            return Err(IntroError::InvalidConfig(
                "status_interval is zero".to_string(),
            ));
        }
        if self.particle_count > 0 && self.particle_lifetime.is_zero() {
            return Err(IntroError::InvalidConfig(
                "particle_lifetime is zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Reveal delay for the main-content element at `index` in the fixed
    /// reveal order: `reveal_base + index * reveal_stagger`.
    pub fn reveal_delay(&self, index: usize) -> Duration {
        self.reveal_base + self.reveal_stagger * index as u32
    }
}
