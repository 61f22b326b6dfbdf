//! Intro sequencer state machine.
//!
//! `Idle → Playing → Advanced`, terminal. Three things can advance the
//! sequence (the auto-advance timer, the skip button, a click anywhere in
//! the intro) and they all funnel into the same idempotent [`advance`]:
//! the first trigger wins, the rest are silent no-ops.
//!
//! [`advance`]: IntroSequencer::advance

use std::time::Duration;

use crate::config::IntroConfig;
use crate::error::IntroResult;
use crate::scroll::ScrollLock;

/// Where the sequence currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not started yet
    #[default]
    Idle,
    /// Intro animation running, scrolling locked
    Playing,
    /// Transition done, main content revealed (terminal)
    Advanced,
}

impl Phase {
    /// Short label for logging and CSS class composition.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Playing => "playing",
            Phase::Advanced => "advanced",
        }
    }

    /// Whether the sequence can still be advanced.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Advanced)
    }
}

/// What caused an advance attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceTrigger {
    /// The fixed-duration auto-advance timer expired
    Timer,
    /// The skip control was activated
    SkipButton,
    /// A click landed in the intro region outside the skip control
    IntroClick,
}

impl AdvanceTrigger {
    pub fn label(&self) -> &'static str {
        match self {
            AdvanceTrigger::Timer => "timer",
            AdvanceTrigger::SkipButton => "skip-button",
            AdvanceTrigger::IntroClick => "intro-click",
        }
    }
}

/// Everything the front end needs to play the outgoing transition:
/// fade the intro, scroll to the content, hide the intro, and stagger the
/// content reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancePlan {
    /// Duration of the intro fade-out
    pub fade_out: Duration,
    /// Delay before scrolling the main content into view
    pub scroll_delay: Duration,
    /// Delay after the scroll until the intro is hidden entirely
    pub hide_delay: Duration,
    reveal_base: Duration,
    reveal_stagger: Duration,
}

impl AdvancePlan {
    fn from_config(config: &IntroConfig) -> Self {
        Self {
            fade_out: config.fade_out,
            scroll_delay: config.scroll_delay,
            hide_delay: config.hide_delay,
            reveal_base: config.reveal_base,
            reveal_stagger: config.reveal_stagger,
        }
    }

    /// Reveal delay for the content element at `index` in the fixed order.
    pub fn reveal_delay(&self, index: usize) -> Duration {
        self.reveal_base + self.reveal_stagger * index as u32
    }
}

/// The intro sequencer.
///
/// Owns the phase and the scroll lock; the front end owns the clock and
/// calls in when timers fire or input arrives.
#[derive(Debug, Clone)]
pub struct IntroSequencer {
    config: IntroConfig,
    phase: Phase,
    scroll: ScrollLock,
}

impl IntroSequencer {
    /// Build a sequencer over a validated config.
    pub fn new(config: IntroConfig) -> IntroResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phase: Phase::Idle,
            scroll: ScrollLock::new(),
        })
    }

    /// Sequencer over the shipped default timings; cannot fail.
    pub fn with_defaults() -> Self {
        Self {
            config: IntroConfig::default(),
            phase: Phase::Idle,
            scroll: ScrollLock::new(),
        }
    }

    pub fn config(&self) -> &IntroConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scroll(&self) -> &ScrollLock {
        &self.scroll
    }

    /// Begin the sequence. Idempotent: returns `true` only for the call
    /// that actually moved `Idle → Playing` and engaged the scroll lock.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Playing;
        self.scroll.lock();
        tracing::info!(
            duration_ms = self.config.total_duration.as_millis() as u64,
            "intro sequence started, scrolling locked"
        );
        true
    }

    /// Advance to the main content. First caller wins and gets the
    /// transition plan; every later call is a no-op returning `None`.
    ///
    /// The scroll lock is released unconditionally on the winning call, so
    /// scrolling is restored no matter which trigger fired first.
    pub fn advance(&mut self, trigger: AdvanceTrigger) -> Option<AdvancePlan> {
        if self.phase.is_terminal() {
            tracing::debug!(trigger = trigger.label(), "late advance ignored");
            return None;
        }
        self.phase = Phase::Advanced;
        self.scroll.unlock();
        tracing::info!(trigger = trigger.label(), "intro advanced, scrolling restored");
        Some(AdvancePlan::from_config(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> IntroSequencer {
        IntroSequencer::new(IntroConfig::default()).unwrap()
    }

    #[test]
    fn test_start_locks_scrolling_once() {
        let mut seq = sequencer();
        assert!(!seq.scroll().is_locked());
        assert!(seq.start());
        assert!(seq.scroll().is_locked());
        assert_eq!(seq.phase(), Phase::Playing);
        // Second start is a no-op
        assert!(!seq.start());
        assert_eq!(seq.phase(), Phase::Playing);
    }

    #[test]
    fn test_first_advance_wins() {
        let mut seq = sequencer();
        seq.start();
        assert!(seq.advance(AdvanceTrigger::SkipButton).is_some());
        // The un-cancelled timer fires later and loses
        assert!(seq.advance(AdvanceTrigger::Timer).is_none());
        assert!(seq.advance(AdvanceTrigger::IntroClick).is_none());
        assert_eq!(seq.phase(), Phase::Advanced);
    }

    #[test]
    fn test_advance_restores_scrolling() {
        let mut seq = sequencer();
        seq.start();
        assert!(seq.scroll().suppresses_gesture());
        seq.advance(AdvanceTrigger::Timer);
        assert!(!seq.scroll().is_locked());
        assert!(!seq.scroll().suppresses_gesture());
    }

    #[test]
    fn test_plan_carries_config_timings() {
        let mut seq = sequencer();
        seq.start();
        let plan = seq.advance(AdvanceTrigger::Timer).unwrap();
        assert_eq!(plan.fade_out, Duration::from_millis(1000));
        assert_eq!(plan.scroll_delay, Duration::from_millis(500));
        assert_eq!(plan.reveal_delay(0), Duration::from_millis(1000));
        assert_eq!(plan.reveal_delay(3), Duration::from_millis(1600));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = IntroConfig {
            total_duration: Duration::ZERO,
            ..Default::default()
        };
        assert!(IntroSequencer::new(config).is_err());
    }
}
