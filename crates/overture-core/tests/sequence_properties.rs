//! Property-based tests for the intro sequencer
//!
//! Uses proptest to verify the idempotence and ordering invariants of the
//! sequence under arbitrary trigger interleavings.

use std::time::Duration;

use overture_core::{
    AdvanceTrigger, IntroConfig, IntroSequencer, SequenceAction, StatusRotation, Timeline,
    SCROLL_KEY_CODES, STATUS_MESSAGES,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any of the three advance triggers
fn trigger_strategy() -> impl Strategy<Value = AdvanceTrigger> {
    prop_oneof![
        Just(AdvanceTrigger::Timer),
        Just(AdvanceTrigger::SkipButton),
        Just(AdvanceTrigger::IntroClick),
    ]
}

/// Non-degenerate configs with timings from 1ms to 10s
fn config_strategy() -> impl Strategy<Value = IntroConfig> {
    (
        1u64..10_000,
        1u64..5_000,
        0u32..64,
        0u64..1_000,
        1u64..5_000,
    )
        .prop_map(
            |(total, interval, count, stagger, lifetime)| IntroConfig {
                total_duration: Duration::from_millis(total),
                status_interval: Duration::from_millis(interval),
                particle_count: count,
                spawn_stagger: Duration::from_millis(stagger),
                particle_lifetime: Duration::from_millis(lifetime),
                ..Default::default()
            },
        )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any non-empty mix of triggers produces exactly one advance plan and
    /// leaves scrolling enabled.
    #[test]
    fn advance_fires_exactly_once(
        triggers in prop::collection::vec(trigger_strategy(), 1..20),
    ) {
        let mut seq = IntroSequencer::new(IntroConfig::default()).unwrap();
        seq.start();

        let plans = triggers
            .iter()
            .filter(|t| seq.advance(**t).is_some())
            .count();
        prop_assert_eq!(plans, 1);
        prop_assert!(!seq.scroll().is_locked());
        prop_assert!(!seq.scroll().suppresses_gesture());
    }

    /// While playing, exactly the scroll key codes are suppressed; after
    /// advancing, none are.
    #[test]
    fn scroll_suppression_flips_on_advance(key_code in 0u32..256) {
        let mut seq = IntroSequencer::new(IntroConfig::default()).unwrap();
        seq.start();

        let expected = SCROLL_KEY_CODES.contains(&key_code);
        prop_assert_eq!(seq.scroll().suppresses_key(key_code), expected);

        seq.advance(AdvanceTrigger::Timer);
        prop_assert!(!seq.scroll().suppresses_key(key_code));
    }

    /// The timeline's auto-advance is never due before the total duration,
    /// whatever the rest of the config looks like.
    #[test]
    fn auto_advance_never_early(config in config_strategy()) {
        let mut timeline = Timeline::for_config(&config);

        if config.total_duration > Duration::from_millis(1) {
            let before = config.total_duration - Duration::from_millis(1);
            let early = timeline.drain_due(before);
            prop_assert!(!early.contains(&SequenceAction::AutoAdvance));
        }
        let due = timeline.drain_due(config.total_duration);
        prop_assert!(due.contains(&SequenceAction::AutoAdvance));
    }

    /// Draining in arbitrary time steps consumes every entry exactly once,
    /// in offset order.
    #[test]
    fn timeline_drains_in_order(
        config in config_strategy(),
        steps in prop::collection::vec(0u64..12_000, 1..30),
    ) {
        let mut timeline = Timeline::for_config(&config);
        let total = timeline.entries().len();
        let expected: Vec<SequenceAction> =
            timeline.entries().iter().map(|e| e.action).collect();

        let mut elapsed = Duration::ZERO;
        let mut seen = Vec::new();
        for step in steps {
            elapsed += Duration::from_millis(step);
            seen.extend(timeline.drain_due(elapsed));
        }
        seen.extend(timeline.drain_due(Duration::from_secs(60)));

        prop_assert_eq!(seen.len(), total);
        prop_assert_eq!(seen, expected);
        prop_assert!(timeline.is_finished());
    }

    /// The spawn plan always matches the configured particle count, with
    /// unique ids and in-viewport positions.
    #[test]
    fn spawn_plan_matches_config(config in config_strategy()) {
        let plan = overture_core::particles::spawn_plan(&config);
        prop_assert_eq!(plan.len(), config.particle_count as usize);

        let mut ids: Vec<u32> = plan.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), plan.len());

        for spawn in &plan {
            prop_assert_eq!(spawn.lifetime, config.particle_lifetime);
            prop_assert!((0.0..1.0).contains(&spawn.x));
            prop_assert!((0.0..1.0).contains(&spawn.y));
        }
    }

    /// However many times it is advanced, the rotation walks the message
    /// list once and parks.
    #[test]
    fn status_rotation_never_loops(advances in 0usize..32) {
        let mut rotation = StatusRotation::new();
        let mut seen = vec![rotation.current()];
        for _ in 0..advances {
            if let Some(msg) = rotation.advance() {
                seen.push(msg);
            }
        }
        let expect_len = (advances + 1).min(STATUS_MESSAGES.len());
        prop_assert_eq!(&seen[..], &STATUS_MESSAGES[..expect_len]);
    }
}
