//! Scheduled-action list for the intro sequence.
//!
//! The original layering of nested timers collapses into one sorted list of
//! `(offset, action)` entries built up front. The front end owns the clock:
//! it sleeps until the next entry is due, drains everything due, and acts.
//! Nothing is cancelled on manual skip; the sequencer's idempotent advance
//! absorbs actions that arrive late.

use std::time::Duration;

use crate::config::IntroConfig;
use crate::status::StatusRotation;

/// One step of the intro sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceAction {
    /// Rotate the status text to its next message
    AdvanceStatus,
    /// Spawn the particle with this plan id
    SpawnParticle(u32),
    /// Fire the fixed-duration auto-advance
    AutoAdvance,
}

/// An action and the offset from sequence start at which it is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub at: Duration,
    pub action: SequenceAction,
}

/// The full intro schedule, sorted by offset, consumed front to back.
#[derive(Debug, Clone)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    cursor: usize,
}

impl Timeline {
    /// Build the complete schedule for one intro run: one status advance
    /// per remaining message at the fixed interval, one spawn per planned
    /// particle at its stagger offset, and the auto-advance at exactly the
    /// total duration.
    pub fn for_config(config: &IntroConfig) -> Self {
        let mut entries = Vec::new();

        let rotation = StatusRotation::new();
        for tick in 1..=rotation.remaining() as u32 {
            entries.push(TimelineEntry {
                at: config.status_interval * tick,
                action: SequenceAction::AdvanceStatus,
            });
        }

        for i in 0..config.particle_count {
            entries.push(TimelineEntry {
                at: config.spawn_stagger * i,
                action: SequenceAction::SpawnParticle(i),
            });
        }

        entries.push(TimelineEntry {
            at: config.total_duration,
            action: SequenceAction::AutoAdvance,
        });

        // Stable sort keeps the auto-advance after anything due at the
        // same instant
        entries.sort_by_key(|e| e.at);

        Self { entries, cursor: 0 }
    }

    /// Offset of the next pending entry, or `None` when exhausted.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.get(self.cursor).map(|e| e.at)
    }

    /// Consume and return every action due at or before `elapsed`, in
    /// schedule order.
    pub fn drain_due(&mut self, elapsed: Duration) -> Vec<SequenceAction> {
        let mut due = Vec::new();
        while let Some(entry) = self.entries.get(self.cursor) {
            if entry.at > elapsed {
                break;
            }
            due.push(entry.action);
            self.cursor += 1;
        }
        due
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    /// The full schedule, including already-consumed entries.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }
}
