// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps an owned copy of every
//! event, in arrival order, for later inspection or [export](crate::chrome).

use shotclock_hud_core::action::{ActionOutcome, OverlayAction};
use shotclock_hud_core::overlay::RenderSource;
use shotclock_hud_core::time::{Duration, HostTime};
use shotclock_hud_core::trace::{ActionEvent, MountEvent, RenderEvent, TraceSink};

/// An owned overlay trace event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// See [`MountEvent`].
    Mount {
        /// Host time of the mount.
        at: HostTime,
        /// Client name.
        client_name: String,
        /// Timer period.
        refresh_interval: Duration,
    },
    /// See [`RenderEvent`].
    Render {
        /// Render counter.
        render_index: u64,
        /// Why the render ran.
        source: RenderSource,
        /// Host time of the render.
        at: HostTime,
        /// Status label.
        status: String,
        /// Whether the label changed.
        status_changed: bool,
        /// Active-clock count.
        active_clocks: u32,
        /// Running-clock count.
        running_clocks: u32,
        /// Button shown.
        action: Option<OverlayAction>,
    },
    /// See [`ActionEvent`].
    Action {
        /// Which button.
        action: OverlayAction,
        /// Host time of the click.
        at: HostTime,
        /// Which hooks ran.
        outcome: ActionOutcome,
    },
}

impl RecordedEvent {
    /// Host time the event was recorded at.
    #[must_use]
    pub fn at(&self) -> HostTime {
        match self {
            Self::Mount { at, .. } | Self::Render { at, .. } | Self::Action { at, .. } => *at,
        }
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Number of renders recorded so far.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RecordedEvent::Render { .. }))
            .count()
    }
}

impl TraceSink for RecorderSink {
    fn on_mount(&mut self, e: &MountEvent<'_>) {
        self.events.push(RecordedEvent::Mount {
            at: e.at,
            client_name: e.client_name.to_owned(),
            refresh_interval: e.refresh_interval,
        });
    }

    fn on_render(&mut self, e: &RenderEvent<'_>) {
        self.events.push(RecordedEvent::Render {
            render_index: e.render_index,
            source: e.source,
            at: e.at,
            status: e.status.to_owned(),
            status_changed: e.status_changed,
            active_clocks: e.active_clocks,
            running_clocks: e.running_clocks,
            action: e.action,
        });
    }

    fn on_action(&mut self, e: &ActionEvent) {
        self.events.push(RecordedEvent::Action {
            action: e.action,
            at: e.at,
            outcome: e.outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_arrival_order() {
        let mut rec = RecorderSink::new();
        rec.on_mount(&MountEvent {
            at: HostTime(0),
            client_name: "bench",
            refresh_interval: Duration::from_secs(1),
        });
        rec.on_render(&RenderEvent {
            render_index: 1,
            source: RenderSource::Initial,
            at: HostTime(10),
            status: "Disconnected",
            status_changed: true,
            active_clocks: 1,
            running_clocks: 0,
            action: Some(OverlayAction::Reconnect),
        });
        rec.on_action(&ActionEvent {
            action: OverlayAction::Reconnect,
            at: HostTime(20),
            outcome: ActionOutcome::default(),
        });

        let events = rec.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], RecordedEvent::Mount { client_name, .. } if client_name == "bench"));
        assert!(matches!(&events[1], RecordedEvent::Render { status, .. } if status == "Disconnected"));
        assert!(matches!(events[2], RecordedEvent::Action { action: OverlayAction::Reconnect, .. }));
        assert_eq!(events[2].at(), HostTime(20));
        assert_eq!(rec.render_count(), 1);
    }

    #[test]
    fn empty_recorder() {
        let rec = RecorderSink::new();
        assert!(rec.events().is_empty());
        assert!(rec.into_events().is_empty());
    }
}
