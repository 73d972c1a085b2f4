// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the overlay.
//!
//! This module provides a [`TraceSink`] trait with one method per overlay
//! event. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::action::{ActionOutcome, OverlayAction};
use crate::overlay::RenderSource;
use crate::time::{Duration, HostTime};
use crate::view::OverlayView;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once when the overlay is attached to the page.
#[derive(Clone, Copy, Debug)]
pub struct MountEvent<'a> {
    /// Host time of the mount.
    pub at: HostTime,
    /// Client name the overlay settled on.
    pub client_name: &'a str,
    /// Timer period.
    pub refresh_interval: Duration,
}

/// Emitted after every render tick.
#[derive(Clone, Copy, Debug)]
pub struct RenderEvent<'a> {
    /// Monotonic render counter, starting at 1.
    pub render_index: u64,
    /// Why the render ran.
    pub source: RenderSource,
    /// Host time of the render.
    pub at: HostTime,
    /// Status label after the render.
    pub status: &'a str,
    /// Whether the label differs from the previous render's. Hosts report
    /// the first render as a change.
    pub status_changed: bool,
    /// Active-clock count after the render.
    pub active_clocks: u32,
    /// Running-clock count after the render.
    pub running_clocks: u32,
    /// Button shown after the render.
    pub action: Option<OverlayAction>,
}

impl<'a> RenderEvent<'a> {
    /// Builds the event for a freshly rendered view.
    #[must_use]
    pub fn new(
        view: &'a OverlayView,
        render_index: u64,
        source: RenderSource,
        at: HostTime,
        status_changed: bool,
    ) -> Self {
        Self {
            render_index,
            source,
            at,
            status: view.status.as_str(),
            status_changed,
            active_clocks: view.active_clocks,
            running_clocks: view.running_clocks,
            action: view.action,
        }
    }
}

/// Emitted when an overlay button is activated.
#[derive(Clone, Copy, Debug)]
pub struct ActionEvent {
    /// Which button.
    pub action: OverlayAction,
    /// Host time of the click.
    pub at: HostTime,
    /// Which host hooks ran.
    pub outcome: ActionOutcome,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the overlay.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once when the overlay is mounted.
    fn on_mount(&mut self, e: &MountEvent<'_>) {
        _ = e;
    }

    /// Called after each render tick.
    fn on_render(&mut self, e: &RenderEvent<'_>) {
        _ = e;
    }

    /// Called after a button has been activated.
    fn on_action(&mut self, e: &ActionEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`MountEvent`].
    #[inline]
    pub fn mount(&mut self, e: &MountEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mount(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RenderEvent`].
    #[inline]
    pub fn render(&mut self, e: &RenderEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_render(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ActionEvent`].
    #[inline]
    pub fn action(&mut self, e: &ActionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_action(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusLabel;
    use alloc::string::ToString;

    fn sample_view() -> OverlayView {
        OverlayView {
            client_name: "bench".to_string(),
            status: StatusLabel::new("Error"),
            active_clocks: 2,
            running_clocks: 1,
            action: Some(OverlayAction::Reconnect),
            timestamp: "now".to_string(),
        }
    }

    #[test]
    fn render_event_copies_view_fields() {
        let view = sample_view();
        let e = RenderEvent::new(&view, 3, RenderSource::Manual, HostTime(42), true);
        assert_eq!(e.render_index, 3);
        assert_eq!(e.source, RenderSource::Manual);
        assert_eq!(e.status, "Error");
        assert!(e.status_changed);
        assert_eq!(e.active_clocks, 2);
        assert_eq!(e.running_clocks, 1);
        assert_eq!(e.action, Some(OverlayAction::Reconnect));
    }

    #[test]
    fn noop_sink_compiles() {
        let view = sample_view();
        let mut sink = NoopSink;
        sink.on_mount(&MountEvent {
            at: HostTime(0),
            client_name: "bench",
            refresh_interval: Duration::from_secs(1),
        });
        sink.on_render(&RenderEvent::new(&view, 1, RenderSource::Initial, HostTime(0), true));
        sink.on_action(&ActionEvent {
            action: OverlayAction::Reconnect,
            at: HostTime(0),
            outcome: ActionOutcome::default(),
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let view = sample_view();
        let mut tracer = Tracer::none();
        tracer.render(&RenderEvent::new(&view, 1, RenderSource::Timer, HostTime(0), false));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            renders: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_render(&mut self, e: &RenderEvent<'_>) {
                self.renders.push(e.render_index);
            }
        }

        let view = sample_view();
        let mut sink = RecordingSink {
            renders: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.render(&RenderEvent::new(&view, 9, RenderSource::Timer, HostTime(0), false));
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.renders, &[9]);
    }
}
