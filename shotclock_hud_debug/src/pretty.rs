// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use shotclock_hud_core::action::OverlayAction;
use shotclock_hud_core::overlay::RenderSource;
use shotclock_hud_core::time::HostTime;
use shotclock_hud_core::trace::{ActionEvent, MountEvent, RenderEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn source_name(source: RenderSource) -> &'static str {
    match source {
        RenderSource::Initial => "initial",
        RenderSource::Timer => "timer",
        RenderSource::Manual => "manual",
    }
}

fn button_name(action: Option<OverlayAction>) -> &'static str {
    action.map_or("-", OverlayAction::caption)
}

fn secs(t: HostTime) -> f64 {
    t.micros() as f64 / 1_000_000.0
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_mount(&mut self, e: &MountEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[mount] client={:?} interval={}ms at {:.3}s",
            e.client_name,
            e.refresh_interval.as_millis(),
            secs(e.at),
        );
    }

    fn on_render(&mut self, e: &RenderEvent<'_>) {
        let changed = if e.status_changed { "*" } else { "" };
        let _ = writeln!(
            self.writer,
            "[render] #{} {} status={}{changed} active={} running={} button={} at {:.3}s",
            e.render_index,
            source_name(e.source),
            e.status,
            e.active_clocks,
            e.running_clocks,
            button_name(e.action),
            secs(e.at),
        );
    }

    fn on_action(&mut self, e: &ActionEvent) {
        let _ = writeln!(
            self.writer,
            "[action] {} hooks={} at {:.3}s",
            e.action.caption(),
            e.outcome,
            secs(e.at),
        );
    }
}
