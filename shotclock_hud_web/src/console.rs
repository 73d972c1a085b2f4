// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;

use wasm_bindgen::JsValue;
use web_sys::console;

use shotclock_hud_core::trace::{ActionEvent, MountEvent, RenderEvent, TraceSink};

/// Writes one `console.debug` line per overlay event.
///
/// Renders are only logged when the status label changes, so the console is
/// not flooded by the one-second timer. Set `verbose` to log every render.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Log every render, not just status changes.
    pub verbose: bool,
}

impl ConsoleSink {
    /// A sink that logs mounts, actions, and status changes.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }
}

fn log(line: &str) {
    console::debug_1(&JsValue::from_str(line));
}

impl TraceSink for ConsoleSink {
    fn on_mount(&mut self, e: &MountEvent<'_>) {
        log(&format!(
            "[overlay] mounted client={:?} interval={}ms",
            e.client_name,
            e.refresh_interval.as_millis(),
        ));
    }

    fn on_render(&mut self, e: &RenderEvent<'_>) {
        if !self.verbose && !e.status_changed {
            return;
        }
        log(&format!(
            "[overlay] render #{} ({:?}) status={} active={} running={}",
            e.render_index, e.source, e.status, e.active_clocks, e.running_clocks,
        ));
    }

    fn on_action(&mut self, e: &ActionEvent) {
        log(&format!(
            "[overlay] {} clicked, hooks={}",
            e.action.caption(),
            e.outcome,
        ));
    }
}
