// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay model and its render routine.
//!
//! [`Overlay`] owns the last-rendered counts and status label. Each call to
//! [`Overlay::render`] reads a fresh [`AmbientState`] and adopts every value
//! the host currently defines, keeping the retained field for every value it
//! does not. The timer path and the manual refresh path both go through
//! `render`; hosts tag the call with a [`RenderSource`] for tracing.

use alloc::string::{String, ToString};

use crate::ambient::AmbientState;
use crate::config::OverlayConfig;
use crate::status::StatusLabel;
use crate::view::OverlayView;

/// Why a render ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderSource {
    /// The immediate render performed when the overlay is mounted.
    Initial,
    /// A recurring timer tick.
    Timer,
    /// An out-of-band refresh requested by other page logic.
    Manual,
}

/// Component-owned overlay state.
#[derive(Clone, Debug)]
pub struct Overlay {
    config: OverlayConfig,
    client_name: String,
    active_clocks: u32,
    running_clocks: u32,
    status: StatusLabel,
    render_count: u64,
}

impl Overlay {
    /// Creates the overlay from the ambient state at mount time.
    ///
    /// The client name is read here and never again; an empty name counts as
    /// undefined. Counts are seeded from the ambient state or the configured
    /// fallbacks. The status starts at
    /// [`initial_status`](OverlayConfig::initial_status) and is first
    /// resolved by the initial render.
    #[must_use]
    pub fn new(config: OverlayConfig, initial: &AmbientState) -> Self {
        let client_name = initial
            .client_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(config.fallback_client_name)
            .to_string();
        Self {
            client_name,
            active_clocks: initial
                .active_clocks
                .unwrap_or(config.fallback_active_clocks),
            running_clocks: initial
                .running_clocks
                .unwrap_or(config.fallback_running_clocks),
            status: StatusLabel::new(config.initial_status),
            render_count: 0,
            config,
        }
    }

    /// Refreshes the retained fields from `ambient` and composes the view.
    ///
    /// `timestamp` is the host's local-time rendering of "now"; it is taken
    /// as-is. Never fails: every missing input has a retained or fallback
    /// value.
    pub fn render(&mut self, ambient: &AmbientState, timestamp: impl Into<String>) -> OverlayView {
        if let Some(active) = ambient.active_clocks {
            self.active_clocks = active;
        }
        if let Some(running) = ambient.running_clocks {
            self.running_clocks = running;
        }
        self.status = StatusLabel::resolve(ambient, &self.status);
        self.render_count += 1;

        OverlayView {
            client_name: self.client_name.clone(),
            status: self.status.clone(),
            active_clocks: self.active_clocks,
            running_clocks: self.running_clocks,
            action: self.status.offered_action(),
            timestamp: timestamp.into(),
        }
    }

    /// The configuration this overlay was created with.
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Client name fixed at creation.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Last active-clock count.
    #[must_use]
    pub fn active_clocks(&self) -> u32 {
        self.active_clocks
    }

    /// Last running-clock count.
    #[must_use]
    pub fn running_clocks(&self) -> u32 {
        self.running_clocks
    }

    /// Last status label.
    #[must_use]
    pub fn status(&self) -> &StatusLabel {
        &self.status
    }

    /// Number of renders performed so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }
}
