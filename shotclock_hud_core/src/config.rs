// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay configuration.

use crate::time::Duration;

/// Fallbacks and timing for an [`Overlay`](crate::overlay::Overlay).
///
/// Fallbacks apply only where the host never defined a value. Once a value
/// has been observed, the overlay keeps showing it even if the host later
/// undefines it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Client name shown when the host defines none.
    pub fallback_client_name: &'static str,
    /// Active-clock count before the host first publishes one.
    pub fallback_active_clocks: u32,
    /// Running-clock count before the host first publishes one.
    pub fallback_running_clocks: u32,
    /// Status label before any status source is observed.
    pub initial_status: &'static str,
    /// Period of the recurring timer render.
    pub refresh_interval: Duration,
}

impl OverlayConfig {
    /// The stock overlay: `"Unknown"` client, one active clock, none running,
    /// `"Disconnected"`, refreshed every second.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            fallback_client_name: "Unknown",
            fallback_active_clocks: 1,
            fallback_running_clocks: 0,
            initial_status: "Disconnected",
            refresh_interval: Duration::from_secs(1),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::standard()
    }
}
