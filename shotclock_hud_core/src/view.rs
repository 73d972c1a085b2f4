// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendered overlay contents.
//!
//! An [`OverlayView`] is what one render tick produces. Presenters turn it
//! into DOM nodes (or terminal text, via [`Display`](core::fmt::Display))
//! without making any decisions of their own.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::action::OverlayAction;
use crate::status::StatusLabel;

/// Panel style as CSS `(property, value)` pairs: a small, dark,
/// semi-transparent box pinned to the bottom-left corner above page content.
pub const PANEL_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "10px"),
    ("left", "10px"),
    ("font-size", "12px"),
    ("background", "rgba(0,0,0,0.7)"),
    ("color", "white"),
    ("padding", "5px"),
    ("border-radius", "3px"),
    ("font-family", "monospace"),
    ("z-index", "1000"),
];

/// One render tick's worth of overlay contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayView {
    /// Client name, fixed for the overlay's lifetime.
    pub client_name: String,
    /// Connection-status label.
    pub status: StatusLabel,
    /// Active-clock count.
    pub active_clocks: u32,
    /// Running-clock count.
    pub running_clocks: u32,
    /// The single button to show, if any.
    pub action: Option<OverlayAction>,
    /// Local date/time text, formatted by the host.
    pub timestamp: String,
}

impl OverlayView {
    /// The four labelled info lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Client: {}", self.client_name),
            format!("WS Status: {}", self.status),
            format!("Active Clocks: {}", self.active_clocks),
            format!("Running Clocks: {}", self.running_clocks),
        ]
    }

    /// The trailing timestamp line.
    #[must_use]
    pub fn time_line(&self) -> String {
        format!("Time: {}", self.timestamp)
    }

    /// Returns `true` if `action`'s button is part of this view.
    #[must_use]
    pub fn shows(&self, action: OverlayAction) -> bool {
        self.action == Some(action)
    }
}

impl fmt::Display for OverlayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        if let Some(action) = self.action {
            writeln!(f, "[{}]", action.caption())?;
        }
        write!(f, "{}", self.time_line())
    }
}
