// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connection-status label derivation.
//!
//! The host may publish a boolean `connected` flag, a free-form status
//! string, both, or neither. [`StatusLabel::resolve`] picks the label:
//!
//! 1. boolean flag present: `"Connected"` or `"Disconnected"`, whatever the
//!    string says;
//! 2. otherwise a non-empty status string, first character uppercased;
//! 3. otherwise the previous label is kept.

use alloc::string::{String, ToString};
use core::fmt;

use crate::action::OverlayAction;
use crate::ambient::AmbientState;

const CONNECTED: &str = "Connected";
const DISCONNECTED: &str = "Disconnected";
const ERROR: &str = "Error";

/// The connection-status text shown on the overlay.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StatusLabel(String);

impl StatusLabel {
    /// `"Connected"`.
    #[must_use]
    pub fn connected() -> Self {
        Self(CONNECTED.to_string())
    }

    /// `"Disconnected"`.
    #[must_use]
    pub fn disconnected() -> Self {
        Self(DISCONNECTED.to_string())
    }

    /// Wraps an arbitrary label verbatim.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Maps the boolean connection flag to a label.
    #[must_use]
    pub fn from_flag(connected: bool) -> Self {
        if connected {
            Self::connected()
        } else {
            Self::disconnected()
        }
    }

    /// Builds a label from a status string by uppercasing its first
    /// character only. The rest is kept as-is, so `"eRROR"` becomes
    /// `"ERROR"` and `"open socket"` becomes `"Open socket"`.
    ///
    /// Returns `None` for an empty string, which hosts treat as unset.
    #[must_use]
    pub fn from_status_text(status: &str) -> Option<Self> {
        let mut chars = status.chars();
        let first = chars.next()?;
        let mut label = String::with_capacity(status.len());
        label.extend(first.to_uppercase());
        label.push_str(chars.as_str());
        Some(Self(label))
    }

    /// Derives the label for this render from the ambient state, falling
    /// back to `previous` when no status source is defined.
    #[must_use]
    pub fn resolve(ambient: &AmbientState, previous: &Self) -> Self {
        if let Some(connected) = ambient.ws_connected {
            return Self::from_flag(connected);
        }
        ambient
            .ws_status
            .as_deref()
            .and_then(Self::from_status_text)
            .unwrap_or_else(|| previous.clone())
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for exactly `"Connected"`.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.0 == CONNECTED
    }

    /// The button offered for this label, if any.
    ///
    /// Exact, case-sensitive match: `"Disconnected"` and `"Error"` offer
    /// [`Reconnect`](OverlayAction::Reconnect), `"Connected"` offers
    /// [`Disconnect`](OverlayAction::Disconnect), anything else offers none.
    #[must_use]
    pub fn offered_action(&self) -> Option<OverlayAction> {
        match self.0.as_str() {
            DISCONNECTED | ERROR => Some(OverlayAction::Reconnect),
            CONNECTED => Some(OverlayAction::Disconnect),
            _ => None,
        }
    }
}

impl Default for StatusLabel {
    fn default() -> Self {
        Self::disconnected()
    }
}

impl fmt::Debug for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatusLabel({:?})", self.0)
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StatusLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
