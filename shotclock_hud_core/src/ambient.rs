// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-owned state the overlay reads but never creates.
//!
//! The hosting page publishes a handful of values (client name, clock
//! counts, websocket status) and a few callbacks (close the socket,
//! reconnect, disconnect). [`AmbientState`] is the explicit snapshot of the
//! values; [`ConnectionHooks`] is the interface to the callbacks. Every field
//! and every hook is optional; absence is a normal condition, not an error.

use alloc::string::String;

/// A snapshot of the host-published values, taken at render time.
///
/// `None` means the host has not defined the value. The overlay applies its
/// own fallback and retained-value rules on top of this; see
/// [`Overlay`](crate::overlay::Overlay).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AmbientState {
    /// Label shown on the first line. Only read when the overlay is created.
    pub client_name: Option<String>,
    /// Number of clocks known to the page.
    pub active_clocks: Option<u32>,
    /// Number of clocks currently counting down.
    pub running_clocks: Option<u32>,
    /// Preferred connection-status source.
    pub ws_connected: Option<bool>,
    /// Fallback connection-status source, e.g. `"connecting"` or `"error"`.
    pub ws_status: Option<String>,
}

impl AmbientState {
    /// Creates a snapshot with nothing defined.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            client_name: None,
            active_clocks: None,
            running_clocks: None,
            ws_connected: None,
            ws_status: None,
        }
    }

    /// Sets the client name.
    #[must_use]
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Sets the active-clock count.
    #[must_use]
    pub fn with_active_clocks(mut self, count: u32) -> Self {
        self.active_clocks = Some(count);
        self
    }

    /// Sets the running-clock count.
    #[must_use]
    pub fn with_running_clocks(mut self, count: u32) -> Self {
        self.running_clocks = Some(count);
        self
    }

    /// Sets the boolean connection flag.
    #[must_use]
    pub fn with_connected(mut self, connected: bool) -> Self {
        self.ws_connected = Some(connected);
        self
    }

    /// Sets the string connection status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.ws_status = Some(status.into());
        self
    }
}

/// Optional host callbacks behind the overlay's action buttons.
///
/// Each method returns `true` if the host provided the hook and it was
/// invoked, `false` if the hook is absent. All methods default to absent, so
/// implement only the hooks the host actually has.
pub trait ConnectionHooks {
    /// Closes the live websocket handle.
    fn close_socket(&mut self) -> bool {
        false
    }

    /// Opens a new connection.
    fn connect(&mut self) -> bool {
        false
    }

    /// Tears the connection down at the user's request.
    fn manual_disconnect(&mut self) -> bool {
        false
    }
}

/// [`ConnectionHooks`] with every hook absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl ConnectionHooks for NoHooks {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_defines_nothing() {
        assert_eq!(AmbientState::new(), AmbientState::default());
        assert!(AmbientState::new().client_name.is_none());
    }

    #[test]
    fn builders_set_fields() {
        let s = AmbientState::new()
            .with_client_name("bench")
            .with_active_clocks(3)
            .with_running_clocks(2)
            .with_connected(true)
            .with_status("error");
        assert_eq!(s.client_name.as_deref(), Some("bench"));
        assert_eq!(s.active_clocks, Some(3));
        assert_eq!(s.running_clocks, Some(2));
        assert_eq!(s.ws_connected, Some(true));
        assert_eq!(s.ws_status.as_deref(), Some("error"));
    }

    #[test]
    fn no_hooks_reports_every_hook_absent() {
        let mut hooks = NoHooks;
        assert!(!hooks.close_socket());
        assert!(!hooks.connect());
        assert!(!hooks.manual_disconnect());
    }
}
