// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay buttons and what activating them does.

use core::fmt;

use crate::ambient::ConnectionHooks;

/// A control the overlay may offer, depending on the status label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayAction {
    /// Close any live socket, then reconnect.
    Reconnect,
    /// Ask the host to disconnect.
    Disconnect,
}

/// Button styles as CSS `(property, value)` pairs.
const RECONNECT_STYLE: &[(&str, &str)] = &[
    ("margin-top", "5px"),
    ("font-size", "11px"),
    ("padding", "2px 5px"),
    ("background", "#555"),
    ("color", "white"),
    ("border", "none"),
    ("border-radius", "2px"),
    ("cursor", "pointer"),
];

const DISCONNECT_STYLE: &[(&str, &str)] = &[
    ("margin-top", "5px"),
    ("margin-left", "5px"),
    ("font-size", "11px"),
    ("padding", "2px 5px"),
    ("background", "#d32f2f"),
    ("color", "white"),
    ("border", "none"),
    ("border-radius", "2px"),
    ("cursor", "pointer"),
];

impl OverlayAction {
    /// Both actions, in the order their buttons are laid out.
    pub const ALL: [Self; 2] = [Self::Reconnect, Self::Disconnect];

    /// Button caption.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Reconnect => "Reconnect",
            Self::Disconnect => "Disconnect",
        }
    }

    /// Button style as CSS `(property, value)` pairs.
    #[must_use]
    pub const fn button_style(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Reconnect => RECONNECT_STYLE,
            Self::Disconnect => DISCONNECT_STYLE,
        }
    }

    /// Runs the action against the host hooks.
    ///
    /// Reconnect closes the socket (if the host has one) and then calls the
    /// connect hook (if any). Disconnect calls the manual-disconnect hook (if
    /// any). Missing hooks are skipped; this never fails.
    pub fn perform(self, hooks: &mut dyn ConnectionHooks) -> ActionOutcome {
        match self {
            Self::Reconnect => {
                let socket_closed = hooks.close_socket();
                let connect_called = hooks.connect();
                ActionOutcome {
                    socket_closed,
                    connect_called,
                    disconnect_called: false,
                }
            }
            Self::Disconnect => ActionOutcome {
                disconnect_called: hooks.manual_disconnect(),
                ..ActionOutcome::default()
            },
        }
    }
}

/// Which host hooks an [`OverlayAction::perform`] call actually ran.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActionOutcome {
    /// The websocket handle existed and was closed.
    pub socket_closed: bool,
    /// The connect hook existed and was called.
    pub connect_called: bool,
    /// The manual-disconnect hook existed and was called.
    pub disconnect_called: bool,
}

impl ActionOutcome {
    /// Returns `true` if no hook ran (the click was inert).
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        !self.socket_closed && !self.connect_called && !self.disconnect_called
    }
}

/// Lists the hooks that ran, in call order (`"close,connect"`), or `"none"`.
impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inert() {
            return f.write_str("none");
        }
        let mut first = true;
        for (ran, name) in [
            (self.socket_closed, "close"),
            (self.connect_called, "connect"),
            (self.disconnect_called, "disconnect"),
        ] {
            if ran {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::NoHooks;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    /// Records hook calls in order; a `false` field means the hook is absent.
    #[derive(Default)]
    struct ScriptedHooks {
        socket: bool,
        connect: bool,
        disconnect: bool,
        calls: Vec<&'static str>,
    }

    impl ConnectionHooks for ScriptedHooks {
        fn close_socket(&mut self) -> bool {
            if self.socket {
                self.calls.push("close");
            }
            self.socket
        }

        fn connect(&mut self) -> bool {
            if self.connect {
                self.calls.push("connect");
            }
            self.connect
        }

        fn manual_disconnect(&mut self) -> bool {
            if self.disconnect {
                self.calls.push("disconnect");
            }
            self.disconnect
        }
    }

    #[test]
    fn reconnect_closes_then_connects() {
        let mut hooks = ScriptedHooks {
            socket: true,
            connect: true,
            ..ScriptedHooks::default()
        };
        let outcome = OverlayAction::Reconnect.perform(&mut hooks);
        assert_eq!(hooks.calls, ["close", "connect"]);
        assert!(outcome.socket_closed);
        assert!(outcome.connect_called);
        assert!(!outcome.disconnect_called);
    }

    #[test]
    fn reconnect_with_socket_but_no_connect_still_closes() {
        let mut hooks = ScriptedHooks {
            socket: true,
            ..ScriptedHooks::default()
        };
        let outcome = OverlayAction::Reconnect.perform(&mut hooks);
        assert_eq!(hooks.calls, ["close"]);
        assert!(outcome.socket_closed);
        assert!(!outcome.connect_called);
    }

    #[test]
    fn reconnect_without_socket_still_connects() {
        let mut hooks = ScriptedHooks {
            connect: true,
            ..ScriptedHooks::default()
        };
        let outcome = OverlayAction::Reconnect.perform(&mut hooks);
        assert_eq!(hooks.calls, ["connect"]);
        assert!(!outcome.socket_closed);
    }

    #[test]
    fn disconnect_calls_only_manual_disconnect() {
        let mut hooks = ScriptedHooks {
            socket: true,
            connect: true,
            disconnect: true,
            ..ScriptedHooks::default()
        };
        let outcome = OverlayAction::Disconnect.perform(&mut hooks);
        assert_eq!(hooks.calls, ["disconnect"]);
        assert!(outcome.disconnect_called);
        assert!(!outcome.socket_closed);
    }

    #[test]
    fn missing_hooks_make_actions_inert() {
        for action in OverlayAction::ALL {
            assert!(action.perform(&mut NoHooks).is_inert(), "{action:?}");
        }
    }

    #[test]
    fn disconnect_button_is_red_and_offset() {
        let style = OverlayAction::Disconnect.button_style();
        assert!(style.contains(&("background", "#d32f2f")), "{style:?}");
        assert!(style.contains(&("margin-left", "5px")), "{style:?}");
        assert!(
            !OverlayAction::Reconnect
                .button_style()
                .iter()
                .any(|(k, _)| *k == "margin-left"),
            "reconnect button has no left margin"
        );
    }

    #[test]
    fn outcome_display_lists_hooks_in_call_order() {
        assert_eq!(ActionOutcome::default().to_string(), "none");
        let reconnect = ActionOutcome {
            socket_closed: true,
            connect_called: true,
            disconnect_called: false,
        };
        assert_eq!(reconnect.to_string(), "close,connect");
        let disconnect = ActionOutcome {
            disconnect_called: true,
            ..ActionOutcome::default()
        };
        assert_eq!(disconnect.to_string(), "disconnect");
    }
}
