// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window globals published by the hosting page.
//!
//! [`PageGlobals`] reads the page's globals into an [`AmbientState`] and
//! implements [`ConnectionHooks`] by looking the callbacks up on every call,
//! so the page may install, replace, or remove them at any time.

use alloc::string::String;

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;

use shotclock_hud_core::ambient::{AmbientState, ConnectionHooks};

#[wasm_bindgen]
extern "C" {
    /// The global `String()` conversion.
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// Names of the window properties the overlay reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalNames {
    /// String: label for the first line.
    pub client_name: &'static str,
    /// Number: active-clock count.
    pub active_clocks: &'static str,
    /// Number: running-clock count.
    pub running_clocks: &'static str,
    /// Boolean: preferred connection-status source.
    pub ws_connected: &'static str,
    /// String: fallback connection-status source.
    pub ws_status: &'static str,
    /// Object with a `close()` method: the live websocket.
    pub socket: &'static str,
    /// Function: opens a connection.
    pub connect: &'static str,
    /// Function: closes the connection on user request.
    pub manual_disconnect: &'static str,
    /// Written by the overlay: zero-argument render function.
    pub render_hook: &'static str,
}

impl GlobalNames {
    /// The names used by the shot-clock pages.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            client_name: "clientName",
            active_clocks: "activeClocksCount",
            running_clocks: "runningClocksCount",
            ws_connected: "wsConnected",
            ws_status: "wsStatus",
            socket: "ws",
            connect: "connect",
            manual_disconnect: "manualDisconnect",
            render_hook: "updateDebugInfo",
        }
    }
}

impl Default for GlobalNames {
    fn default() -> Self {
        Self::standard()
    }
}

/// Live view of a global object (normally `window`) under a set of
/// [`GlobalNames`].
#[derive(Clone, Debug)]
pub struct PageGlobals {
    global: JsValue,
    names: GlobalNames,
}

impl PageGlobals {
    /// Wraps an arbitrary global object.
    #[must_use]
    pub fn new(global: JsValue, names: GlobalNames) -> Self {
        Self { global, names }
    }

    /// Wraps `window`, if there is one.
    #[must_use]
    pub fn from_window(names: GlobalNames) -> Option<Self> {
        web_sys::window().map(|window| Self::new(window.into(), names))
    }

    /// The property names in use.
    #[must_use]
    pub fn names(&self) -> &GlobalNames {
        &self.names
    }

    /// Reads every value the overlay consumes.
    ///
    /// - client name: any truthy value, converted with `String()` if it is
    ///   not already a string;
    /// - counts: finite non-negative integers that fit in `u32`, anything
    ///   else reads as undefined;
    /// - connected flag: any defined value, by JS truthiness;
    /// - status string: any non-empty string.
    #[must_use]
    pub fn snapshot(&self) -> AmbientState {
        let connected = self.get(self.names.ws_connected);
        AmbientState {
            client_name: display_name(&self.get(self.names.client_name)),
            active_clocks: self
                .get(self.names.active_clocks)
                .as_f64()
                .and_then(count_from_f64),
            running_clocks: self
                .get(self.names.running_clocks)
                .as_f64()
                .and_then(count_from_f64),
            ws_connected: (!connected.is_undefined())
                .then(|| connected.as_bool().unwrap_or_else(|| connected.is_truthy())),
            ws_status: non_empty(self.get(self.names.ws_status).as_string()),
        }
    }

    /// Installs `value` under `name` on the global object.
    pub fn set(&self, name: &str, value: &JsValue) -> Result<(), JsValue> {
        Reflect::set(&self.global, &JsValue::from_str(name), value).map(drop)
    }

    fn get(&self, name: &str) -> JsValue {
        Reflect::get(&self.global, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
    }

    fn call_global(&self, name: &str) -> bool {
        call0(&self.global, &self.get(name))
    }
}

impl ConnectionHooks for PageGlobals {
    fn close_socket(&mut self) -> bool {
        let socket = self.get(self.names.socket);
        if !socket.is_truthy() {
            return false;
        }
        let close = Reflect::get(&socket, &JsValue::from_str("close")).unwrap_or(JsValue::UNDEFINED);
        call0(&socket, &close)
    }

    fn connect(&mut self) -> bool {
        self.call_global(self.names.connect)
    }

    fn manual_disconnect(&mut self) -> bool {
        self.call_global(self.names.manual_disconnect)
    }
}

/// Calls `f` with `this` if it is a function. Exceptions thrown by the page
/// are dropped; the hook still counts as called.
fn call0(this: &JsValue, f: &JsValue) -> bool {
    match f.dyn_ref::<Function>() {
        Some(f) => {
            let _ = f.call0(this);
            true
        }
        None => false,
    }
}

/// Text for a truthy page value; falsy values (including `""`) are unset.
fn display_name(value: &JsValue) -> Option<String> {
    if !value.is_truthy() {
        return None;
    }
    non_empty(Some(value.as_string().unwrap_or_else(|| js_string(value))))
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

/// Accepts a JS number as a clock count if it is a whole number in `u32`
/// range.
pub(crate) fn count_from_f64(n: f64) -> Option<u32> {
    if !n.is_finite() || n < 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "range checked above; the round trip rejects fractions"
    )]
    let count = n as u32;
    (f64::from(count) == n).then_some(count)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use js_sys::Object;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_test::*;

    use shotclock_hud_core::action::OverlayAction;
    use shotclock_hud_core::config::OverlayConfig;
    use shotclock_hud_core::overlay::Overlay;
    use shotclock_hud_core::status::StatusLabel;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    type Calls = Rc<RefCell<Vec<&'static str>>>;

    fn page() -> (Object, PageGlobals) {
        let global = Object::new();
        let globals = PageGlobals::new(global.clone().into(), GlobalNames::standard());
        (global, globals)
    }

    fn put(target: &Object, name: &str, value: &JsValue) {
        Reflect::set(target, &JsValue::from_str(name), value).unwrap();
    }

    fn recorder(calls: &Calls, name: &'static str) -> JsValue {
        let calls = Rc::clone(calls);
        Closure::wrap(Box::new(move || calls.borrow_mut().push(name)) as Box<dyn FnMut()>)
            .into_js_value()
    }

    #[wasm_bindgen_test]
    fn ws_connected_reads_by_truthiness() {
        let (global, globals) = page();
        assert_eq!(globals.snapshot().ws_connected, None);

        let cases: [(JsValue, bool); 5] = [
            (JsValue::NULL, false),
            (JsValue::from_f64(0.0), false),
            (JsValue::from_f64(1.0), true),
            (JsValue::from_str("yes"), true),
            (JsValue::FALSE, false),
        ];
        for (value, connected) in cases {
            put(&global, "wsConnected", &value);
            assert_eq!(globals.snapshot().ws_connected, Some(connected), "{value:?}");
        }
    }

    #[wasm_bindgen_test]
    fn null_flag_shows_disconnected_over_status_text() {
        let (global, globals) = page();
        put(&global, "wsConnected", &JsValue::NULL);
        put(&global, "wsStatus", &JsValue::from_str("connected"));

        let mut overlay = Overlay::new(OverlayConfig::standard(), &globals.snapshot());
        let view = overlay.render(&globals.snapshot(), "t");
        assert_eq!(view.status, StatusLabel::disconnected());
        assert_eq!(view.action, Some(OverlayAction::Reconnect));
    }

    #[wasm_bindgen_test]
    fn unusable_counts_keep_previous_values() {
        let (global, globals) = page();
        put(&global, "activeClocksCount", &JsValue::from_f64(4.0));
        put(&global, "runningClocksCount", &JsValue::from_f64(2.0));
        let mut overlay = Overlay::new(OverlayConfig::standard(), &globals.snapshot());
        overlay.render(&globals.snapshot(), "t");

        put(&global, "activeClocksCount", &JsValue::NULL);
        put(&global, "runningClocksCount", &JsValue::from_f64(2.5));
        let snapshot = globals.snapshot();
        assert_eq!(snapshot.active_clocks, None);
        assert_eq!(snapshot.running_clocks, None);

        let view = overlay.render(&snapshot, "t");
        assert_eq!(view.active_clocks, 4);
        assert_eq!(view.running_clocks, 2);
    }

    #[wasm_bindgen_test]
    fn client_name_converts_truthy_values() {
        let (global, globals) = page();
        put(&global, "clientName", &JsValue::from_f64(7.0));
        assert_eq!(globals.snapshot().client_name.as_deref(), Some("7"));

        put(&global, "clientName", &JsValue::from_f64(0.0));
        assert_eq!(globals.snapshot().client_name, None);

        put(&global, "clientName", &JsValue::from_str("display-1"));
        assert_eq!(globals.snapshot().client_name.as_deref(), Some("display-1"));
    }

    #[wasm_bindgen_test]
    fn reconnect_closes_socket_then_connects() {
        let (global, mut globals) = page();
        let calls = Calls::default();
        let socket = Object::new();
        put(&socket, "close", &recorder(&calls, "close"));
        put(&global, "ws", &socket);
        put(&global, "connect", &recorder(&calls, "connect"));
        put(&global, "manualDisconnect", &recorder(&calls, "disconnect"));

        let outcome = OverlayAction::Reconnect.perform(&mut globals);
        assert!(outcome.socket_closed && outcome.connect_called);
        assert!(!outcome.disconnect_called);
        assert_eq!(*calls.borrow(), ["close", "connect"]);
    }

    #[wasm_bindgen_test]
    fn reconnect_without_socket_close_still_connects() {
        let (global, mut globals) = page();
        let calls = Calls::default();
        put(&global, "ws", &Object::new());
        put(&global, "connect", &recorder(&calls, "connect"));

        let outcome = OverlayAction::Reconnect.perform(&mut globals);
        assert!(!outcome.socket_closed);
        assert!(outcome.connect_called);
        assert_eq!(*calls.borrow(), ["connect"]);
    }

    #[wasm_bindgen_test]
    fn disconnect_with_no_page_hook_is_inert() {
        let (_global, mut globals) = page();
        assert!(OverlayAction::Disconnect.perform(&mut globals).is_inert());
    }
}
