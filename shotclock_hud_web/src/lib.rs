// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for the shot-clock debug overlay.
//!
//! This crate connects [`shotclock_hud_core`] to a web page:
//!
//! - [`PageGlobals`]: reads `window.clientName`, `window.wsConnected`, and
//!   friends into an [`AmbientState`], and calls `ws.close()`, `connect()`,
//!   and `manualDisconnect()` for the overlay buttons.
//! - [`DomOverlay`]: the fixed bottom-left panel.
//! - [`IntervalLoop`]: `setInterval` tick source.
//! - [`OverlayWidget`]: all of the above wired together, with the
//!   `window.updateDebugInfo` render hook.
//! - [`ConsoleSink`]: trace output to the browser console.
//!
//! With the default `autostart` feature, loading the module mounts the
//! overlay with [`OverlayConfig::standard`] and
//! [`GlobalNames::standard`], renders once, and re-renders every second.
//!
//! Build with: `wasm-pack build --target web shotclock_hud_web`
//!
//! [`AmbientState`]: shotclock_hud_core::ambient::AmbientState
//! [`OverlayConfig::standard`]: shotclock_hud_core::config::OverlayConfig::standard

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod console;
mod globals;
mod interval;
mod presenter;
mod widget;

use alloc::boxed::Box;
use alloc::string::String;

use wasm_bindgen::prelude::*;

pub use console::ConsoleSink;
pub use globals::{GlobalNames, PageGlobals};
pub use interval::IntervalLoop;
pub use presenter::DomOverlay;
pub use widget::OverlayWidget;

use shotclock_hud_core::config::OverlayConfig;
use shotclock_hud_core::time::HostTime;

#[wasm_bindgen]
extern "C" {
    // `js_sys::Date::to_locale_string` insists on explicit locale and
    // options arguments; this binding calls it with neither.
    #[wasm_bindgen(js_name = Date)]
    type LocalDate;

    #[wasm_bindgen(constructor, js_class = "Date")]
    fn new() -> LocalDate;

    #[wasm_bindgen(method, js_class = "Date", js_name = toLocaleString)]
    fn to_locale_string(this: &LocalDate) -> String;
}

/// Returns the current host time from `performance.now()`.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(interval::performance_now())
}

/// Formats the current local date and time with the browser's default
/// locale, as `new Date().toLocaleString()` does.
#[must_use]
pub fn local_timestamp() -> String {
    LocalDate::new().to_locale_string()
}

/// Mounts the standard overlay on `window`, exposes the render hook, and
/// starts the one-second refresh.
///
/// The returned widget stops its timer when the last handle is dropped.
pub fn mount_standard() -> Result<OverlayWidget, JsValue> {
    let names = GlobalNames::standard();
    let globals = PageGlobals::from_window(names).ok_or_else(|| JsValue::from_str("no window"))?;
    let widget = OverlayWidget::mount(
        OverlayConfig::standard(),
        globals,
        Box::new(ConsoleSink::new()),
    )?;
    widget.expose_render_hook()?;
    widget.start();
    Ok(widget)
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let widget = mount_standard()?;
    // The overlay stays up for the rest of the page's life.
    core::mem::forget(widget);
    Ok(())
}
