// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` tick source.
//!
//! [`IntervalLoop`] invokes a callback on a fixed period using the browser's
//! `setInterval`. Each callback receives the [`HostTime`] of the tick, read
//! from `performance.now()`. The browser serializes timer callbacks with all
//! other page script, so a tick never overlaps a render triggered elsewhere.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use shotclock_hud_core::time::{Duration, HostTime};

// Direct global bindings instead of `web_sys::Window` methods, so ticks do
// not need to fetch (and unwrap) the Window object.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, millis: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

/// A `setInterval` loop that calls back with the tick's [`HostTime`].
///
/// Create with [`IntervalLoop::new`], then call [`start`](Self::start). The
/// timer keeps firing until [`stop`](Self::stop) is called or the loop is
/// dropped.
pub struct IntervalLoop {
    inner: Rc<IntervalInner>,
}

type IntervalClosure = Closure<dyn FnMut()>;

struct IntervalInner {
    /// The JS closure registered with `setInterval`.
    closure: RefCell<Option<IntervalClosure>>,

    /// The user-supplied callback.
    callback: RefCell<Box<dyn FnMut(HostTime)>>,

    /// Timer period.
    period: Duration,

    /// Whether the timer is currently armed.
    running: Cell<bool>,

    /// Handle returned by `setInterval`, used by `clearInterval`.
    interval_id: Cell<i32>,
}

impl IntervalLoop {
    /// Creates a loop that is **not yet running**.
    pub fn new(period: Duration, callback: impl FnMut(HostTime) + 'static) -> Self {
        Self {
            inner: Rc::new(IntervalInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                period,
                running: Cell::new(false),
                interval_id: Cell::new(0),
            }),
        }
    }

    /// Arms the timer.
    ///
    /// If already running, this is a no-op. The first tick fires one period
    /// from now, not immediately.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move || {
            if !inner.running.get() {
                return;
            }
            let now = HostTime::from_millis_f64(performance_now());
            // A callback that re-enters its own loop is skipped rather than
            // panicking on the borrow.
            if let Ok(mut callback) = inner.callback.try_borrow_mut() {
                callback(now);
            }
        }) as Box<dyn FnMut()>);

        let id = set_interval(closure.as_ref().unchecked_ref(), period_millis(self.inner.period));
        self.inner.interval_id.set(id);
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Disarms the timer. Can be restarted with [`start`](Self::start).
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        clear_interval(self.inner.interval_id.get());
    }
}

impl Drop for IntervalLoop {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for IntervalLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalLoop")
            .field("running", &self.inner.running.get())
            .field("period", &self.inner.period)
            .finish()
    }
}

/// `setInterval` delay for a period, clamped to `1..=i32::MAX` milliseconds.
fn period_millis(period: Duration) -> i32 {
    i32::try_from(period.as_millis()).unwrap_or(i32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_is_whole_millis() {
        assert_eq!(period_millis(Duration::from_secs(1)), 1000);
        assert_eq!(period_millis(Duration(1_500)), 1);
    }

    #[test]
    fn period_is_clamped() {
        assert_eq!(period_millis(Duration(0)), 1);
        assert_eq!(period_millis(Duration::from_millis(u64::MAX / 1000)), i32::MAX);
    }
}
